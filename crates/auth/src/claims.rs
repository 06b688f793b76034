use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use backoffice_core::UserId;

/// Bearer-token claims as they appear on the wire.
///
/// `iat`/`exp` are RFC 7519 numeric dates (seconds since the Unix epoch).
/// Conversion to [`DateTime<Utc>`] happens at the verifier boundary so the
/// rest of the crate never sees raw integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user this token was issued to.
    pub sub: UserId,

    /// Issued-at, seconds since epoch.
    pub iat: i64,

    /// Expiration, seconds since epoch.
    pub exp: i64,
}

impl TokenClaims {
    /// Interpret the numeric dates. Out-of-range timestamps are treated as
    /// a malformed credential by the verifier.
    pub(crate) fn into_subject(self) -> Option<Subject> {
        let issued_at = Utc.timestamp_opt(self.iat, 0).single()?;
        let expires_at = Utc.timestamp_opt(self.exp, 0).single()?;

        Some(Subject {
            user_id: self.sub,
            issued_at,
            expires_at,
        })
    }
}

/// Verified claims for one request.
///
/// A subject is only produced by a [`crate::TokenVerifier`], lives for the
/// duration of the request, and is never persisted. It is valid while
/// `now < expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub user_id: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
