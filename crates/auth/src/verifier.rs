use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use crate::claims::{Subject, TokenClaims};
use crate::error::AuthError;

/// Stateless credential verifier.
///
/// Implementations must be pure given `now`: no clock reads, no I/O. This
/// keeps expiry decisions deterministic and testable.
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` and extract its subject.
    ///
    /// A token is valid while `now < expires_at` (exclusive boundary: a
    /// token whose expiry equals `now` is already expired).
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Subject, AuthError>;
}

/// HS256 verifier over a process-wide shared secret.
pub struct Hs256TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256TokenVerifier {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify` against the injected `now`, not the
        // library's wall-clock read.
        validation.validate_exp = false;

        Self {
            key: DecodingKey::from_secret(secret.as_ref()),
            validation,
        }
    }
}

impl TokenVerifier for Hs256TokenVerifier {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Subject, AuthError> {
        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedCredential,
            })?;

        let subject = data
            .claims
            .into_subject()
            .ok_or(AuthError::MalformedCredential)?;

        if subject.expires_at <= now {
            return Err(AuthError::Expired);
        }

        Ok(subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_core::UserId;
    use chrono::{Duration, TimeZone};
    use jsonwebtoken::{EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn fixed_now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn mint(secret: &str, sub: UserId, iat: i64, exp: i64) -> String {
        let claims = TokenClaims { sub, iat, exp };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("failed to encode jwt")
    }

    #[test]
    fn valid_token_yields_subject() {
        let verifier = Hs256TokenVerifier::new(SECRET);
        let now = fixed_now();
        let sub = UserId::new();
        let token = mint(SECRET, sub, now.timestamp() - 60, now.timestamp() + 600);

        let subject = verifier.verify(&token, now).unwrap();
        assert_eq!(subject.user_id, sub);
        assert_eq!(subject.expires_at.timestamp(), now.timestamp() + 600);
    }

    #[test]
    fn garbage_is_malformed() {
        let verifier = Hs256TokenVerifier::new(SECRET);

        let err = verifier.verify("not-a-jwt", fixed_now()).unwrap_err();
        assert_eq!(err, AuthError::MalformedCredential);
    }

    #[test]
    fn wrong_key_is_invalid_signature() {
        let verifier = Hs256TokenVerifier::new(SECRET);
        let now = fixed_now();
        let token = mint(
            "another-secret",
            UserId::new(),
            now.timestamp(),
            now.timestamp() + 600,
        );

        let err = verifier.verify(&token, now).unwrap_err();
        assert_eq!(err, AuthError::InvalidSignature);
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let verifier = Hs256TokenVerifier::new(SECRET);
        let now = fixed_now();
        let token = mint(
            SECRET,
            UserId::new(),
            now.timestamp() - 600,
            now.timestamp(),
        );

        // exp == now: already expired.
        let err = verifier.verify(&token, now).unwrap_err();
        assert_eq!(err, AuthError::Expired);

        // One microsecond before expiry: still valid.
        let just_before = now - Duration::microseconds(1);
        assert!(verifier.verify(&token, just_before).is_ok());
    }

    #[test]
    fn verification_is_deterministic_for_equal_instants() {
        let verifier = Hs256TokenVerifier::new(SECRET);
        let now = fixed_now();
        let token = mint(SECRET, UserId::new(), now.timestamp(), now.timestamp() + 600);

        let first = verifier.verify(&token, now).unwrap();
        let second = verifier.verify(&token, now + Duration::seconds(10)).unwrap();
        assert_eq!(first, second);
    }
}
