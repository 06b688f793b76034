use thiserror::Error;

/// Authentication/authorization failure taxonomy.
///
/// Every variant is terminal for the request it occurs in. The HTTP layer
/// maps each to a caller-visible response; nothing here reaches a handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No credential was presented.
    #[error("missing credential")]
    MissingCredential,

    /// The credential could not be decoded (bad scheme, bad encoding,
    /// unparseable claims).
    #[error("malformed credential")]
    MalformedCredential,

    /// Signature verification failed against the configured key.
    #[error("invalid signature")]
    InvalidSignature,

    /// The credential is past its validity window.
    #[error("credential expired")]
    Expired,

    /// The verified subject has no backing user record.
    ///
    /// Callers must not be able to distinguish this from a bad credential.
    #[error("unknown subject")]
    UnknownSubject,

    /// Authenticated, but the required permission is not granted.
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),

    /// The user directory could not be queried.
    #[error("user directory unavailable: {0}")]
    ResolverUnavailable(String),
}

impl AuthError {
    /// True for the variants that surface as "unauthenticated" (as opposed
    /// to forbidden or infrastructure failure).
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential
                | Self::MalformedCredential
                | Self::InvalidSignature
                | Self::Expired
                | Self::UnknownSubject
        )
    }
}
