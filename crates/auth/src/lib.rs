//! `backoffice-auth` — request authentication and permission-gated
//! authorization core.
//!
//! This crate is intentionally decoupled from HTTP and storage: the guard in
//! the API layer drives it, and the user store is reached through the
//! [`UserDirectory`] port.

pub mod authorize;
pub mod claims;
pub mod directory;
pub mod error;
pub mod permissions;
pub mod resolver;
pub mod verifier;

pub use authorize::authorize;
pub use claims::{Subject, TokenClaims};
pub use directory::{DirectoryError, RoleRecord, UserDirectory, UserRecord};
pub use error::AuthError;
pub use permissions::Permission;
pub use resolver::{Identity, IdentityResolver};
pub use verifier::{Hs256TokenVerifier, TokenVerifier};
