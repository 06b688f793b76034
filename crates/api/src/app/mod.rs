//! HTTP application wiring (axum router + guard composition).
//!
//! Layout:
//! - `routes/`: the routes this service owns (`/health`, `/whoami`)
//! - `errors.rs`: consistent JSON error responses
//! - this module: configuration + `build_app`

use std::sync::Arc;

use axum::{routing::get, Router};

use backoffice_auth::{Hs256TokenVerifier, IdentityResolver, UserDirectory};

use crate::middleware::{self, AuthState};
use crate::registry::RoutePermissions;

pub mod errors;
pub mod routes;

/// Process configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret bearer tokens are verified against.
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        Self { jwt_secret }
    }
}

/// Build the full router (public entrypoint used by `main.rs` and tests).
///
/// The guard is layered exactly once, over every route in `protected`;
/// `/health` is the only route mounted outside it.
pub fn build_app(
    config: &AuthConfig,
    directory: Arc<dyn UserDirectory>,
    protected: Router,
    permissions: RoutePermissions,
) -> Router {
    let state = AuthState {
        verifier: Arc::new(Hs256TokenVerifier::new(config.jwt_secret.as_bytes())),
        resolver: IdentityResolver::new(directory),
        routes: Arc::new(permissions),
    };

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected.layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth_guard,
        )))
}
