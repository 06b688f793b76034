use std::sync::Arc;

use axum::{
    extract::{MatchedPath, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use backoffice_auth::{authorize, AuthError, IdentityResolver, TokenVerifier};

use crate::app::errors;
use crate::context::CurrentUser;
use crate::registry::RoutePermissions;

/// Everything the guard needs, wired once at startup and shared read-only
/// across concurrent requests.
#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn TokenVerifier>,
    pub resolver: IdentityResolver,
    pub routes: Arc<RoutePermissions>,
}

/// Request guard: extract credential, verify, resolve identity, authorize,
/// then dispatch.
///
/// Runs exactly once per request, ahead of every protected handler. Any
/// failure short-circuits to the mapped response; the handler never
/// executes.
pub async fn auth_guard(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer(req.headers()).map_err(errors::auth_error_response)?;

    let subject = state
        .verifier
        .verify(token, Utc::now())
        .map_err(errors::auth_error_response)?;

    let identity = state
        .resolver
        .resolve(&subject)
        .await
        .map_err(errors::auth_error_response)?;

    let required = req
        .extensions()
        .get::<MatchedPath>()
        .and_then(|path| state.routes.required(req.method(), path.as_str()));

    if let Err(err) = authorize(required, &identity) {
        tracing::debug!(user_id = %identity.user_id, error = %err, "request rejected");
        return Err(errors::auth_error_response(err));
    }

    req.extensions_mut().insert(CurrentUser::new(identity));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?;

    let header = header.to_str().map_err(|_| AuthError::MalformedCredential)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedCredential)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MalformedCredential);
    }

    Ok(token)
}
