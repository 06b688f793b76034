use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use backoffice_auth::AuthError;

/// Convert a guard failure into its caller-visible response.
///
/// Every unauthenticated variant maps to the same status and body: the
/// caller must not be able to tell an unknown subject from a bad
/// credential. Only `Forbidden` (403) and `ResolverUnavailable` (503) are
/// distinguishable.
pub fn auth_error_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::MissingCredential
        | AuthError::MalformedCredential
        | AuthError::InvalidSignature
        | AuthError::Expired
        | AuthError::UnknownSubject => {
            tracing::debug!(error = %err, "unauthenticated request");
            json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "unauthenticated")
        }
        AuthError::Forbidden(permission) => json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            format!("missing permission '{permission}'"),
        ),
        AuthError::ResolverUnavailable(detail) => {
            tracing::error!(detail = %detail, "user directory unavailable");
            json_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "resolver_unavailable",
                "identity resolution unavailable",
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
