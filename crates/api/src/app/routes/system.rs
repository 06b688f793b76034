use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::context::CurrentUser;

/// Public liveness probe; the only route outside the guard.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Echo the authenticated identity the guard attached to the request.
pub async fn whoami(Extension(user): Extension<CurrentUser>) -> impl IntoResponse {
    let mut permissions: Vec<&str> = user
        .identity()
        .permissions
        .iter()
        .map(|p| p.as_str())
        .collect();
    permissions.sort_unstable();

    Json(serde_json::json!({
        "user_id": user.user_id().to_string(),
        "role_name": user.role_name(),
        "permissions": permissions,
    }))
}
