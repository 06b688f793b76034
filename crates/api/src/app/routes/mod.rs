use axum::{routing::get, Router};

pub mod system;

/// Router for the endpoints this service owns.
///
/// Back-office resource routers (users, orders, …) are external
/// collaborators; the host binary merges them next to this one before the
/// guard is layered on.
pub fn router() -> Router {
    Router::new().route("/whoami", get(system::whoami))
}
