use std::sync::Arc;

use backoffice_api::app::{self, AuthConfig};
use backoffice_api::registry::RoutePermissions;
use backoffice_auth::{Permission, RoleRecord, UserRecord};
use backoffice_core::{RoleId, UserId};
use backoffice_infra::InMemoryUserDirectory;

#[tokio::main]
async fn main() {
    backoffice_observability::init();

    let config = AuthConfig::from_env();

    // Dev directory; deployment wiring swaps in the real user store.
    let directory = Arc::new(InMemoryUserDirectory::new());
    let admin = UserRecord {
        id: UserId::new(),
        email: "admin@example.com".to_string(),
        role: RoleRecord {
            id: RoleId::new(),
            name: "admin".to_string(),
            permissions: vec![Permission::new("users"), Permission::new("orders")],
        },
    };
    tracing::info!(user_id = %admin.id, "seeded dev admin user");
    directory.upsert(admin);

    // No entry for /whoami: authenticated-only.
    let permissions = RoutePermissions::builder().build();

    let app = app::build_app(&config, directory, app::routes::router(), permissions);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
