use backoffice_auth::Identity;
use backoffice_core::UserId;

/// Authenticated caller context for a request.
///
/// Inserted into the request extensions by the auth guard after a
/// successful resolve + authorize; read-only for the rest of the request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    identity: Identity,
}

impl CurrentUser {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn user_id(&self) -> UserId {
        self.identity.user_id
    }

    pub fn role_name(&self) -> &str {
        &self.identity.role_name
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}
