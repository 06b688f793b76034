use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use backoffice_auth::{DirectoryError, RoleRecord, UserDirectory, UserRecord};
use backoffice_core::UserId;

/// In-memory user directory.
///
/// Intended for tests/dev. Edits made through [`Self::upsert`] or
/// [`Self::set_role`] are visible to the very next lookup, which is what the
/// guard's no-stale-cache behavior relies on in tests.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<UserId, UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user record.
    pub fn upsert(&self, user: UserRecord) {
        let mut users = self
            .users
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        users.insert(user.id, user);
    }

    /// Replace a user's role in place. No-op if the user does not exist.
    pub fn set_role(&self, id: UserId, role: RoleRecord) {
        let mut users = self
            .users
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(user) = users.get_mut(&id) {
            user.role = role;
        }
    }

    /// Delete a user record.
    pub fn remove(&self, id: UserId) {
        let mut users = self
            .users
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        users.remove(&id);
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_user_with_role(
        &self,
        id: UserId,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        let users = self
            .users
            .read()
            .map_err(|_| DirectoryError("user map poisoned".to_string()))?;
        Ok(users.get(&id).cloned())
    }
}
