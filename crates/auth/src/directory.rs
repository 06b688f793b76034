use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use backoffice_core::{RoleId, UserId};

use crate::permissions::Permission;

/// A user record as returned by the directory, role attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub role: RoleRecord,
}

/// A role and the permission names it grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRecord {
    pub id: RoleId,
    pub name: String,
    pub permissions: Vec<Permission>,
}

/// Infrastructure failure while querying the directory (connectivity loss,
/// pool exhaustion). Missing users are `Ok(None)`, never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("directory query failed: {0}")]
pub struct DirectoryError(pub String);

/// Read-side port to the external user store.
///
/// The lookup may suspend (pooled connection, remote store), but it is
/// read-only: cancelling an in-flight call has no side effects.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up a user and their role by id.
    async fn find_user_with_role(&self, id: UserId)
        -> Result<Option<UserRecord>, DirectoryError>;
}

#[async_trait]
impl<S> UserDirectory for Arc<S>
where
    S: UserDirectory + ?Sized,
{
    async fn find_user_with_role(
        &self,
        id: UserId,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        (**self).find_user_with_role(id).await
    }
}
