use std::collections::HashSet;
use std::sync::Arc;

use backoffice_core::{RoleId, UserId};

use crate::claims::Subject;
use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::permissions::Permission;

/// The resolved caller for the duration of one request.
///
/// Constructed once per request by the [`IdentityResolver`], attached to the
/// request context by the guard, and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub role_id: RoleId,
    pub role_name: String,
    pub permissions: HashSet<Permission>,
}

impl Identity {
    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }
}

/// Resolves verified subjects to identities via the user directory.
///
/// Resolution is fresh on every call, with no caching across requests. A
/// role edit is visible on the caller's next request, so revocation never
/// races a still-valid token.
#[derive(Clone)]
pub struct IdentityResolver {
    directory: Arc<dyn UserDirectory>,
}

impl IdentityResolver {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    pub async fn resolve(&self, subject: &Subject) -> Result<Identity, AuthError> {
        let record = self
            .directory
            .find_user_with_role(subject.user_id)
            .await
            .map_err(|e| {
                tracing::error!(user_id = %subject.user_id, error = %e, "user directory lookup failed");
                AuthError::ResolverUnavailable(e.to_string())
            })?;

        let Some(user) = record else {
            // Covers deleted/deactivated accounts: the record does not resolve.
            return Err(AuthError::UnknownSubject);
        };

        // The single place role permissions are flattened into the identity.
        let permissions: HashSet<Permission> = user.role.permissions.into_iter().collect();

        Ok(Identity {
            user_id: user.id,
            role_id: user.role.id,
            role_name: user.role.name,
            permissions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{DirectoryError, RoleRecord, UserRecord};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    struct MapDirectory {
        users: HashMap<UserId, UserRecord>,
    }

    #[async_trait]
    impl UserDirectory for MapDirectory {
        async fn find_user_with_role(
            &self,
            id: UserId,
        ) -> Result<Option<UserRecord>, DirectoryError> {
            Ok(self.users.get(&id).cloned())
        }
    }

    struct DownDirectory;

    #[async_trait]
    impl UserDirectory for DownDirectory {
        async fn find_user_with_role(
            &self,
            _id: UserId,
        ) -> Result<Option<UserRecord>, DirectoryError> {
            Err(DirectoryError("connection refused".to_string()))
        }
    }

    fn subject_for(user_id: UserId) -> Subject {
        Subject {
            user_id,
            issued_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            expires_at: Utc.timestamp_opt(1_700_000_600, 0).unwrap(),
        }
    }

    fn user_with_permissions(id: UserId, names: &[&'static str]) -> UserRecord {
        UserRecord {
            id,
            email: "staff@example.com".to_string(),
            role: RoleRecord {
                id: RoleId::new(),
                name: "manager".to_string(),
                permissions: names.iter().map(|n| Permission::new(*n)).collect(),
            },
        }
    }

    #[tokio::test]
    async fn resolves_identity_with_flattened_permissions() {
        let user_id = UserId::new();
        let directory = MapDirectory {
            users: HashMap::from([(user_id, user_with_permissions(user_id, &["users", "orders"]))]),
        };

        let resolver = IdentityResolver::new(Arc::new(directory));
        let identity = resolver.resolve(&subject_for(user_id)).await.unwrap();

        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.role_name, "manager");
        assert!(identity.has_permission(&Permission::new("users")));
        assert!(identity.has_permission(&Permission::new("orders")));
        assert!(!identity.has_permission(&Permission::new("products")));
    }

    #[tokio::test]
    async fn missing_record_is_unknown_subject() {
        let directory = MapDirectory {
            users: HashMap::new(),
        };

        let resolver = IdentityResolver::new(Arc::new(directory));
        let err = resolver.resolve(&subject_for(UserId::new())).await.unwrap_err();
        assert_eq!(err, AuthError::UnknownSubject);
    }

    #[tokio::test]
    async fn directory_failure_is_resolver_unavailable() {
        let resolver = IdentityResolver::new(Arc::new(DownDirectory));
        let err = resolver.resolve(&subject_for(UserId::new())).await.unwrap_err();
        assert!(matches!(err, AuthError::ResolverUnavailable(_)));
    }
}
