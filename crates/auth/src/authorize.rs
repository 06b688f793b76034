use crate::error::AuthError;
use crate::permissions::Permission;
use crate::resolver::Identity;

/// Decide whether `identity` may proceed against an optional requirement.
///
/// - `None`: the route declares no permission requirement; a resolved
///   identity is sufficient (authentication without fine-grained
///   authorization).
/// - `Some(p)`: succeeds iff `p` is a member of the identity's permission
///   set. Comparison is exact-match on the permission name, case-sensitive.
///
/// No IO, no panics, no business logic.
pub fn authorize(required: Option<&Permission>, identity: &Identity) -> Result<(), AuthError> {
    let Some(required) = required else {
        return Ok(());
    };

    if identity.has_permission(required) {
        Ok(())
    } else {
        Err(AuthError::Forbidden(required.as_str().to_string()))
    }
}
