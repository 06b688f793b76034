//! Route → required-permission declarations.
//!
//! The map is built once at startup and read-only afterwards; the guard
//! consults it by the matched route's identifier (method + path pattern).
//! Routes with no entry are authenticated-only.

use std::collections::HashMap;

use axum::http::Method;

use backoffice_auth::Permission;

/// Immutable map of route identifiers to required permissions.
#[derive(Debug, Default)]
pub struct RoutePermissions {
    required: HashMap<(Method, String), Permission>,
}

impl RoutePermissions {
    pub fn builder() -> RoutePermissionsBuilder {
        RoutePermissionsBuilder::default()
    }

    /// The permission required by `method` on the route registered as
    /// `path`, if any.
    ///
    /// `path` is the route pattern as registered with the router
    /// (e.g. `/users/:id`), not the concrete request path.
    pub fn required(&self, method: &Method, path: &str) -> Option<&Permission> {
        self.required.get(&(method.clone(), path.to_string()))
    }
}

/// Startup-time builder; frozen into [`RoutePermissions`] before serving.
#[derive(Debug, Default)]
pub struct RoutePermissionsBuilder {
    required: HashMap<(Method, String), Permission>,
}

impl RoutePermissionsBuilder {
    /// Declare that `method path` requires `permission`.
    ///
    /// A later declaration for the same route replaces the earlier one.
    pub fn require(
        mut self,
        method: Method,
        path: impl Into<String>,
        permission: Permission,
    ) -> Self {
        self.required.insert((method, path.into()), permission);
        self
    }

    pub fn build(self) -> RoutePermissions {
        RoutePermissions {
            required: self.required,
        }
    }
}
