//! # Staffdesk Auth
//!
//! Authorization tables and session token utilities for the Staffdesk API.
//!
//! This crate provides:
//!
//! - [`access`]: The role → permission table and the permission queries
//! - [`routes`]: The dashboard route → permission table and route access checks
//! - [`claims`]: Session token claim structure
//! - [`jwt`]: Token creation and verification utilities
//!
//! Every query fails closed: a missing role, an unknown role string or an
//! unregistered route is answered with "deny" or an empty set, never with a
//! grant.
//!
//! # Example
//!
//! ```ignore
//! use staffdesk_auth::{can_access_route, has_permission};
//! use staffdesk_core::{Permission, Role};
//!
//! assert!(has_permission(Role::ChiefInstructor, Permission::ApproveAsChief));
//! assert!(!has_permission(None, Permission::ViewDashboard));
//! assert!(!can_access_route(Role::SuperAdmin, "/not-a-page"));
//! ```

pub mod access;
pub mod claims;
pub mod jwt;
pub mod routes;

// Re-export commonly used types at crate root
pub use access::{
    RolePermissionMap, get_role_permissions, has_all_permissions, has_any_permission,
    has_permission, roles_with_permission,
};
pub use claims::Claims;
pub use jwt::{create_session_token, verify_token};
pub use routes::{RouteAccessMap, can_access_route, required_permission};
