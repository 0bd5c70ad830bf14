//! # Staffdesk Models
//!
//! Domain models and DTOs for the Staffdesk API.
//!
//! # Modules
//!
//! - [`access`]: Request and response bodies of the access introspection endpoints
//! - [`vacations`]: The vacation request projection read by the approval workflow
//!
//! # Example
//!
//! ```ignore
//! use staffdesk_models::vacations::{VacationRequest, VacationStatus};
//!
//! let request = VacationRequest::new(VacationStatus::Pending);
//! assert!(request.is_chief_required);
//! ```

pub mod access;
pub mod vacations;

// Re-export commonly used types at crate root for convenience
pub use access::{
    AccessProfile, PermissionCheckRequest, PermissionCheckResponse, RoleClasses,
    RouteAccessQuery, RouteAccessResponse, RolesWithPermissionResponse,
};
pub use vacations::{ReviewRecord, VacationRequest, VacationStatus};
