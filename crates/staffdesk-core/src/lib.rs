//! # Staffdesk Core
//!
//! Core types, errors, and vocabulary for the Staffdesk API.
//!
//! This crate provides foundational types used throughout the Staffdesk application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`permissions`]: The closed set of capability flags
//! - [`roles`]: The closed set of job-function roles and their classifications
//!
//! # Example
//!
//! ```ignore
//! use staffdesk_core::{AppError, Permission, Role};
//!
//! let role: Option<Role> = "chief_instructor".parse().ok();
//! assert!(role.is_some_and(|r| r.is_staff()));
//!
//! let error = AppError::forbidden(anyhow::anyhow!("Missing {}", Permission::ApproveAsChief));
//! ```

pub mod errors;
pub mod permissions;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use permissions::{Permission, PermissionArea, UnknownPermission};
pub use roles::{Role, UnknownRole, is_admin, is_management, is_staff};
