//! # Staffdesk CLI
//!
//! Operator tooling for the Staffdesk access tables and approval workflow.
//!
//! This library crate renders the reports printed by the CLI binary, so the
//! output can be checked without spawning a process.
//!
//! ## Usage
//!
//! ```ignore
//! use staffdesk_cli::report::{render_role_permissions, render_workflow};
//! use staffdesk_core::Role;
//!
//! println!("{}", render_role_permissions(Role::ChiefInstructor));
//! ```

pub mod report;
