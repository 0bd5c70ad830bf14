//! Access introspection: what the current session may see and do.

pub mod controller;
pub mod router;
