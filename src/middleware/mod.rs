//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: Session extractor and permission-gated extractors
//! - [`route_guard`]: Dashboard route access middleware
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` extractor validates the token and resolves the role
//! 3. Permission extractors or the route guard consult the role tables
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, RequireViewVacations};
//!
//! // Basic authentication (any valid token)
//! async fn me(auth_user: AuthUser) -> impl IntoResponse { /* ... */ }
//!
//! // Permission-based access control
//! async fn workflow(RequireViewVacations(auth_user): RequireViewVacations) -> impl IntoResponse {
//!     // Only executes if the role holds VIEW_VACATIONS
//! }
//! ```

pub mod auth;
pub mod route_guard;
