//! # Staffdesk API
//!
//! HTTP service for the Staffdesk dashboard: role-based access control over
//! dashboard pages and the two-stage vacation approval workflow.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── staffdesk-core/      # Role, Permission, AppError
//! ├── staffdesk-config/    # JWT, CORS and listen address settings
//! ├── staffdesk-auth/      # Role→permission map, route table, session tokens
//! ├── staffdesk-models/    # Vacation request and access DTOs
//! ├── staffdesk-workflow/  # Approval step evaluation
//! └── staffdesk-cli/       # Operator CLI
//! src/
//! ├── middleware/          # AuthUser extractor, permission extractors, route guard
//! ├── modules/
//! │   ├── access/          # Access introspection endpoints
//! │   └── vacations/       # Workflow evaluation endpoint
//! ├── docs.rs              # OpenAPI document
//! ├── logging.rs           # Request logging and subscriber setup
//! ├── router.rs            # Main application router
//! └── validator.rs         # Validated JSON extractor
//! ```
//!
//! ## Roles
//!
//! | Class | Roles |
//! |-------|-------|
//! | Admin | `super_admin` |
//! | Management | `super_admin`, `principal`, `vice_principal`, `general_shakha` |
//! | Staff | every other role |
//!
//! A session whose role is missing or unknown holds no permission and can open
//! no route.
//!
//! ## Vacation approval
//!
//! A request moves from `pending` through an optional chief instructor review
//! (`approved_by_chief`) to principal approval (`approved`), or ends in
//! `rejected` at either stage. `POST /api/vacations/workflow` renders the
//! three-step progress view for a request snapshot.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! ALLOWED_ORIGINS=http://localhost:5173
//! HOST=0.0.0.0
//! PORT=3000
//! RUST_LOG=staffdesk=debug
//! LOG_DIR=logs
//! ```

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use staffdesk_auth;
pub use staffdesk_config;
pub use staffdesk_core;
pub use staffdesk_models;
pub use staffdesk_workflow;
