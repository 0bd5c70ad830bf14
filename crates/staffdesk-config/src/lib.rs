//! # Staffdesk Config
//!
//! Configuration types for the Staffdesk API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Session token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address for the HTTP service
//!
//! # Example
//!
//! ```ignore
//! use staffdesk_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! // Load all configs from environment
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
