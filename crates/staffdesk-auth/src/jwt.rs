//! Session token utilities.
//!
//! Session tokens are HS256 JWTs carrying the user's id, display name and
//! role slug. They are issued by the authentication service (or by the CLI
//! for development) and verified on every API request.
//!
//! # Example
//!
//! ```ignore
//! use staffdesk_auth::{create_session_token, verify_token};
//! use staffdesk_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_session_token("42", "Karim", "chief_instructor", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.role, "chief_instructor");
//! ```

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use staffdesk_config::JwtConfig;
use staffdesk_core::AppError;

use crate::claims::Claims;

/// Creates a signed session token.
///
/// The role is embedded as given; an unknown slug still produces a valid
/// token, which then authorizes nothing.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_session_token(
    user_id: &str,
    name: &str,
    role: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {e}")))
}

/// Verifies a session token and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired, or the token is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
