use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use staffdesk_auth::{Claims, verify_token};
use staffdesk_core::{AppError, Permission, Role};

use crate::state::AppState;

/// Extractor that validates the session token and provides the caller's claims.
///
/// A token whose role names no known role still authenticates; every
/// permission check on it then fails.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn role(&self) -> Option<Role> {
        self.0.role()
    }

    /// Check if the user has a specific permission
    pub fn has_permission(&self, permission: Permission) -> bool {
        staffdesk_auth::has_permission(self.role(), permission)
    }

    /// Check if the user has any of the specified permissions
    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        staffdesk_auth::has_any_permission(self.role(), permissions)
    }

    /// Check if the user has all of the specified permissions
    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        staffdesk_auth::has_all_permissions(self.role(), permissions)
    }

    pub fn can_access_route(&self, route: &str) -> bool {
        staffdesk_auth::can_access_route(self.role(), route)
    }

    pub fn user_id(&self) -> &str {
        &self.0.sub
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        if claims.role().is_none() {
            tracing::warn!(user_id = %claims.sub, role = %claims.role, "Session carries an unknown role");
        }

        Ok(AuthUser(claims))
    }
}

/// Helper macro to create permission check extractors.
#[macro_export]
macro_rules! require_permission {
    ($name:ident, $permission:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = staffdesk_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = <$crate::middleware::auth::AuthUser as axum::extract::FromRequestParts<
                    $crate::state::AppState,
                >>::from_request_parts(parts, state)
                .await?;

                if !auth_user.has_permission($permission) {
                    return Err(staffdesk_core::AppError::forbidden(format!(
                        "Access denied. Missing required permission: {}",
                        $permission
                    )));
                }

                Ok($name(auth_user))
            }
        }
    };
}

require_permission!(RequireViewVacations, Permission::ViewVacations);
require_permission!(RequireManageUsers, Permission::ManageUsers);
