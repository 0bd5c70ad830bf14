use axum::{
    Json,
    extract::{Path, Query},
};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use staffdesk_auth::{get_role_permissions, required_permission, roles_with_permission};
use staffdesk_core::{AppError, Permission};
use staffdesk_models::{
    AccessProfile, PermissionCheckRequest, PermissionCheckResponse, RoleClasses,
    RolesWithPermissionResponse, RouteAccessQuery, RouteAccessResponse,
};

use crate::middleware::auth::{AuthUser, RequireManageUsers};
use crate::validator::ValidatedJson;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Get the current session's role, permissions and role classes
#[utoipa::path(
    get,
    path = "/api/access/me",
    responses(
        (status = 200, description = "Access profile of the caller", body = AccessProfile),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Access"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn get_access_profile(auth_user: AuthUser) -> Result<Json<AccessProfile>, AppError> {
    let role = auth_user.role();

    Ok(Json(AccessProfile {
        user_id: auth_user.0.sub.clone(),
        name: auth_user.0.name.clone(),
        role,
        permissions: get_role_permissions(role).into_iter().collect(),
        classes: RoleClasses::of(role),
    }))
}

/// Check whether the caller may open a dashboard route
#[utoipa::path(
    get,
    path = "/api/access/routes",
    params(RouteAccessQuery),
    responses(
        (status = 200, description = "Route access decision", body = RouteAccessResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Access"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn check_route(
    auth_user: AuthUser,
    Query(query): Query<RouteAccessQuery>,
) -> Result<Json<RouteAccessResponse>, AppError> {
    let allowed = auth_user.can_access_route(&query.path);

    Ok(Json(RouteAccessResponse {
        required_permission: required_permission(&query.path),
        path: query.path,
        allowed,
    }))
}

/// Check a list of permissions against the caller's role
#[utoipa::path(
    post,
    path = "/api/access/check",
    request_body = PermissionCheckRequest,
    responses(
        (status = 200, description = "Any-of and all-of results", body = PermissionCheckResponse),
        (status = 400, description = "Bad request - unknown permission", body = ErrorResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Access"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn check_permissions(
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<PermissionCheckRequest>,
) -> Result<Json<PermissionCheckResponse>, AppError> {
    Ok(Json(PermissionCheckResponse {
        any: auth_user.has_any_permission(&dto.permissions),
        all: auth_user.has_all_permissions(&dto.permissions),
    }))
}

/// List the roles that hold a permission
#[utoipa::path(
    get,
    path = "/api/access/permissions/{permission}/roles",
    params(
        ("permission" = String, Path, description = "Permission name, e.g. APPROVE_AS_CHIEF")
    ),
    responses(
        (status = 200, description = "Roles holding the permission", body = RolesWithPermissionResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Forbidden - MANAGE_USERS required", body = ErrorResponse),
        (status = 404, description = "Unknown permission", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Access"
)]
#[instrument(skip_all, fields(user_id = %auth_user.user_id()))]
pub async fn get_roles_with_permission(
    RequireManageUsers(auth_user): RequireManageUsers,
    Path(permission): Path<String>,
) -> Result<Json<RolesWithPermissionResponse>, AppError> {
    let permission: Permission = permission.parse().map_err(AppError::not_found)?;

    Ok(Json(RolesWithPermissionResponse {
        permission,
        roles: roles_with_permission(permission),
    }))
}
