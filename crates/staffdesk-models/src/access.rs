//! Access introspection DTOs.

use serde::{Deserialize, Serialize};
use staffdesk_core::{Permission, Role};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleClasses {
    pub is_admin: bool,
    pub is_management: bool,
    pub is_staff: bool,
}

impl RoleClasses {
    pub fn of(role: Option<Role>) -> Self {
        Self {
            is_admin: staffdesk_core::is_admin(role),
            is_management: staffdesk_core::is_management(role),
            is_staff: staffdesk_core::is_staff(role),
        }
    }
}

/// What the current user is allowed to do.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccessProfile {
    pub user_id: String,
    pub name: String,
    /// `None` when the session carries a role this service does not know.
    pub role: Option<Role>,
    pub permissions: Vec<Permission>,
    pub classes: RoleClasses,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RouteAccessQuery {
    /// Dashboard path, e.g. `/dashboard/loans`
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteAccessResponse {
    pub path: String,
    pub allowed: bool,
    /// `None` for a route that is not registered.
    pub required_permission: Option<Permission>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PermissionCheckRequest {
    #[validate(length(max = 64, message = "At most 64 permissions per check"))]
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PermissionCheckResponse {
    /// At least one permission is held (false for an empty list).
    pub any: bool,
    /// Every permission is held (true for an empty list).
    pub all: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RolesWithPermissionResponse {
    pub permission: Permission,
    pub roles: Vec<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_classes() {
        let classes = RoleClasses::of(Some(Role::Principal));
        assert!(classes.is_management);
        assert!(!classes.is_admin);
        assert!(!classes.is_staff);

        let none = RoleClasses::of(None);
        assert!(!none.is_admin && !none.is_management && !none.is_staff);
    }

    #[test]
    fn test_permission_check_request_validation() {
        let ok = PermissionCheckRequest {
            permissions: vec![Permission::ViewLoans],
        };
        assert!(ok.validate().is_ok());

        let too_many = PermissionCheckRequest {
            permissions: vec![Permission::ViewLoans; 65],
        };
        assert!(too_many.validate().is_err());
    }

    #[test]
    fn test_permission_check_request_deserialize() {
        let request: PermissionCheckRequest =
            serde_json::from_str(r#"{"permissions":["VIEW_LOANS","APPROVE_AS_CHIEF"]}"#).unwrap();
        assert_eq!(request.permissions, vec![
            Permission::ViewLoans,
            Permission::ApproveAsChief
        ]);
    }
}
