use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use staffdesk_core::{Permission, PermissionArea, Role};
use staffdesk_models::{
    AccessProfile, PermissionCheckRequest, PermissionCheckResponse, ReviewRecord, RoleClasses,
    RolesWithPermissionResponse, RouteAccessResponse, VacationRequest, VacationStatus,
};
use staffdesk_workflow::{
    ReviewAction, StatusMessage, WorkflowAnomaly, WorkflowStage, WorkflowStep, WorkflowView,
};

use crate::modules::access::controller::ErrorResponse;
use crate::modules::vacations::model::WorkflowResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::access::controller::get_access_profile,
        crate::modules::access::controller::check_route,
        crate::modules::access::controller::check_permissions,
        crate::modules::access::controller::get_roles_with_permission,
        crate::modules::vacations::controller::evaluate_workflow,
    ),
    components(
        schemas(
            Role,
            Permission,
            PermissionArea,
            RoleClasses,
            AccessProfile,
            RouteAccessResponse,
            PermissionCheckRequest,
            PermissionCheckResponse,
            RolesWithPermissionResponse,
            VacationStatus,
            ReviewRecord,
            VacationRequest,
            WorkflowStage,
            WorkflowStep,
            StatusMessage,
            WorkflowAnomaly,
            WorkflowView,
            ReviewAction,
            WorkflowResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Access", description = "Role, permission and route access introspection"),
        (name = "Vacations", description = "Vacation approval workflow progress")
    ),
    info(
        title = "Staffdesk API",
        version = "0.1.0",
        description = "Access control and vacation approval workflow for the Staffdesk dashboard.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
