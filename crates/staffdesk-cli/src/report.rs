//! Plain-text reports for the access tables and workflow evaluation.

use std::fmt::Write;

use staffdesk_auth::{
    can_access_route, get_role_permissions, required_permission, roles_with_permission,
};
use staffdesk_core::{Permission, Role};
use staffdesk_models::VacationRequest;
use staffdesk_workflow::{available_review_action, evaluate_approval_steps};

/// Permissions held by `role`, one per line, with its role classes in the header.
pub fn render_role_permissions(role: Role) -> String {
    let permissions = get_role_permissions(role);
    let mut out = format!(
        "{} ({}) admin={} management={} staff={}\n",
        role.display_name(),
        role,
        role.is_admin(),
        role.is_management(),
        role.is_staff()
    );

    for permission in &permissions {
        let _ = writeln!(out, "  {permission}");
    }
    let _ = writeln!(out, "{} of {} permissions", permissions.len(), Permission::ALL.len());
    out
}

pub fn render_roles_with_permission(permission: Permission) -> String {
    let roles = roles_with_permission(permission);
    let mut out = format!("{permission}\n");

    if roles.is_empty() {
        out.push_str("  (no role)\n");
    }
    for role in roles {
        let _ = writeln!(out, "  {role}");
    }
    out
}

/// Route decision for a role slug. An unknown slug is reported and denied.
pub fn render_route_access(role: &str, path: &str) -> String {
    let parsed: Option<Role> = role.parse().ok();
    let allowed = can_access_route(parsed, path);

    let requirement = match required_permission(path) {
        Some(permission) => permission.to_string(),
        None => "unregistered route".to_string(),
    };
    let role_label = match parsed {
        Some(role) => role.to_string(),
        None => format!("{role} (unknown role)"),
    };

    format!(
        "{} {} for {} [{}]\n",
        if allowed { "ALLOW" } else { "DENY" },
        path,
        role_label,
        requirement
    )
}

/// Step table, progress and status line for `request`.
///
/// When `viewer` is given, the review that role may perform is appended.
pub fn render_workflow(request: &VacationRequest, viewer: Option<Role>) -> String {
    let view = evaluate_approval_steps(request);
    let mut out = String::new();

    for (index, step) in view.steps.iter().enumerate() {
        let marker = if step.rejected {
            "x"
        } else if step.completed {
            "done"
        } else if step.active {
            "..."
        } else {
            " "
        };

        let _ = write!(out, "{}. [{:^4}] {}", index + 1, marker, step.label);
        if let Some(name) = &step.reviewer_name {
            let _ = write!(out, " by {name}");
        }
        if let Some(at) = step.reviewed_at {
            let _ = write!(out, " at {}", at.format("%Y-%m-%d %H:%M"));
        }
        if let Some(comment) = &step.comment {
            let _ = write!(out, " \"{comment}\"");
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Progress: {}/{} ({:.0}%)",
        view.completed_count(),
        view.steps.len(),
        view.progress * 100.0
    );
    let _ = writeln!(out, "Status: {}", view.message());

    if let Some(anomaly) = view.anomaly {
        let _ = writeln!(out, "Warning: {anomaly:?}");
    }

    if let Some(role) = viewer {
        match available_review_action(role, request) {
            Some(action) => {
                let _ = writeln!(out, "{role} may perform: {action:?}");
            }
            None => {
                let _ = writeln!(out, "{role} has no review to perform");
            }
        }
    }

    out
}
