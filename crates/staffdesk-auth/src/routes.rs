//! Dashboard route → permission table.
//!
//! Each dashboard page requires exactly one permission. A route that is not
//! in the table is denied to every role, so a newly added page stays hidden
//! until someone registers it here.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use staffdesk_core::{Permission, Role};

use crate::access::has_permission;

const ROUTES: &[(&str, Permission)] = &[
    ("/dashboard", Permission::ViewDashboard),
    // Departments
    ("/dashboard/departments", Permission::ViewDepartments),
    ("/dashboard/departments/new", Permission::CreateDepartment),
    // Employees
    ("/dashboard/employees", Permission::ViewEmployees),
    ("/dashboard/employees/new", Permission::CreateEmployee),
    // Labs
    ("/dashboard/labs", Permission::ViewLabs),
    ("/dashboard/labs/new", Permission::CreateLab),
    // Inventory
    ("/dashboard/inventory", Permission::ViewInventory),
    // Loans
    ("/dashboard/loans", Permission::ViewLoans),
    ("/dashboard/loans/new", Permission::CreateLoan),
    // Vacations
    ("/dashboard/vacations", Permission::ViewVacations),
    ("/dashboard/vacations/new", Permission::RequestVacation),
    ("/dashboard/vacations/all", Permission::ViewAllVacations),
    ("/dashboard/vacations/chief-review", Permission::ApproveAsChief),
    (
        "/dashboard/vacations/principal-review",
        Permission::ApproveAsPrincipal,
    ),
    // Settings
    ("/dashboard/settings", Permission::ViewSettings),
    ("/dashboard/settings/users", Permission::ManageUsers),
    ("/dashboard/settings/system", Permission::ManageSettings),
];

static ROUTE_ACCESS: LazyLock<RouteAccessMap> = LazyLock::new(|| RouteAccessMap {
    entries: ROUTES.iter().copied().collect(),
});

/// Read-only lookup from route path to required permission.
#[derive(Debug)]
pub struct RouteAccessMap {
    entries: BTreeMap<&'static str, Permission>,
}

impl RouteAccessMap {
    /// The process-wide table.
    pub fn global() -> &'static RouteAccessMap {
        &ROUTE_ACCESS
    }

    /// Permission required for `route`, matching exactly after dropping a
    /// single trailing slash.
    pub fn required(&self, route: &str) -> Option<Permission> {
        self.entries.get(normalize(route)).copied()
    }

    pub fn routes(&self) -> impl Iterator<Item = (&'static str, Permission)> + '_ {
        self.entries.iter().map(|(path, permission)| (*path, *permission))
    }
}

fn normalize(route: &str) -> &str {
    match route.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => route,
    }
}

pub fn required_permission(route: &str) -> Option<Permission> {
    RouteAccessMap::global().required(route)
}

/// True iff `route` is registered and `role` holds its permission.
pub fn can_access_route(role: impl Into<Option<Role>>, route: &str) -> bool {
    required_permission(route).is_some_and(|permission| has_permission(role, permission))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_route_denied_for_every_role() {
        for role in Role::ALL {
            assert!(!can_access_route(role, "/dashboard/unknown"));
            assert!(!can_access_route(role, ""));
            assert!(!can_access_route(role, "/"));
        }
    }

    #[test]
    fn test_registered_route_delegates_to_permission() {
        assert!(can_access_route(Role::Principal, "/dashboard/vacations/principal-review"));
        assert!(!can_access_route(Role::ChiefInstructor, "/dashboard/vacations/principal-review"));
        assert!(can_access_route(Role::ChiefInstructor, "/dashboard/vacations/chief-review"));
        assert!(!can_access_route(None, "/dashboard"));
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(
            required_permission("/dashboard/labs/"),
            Some(Permission::ViewLabs)
        );
        assert_eq!(required_permission("/dashboard/labs//"), None);
    }

    #[test]
    fn test_no_prefix_matching() {
        assert_eq!(required_permission("/dashboard/labs/42"), None);
        assert_eq!(required_permission("/dashboard/lab"), None);
    }

    #[test]
    fn test_every_route_permission_is_held_by_someone() {
        for (path, permission) in RouteAccessMap::global().routes() {
            assert!(can_access_route(Role::SuperAdmin, path), "{path} / {permission}");
        }
    }
}
