//! Role → permission table and permission queries.
//!
//! The table is built once, on first use, from [`grants_for`] and is never
//! mutated afterwards. `grants_for` matches on every [`Role`] variant, so the
//! table is total: adding a role without deciding its grants does not compile.
//!
//! The free functions accept anything convertible into `Option<Role>` so that
//! callers holding a possibly-missing role (an unparseable session claim, an
//! anonymous visitor) get a deny instead of having to special-case it.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use staffdesk_core::{Permission, Role};

use Permission::*;

const SUPER_ADMIN_GRANTS: &[Permission] = &Permission::ALL;

const PRINCIPAL_GRANTS: &[Permission] = &[
    ViewDashboard,
    ViewDepartments,
    CreateDepartment,
    EditDepartment,
    DeleteDepartment,
    ViewEmployees,
    CreateEmployee,
    EditEmployee,
    ViewLabs,
    ViewInventory,
    ViewLoans,
    ApproveLoan,
    ViewVacations,
    ViewAllVacations,
    ApproveAsPrincipal,
    DownloadVacationPdf,
    ViewSettings,
];

const VICE_PRINCIPAL_GRANTS: &[Permission] = &[
    ViewDashboard,
    ViewDepartments,
    EditDepartment,
    ViewEmployees,
    ViewLabs,
    ViewInventory,
    ViewLoans,
    ApproveLoan,
    ViewVacations,
    ViewAllVacations,
    RequestVacation,
    DownloadVacationPdf,
    ViewSettings,
];

const GENERAL_SHAKHA_GRANTS: &[Permission] = &[
    ViewDashboard,
    ViewDepartments,
    ViewEmployees,
    CreateEmployee,
    EditEmployee,
    ViewInventory,
    ManageInventory,
    ViewLoans,
    CreateLoan,
    ReturnLoan,
    ViewVacations,
    ViewAllVacations,
    RequestVacation,
    DownloadVacationPdf,
    ViewSettings,
];

const CHIEF_INSTRUCTOR_GRANTS: &[Permission] = &[
    ViewDashboard,
    ViewDepartments,
    ViewEmployees,
    ViewLabs,
    CreateLab,
    EditLab,
    ViewInventory,
    ViewLoans,
    CreateLoan,
    ApproveLoan,
    ViewVacations,
    RequestVacation,
    ApproveAsChief,
    DownloadVacationPdf,
    ViewSettings,
];

// Instructor, craft instructor and assistant instructor share one grant list.
const INSTRUCTOR_GRANTS: &[Permission] = &[
    ViewDashboard,
    ViewDepartments,
    ViewLabs,
    ViewLoans,
    CreateLoan,
    ViewVacations,
    RequestVacation,
    DownloadVacationPdf,
    ViewSettings,
];

const OFFICE_STAFF_GRANTS: &[Permission] = &[
    ViewDashboard,
    ViewEmployees,
    ViewInventory,
    ViewLoans,
    ViewVacations,
    RequestVacation,
    DownloadVacationPdf,
    ViewSettings,
];

const LAB_ASSISTANT_GRANTS: &[Permission] = &[
    ViewDashboard,
    ViewLabs,
    EditLab,
    ViewInventory,
    ViewLoans,
    CreateLoan,
    ReturnLoan,
    ViewVacations,
    RequestVacation,
    ViewSettings,
];

const LIBRARY_STAFF_GRANTS: &[Permission] = &[
    ViewDashboard,
    ViewInventory,
    ViewLoans,
    CreateLoan,
    ReturnLoan,
    ViewVacations,
    RequestVacation,
    ViewSettings,
];

const OTHER_EMPLOYEE_GRANTS: &[Permission] =
    &[ViewDashboard, ViewVacations, RequestVacation, ViewSettings];

/// The permissions granted to `role`.
pub fn grants_for(role: Role) -> &'static [Permission] {
    match role {
        Role::SuperAdmin => SUPER_ADMIN_GRANTS,
        Role::Principal => PRINCIPAL_GRANTS,
        Role::VicePrincipal => VICE_PRINCIPAL_GRANTS,
        Role::GeneralShakha => GENERAL_SHAKHA_GRANTS,
        Role::ChiefInstructor => CHIEF_INSTRUCTOR_GRANTS,
        Role::Instructor | Role::CraftInstructor | Role::AssistantInstructor => INSTRUCTOR_GRANTS,
        Role::OfficeStaff => OFFICE_STAFF_GRANTS,
        Role::LabAssistant => LAB_ASSISTANT_GRANTS,
        Role::LibraryStaff => LIBRARY_STAFF_GRANTS,
        Role::OtherEmployee => OTHER_EMPLOYEE_GRANTS,
    }
}

static ROLE_PERMISSIONS: LazyLock<RolePermissionMap> = LazyLock::new(RolePermissionMap::build);

/// Read-only lookup from role to its permission set.
#[derive(Debug)]
pub struct RolePermissionMap {
    entries: BTreeMap<Role, BTreeSet<Permission>>,
}

impl RolePermissionMap {
    fn build() -> Self {
        let entries = Role::ALL
            .iter()
            .map(|&role| (role, grants_for(role).iter().copied().collect()))
            .collect();
        Self { entries }
    }

    /// The process-wide table.
    pub fn global() -> &'static RolePermissionMap {
        &ROLE_PERMISSIONS
    }

    pub fn permissions(&self, role: Role) -> Option<&BTreeSet<Permission>> {
        self.entries.get(&role)
    }

    pub fn grants(&self, role: Role, permission: Permission) -> bool {
        self.permissions(role)
            .is_some_and(|set| set.contains(&permission))
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.entries.keys().copied()
    }
}

/// True iff `role` is present and holds `permission`.
pub fn has_permission(role: impl Into<Option<Role>>, permission: Permission) -> bool {
    let role: Option<Role> = role.into();
    role.is_some_and(|r| RolePermissionMap::global().grants(r, permission))
}

/// True iff `role` holds at least one of `permissions`. An empty list is false.
pub fn has_any_permission(role: impl Into<Option<Role>>, permissions: &[Permission]) -> bool {
    let role: Option<Role> = role.into();
    permissions.iter().any(|&p| has_permission(role, p))
}

/// True iff `role` holds every one of `permissions`. An empty list requires
/// nothing and is true, even for a missing role.
pub fn has_all_permissions(role: impl Into<Option<Role>>, permissions: &[Permission]) -> bool {
    let role: Option<Role> = role.into();
    permissions.iter().all(|&p| has_permission(role, p))
}

/// The full permission set of `role`; empty for a missing role.
pub fn get_role_permissions(role: impl Into<Option<Role>>) -> BTreeSet<Permission> {
    let role: Option<Role> = role.into();
    role.and_then(|r| RolePermissionMap::global().permissions(r))
        .cloned()
        .unwrap_or_default()
}

/// Every role that holds `permission`, in declaration order.
pub fn roles_with_permission(permission: Permission) -> Vec<Role> {
    let map = RolePermissionMap::global();
    map.roles()
        .filter(|&role| map.grants(role, permission))
        .collect()
}
