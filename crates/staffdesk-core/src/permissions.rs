//! Permission vocabulary for the Staffdesk API.
//!
//! Every UI action and dashboard route is gated by exactly one [`Permission`].
//! Permissions are atomic: they are never combined or derived at runtime, and
//! which roles hold them is decided by the role table in `staffdesk-auth`.
//!
//! # Example
//!
//! ```ignore
//! use staffdesk_core::Permission;
//!
//! let p: Permission = "APPROVE_AS_CHIEF".parse()?;
//! assert_eq!(p, Permission::ApproveAsChief);
//! assert_eq!(p.to_string(), "APPROVE_AS_CHIEF");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    // =========================================================================
    // Dashboard
    // =========================================================================
    ViewDashboard,

    // =========================================================================
    // Departments
    // =========================================================================
    ViewDepartments,
    CreateDepartment,
    EditDepartment,
    DeleteDepartment,

    // =========================================================================
    // Employees
    // =========================================================================
    ViewEmployees,
    CreateEmployee,
    EditEmployee,
    DeleteEmployee,

    // =========================================================================
    // Labs
    // =========================================================================
    ViewLabs,
    CreateLab,
    EditLab,
    DeleteLab,

    // =========================================================================
    // Inventory
    // =========================================================================
    ViewInventory,
    ManageInventory,

    // =========================================================================
    // Loans
    // =========================================================================
    ViewLoans,
    CreateLoan,
    ApproveLoan,
    ReturnLoan,

    // =========================================================================
    // Vacations
    // =========================================================================
    /// See one's own vacation requests.
    ViewVacations,
    /// See every employee's vacation requests.
    ViewAllVacations,
    RequestVacation,
    /// Act on the chief-review stage of the approval workflow.
    ApproveAsChief,
    /// Act on the principal-approval stage of the approval workflow.
    ApproveAsPrincipal,
    DownloadVacationPdf,

    // =========================================================================
    // Settings
    // =========================================================================
    ViewSettings,
    ManageSettings,
    ManageUsers,
}

/// Functional area a permission belongs to, used for grouping in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PermissionArea {
    Dashboard,
    Departments,
    Employees,
    Labs,
    Inventory,
    Loans,
    Vacations,
    Settings,
}

/// Returned when parsing a string that names no permission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPermission(pub String);

impl fmt::Display for UnknownPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown permission: {}", self.0)
    }
}

impl std::error::Error for UnknownPermission {}

impl Permission {
    pub const ALL: [Permission; 28] = [
        Permission::ViewDashboard,
        Permission::ViewDepartments,
        Permission::CreateDepartment,
        Permission::EditDepartment,
        Permission::DeleteDepartment,
        Permission::ViewEmployees,
        Permission::CreateEmployee,
        Permission::EditEmployee,
        Permission::DeleteEmployee,
        Permission::ViewLabs,
        Permission::CreateLab,
        Permission::EditLab,
        Permission::DeleteLab,
        Permission::ViewInventory,
        Permission::ManageInventory,
        Permission::ViewLoans,
        Permission::CreateLoan,
        Permission::ApproveLoan,
        Permission::ReturnLoan,
        Permission::ViewVacations,
        Permission::ViewAllVacations,
        Permission::RequestVacation,
        Permission::ApproveAsChief,
        Permission::ApproveAsPrincipal,
        Permission::DownloadVacationPdf,
        Permission::ViewSettings,
        Permission::ManageSettings,
        Permission::ManageUsers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "VIEW_DASHBOARD",
            Permission::ViewDepartments => "VIEW_DEPARTMENTS",
            Permission::CreateDepartment => "CREATE_DEPARTMENT",
            Permission::EditDepartment => "EDIT_DEPARTMENT",
            Permission::DeleteDepartment => "DELETE_DEPARTMENT",
            Permission::ViewEmployees => "VIEW_EMPLOYEES",
            Permission::CreateEmployee => "CREATE_EMPLOYEE",
            Permission::EditEmployee => "EDIT_EMPLOYEE",
            Permission::DeleteEmployee => "DELETE_EMPLOYEE",
            Permission::ViewLabs => "VIEW_LABS",
            Permission::CreateLab => "CREATE_LAB",
            Permission::EditLab => "EDIT_LAB",
            Permission::DeleteLab => "DELETE_LAB",
            Permission::ViewInventory => "VIEW_INVENTORY",
            Permission::ManageInventory => "MANAGE_INVENTORY",
            Permission::ViewLoans => "VIEW_LOANS",
            Permission::CreateLoan => "CREATE_LOAN",
            Permission::ApproveLoan => "APPROVE_LOAN",
            Permission::ReturnLoan => "RETURN_LOAN",
            Permission::ViewVacations => "VIEW_VACATIONS",
            Permission::ViewAllVacations => "VIEW_ALL_VACATIONS",
            Permission::RequestVacation => "REQUEST_VACATION",
            Permission::ApproveAsChief => "APPROVE_AS_CHIEF",
            Permission::ApproveAsPrincipal => "APPROVE_AS_PRINCIPAL",
            Permission::DownloadVacationPdf => "DOWNLOAD_VACATION_PDF",
            Permission::ViewSettings => "VIEW_SETTINGS",
            Permission::ManageSettings => "MANAGE_SETTINGS",
            Permission::ManageUsers => "MANAGE_USERS",
        }
    }

    pub fn area(&self) -> PermissionArea {
        match self {
            Permission::ViewDashboard => PermissionArea::Dashboard,
            Permission::ViewDepartments
            | Permission::CreateDepartment
            | Permission::EditDepartment
            | Permission::DeleteDepartment => PermissionArea::Departments,
            Permission::ViewEmployees
            | Permission::CreateEmployee
            | Permission::EditEmployee
            | Permission::DeleteEmployee => PermissionArea::Employees,
            Permission::ViewLabs
            | Permission::CreateLab
            | Permission::EditLab
            | Permission::DeleteLab => PermissionArea::Labs,
            Permission::ViewInventory | Permission::ManageInventory => PermissionArea::Inventory,
            Permission::ViewLoans
            | Permission::CreateLoan
            | Permission::ApproveLoan
            | Permission::ReturnLoan => PermissionArea::Loans,
            Permission::ViewVacations
            | Permission::ViewAllVacations
            | Permission::RequestVacation
            | Permission::ApproveAsChief
            | Permission::ApproveAsPrincipal
            | Permission::DownloadVacationPdf => PermissionArea::Vacations,
            Permission::ViewSettings | Permission::ManageSettings | Permission::ManageUsers => {
                PermissionArea::Settings
            }
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPermission(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_matches_serde() {
        for permission in Permission::ALL {
            let json = serde_json::to_string(&permission).unwrap();
            assert_eq!(json, format!("\"{}\"", permission));
        }
    }

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!(
            "DOWNLOAD_VACATION_PDF".parse::<Permission>(),
            Ok(Permission::DownloadVacationPdf)
        );
        assert!("download_vacation_pdf".parse::<Permission>().is_err());
        assert!("".parse::<Permission>().is_err());
    }

    #[test]
    fn test_all_is_distinct() {
        let unique: HashSet<_> = Permission::ALL.iter().collect();
        assert_eq!(unique.len(), Permission::ALL.len());
    }

    #[test]
    fn test_area_grouping() {
        assert_eq!(Permission::ApproveAsChief.area(), PermissionArea::Vacations);
        assert_eq!(Permission::ReturnLoan.area(), PermissionArea::Loans);
        assert_eq!(Permission::ManageUsers.area(), PermissionArea::Settings);
    }
}
