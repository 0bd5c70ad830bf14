//! Job-function roles and their fixed classifications.
//!
//! A user holds exactly one [`Role`]. The role is assigned elsewhere and only
//! read here. Roles are additionally sorted into three classes (admin,
//! management, staff) by fixed membership lists that do not consult the
//! permission table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Principal,
    VicePrincipal,
    /// General administration section ("general shakha").
    GeneralShakha,
    ChiefInstructor,
    Instructor,
    CraftInstructor,
    AssistantInstructor,
    OfficeStaff,
    LabAssistant,
    LibraryStaff,
    OtherEmployee,
}

/// Returned when parsing a string that names no role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

const ADMIN_ROLES: &[Role] = &[Role::SuperAdmin];

const MANAGEMENT_ROLES: &[Role] = &[
    Role::SuperAdmin,
    Role::Principal,
    Role::VicePrincipal,
    Role::GeneralShakha,
];

const STAFF_ROLES: &[Role] = &[
    Role::ChiefInstructor,
    Role::Instructor,
    Role::CraftInstructor,
    Role::AssistantInstructor,
    Role::OfficeStaff,
    Role::LabAssistant,
    Role::LibraryStaff,
    Role::OtherEmployee,
];

impl Role {
    pub const ALL: [Role; 12] = [
        Role::SuperAdmin,
        Role::Principal,
        Role::VicePrincipal,
        Role::GeneralShakha,
        Role::ChiefInstructor,
        Role::Instructor,
        Role::CraftInstructor,
        Role::AssistantInstructor,
        Role::OfficeStaff,
        Role::LabAssistant,
        Role::LibraryStaff,
        Role::OtherEmployee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Principal => "principal",
            Role::VicePrincipal => "vice_principal",
            Role::GeneralShakha => "general_shakha",
            Role::ChiefInstructor => "chief_instructor",
            Role::Instructor => "instructor",
            Role::CraftInstructor => "craft_instructor",
            Role::AssistantInstructor => "assistant_instructor",
            Role::OfficeStaff => "office_staff",
            Role::LabAssistant => "lab_assistant",
            Role::LibraryStaff => "library_staff",
            Role::OtherEmployee => "other_employee",
        }
    }

    /// Human-readable title, e.g. "Chief Instructor".
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Principal => "Principal",
            Role::VicePrincipal => "Vice Principal",
            Role::GeneralShakha => "General Shakha",
            Role::ChiefInstructor => "Chief Instructor",
            Role::Instructor => "Instructor",
            Role::CraftInstructor => "Craft Instructor",
            Role::AssistantInstructor => "Assistant Instructor",
            Role::OfficeStaff => "Office Staff",
            Role::LabAssistant => "Lab Assistant",
            Role::LibraryStaff => "Library Staff",
            Role::OtherEmployee => "Other Employee",
        }
    }

    pub fn is_admin(&self) -> bool {
        ADMIN_ROLES.contains(self)
    }

    pub fn is_management(&self) -> bool {
        MANAGEMENT_ROLES.contains(self)
    }

    pub fn is_staff(&self) -> bool {
        STAFF_ROLES.contains(self)
    }
}

/// Fail-closed admin check for a role that may be missing.
pub fn is_admin(role: Option<Role>) -> bool {
    role.is_some_and(|r| r.is_admin())
}

/// Fail-closed management check for a role that may be missing.
pub fn is_management(role: Option<Role>) -> bool {
    role.is_some_and(|r| r.is_management())
}

/// Fail-closed staff check for a role that may be missing.
pub fn is_staff(role: Option<Role>) -> bool {
    role.is_some_and(|r| r.is_staff())
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
