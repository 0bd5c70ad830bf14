//! Vacation request projection.
//!
//! Vacation requests are stored and transitioned by the leave service. The
//! approval workflow only reads the fields below, so this is the full extent
//! of the record as far as this workspace is concerned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Persisted status of a vacation request.
///
/// `pending` → `approved_by_chief` → `approved`, with `rejected` reachable
/// from either non-terminal state. When the chief step is not required a
/// request goes straight from `pending` to `approved` or `rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VacationStatus {
    Pending,
    ApprovedByChief,
    Approved,
    Rejected,
}

impl VacationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, VacationStatus::Approved | VacationStatus::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VacationStatus::Pending => "pending",
            VacationStatus::ApprovedByChief => "approved_by_chief",
            VacationStatus::Approved => "approved",
            VacationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for VacationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who reviewed a stage, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Reviewer name must be between 1 and 200 characters"
    ))]
    pub name: String,
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn new(name: impl Into<String>, reviewed_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            reviewed_at,
        }
    }
}

fn default_chief_required() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VacationRequest {
    pub status: VacationStatus,
    #[validate(nested)]
    #[serde(default)]
    pub reviewed_by_chief: Option<ReviewRecord>,
    #[validate(nested)]
    #[serde(default)]
    pub reviewed_by_principal: Option<ReviewRecord>,
    #[validate(length(max = 1000, message = "Comment must not exceed 1000 characters"))]
    #[serde(default)]
    pub chief_review_comment: Option<String>,
    #[validate(length(max = 1000, message = "Comment must not exceed 1000 characters"))]
    #[serde(default)]
    pub principal_review_comment: Option<String>,
    /// Whether the request passes through chief review before the principal.
    #[serde(default = "default_chief_required")]
    pub is_chief_required: bool,
}

impl VacationRequest {
    /// A request in `status` with no reviews recorded and the chief step required.
    pub fn new(status: VacationStatus) -> Self {
        Self {
            status,
            reviewed_by_chief: None,
            reviewed_by_principal: None,
            chief_review_comment: None,
            principal_review_comment: None,
            is_chief_required: true,
        }
    }

    pub fn without_chief(mut self) -> Self {
        self.is_chief_required = false;
        self
    }

    pub fn with_chief_review(mut self, review: ReviewRecord, comment: Option<String>) -> Self {
        self.reviewed_by_chief = Some(review);
        self.chief_review_comment = comment;
        self
    }

    pub fn with_principal_review(mut self, review: ReviewRecord, comment: Option<String>) -> Self {
        self.reviewed_by_principal = Some(review);
        self.principal_review_comment = comment;
        self
    }
}
