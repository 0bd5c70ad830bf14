//! Which review a role may perform on a request right now.
//!
//! Used to decide whether to show approve/reject controls. Performing the
//! review is the leave service's job and is checked again there.

use serde::Serialize;
use utoipa::ToSchema;

use staffdesk_auth::has_permission;
use staffdesk_core::{Permission, Role};
use staffdesk_models::{VacationRequest, VacationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    ChiefReview,
    PrincipalApproval,
}

impl ReviewAction {
    pub fn required_permission(&self) -> Permission {
        match self {
            ReviewAction::ChiefReview => Permission::ApproveAsChief,
            ReviewAction::PrincipalApproval => Permission::ApproveAsPrincipal,
        }
    }
}

/// The review `request` is waiting on, regardless of who asks.
pub fn awaited_review(request: &VacationRequest) -> Option<ReviewAction> {
    match request.status {
        VacationStatus::Pending
            if request.is_chief_required && request.reviewed_by_chief.is_none() =>
        {
            Some(ReviewAction::ChiefReview)
        }
        VacationStatus::Pending | VacationStatus::ApprovedByChief => {
            Some(ReviewAction::PrincipalApproval)
        }
        VacationStatus::Approved | VacationStatus::Rejected => None,
    }
}

/// The review `role` may perform on `request` at its current stage.
pub fn available_review_action(
    role: impl Into<Option<Role>>,
    request: &VacationRequest,
) -> Option<ReviewAction> {
    awaited_review(request).filter(|action| has_permission(role, action.required_permission()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use staffdesk_models::ReviewRecord;

    #[test]
    fn test_chief_acts_on_pending_request() {
        let request = VacationRequest::new(VacationStatus::Pending);
        assert_eq!(
            available_review_action(Role::ChiefInstructor, &request),
            Some(ReviewAction::ChiefReview)
        );
        assert_eq!(available_review_action(Role::Principal, &request), None);
    }

    #[test]
    fn test_principal_acts_after_chief() {
        let request = VacationRequest::new(VacationStatus::ApprovedByChief)
            .with_chief_review(ReviewRecord::new("Karim", Utc::now()), None);
        assert_eq!(
            available_review_action(Role::Principal, &request),
            Some(ReviewAction::PrincipalApproval)
        );
        assert_eq!(available_review_action(Role::ChiefInstructor, &request), None);
    }

    #[test]
    fn test_principal_acts_directly_without_chief_step() {
        let request = VacationRequest::new(VacationStatus::Pending).without_chief();
        assert_eq!(
            available_review_action(Role::Principal, &request),
            Some(ReviewAction::PrincipalApproval)
        );
        assert_eq!(available_review_action(Role::ChiefInstructor, &request), None);
    }

    #[test]
    fn test_terminal_requests_offer_nothing() {
        for status in [VacationStatus::Approved, VacationStatus::Rejected] {
            let request = VacationRequest::new(status);
            assert_eq!(awaited_review(&request), None);
            assert_eq!(available_review_action(Role::SuperAdmin, &request), None);
        }
    }

    #[test]
    fn test_missing_or_unprivileged_role_gets_nothing() {
        let request = VacationRequest::new(VacationStatus::Pending);
        assert_eq!(available_review_action(None, &request), None);
        assert_eq!(available_review_action(Role::Instructor, &request), None);
        assert_eq!(available_review_action(Role::OfficeStaff, &request), None);
    }
}
