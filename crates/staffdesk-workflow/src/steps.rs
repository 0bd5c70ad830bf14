//! Step derivation for the approval progress view.
//!
//! [`evaluate_approval_steps`] is recomputed from scratch on every call. It
//! reads only the request's status, the two optional review records, their
//! comments and whether the chief stage applies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use staffdesk_models::{ReviewRecord, VacationRequest, VacationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    Submitted,
    ChiefReview,
    PrincipalApproval,
}

impl WorkflowStage {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStage::Submitted => "Submitted",
            WorkflowStage::ChiefReview => "Chief Review",
            WorkflowStage::PrincipalApproval => "Principal Approval",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WorkflowStep {
    pub stage: WorkflowStage,
    pub label: String,
    pub completed: bool,
    pub active: bool,
    pub rejected: bool,
    pub reviewer_name: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub comment: Option<String>,
}

impl WorkflowStep {
    fn new(stage: WorkflowStage) -> Self {
        Self {
            stage,
            label: stage.label().to_string(),
            completed: false,
            active: false,
            rejected: false,
            reviewer_name: None,
            reviewed_at: None,
            comment: None,
        }
    }

    fn reviewed(mut self, review: Option<&ReviewRecord>, comment: Option<&String>) -> Self {
        if let Some(review) = review {
            self.reviewer_name = Some(review.name.clone());
            self.reviewed_at = Some(review.reviewed_at);
        }
        self.comment = comment.cloned();
        self
    }
}

/// One-line summary of where the request stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusMessage {
    AwaitingChiefReview,
    AwaitingPrincipalApproval,
    ApprovedByChief,
    FullyApproved,
    Rejected,
}

impl StatusMessage {
    pub fn text(&self) -> &'static str {
        match self {
            StatusMessage::AwaitingChiefReview => "waiting for Chief Instructor review",
            StatusMessage::AwaitingPrincipalApproval => "waiting for Principal approval",
            StatusMessage::ApprovedByChief => {
                "approved by Chief Instructor, waiting for Principal approval"
            }
            StatusMessage::FullyApproved => "fully approved",
            StatusMessage::Rejected => "rejected",
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Inconsistencies between a request's status and its review records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowAnomaly {
    /// The request is rejected but neither reviewer is recorded. The earliest
    /// incomplete step is marked rejected in its place.
    UnattributedRejection,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WorkflowView {
    pub steps: Vec<WorkflowStep>,
    /// Completed steps over total steps, in `0.0..=1.0`.
    pub progress: f64,
    pub status_message: StatusMessage,
    pub anomaly: Option<WorkflowAnomaly>,
}

impl WorkflowView {
    pub fn message(&self) -> &'static str {
        self.status_message.text()
    }

    /// The first step still waiting on someone, if any.
    pub fn current_step(&self) -> Option<&WorkflowStep> {
        self.steps.iter().find(|step| step.active)
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|step| step.completed).count()
    }
}

/// Projects `request` into the ordered step list, progress and status message.
pub fn evaluate_approval_steps(request: &VacationRequest) -> WorkflowView {
    let status = request.status;
    let chief = request.reviewed_by_chief.as_ref();
    let principal = request.reviewed_by_principal.as_ref();
    let pending = status == VacationStatus::Pending;
    let rejected = status == VacationStatus::Rejected;

    let mut steps = Vec::with_capacity(3);

    steps.push(WorkflowStep {
        completed: true,
        active: pending && chief.is_none(),
        ..WorkflowStep::new(WorkflowStage::Submitted)
    });

    if request.is_chief_required {
        steps.push(
            WorkflowStep {
                completed: chief.is_some()
                    || matches!(
                        status,
                        VacationStatus::ApprovedByChief | VacationStatus::Approved
                    ),
                active: pending && chief.is_none(),
                rejected: rejected && chief.is_some() && principal.is_none(),
                ..WorkflowStep::new(WorkflowStage::ChiefReview)
            }
            .reviewed(chief, request.chief_review_comment.as_ref()),
        );
    }

    steps.push(
        WorkflowStep {
            completed: status == VacationStatus::Approved,
            active: status == VacationStatus::ApprovedByChief
                || (pending && !request.is_chief_required),
            rejected: rejected && principal.is_some(),
            ..WorkflowStep::new(WorkflowStage::PrincipalApproval)
        }
        .reviewed(principal, request.principal_review_comment.as_ref()),
    );

    let mut anomaly = None;
    if rejected && chief.is_none() && principal.is_none() {
        tracing::warn!(
            chief_required = request.is_chief_required,
            "Vacation request is rejected but no reviewer is recorded"
        );
        if let Some(step) = steps.iter_mut().find(|step| !step.completed) {
            step.rejected = true;
        }
        anomaly = Some(WorkflowAnomaly::UnattributedRejection);
    }

    let completed = steps.iter().filter(|step| step.completed).count();
    let progress = completed as f64 / steps.len() as f64;

    WorkflowView {
        status_message: status_message(request),
        steps,
        progress,
        anomaly,
    }
}

fn status_message(request: &VacationRequest) -> StatusMessage {
    match request.status {
        VacationStatus::Pending
            if request.reviewed_by_chief.is_none() && request.is_chief_required =>
        {
            StatusMessage::AwaitingChiefReview
        }
        // Also covers a pending request whose chief review is already recorded.
        VacationStatus::Pending => StatusMessage::AwaitingPrincipalApproval,
        VacationStatus::ApprovedByChief => StatusMessage::ApprovedByChief,
        VacationStatus::Approved => StatusMessage::FullyApproved,
        VacationStatus::Rejected => StatusMessage::Rejected,
    }
}
