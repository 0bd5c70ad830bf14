//! # Staffdesk Workflow
//!
//! The vacation approval workflow, as seen from the dashboard.
//!
//! A vacation request moves through up to three stages: it is submitted,
//! optionally reviewed by the Chief Instructor, and finally approved or
//! rejected by the Principal. The transitions themselves happen in the leave
//! service; this crate only projects a request's persisted state into the
//! step list the progress view renders, and tells the caller which review,
//! if any, their role may perform next.
//!
//! - [`steps`]: [`evaluate_approval_steps`] and the step/view types
//! - [`actions`]: [`available_review_action`] for gating approve/reject buttons
//!
//! # Example
//!
//! ```ignore
//! use staffdesk_models::{VacationRequest, VacationStatus};
//! use staffdesk_workflow::evaluate_approval_steps;
//!
//! let view = evaluate_approval_steps(&VacationRequest::new(VacationStatus::ApprovedByChief));
//! assert_eq!(view.steps.len(), 3);
//! assert_eq!(view.message(), "approved by Chief Instructor, waiting for Principal approval");
//! ```

pub mod actions;
pub mod steps;

pub use actions::{ReviewAction, available_review_action, awaited_review};
pub use steps::{
    StatusMessage, WorkflowAnomaly, WorkflowStage, WorkflowStep, WorkflowView,
    evaluate_approval_steps,
};
