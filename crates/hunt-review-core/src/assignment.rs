//! Reviewer self-assignment
//!
//! One endpoint flips the caller's assignment in both directions; the
//! backend decides based on the hunt's current reviewer.

use crate::api::ReviewApi;
use crate::models::{Hunt, HuntId};
use crate::ClientResult;

pub const REJECTED_MESSAGE: &str = "Could not update the assignment for this hunt.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOutcome {
    Toggled,
    Rejected { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentAction {
    Assign,
    Unassign,
}

/// What a view does after a successful toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Reload,
    ReturnToDashboard,
}

impl AssignmentAction {
    pub fn for_hunt(hunt: &Hunt) -> Self {
        if hunt.is_unassigned() {
            AssignmentAction::Assign
        } else {
            AssignmentAction::Unassign
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssignmentAction::Assign => "Assign me",
            AssignmentAction::Unassign => "Unassign me",
        }
    }

    pub fn follow_up(&self) -> FollowUp {
        match self {
            AssignmentAction::Assign => FollowUp::Reload,
            AssignmentAction::Unassign => FollowUp::ReturnToDashboard,
        }
    }
}

/// Only a plain 200 counts as success
pub async fn toggle_assignment(
    api: &dyn ReviewApi,
    hunt_id: HuntId,
) -> ClientResult<AssignmentOutcome> {
    let status = api.toggle_assignment(hunt_id).await?;
    if status == 200 {
        tracing::info!(hunt_id, "assignment toggled");
        Ok(AssignmentOutcome::Toggled)
    } else {
        tracing::warn!(hunt_id, status, "assignment rejected");
        Ok(AssignmentOutcome::Rejected { status })
    }
}
