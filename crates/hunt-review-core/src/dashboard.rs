//! Dashboard fetch cycle
//!
//! Hunts waiting for a reviewer and hunts assigned to the caller are
//! requested together. The cycle settles only after both have answered and
//! fails as a whole if either did.

use crate::api::ReviewApi;
use crate::models::{Hunt, HuntStatus};
use crate::ClientResult;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch hunts. Please try again later.";

/// Status filter for the "Available" column
pub const AVAILABLE_STATUS: HuntStatus = HuntStatus::UnderReview;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub available: Vec<Hunt>,
    pub assigned: Vec<Hunt>,
}

pub async fn load_dashboard(api: &dyn ReviewApi) -> ClientResult<DashboardData> {
    let (available, assigned) =
        futures::join!(api.hunts_by_status(AVAILABLE_STATUS), api.assigned_hunts());

    let data = DashboardData {
        available: available?.content,
        assigned: assigned?,
    };

    tracing::debug!(
        available = data.available.len(),
        assigned = data.assigned.len(),
        "dashboard loaded"
    );
    Ok(data)
}
