//! Client-side route paths

use crate::models::HuntId;

pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/";
pub const HUNT_DETAIL: &str = "/hunt/:hunt_id";
pub const DIAGNOSTIC: &str = "/test";

/// Route parameter holding the hunt id
pub const HUNT_ID_PARAM: &str = "hunt_id";

pub fn hunt_detail(hunt_id: HuntId) -> String {
    format!("/hunt/{}", hunt_id)
}

/// Parse the `:hunt_id` segment; anything but an integer is rejected
pub fn parse_hunt_id(raw: &str) -> Option<HuntId> {
    raw.trim().parse().ok()
}
