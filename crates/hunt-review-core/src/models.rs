//! Records returned by the treasure hunt backend

use serde::{Deserialize, Deserializer, Serialize};

pub type HuntId = i64;

/// Workflow states a hunt can be filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HuntStatus {
    Draft,
    UnderReview,
    Approved,
    Rejected,
}

impl HuntStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HuntStatus::Draft => "DRAFT",
            HuntStatus::UnderReview => "UNDER_REVIEW",
            HuntStatus::Approved => "APPROVED",
            HuntStatus::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for HuntStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn label(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hunt {
    pub id: HuntId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub organizer_id: i64,
    #[serde(default)]
    pub reviewer_id: Option<i64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(rename = "huntStatus", alias = "status", default)]
    pub status: String,
    #[serde(default)]
    pub location: Option<Location>,
}

impl Hunt {
    pub fn is_unassigned(&self) -> bool {
        self.reviewer_id.is_none()
    }

    pub fn reviewer_label(&self) -> String {
        match self.reviewer_id {
            Some(id) => format!("Reviewer ID: {}", id),
            None => "No assigned reviewer".to_string(),
        }
    }

    pub fn start_label(&self) -> &str {
        date_label(&self.start_date)
    }

    pub fn end_label(&self) -> &str {
        date_label(&self.end_date)
    }
}

fn date_label(date: &Option<String>) -> &str {
    match date.as_deref() {
        Some(d) if !d.is_empty() => d,
        _ => "Not set",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeCode {
    pub id: i64,
    pub code: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalSolution {
    pub id: i64,
    pub code: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub challenge_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: i64,
    #[serde(alias = "type", default)]
    pub challenge_type: String,
    #[serde(default)]
    pub external_game_uri: Option<String>,
    /// Kept in the order the backend sent them
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub optimal_solutions: Vec<OptimalSolution>,
    #[serde(default)]
    pub challenge_codes: Vec<ChallengeCode>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Challenge {
    pub fn summary(&self) -> String {
        format!("Type: {} | Points: {}", self.challenge_type, self.points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub score: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub hunt_id: String,
    pub content: String,
    #[serde(default)]
    pub reviewer_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment<'a> {
    pub content: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub access_token: String,
    pub refresh_token: String,
}

/// Envelope of `POST /auth/signin`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Vec<AuthUser>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub timestamp: i64,
}

/// Spring-style paginated collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

/// Body of a failed response, when the backend sends one
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}
