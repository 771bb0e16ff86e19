//! Client configuration

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1/treasure-hunt";

/// Where the treasure hunt backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let url: String = api_base_url.into();
        Self {
            api_base_url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an API path such as `/hunts/5`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // Browser builds have no process environment, so fall back to the
        // value baked in at compile time.
        let url = std::env::var("HUNT_API_BASE_URL")
            .ok()
            .or_else(|| option_env!("HUNT_API_BASE_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self::new(url)
    }
}
