use crate::languages::Language;

pub const DEFAULT_BASE_URL: &str = "https://transcriptor-backend-3-dc5w.onrender.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;

/// Runtime configuration, read from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the backend hosting the three endpoints.
    pub base_url: String,
    /// Per-request timeout applied to every backend call.
    pub request_timeout_secs: u64,
    /// Language pre-selected for the translation view.
    pub default_language: Language,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("TRANSCRIPTOR_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout_secs = std::env::var("TRANSCRIPTOR_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let default_language = std::env::var("TRANSCRIPTOR_LANGUAGE")
            .ok()
            .and_then(|v| Language::from_code(&v))
            .unwrap_or_default();

        Self {
            base_url,
            request_timeout_secs,
            default_language,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_language: Language::default(),
        }
    }
}
