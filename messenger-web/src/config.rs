//! Frontend configuration module
//!
//! Build-time settings for the API location and notification behaviour.

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

/// Frontend configuration for API access and notifications
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL every API path is resolved against
    pub api_base_url: String,
    /// How long a toast stays on screen, in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_overrides(
            option_env!("MESSENGER_API_BASE_URL"),
            option_env!("MESSENGER_TOAST_DURATION_MS"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from optional raw overrides, falling back to
    /// defaults for anything missing or unparsable.
    pub fn from_overrides(api_base_url: Option<&str>, toast_duration_ms: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();
        let toast_duration_ms = toast_duration_ms
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_TOAST_DURATION_MS);

        Self {
            api_base_url,
            toast_duration_ms,
        }
    }
}
