//! Runtime configuration
//!
//! Đọc từ environment (+ `.env` qua dotenvy) một lần lúc startup.
//! Thiếu API key KHÔNG phải lỗi startup - explanation sẽ rơi về fallback.

use crate::constants;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Secret for the explanation service
    pub api_key: Option<String>,

    /// Text-generation model name
    pub model: String,

    /// Explanation service base URL
    pub api_base: String,

    /// Transport timeout (seconds)
    pub timeout_secs: u64,

    /// Kill-switch for remote explanations
    pub explain_enabled: bool,

    /// env_logger filter (`RUST_LOG`)
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: constants::DEFAULT_MODEL.to_string(),
            api_base: constants::DEFAULT_API_BASE.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            explain_enabled: true,
            log_filter: constants::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_key: constants::get_api_key(),
            model: constants::get_model(),
            api_base: constants::get_api_base(),
            timeout_secs: constants::get_timeout_secs(),
            explain_enabled: constants::is_explain_enabled(),
            log_filter: constants::get_log_filter(),
        }
    }

    /// Load configuration from any key -> value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: constants::api_key_from(&lookup),
            model: constants::model_from(&lookup),
            api_base: constants::api_base_from(&lookup),
            timeout_secs: constants::timeout_secs_from(&lookup),
            explain_enabled: constants::explain_enabled_from(&lookup),
            log_filter: constants::log_filter_from(&lookup),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Safe-to-log summary (no secrets)
    pub fn summary(&self) -> String {
        format!(
            "model={} api_base={} timeout={}s explain={} api_key={}",
            self.model,
            self.api_base,
            self.timeout_secs,
            if self.explain_enabled { "on" } else { "off" },
            if self.has_api_key() { "set" } else { "missing" },
        )
    }
}
