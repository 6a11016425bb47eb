//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Every value can be overridden from the environment (or a `.env` file).

/// Default explanation service endpoint (Gemini REST API)
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default text-generation model
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default transport timeout for the explanation call (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log filter (env_logger syntax)
pub const DEFAULT_LOG_FILTER: &str = "info";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "DiaGuard";

// ============================================
// Environment variable names
// ============================================

pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_API_KEY_ALT: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "DIAGUARD_MODEL";
pub const ENV_API_BASE: &str = "DIAGUARD_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "DIAGUARD_TIMEOUT_SECS";
pub const ENV_EXPLAIN_ENABLED: &str = "DIAGUARD_EXPLAIN_ENABLED";
pub const ENV_LOG_FILTER: &str = "RUST_LOG";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the API key, `API_KEY` first then `GEMINI_API_KEY`.
/// Blank values count as missing.
pub fn get_api_key() -> Option<String> {
    api_key_from(|key| std::env::var(key).ok())
}

/// Get model name from environment or use default
pub fn get_model() -> String {
    model_from(|key| std::env::var(key).ok())
}

/// Get API base URL from environment or use default
pub fn get_api_base() -> String {
    api_base_from(|key| std::env::var(key).ok())
}

/// Get transport timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    timeout_secs_from(|key| std::env::var(key).ok())
}

/// Check if remote explanations are enabled
pub fn is_explain_enabled() -> bool {
    explain_enabled_from(|key| std::env::var(key).ok())
}

/// Get log filter from environment or use default
pub fn get_log_filter() -> String {
    log_filter_from(|key| std::env::var(key).ok())
}

// Lookup-based variants, shared by the env getters and `AppConfig::from_lookup`.

pub(crate) fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    [ENV_API_KEY, ENV_API_KEY_ALT]
        .iter()
        .filter_map(|key| lookup(*key))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

pub(crate) fn model_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(ENV_MODEL)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

pub(crate) fn api_base_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(ENV_API_BASE)
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

pub(crate) fn timeout_secs_from(lookup: impl Fn(&str) -> Option<String>) -> u64 {
    lookup(ENV_TIMEOUT_SECS)
        .and_then(|s| s.trim().parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

pub(crate) fn explain_enabled_from(lookup: impl Fn(&str) -> Option<String>) -> bool {
    lookup(ENV_EXPLAIN_ENABLED)
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(true)
}

pub(crate) fn log_filter_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(ENV_LOG_FILTER)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
