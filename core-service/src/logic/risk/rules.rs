//! Risk Tier Thresholds
//!
//! Định nghĩa các threshold cho phân loại risk.
//! KHÔNG chứa logic classify - chỉ constants và config.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS (Constants - không đổi lúc runtime)
// ============================================================================

/// Below this hybrid score = Low
pub const LOW_THRESHOLD: f64 = 0.3;

/// At or above this hybrid score = High
pub const HIGH_THRESHOLD: f64 = 0.7;

// ============================================================================
// CONFIGURABLE THRESHOLDS
// ============================================================================

/// Tier boundaries. Lower bound of each tier is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Below this = Low
    pub low_max: f64,
    /// At or above this = High, between = Moderate
    pub high_min: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_max: LOW_THRESHOLD,
            high_min: HIGH_THRESHOLD,
        }
    }
}
