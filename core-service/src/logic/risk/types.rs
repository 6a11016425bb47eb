//! Risk Types
//!
//! Core types cho risk classification.
//! KHÔNG chứa logic - chỉ data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK CATEGORY
// ============================================================================

/// Risk tiers of the hybrid score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    /// hybrid < 0.3
    Low,
    /// 0.3 <= hybrid < 0.7
    Moderate,
    /// hybrid >= 0.7
    High,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::High => "High",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskCategory::Low => 0,
            RiskCategory::Moderate => 1,
            RiskCategory::High => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskCategory::Low => "#34d399",      // Emerald
            RiskCategory::Moderate => "#fbbf24", // Amber
            RiskCategory::High => "#fb7185",     // Rose
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// HYBRID RESULT
// ============================================================================

/// Combined score + tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridResult {
    /// (rf + xgb) / 2
    pub hybrid: f64,
    pub risk_category: RiskCategory,
}

impl HybridResult {
    /// Hybrid score as a one-decimal percentage, e.g. "4.0%"
    pub fn percent_label(&self) -> String {
        format_percent(self.hybrid)
    }
}

/// `(score * 100).toFixed(1)` + "%". Ties round up, không phải round-half-even.
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", (score * 1000.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.04), "4.0%");
        assert_eq!(format_percent(0.95), "95.0%");
        assert_eq!(format_percent(0.735), "73.5%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn test_format_percent_ties_round_up() {
        assert_eq!(format_percent(0.0025), "0.3%");
        assert_eq!(format_percent(0.0005), "0.1%");
        assert_eq!(format_percent(0.1235), "12.4%");
    }
}
