//! Risk Module
//!
//! Combine hai model probabilities -> hybrid score -> Low/Moderate/High.
//!
//! ## Structure
//! - `types`: RiskCategory, HybridResult
//! - `rules`: tier thresholds
//! - `classifier`: combine + classify logic
//!
//! ## Usage
//! ```ignore
//! use crate::logic::risk::{combine, RiskCategory};
//!
//! let result = combine(&scores);
//! match result.risk_category {
//!     RiskCategory::Low => println!("Routine screening"),
//!     RiskCategory::Moderate => println!("Follow up"),
//!     RiskCategory::High => println!("Refer to specialist"),
//! }
//! ```

pub mod types;
pub mod rules;
pub mod classifier;

// Re-export main types for convenience
pub use types::{format_percent, HybridResult, RiskCategory};

pub use rules::{RiskThresholds, HIGH_THRESHOLD, LOW_THRESHOLD};

pub use classifier::{classify, classify_with_thresholds, combine, combine_with_thresholds};
