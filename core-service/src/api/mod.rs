//! API Module
//!
//! Command surface cho front end (form -> report).
//!
//! Structure:
//! - commands.rs: analysis + form commands
//! - engine_status.rs: loading flag / state snapshot

pub mod commands;
pub mod engine_status;

pub use commands::*;
pub use engine_status::{get_engine_status, EngineStatus, ExplanationStatus};
