//! Explain Module - AI Explanation Layer
//!
//! Gửi feature record + hybrid score lên text-generation service,
//! nhận analysis / recommendations / top factors.
//! Mọi lỗi remote đều bị hấp thụ ở `ExplanationRequester` -> fallback.
//!
//! ## Structure
//! - `types`: ExplanationResult + static fallback
//! - `prompt`: request payload, prompt text, output schema
//! - `provider`: ExplanationProvider trait + ExplainError
//! - `gemini`: HTTP provider
//! - `engine`: ExplanationRequester (failure boundary)

pub mod types;
pub mod prompt;
pub mod provider;
pub mod gemini;
pub mod engine;

pub use types::{Explanation, ExplanationResult, ExplanationSource};
pub use prompt::{response_schema, ExplanationRequest};
pub use provider::{ExplainError, ExplanationProvider};
pub use gemini::{parse_explanation, GeminiClient, GeminiConfig};
pub use engine::ExplanationRequester;
