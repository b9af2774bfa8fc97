//! Biasprobe Chat: prompt construction and remote text generation.
//!
//! Providers implement `TextGenerator` and return the full response text
//! for one prompt. Gemini and Together are supported; both are plain
//! request/response calls with no streaming.

pub mod prompt;
pub mod providers;
pub mod types;

pub use prompt::PromptMode;
pub use providers::{GeminiClient, Provider, TextGenerator, TogetherClient};
pub use types::GenerationParams;
