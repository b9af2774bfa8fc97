//! Sampling parameters sent with each generation request.

use biasprobe_core::ProviderKind;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: None,
            top_k: None,
            repetition_penalty: None,
            stop: Vec::new(),
        }
    }
}

impl GenerationParams {
    /// Sampling used for the Llama chat template on Together.
    pub fn together() -> Self {
        Self {
            top_p: Some(0.7),
            top_k: Some(50),
            repetition_penalty: Some(1.0),
            stop: vec!["[/INST]".into(), "</s>".into()],
            ..Self::default()
        }
    }

    pub fn for_provider(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Gemini => Self::default(),
            ProviderKind::Together => Self::together(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults() {
        let gemini = GenerationParams::for_provider(ProviderKind::Gemini);
        assert_eq!(gemini.temperature, 0.7);
        assert_eq!(gemini.max_tokens, 500);
        assert!(gemini.stop.is_empty());

        let together = GenerationParams::for_provider(ProviderKind::Together);
        assert_eq!(together.top_k, Some(50));
        assert_eq!(together.stop, vec!["[/INST]", "</s>"]);
    }
}
