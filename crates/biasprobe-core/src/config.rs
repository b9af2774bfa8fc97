//! Configuration resolved from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TOGETHER_MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct-Turbo";
pub const DEFAULT_MAX_RETRIES: usize = 3;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 2000;

/// Remote text-generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    Together,
}

impl ProviderKind {
    /// Environment variable holding the provider's API key.
    pub fn key_var(&self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI",
            Self::Together => "TOGETHER",
        }
    }

    /// Pause between consecutive samples when none is configured.
    pub fn default_cooldown(&self) -> Duration {
        match self {
            Self::Gemini => Duration::from_millis(1000),
            Self::Together => Duration::from_millis(2000),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gemini => write!(f, "gemini"),
            Self::Together => write!(f, "together"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "together" => Ok(Self::Together),
            other => Err(format!("unknown provider: {}", other)),
        }
    }
}

/// Top-level biasprobe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    #[serde(default)]
    pub together_api_key: Option<String>,
    pub gemini_model: String,
    pub together_model: String,
    /// Attempts per sample before it is skipped.
    pub max_retries: usize,
    /// Fixed wait between failed attempts.
    pub retry_delay_ms: u64,
    /// Overrides the provider's default cooldown when set.
    #[serde(default)]
    pub cooldown_ms: Option<u64>,
    /// Extra `name<TAB>category` table merged into the built-in first names.
    #[serde(default)]
    pub name_table: Option<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            together_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.into(),
            together_model: DEFAULT_TOGETHER_MODEL.into(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            cooldown_ms: None,
            name_table: None,
        }
    }
}

impl ProbeConfig {
    /// Create configuration from process environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            gemini_api_key: var("GEMINI").filter(|k| !k.is_empty()),
            together_api_key: var("TOGETHER").filter(|k| !k.is_empty()),
            gemini_model: var("BIASPROBE_GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            together_model: var("BIASPROBE_TOGETHER_MODEL").unwrap_or(defaults.together_model),
            max_retries: parse_var(&var, "BIASPROBE_MAX_RETRIES")?.unwrap_or(defaults.max_retries),
            retry_delay_ms: parse_var(&var, "BIASPROBE_RETRY_DELAY_MS")?
                .unwrap_or(defaults.retry_delay_ms),
            cooldown_ms: parse_var(&var, "BIASPROBE_COOLDOWN_MS")?,
            name_table: var("BIASPROBE_NAME_TABLE").map(PathBuf::from),
        })
    }

    /// API key for the given provider.
    pub fn api_key(&self, provider: ProviderKind) -> Result<&str> {
        let key = match provider {
            ProviderKind::Gemini => self.gemini_api_key.as_deref(),
            ProviderKind::Together => self.together_api_key.as_deref(),
        };
        key.ok_or_else(|| {
            Error::Config(format!(
                "no API key for {}: set {}",
                provider,
                provider.key_var()
            ))
        })
    }

    /// Model identifier for the given provider.
    pub fn model(&self, provider: ProviderKind) -> &str {
        match provider {
            ProviderKind::Gemini => &self.gemini_model,
            ProviderKind::Together => &self.together_model,
        }
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Pause after each successful sample.
    pub fn cooldown(&self, provider: ProviderKind) -> Duration {
        self.cooldown_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| provider.default_cooldown())
    }
}

fn parse_var<F, T>(var: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match var(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} is not a valid number: {:?}", key, raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("Gemini".parse::<ProviderKind>(), Ok(ProviderKind::Gemini));
        assert_eq!("together".parse::<ProviderKind>(), Ok(ProviderKind::Together));
        assert!("palm".parse::<ProviderKind>().is_err());
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = ProbeConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay(), Duration::from_secs(2));
        assert_eq!(config.model(ProviderKind::Gemini), "gemini-1.5-flash");
        assert_eq!(config.cooldown(ProviderKind::Gemini), Duration::from_secs(1));
        assert_eq!(config.cooldown(ProviderKind::Together), Duration::from_secs(2));
        assert!(config.api_key(ProviderKind::Together).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = ProbeConfig::from_vars(vars(&[
            ("TOGETHER", "secret"),
            ("BIASPROBE_MAX_RETRIES", "5"),
            ("BIASPROBE_COOLDOWN_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.api_key(ProviderKind::Together).unwrap(), "secret");
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.cooldown(ProviderKind::Gemini), Duration::ZERO);
    }

    #[test]
    fn test_bad_number_is_config_error() {
        let err = ProbeConfig::from_vars(vars(&[("BIASPROBE_RETRY_DELAY_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
