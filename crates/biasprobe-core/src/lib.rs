//! biasprobe core: error type and environment-driven configuration.

pub mod config;
pub mod error;

pub use config::{ProbeConfig, ProviderKind};
pub use error::{Error, Result};
