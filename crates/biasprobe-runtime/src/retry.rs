use std::time::Duration;

use biasprobe_core::ProbeConfig;
use tokio::time::sleep;
use tracing::{info, warn};

/// Bounded attempts with a fixed pause between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: usize,
    delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` is clamped to at least one.
    pub fn new(max_attempts: usize, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(config.max_retries, config.retry_delay())
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Run `f` until it succeeds or the attempts are used up. On failure
    /// returns the last error with the number of attempts made.
    pub async fn retry<F, Fut, T, E>(&self, operation_name: &str, mut f: F) -> Result<T, (E, usize)>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match f().await {
                Ok(value) => {
                    if attempt > 1 {
                        info!(
                            operation = operation_name,
                            attempts = attempt,
                            "Succeeded after retries"
                        );
                    }
                    return Ok(value);
                }
                Err(e) if attempt >= self.max_attempts => {
                    warn!(
                        operation = operation_name,
                        attempts = attempt,
                        error = %e,
                        "Giving up after max attempts"
                    );
                    return Err((e, attempt));
                }
                Err(e) => {
                    warn!(
                        operation = operation_name,
                        attempt = attempt,
                        max_attempts = self.max_attempts,
                        error = %e,
                        "Attempt failed, retrying"
                    );
                    sleep(self.delay).await;
                }
            }
        }
    }
}
