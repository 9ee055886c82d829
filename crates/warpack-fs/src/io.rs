//! Text reads with retry on transient failures

use std::fs;
use std::io::ErrorKind;
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;

use crate::{Error, NormalizedPath, Result};

/// Retry policy for reading configuration sources.
///
/// Only transient kinds (`Interrupted`, `WouldBlock`, `TimedOut`) are retried.
/// Everything else, including `NotFound`, fails on the first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// Delay before the first retry
    pub initial_interval: Duration,
    /// Upper bound on the delay between two attempts
    pub max_interval: Duration,
    /// Give up once this much time has passed since the first attempt
    pub max_elapsed: Duration,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(20),
            max_interval: Duration::from_millis(250),
            max_elapsed: Duration::from_secs(2),
        }
    }
}

impl RobustnessConfig {
    /// A policy that never retries.
    pub fn no_retry() -> Self {
        Self {
            initial_interval: Duration::ZERO,
            max_interval: Duration::ZERO,
            max_elapsed: Duration::ZERO,
        }
    }
}

fn is_transient(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Interrupted | ErrorKind::WouldBlock | ErrorKind::TimedOut
    )
}

/// Read text content from a file with the default retry policy.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    read_text_with(path, RobustnessConfig::default())
}

/// Read text content from a file, retrying transient failures.
pub fn read_text_with(path: &NormalizedPath, robustness: RobustnessConfig) -> Result<String> {
    let native_path = path.to_native();
    let policy = ExponentialBackoffBuilder::new()
        .with_initial_interval(robustness.initial_interval)
        .with_max_interval(robustness.max_interval)
        .with_max_elapsed_time(Some(robustness.max_elapsed))
        .build();

    let op = || {
        fs::read_to_string(&native_path).map_err(|e| {
            if is_transient(e.kind()) {
                tracing::debug!(path = %native_path.display(), error = %e, "Transient read failure, retrying");
                backoff::Error::transient(e)
            } else {
                backoff::Error::permanent(e)
            }
        })
    };

    backoff::retry(policy, op).map_err(|e| match e {
        backoff::Error::Permanent(source) => Error::io(&native_path, source),
        backoff::Error::Transient { err, .. } => Error::io(&native_path, err),
    })
}
