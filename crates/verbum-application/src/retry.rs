//! Retry/Backoff Controller.
//!
//! Runs an attempt function up to `max_attempts` times. Between a retryable
//! failure and the next attempt it waits `base_delay * 2^(n-1)`, where `n`
//! is the attempt that just failed. Terminal failures stop immediately and
//! nothing waits after the last attempt.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use verbum_core::config::RetrySettings;
use verbum_core::error::GenerationError;

/// Where a retry run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    Idle,
    Attempting(u32),
    Retrying { attempt: u32, delay: Duration },
    Success,
    Failed,
}

/// Why a retry run gave up. The wrapped error is for logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetryError {
    /// A non-retryable failure ended the run.
    #[error("terminal failure after {attempts} attempt(s): {error}")]
    Terminal { attempts: u32, error: GenerationError },

    /// Every attempt failed with a retryable error.
    #[error("gave up after {attempts} attempt(s): {error}")]
    Exhausted { attempts: u32, error: GenerationError },

    /// The caller cancelled the run.
    #[error("cancelled after {attempts} attempt(s)")]
    Cancelled { attempts: u32 },
}

impl RetryError {
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Terminal { attempts, .. }
            | Self::Exhausted { attempts, .. }
            | Self::Cancelled { attempts } => *attempts,
        }
    }

    pub fn last_error(&self) -> Option<&GenerationError> {
        match self {
            Self::Terminal { error, .. } | Self::Exhausted { error, .. } => Some(error),
            Self::Cancelled { .. } => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_settings(&RetrySettings::default())
    }
}

impl RetryPolicy {
    /// `max_attempts` is clamped to at least one.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn from_settings(settings: &RetrySettings) -> Self {
        Self::new(settings.max_attempts, settings.base_delay())
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Wait after failed attempt `attempt` (1-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.base_delay.saturating_mul(1u32 << exponent)
    }

    /// The wait before another attempt, or `None` if the run must stop.
    pub fn delay_after(&self, attempt: u32, error: &GenerationError) -> Option<Duration> {
        (error.is_retryable() && attempt < self.max_attempts).then(|| self.backoff(attempt))
    }

    /// Runs `op` until it succeeds, fails terminally, runs out of attempts
    /// or `cancel` fires. `op` receives the 1-based attempt number.
    ///
    /// Both the attempt and the backoff sleep race the token, so a
    /// cancellation is honored without waiting for either.
    pub async fn run<T, F, Fut>(&self, cancel: &CancellationToken, mut op: F) -> Result<T, RetryError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, GenerationError>>,
    {
        let mut state = RetryState::Idle;
        let mut attempt = 0;

        loop {
            if cancel.is_cancelled() {
                transition(&mut state, RetryState::Failed);
                return Err(RetryError::Cancelled { attempts: attempt });
            }

            attempt += 1;
            transition(&mut state, RetryState::Attempting(attempt));

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(GenerationError::Cancelled),
                result = op(attempt) => result,
            };

            let error = match result {
                Ok(value) => {
                    transition(&mut state, RetryState::Success);
                    return Ok(value);
                }
                Err(GenerationError::Cancelled) => {
                    transition(&mut state, RetryState::Failed);
                    return Err(RetryError::Cancelled { attempts: attempt });
                }
                Err(error) => error,
            };

            let delay = self.delay_after(attempt, &error);
            tracing::warn!(
                attempt,
                max_attempts = self.max_attempts,
                status = ?error.status_code(),
                retryable = error.is_retryable(),
                next_delay_ms = delay.map(|d| d.as_millis() as u64),
                "Generation attempt failed: {error}"
            );

            let Some(delay) = delay else {
                transition(&mut state, RetryState::Failed);
                return Err(if error.is_retryable() {
                    RetryError::Exhausted {
                        attempts: attempt,
                        error,
                    }
                } else {
                    RetryError::Terminal {
                        attempts: attempt,
                        error,
                    }
                });
            };

            transition(&mut state, RetryState::Retrying { attempt, delay });
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    transition(&mut state, RetryState::Failed);
                    return Err(RetryError::Cancelled { attempts: attempt });
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}

fn transition(state: &mut RetryState, next: RetryState) {
    tracing::debug!(from = ?state, to = ?next, "Retry state transition");
    *state = next;
}
