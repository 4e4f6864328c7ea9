use std::fmt::Display;
use std::future::Future;

/// Bounded retry without backoff.
///
/// Attempts run strictly one after another; the next attempt starts only once
/// the previous future has completed. Every failure is logged as a warning
/// carrying the attempt number. Errors the caller classifies as permanent end
/// the loop immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    /// Creates a policy; a bound of zero is treated as a single attempt.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Runs `operation` until it succeeds, fails permanently, or the bound is hit.
    ///
    /// `operation` receives the 1-based attempt number. The last error is
    /// returned when no attempt succeeded.
    pub async fn run<T, E, F, Fut, P>(
        &self,
        context: &str,
        mut operation: F,
        is_transient: P,
    ) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
        E: Display,
    {
        let mut attempt = 1;
        loop {
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(error) => {
                    tracing::warn!(
                        "{}: {}, attempt {}/{}",
                        context,
                        error,
                        attempt,
                        self.max_attempts
                    );
                    if attempt >= self.max_attempts || !is_transient(&error) {
                        return Err(error);
                    }
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}
