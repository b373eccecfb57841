//! Fixed-schedule retry for the startup content load
//!
//! The startup reads (site content, adventures) get three retries with
//! delays of 1s, 2s and 5s before the load error is surfaced. This is the
//! only retry policy in the service; booking writes and side effects are
//! deliberately single-shot.

use std::future::Future;
use std::time::Duration;

/// Delays between attempts: initial try + one retry per entry
pub const LOAD_RETRY_DELAYS: [Duration; 3] = [
    Duration::from_secs(1),
    Duration::from_secs(2),
    Duration::from_secs(5),
];

/// Run `op` up to `1 + LOAD_RETRY_DELAYS.len()` times.
///
/// Returns the first success, or the last error once the schedule is
/// exhausted. Intermediate failures log at WARN with the attempt number.
pub async fn with_retry<T, E, F, Fut>(op_name: &str, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut last_err = match op().await {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    for (attempt, delay) in LOAD_RETRY_DELAYS.iter().enumerate() {
        tracing::warn!(
            "{op_name} failed (attempt {}): {last_err}, retrying in {:?}",
            attempt + 1,
            delay
        );
        tokio::time::sleep(*delay).await;

        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => last_err = e,
        }
    }

    tracing::error!(
        "{op_name} failed after {} attempts: {last_err}",
        LOAD_RETRY_DELAYS.len() + 1
    );
    Err(last_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_four_attempts() {
        let attempts = Cell::new(0u32);
        let result: Result<(), &str> = with_retry("load", || {
            attempts.set(attempts.get() + 1);
            async { Err("connection refused") }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(attempts.get(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn returns_first_success_without_sleeping() {
        let start = tokio::time::Instant::now();
        let result: Result<u32, &str> = with_retry("load", || async { Ok(7) }).await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn recovers_mid_schedule() {
        let attempts = Cell::new(0u32);
        let result: Result<u32, &str> = with_retry("load", || {
            attempts.set(attempts.get() + 1);
            let n = attempts.get();
            async move { if n < 3 { Err("not yet") } else { Ok(n) } }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(attempts.get(), 3);
    }
}
