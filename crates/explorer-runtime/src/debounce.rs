//! Cancelable quiescence timer.

use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{sleep_until, Instant};

/// Quiescence window for search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Delays an action until no new trigger has arrived for `delay`.
///
/// Each call to [`Debouncer::restart`] cancels the previously returned wait.
/// Dropping the debouncer cancels the pending wait as well.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    cancel: Option<oneshot::Sender<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            cancel: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending wait and start a new window.
    ///
    /// The returned future resolves to `true` once the window elapses, or to
    /// `false` if it was cancelled first. The deadline is fixed now, not when
    /// the future is first polled.
    pub fn restart(&mut self) -> impl Future<Output = bool> + Send + 'static {
        self.cancel();

        let (tx, rx) = oneshot::channel();
        self.cancel = Some(tx);
        let deadline = Instant::now() + self.delay;

        async move {
            tokio::select! {
                _ = sleep_until(deadline) => true,
                _ = rx => false,
            }
        }
    }

    /// Cancel the pending wait. Returns whether one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.cancel.take() {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_elapses_after_window() {
        let mut debouncer = Debouncer::default();
        let started = Instant::now();
        assert!(debouncer.restart().await);
        assert!(started.elapsed() >= DEFAULT_DEBOUNCE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_previous() {
        let mut debouncer = Debouncer::default();
        let first = tokio::spawn(debouncer.restart());
        let second = tokio::spawn(debouncer.restart());

        assert!(!first.await.unwrap());
        assert!(second.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let mut debouncer = Debouncer::default();
        let wait = tokio::spawn(debouncer.restart());
        drop(debouncer);
        assert!(!wait.await.unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_elapsed_is_noop() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        assert!(debouncer.restart().await);
        assert!(!debouncer.cancel());
    }
}
