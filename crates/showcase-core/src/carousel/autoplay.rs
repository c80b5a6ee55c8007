//! Autoplay timer lifecycle.
//!
//! A running timer is a tokio task ticking at a fixed delay. Each start gets
//! a new generation number; the tick callback receives it and is expected to
//! ignore ticks whose generation is no longer current. Together with the
//! cancellation token this means a stop followed by a start never lets the
//! old timer advance the carousel.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// What the timer does after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Stop,
}

#[derive(Debug)]
struct RunningTimer {
    generation: u64,
    cancel_token: CancellationToken,
}

/// Owns at most one repeating timer.
#[derive(Debug, Default)]
pub(crate) struct AutoplayTimer {
    generation: u64,
    running: Option<RunningTimer>,
}

impl AutoplayTimer {
    pub(crate) const fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Whether `generation` belongs to the timer that is currently running.
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.running
            .as_ref()
            .is_some_and(|timer| timer.generation == generation)
    }

    /// Start a repeating timer that calls `on_tick` every `delay`.
    ///
    /// The first tick fires one full `delay` after the call. Returns the
    /// generation of the new timer, or `None` if one is already running or no
    /// tokio runtime is available.
    pub(crate) fn start<F>(&mut self, delay: Duration, mut on_tick: F) -> Option<u64>
    where
        F: FnMut(u64) -> TickControl + Send + 'static,
    {
        if self.running.is_some() {
            return None;
        }
        let Ok(handle) = Handle::try_current() else {
            warn!("No async runtime available, autoplay disabled");
            return None;
        };

        self.generation += 1;
        let generation = self.generation;
        let cancel_token = CancellationToken::new();
        let task_token = cancel_token.clone();
        let first_tick = Instant::now() + delay;

        handle.spawn(async move {
            let mut ticker = interval_at(first_tick, delay);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    () = task_token.cancelled() => {
                        debug!(generation, "Autoplay timer cancelled");
                        break;
                    }
                    _ = ticker.tick() => {
                        if on_tick(generation) == TickControl::Stop {
                            debug!(generation, "Autoplay timer finished");
                            break;
                        }
                    }
                }
            }
        });

        self.running = Some(RunningTimer {
            generation,
            cancel_token,
        });
        Some(generation)
    }

    /// Cancel the running timer, if any. Returns whether one was running.
    pub(crate) fn stop(&mut self) -> bool {
        match self.running.take() {
            Some(timer) => {
                timer.cancel_token.cancel();
                true
            }
            None => false,
        }
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn counter() -> (Arc<AtomicUsize>, impl FnMut(u64) -> TickControl + Send + 'static) {
        let ticks = Arc::new(AtomicUsize::new(0));
        let seen = ticks.clone();
        (ticks, move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            TickControl::Continue
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_after_each_delay() {
        let mut timer = AutoplayTimer::default();
        let (ticks, on_tick) = counter();
        assert!(timer.start(Duration::from_millis(100), on_tick).is_some());
        settle().await;

        tokio::time::advance(Duration::from_millis(99)).await;
        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_millis(100)).await;
        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_is_noop() {
        let mut timer = AutoplayTimer::default();
        let (_, first) = counter();
        let (_, second) = counter();
        let generation = timer.start(Duration::from_millis(100), first).unwrap();
        assert!(timer.start(Duration::from_millis(100), second).is_none());
        assert!(timer.is_current(generation));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_and_is_idempotent() {
        let mut timer = AutoplayTimer::default();
        let (ticks, on_tick) = counter();
        let generation = timer.start(Duration::from_millis(100), on_tick).unwrap();
        settle().await;

        assert!(timer.stop());
        assert!(!timer.stop());
        assert!(!timer.is_running());
        assert!(!timer.is_current(generation));

        tokio::time::advance(Duration::from_millis(500)).await;
        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_can_stop_timer() {
        let mut timer = AutoplayTimer::default();
        let ticks = Arc::new(AtomicUsize::new(0));
        let seen = ticks.clone();
        timer.start(Duration::from_millis(10), move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            TickControl::Stop
        });
        settle().await;

        tokio::time::advance(Duration::from_millis(50)).await;
        settle().await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_start_without_runtime() {
        let mut timer = AutoplayTimer::default();
        let (_, on_tick) = counter();
        assert!(timer.start(Duration::from_millis(10), on_tick).is_none());
        assert!(!timer.is_running());
    }
}
