//! Cancellable delayed events
//!
//! Every simulated latency in the workbench (assistant reply, copy indicator,
//! build, preview load) is a [`TimerScope`] entry. Timers run as tokio tasks and
//! deliver their event over a channel; the owning component drains the channel
//! from its `poll()` on the UI thread. Dropping the scope cancels every
//! outstanding timer, so a discarded component never receives a late write.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A set of delayed events sharing one cancellation token
pub struct TimerScope<E> {
    name: &'static str,
    runtime: Handle,
    token: CancellationToken,
    tx: UnboundedSender<E>,
    rx: UnboundedReceiver<E>,
    in_flight: Arc<AtomicUsize>,
}

impl<E: Send + 'static> TimerScope<E> {
    /// Create a scope spawning its timers on `runtime`
    pub fn new(name: &'static str, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            name,
            runtime,
            token: CancellationToken::new(),
            tx,
            rx,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Deliver `event` after `delay` unless the scope is cancelled first
    pub fn schedule(&self, delay: Duration, event: E) {
        let token = self.token.child_token();
        let tx = self.tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        let name = self.name;
        let deadline = tokio::time::Instant::now() + delay;

        in_flight.fetch_add(1, Ordering::SeqCst);
        self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!("{} timer cancelled before firing", name);
                }
                _ = tokio::time::sleep_until(deadline) => {
                    if tx.send(event).is_err() {
                        debug!("{} timer fired after owner was dropped", name);
                    }
                }
            }
            in_flight.fetch_sub(1, Ordering::SeqCst);
        });
    }

    /// Take every event that has fired since the last call, in firing order
    pub fn drain(&mut self) -> Vec<E> {
        let mut fired = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            fired.push(event);
        }
        fired
    }

    /// Cancel outstanding timers and discard events not yet drained.
    ///
    /// The scope stays usable; later `schedule` calls get a fresh token and
    /// channel. A timer that already passed its deadline still holds a sender
    /// to the old channel, so its event can no longer reach `drain`.
    pub fn cancel_all(&mut self) {
        self.token.cancel();
        self.token = CancellationToken::new();
        let (tx, rx) = mpsc::unbounded_channel();
        self.tx = tx;
        let mut stale = std::mem::replace(&mut self.rx, rx);
        stale.close();
        let mut discarded = 0;
        while stale.try_recv().is_ok() {
            discarded += 1;
        }
        if discarded > 0 {
            debug!("{} discarded {} undelivered events", self.name, discarded);
        }
    }

    /// Number of timers that have neither fired nor been cancelled
    pub fn pending(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

impl<E> Drop for TimerScope<E> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_events_fire_in_deadline_order() {
        let mut scope = TimerScope::new("test", Handle::current());
        scope.schedule(Duration::from_millis(300), "late");
        scope.schedule(Duration::from_millis(100), "early");

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(scope.drain().is_empty());
        assert_eq!(scope.pending(), 2);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(scope.drain(), vec!["early", "late"]);
        assert_eq!(scope.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_suppresses_pending_events() {
        let mut scope = TimerScope::new("test", Handle::current());
        scope.schedule(Duration::from_millis(100), 1);
        scope.cancel_all();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(scope.drain().is_empty());
        assert_eq!(scope.pending(), 0);

        // Still usable afterwards
        scope.schedule(Duration::from_millis(100), 2);
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(scope.drain(), vec![2]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_cancel_all_wins_against_expiring_timers() {
        let mut scope = TimerScope::new("test", Handle::current());
        let mut leaked = 0;

        for _ in 0..2_000 {
            scope.schedule(Duration::ZERO, 1);
            scope.cancel_all();
            while scope.pending() > 0 {
                tokio::task::yield_now().await;
            }
            leaked += scope.drain().len();
        }

        assert_eq!(leaked, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_outstanding_timers() {
        let scope = TimerScope::new("test", Handle::current());
        let in_flight = Arc::clone(&scope.in_flight);
        scope.schedule(Duration::from_millis(100), ());
        assert_eq!(in_flight.load(Ordering::SeqCst), 1);

        drop(scope);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
    }
}
