// SPDX-License-Identifier: MPL-2.0
//! Cancellable delayed callbacks.
//!
//! The player runs on a single UI thread, so timers do not call back into
//! the player directly. A [`Scheduler`] hands out a [`TimerId`]; when the
//! delay elapses the host delivers that id back to the owner (for the
//! player: [`PlayerStore::on_timer`](super::PlayerStore::on_timer)).
//! Owners ignore ids they no longer wait for, so a cancel that races with a
//! fire is harmless.

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies one scheduled timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Schedules and cancels delayed callbacks.
pub trait Scheduler {
    /// Schedules a timeout and returns its id.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancels a pending timeout. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Deterministic scheduler driven by a virtual clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<(Duration, TimerId)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timeouts waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward and returns the ids that fired, in deadline order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let now = self.now;
        let mut fired: Vec<(Duration, TimerId)> = Vec::new();
        self.pending.retain(|&(deadline, id)| {
            if deadline <= now {
                fired.push((deadline, id));
                false
            } else {
                true
            }
        });
        fired.sort();
        fired.into_iter().map(|(_, id)| id).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push((self.now + delay, id));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|&(_, pending)| pending != id);
    }
}

/// Scheduler backed by tokio timers.
///
/// Each timeout is a sleeping task that sends its id on an unbounded
/// channel; cancelling aborts the task.
#[derive(Debug)]
pub struct TokioScheduler {
    handle: tokio::runtime::Handle,
    sender: mpsc::UnboundedSender<TimerId>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
    next_id: u64,
}

impl TokioScheduler {
    /// Creates a scheduler on the current runtime and the receiver for fired ids.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        Self::with_handle(tokio::runtime::Handle::current())
    }

    /// Creates a scheduler spawning on `handle`.
    pub fn with_handle(
        handle: tokio::runtime::Handle,
    ) -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                handle,
                sender,
                tasks: HashMap::new(),
                next_id: 0,
            },
            receiver,
        )
    }

    /// Number of timeouts that have neither fired nor been cancelled.
    pub fn pending_count(&self) -> usize {
        self.tasks.values().filter(|t| !t.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());

        let id = TimerId(self.next_id);
        self.next_id += 1;
        let sender = self.sender.clone();
        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(id);
        });
        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_fires_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        let late = scheduler.schedule(Duration::from_millis(300));
        let early = scheduler.schedule(Duration::from_millis(100));

        assert!(scheduler.advance(Duration::from_millis(50)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(300)), vec![early, late]);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn manual_cancel_prevents_fire() {
        let mut scheduler = ManualScheduler::new();
        let id = scheduler.schedule(Duration::from_millis(100));
        scheduler.cancel(id);
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn manual_ids_are_unique() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.schedule(Duration::ZERO);
        let b = scheduler.schedule(Duration::ZERO);
        assert_ne!(a, b);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_delivers_fired_ids() {
        let (mut scheduler, mut fired) = TokioScheduler::new();
        let id = scheduler.schedule(Duration::from_millis(200));

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(fired.recv().await, Some(id));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_cancel_aborts_timer() {
        let (mut scheduler, mut fired) = TokioScheduler::new();
        let cancelled = scheduler.schedule(Duration::from_millis(100));
        let kept = scheduler.schedule(Duration::from_millis(200));
        scheduler.cancel(cancelled);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(fired.recv().await, Some(kept));
        assert!(fired.try_recv().is_err());
    }
}
