// SPDX-License-Identifier: MPL-2.0
//! Idle/activity timer driving controls auto-hide.
//!
//! Active → (timeout with no activity) → Idle → (activity) → Active.
//!
//! At most one timeout is pending; every reset cancels it before scheduling
//! a new one. Whatever the timer says, the player only reports idle while
//! playing.

use super::scheduler::{Scheduler, TimerId};
use crate::domain::ui::IdleTimeout;
use crate::domain::video::PlayerStatus;

/// Debounced inactivity timer.
#[derive(Debug, Clone)]
pub struct IdleTimer {
    timeout: IdleTimeout,
    prevent_when_paused: bool,
    pending: Option<TimerId>,
    expired: bool,
}

impl IdleTimer {
    pub fn new(timeout: IdleTimeout, prevent_when_paused: bool) -> Self {
        Self {
            timeout,
            prevent_when_paused,
            pending: None,
            expired: false,
        }
    }

    /// Records activity: clears idle and restarts the countdown.
    ///
    /// While paused with `prevent_when_paused`, the countdown stays disarmed.
    pub fn reset(&mut self, scheduler: &mut impl Scheduler, status: PlayerStatus) {
        self.cancel(scheduler);
        if self.holds_visible(status) {
            return;
        }
        self.pending = Some(scheduler.schedule(self.timeout.as_duration()));
    }

    /// Reacts to a status transition.
    pub fn on_status_change(
        &mut self,
        scheduler: &mut impl Scheduler,
        previous: PlayerStatus,
        status: PlayerStatus,
    ) {
        if !self.prevent_when_paused {
            return;
        }
        if status.is_paused() {
            self.cancel(scheduler);
        } else if previous.is_paused() {
            self.reset(scheduler, status);
        }
    }

    /// Handles a fired timeout. Returns true if it was the pending one.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;
        self.expired = true;
        true
    }

    /// Cancels the pending timeout and clears idle.
    pub fn cancel(&mut self, scheduler: &mut impl Scheduler) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
        self.expired = false;
    }

    /// Whether controls should be hidden for `status`.
    pub fn is_idle(&self, status: PlayerStatus) -> bool {
        self.expired && status.is_playing()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn timeout(&self) -> IdleTimeout {
        self.timeout
    }

    fn holds_visible(&self, status: PlayerStatus) -> bool {
        self.prevent_when_paused && status.is_paused()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video_player::scheduler::ManualScheduler;
    use std::time::Duration;

    fn timer(prevent: bool) -> IdleTimer {
        IdleTimer::new(IdleTimeout::from_millis(1_000), prevent)
    }

    fn run(timer: &mut IdleTimer, scheduler: &mut ManualScheduler, ms: u64) {
        for id in scheduler.advance(Duration::from_millis(ms)) {
            timer.fire(id);
        }
    }

    #[test]
    fn goes_idle_after_timeout_while_playing() {
        let mut scheduler = ManualScheduler::new();
        let mut idle = timer(true);
        idle.reset(&mut scheduler, PlayerStatus::Playing);

        run(&mut idle, &mut scheduler, 999);
        assert!(!idle.is_idle(PlayerStatus::Playing));
        run(&mut idle, &mut scheduler, 1);
        assert!(idle.is_idle(PlayerStatus::Playing));
    }

    #[test]
    fn reset_keeps_single_pending_timeout() {
        let mut scheduler = ManualScheduler::new();
        let mut idle = timer(true);
        for _ in 0..5 {
            idle.reset(&mut scheduler, PlayerStatus::Playing);
            run(&mut idle, &mut scheduler, 500);
        }
        assert_eq!(scheduler.pending_count(), 1);
        assert!(!idle.is_idle(PlayerStatus::Playing));
    }

    #[test]
    fn never_idle_unless_playing() {
        let mut scheduler = ManualScheduler::new();
        let mut idle = timer(false);
        idle.reset(&mut scheduler, PlayerStatus::Playing);
        run(&mut idle, &mut scheduler, 2_000);

        assert!(idle.is_idle(PlayerStatus::Playing));
        assert!(!idle.is_idle(PlayerStatus::Paused));
        assert!(!idle.is_idle(PlayerStatus::Waiting));
        assert!(!idle.is_idle(PlayerStatus::Ended));
    }

    #[test]
    fn prevent_when_paused_disarms_timer() {
        let mut scheduler = ManualScheduler::new();
        let mut idle = timer(true);
        idle.reset(&mut scheduler, PlayerStatus::Playing);
        idle.on_status_change(&mut scheduler, PlayerStatus::Playing, PlayerStatus::Paused);

        assert!(!idle.has_pending());
        run(&mut idle, &mut scheduler, 60_000);
        assert!(!idle.is_idle(PlayerStatus::Paused));

        idle.reset(&mut scheduler, PlayerStatus::Paused);
        assert!(!idle.has_pending());
    }

    #[test]
    fn leaving_pause_rearms_full_timeout() {
        let mut scheduler = ManualScheduler::new();
        let mut idle = timer(true);
        idle.on_status_change(&mut scheduler, PlayerStatus::Playing, PlayerStatus::Paused);
        run(&mut idle, &mut scheduler, 5_000);

        idle.on_status_change(&mut scheduler, PlayerStatus::Paused, PlayerStatus::Playing);
        assert!(idle.has_pending());
        run(&mut idle, &mut scheduler, 500);
        assert!(!idle.is_idle(PlayerStatus::Playing));
        run(&mut idle, &mut scheduler, 500);
        assert!(idle.is_idle(PlayerStatus::Playing));
    }

    #[test]
    fn stale_timer_ids_are_ignored() {
        let mut scheduler = ManualScheduler::new();
        let mut idle = timer(true);
        idle.reset(&mut scheduler, PlayerStatus::Playing);
        let stale = scheduler.schedule(Duration::ZERO);
        assert!(!idle.fire(stale));
        assert!(!idle.is_idle(PlayerStatus::Playing));
    }
}
