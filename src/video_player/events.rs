// SPDX-License-Identifier: MPL-2.0
//! Media event adapter.
//!
//! Native media events arrive asynchronously and can interleave (a `seeking`
//! during `waiting`, a `pause` right before `ended`). The adapter keeps one
//! flag per condition and derives a single [`PlayerStatus`] with a fixed
//! priority: `Seeking > Waiting > Ended > Playing/Paused`.

use super::media::MediaEvent;
use crate::domain::video::PlayerStatus;

/// Folds media events into a single status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaEventAdapter {
    started: bool,
    paused: bool,
    waiting: bool,
    seeking: bool,
    ended: bool,
}

impl Default for MediaEventAdapter {
    fn default() -> Self {
        Self {
            started: false,
            paused: true,
            waiting: false,
            seeking: false,
            ended: false,
        }
    }
}

impl MediaEventAdapter {
    /// Applies one event. Events that carry no status information are ignored.
    pub fn apply(&mut self, event: &MediaEvent) {
        match event {
            MediaEvent::Play => {
                self.started = true;
                self.paused = false;
                self.ended = false;
            }
            MediaEvent::Playing => {
                self.started = true;
                self.paused = false;
                self.waiting = false;
            }
            MediaEvent::Pause => {
                self.paused = true;
                self.waiting = false;
            }
            MediaEvent::Waiting => self.waiting = true,
            MediaEvent::CanPlay => self.waiting = false,
            MediaEvent::Seeking => self.begin_seek(),
            MediaEvent::Seeked => self.seeking = false,
            MediaEvent::Ended => {
                self.ended = true;
                self.paused = true;
                self.waiting = false;
            }
            MediaEvent::Emptied => *self = Self::default(),
            _ => {}
        }
    }

    /// Marks a seek as in flight before the element reports `seeking`.
    pub fn begin_seek(&mut self) {
        self.seeking = true;
        self.ended = false;
    }

    /// Whether the element is paused (including at the end).
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The derived status.
    pub fn status(&self) -> PlayerStatus {
        if self.seeking {
            PlayerStatus::Seeking
        } else if self.waiting {
            PlayerStatus::Waiting
        } else if self.ended {
            PlayerStatus::Ended
        } else if !self.started && self.paused {
            PlayerStatus::Idle
        } else if self.paused {
            PlayerStatus::Paused
        } else {
            PlayerStatus::Playing
        }
    }
}
