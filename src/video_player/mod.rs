// SPDX-License-Identifier: MPL-2.0
//! Video player control layer.
//!
//! A headless state machine over a native media element. The media reports
//! events, [`PlayerStore`] mirrors them into a [`PlayerState`], and skins
//! drive playback through the [`PlayerControls`] actions. Keyboard shortcuts,
//! the seek bar and the controls auto-hide timer sit on top of the store.
//!
//! Everything runs on one UI thread. Timers go through a [`Scheduler`] and
//! come back as [`TimerId`]s, so no callback ever races the store.

pub mod buffered;
pub mod captions;
pub mod events;
pub mod idle;
pub mod keyboard;
pub mod listeners;
pub mod media;
pub mod provider;
pub mod scheduler;
pub mod seek_bar;
mod state;
pub mod time_units;

pub use buffered::{buffered_end, TimeRanges};
pub use captions::{CaptionTrack, CaptionTracks};
pub use events::MediaEventAdapter;
pub use idle::IdleTimer;
pub use keyboard::{
    Key, KeyEvent, KeyOutcome, KeyboardRouter, KeyboardScope, Shortcut, TargetKind,
};
pub use listeners::{ListenerGuard, ListenerKind, ListenerRegistry, ListenerTarget};
pub use media::{MediaElement, MediaEvent, RequestKind, SimulatedMedia};
pub use provider::PlayerProvider;
pub use scheduler::{ManualScheduler, Scheduler, TimerId, TokioScheduler};
pub use seek_bar::{
    HoverPreview, SeekBar, SeekBarPhase, ThumbnailCue, ThumbnailTrack, TrackBounds,
};
pub use state::{PlayerControls, PlayerSettings, PlayerState, PlayerStore};

/// A player store over the in-memory media element.
pub type SimulatedPlayer<S> = PlayerStore<SimulatedMedia, S>;

/// Mounts a player over a simulated element of `duration` seconds and
/// applies the element's initial events.
pub fn simulated_player<S: Scheduler>(
    duration: f64,
    scheduler: S,
    settings: PlayerSettings,
) -> SimulatedPlayer<S> {
    let mut player = PlayerStore::new(SimulatedMedia::new(duration), scheduler, settings);
    pump_events(&mut player);
    player
}

/// Feeds every pending simulated media event into the store.
pub fn pump_events<S: Scheduler>(player: &mut SimulatedPlayer<S>) {
    for event in player.media_mut().take_events() {
        player.handle_media_event(event);
    }
}
