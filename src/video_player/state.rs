// SPDX-License-Identifier: MPL-2.0
//! Player state store.
//!
//! [`PlayerStore`] owns the mirrored [`PlayerState`] of one mounted player.
//! State changes only through the [`PlayerControls`] actions and through
//! [`PlayerStore::handle_media_event`]; skins read the state and call the
//! actions, nothing else.
//!
//! Status transitions are derived from media events:
//! - Idle → Playing: `play`/`playing`
//! - Playing ↔ Paused: `pause`/`play`
//! - any → Seeking: `seek()` or `seeking`, until `seeked`
//! - Playing → Waiting: `waiting`, until `canplay`/`playing`
//! - Playing → Ended: `ended`

use super::buffered::{buffered_end, TimeRanges};
use super::captions::{CaptionTrack, CaptionTracks};
use super::events::MediaEventAdapter;
use super::idle::IdleTimer;
use super::keyboard::KeyboardScope;
use super::media::{MediaElement, MediaEvent, RequestKind};
use super::scheduler::{Scheduler, TimerId};
use super::time_units::ratio;
use crate::domain::ui::IdleTimeout;
use crate::domain::video::{KeyboardSeekStep, PlaybackRate, PlayerStatus, Volume, VolumeStep};
use crate::error::{Error, Result};

/// Validated player behavior settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    pub idle_timeout: IdleTimeout,
    pub prevent_idle_when_paused: bool,
    pub keyboard_scope: KeyboardScope,
    pub seek_step: KeyboardSeekStep,
    pub volume_step: VolumeStep,
    pub initial_volume: Volume,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            idle_timeout: IdleTimeout::default(),
            prevent_idle_when_paused: crate::config::DEFAULT_PREVENT_IDLE_WHEN_PAUSED,
            keyboard_scope: KeyboardScope::default(),
            seek_step: KeyboardSeekStep::default(),
            volume_step: VolumeStep::default(),
            initial_volume: Volume::default(),
        }
    }
}

/// Read-only snapshot of a player, as rendered by skins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerState {
    status: PlayerStatus,
    current_time: f64,
    duration: f64,
    buffered: TimeRanges,
    volume: Volume,
    muted: bool,
    playback_rate: PlaybackRate,
    captions: CaptionTracks,
    is_fullscreen: bool,
    is_picture_in_picture: bool,
    is_idle: bool,
    last_request_error: Option<RequestKind>,
}

impl PlayerState {
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    /// Playback position in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Media duration in seconds (`0` until known).
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn buffered(&self) -> &TimeRanges {
        &self.buffered
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn playback_rate(&self) -> PlaybackRate {
        self.playback_rate
    }

    pub fn captions(&self) -> &CaptionTracks {
        &self.captions
    }

    pub fn caption_tracks(&self) -> &[CaptionTrack] {
        self.captions.tracks()
    }

    pub fn active_caption_track_id(&self) -> Option<&str> {
        self.captions.active_id()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn is_picture_in_picture(&self) -> bool {
        self.is_picture_in_picture
    }

    /// Whether controls should be hidden. Only ever true while playing.
    pub fn is_idle(&self) -> bool {
        self.is_idle
    }

    /// The last best-effort request the media rejected, if not yet superseded.
    pub fn last_request_error(&self) -> Option<RequestKind> {
        self.last_request_error
    }

    /// Where the buffered fill of the progress bar ends, in seconds.
    pub fn buffered_end(&self) -> f64 {
        buffered_end(&self.buffered, self.current_time)
    }

    /// Played fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        ratio(self.current_time, self.duration)
    }

    /// Buffered fraction in `[0, 1]`.
    pub fn buffered_progress(&self) -> f64 {
        ratio(self.buffered_end(), self.duration)
    }

    /// Whether audio is effectively silent (muted or zero volume).
    pub fn is_silent(&self) -> bool {
        self.muted || self.volume.is_silent()
    }
}

/// The control contract every skin is built against.
pub trait PlayerControls {
    /// Current state snapshot.
    fn state(&self) -> &PlayerState;

    /// Plays, pauses, or restarts from zero when ended.
    fn toggle(&mut self);

    /// Seeks to `time` seconds, clamped to `[0, duration]`.
    fn seek(&mut self, time: f64);

    /// Sets the volume, clamped to `[0, 1]`. Never changes mute.
    fn set_volume(&mut self, volume: f64);

    /// Flips the mute flag, keeping the stored volume.
    fn toggle_mute(&mut self);

    fn toggle_fullscreen(&mut self);

    fn toggle_picture_in_picture(&mut self);

    /// Shows the caption track `id`, or hides captions with `None`.
    fn select_caption_track(&mut self, id: Option<&str>);

    /// Advances `off → first → … → last → off`.
    fn cycle_caption_track(&mut self);

    /// Sets the playback rate, snapped to the nearest allowed preset.
    fn set_playback_rate(&mut self, rate: f64);

    /// Records user activity, keeping controls visible.
    fn reset_idle(&mut self);
}

/// Owner of one mounted player's state, media element and idle timer.
pub struct PlayerStore<M: MediaElement, S: Scheduler> {
    media: M,
    scheduler: S,
    state: PlayerState,
    adapter: MediaEventAdapter,
    idle: IdleTimer,
    settings: PlayerSettings,
}

impl<M: MediaElement, S: Scheduler> PlayerStore<M, S> {
    /// Mounts a player over `media`, applying the initial volume.
    pub fn new(mut media: M, scheduler: S, settings: PlayerSettings) -> Self {
        media.set_volume(settings.initial_volume.value());
        let state = PlayerState {
            duration: sanitize_duration(media.duration()),
            current_time: media.current_time().max(0.0),
            buffered: media.buffered(),
            volume: settings.initial_volume,
            ..PlayerState::default()
        };
        let mut store = Self {
            media,
            scheduler,
            state,
            adapter: MediaEventAdapter::default(),
            idle: IdleTimer::new(settings.idle_timeout, settings.prevent_idle_when_paused),
            settings,
        };
        store.reset_idle();
        store
    }

    /// Resets the store for a newly loaded source and its caption tracks.
    pub fn load(&mut self, tracks: Vec<CaptionTrack>) {
        self.adapter = MediaEventAdapter::default();
        self.state = PlayerState {
            duration: sanitize_duration(self.media.duration()),
            buffered: self.media.buffered(),
            volume: self.state.volume,
            muted: self.state.muted,
            playback_rate: self.state.playback_rate,
            captions: CaptionTracks::new(tracks),
            is_fullscreen: self.state.is_fullscreen,
            is_picture_in_picture: self.state.is_picture_in_picture,
            ..PlayerState::default()
        };
        self.media.show_text_track(self.state.captions.active_id());
        tracing::debug!(
            duration = self.state.duration,
            tracks = self.state.captions.tracks().len(),
            "player source loaded"
        );
        self.reset_idle();
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    /// Mutable access for hosts that drive the element (e.g. draining events).
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Mirrors one native media event into the state.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match &event {
            MediaEvent::LoadedMetadata { duration } | MediaEvent::DurationChange(duration) => {
                self.state.duration = sanitize_duration(*duration);
            }
            MediaEvent::TimeUpdate(time) => {
                self.state.current_time = time.max(0.0);
            }
            MediaEvent::Progress(ranges) => {
                self.state.buffered = ranges.clone();
            }
            MediaEvent::VolumeChange { volume, muted } => {
                self.state.volume = Volume::new(*volume);
                self.state.muted = *muted;
            }
            MediaEvent::RateChange(rate) => {
                self.state.playback_rate = PlaybackRate::new(*rate);
            }
            MediaEvent::FullscreenChange(active) => {
                self.state.is_fullscreen = *active;
            }
            MediaEvent::PictureInPictureChange(active) => {
                self.state.is_picture_in_picture = *active;
            }
            MediaEvent::Emptied => {
                self.state.current_time = 0.0;
                self.state.duration = 0.0;
                self.state.buffered = TimeRanges::default();
            }
            _ => {}
        }
        self.adapter.apply(&event);
        self.refresh_status();
    }

    /// Delivers a fired timer from the scheduler.
    pub fn on_timer(&mut self, id: TimerId) {
        if self.idle.fire(id) {
            self.refresh_idle();
            tracing::debug!(idle = self.state.is_idle, "idle timeout elapsed");
        }
    }

    /// Pointer or keyboard activity anywhere over the player.
    pub fn activity(&mut self) {
        self.reset_idle();
    }

    /// Cancels the pending idle timeout. Called on unmount; also runs on drop.
    pub fn dispose(&mut self) {
        self.idle.cancel(&mut self.scheduler);
        self.refresh_idle();
    }

    fn play(&mut self) {
        match self.media.play() {
            Ok(()) => self.state.last_request_error = None,
            Err(err) => self.record_failure(RequestKind::Play, &err),
        }
    }

    fn seek_to(&mut self, time: f64) {
        let target = time.clamp(0.0, self.state.duration);
        self.media.set_current_time(target);
        self.state.current_time = target;
        self.adapter.begin_seek();
        self.refresh_status();
        tracing::debug!(target, "seek");
    }

    fn presentation_request(&mut self, kind: RequestKind, result: Result<()>) {
        match result {
            Ok(()) => self.state.last_request_error = None,
            Err(err) => self.record_failure(kind, &err),
        }
    }

    fn record_failure(&mut self, kind: RequestKind, err: &Error) {
        tracing::warn!(?kind, %err, "media request rejected");
        self.state.last_request_error = Some(kind);
    }

    fn refresh_status(&mut self) {
        let previous = self.state.status;
        let status = self.adapter.status();
        if status != previous {
            self.state.status = status;
            self.idle.on_status_change(&mut self.scheduler, previous, status);
            tracing::debug!(?previous, ?status, "status changed");
        }
        self.refresh_idle();
    }

    fn refresh_idle(&mut self) {
        self.state.is_idle = self.idle.is_idle(self.state.status);
    }
}

impl<M: MediaElement, S: Scheduler> PlayerControls for PlayerStore<M, S> {
    fn state(&self) -> &PlayerState {
        &self.state
    }

    fn toggle(&mut self) {
        if self.state.status.is_ended() {
            self.seek_to(0.0);
            self.play();
        } else if self.adapter.is_paused() {
            self.play();
        } else {
            self.media.pause();
        }
        self.reset_idle();
    }

    fn seek(&mut self, time: f64) {
        if time.is_nan() {
            tracing::debug!("ignoring NaN seek target");
        } else {
            self.seek_to(time);
        }
        self.reset_idle();
    }

    fn set_volume(&mut self, volume: f64) {
        let volume = Volume::new(volume);
        self.state.volume = volume;
        self.media.set_volume(volume.value());
        self.reset_idle();
    }

    fn toggle_mute(&mut self) {
        let muted = !self.state.muted;
        self.state.muted = muted;
        self.media.set_muted(muted);
        self.reset_idle();
    }

    fn toggle_fullscreen(&mut self) {
        let result = if self.state.is_fullscreen {
            self.media.exit_fullscreen()
        } else {
            self.media.request_fullscreen()
        };
        self.presentation_request(RequestKind::Fullscreen, result);
        self.reset_idle();
    }

    fn toggle_picture_in_picture(&mut self) {
        let result = if self.state.is_picture_in_picture {
            self.media.exit_picture_in_picture()
        } else {
            self.media.request_picture_in_picture()
        };
        self.presentation_request(RequestKind::PictureInPicture, result);
        self.reset_idle();
    }

    fn select_caption_track(&mut self, id: Option<&str>) {
        if self.state.captions.select(id) {
            self.media.show_text_track(self.state.captions.active_id());
        } else {
            tracing::debug!(?id, "ignoring unknown caption track");
        }
        self.reset_idle();
    }

    fn cycle_caption_track(&mut self) {
        self.state.captions.cycle();
        self.media.show_text_track(self.state.captions.active_id());
        self.reset_idle();
    }

    fn set_playback_rate(&mut self, rate: f64) {
        let rate = PlaybackRate::new(rate);
        self.state.playback_rate = rate;
        self.media.set_playback_rate(rate.value());
        self.reset_idle();
    }

    fn reset_idle(&mut self) {
        self.idle.reset(&mut self.scheduler, self.state.status);
        self.refresh_idle();
    }
}

impl<M: MediaElement, S: Scheduler> Drop for PlayerStore<M, S> {
    fn drop(&mut self) {
        self.idle.cancel(&mut self.scheduler);
    }
}

fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    }
}
