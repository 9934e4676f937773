// SPDX-License-Identifier: MPL-2.0
//! Native media element surface.
//!
//! The control layer never decodes or renders; it drives an opaque media
//! element through [`MediaElement`] and mirrors what the element reports
//! through [`MediaEvent`]s.

use super::buffered::TimeRanges;
use crate::error::{Error, Result};
use std::collections::VecDeque;

/// Best-effort requests the media surface may reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Starting playback (e.g. blocked by an autoplay policy).
    Play,
    /// Entering or leaving fullscreen.
    Fullscreen,
    /// Entering or leaving picture-in-picture.
    PictureInPicture,
}

/// Events reported by the media element, named after their DOM counterparts.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Metadata is available (`loadedmetadata`).
    LoadedMetadata { duration: f64 },
    /// Duration changed (`durationchange`).
    DurationChange(f64),
    /// `play()` was accepted (`play`).
    Play,
    /// Frames are advancing (`playing`).
    Playing,
    /// Playback paused (`pause`).
    Pause,
    /// Playback stalled waiting for data (`waiting`).
    Waiting,
    /// Enough data to resume (`canplay`).
    CanPlay,
    /// A seek started (`seeking`).
    Seeking,
    /// A seek completed (`seeked`).
    Seeked,
    /// Playback position changed (`timeupdate`).
    TimeUpdate(f64),
    /// Playback reached the end (`ended`).
    Ended,
    /// Buffered ranges changed (`progress`).
    Progress(TimeRanges),
    /// Volume or mute changed (`volumechange`).
    VolumeChange { volume: f64, muted: bool },
    /// Playback rate changed (`ratechange`).
    RateChange(f64),
    /// Fullscreen entered or left (`fullscreenchange`).
    FullscreenChange(bool),
    /// Picture-in-picture entered or left (`enterpictureinpicture` / `leavepictureinpicture`).
    PictureInPictureChange(bool),
    /// The source was unloaded (`emptied`).
    Emptied,
}

/// The native media element operations the control layer relies on.
pub trait MediaElement {
    /// Requests playback. May be rejected (autoplay policy, no source).
    fn play(&mut self) -> Result<()>;

    /// Pauses playback.
    fn pause(&mut self);

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playback position; the element reports `seeking`/`seeked`.
    fn set_current_time(&mut self, secs: f64);

    /// Duration in seconds (may be `NaN` before metadata loads).
    fn duration(&self) -> f64;

    /// Downloaded ranges.
    fn buffered(&self) -> TimeRanges;

    /// Sets the element volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f64);

    /// Sets the element mute flag.
    fn set_muted(&mut self, muted: bool);

    /// Sets the element playback rate.
    fn set_playback_rate(&mut self, rate: f64);

    /// Requests fullscreen presentation.
    fn request_fullscreen(&mut self) -> Result<()>;

    /// Leaves fullscreen presentation.
    fn exit_fullscreen(&mut self) -> Result<()>;

    /// Requests picture-in-picture presentation.
    fn request_picture_in_picture(&mut self) -> Result<()>;

    /// Leaves picture-in-picture presentation.
    fn exit_picture_in_picture(&mut self) -> Result<()>;

    /// Shows the text track with `id` and hides all others (`None` hides all).
    fn show_text_track(&mut self, id: Option<&str>);
}

/// In-memory media element that behaves like a browser `<video>`.
///
/// Every operation queues the events a real element would dispatch; hosts
/// drain them with [`SimulatedMedia::take_events`] and feed them back into
/// the player. Used by headless hosts, the CLI and tests.
#[derive(Debug, Clone)]
pub struct SimulatedMedia {
    current_time: f64,
    duration: f64,
    paused: bool,
    volume: f64,
    muted: bool,
    rate: f64,
    fullscreen: bool,
    picture_in_picture: bool,
    buffered: TimeRanges,
    text_track: Option<String>,
    play_allowed: bool,
    fullscreen_allowed: bool,
    picture_in_picture_allowed: bool,
    pending: VecDeque<MediaEvent>,
}

impl SimulatedMedia {
    /// Creates a paused element with the given duration loaded.
    pub fn new(duration: f64) -> Self {
        let mut pending = VecDeque::new();
        pending.push_back(MediaEvent::LoadedMetadata { duration });
        Self {
            current_time: 0.0,
            duration,
            paused: true,
            volume: 1.0,
            muted: false,
            rate: 1.0,
            fullscreen: false,
            picture_in_picture: false,
            buffered: TimeRanges::default(),
            text_track: None,
            play_allowed: true,
            fullscreen_allowed: true,
            picture_in_picture_allowed: true,
            pending,
        }
    }

    /// Drains the events dispatched since the last call.
    pub fn take_events(&mut self) -> Vec<MediaEvent> {
        self.pending.drain(..).collect()
    }

    /// Advances playback by `secs` of wall time.
    pub fn advance(&mut self, secs: f64) {
        if self.paused {
            return;
        }
        let next = self.current_time + secs * self.rate;
        if next >= self.duration {
            self.current_time = self.duration;
            self.paused = true;
            self.pending.push_back(MediaEvent::TimeUpdate(self.duration));
            self.pending.push_back(MediaEvent::Pause);
            self.pending.push_back(MediaEvent::Ended);
        } else {
            self.current_time = next;
            self.pending.push_back(MediaEvent::TimeUpdate(next));
        }
    }

    /// Simulates running out of buffered data.
    pub fn stall(&mut self) {
        self.pending.push_back(MediaEvent::Waiting);
    }

    /// Simulates data arriving after a stall.
    pub fn recover(&mut self) {
        self.pending.push_back(MediaEvent::CanPlay);
        if !self.paused {
            self.pending.push_back(MediaEvent::Playing);
        }
    }

    /// Replaces the buffered ranges and dispatches `progress`.
    pub fn set_buffered(&mut self, ranges: TimeRanges) {
        self.buffered = ranges.clone();
        self.pending.push_back(MediaEvent::Progress(ranges));
    }

    /// Allows or blocks `play()` (autoplay policy).
    pub fn set_play_allowed(&mut self, allowed: bool) {
        self.play_allowed = allowed;
    }

    /// Allows or blocks fullscreen requests.
    pub fn set_fullscreen_allowed(&mut self, allowed: bool) {
        self.fullscreen_allowed = allowed;
    }

    /// Allows or blocks picture-in-picture requests.
    pub fn set_picture_in_picture_allowed(&mut self, allowed: bool) {
        self.picture_in_picture_allowed = allowed;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn playback_rate(&self) -> f64 {
        self.rate
    }

    pub fn text_track(&self) -> Option<&str> {
        self.text_track.as_deref()
    }

    fn rejected(kind: RequestKind, reason: &str) -> Error {
        Error::MediaRequest {
            kind,
            reason: reason.to_string(),
        }
    }
}

impl MediaElement for SimulatedMedia {
    fn play(&mut self) -> Result<()> {
        if !self.play_allowed {
            return Err(Self::rejected(RequestKind::Play, "play() not allowed"));
        }
        if self.paused {
            self.paused = false;
            self.pending.push_back(MediaEvent::Play);
            self.pending.push_back(MediaEvent::Playing);
        }
        Ok(())
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.pending.push_back(MediaEvent::Pause);
        }
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        self.current_time = secs.clamp(0.0, self.duration.max(0.0));
        self.pending.push_back(MediaEvent::Seeking);
        self.pending.push_back(MediaEvent::TimeUpdate(self.current_time));
        self.pending.push_back(MediaEvent::Seeked);
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn buffered(&self) -> TimeRanges {
        self.buffered.clone()
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
        self.pending.push_back(MediaEvent::VolumeChange {
            volume,
            muted: self.muted,
        });
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.pending.push_back(MediaEvent::VolumeChange {
            volume: self.volume,
            muted,
        });
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
        self.pending.push_back(MediaEvent::RateChange(rate));
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        if !self.fullscreen_allowed {
            return Err(Self::rejected(
                RequestKind::Fullscreen,
                "fullscreen not allowed",
            ));
        }
        self.fullscreen = true;
        self.pending.push_back(MediaEvent::FullscreenChange(true));
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.fullscreen = false;
        self.pending.push_back(MediaEvent::FullscreenChange(false));
        Ok(())
    }

    fn request_picture_in_picture(&mut self) -> Result<()> {
        if !self.picture_in_picture_allowed {
            return Err(Self::rejected(
                RequestKind::PictureInPicture,
                "picture-in-picture not allowed",
            ));
        }
        self.picture_in_picture = true;
        self.pending
            .push_back(MediaEvent::PictureInPictureChange(true));
        Ok(())
    }

    fn exit_picture_in_picture(&mut self) -> Result<()> {
        self.picture_in_picture = false;
        self.pending
            .push_back(MediaEvent::PictureInPictureChange(false));
        Ok(())
    }

    fn show_text_track(&mut self, id: Option<&str>) {
        self.text_track = id.map(str::to_string);
    }
}
