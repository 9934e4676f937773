// SPDX-License-Identifier: MPL-2.0
//! Seek-bar drag and hover controller.
//!
//! Idle → Hovering → Pressing → Idle, with Hovering reachable without
//! pressing. Pressing captures pointer moves at window level, so a drag keeps
//! scrubbing after the pointer leaves the track. Hovering only feeds the
//! preview label and thumbnail; it never seeks.

use super::listeners::{ListenerGuard, ListenerKind, ListenerRegistry, ListenerTarget};
use super::time_units::format_time;

/// Bounding box of the seek track in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TrackBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the point lies inside the box, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }

    /// Horizontal position of `x` along the track, clamped to `[0, 1]`.
    ///
    /// A zero-width (or degenerate) track maps every position to `0`.
    pub fn percent_at(&self, x: f64) -> f64 {
        if !(self.width.is_finite() && self.width > 0.0) || !x.is_finite() {
            return 0.0;
        }
        ((x - self.left) / self.width).clamp(0.0, 1.0)
    }
}

/// Interaction phase of the seek bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekBarPhase {
    Idle,
    Hovering,
    Pressing,
}

/// Pointer input delivered to the seek bar.
///
/// `PointerMoved` and `PointerReleased` also arrive from the window-level
/// listeners while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    BoundsChanged(TrackBounds),
    PointerMoved { x: f64, y: f64 },
    PointerLeft,
    PointerPressed { x: f64, y: f64 },
    PointerReleased { x: f64, y: f64 },
}

/// Side effect requested by the seek bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Seek the player to this time in seconds.
    Seek(f64),
}

/// One preview image covering `[start, end)` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailCue {
    pub start: f64,
    pub end: f64,
    pub image: String,
}

/// Ordered preview thumbnails for the hover tooltip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThumbnailTrack {
    cues: Vec<ThumbnailCue>,
}

impl ThumbnailTrack {
    /// Builds a track, sorting cues by start time.
    pub fn new(mut cues: Vec<ThumbnailCue>) -> Self {
        cues.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { cues }
    }

    /// Evenly spaced cues of `interval` seconds, images named by `pattern`
    /// with `{}` replaced by the cue index.
    pub fn uniform(duration: f64, interval: f64, pattern: &str) -> Self {
        if !(interval > 0.0 && duration.is_finite() && duration > 0.0) {
            return Self::default();
        }
        let count = (duration / interval).ceil() as usize;
        let cues = (0..count)
            .map(|i| {
                let start = i as f64 * interval;
                ThumbnailCue {
                    start,
                    end: (start + interval).min(duration),
                    image: pattern.replace("{}", &i.to_string()),
                }
            })
            .collect();
        Self { cues }
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// The cue whose span contains `time`.
    pub fn cue_at(&self, time: f64) -> Option<&ThumbnailCue> {
        let idx = self.cues.partition_point(|c| c.start <= time);
        let cue = self.cues.get(idx.checked_sub(1)?)?;
        (time < cue.end).then_some(cue)
    }
}

/// Hover tooltip content.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverPreview {
    pub percent: f64,
    pub time_secs: f64,
    pub label: String,
    pub thumbnail: Option<String>,
}

/// Seek-bar interaction state.
#[derive(Debug)]
pub struct SeekBar {
    bounds: TrackBounds,
    hovering: bool,
    hover_percent: Option<f64>,
    registry: ListenerRegistry,
    capture: Option<[ListenerGuard; 2]>,
}

impl SeekBar {
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            bounds: TrackBounds::default(),
            hovering: false,
            hover_percent: None,
            registry,
            capture: None,
        }
    }

    pub fn bounds(&self) -> TrackBounds {
        self.bounds
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_pressing(&self) -> bool {
        self.capture.is_some()
    }

    pub fn hover_percent(&self) -> Option<f64> {
        self.hover_percent
    }

    pub fn phase(&self) -> SeekBarPhase {
        if self.is_pressing() {
            SeekBarPhase::Pressing
        } else if self.hovering {
            SeekBarPhase::Hovering
        } else {
            SeekBarPhase::Idle
        }
    }

    /// Handles pointer input for a media of `duration` seconds.
    pub fn handle(&mut self, message: Message, duration: f64) -> Effect {
        match message {
            Message::BoundsChanged(bounds) => {
                self.bounds = bounds;
                Effect::None
            }
            Message::PointerMoved { x, y } => {
                let percent = self.bounds.percent_at(x);
                if self.is_pressing() {
                    self.hover_percent = Some(percent);
                    return Effect::Seek(percent * duration);
                }
                if self.bounds.contains(x, y) {
                    self.hovering = true;
                    self.hover_percent = Some(percent);
                } else {
                    self.leave();
                }
                Effect::None
            }
            Message::PointerLeft => {
                // Window capture keeps the preview while dragging.
                if !self.is_pressing() {
                    self.leave();
                }
                Effect::None
            }
            Message::PointerPressed { x, y } => {
                if !self.bounds.contains(x, y) {
                    return Effect::None;
                }
                let percent = self.bounds.percent_at(x);
                self.hovering = true;
                self.hover_percent = Some(percent);
                self.capture = Some([
                    self.registry.register(ListenerTarget::Window, ListenerKind::PointerMove),
                    self.registry.register(ListenerTarget::Window, ListenerKind::PointerUp),
                ]);
                tracing::trace!(percent, "seek bar pressed");
                Effect::Seek(percent * duration)
            }
            Message::PointerReleased { x, y } => {
                if self.capture.take().is_some() && !self.bounds.contains(x, y) {
                    self.leave();
                }
                Effect::None
            }
        }
    }

    /// Tooltip content for the hovered position, if hovering.
    pub fn hover_preview(
        &self,
        duration: f64,
        thumbnails: Option<&ThumbnailTrack>,
    ) -> Option<HoverPreview> {
        if !self.hovering {
            return None;
        }
        let percent = self.hover_percent?;
        let time_secs = percent * duration.max(0.0);
        Some(HoverPreview {
            percent,
            time_secs,
            label: format_time(time_secs),
            thumbnail: thumbnails
                .and_then(|track| track.cue_at(time_secs))
                .map(|cue| cue.image.clone()),
        })
    }

    fn leave(&mut self) {
        self.hovering = false;
        self.hover_percent = None;
    }
}
