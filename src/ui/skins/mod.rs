// SPDX-License-Identifier: MPL-2.0
//! Interchangeable player skins.
//!
//! A skin only decides which controls appear and how they are arranged.
//! Every skin reads the same [`PlayerState`] and emits the same [`Message`]s,
//! which [`apply`] turns into [`PlayerControls`] actions. Timeline pointer
//! input goes through the skin's [`SeekBar`] first. Controls disappear
//! entirely while the player is idle.

mod linear;
mod modern;
mod mounted;
mod youtube;

pub use linear::Linear;
pub use modern::Modern;
pub use mounted::MountedSkin;
pub use youtube::Youtube;

use crate::domain::video::{rate_bounds, PlaybackRate};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::timeline;
use crate::video_player::seek_bar::{self, HoverPreview, SeekBar, TrackBounds};
use crate::video_player::time_units::{format_rate, format_time};
use crate::video_player::{PlayerControls, PlayerState, RequestKind};
use iced::widget::{button, container, image, slider, text, Column, Row, Space};
use iced::{Alignment, Color, Element, Length, Theme};
use serde::{Deserialize, Serialize};

const VOLUME_STEP: f64 = 0.01;

/// Selectable skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkinKind {
    #[default]
    Linear,
    Modern,
    Youtube,
}

impl SkinKind {
    pub const ALL: [SkinKind; 3] = [SkinKind::Linear, SkinKind::Modern, SkinKind::Youtube];

    pub fn skin(self) -> &'static dyn Skin {
        match self {
            SkinKind::Linear => &Linear,
            SkinKind::Modern => &Modern,
            SkinKind::Youtube => &Youtube,
        }
    }
}

/// One control a skin can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    PlayPause,
    Progress,
    Time,
    Mute,
    Volume,
    Captions,
    Rate,
    PictureInPicture,
    Fullscreen,
    /// Flexible gap pushing the following controls to the right.
    Spacer,
}

/// Arrangement and look of a control bar.
pub trait Skin {
    /// Component name reported when rendered without a player.
    fn name(&self) -> &'static str;

    /// Rows of controls, top to bottom, before availability filtering.
    fn layout(&self) -> Vec<Vec<Control>>;

    /// Played-portion color of the timeline.
    fn accent(&self) -> Color;

    /// Style of the container around the control rows.
    fn bar_style(&self) -> fn(&Theme) -> container::Style;

    /// Rows of controls to show for `state`.
    ///
    /// The captions control is dropped when the media has no caption track.
    fn rows(&self, state: &PlayerState) -> Vec<Vec<Control>> {
        self.layout()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .filter(|control| *control != Control::Captions || !state.captions().is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|row| !row.is_empty())
            .collect()
    }
}

/// Control-bar interactions.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TogglePlayback,
    SeekTo(f64),
    SetVolume(f64),
    ToggleMute,
    ToggleFullscreen,
    TogglePictureInPicture,
    CycleCaptions,
    SetPlaybackRate(f64),
    /// Pointer input on the seek timeline.
    Timeline(seek_bar::Message),
    /// Pointer activity over the player.
    Activity,
}

/// Seek-bar state the progress control draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineView {
    /// Track bounds the seek bar last received.
    pub bounds: TrackBounds,
    pub pressing: bool,
    pub preview: Option<HoverPreview>,
}

impl TimelineView {
    pub fn new(seek_bar: &SeekBar, preview: Option<HoverPreview>) -> Self {
        Self {
            bounds: seek_bar.bounds(),
            pressing: seek_bar.is_pressing(),
            preview,
        }
    }
}

/// Performs a control-bar message on the player.
///
/// Timeline input updates `seek_bar` and seeks when the bar asks for it;
/// pointer input that does not seek still counts as activity.
pub fn apply(
    message: Message,
    seek_bar: &mut SeekBar,
    player: &mut (impl PlayerControls + ?Sized),
) {
    match message {
        Message::Timeline(input) => {
            let pointer = !matches!(input, seek_bar::Message::BoundsChanged(_));
            match seek_bar.handle(input, player.state().duration()) {
                seek_bar::Effect::Seek(time) => player.seek(time),
                seek_bar::Effect::None if pointer => player.reset_idle(),
                seek_bar::Effect::None => {}
            }
        }
        Message::TogglePlayback => player.toggle(),
        Message::SeekTo(time) => player.seek(time),
        Message::SetVolume(volume) => player.set_volume(volume),
        Message::ToggleMute => player.toggle_mute(),
        Message::ToggleFullscreen => player.toggle_fullscreen(),
        Message::TogglePictureInPicture => player.toggle_picture_in_picture(),
        Message::CycleCaptions => player.cycle_caption_track(),
        Message::SetPlaybackRate(rate) => player.set_playback_rate(rate),
        Message::Activity => player.reset_idle(),
    }
}

/// Builds the control bar of `skin` for `state`.
pub fn view<'a>(
    skin: &dyn Skin,
    state: &PlayerState,
    timeline: &TimelineView,
) -> Element<'a, Message> {
    if state.is_idle() {
        return Space::new().width(Length::Fill).height(Length::Shrink).into();
    }

    let mut bar = Column::new().spacing(spacing::XXS).width(Length::Fill);
    if let Some(kind) = state.last_request_error() {
        bar = bar.push(
            container(text(request_error_label(kind)).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(styles::container::error_banner),
        );
    }
    for row in skin.rows(state) {
        let controls: Vec<Element<'a, Message>> = row
            .into_iter()
            .map(|control| control_widget(control, state, timeline, skin.accent()))
            .collect();
        bar = bar.push(
            Row::with_children(controls)
                .spacing(spacing::XS)
                .align_y(Alignment::Center),
        );
    }

    container(bar)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(skin.bar_style())
        .into()
}

fn control_widget<'a>(
    control: Control,
    state: &PlayerState,
    timeline: &TimelineView,
    accent: Color,
) -> Element<'a, Message> {
    match control {
        Control::PlayPause => {
            let (glyph, tip) = if state.status().is_ended() {
                ("↻", "Replay (Space)")
            } else if state.status().is_playing() {
                ("⏸", "Pause (Space)")
            } else {
                ("▶", "Play (Space)")
            };
            icon_button(glyph, tip, Message::TogglePlayback, false)
        }
        Control::Progress => progress(state, timeline, accent),
        Control::Time => text(format!(
            "{} / {}",
            format_time(state.current_time()),
            format_time(state.duration())
        ))
        .size(typography::BODY)
        .into(),
        Control::Mute => {
            let (glyph, tip) = if state.is_silent() {
                ("🔇", "Unmute (M)")
            } else {
                ("🔊", "Mute (M)")
            };
            icon_button(glyph, tip, Message::ToggleMute, state.is_muted())
        }
        Control::Volume => slider(0.0..=1.0, state.volume().value(), Message::SetVolume)
            .step(VOLUME_STEP)
            .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH))
            .style(styles::slider::volume(state.is_muted()))
            .into(),
        Control::Captions => {
            let tip = match state.captions().active() {
                Some(track) => format!("Captions: {} (C)", track.label),
                None => "Captions off (C)".to_string(),
            };
            let active = state.active_caption_track_id().is_some();
            icon_button("CC", tip, Message::CycleCaptions, active)
        }
        Control::Rate => {
            let rate = state.playback_rate();
            let next = if rate.is_max() {
                PlaybackRate::new(rate_bounds::MIN)
            } else {
                rate.increase()
            };
            icon_button(
                format_rate(rate.value()),
                "Playback speed",
                Message::SetPlaybackRate(next.value()),
                false,
            )
        }
        Control::PictureInPicture => icon_button(
            "⧉",
            "Picture in picture",
            Message::TogglePictureInPicture,
            state.is_picture_in_picture(),
        ),
        Control::Fullscreen => {
            let tip = if state.is_fullscreen() {
                "Exit fullscreen (F)"
            } else {
                "Fullscreen (F)"
            };
            icon_button("⛶", tip, Message::ToggleFullscreen, state.is_fullscreen())
        }
        Control::Spacer => Space::new().width(Length::Fill).into(),
    }
}

/// Timeline with the buffered fill and, while hovering, the time preview.
fn progress<'a>(state: &PlayerState, view: &TimelineView, accent: Color) -> Element<'a, Message> {
    let track = timeline(view.bounds, styles::slider::timeline(accent), Message::Timeline)
        .played(state.progress())
        .buffered(state.buffered_progress())
        .hover(view.preview.as_ref().map(|preview| preview.percent))
        .pressing(view.pressing);

    let Some(preview) = &view.preview else {
        return track.into();
    };
    let mut tip = Column::new()
        .spacing(spacing::XXS)
        .align_x(Alignment::Center);
    if let Some(path) = &preview.thumbnail {
        tip = tip.push(
            image(image::Handle::from_path(path)).width(Length::Fixed(sizing::THUMBNAIL_WIDTH)),
        );
    }
    tip = tip.push(text(preview.label.clone()).size(typography::CAPTION));
    styles::tooltip::follow_cursor(track, tip).into()
}

fn icon_button<'a>(
    label: impl Into<String>,
    tip: impl Into<String>,
    message: Message,
    selected: bool,
) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if selected {
        button::primary
    } else {
        button::text
    };
    let content = button(text(label.into()).size(sizing::ICON_SM))
        .on_press(message)
        .padding(spacing::XXS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(style);
    styles::tooltip::above(content, tip).into()
}

fn request_error_label(kind: RequestKind) -> &'static str {
    match kind {
        RequestKind::Play => "Playback was blocked. Press play to start.",
        RequestKind::Fullscreen => "Fullscreen is not available.",
        RequestKind::PictureInPicture => "Picture in picture is not available.",
    }
}
