// SPDX-License-Identifier: MPL-2.0
//! A skin mounted over one player.

use super::{apply, view, Message, SkinKind, TimelineView};
use crate::error::Result;
use crate::video_player::{
    HoverPreview, ListenerRegistry, PlayerProvider, PlayerState, SeekBar, ThumbnailTrack,
};
use iced::Element;

/// Skin instance with its own seek-bar controller.
///
/// The seek bar holds window listeners while a drag is in progress, so
/// dropping the mounted skin releases them.
#[derive(Debug)]
pub struct MountedSkin {
    kind: SkinKind,
    seek_bar: SeekBar,
    thumbnails: Option<ThumbnailTrack>,
}

impl MountedSkin {
    pub fn new(kind: SkinKind, registry: ListenerRegistry) -> Self {
        Self {
            kind,
            seek_bar: SeekBar::new(registry),
            thumbnails: None,
        }
    }

    /// Shows preview images from `thumbnails` while hovering the timeline.
    #[must_use]
    pub fn with_thumbnails(mut self, thumbnails: ThumbnailTrack) -> Self {
        self.thumbnails = Some(thumbnails);
        self
    }

    pub fn kind(&self) -> SkinKind {
        self.kind
    }

    pub fn seek_bar(&self) -> &SeekBar {
        &self.seek_bar
    }

    /// Hover tooltip content for the timeline, if hovering.
    pub fn hover_preview(&self, state: &PlayerState) -> Option<HoverPreview> {
        self.seek_bar
            .hover_preview(state.duration(), self.thumbnails.as_ref())
    }

    /// What the progress control draws for `state`.
    pub fn timeline(&self, state: &PlayerState) -> TimelineView {
        TimelineView::new(&self.seek_bar, self.hover_preview(state))
    }

    /// Renders the control bar for the player in `provider`.
    pub fn render<'a>(&self, provider: &mut PlayerProvider<'_>) -> Result<Element<'a, Message>> {
        let skin = self.kind.skin();
        let player = provider.try_use_player(skin.name())?;
        let state = player.state();
        Ok(view(skin, state, &self.timeline(state)))
    }

    /// Applies `message` to the player in `provider`.
    pub fn update(&mut self, provider: &mut PlayerProvider<'_>, message: Message) -> Result<()> {
        let player = provider.try_use_player(self.kind.skin().name())?;
        apply(message, &mut self.seek_bar, player);
        Ok(())
    }
}
