// SPDX-License-Identifier: MPL-2.0
//! Full-width timeline above a button row, red accent.

use super::{Control, Skin};
use crate::ui::design_tokens::palette;
use crate::ui::styles;
use iced::widget::container;
use iced::{Color, Theme};

#[derive(Debug, Clone, Copy, Default)]
pub struct Youtube;

impl Skin for Youtube {
    fn name(&self) -> &'static str {
        "YoutubeSkin"
    }

    fn layout(&self) -> Vec<Vec<Control>> {
        vec![
            vec![Control::Progress],
            vec![
                Control::PlayPause,
                Control::Mute,
                Control::Volume,
                Control::Time,
                Control::Spacer,
                Control::Captions,
                Control::Rate,
                Control::PictureInPicture,
                Control::Fullscreen,
            ],
        ]
    }

    fn accent(&self) -> Color {
        palette::ACCENT_RED
    }

    fn bar_style(&self) -> fn(&Theme) -> container::Style {
        styles::container::controls_scrim
    }
}
