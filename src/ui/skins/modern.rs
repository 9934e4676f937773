// SPDX-License-Identifier: MPL-2.0
//! Floating rounded bar with every control on one row.

use super::{Control, Skin};
use crate::ui::design_tokens::palette;
use crate::ui::styles;
use iced::widget::container;
use iced::{Color, Theme};

#[derive(Debug, Clone, Copy, Default)]
pub struct Modern;

impl Skin for Modern {
    fn name(&self) -> &'static str {
        "ModernSkin"
    }

    fn layout(&self) -> Vec<Vec<Control>> {
        vec![vec![
            Control::PlayPause,
            Control::Time,
            Control::Progress,
            Control::Captions,
            Control::Rate,
            Control::Mute,
            Control::PictureInPicture,
            Control::Fullscreen,
        ]]
    }

    fn accent(&self) -> Color {
        palette::ACCENT
    }

    fn bar_style(&self) -> fn(&Theme) -> container::Style {
        styles::container::floating_bar
    }
}
