// SPDX-License-Identifier: MPL-2.0
//! Single-row bar: play, timeline, time, volume, fullscreen.

use super::{Control, Skin};
use crate::ui::design_tokens::palette;
use crate::ui::styles;
use iced::widget::container;
use iced::{Color, Theme};

#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl Skin for Linear {
    fn name(&self) -> &'static str {
        "LinearSkin"
    }

    fn layout(&self) -> Vec<Vec<Control>> {
        vec![vec![
            Control::PlayPause,
            Control::Progress,
            Control::Time,
            Control::Mute,
            Control::Volume,
            Control::Fullscreen,
        ]]
    }

    fn accent(&self) -> Color {
        palette::ACCENT
    }

    fn bar_style(&self) -> fn(&Theme) -> container::Style {
        styles::container::controls_scrim
    }
}
