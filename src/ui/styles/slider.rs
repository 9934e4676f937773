// SPDX-License-Identifier: MPL-2.0
//! Slider styles for the timeline and volume controls.

use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Colors of the seek timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineStyle {
    pub rail: Color,
    pub buffered: Color,
    pub played: Color,
    pub hover_marker: Color,
    pub thumb: Color,
}

/// Timeline style: `accent` for the played portion, lighter rails behind it.
pub fn timeline(accent: Color) -> TimelineStyle {
    TimelineStyle {
        rail: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        },
        buffered: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_200
        },
        played: accent,
        hover_marker: Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::WHITE
        },
        thumb: accent,
    }
}

/// Volume style; greyed out while muted.
pub fn volume(muted: bool) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    let fill = if muted {
        palette::GRAY_400
    } else {
        palette::WHITE
    };
    move |_theme: &Theme, _status: slider::Status| slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(fill),
                Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::WHITE
                }),
            ),
            width: sizing::TIMELINE_TRACK,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 2.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle { radius: 5.0 },
            background: Background::Color(fill),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        },
    }
}
