// SPDX-License-Identifier: MPL-2.0
//! Tooltips over the video surface.
//!
//! Controls sit on dark video frames, so tooltips always render light text
//! on a dark plate regardless of the application theme.

use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Shadow, Theme, Vector};

/// Plate behind control tooltips and the seek hover preview.
pub fn plate(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::GRAY_900
        })),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Wraps a control with a tooltip shown above it.
pub fn above<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(plate);

    tooltip(content, tip, tooltip::Position::Top).gap(spacing::XXS)
}

/// Wraps the seek timeline with a preview that follows the cursor.
pub fn follow_cursor<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    preview: impl Into<Element<'a, Message>>,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let preview = Container::new(preview).padding(spacing::XXS).style(plate);

    tooltip(content, preview, tooltip::Position::FollowCursor).gap(spacing::XS)
}
