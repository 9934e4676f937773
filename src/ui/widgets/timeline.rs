// SPDX-License-Identifier: MPL-2.0
//! Seek timeline widget.
//!
//! Draws the rail, the buffered and played portions, and the hover marker.
//! Pointer input is not interpreted here: it is reported as
//! [`seek_bar::Message`]s for the [`SeekBar`](crate::video_player::SeekBar)
//! controller. A widget sees every window event, so moves and the release
//! keep arriving after a drag leaves the track.

use crate::ui::design_tokens::sizing;
use crate::ui::styles::slider::TimelineStyle;
use crate::video_player::seek_bar::{self, TrackBounds};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{border, Color, Element, Event, Length, Point, Rectangle, Size};

/// Width of the vertical hover marker.
const HOVER_MARKER_WIDTH: f32 = 2.0;

pub struct Timeline<Message> {
    known_bounds: TrackBounds,
    played: f32,
    buffered: f32,
    hover: Option<f32>,
    pressing: bool,
    style: TimelineStyle,
    on_input: fn(seek_bar::Message) -> Message,
}

impl<Message> Timeline<Message> {
    /// `known_bounds` are the bounds the controller last received; the
    /// widget reports new ones when its layout differs.
    pub fn new(
        known_bounds: TrackBounds,
        style: TimelineStyle,
        on_input: fn(seek_bar::Message) -> Message,
    ) -> Self {
        Self {
            known_bounds,
            played: 0.0,
            buffered: 0.0,
            hover: None,
            pressing: false,
            style,
            on_input,
        }
    }

    #[must_use]
    pub fn played(mut self, fraction: f64) -> Self {
        self.played = unit(fraction);
        self
    }

    #[must_use]
    pub fn buffered(mut self, fraction: f64) -> Self {
        self.buffered = unit(fraction);
        self
    }

    #[must_use]
    pub fn hover(mut self, fraction: Option<f64>) -> Self {
        self.hover = fraction.map(unit);
        self
    }

    #[must_use]
    pub fn pressing(mut self, pressing: bool) -> Self {
        self.pressing = pressing;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer> for Timeline<Message>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fixed(sizing::SCRUBBER_THUMB))
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, Length::Fill, Length::Fixed(sizing::SCRUBBER_THUMB))
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let active = self.pressing || self.hover.is_some();
        let thickness = if active {
            sizing::TIMELINE_TRACK_HOVER
        } else {
            sizing::TIMELINE_TRACK
        };
        let rail = Rectangle {
            x: bounds.x,
            y: bounds.center_y() - thickness / 2.0,
            width: bounds.width,
            height: thickness,
        };
        let rounded = thickness / 2.0;

        fill(renderer, rail, self.style.rail, rounded);
        fill(renderer, portion(rail, self.buffered), self.style.buffered, rounded);
        fill(renderer, portion(rail, self.played), self.style.played, rounded);

        if let Some(hover) = self.hover {
            let marker = Rectangle {
                x: rail.x + rail.width * hover - HOVER_MARKER_WIDTH / 2.0,
                width: HOVER_MARKER_WIDTH,
                ..rail
            };
            fill(renderer, marker, self.style.hover_marker, 0.0);
        }

        if active {
            let diameter = sizing::SCRUBBER_THUMB;
            let thumb = Rectangle {
                x: rail.x + rail.width * self.played - diameter / 2.0,
                y: bounds.center_y() - diameter / 2.0,
                width: diameter,
                height: diameter,
            };
            fill(renderer, thumb, self.style.thumb, diameter / 2.0);
        }
    }

    fn update(
        &mut self,
        _tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let Event::Mouse(event) = event else {
            return;
        };

        let track = layout.bounds();
        let measured = track_bounds(track);
        if measured != self.known_bounds {
            self.known_bounds = measured;
            shell.publish((self.on_input)(seek_bar::Message::BoundsChanged(measured)));
        }

        let hovering = self.hover.is_some();
        if let Some(input) = pointer_input(event, cursor, track, self.pressing, hovering) {
            if matches!(input, seek_bar::Message::PointerPressed { .. }) {
                shell.capture_event();
            }
            shell.publish((self.on_input)(input));
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.pressing {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Theme, Renderer> From<Timeline<Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(timeline: Timeline<Message>) -> Self {
        Self::new(timeline)
    }
}

/// Helper function to create a timeline.
pub fn timeline<Message>(
    known_bounds: TrackBounds,
    style: TimelineStyle,
    on_input: fn(seek_bar::Message) -> Message,
) -> Timeline<Message> {
    Timeline::new(known_bounds, style, on_input)
}

/// Maps a window mouse event to seek-bar input.
///
/// Moves are reported while over the track, while hovering (so the
/// controller sees the pointer leave) and while pressing. The release is
/// reported only while pressing, with `NaN` coordinates when the cursor has
/// left the window.
fn pointer_input(
    event: &mouse::Event,
    cursor: mouse::Cursor,
    track: Rectangle,
    pressing: bool,
    hovering: bool,
) -> Option<seek_bar::Message> {
    match event {
        mouse::Event::CursorMoved { position } => {
            (pressing || hovering || track.contains(*position)).then(|| {
                let (x, y) = coords(*position);
                seek_bar::Message::PointerMoved { x, y }
            })
        }
        mouse::Event::CursorLeft => {
            (hovering || pressing).then_some(seek_bar::Message::PointerLeft)
        }
        mouse::Event::ButtonPressed(mouse::Button::Left) => {
            let (x, y) = coords(cursor.position_over(track)?);
            Some(seek_bar::Message::PointerPressed { x, y })
        }
        mouse::Event::ButtonReleased(mouse::Button::Left) if pressing => {
            let (x, y) = cursor.position().map_or((f64::NAN, f64::NAN), coords);
            Some(seek_bar::Message::PointerReleased { x, y })
        }
        _ => None,
    }
}

fn track_bounds(rect: Rectangle) -> TrackBounds {
    TrackBounds::new(
        rect.x.into(),
        rect.y.into(),
        rect.width.into(),
        rect.height.into(),
    )
}

fn coords(point: Point) -> (f64, f64) {
    (point.x.into(), point.y.into())
}

fn unit(fraction: f64) -> f32 {
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0) as f32
    } else {
        0.0
    }
}

/// Left part of `rail` covering `fraction` of its width.
fn portion(rail: Rectangle, fraction: f32) -> Rectangle {
    Rectangle {
        width: rail.width * fraction,
        ..rail
    }
}

fn fill<Renderer: renderer::Renderer>(
    renderer: &mut Renderer,
    bounds: Rectangle,
    color: Color,
    radius: f32,
) {
    if bounds.width <= 0.0 {
        return;
    }
    renderer.fill_quad(
        renderer::Quad {
            bounds,
            border: border::rounded(radius),
            ..renderer::Quad::default()
        },
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Rectangle {
        Rectangle::new(Point::new(100.0, 20.0), Size::new(400.0, 12.0))
    }

    fn moved(x: f32, y: f32) -> mouse::Event {
        mouse::Event::CursorMoved {
            position: Point::new(x, y),
        }
    }

    #[test]
    fn moves_over_track_are_reported() {
        let input = pointer_input(
            &moved(300.0, 25.0),
            mouse::Cursor::Available(Point::new(300.0, 25.0)),
            track(),
            false,
            false,
        );
        assert_eq!(
            input,
            Some(seek_bar::Message::PointerMoved { x: 300.0, y: 25.0 })
        );
    }

    #[test]
    fn moves_elsewhere_are_ignored_until_hovering() {
        let cursor = mouse::Cursor::Available(Point::new(300.0, 200.0));
        assert_eq!(
            pointer_input(&moved(300.0, 200.0), cursor, track(), false, false),
            None
        );
        assert!(pointer_input(&moved(300.0, 200.0), cursor, track(), false, true).is_some());
        assert!(pointer_input(&moved(300.0, 200.0), cursor, track(), true, false).is_some());
    }

    #[test]
    fn press_requires_cursor_over_track() {
        let press = mouse::Event::ButtonPressed(mouse::Button::Left);
        let outside = mouse::Cursor::Available(Point::new(50.0, 25.0));
        let inside = mouse::Cursor::Available(Point::new(200.0, 25.0));

        assert_eq!(pointer_input(&press, outside, track(), false, false), None);
        assert_eq!(
            pointer_input(&press, inside, track(), false, true),
            Some(seek_bar::Message::PointerPressed { x: 200.0, y: 25.0 })
        );
    }

    #[test]
    fn release_only_while_pressing() {
        let release = mouse::Event::ButtonReleased(mouse::Button::Left);
        let cursor = mouse::Cursor::Available(Point::new(900.0, 300.0));
        assert_eq!(pointer_input(&release, cursor, track(), false, true), None);
        assert_eq!(
            pointer_input(&release, cursor, track(), true, true),
            Some(seek_bar::Message::PointerReleased { x: 900.0, y: 300.0 })
        );
    }

    #[test]
    fn release_outside_window_has_no_position() {
        let release = mouse::Event::ButtonReleased(mouse::Button::Left);
        let Some(seek_bar::Message::PointerReleased { x, y }) =
            pointer_input(&release, mouse::Cursor::Unavailable, track(), true, true)
        else {
            panic!("expected a release");
        };
        assert!(x.is_nan() && y.is_nan());
    }

    #[test]
    fn portion_scales_width_only() {
        let rail = Rectangle::new(Point::new(10.0, 5.0), Size::new(200.0, 4.0));
        let half = portion(rail, 0.5);
        assert_eq!(half.width, 100.0);
        assert_eq!(half.x, 10.0);
        assert_eq!(half.height, 4.0);
    }

    #[test]
    fn fractions_are_clamped() {
        assert_eq!(unit(1.5), 1.0);
        assert_eq!(unit(-0.2), 0.0);
        assert_eq!(unit(f64::NAN), 0.0);
    }
}
