// SPDX-License-Identifier: MPL-2.0
//! Scroll-spy state machine.
//!
//! Scroll events only request an animation frame; the active heading is
//! computed once per frame. A click on a TOC entry pins that entry until
//! the scroll position catches up with it, so the highlight does not walk
//! through every heading during the smooth scroll.

use super::{compute_active, measure, Active, HeadingPosition, LayoutSource, TocEntry};
use crate::domain::ui::ActivationOffset;

/// Scroll-spy behavior settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSpyOptions {
    /// Distance of the activation line below the viewport top.
    pub top_offset: ActivationOffset,
    /// Report an intro pseudo-entry above the first heading.
    pub show_intro: bool,
}

/// Page events delivered to the scroll-spy.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The viewport or content was resized; headings may have moved.
    Resized,
    /// A scroll event fired.
    Scrolled,
    /// The requested animation frame runs at this scroll position.
    Frame { scroll_y: f64 },
    /// The user clicked the TOC entry with this id.
    EntryClicked(String),
    /// The user scrolled explicitly (wheel, touch, keyboard).
    UserScrollInput,
}

/// Side effect requested by the scroll-spy.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Schedule one animation frame and deliver [`Message::Frame`].
    RequestFrame,
    /// Smooth-scroll the page so `top` sits at the viewport top.
    ScrollTo { id: String, top: f64 },
    /// The highlighted entry changed.
    ActiveChanged(Option<Active>),
}

/// Tracks which TOC entry is active for one mounted article.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    toc: Vec<TocEntry>,
    options: ScrollSpyOptions,
    positions: Vec<HeadingPosition>,
    scroll_y: f64,
    active: Option<Active>,
    pinned: Option<String>,
    frame_pending: bool,
}

impl ScrollSpy {
    /// Mounts the scroll-spy at the top of the page.
    pub fn new(toc: Vec<TocEntry>, options: ScrollSpyOptions, layout: &impl LayoutSource) -> Self {
        let mut spy = Self {
            toc,
            options,
            positions: Vec::new(),
            scroll_y: 0.0,
            active: None,
            pinned: None,
            frame_pending: false,
        };
        spy.remeasure(layout);
        spy.active = compute_active(&spy.positions, spy.scroll_y, &spy.options);
        spy
    }

    pub fn active(&self) -> Option<&Active> {
        self.active.as_ref()
    }

    /// Id of the active heading (`None` for the intro or an empty TOC).
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_ref().and_then(Active::heading_id)
    }

    pub fn positions(&self) -> &[HeadingPosition] {
        &self.positions
    }

    pub fn toc(&self) -> &[TocEntry] {
        &self.toc
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn handle(&mut self, message: Message, layout: &impl LayoutSource) -> Effect {
        match message {
            Message::Resized => {
                self.remeasure(layout);
                self.recompute()
            }
            Message::Scrolled => {
                if self.frame_pending {
                    return Effect::None;
                }
                self.frame_pending = true;
                Effect::RequestFrame
            }
            Message::Frame { scroll_y } => {
                self.frame_pending = false;
                self.scroll_y = scroll_y;
                self.recompute()
            }
            Message::EntryClicked(id) => {
                let Some(top) = self.top_of(&id) else {
                    tracing::debug!(%id, "clicked heading is not rendered");
                    return Effect::None;
                };
                self.active = Some(Active::Heading(id.clone()));
                self.pinned = Some(id.clone());
                let top = (top - self.options.top_offset.value()).max(0.0);
                tracing::debug!(%id, top, "scrolling to heading");
                Effect::ScrollTo { id, top }
            }
            Message::UserScrollInput => {
                if self.pinned.take().is_some() {
                    tracing::trace!("user scroll released pinned heading");
                    return self.recompute();
                }
                Effect::None
            }
        }
    }

    fn remeasure(&mut self, layout: &impl LayoutSource) {
        self.positions = measure(&self.toc, layout);
        tracing::trace!(measured = self.positions.len(), "headings measured");
    }

    fn recompute(&mut self) -> Effect {
        let natural = compute_active(&self.positions, self.scroll_y, &self.options);
        if let Some(pinned) = &self.pinned {
            if natural.as_ref().and_then(Active::heading_id) == Some(pinned.as_str()) {
                self.pinned = None;
            } else {
                return Effect::None;
            }
        }
        if natural == self.active {
            return Effect::None;
        }
        self.active = natural.clone();
        Effect::ActiveChanged(natural)
    }

    fn top_of(&self, id: &str) -> Option<f64> {
        self.positions.iter().find(|p| p.id == id).map(|p| p.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn toc() -> Vec<TocEntry> {
        vec![
            TocEntry::new("a", "A", 2),
            TocEntry::new("b", "B", 2),
            TocEntry::new("c", "C", 3),
        ]
    }

    fn layout() -> HashMap<String, f64> {
        [("a", 100.0), ("b", 500.0), ("c", 900.0)]
            .into_iter()
            .map(|(id, top)| (id.to_string(), top))
            .collect()
    }

    fn scroll(spy: &mut ScrollSpy, layout: &HashMap<String, f64>, scroll_y: f64) -> Effect {
        spy.handle(Message::Scrolled, layout);
        spy.handle(Message::Frame { scroll_y }, layout)
    }

    #[test]
    fn scroll_selects_last_crossed_heading() {
        let layout = layout();
        let mut spy = ScrollSpy::new(toc(), ScrollSpyOptions::default(), &layout);
        assert_eq!(spy.active_id(), Some("a"));

        let effect = scroll(&mut spy, &layout, 400.0);
        assert_eq!(
            effect,
            Effect::ActiveChanged(Some(Active::Heading("b".into())))
        );
        assert_eq!(spy.active_id(), Some("b"));

        assert_eq!(scroll(&mut spy, &layout, 420.0), Effect::None);
    }

    #[test]
    fn scroll_events_coalesce_into_one_frame() {
        let layout = layout();
        let mut spy = ScrollSpy::new(toc(), ScrollSpyOptions::default(), &layout);

        assert_eq!(spy.handle(Message::Scrolled, &layout), Effect::RequestFrame);
        assert_eq!(spy.handle(Message::Scrolled, &layout), Effect::None);
        assert_eq!(spy.handle(Message::Scrolled, &layout), Effect::None);
        assert!(spy.frame_pending());

        spy.handle(Message::Frame { scroll_y: 800.0 }, &layout);
        assert!(!spy.frame_pending());
        assert_eq!(spy.active_id(), Some("c"));
        assert_eq!(spy.handle(Message::Scrolled, &layout), Effect::RequestFrame);
    }

    #[test]
    fn click_pins_target_without_flicker() {
        let layout = layout();
        let mut spy = ScrollSpy::new(toc(), ScrollSpyOptions::default(), &layout);

        let effect = spy.handle(Message::EntryClicked("c".into()), &layout);
        assert_eq!(
            effect,
            Effect::ScrollTo {
                id: "c".into(),
                top: 750.0
            }
        );
        assert_eq!(spy.active_id(), Some("c"));

        for scroll_y in [100.0, 300.0, 500.0, 700.0] {
            scroll(&mut spy, &layout, scroll_y);
            assert_eq!(spy.active_id(), Some("c"));
            assert!(spy.is_pinned());
        }

        scroll(&mut spy, &layout, 750.0);
        assert_eq!(spy.active_id(), Some("c"));
        assert!(!spy.is_pinned());

        scroll(&mut spy, &layout, 400.0);
        assert_eq!(spy.active_id(), Some("b"));
    }

    #[test]
    fn user_scroll_releases_pin() {
        let layout = layout();
        let mut spy = ScrollSpy::new(toc(), ScrollSpyOptions::default(), &layout);
        spy.handle(Message::EntryClicked("c".into()), &layout);
        scroll(&mut spy, &layout, 300.0);

        let effect = spy.handle(Message::UserScrollInput, &layout);
        assert_eq!(
            effect,
            Effect::ActiveChanged(Some(Active::Heading("a".into())))
        );
        assert!(!spy.is_pinned());
    }

    #[test]
    fn clicking_unrendered_heading_is_ignored() {
        let layout = layout();
        let mut toc = toc();
        toc.push(TocEntry::new("ghost", "Ghost", 2));
        let mut spy = ScrollSpy::new(toc, ScrollSpyOptions::default(), &layout);

        assert_eq!(
            spy.handle(Message::EntryClicked("ghost".into()), &layout),
            Effect::None
        );
        assert_eq!(spy.active_id(), Some("a"));
    }

    #[test]
    fn resize_remeasures() {
        let mut layout = layout();
        let mut spy = ScrollSpy::new(toc(), ScrollSpyOptions::default(), &layout);
        scroll(&mut spy, &layout, 400.0);
        assert_eq!(spy.active_id(), Some("b"));

        layout.insert("b".into(), 1_200.0);
        layout.insert("c".into(), 1_600.0);
        let effect = spy.handle(Message::Resized, &layout);
        assert_eq!(
            effect,
            Effect::ActiveChanged(Some(Active::Heading("a".into())))
        );
    }

    #[test]
    fn intro_is_active_above_first_heading() {
        let layout: HashMap<String, f64> = [("a".to_string(), 600.0)].into_iter().collect();
        let options = ScrollSpyOptions {
            show_intro: true,
            ..ScrollSpyOptions::default()
        };
        let mut spy = ScrollSpy::new(toc(), options, &layout);
        assert_eq!(spy.active(), Some(&Active::Intro));
        assert_eq!(spy.active_id(), None);

        scroll(&mut spy, &layout, 500.0);
        assert_eq!(spy.active_id(), Some("a"));
    }
}
