// SPDX-License-Identifier: MPL-2.0
//! Table of contents and scroll-spy.
//!
//! The table of contents is a tree of [`TocEntry`] values in document order.
//! The scroll-spy measures where each heading sits on the page, then finds
//! the heading that last crossed the activation line with a binary search.

mod scroll_spy;

pub use scroll_spy::{Effect, Message, ScrollSpy, ScrollSpyOptions};

use std::collections::{BTreeMap, HashMap};

/// One heading in an article's table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Anchor id of the heading in the rendered page.
    pub id: String,
    pub title: String,
    /// Heading level (2 for `##`). Used for indentation only.
    pub depth: u8,
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>, depth: u8) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            depth,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<TocEntry>) -> Self {
        self.children = children;
        self
    }
}

/// Flattens a TOC tree into document order (pre-order).
pub fn flatten(entries: &[TocEntry]) -> Vec<&TocEntry> {
    fn walk<'a>(entries: &'a [TocEntry], out: &mut Vec<&'a TocEntry>) {
        for entry in entries {
            out.push(entry);
            walk(&entry.children, out);
        }
    }

    let mut out = Vec::new();
    walk(entries, &mut out);
    out
}

/// Measured page position of one heading.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingPosition {
    pub id: String,
    /// Document-relative top offset in pixels.
    pub top: f64,
}

/// Source of live heading positions (the rendered page).
pub trait LayoutSource {
    /// Document-relative top of the heading with `id`, or `None` if it is not rendered.
    fn heading_top(&self, id: &str) -> Option<f64>;
}

impl LayoutSource for HashMap<String, f64> {
    fn heading_top(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

impl LayoutSource for BTreeMap<String, f64> {
    fn heading_top(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

impl<L: LayoutSource + ?Sized> LayoutSource for &L {
    fn heading_top(&self, id: &str) -> Option<f64> {
        (**self).heading_top(id)
    }
}

/// Measures every TOC heading present in `layout`, sorted by top.
///
/// Headings missing from the layout (or with a non-finite top) are skipped.
/// The sort is stable, so headings sharing a top keep document order.
pub fn measure(entries: &[TocEntry], layout: &impl LayoutSource) -> Vec<HeadingPosition> {
    let mut positions: Vec<HeadingPosition> = flatten(entries)
        .into_iter()
        .filter_map(|entry| {
            let top = layout.heading_top(&entry.id).filter(|t| t.is_finite())?;
            Some(HeadingPosition {
                id: entry.id.clone(),
                top,
            })
        })
        .collect();
    positions.sort_by(|a, b| a.top.total_cmp(&b.top));
    positions
}

/// Index of the last position whose top is `<= y`, or `None` if every top is below `y`.
///
/// `positions` must be sorted ascending by top.
pub fn last_index_le(positions: &[HeadingPosition], y: f64) -> Option<usize> {
    positions.partition_point(|p| p.top <= y).checked_sub(1)
}

/// The highlighted TOC item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Active {
    /// The intro pseudo-entry above the first heading.
    Intro,
    Heading(String),
}

impl Active {
    pub fn heading_id(&self) -> Option<&str> {
        match self {
            Active::Heading(id) => Some(id),
            Active::Intro => None,
        }
    }
}

/// Natural active item for a scroll position.
///
/// The activation line sits `options.top_offset` below the viewport top.
/// Above the first heading the first heading is active, or the intro when
/// enabled. Returns `None` only when nothing is measured and the intro is off.
pub fn compute_active(
    positions: &[HeadingPosition],
    scroll_y: f64,
    options: &ScrollSpyOptions,
) -> Option<Active> {
    let y = scroll_y + options.top_offset.value();
    match last_index_le(positions, y) {
        Some(idx) => Some(Active::Heading(positions[idx].id.clone())),
        None if options.show_intro => Some(Active::Intro),
        None => positions.first().map(|p| Active::Heading(p.id.clone())),
    }
}
