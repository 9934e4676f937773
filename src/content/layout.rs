// SPDX-License-Identifier: MPL-2.0
//! Fixed line-height layout for headless scroll-spy runs.

use super::Article;
use crate::toc::LayoutSource;
use std::collections::HashMap;

/// Line height used when none is given, in pixels.
pub const DEFAULT_LINE_HEIGHT_PX: f64 = 24.0;

/// Places every heading at `line * line_height` pixels from the top.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    line_height: f64,
    tops: HashMap<String, f64>,
}

impl LineLayout {
    /// Lays out `article`; non-positive or non-finite heights use the default.
    pub fn new(article: &Article, line_height: f64) -> Self {
        let line_height = if line_height.is_finite() && line_height > 0.0 {
            line_height
        } else {
            DEFAULT_LINE_HEIGHT_PX
        };
        let tops = article
            .headings()
            .iter()
            .map(|h| (h.id.clone(), (article.body_line() + h.line) as f64 * line_height))
            .collect();
        Self { line_height, tops }
    }

    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    pub fn len(&self) -> usize {
        self.tops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tops.is_empty()
    }
}

impl LayoutSource for LineLayout {
    fn heading_top(&self, id: &str) -> Option<f64> {
        self.tops.get(id).copied()
    }
}
