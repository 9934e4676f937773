// SPDX-License-Identifier: MPL-2.0
//! Buffered media ranges.
//!
//! Mirrors the `TimeRanges` object exposed by native media elements: an
//! ordered list of disjoint `[start, end)` spans of already-downloaded data.

/// Ordered, disjoint, ascending `[start, end)` ranges in seconds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeRanges(Vec<(f64, f64)>);

impl TimeRanges {
    /// Builds normalized ranges from arbitrary spans.
    ///
    /// Empty, inverted and non-finite spans are dropped; the rest are sorted
    /// by start and overlapping or touching spans are merged.
    pub fn new(spans: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut spans: Vec<(f64, f64)> = spans
            .into_iter()
            .filter(|(start, end)| start.is_finite() && end.is_finite() && end > start)
            .map(|(start, end)| (start.max(0.0), end))
            .filter(|(start, end)| end > start)
            .collect();
        spans.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut merged: Vec<(f64, f64)> = Vec::with_capacity(spans.len());
        for (start, end) in spans {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        Self(merged)
    }

    /// Number of ranges.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Start of range `index`, like `TimeRanges.start(i)`.
    pub fn start(&self, index: usize) -> Option<f64> {
        self.0.get(index).map(|r| r.0)
    }

    /// End of range `index`, like `TimeRanges.end(i)`.
    pub fn end(&self, index: usize) -> Option<f64> {
        self.0.get(index).map(|r| r.1)
    }

    /// Iterates over `(start, end)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.0.iter().copied()
    }

    /// Returns the range containing `time`, if any.
    pub fn containing(&self, time: f64) -> Option<(f64, f64)> {
        let idx = self.0.partition_point(|r| r.0 <= time);
        let candidate = self.0.get(idx.checked_sub(1)?)?;
        (time < candidate.1).then_some(*candidate)
    }
}

/// Returns how far the progress bar's "buffered" fill should reach.
///
/// The end of the range containing `current_time`; otherwise the first
/// range's end; otherwise `0`.
pub fn buffered_end(ranges: &TimeRanges, current_time: f64) -> f64 {
    if let Some((_, end)) = ranges.containing(current_time) {
        return end;
    }
    ranges.end(0).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_end_uses_containing_range() {
        let ranges = TimeRanges::new([(0.0, 10.0), (20.0, 30.0)]);
        assert_eq!(buffered_end(&ranges, 25.0), 30.0);
        assert_eq!(buffered_end(&ranges, 0.0), 10.0);
    }

    #[test]
    fn buffered_end_falls_back_to_first_range() {
        let ranges = TimeRanges::new([(0.0, 10.0), (20.0, 30.0)]);
        assert_eq!(buffered_end(&ranges, 15.0), 10.0);
        // End is exclusive.
        assert_eq!(buffered_end(&ranges, 30.0), 10.0);
    }

    #[test]
    fn buffered_end_of_nothing_is_zero() {
        assert_eq!(buffered_end(&TimeRanges::default(), 5.0), 0.0);
    }

    #[test]
    fn new_sorts_and_merges() {
        let ranges = TimeRanges::new([(20.0, 30.0), (0.0, 5.0), (4.0, 10.0), (30.0, 31.0)]);
        let spans: Vec<_> = ranges.iter().collect();
        assert_eq!(spans, vec![(0.0, 10.0), (20.0, 31.0)]);
    }

    #[test]
    fn new_drops_degenerate_spans() {
        let ranges = TimeRanges::new([(5.0, 5.0), (8.0, 2.0), (f64::NAN, 3.0), (1.0, 2.0)]);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges.start(0), Some(1.0));
        assert_eq!(ranges.end(0), Some(2.0));
        assert_eq!(ranges.end(1), None);
    }
}
