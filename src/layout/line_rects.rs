//! Group a matched fragment range into visual lines and emit one rectangle per line.
//!
//! Fragments are compared with their immediate predecessor only, so a long line whose
//! baseline drifts slowly stays a single group. Each group becomes the union box of its
//! fragments, flipped from document space (Y up from the page bottom) to viewport space
//! (Y down from the top):
//!
//! ```text
//! left   = min(baseline_x)            right  = max(baseline_x + width)
//! top    = max(baseline_y)            bottom = min(baseline_y - height)
//! rect   = { x: left, y: viewport_height - top, width: right - left, height: top - bottom }
//! ```

use crate::config::DEFAULT_LINE_TOLERANCE;
use crate::error::{Error, Result};
use crate::geometry::HighlightRect;
use crate::layout::TextFragment;
use crate::search::MatchRange;

/// Whether two fragments sit on the same visual line.
pub fn same_line(a: &TextFragment, b: &TextFragment, tolerance: f32) -> bool {
    (a.baseline_y - b.baseline_y).abs() < tolerance
}

/// Split `fragments` into maximal runs of baseline-adjacent fragments.
///
/// Returns index ranges into `fragments`, in order. An empty slice yields no lines.
pub fn group_lines(fragments: &[TextFragment], tolerance: f32) -> Vec<std::ops::Range<usize>> {
    let mut lines = Vec::new();
    if fragments.is_empty() {
        return lines;
    }

    let mut line_start = 0;
    for i in 1..fragments.len() {
        if !same_line(&fragments[i - 1], &fragments[i], tolerance) {
            lines.push(line_start..i);
            line_start = i;
        }
    }
    lines.push(line_start..fragments.len());
    lines
}

/// Bounding rectangle of one visual line in viewport space.
///
/// `line` must not be empty.
fn line_rect(line: &[TextFragment], viewport_height: f32) -> HighlightRect {
    let mut left = f32::INFINITY;
    let mut right = f32::NEG_INFINITY;
    let mut top = f32::NEG_INFINITY;
    let mut bottom = f32::INFINITY;

    for fragment in line {
        left = left.min(fragment.baseline_x);
        right = right.max(fragment.right());
        top = top.max(fragment.baseline_y);
        bottom = bottom.min(fragment.bottom());
    }

    HighlightRect::new(left, viewport_height - top, right - left, top - bottom)
}

/// Line rectangle builder.
#[derive(Debug, Clone, Copy)]
pub struct LineRectBuilder {
    tolerance: f32,
}

impl Default for LineRectBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_TOLERANCE)
    }
}

impl LineRectBuilder {
    /// Create a builder with the given line tolerance (document units).
    pub fn new(tolerance: f32) -> Self {
        Self { tolerance }
    }

    /// Line tolerance in use.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Build one rectangle per visual line of `fragments[range.start..=range.end]`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if the range is inverted or exceeds the sequence. This is a
    /// contract violation between locator and builder, never a data problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use quote_locator::layout::{LineRectBuilder, TextFragment};
    /// use quote_locator::search::MatchRange;
    ///
    /// let fragments = vec![
    ///     TextFragment::new("Hello ", 72.0, 700.0, 30.0, 12.0, false),
    ///     TextFragment::new("World.", 102.0, 700.0, 32.0, 12.0, false),
    /// ];
    /// let rects = LineRectBuilder::default()
    ///     .build(&fragments, MatchRange::new(0, 1), 800.0)
    ///     .unwrap();
    /// assert_eq!(rects.len(), 1);
    /// assert_eq!(rects[0].y, 100.0);
    /// assert_eq!(rects[0].width, 62.0);
    /// ```
    pub fn build(
        &self,
        fragments: &[TextFragment],
        range: MatchRange,
        viewport_height: f32,
    ) -> Result<Vec<HighlightRect>> {
        if !range.fits(fragments.len()) {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
                len: fragments.len(),
            });
        }

        let matched = &fragments[range.start..=range.end];
        let rects: Vec<HighlightRect> = group_lines(matched, self.tolerance)
            .into_iter()
            .map(|line| line_rect(&matched[line], viewport_height))
            .collect();

        log::debug!(
            "Built {} line rectangle(s) for fragments {}..={}",
            rects.len(),
            range.start,
            range.end
        );
        Ok(rects)
    }
}

/// Build line rectangles with the default tolerance.
///
/// Shorthand for `LineRectBuilder::default().build(..)`.
pub fn build_rects(
    fragments: &[TextFragment],
    range: MatchRange,
    viewport_height: f32,
) -> Result<Vec<HighlightRect>> {
    LineRectBuilder::default().build(fragments, range, viewport_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(x: f32, y: f32, width: f32, height: f32) -> TextFragment {
        TextFragment::new("w", x, y, width, height, false)
    }

    #[test]
    fn test_same_line_is_strict() {
        let a = frag(0.0, 700.0, 10.0, 10.0);
        assert!(same_line(&a, &frag(0.0, 701.5, 10.0, 10.0), 2.0));
        assert!(!same_line(&a, &frag(0.0, 702.0, 10.0, 10.0), 2.0));
        assert!(!same_line(&a, &frag(0.0, 686.0, 10.0, 10.0), 2.0));
    }

    #[test]
    fn test_group_lines_empty() {
        assert!(group_lines(&[], 2.0).is_empty());
    }

    #[test]
    fn test_group_lines_compares_with_predecessor() {
        // Drift of 1.5 per fragment: 700 -> 698.5 -> 697 -> 695.5 stays one line even
        // though the last is 4.5 below the first
        let fragments = vec![
            frag(0.0, 700.0, 10.0, 10.0),
            frag(10.0, 698.5, 10.0, 10.0),
            frag(20.0, 697.0, 10.0, 10.0),
            frag(30.0, 695.5, 10.0, 10.0),
        ];
        assert_eq!(group_lines(&fragments, 2.0), vec![0..4]);
    }

    #[test]
    fn test_group_lines_splits_on_jump() {
        let fragments = vec![
            frag(0.0, 700.0, 10.0, 10.0),
            frag(10.0, 700.0, 10.0, 10.0),
            frag(0.0, 686.0, 10.0, 10.0),
            frag(0.0, 672.0, 10.0, 10.0),
        ];
        assert_eq!(group_lines(&fragments, 2.0), vec![0..2, 2..3, 3..4]);
    }

    #[test]
    fn test_line_rect_union() {
        let fragments = vec![
            frag(100.0, 700.0, 50.0, 10.0),
            frag(40.0, 701.0, 20.0, 14.0),
            frag(160.0, 699.5, 40.0, 8.0),
        ];
        let rect = line_rect(&fragments, 800.0);
        assert_eq!(rect.x, 40.0);
        assert_eq!(rect.width, 160.0); // right edge 200
        assert_eq!(rect.y, 99.0); // 800 - 701
        assert_eq!(rect.height, 14.0); // 701 - 687
    }

    #[test]
    fn test_zero_area_fragment_is_included() {
        let fragments = vec![frag(10.0, 700.0, 20.0, 10.0), frag(30.0, 700.0, 0.0, 0.0)];
        let rects = build_rects(&fragments, MatchRange::new(0, 1), 800.0).unwrap();
        assert_eq!(rects, vec![HighlightRect::new(10.0, 100.0, 20.0, 10.0)]);
    }

    #[test]
    fn test_build_uses_only_matched_slice() {
        let fragments = vec![
            frag(0.0, 720.0, 500.0, 10.0),
            frag(72.0, 700.0, 30.0, 10.0),
            frag(102.0, 700.0, 30.0, 10.0),
            frag(0.0, 680.0, 500.0, 10.0),
        ];
        let rects = build_rects(&fragments, MatchRange::new(1, 2), 800.0).unwrap();
        assert_eq!(rects, vec![HighlightRect::new(72.0, 100.0, 60.0, 10.0)]);
    }

    #[test]
    fn test_two_lines_top_to_bottom() {
        let fragments = vec![frag(72.0, 700.0, 200.0, 12.0), frag(72.0, 686.0, 120.0, 12.0)];
        let rects = build_rects(&fragments, MatchRange::new(0, 1), 800.0).unwrap();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], HighlightRect::new(72.0, 100.0, 200.0, 12.0));
        assert_eq!(rects[1], HighlightRect::new(72.0, 114.0, 120.0, 12.0));
        assert!(rects[0].y < rects[1].y);
    }

    #[test]
    fn test_invalid_range() {
        let fragments = vec![frag(0.0, 700.0, 10.0, 10.0)];
        let err = build_rects(&fragments, MatchRange { start: 0, end: 1 }, 800.0).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { start: 0, end: 1, len: 1 }));

        let err = build_rects(&fragments, MatchRange { start: 1, end: 0 }, 800.0).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { .. }));

        assert!(build_rects(&[], MatchRange { start: 0, end: 0 }, 800.0).is_err());
    }

    #[test]
    fn test_custom_tolerance() {
        let fragments = vec![frag(0.0, 700.0, 10.0, 10.0), frag(10.0, 697.0, 10.0, 10.0)];
        let range = MatchRange::new(0, 1);
        assert_eq!(LineRectBuilder::new(2.0).build(&fragments, range, 800.0).unwrap().len(), 2);
        assert_eq!(LineRectBuilder::new(4.0).build(&fragments, range, 800.0).unwrap().len(), 1);
    }
}
