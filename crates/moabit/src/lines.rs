//! Vertical ruling-line analysis.
//!
//! Counts distinct vertical line segments on a page. The count is a
//! structural prior for mode selection: ruled borders are evidence that the
//! lattice strategy fits the page.

use crate::types::Page;

/// Count distinct vertical ruling lines on a page.
///
/// A segment is considered vertical when its horizontal extent is within
/// `tolerance`. Segments whose x-position falls within `tolerance` of an
/// already-counted line are merged into it, so anti-aliased or duplicated
/// strokes are counted once.
///
/// A page with no extractable geometry yields 0. That is a legitimate input
/// signal (an unruled page), not a fault.
pub fn count_vertical_lines(page: &Page, tolerance: f32) -> usize {
    let mut seen_xs: Vec<f32> = Vec::new();

    for segment in &page.lines {
        if (segment.x1 - segment.x0).abs() > tolerance {
            continue;
        }
        // A vertical line needs actual height; dots and specks do not count.
        if (segment.y1 - segment.y0).abs() <= tolerance {
            continue;
        }

        let x = (segment.x0 + segment.x1) / 2.0;
        if seen_xs.iter().any(|&seen| (seen - x).abs() <= tolerance) {
            continue;
        }
        seen_xs.push(x);
    }

    seen_xs.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineSegment;

    fn page_with_lines(lines: Vec<LineSegment>) -> Page {
        Page {
            index: 0,
            lines,
            text: None,
        }
    }

    #[test]
    fn test_no_geometry_counts_zero() {
        let page = page_with_lines(Vec::new());
        assert_eq!(count_vertical_lines(&page, 2.0), 0);
    }

    #[test]
    fn test_distinct_vertical_lines() {
        let page = page_with_lines(vec![
            LineSegment::new(100.0, 0.0, 100.0, 500.0),
            LineSegment::new(200.0, 0.0, 200.0, 500.0),
            LineSegment::new(300.0, 0.0, 300.0, 500.0),
        ]);
        assert_eq!(count_vertical_lines(&page, 2.0), 3);
    }

    #[test]
    fn test_duplicate_strokes_merged() {
        // Two strokes 1 unit apart: one anti-aliased line, not two.
        let page = page_with_lines(vec![
            LineSegment::new(100.0, 0.0, 100.0, 500.0),
            LineSegment::new(101.0, 0.0, 101.0, 500.0),
        ]);
        assert_eq!(count_vertical_lines(&page, 2.0), 1);
    }

    #[test]
    fn test_horizontal_lines_ignored() {
        let page = page_with_lines(vec![
            LineSegment::new(0.0, 100.0, 500.0, 100.0),
            LineSegment::new(0.0, 200.0, 500.0, 200.0),
        ]);
        assert_eq!(count_vertical_lines(&page, 2.0), 0);
    }

    #[test]
    fn test_degenerate_specks_ignored() {
        let page = page_with_lines(vec![LineSegment::new(100.0, 100.0, 100.5, 100.5)]);
        assert_eq!(count_vertical_lines(&page, 2.0), 0);
    }

    #[test]
    fn test_slightly_skewed_vertical_counted() {
        let page = page_with_lines(vec![LineSegment::new(100.0, 0.0, 101.5, 500.0)]);
        assert_eq!(count_vertical_lines(&page, 2.0), 1);
    }

    #[test]
    fn test_lines_outside_tolerance_distinct() {
        let page = page_with_lines(vec![
            LineSegment::new(100.0, 0.0, 100.0, 500.0),
            LineSegment::new(105.0, 0.0, 105.0, 500.0),
        ]);
        assert_eq!(count_vertical_lines(&page, 2.0), 2);
    }
}
