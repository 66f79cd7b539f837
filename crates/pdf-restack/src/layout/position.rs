//! Geometry kernel
//!
//! Resolves symbolic or numeric anchors to concrete coordinates, one axis at
//! a time, and mirrors anchors across the page center for binding-aware
//! alternation. All functions here are pure; out-of-range numeric overrides
//! are accepted as-is (the caller owns them).

use crate::types::{AlternateMode, HorizontalAnchor, VerticalAnchor};

impl HorizontalAnchor {
    /// Resolve to an x coordinate on a page of width `extent`, keeping a
    /// `margin` gap from the left/right edges.
    pub fn resolve(self, extent: f32, margin: f32) -> f32 {
        match self {
            HorizontalAnchor::Left => margin,
            HorizontalAnchor::Right => extent - margin,
            HorizontalAnchor::Middle => extent / 2.0,
            HorizontalAnchor::At(x) => x,
        }
    }

    /// Mirror the anchor across the vertical centerline of the page.
    pub fn flip(self, extent: f32) -> Self {
        match self {
            HorizontalAnchor::Left => HorizontalAnchor::Right,
            HorizontalAnchor::Right => HorizontalAnchor::Left,
            HorizontalAnchor::Middle => HorizontalAnchor::Middle,
            HorizontalAnchor::At(x) => HorizontalAnchor::At(extent - x),
        }
    }
}

impl VerticalAnchor {
    /// Resolve to a y coordinate on a page of height `extent`, keeping a
    /// `margin` gap from the top/bottom edges.
    pub fn resolve(self, extent: f32, margin: f32) -> f32 {
        match self {
            VerticalAnchor::Bottom => margin,
            VerticalAnchor::Top => extent - margin,
            VerticalAnchor::Middle => extent / 2.0,
            VerticalAnchor::At(y) => y,
        }
    }

    /// Mirror the anchor across the horizontal centerline of the page.
    pub fn flip(self, extent: f32) -> Self {
        match self {
            VerticalAnchor::Top => VerticalAnchor::Bottom,
            VerticalAnchor::Bottom => VerticalAnchor::Top,
            VerticalAnchor::Middle => VerticalAnchor::Middle,
            VerticalAnchor::At(y) => VerticalAnchor::At(extent - y),
        }
    }
}

/// Apply an alternation policy to a width-axis anchor.
///
/// `parity` flips the anchor on every odd page index; `halves` flips it once
/// the index reaches the midpoint of the page range. Both are keyed on the
/// 0-based `page_index` within the range being numbered and the total
/// `page_count` of that range.
pub fn alternated(
    anchor: HorizontalAnchor,
    mode: Option<AlternateMode>,
    page_index: usize,
    page_count: usize,
    extent: f32,
) -> HorizontalAnchor {
    match mode {
        None => anchor,
        Some(AlternateMode::Parity) => {
            if page_index % 2 == 0 {
                anchor
            } else {
                anchor.flip(extent)
            }
        }
        Some(AlternateMode::Halves) => {
            if (page_index as f32) < page_count as f32 / 2.0 {
                anchor
            } else {
                anchor.flip(extent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_horizontal() {
        assert_eq!(HorizontalAnchor::Left.resolve(600.0, 30.0), 30.0);
        assert_eq!(HorizontalAnchor::Right.resolve(600.0, 30.0), 570.0);
        assert_eq!(HorizontalAnchor::Middle.resolve(600.0, 30.0), 300.0);
        assert_eq!(HorizontalAnchor::At(42.0).resolve(600.0, 30.0), 42.0);
    }

    #[test]
    fn test_resolve_vertical() {
        assert_eq!(VerticalAnchor::Bottom.resolve(800.0, 25.0), 25.0);
        assert_eq!(VerticalAnchor::Top.resolve(800.0, 25.0), 775.0);
        assert_eq!(VerticalAnchor::Middle.resolve(800.0, 25.0), 400.0);
        assert_eq!(VerticalAnchor::At(-5.0).resolve(800.0, 25.0), -5.0);
    }

    #[test]
    fn test_flip() {
        assert_eq!(HorizontalAnchor::Left.flip(600.0), HorizontalAnchor::Right);
        assert_eq!(HorizontalAnchor::Right.flip(600.0), HorizontalAnchor::Left);
        assert_eq!(HorizontalAnchor::Middle.flip(600.0), HorizontalAnchor::Middle);
        assert_eq!(HorizontalAnchor::At(100.0).flip(600.0), HorizontalAnchor::At(500.0));
    }

    #[test]
    fn test_alternate_parity() {
        let anchor = HorizontalAnchor::Left;
        assert_eq!(
            alternated(anchor, Some(AlternateMode::Parity), 0, 6, 600.0),
            HorizontalAnchor::Left
        );
        assert_eq!(
            alternated(anchor, Some(AlternateMode::Parity), 1, 6, 600.0),
            HorizontalAnchor::Right
        );
        assert_eq!(
            alternated(anchor, Some(AlternateMode::Parity), 2, 6, 600.0),
            HorizontalAnchor::Left
        );
    }

    #[test]
    fn test_alternate_halves() {
        let anchor = HorizontalAnchor::Right;
        // 5 pages: indices 0..=2 are below the 2.5 midpoint, 3 and 4 flip
        for i in 0..3 {
            assert_eq!(
                alternated(anchor, Some(AlternateMode::Halves), i, 5, 600.0),
                HorizontalAnchor::Right,
                "index {i}"
            );
        }
        for i in 3..5 {
            assert_eq!(
                alternated(anchor, Some(AlternateMode::Halves), i, 5, 600.0),
                HorizontalAnchor::Left,
                "index {i}"
            );
        }
    }

    #[test]
    fn test_no_alternation() {
        assert_eq!(
            alternated(HorizontalAnchor::At(7.0), None, 9, 10, 600.0),
            HorizontalAnchor::At(7.0)
        );
    }
}
