//! Page-number placement policy
//!
//! Computes, for every page of a document, whether a page number is drawn
//! and where. The decision per page is: skip test, anchor alternation, then
//! coordinate resolution through the geometry kernel. The planner is pure;
//! the pagenum command replays the plan as text draws.

use crate::constants::{NUMBER_FONT_RATIO, NUMBER_PADDING_RATIO};
use crate::layout::position::alternated;
use crate::options::NumberingOptions;
use crate::types::SkipRule;

/// A resolved page-number draw instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPlacement {
    /// 0-based index of the page to draw on
    pub page_index: usize,
    /// The 1-based number assigned to the page (after the offset)
    pub number: usize,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
}

/// Compute one entry per page: `Some` draw instruction or `None` for pages
/// that are skipped (before the offset, in the skip set, or the last page
/// when the skip set names it).
///
/// Alternation is keyed on the page's 0-based index within the numbered
/// range and on the numbered page count, so the first numbered page is
/// always at the un-flipped anchor regardless of the offset.
pub fn numbering_plan(
    options: &NumberingOptions,
    page_sizes: &[(f32, f32)],
) -> Vec<Option<TextPlacement>> {
    let total = page_sizes.len();
    let numbered_count = total.saturating_sub(options.offset);

    (0..total)
        .map(|page_index| {
            if page_index < options.offset {
                return None;
            }
            let range_index = page_index - options.offset;
            let number = range_index + 1;

            let skipped = options.skip.iter().any(|rule| match rule {
                SkipRule::Page(n) => *n == number,
                SkipRule::Last => page_index + 1 == total,
            });
            if skipped {
                return None;
            }

            let (width, height) = page_sizes[page_index];
            let font_size = options.size.unwrap_or(width * NUMBER_FONT_RATIO);
            let padding = options.padding.unwrap_or(width * NUMBER_PADDING_RATIO);

            let anchor = alternated(
                options.vertical,
                options.alternate,
                range_index,
                numbered_count,
                width,
            );

            Some(TextPlacement {
                page_index,
                number,
                x: anchor.resolve(width, padding),
                y: options.horizontal.resolve(height, padding),
                font_size,
            })
        })
        .collect()
}
