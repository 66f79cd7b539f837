//! Chunk and partition layout
//!
//! Merge lays consecutive source pages side by side on one result page;
//! split partitions one source page into equal-width vertical strips. The
//! two are approximate inverses for matching chunk sizes: content crossing a
//! cut line is clipped, not reflowed.

use crate::types::{RestackError, Result};

/// One source page's slot on a merged result page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlacement {
    /// 0-based index into the source page sequence
    pub source_index: usize,
    /// Left edge of this page on the result page, in points
    pub x_offset: f32,
}

/// Layout of one merged result page
#[derive(Debug, Clone, PartialEq)]
pub struct MergedPage {
    /// Sum of the chunk's page widths
    pub width: f32,
    /// Maximum of the chunk's page heights
    pub height: f32,
    pub placements: Vec<PagePlacement>,
}

/// One vertical strip of a split source page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strip {
    /// Width of the result page holding this strip
    pub page_width: f32,
    /// Left edge of the strip on the source page
    pub left: f32,
    /// Right edge of the strip on the source page
    pub right: f32,
}

/// Partition `page_sizes` (width, height per source page) into chunks of
/// `chunk_size` and lay each chunk out left to right on one result page.
/// The last chunk may be shorter. Each placement's offset is the running sum
/// of the preceding widths in its chunk; y is always 0.
pub fn merge_layout(page_sizes: &[(f32, f32)], chunk_size: usize) -> Result<Vec<MergedPage>> {
    if chunk_size == 0 {
        return Err(RestackError::Config(
            "chunk size must be at least 1".to_string(),
        ));
    }

    Ok(page_sizes
        .chunks(chunk_size)
        .enumerate()
        .map(|(chunk_index, chunk)| {
            let mut placements = Vec::with_capacity(chunk.len());
            let mut offset = 0.0;
            let mut height: f32 = 0.0;
            for (slot, &(width, page_height)) in chunk.iter().enumerate() {
                placements.push(PagePlacement {
                    source_index: chunk_index * chunk_size + slot,
                    x_offset: offset,
                });
                offset += width;
                height = height.max(page_height);
            }
            MergedPage {
                width: offset,
                height,
                placements,
            }
        })
        .collect())
}

/// Partition a page of the given width into `chunk_size` equal-width
/// vertical strips, full height. Strip `i` covers
/// `[width/chunk * i, width/chunk * (i+1)]` of the source page and is
/// rendered at the origin of its own result page.
pub fn split_layout(width: f32, chunk_size: usize) -> Result<Vec<Strip>> {
    if chunk_size == 0 {
        return Err(RestackError::Config(
            "chunk size must be at least 1".to_string(),
        ));
    }

    let strip_width = width / chunk_size as f32;
    Ok((0..chunk_size)
        .map(|i| Strip {
            page_width: strip_width,
            left: strip_width * i as f32,
            right: strip_width * (i + 1) as f32,
        })
        .collect())
}
