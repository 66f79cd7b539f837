//! Padding policy
//!
//! Computes how many blank pages a pad operation inserts. Placement is
//! resolved separately by [`crate::types::PadPosition::insertion_index`].

use crate::types::{RestackError, Result};

/// Number of blank pages to insert.
///
/// Plain mode inserts exactly `requested` pages. Multiple mode inserts the
/// number of pages needed to make the total page count a multiple of
/// `requested`; when the source is already a multiple, a full extra block of
/// `requested` pages is appended (matching the modulo arithmetic, which
/// never returns 0). `requested == 0` in multiple mode would divide by zero
/// and is rejected as a configuration error.
pub fn pad_count(requested: usize, multiple_mode: bool, source_page_count: usize) -> Result<usize> {
    if !multiple_mode {
        return Ok(requested);
    }
    if requested == 0 {
        return Err(RestackError::Config(
            "--multiple requires a positive page count".to_string(),
        ));
    }
    Ok(requested - source_page_count % requested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_mode_is_verbatim() {
        assert_eq!(pad_count(3, false, 10).unwrap(), 3);
        assert_eq!(pad_count(0, false, 10).unwrap(), 0);
    }

    #[test]
    fn test_multiple_mode() {
        // 12 pages padded to a multiple of 5 needs 3 more
        assert_eq!(pad_count(5, true, 12).unwrap(), 3);
        assert_eq!(pad_count(4, true, 13).unwrap(), 3);
        assert_eq!(pad_count(2, true, 7).unwrap(), 1);
    }

    #[test]
    fn test_multiple_mode_exact_multiple_appends_full_block() {
        assert_eq!(pad_count(5, true, 10).unwrap(), 5);
        assert_eq!(pad_count(1, true, 9).unwrap(), 1);
    }

    #[test]
    fn test_multiple_mode_zero_divisor_rejected() {
        assert!(pad_count(0, true, 10).is_err());
    }
}
