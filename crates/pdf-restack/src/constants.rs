//! Shared constants for page restructuring
//!
//! Centralizes the default page geometry and the page-number sizing ratios.

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (A4 portrait: 210mm × 297mm)
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 595.0;

/// Default page height in points (A4 portrait)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 842.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Page Numbers
// =============================================================================

/// Page-number font size as a fraction of the page width
pub const NUMBER_FONT_RATIO: f32 = 0.05;

/// Page-number margin from the page edge as a fraction of the page width
pub const NUMBER_PADDING_RATIO: f32 = 0.05;

/// Font resource name used for drawn page numbers. Distinct from the common
/// /F1..Fn names so it does not collide with fonts the source pages define.
pub const NUMBER_FONT_NAME: &str = "Fpn";

// =============================================================================
// Generated Documents
// =============================================================================

/// The big centered label on generated pages is the page width divided by this
pub const GENERATE_FONT_DIVISOR: f32 = 1.5;
