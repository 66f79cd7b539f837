use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestackError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages in source document")]
    NoPages,
    #[error("Page index {index} out of range for document with {page_count} pages")]
    PageOutOfRange { index: usize, page_count: usize },
}

pub type Result<T> = std::result::Result<T, RestackError>;

/// Page orientation for generated documents
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Horizontal placement anchor: a symbolic keyword or an explicit x coordinate.
///
/// Resolved against a page's width and a padding margin by the geometry
/// kernel in `layout::position`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAnchor {
    Left,
    Right,
    Middle,
    /// Explicit x coordinate in points, used as-is
    At(f32),
}

/// Vertical placement anchor: a symbolic keyword or an explicit y coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAnchor {
    Top,
    Bottom,
    Middle,
    /// Explicit y coordinate in points, used as-is
    At(f32),
}

impl FromStr for HorizontalAnchor {
    type Err = RestackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "middle" => Ok(Self::Middle),
            other => other
                .parse::<f32>()
                .map(Self::At)
                .map_err(|_| anchor_error(other, "left, right, middle")),
        }
    }
}

impl FromStr for VerticalAnchor {
    type Err = RestackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "middle" => Ok(Self::Middle),
            other => other
                .parse::<f32>()
                .map(Self::At)
                .map_err(|_| anchor_error(other, "top, bottom, middle")),
        }
    }
}

fn anchor_error(value: &str, keywords: &str) -> RestackError {
    RestackError::Config(format!(
        "'{value}' is not a position: expected a number or one of {keywords}"
    ))
}

/// Where padding pages are inserted
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PadPosition {
    /// Before the first page
    Start,
    /// After the last page
    #[default]
    End,
    /// At an explicit 0-based page index
    Index(usize),
}

impl PadPosition {
    /// Resolve to a concrete insertion index for a document of `page_count`
    /// pages. An explicit index past the end degrades to an append.
    pub fn insertion_index(self, page_count: usize) -> usize {
        match self {
            PadPosition::Start => 0,
            PadPosition::End => page_count,
            PadPosition::Index(i) => i.min(page_count),
        }
    }
}

impl FromStr for PadPosition {
    type Err = RestackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            other => other.parse::<usize>().map(Self::Index).map_err(|_| {
                RestackError::Config(format!(
                    "'{other}' is not a padding position: expected a page index, start, or end"
                ))
            }),
        }
    }
}

/// Named page reordering schemes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReorderScheme {
    /// Fold-in-half reading order for double-sided printing
    Weave,
    /// Structural inverse of weave
    Unweave,
    /// Weave with alternating pair reversal for saddle-stitch booklets
    Pamphlet,
}

/// Per-page anchor alternation policy for binding-aware placement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlternateMode {
    /// Mirror the anchor on every odd page index
    Parity,
    /// Mirror the anchor for the second half of the document
    Halves,
}

/// A page-number skip rule: a 1-based page number or the last page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipRule {
    Page(usize),
    Last,
}

impl FromStr for SkipRule {
    type Err = RestackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "last" => Ok(Self::Last),
            other => other.parse::<usize>().map(Self::Page).map_err(|_| {
                RestackError::Config(format!(
                    "'{other}' is not a skip rule: expected a page number or 'last'"
                ))
            }),
        }
    }
}

/// The standard Type1 fonts available for page numbering without embedding
/// a font program.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StandardFont {
    Helvetica,
    #[default]
    HelveticaBold,
    TimesRoman,
    Courier,
}

impl StandardFont {
    /// The PDF BaseFont name
    pub fn base_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::Courier => "Courier",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_parsing() {
        assert_eq!("left".parse::<HorizontalAnchor>().unwrap(), HorizontalAnchor::Left);
        assert_eq!("middle".parse::<HorizontalAnchor>().unwrap(), HorizontalAnchor::Middle);
        assert_eq!("42".parse::<HorizontalAnchor>().unwrap(), HorizontalAnchor::At(42.0));
        assert!("top".parse::<HorizontalAnchor>().is_err());

        assert_eq!("top".parse::<VerticalAnchor>().unwrap(), VerticalAnchor::Top);
        assert_eq!("12.5".parse::<VerticalAnchor>().unwrap(), VerticalAnchor::At(12.5));
        assert!("left".parse::<VerticalAnchor>().is_err());
    }

    #[test]
    fn test_pad_position_parsing() {
        assert_eq!("start".parse::<PadPosition>().unwrap(), PadPosition::Start);
        assert_eq!("end".parse::<PadPosition>().unwrap(), PadPosition::End);
        assert_eq!("3".parse::<PadPosition>().unwrap(), PadPosition::Index(3));
        assert!("middle".parse::<PadPosition>().is_err());
    }

    #[test]
    fn test_pad_position_insertion_index() {
        assert_eq!(PadPosition::Start.insertion_index(10), 0);
        assert_eq!(PadPosition::End.insertion_index(10), 10);
        assert_eq!(PadPosition::Index(4).insertion_index(10), 4);
        // Past-the-end index degrades to append
        assert_eq!(PadPosition::Index(25).insertion_index(10), 10);
    }

    #[test]
    fn test_skip_rule_parsing() {
        assert_eq!("last".parse::<SkipRule>().unwrap(), SkipRule::Last);
        assert_eq!("7".parse::<SkipRule>().unwrap(), SkipRule::Page(7));
        assert!("first".parse::<SkipRule>().is_err());
    }
}
