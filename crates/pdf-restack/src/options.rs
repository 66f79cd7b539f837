use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for the `generate` command
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerateOptions {
    /// Number of pages in the generated document
    pub pages: usize,
    pub orientation: Orientation,
    /// Page width in points, before orientation is applied
    pub width: f32,
    /// Page height in points, before orientation is applied
    pub height: f32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        let (width, height) = DEFAULT_PAGE_DIMENSIONS;
        Self {
            pages: 1,
            orientation: Orientation::Portrait,
            width,
            height,
        }
    }
}

impl GenerateOptions {
    pub fn validate(&self) -> Result<()> {
        if self.pages == 0 {
            return Err(RestackError::Config(
                "page count must be at least 1".to_string(),
            ));
        }
        validate_extent("width", self.width)?;
        validate_extent("height", self.height)?;
        Ok(())
    }
}

/// Options for the `merge` command
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MergeOptions {
    /// Number of consecutive source pages merged onto each result page
    pub chunk: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self { chunk: 2 }
    }
}

impl MergeOptions {
    pub fn validate(&self) -> Result<()> {
        validate_chunk(self.chunk)
    }
}

/// Options for the `split` command
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SplitOptions {
    /// Number of equal-width strips each source page is split into
    pub chunk: usize,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self { chunk: 2 }
    }
}

impl SplitOptions {
    pub fn validate(&self) -> Result<()> {
        validate_chunk(self.chunk)
    }
}

/// Options for the `pad` command
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PadOptions {
    /// Number of blank pages to insert, or the target multiple when
    /// `multiple` is set
    pub pages: usize,
    /// Pad the document up to a length that is a multiple of `pages`
    pub multiple: bool,
    pub position: PadPosition,
    /// Inserted page width; defaults to the last source page's width
    pub width: Option<f32>,
    /// Inserted page height; defaults to the last source page's height
    pub height: Option<f32>,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            pages: 1,
            multiple: false,
            position: PadPosition::End,
            width: None,
            height: None,
        }
    }
}

impl PadOptions {
    pub fn validate(&self) -> Result<()> {
        if self.pages == 0 {
            return Err(RestackError::Config(
                "pad page count must be at least 1".to_string(),
            ));
        }
        if let Some(width) = self.width {
            validate_extent("width", width)?;
        }
        if let Some(height) = self.height {
            validate_extent("height", height)?;
        }
        Ok(())
    }
}

/// Options for the `reorder` command
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReorderOptions {
    pub scheme: ReorderScheme,
}

/// Options for the `pagenum` command.
///
/// Note the axis naming: `horizontal` positions the number along the page
/// height (top/bottom/middle) and `vertical` along the page width
/// (left/right/middle); alternation mirrors the width-axis anchor. The CLI
/// flags carry the same names, so the two stay aligned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberingOptions {
    /// Skip this many leading pages before numbering starts at 1
    pub offset: usize,
    /// Assigned numbers (or the last page) that receive no number
    pub skip: Vec<SkipRule>,
    /// Anchor along the page height
    pub horizontal: VerticalAnchor,
    /// Anchor along the page width
    pub vertical: HorizontalAnchor,
    pub alternate: Option<AlternateMode>,
    pub font: StandardFont,
    /// Font size in points; defaults to 5% of the page width
    pub size: Option<f32>,
    /// Margin from the page edge in points; defaults to 5% of the page width
    pub padding: Option<f32>,
}

impl Default for NumberingOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            skip: Vec::new(),
            horizontal: VerticalAnchor::Bottom,
            vertical: HorizontalAnchor::Left,
            alternate: None,
            font: StandardFont::default(),
            size: None,
            padding: None,
        }
    }
}

impl NumberingOptions {
    /// Load options from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| RestackError::Config(format!("Failed to parse options: {}", e)))?;
        Ok(options)
    }

    /// Save options to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RestackError::Config(format!("Failed to serialize options: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(size) = self.size {
            validate_extent("size", size)?;
        }
        if let Some(padding) = self.padding {
            if !padding.is_finite() || padding < 0.0 {
                return Err(RestackError::Config(
                    "padding must be a non-negative number".to_string(),
                ));
            }
        }
        Ok(())
    }
}

fn validate_chunk(chunk: usize) -> Result<()> {
    if chunk == 0 {
        return Err(RestackError::Config(
            "chunk size must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_extent(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RestackError::Config(format!(
            "{name} must be a positive number, got {value}"
        )));
    }
    Ok(())
}
