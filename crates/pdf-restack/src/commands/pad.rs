//! Pad a document with blank pages

use crate::layout::pad_count;
use crate::options::PadOptions;
use crate::render::{insert_blank_pages, page_dimensions, source_page_ids};
use crate::types::{RestackError, Result};
use lopdf::Document;
use std::path::Path;

use super::io::{load_document, read_input_or_stdin, save_document, write_output_or_stdout};

/// Insert blank pages into the document in place, returning how many were
/// added. Unlike the other commands, pad mutates the source document rather
/// than building a fresh result; the padding pages are the only change.
///
/// Inserted pages default to the last source page's size; width and height
/// can each be overridden independently.
pub fn apply(doc: &mut Document, options: &PadOptions) -> Result<usize> {
    options.validate()?;

    let page_ids = source_page_ids(doc);
    let Some(&last_page) = page_ids.last() else {
        return Err(RestackError::NoPages);
    };

    let count = pad_count(options.pages, options.multiple, page_ids.len())?;

    let (last_width, last_height) = page_dimensions(doc, last_page)?;
    let size = (
        options.width.unwrap_or(last_width),
        options.height.unwrap_or(last_height),
    );

    let index = options.position.insertion_index(page_ids.len());
    insert_blank_pages(doc, index, count, size)?;

    Ok(count)
}

pub async fn run(options: PadOptions, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    // Reject bad options before any input byte is read
    options.validate()?;
    let bytes = read_input_or_stdin(input).await?;
    let mut doc = load_document(bytes).await?;
    let doc = tokio::task::spawn_blocking(move || {
        apply(&mut doc, &options)?;
        Ok::<_, RestackError>(doc)
    })
    .await??;
    let bytes = save_document(doc).await?;
    write_output_or_stdout(bytes, output).await
}
