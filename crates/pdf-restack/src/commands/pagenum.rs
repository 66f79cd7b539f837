//! Draw page numbers onto an existing document

use crate::constants::NUMBER_FONT_NAME;
use crate::layout::numbering_plan;
use crate::options::NumberingOptions;
use crate::render::{
    append_page_content, ensure_font_resource, page_dimensions, source_page_ids, standard_font,
    text_op,
};
use crate::types::{RestackError, Result};
use lopdf::Document;
use std::path::Path;

use super::io::{load_document, read_input_or_stdin, save_document, write_output_or_stdout};

/// Draw page numbers in place, returning how many were drawn.
///
/// The whole plan is computed up front from the page dimensions; each
/// `Some` placement becomes one appended content stream plus a font
/// resource entry on its page.
pub fn apply(doc: &mut Document, options: &NumberingOptions) -> Result<usize> {
    options.validate()?;

    let page_ids = source_page_ids(doc);
    if page_ids.is_empty() {
        return Err(RestackError::NoPages);
    }

    let sizes = page_ids
        .iter()
        .map(|&id| page_dimensions(doc, id))
        .collect::<Result<Vec<_>>>()?;
    let plan = numbering_plan(options, &sizes);

    let font_id = standard_font(doc, options.font);

    let mut drawn = 0;
    for placement in plan.into_iter().flatten() {
        let &page_id = page_ids
            .get(placement.page_index)
            .ok_or(RestackError::PageOutOfRange {
                index: placement.page_index,
                page_count: page_ids.len(),
            })?;

        let ops = text_op(
            NUMBER_FONT_NAME,
            placement.font_size,
            placement.x,
            placement.y,
            &placement.number.to_string(),
        );
        append_page_content(doc, page_id, ops)?;
        ensure_font_resource(doc, page_id, NUMBER_FONT_NAME, font_id)?;
        drawn += 1;
    }

    Ok(drawn)
}

pub async fn run(
    options: NumberingOptions,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
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
