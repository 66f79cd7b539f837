//! Merge consecutive pages onto shared result pages

use crate::layout::merge_layout;
use crate::options::MergeOptions;
use crate::render::{
    assemble_catalog, create_page_xobject, new_content_page, page_dimensions, placement_op,
    source_page_ids,
};
use crate::types::{RestackError, Result};
use lopdf::{Dictionary, Document, Object};
use std::collections::HashMap;
use std::path::Path;

use super::io::{load_document, read_input_or_stdin, save_document, write_output_or_stdout};

/// Merge each chunk of `options.chunk` consecutive source pages onto one
/// result page: widths sum, heights take the chunk maximum, and every chunk
/// member is drawn at the running x offset of its predecessors.
pub fn apply(source: &Document, options: &MergeOptions) -> Result<Document> {
    options.validate()?;

    let page_ids = source_page_ids(source);
    if page_ids.is_empty() {
        return Err(RestackError::NoPages);
    }

    let sizes = page_ids
        .iter()
        .map(|&id| page_dimensions(source, id))
        .collect::<Result<Vec<_>>>()?;
    let layout = merge_layout(&sizes, options.chunk)?;

    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();
    let mut cache = HashMap::new();
    let mut kids = Vec::with_capacity(layout.len());

    for merged in &layout {
        let mut xobjects = Dictionary::new();
        let mut ops = String::new();

        for placement in &merged.placements {
            let &page_id =
                page_ids
                    .get(placement.source_index)
                    .ok_or(RestackError::PageOutOfRange {
                        index: placement.source_index,
                        page_count: page_ids.len(),
                    })?;

            let xobject_name = format!("P{}", placement.source_index);
            let xobject_id = create_page_xobject(&mut output, source, page_id, &mut cache)?;
            xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));
            ops.push_str(&placement_op(&xobject_name, placement.x_offset, 0.0));
        }

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let page_id =
            new_content_page(&mut output, merged.width, merged.height, pages_id, ops, resources);
        kids.push(Object::Reference(page_id));
    }

    assemble_catalog(&mut output, pages_id, kids);
    Ok(output)
}

pub async fn run(
    options: MergeOptions,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    // Reject bad options before any input byte is read
    options.validate()?;
    let bytes = read_input_or_stdin(input).await?;
    let source = load_document(bytes).await?;
    let result =
        tokio::task::spawn_blocking(move || apply(&source, &options)).await??;
    let bytes = save_document(result).await?;
    write_output_or_stdout(bytes, output).await
}
