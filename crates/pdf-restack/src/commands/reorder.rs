//! Reorder pages by a named scheme

use crate::layout::page_order;
use crate::options::ReorderOptions;
use crate::render::{assemble_catalog, copy_page, source_page_ids};
use crate::types::{RestackError, Result};
use lopdf::{Document, Object};
use std::collections::HashMap;
use std::path::Path;

use super::io::{load_document, read_input_or_stdin, save_document, write_output_or_stdout};

/// Copy the source pages into a fresh document in the order the scheme
/// dictates. The order is recomputed from the page count, so every index is
/// still bounds-checked before it touches the page list.
pub fn apply(source: &Document, options: &ReorderOptions) -> Result<Document> {
    let page_ids = source_page_ids(source);
    if page_ids.is_empty() {
        return Err(RestackError::NoPages);
    }

    let order = page_order(options.scheme, page_ids.len());

    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();
    let mut cache = HashMap::new();
    let mut kids = Vec::with_capacity(order.len());

    for source_index in order {
        let &page_id = page_ids
            .get(source_index)
            .ok_or(RestackError::PageOutOfRange {
                index: source_index,
                page_count: page_ids.len(),
            })?;
        let new_page = copy_page(&mut output, source, page_id, pages_id, &mut cache)?;
        kids.push(Object::Reference(new_page));
    }

    assemble_catalog(&mut output, pages_id, kids);
    Ok(output)
}

pub async fn run(
    options: ReorderOptions,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let bytes = read_input_or_stdin(input).await?;
    let source = load_document(bytes).await?;
    let result =
        tokio::task::spawn_blocking(move || apply(&source, &options)).await??;
    let bytes = save_document(result).await?;
    write_output_or_stdout(bytes, output).await
}
