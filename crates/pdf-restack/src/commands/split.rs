//! Split each page into equal-width vertical strips

use crate::layout::split_layout;
use crate::options::SplitOptions;
use crate::render::{
    CropBox, assemble_catalog, create_cropped_xobject, new_content_page, page_dimensions,
    placement_op, source_page_ids,
};
use crate::types::{RestackError, Result};
use lopdf::{Dictionary, Document, Object};
use std::collections::HashMap;
use std::path::Path;

use super::io::{load_document, read_input_or_stdin, save_document, write_output_or_stdout};

/// Split every source page into `options.chunk` vertical strips, each on its
/// own result page sized `[width / chunk, height]`.
///
/// Each strip is a cropped XObject of the source page, translated left by
/// the strip's offset so the cropped region lands at the result page origin.
pub fn apply(source: &Document, options: &SplitOptions) -> Result<Document> {
    options.validate()?;

    let page_ids = source_page_ids(source);
    if page_ids.is_empty() {
        return Err(RestackError::NoPages);
    }

    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();
    let mut cache = HashMap::new();
    let mut kids = Vec::with_capacity(page_ids.len() * options.chunk);

    for &page_id in &page_ids {
        let (width, height) = page_dimensions(source, page_id)?;
        let strips = split_layout(width, options.chunk)?;

        for strip in strips {
            let crop = CropBox {
                left: strip.left,
                bottom: 0.0,
                right: strip.right,
                top: height,
            };
            let xobject_id = create_cropped_xobject(&mut output, source, page_id, crop, &mut cache)?;

            let mut xobjects = Dictionary::new();
            xobjects.set("P0", Object::Reference(xobject_id));
            let mut resources = Dictionary::new();
            resources.set("XObject", Object::Dictionary(xobjects));

            let ops = placement_op("P0", -strip.left, 0.0);
            let result_page =
                new_content_page(&mut output, strip.page_width, height, pages_id, ops, resources);
            kids.push(Object::Reference(result_page));
        }
    }

    assemble_catalog(&mut output, pages_id, kids);
    Ok(output)
}

pub async fn run(
    options: SplitOptions,
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
