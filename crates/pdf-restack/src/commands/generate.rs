//! Generate a dummy document with numbered pages

use crate::constants::GENERATE_FONT_DIVISOR;
use crate::options::GenerateOptions;
use crate::render::{assemble_catalog, new_content_page, standard_font, text_op};
use crate::types::{Orientation, Result, StandardFont};
use lopdf::{Dictionary, Document, Object};
use std::path::Path;

use super::io::{save_document, write_output_or_stdout};

/// Build a fresh document with `pages` numbered pages.
///
/// Each page carries its 1-based number centered in large Helvetica-Bold;
/// the label size is the page width divided by 1.5, so a stack of generated
/// pages is easy to tell apart when testing reorderings.
pub fn build(options: &GenerateOptions) -> Result<Document> {
    options.validate()?;

    let (width, height) = match options.orientation {
        Orientation::Portrait => (options.width, options.height),
        Orientation::Landscape => (options.height, options.width),
    };

    let mut output = Document::with_version("1.7");
    let pages_id = output.new_object_id();
    let font_id = standard_font(&mut output, StandardFont::HelveticaBold);

    let mut kids = Vec::with_capacity(options.pages);
    for i in 0..options.pages {
        let text = (i + 1).to_string();
        let font_size = width / GENERATE_FONT_DIVISOR;
        let x = width / 2.0 - (font_size / 4.0) * text.len() as f32;
        let y = height / 2.0 - font_size / 4.0;

        let mut fonts = Dictionary::new();
        fonts.set("F1", Object::Reference(font_id));
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts));

        let ops = text_op("F1", font_size, x, y, &text);
        let page_id = new_content_page(&mut output, width, height, pages_id, ops, resources);
        kids.push(Object::Reference(page_id));
    }

    assemble_catalog(&mut output, pages_id, kids);
    Ok(output)
}

pub async fn run(options: GenerateOptions, output: Option<&Path>) -> Result<()> {
    let doc = tokio::task::spawn_blocking(move || build(&options)).await??;
    let bytes = save_document(doc).await?;
    write_output_or_stdout(bytes, output).await
}
