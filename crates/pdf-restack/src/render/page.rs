//! Page construction and mutation
//!
//! Building blocks for result documents (pages, fonts, content operators,
//! page tree) plus the in-place edits used by pad and pagenum: inserting
//! blank pages into an existing page tree and appending draw operations to
//! an existing page.

use crate::types::{RestackError, Result, StandardFont};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::xobject::copy_object_deep;

// =============================================================================
// Reading the Page Tree
// =============================================================================

/// Source page object IDs in page order
pub fn source_page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

// =============================================================================
// Building Result Pages
// =============================================================================

/// Add a page with the given content stream and resources
pub fn new_content_page(
    output: &mut Document,
    width: f32,
    height: f32,
    parent: ObjectId,
    content: String,
    resources: Dictionary,
) -> ObjectId {
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent));
    page_dict.set("MediaBox", media_box(width, height));
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    output.add_object(page_dict)
}

/// Add a blank page (empty content stream, empty resources)
pub fn blank_page(output: &mut Document, width: f32, height: f32, parent: ObjectId) -> ObjectId {
    new_content_page(output, width, height, parent, String::new(), Dictionary::new())
}

/// Deep-copy a source page into the output document.
///
/// The whole page object graph (contents, resources, annotations) is copied
/// through the shared cache; only the Parent link is rewritten.
pub fn copy_page(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    parent: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?.clone();

    let mut new_dict = Dictionary::new();
    for (key, value) in page_dict.iter() {
        if key == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    new_dict.set("Parent", Object::Reference(parent));

    Ok(output.add_object(new_dict))
}

/// Create a Type1 font dictionary for one of the 14 standard fonts.
/// No font program is embedded; viewers supply these.
pub fn standard_font(doc: &mut Document, font: StandardFont) -> ObjectId {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(font.base_name().into()));
    doc.add_object(font_dict)
}

/// Content stream operators drawing `text` at (x, y)
pub fn text_op(font_name: &str, font_size: f32, x: f32, y: f32, text: &str) -> String {
    format!("BT /{font_name} {font_size} Tf {x} {y} Td ({text}) Tj ET\n")
}

/// Content stream operators placing an XObject translated to (x, y)
pub fn placement_op(xobject_name: &str, x: f32, y: f32) -> String {
    format!("q 1 0 0 1 {x} {y} cm /{xobject_name} Do Q\n")
}

/// Install the Pages tree and Catalog for a result document.
///
/// `pages_id` must have been reserved with `new_object_id` before the kids
/// were created, so their Parent references resolve.
pub fn assemble_catalog(output: &mut Document, pages_id: ObjectId, kids: Vec<Object>) {
    let count = kids.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}

// =============================================================================
// In-Place Page Tree Edits
// =============================================================================

/// Insert `count` blank pages of the given size at `index` into an existing
/// document's page tree. All inserted pages end up contiguous, in forward
/// order, starting at `index`.
pub fn insert_blank_pages(
    doc: &mut Document,
    index: usize,
    count: usize,
    size: (f32, f32),
) -> Result<()> {
    if count == 0 {
        return Ok(());
    }

    let pages_id = pages_root_id(doc)?;

    // Clone immediately to release the borrow on doc
    let kids = {
        let pages_dict = doc.get_dictionary(pages_id)?;
        match pages_dict.get(b"Kids") {
            Ok(Object::Array(arr)) => arr.clone(),
            _ => {
                return Err(RestackError::Config(
                    "Pages Kids array not found".to_string(),
                ));
            }
        }
    };

    let index = index.min(kids.len());
    let mut blanks = Vec::with_capacity(count);
    for _ in 0..count {
        let page_id = blank_page(doc, size.0, size.1, pages_id);
        blanks.push(Object::Reference(page_id));
    }

    let mut new_kids = Vec::with_capacity(kids.len() + count);
    new_kids.extend_from_slice(&kids[..index]);
    new_kids.extend(blanks);
    new_kids.extend_from_slice(&kids[index..]);

    let page_count = new_kids.len() as i64;
    let mut updated = doc.get_dictionary(pages_id)?.clone();
    updated.set("Count", Object::Integer(page_count));
    updated.set("Kids", Object::Array(new_kids));
    doc.objects.insert(pages_id, Object::Dictionary(updated));

    Ok(())
}

/// Append drawing operations to an existing page as an extra content stream.
pub fn append_page_content(doc: &mut Document, page_id: ObjectId, ops: String) -> Result<()> {
    let mut contents = {
        let page_dict = doc.get_dictionary(page_id)?;
        match page_dict.get(b"Contents") {
            Ok(Object::Reference(id)) => vec![Object::Reference(*id)],
            Ok(Object::Array(arr)) => arr.clone(),
            _ => Vec::new(),
        }
    };

    let stream_id = doc.add_object(Stream::new(Dictionary::new(), ops.into_bytes()));
    contents.push(Object::Reference(stream_id));

    let mut updated = doc.get_dictionary(page_id)?.clone();
    updated.set("Contents", Object::Array(contents));
    doc.objects.insert(page_id, Object::Dictionary(updated));

    Ok(())
}

/// Make sure the page's Resources dictionary maps `font_name` to `font_id`.
///
/// Shared (referenced) Resources dictionaries are inlined on this page
/// before editing, so sibling pages are not affected.
pub fn ensure_font_resource(
    doc: &mut Document,
    page_id: ObjectId,
    font_name: &str,
    font_id: ObjectId,
) -> Result<()> {
    let mut resources = {
        let page_dict = doc.get_dictionary(page_id)?;
        match page_dict.get(b"Resources") {
            Ok(Object::Reference(id)) => doc.get_dictionary(*id)?.clone(),
            Ok(Object::Dictionary(dict)) => dict.clone(),
            _ => Dictionary::new(),
        }
    };

    let mut fonts = match resources.get(b"Font") {
        Ok(Object::Dictionary(dict)) => dict.clone(),
        Ok(Object::Reference(id)) => doc.get_dictionary(*id)?.clone(),
        _ => Dictionary::new(),
    };
    fonts.set(font_name, Object::Reference(font_id));
    resources.set("Font", Object::Dictionary(fonts));

    let mut updated = doc.get_dictionary(page_id)?.clone();
    updated.set("Resources", Object::Dictionary(resources));
    doc.objects.insert(page_id, Object::Dictionary(updated));

    Ok(())
}

fn pages_root_id(doc: &Document) -> Result<ObjectId> {
    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let catalog = doc.get_dictionary(catalog_id)?;
    Ok(catalog.get(b"Pages")?.as_reference()?)
}

fn media_box(width: f32, height: f32) -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(width),
        Object::Real(height),
    ])
}
