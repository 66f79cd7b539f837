//! Form XObject creation
//!
//! Source pages become Form XObjects in the result document so they can be
//! placed with a transformation matrix: whole pages for merge, cropped
//! regions for split. Object-graph copies are cached so shared resources
//! are not duplicated.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// A crop rectangle on a source page, in that page's coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropBox {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

// =============================================================================
// XObject Creation
// =============================================================================

/// Create an XObject showing a full source page (BBox = the page's MediaBox).
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page_id` - The object ID of the source page
/// * `cache` - Cache to avoid copying the same object multiple times
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;
    let media_box = page_dict
        .get(b"MediaBox")
        .and_then(|obj| obj.as_array())
        .ok()
        .cloned()
        .unwrap_or_else(default_media_box);

    build_xobject(output, source, page_dict, media_box, cache)
}

/// Create an XObject showing only `crop` of the source page.
///
/// The BBox clips content to the crop rectangle; the caller translates the
/// placement by `-crop.left` / `-crop.bottom` to land the region at the
/// result page origin.
pub fn create_cropped_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    crop: CropBox,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;
    let bbox = vec![
        Object::Real(crop.left),
        Object::Real(crop.bottom),
        Object::Real(crop.right),
        Object::Real(crop.top),
    ];

    build_xobject(output, source, page_dict, bbox, cache)
}

fn build_xobject(
    output: &mut Document,
    source: &Document,
    page_dict: &Dictionary,
    bbox: Vec<Object>,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", Object::Array(bbox));
    xobject_dict.set("FormType", Object::Integer(1));

    if let Ok(resources) = page_dict.get(b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

/// Default MediaBox (A4)
fn default_media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(DEFAULT_PAGE_DIMENSIONS.0),
        Object::Real(DEFAULT_PAGE_DIMENSIONS.1),
    ]
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
pub(crate) fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => get_single_content_stream(doc, *id),
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    if let Ok(stream) = doc.get_object(id)?.as_stream() {
        Ok(stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone()))
    } else {
        Ok(Vec::new())
    }
}

fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Ok(stream) = doc.get_object(*id)?.as_stream() {
                let content = stream
                    .decompressed_content()
                    .unwrap_or_else(|_| stream.content.clone());
                result.extend_from_slice(&content);
                result.push(b'\n');
            }
        }
    }

    Ok(result)
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            // Check cache first
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Get and copy the referenced object
            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;

            // Add to output and cache
            let new_id = output.add_object(copied);
            cache.insert(*id, new_id);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

// =============================================================================
// Page Dimensions
// =============================================================================

/// Get source page dimensions (width, height) in points
pub fn page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    let page_dict = doc.get_dictionary(page_id)?;

    match page_dict.get(b"MediaBox").and_then(|obj| obj.as_array()) {
        Ok(mb) if mb.len() >= 4 => {
            let llx = extract_number(&mb[0]).unwrap_or(0.0);
            let lly = extract_number(&mb[1]).unwrap_or(0.0);
            let urx = extract_number(&mb[2]).unwrap_or(DEFAULT_PAGE_DIMENSIONS.0);
            let ury = extract_number(&mb[3]).unwrap_or(DEFAULT_PAGE_DIMENSIONS.1);
            Ok((urx - llx, ury - lly))
        }
        _ => Ok(DEFAULT_PAGE_DIMENSIONS),
    }
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
