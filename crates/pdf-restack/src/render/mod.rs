//! lopdf-backed document model
//!
//! The engines in [`crate::layout`] compute pure plans; this module supplies
//! the operations the command handlers replay them against: Form XObjects
//! (whole-page and cropped), deep object copies, blank pages, standard
//! fonts, content-stream operators, and page-tree assembly.

pub mod page;
pub mod xobject;

pub use page::{
    append_page_content, assemble_catalog, blank_page, copy_page, ensure_font_resource,
    insert_blank_pages, new_content_page, placement_op, source_page_ids, standard_font, text_op,
};
pub use xobject::{
    CropBox, copy_object_deep, create_cropped_xobject, create_page_xobject, page_dimensions,
};
