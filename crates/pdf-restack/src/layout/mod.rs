//! Pure page-geometry engines
//!
//! Everything in this module is a synchronous, side-effect-free function of
//! page counts and dimensions. Command handlers turn these plans into lopdf
//! operations; nothing here touches a document.

pub mod chunk;
pub mod numbering;
pub mod order;
pub mod padding;
pub mod position;

pub use chunk::{MergedPage, PagePlacement, Strip, merge_layout, split_layout};
pub use numbering::{TextPlacement, numbering_plan};
pub use order::page_order;
pub use padding::pad_count;
pub use position::alternated;
