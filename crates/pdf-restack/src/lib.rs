pub mod commands;
pub mod constants;
pub mod expr;
pub mod layout;
mod options;
pub mod render;
mod types;

pub use options::*;
pub use types::*;
