//! Command handlers
//!
//! One handler per transformation. Each exposes a synchronous core
//! (`apply`/`build`) that maps a source document to a result using the pure
//! engines in [`crate::layout`], plus an async `run` wrapper that moves
//! bytes between files (or stdio) and the lopdf parser. Per-page and
//! per-chunk plans are computed independently, then replayed strictly in
//! source order, so the result page sequence is deterministic. A failure at
//! any page aborts the whole command; no output bytes are written unless
//! the entire transformation succeeded.

pub mod generate;
pub mod io;
pub mod merge;
pub mod pad;
pub mod pagenum;
pub mod reorder;
pub mod split;
