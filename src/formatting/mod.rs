// src/formatting/mod.rs
//! Deterministic conversions of a fetched block tree into text.
//!
//! Two walks over the same tree in the same depth-first order: `outline`
//! emits the indented structural rendering, `extract` emits the flattened
//! document fed to the summarizer.

mod extract;
mod outline;

pub use extract::extract_text;
pub use outline::render_outline;
