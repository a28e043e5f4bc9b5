// src/formatting/extract.rs
//! Flattened text extraction for summarization input.
//!
//! Walks the tree in the same depth-first order as the outline renderer,
//! but keeps only the plain text of text-bearing kinds, each followed by a
//! blank-line separator. Depth is not encoded — only linear document order
//! survives. Containers and media contribute nothing themselves, but their
//! children are still visited.

use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::model::{plain_text, BlockTree};
use crate::types::PageRef;

/// Extracts the flattened document text from the tree.
pub fn extract_text(tree: &BlockTree) -> String {
    let mut out = String::with_capacity(tree.node_count() * CHARS_PER_BLOCK_ESTIMATE / 2);
    extract_children(tree, tree.root(), &mut out);
    out
}

fn extract_children(tree: &BlockTree, parent: &PageRef, out: &mut String) {
    for block in tree.children_of(parent) {
        if let Some(runs) = block.text_runs() {
            // Empty text still gets the separator so block boundaries
            // survive into the flattened document.
            out.push_str(&plain_text(runs));
            out.push_str("\n\n");
        }
        if tree.contains(block.id()) {
            extract_children(tree, block.id(), out);
        }
    }
}
