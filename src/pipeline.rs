// src/pipeline.rs
//! Pipeline capability traits — the stages of the page-to-digest run.
//!
//! Each trait describes a single capability, enabling testing each stage
//! in isolation: fetch the tree, compose the two derived texts, provide
//! the synopsis.

use crate::error::AppError;
use crate::model::BlockTree;
use crate::types::PageRef;

/// Retrieves the full block tree under a root id.
#[async_trait::async_trait]
pub trait ContentSource {
    async fn fetch(&self, root: &PageRef) -> Result<BlockTree, AppError>;
}

/// The two derived representations of a fetched tree.
#[derive(Debug, Clone)]
pub struct ComposedDocument {
    /// Indented structural rendering for presentation.
    pub outline: String,
    /// Flattened text fed to the summarizer.
    pub digest_text: String,
}

/// Converts a tree into its derived text representations.
pub trait OutlineComposer {
    fn compose(&self, tree: &BlockTree) -> ComposedDocument;
}

/// Produces the synopsis for the flattened document.
#[async_trait::async_trait]
pub trait SynopsisProvider {
    async fn synopsis(&self, document: &str) -> Result<String, AppError>;
}
