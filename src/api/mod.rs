// src/api/mod.rs
//! Notion API interaction — the ability to list a block's children.
//!
//! The remote surface is a single operation: "list direct children of
//! block X", paginated. Business logic depends on the `ChildLister` trait,
//! never on HTTP details, which is what makes the traversal testable with
//! scripted fixtures.

pub mod client;
mod fetcher;
mod pagination;
pub mod parser;

use crate::error::AppError;
use crate::model::Block;
use crate::types::PageRef;

/// One page of a block's children, in API response order.
#[derive(Debug, Clone)]
pub struct BlockPage {
    pub results: Vec<Block>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// The ability to list the direct children of a block.
#[async_trait::async_trait]
pub trait ChildLister: Send + Sync {
    /// Fetches one page of `parent`'s children, starting at `cursor`
    /// (`None` for the first page).
    async fn list_children(
        &self,
        parent: &PageRef,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<BlockPage, AppError>;
}

pub use client::NotionHttpClient;
pub use fetcher::TreeFetcher;
pub use pagination::fetch_all_pages;
