// src/api/pagination.rs
//! Cursor-driven pagination over the children-listing operation.

use super::ChildLister;
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;
use crate::model::Block;
use crate::types::PageRef;

/// Fetches every page of `parent`'s children and concatenates the results
/// in response order. Stops when the server reports no more pages. Any
/// page failure aborts the whole operation.
pub async fn fetch_all_pages<L>(lister: &L, parent: &PageRef) -> Result<Vec<Block>, AppError>
where
    L: ChildLister + ?Sized,
{
    fetch_all_pages_sized(lister, parent, NOTION_API_PAGE_SIZE).await
}

/// Same as [`fetch_all_pages`] with an explicit page size. Sibling order
/// must come out identical for any page size; tests rely on this entry
/// point to check that property.
pub async fn fetch_all_pages_sized<L>(
    lister: &L,
    parent: &PageRef,
    page_size: u32,
) -> Result<Vec<Block>, AppError>
where
    L: ChildLister + ?Sized,
{
    let mut all_blocks = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        let page = lister.list_children(parent, page_size, cursor).await?;

        let has_more = page.has_more;
        cursor = page.next_cursor;
        all_blocks.extend(page.results);
        pages_fetched += 1;

        if !has_more || cursor.is_none() {
            break;
        }
    }

    log::debug!(
        "Fetched {} children of {} across {} page(s)",
        all_blocks.len(),
        parent,
        pages_fetched
    );

    Ok(all_blocks)
}
