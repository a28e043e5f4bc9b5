// src/model/block.rs
//! The closed sum type over Notion block kinds.
//!
//! Every kind the remote API can return is either a named variant or falls
//! into `Unsupported`, which keeps forward compatibility with server-side
//! additions: unrecognized kinds flow through the pipeline without crashing
//! and simply render nothing.

use super::blocks::*;
use super::rich_text::RichTextItem;
use crate::types::PageRef;
use serde::{Deserialize, Serialize};

/// Macro to reduce boilerplate in Block enum accessors.
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Toggle($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Callout($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Image($pattern) => $result,
            Block::Divider($pattern) => $result,
            Block::Table($pattern) => $result,
            Block::TableRow($pattern) => $result,
            Block::ColumnList($pattern) => $result,
            Block::Column($pattern) => $result,
            Block::Unsupported($pattern) => $result,
        }
    };
}

/// Block represents all modeled Notion block kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading1(Heading1Block),
    Heading2(Heading2Block),
    Heading3(Heading3Block),
    BulletedListItem(BulletedListItemBlock),
    NumberedListItem(NumberedListItemBlock),
    ToDo(ToDoBlock),
    Toggle(ToggleBlock),
    Quote(QuoteBlock),
    Callout(CalloutBlock),
    Code(CodeBlock),
    Image(ImageBlock),
    Divider(DividerBlock),
    Table(TableBlock),
    TableRow(TableRowBlock),
    ColumnList(ColumnListBlock),
    Column(ColumnBlock),
    Unsupported(UnsupportedBlock),
}

impl Block {
    /// Get the block's id.
    pub fn id(&self) -> &PageRef {
        match_all_blocks!(self, b => &b.common.id)
    }

    /// Whether the API reported that a children fetch should be attempted.
    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    /// Get common block data.
    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    /// The wire-format kind tag for this block.
    pub fn kind_name(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::ToDo(_) => "to_do",
            Block::Toggle(_) => "toggle",
            Block::Quote(_) => "quote",
            Block::Callout(_) => "callout",
            Block::Code(_) => "code",
            Block::Image(_) => "image",
            Block::Divider(_) => "divider",
            Block::Table(_) => "table",
            Block::TableRow(_) => "table_row",
            Block::ColumnList(_) => "column_list",
            Block::Column(_) => "column",
            Block::Unsupported(b) => &b.block_type,
        }
    }

    /// The text runs for kinds that carry a text payload, `None` otherwise.
    ///
    /// This is the single source of truth for which kinds count as
    /// text-bearing: the extractor and the renderer both dispatch on it.
    pub fn text_runs(&self) -> Option<&[RichTextItem]> {
        match self {
            Block::Paragraph(b) => Some(&b.content.rich_text),
            Block::Heading1(b) => Some(&b.content.rich_text),
            Block::Heading2(b) => Some(&b.content.rich_text),
            Block::Heading3(b) => Some(&b.content.rich_text),
            Block::BulletedListItem(b) => Some(&b.content.rich_text),
            Block::NumberedListItem(b) => Some(&b.content.rich_text),
            Block::ToDo(b) => Some(&b.content.rich_text),
            Block::Toggle(b) => Some(&b.content.rich_text),
            Block::Quote(b) => Some(&b.content.rich_text),
            Block::Callout(b) => Some(&b.content.rich_text),
            Block::Code(_)
            | Block::Image(_)
            | Block::Divider(_)
            | Block::Table(_)
            | Block::TableRow(_)
            | Block::ColumnList(_)
            | Block::Column(_)
            | Block::Unsupported(_) => None,
        }
    }
}
