// src/model/blocks.rs
//! Per-kind payload structs for the block sum type.

use super::rich_text::RichTextItem;
use crate::types::PageRef;
use serde::{Deserialize, Serialize};

/// Fields shared by every block kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: PageRef,
    pub has_children: bool,
}

impl BlockCommon {
    pub fn new(id: PageRef) -> Self {
        Self {
            id,
            has_children: false,
        }
    }

    pub fn with_children(id: PageRef) -> Self {
        Self {
            id,
            has_children: true,
        }
    }
}

/// Text content shared by the text-bearing block kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
}

/// Paragraph block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 1 block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading1Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 2 block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading2Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Heading 3 block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading3Block {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Bulleted list item block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Numbered list item block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// To-do block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
    pub checked: bool,
}

/// Toggle (collapsible section) block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Quote block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// Callout block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutBlock {
    pub common: BlockCommon,
    pub icon: Option<Icon>,
    pub content: TextBlockContent,
}

/// Icon types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Icon {
    #[serde(rename = "emoji")]
    Emoji { emoji: String },
    #[serde(rename = "external")]
    External { external: ExternalFile },
    #[serde(rename = "file")]
    File { file: HostedFile },
}

/// Code block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub common: BlockCommon,
    pub language: String,
    pub content: TextBlockContent,
}

/// Image block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    pub common: BlockCommon,
    pub image: FileObject,
}

/// Divider block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerBlock {
    pub common: BlockCommon,
}

/// Table block — visual structure only, rows carry the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    pub common: BlockCommon,
    pub table_width: usize,
}

/// Table row block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRowBlock {
    pub common: BlockCommon,
    pub cells: Vec<Vec<RichTextItem>>,
}

/// Column list block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnListBlock {
    pub common: BlockCommon,
}

/// Column block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnBlock {
    pub common: BlockCommon,
}

/// Fallback for block kinds this client does not model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsupportedBlock {
    pub common: BlockCommon,
    pub block_type: String,
}

/// File object types — external link or Notion-hosted upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FileObject {
    #[serde(rename = "external")]
    External { external: ExternalFile },
    #[serde(rename = "file")]
    Hosted { file: HostedFile },
}

impl FileObject {
    /// The URL to render, regardless of hosting.
    pub fn url(&self) -> &str {
        match self {
            FileObject::External { external } => &external.url,
            FileObject::Hosted { file } => &file.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
    pub expiry_time: Option<chrono::DateTime<chrono::Utc>>,
}
