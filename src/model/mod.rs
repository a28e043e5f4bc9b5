// src/model/mod.rs
//! Domain model: the block sum type, its payloads, and the fetched tree.

mod block;
pub mod blocks;
pub mod rich_text;
mod tree;

pub use block::Block;
pub use blocks::{
    BlockCommon, BulletedListItemBlock, CalloutBlock, CodeBlock, ColumnBlock, ColumnListBlock,
    DividerBlock, ExternalFile, FileObject, Heading1Block, Heading2Block, Heading3Block,
    HostedFile, Icon, ImageBlock, NumberedListItemBlock, ParagraphBlock, QuoteBlock, TableBlock,
    TableRowBlock, TextBlockContent, ToDoBlock, ToggleBlock, UnsupportedBlock,
};
pub use rich_text::{plain_text, Annotations, RichTextItem};
pub use tree::BlockTree;
