// src/lib.rs
//! notion-digest library — fetches a Notion page's block tree and derives
//! an indented outline plus an AI-generated synopsis.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `PipelineConfig`
//! - **Domain model** — `Block`, `BlockTree`, rich text types
//! - **Domain types** — `PageRef`, `SecretToken`
//! - **API client** — `ChildLister`, `NotionHttpClient`, `TreeFetcher`
//! - **Formatting** — `render_outline`, `extract_text`
//! - **Summarization** — `Summarizer`, `OpenAiSummarizer`

mod api;
pub mod config;
mod constants;
mod error;
mod formatting;
mod model;
mod output;
mod pipeline;
mod summarize;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, PipelineConfig};

// --- Domain Model ---
pub use crate::model::{
    blocks, plain_text, Annotations, Block, BlockCommon, BlockTree, RichTextItem,
};

// --- Domain Types ---
pub use crate::types::{PageRef, SecretToken};

// --- API Client ---
pub use crate::api::{BlockPage, ChildLister, NotionHttpClient, TreeFetcher};

// --- Formatting ---
pub use crate::formatting::{extract_text, render_outline};

// --- Summarization ---
pub use crate::summarize::{OpenAiSummarizer, Summarizer};

// --- Output ---
pub use crate::output::{compose_report, deliver, SynopsisOutcome};

// --- Pipeline Traits ---
pub use crate::pipeline::{ComposedDocument, ContentSource, OutlineComposer, SynopsisProvider};
