// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many blocks the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips during recursive fetching.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Base URL for all Notion API requests.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// The Notion API version header value this client speaks.
pub const NOTION_API_VERSION: &str = "2022-06-28";

// ---------------------------------------------------------------------------
// Summarizer boundaries
// ---------------------------------------------------------------------------

/// OpenAI chat completions endpoint used by the summarizer adapter.
pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat model driving the synopsis.
pub const SUMMARY_MODEL: &str = "gpt-4";

/// The fixed instruction applied to the extracted document text.
pub const SUMMARY_INSTRUCTION: &str =
    "You are an expert at summarizing text. Condense the key points into 3-5 bullet points.";

// ---------------------------------------------------------------------------
// Formatting boundaries
// ---------------------------------------------------------------------------

/// Number of spaces per indentation level in the structural rendering.
pub const INDENT_SPACES: usize = 4;

/// Fallback icon for callouts without an emoji icon.
pub const CALLOUT_DEFAULT_ICON: &str = "\u{1F4A1}";

/// Separator printed between the outline and the synopsis.
pub const SUMMARY_SEPARATOR: &str = "=== AI Summary ===";

/// Estimated characters per block, used to pre-allocate output strings.
///
/// This is a performance hint, not a constraint. Over-estimating wastes
/// a little memory; under-estimating causes reallocation.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;
