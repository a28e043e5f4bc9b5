// src/types.rs
//! Domain-specific newtypes for type safety and validation.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid credential for {name}: {reason}")]
    InvalidCredential { name: &'static str, reason: String },
}

/// A reference to a Notion page or block, normalized for API calls.
///
/// Accepted forms:
/// - canonical hyphenated UUID (kept as-is, lowercased)
/// - unhyphenated 32-character hex (rehyphenated to `8-4-4-4-12`)
/// - a Notion URL with an embedded id (the id is extracted and normalized)
/// - anything else passes through unmodified — the API is left to reject it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageRef(String);

impl PageRef {
    /// Parses user input into an API-ready reference. Never fails: inputs
    /// that match no known shape are passed through unmodified.
    pub fn parse(input: &str) -> Self {
        let cleaned = input.trim().trim_end_matches('/');

        if let Ok(uuid) = Uuid::parse_str(cleaned) {
            return PageRef(uuid.as_hyphenated().to_string());
        }

        if cleaned.len() == 32 && cleaned.chars().all(|c| c.is_ascii_hexdigit()) {
            return PageRef(hyphenate(&cleaned.to_lowercase()));
        }

        if cleaned.contains("notion.so") || cleaned.contains("notion.site") {
            if let Some(id) = extract_id_from_url(cleaned) {
                return PageRef(hyphenate(&id.to_lowercase()));
            }
        }

        PageRef(cleaned.to_string())
    }

    /// Wraps an id that is already in API form (used when descending to
    /// child blocks, whose ids come back hyphenated from the API).
    pub fn from_api(id: impl Into<String>) -> Self {
        PageRef(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for PageRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(PageRef::from_api(value))
    }
}

/// Splits a bare 32-char hex id into the `8-4-4-4-12` UUID grouping.
fn hyphenate(id: &str) -> String {
    debug_assert_eq!(id.len(), 32);
    format!(
        "{}-{}-{}-{}-{}",
        &id[0..8],
        &id[8..12],
        &id[12..16],
        &id[16..20],
        &id[20..32]
    )
}

/// Extracts a 32-hex or hyphenated UUID id embedded in a Notion URL.
fn extract_id_from_url(url: &str) -> Option<String> {
    lazy_static! {
        static ref ID_REGEX: Regex = Regex::new(
            r"(?:[/-])([a-fA-F0-9]{32}|[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})(?:[/?#]|$)"
        )
        .expect("Notion ID regex must compile");
    }

    ID_REGEX
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().replace('-', ""))
}

/// An opaque secret value for an external collaborator.
///
/// Validation is intentionally shallow — only emptiness is rejected, since
/// the collaborators define their own key formats. The `Display` impl
/// redacts the value so secrets never leak through logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretToken {
    name: &'static str,
    value: String,
}

impl SecretToken {
    pub fn new(name: &'static str, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::InvalidCredential {
                name,
                reason: "value is empty".to_string(),
            });
        }
        Ok(Self { name, value })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=<redacted>", self.name)
    }
}
