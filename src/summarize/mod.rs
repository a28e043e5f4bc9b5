// src/summarize/mod.rs
//! Summarizer adapter — turns the extracted document into a short synopsis.
//!
//! The collaborator is consumed as a black box: text in, bullet-form
//! synopsis out. Every failure maps to `AppError::Summarization`, which the
//! pipeline treats as recoverable because the outline has already been
//! produced by the time this runs.

use crate::constants::{OPENAI_CHAT_COMPLETIONS_URL, SUMMARY_INSTRUCTION, SUMMARY_MODEL};
use crate::error::AppError;
use crate::types::SecretToken;
use serde::{Deserialize, Serialize};

/// The ability to summarize a document into a short synopsis.
#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, document: &str) -> Result<String, AppError>;
}

// --- OpenAI wire types ---

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Summarizes via the OpenAI chat completions API.
pub struct OpenAiSummarizer {
    client: reqwest::Client,
    api_key: SecretToken,
}

impl OpenAiSummarizer {
    pub fn new(api_key: SecretToken) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, document: &str) -> Result<String, AppError> {
        let request = ChatRequest {
            model: SUMMARY_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SUMMARY_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: document,
                },
            ],
        };

        log::debug!(
            "POST {} ({} chars of document text)",
            OPENAI_CHAT_COMPLETIONS_URL,
            document.len()
        );

        let response = self
            .client
            .post(OPENAI_CHAT_COMPLETIONS_URL)
            .bearer_auth(self.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Summarization(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Summarization(e.to_string()))?;

        if !status.is_success() {
            return Err(AppError::Summarization(format!(
                "summarizer returned HTTP {}: {}",
                status,
                preview(&body)
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::Summarization(format!("unparseable response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::Summarization("response contained no choices".to_string()))
    }
}

fn preview(body: &str) -> &str {
    let end = body
        .char_indices()
        .take_while(|(i, _)| *i < 200)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_expected_shape() {
        let request = ChatRequest {
            model: SUMMARY_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SUMMARY_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: "document body",
                },
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "document body");
    }

    #[test]
    fn chat_response_extracts_first_choice() {
        let body = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": "- point one\n- point two" } }
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.choices[0].message.content,
            "- point one\n- point two"
        );
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let long = "\u{1F4A1}".repeat(100);
        let cut = preview(&long);
        assert!(cut.len() <= 204);
        assert!(long.starts_with(cut));
    }
}
