// src/api/parser.rs
//! Parses Notion API children-listing responses into the domain model.
//!
//! The wire format is pivoted on a `type` tag: every block object carries
//! `id`, `has_children`, `type`, and a payload under the key named by the
//! tag. Kinds this client does not model become `Block::Unsupported` rather
//! than a parse failure, so server-side additions never break a run.

use super::client::ApiResponse;
use super::BlockPage;
use crate::error::{AppError, NotionErrorCode};
use crate::model::blocks::*;
use crate::model::{Block, RichTextItem};
use crate::types::PageRef;
use serde::Deserialize;
use serde_json::Value;

/// Paginated children-listing envelope.
#[derive(Debug, Deserialize)]
struct WireBlockList {
    results: Vec<Value>,
    #[serde(default)]
    next_cursor: Option<String>,
    #[serde(default)]
    has_more: bool,
}

/// Error envelope returned by the Notion API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct WireError {
    code: String,
    message: String,
}

/// Payload shared by the text-bearing block kinds.
#[derive(Debug, Deserialize)]
struct WireTextPayload {
    #[serde(default)]
    rich_text: Vec<RichTextItem>,
}

#[derive(Debug, Deserialize)]
struct WireToDoPayload {
    #[serde(default)]
    rich_text: Vec<RichTextItem>,
    #[serde(default)]
    checked: bool,
}

#[derive(Debug, Deserialize)]
struct WireCalloutPayload {
    #[serde(default)]
    rich_text: Vec<RichTextItem>,
    #[serde(default)]
    icon: Option<Icon>,
}

#[derive(Debug, Deserialize)]
struct WireCodePayload {
    #[serde(default)]
    rich_text: Vec<RichTextItem>,
    #[serde(default)]
    language: String,
}

#[derive(Debug, Deserialize)]
struct WireTablePayload {
    #[serde(default)]
    table_width: usize,
}

#[derive(Debug, Deserialize)]
struct WireTableRowPayload {
    #[serde(default)]
    cells: Vec<Vec<RichTextItem>>,
}

/// Parses one page of a children listing, mapping API errors to the typed
/// error vocabulary.
pub fn parse_children_page(response: ApiResponse) -> Result<BlockPage, AppError> {
    if !response.status.is_success() {
        return Err(parse_error_response(&response));
    }

    let envelope: WireBlockList = serde_json::from_str(&response.data).map_err(|e| {
        log::error!("Failed to parse children listing from {}: {}", response.url, e);
        AppError::MalformedResponse(e.to_string())
    })?;

    let results = envelope
        .results
        .iter()
        .map(block_from_value)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BlockPage {
        results,
        has_more: envelope.has_more,
        next_cursor: envelope.next_cursor,
    })
}

/// Maps a non-2xx response to `NotionService`, falling back to the bare
/// HTTP status when the error body is unparseable.
fn parse_error_response(response: &ApiResponse) -> AppError {
    if let Ok(wire) = serde_json::from_str::<WireError>(&response.data) {
        return AppError::NotionService {
            code: NotionErrorCode::from_api_response(&wire.code),
            message: wire.message,
            status: response.status,
        };
    }

    AppError::NotionService {
        code: NotionErrorCode::from_http_status(response.status.as_u16()),
        message: format!("HTTP {} from {}", response.status, response.url),
        status: response.status,
    }
}

/// Converts one wire block object into the domain sum type.
pub fn block_from_value(value: &Value) -> Result<Block, AppError> {
    let id = value
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::MalformedResponse("block is missing 'id'".to_string()))?;
    let has_children = value
        .get("has_children")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::MalformedResponse("block is missing 'type'".to_string()))?;

    let common = BlockCommon {
        id: PageRef::from_api(id),
        has_children,
    };

    // The payload lives under the key named by the type tag. A missing
    // payload is treated as an empty object so defaulted fields apply.
    let payload = value
        .get(kind)
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()));

    let block = match kind {
        "paragraph" => Block::Paragraph(ParagraphBlock {
            common,
            content: text_content(payload)?,
        }),
        "heading_1" => Block::Heading1(Heading1Block {
            common,
            content: text_content(payload)?,
        }),
        "heading_2" => Block::Heading2(Heading2Block {
            common,
            content: text_content(payload)?,
        }),
        "heading_3" => Block::Heading3(Heading3Block {
            common,
            content: text_content(payload)?,
        }),
        "bulleted_list_item" => Block::BulletedListItem(BulletedListItemBlock {
            common,
            content: text_content(payload)?,
        }),
        "numbered_list_item" => Block::NumberedListItem(NumberedListItemBlock {
            common,
            content: text_content(payload)?,
        }),
        "to_do" => {
            let todo: WireToDoPayload = from_payload(payload)?;
            Block::ToDo(ToDoBlock {
                common,
                content: TextBlockContent {
                    rich_text: todo.rich_text,
                },
                checked: todo.checked,
            })
        }
        "toggle" => Block::Toggle(ToggleBlock {
            common,
            content: text_content(payload)?,
        }),
        "quote" => Block::Quote(QuoteBlock {
            common,
            content: text_content(payload)?,
        }),
        "callout" => {
            let callout: WireCalloutPayload = from_payload(payload)?;
            Block::Callout(CalloutBlock {
                common,
                icon: callout.icon,
                content: TextBlockContent {
                    rich_text: callout.rich_text,
                },
            })
        }
        "code" => {
            let code: WireCodePayload = from_payload(payload)?;
            Block::Code(CodeBlock {
                common,
                language: code.language,
                content: TextBlockContent {
                    rich_text: code.rich_text,
                },
            })
        }
        "image" => {
            let image: FileObject = from_payload(payload)?;
            Block::Image(ImageBlock { common, image })
        }
        "divider" => Block::Divider(DividerBlock { common }),
        "table" => {
            let table: WireTablePayload = from_payload(payload)?;
            Block::Table(TableBlock {
                common,
                table_width: table.table_width,
            })
        }
        "table_row" => {
            let row: WireTableRowPayload = from_payload(payload)?;
            Block::TableRow(TableRowBlock {
                common,
                cells: row.cells,
            })
        }
        "column_list" => Block::ColumnList(ColumnListBlock { common }),
        "column" => Block::Column(ColumnBlock { common }),
        other => Block::Unsupported(UnsupportedBlock {
            common,
            block_type: other.to_string(),
        }),
    };

    Ok(block)
}

fn text_content(payload: Value) -> Result<TextBlockContent, AppError> {
    let wire: WireTextPayload = from_payload(payload)?;
    Ok(TextBlockContent {
        rich_text: wire.rich_text,
    })
}

fn from_payload<T: serde::de::DeserializeOwned>(payload: Value) -> Result<T, AppError> {
    serde_json::from_value(payload).map_err(|e| AppError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::plain_text;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_paragraph_with_rich_text() {
        let value = json!({
            "object": "block",
            "id": "b1",
            "has_children": false,
            "type": "paragraph",
            "paragraph": {
                "rich_text": [
                    { "plain_text": "Hello ", "annotations": { "bold": false } },
                    { "plain_text": "world", "annotations": { "bold": true } }
                ]
            }
        });

        let block = block_from_value(&value).unwrap();
        match &block {
            Block::Paragraph(p) => assert_eq!(plain_text(&p.content.rich_text), "Hello world"),
            other => panic!("expected paragraph, got {}", other.kind_name()),
        }
        assert!(!block.has_children());
    }

    #[test]
    fn parses_todo_checked_flag() {
        let value = json!({
            "id": "b2",
            "type": "to_do",
            "to_do": { "rich_text": [{ "plain_text": "task" }], "checked": true }
        });
        match block_from_value(&value).unwrap() {
            Block::ToDo(todo) => assert!(todo.checked),
            other => panic!("expected to_do, got {}", other.kind_name()),
        }
    }

    #[test]
    fn parses_external_and_hosted_images() {
        let external = json!({
            "id": "b3",
            "type": "image",
            "image": { "type": "external", "external": { "url": "https://img.example/cat.png" } }
        });
        match block_from_value(&external).unwrap() {
            Block::Image(img) => assert_eq!(img.image.url(), "https://img.example/cat.png"),
            other => panic!("expected image, got {}", other.kind_name()),
        }

        let hosted = json!({
            "id": "b4",
            "type": "image",
            "image": { "type": "file", "file": { "url": "https://files.notion.so/x.png", "expiry_time": null } }
        });
        match block_from_value(&hosted).unwrap() {
            Block::Image(img) => assert_eq!(img.image.url(), "https://files.notion.so/x.png"),
            other => panic!("expected image, got {}", other.kind_name()),
        }
    }

    #[test]
    fn parses_table_row_cells() {
        let value = json!({
            "id": "b5",
            "type": "table_row",
            "table_row": { "cells": [
                [{ "plain_text": "a" }],
                [{ "plain_text": "b1" }, { "plain_text": "b2" }]
            ]}
        });
        match block_from_value(&value).unwrap() {
            Block::TableRow(row) => {
                assert_eq!(row.cells.len(), 2);
                assert_eq!(plain_text(&row.cells[1]), "b1b2");
            }
            other => panic!("expected table_row, got {}", other.kind_name()),
        }
    }

    #[test]
    fn unknown_kind_becomes_unsupported() {
        let value = json!({ "id": "b6", "type": "synced_block", "synced_block": {} });
        match block_from_value(&value).unwrap() {
            Block::Unsupported(b) => assert_eq!(b.block_type, "synced_block"),
            other => panic!("expected unsupported, got {}", other.kind_name()),
        }
    }

    fn api_response(status: u16, body: serde_json::Value) -> ApiResponse {
        ApiResponse {
            data: body.to_string(),
            status: reqwest::StatusCode::from_u16(status).unwrap(),
            url: "https://api.notion.com/v1/blocks/x/children".to_string(),
        }
    }

    #[test]
    fn parses_paginated_envelope() {
        let response = api_response(
            200,
            json!({
                "object": "list",
                "results": [
                    { "id": "b1", "type": "divider", "divider": {} }
                ],
                "next_cursor": "cursor-token",
                "has_more": true
            }),
        );
        let page = parse_children_page(response).unwrap();
        assert_eq!(page.results.len(), 1);
        assert!(page.has_more);
        assert_eq!(page.next_cursor.as_deref(), Some("cursor-token"));
    }

    #[test]
    fn error_envelope_maps_to_typed_code() {
        let response = api_response(
            429,
            json!({
                "object": "error",
                "status": 429,
                "code": "rate_limited",
                "message": "Rate limited, slow down."
            }),
        );
        match parse_children_page(response) {
            Err(AppError::NotionService { code, message, status }) => {
                assert_eq!(code, NotionErrorCode::RateLimited);
                assert_eq!(message, "Rate limited, slow down.");
                assert_eq!(status.as_u16(), 429);
            }
            other => panic!("expected NotionService error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_error_body_falls_back_to_http_status() {
        let mut response = api_response(502, json!({}));
        response.data = "<html>Bad Gateway</html>".to_string();
        match parse_children_page(response) {
            Err(AppError::NotionService { code, .. }) => {
                assert_eq!(code, NotionErrorCode::HttpStatus(502));
            }
            other => panic!("expected NotionService error, got {other:?}"),
        }
    }

    #[test]
    fn missing_id_is_malformed() {
        let value = json!({ "type": "divider", "divider": {} });
        assert!(matches!(
            block_from_value(&value),
            Err(AppError::MalformedResponse(_))
        ));
    }
}
