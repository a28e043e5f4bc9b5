// src/api/client.rs
//! Pure HTTP client wrapper for the Notion API.
//!
//! A thin wrapper around reqwest that handles authentication headers and
//! the children-listing endpoint. Parsing lives in `parser`, traversal
//! logic in `fetcher`.

use crate::constants::{NOTION_API_BASE_URL, NOTION_API_VERSION};
use crate::error::AppError;
use crate::types::{PageRef, SecretToken};
use reqwest::{header, Client, Response};

/// A thin wrapper around a reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(token: &SecretToken) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(token)?)
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(token: &SecretToken) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", token.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint path (without base URL).
    async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = format!("{}/{}", NOTION_API_BASE_URL, endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }
}

#[async_trait::async_trait]
impl super::ChildLister for NotionHttpClient {
    async fn list_children(
        &self,
        parent: &PageRef,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<super::BlockPage, AppError> {
        let mut endpoint = format!("blocks/{}/children?page_size={}", parent, page_size);
        if let Some(cursor) = cursor {
            endpoint.push_str("&start_cursor=");
            endpoint.push_str(&cursor);
        }

        let response = self.get(&endpoint).await?;
        let body = extract_response_text(response).await?;
        super::parser::parse_children_page(body)
    }
}

/// Response body text plus the metadata the parser needs.
#[derive(Debug)]
pub struct ApiResponse {
    pub data: String,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with status and URL metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
