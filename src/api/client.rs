// src/api/client.rs
//! HTTP client for the Notion API.
//!
//! A thin wrapper around reqwest that handles authentication and the four
//! requests the wiki makes. Calls are issued one at a time; there are no
//! retries and no timeouts beyond reqwest's defaults.

use super::parser;
use super::query::{database_search_body, DatabaseQuery};
use super::responses::RawPage;
use crate::constants::NOTION_VERSION;
use crate::error::AppError;
use crate::model::{ContentBlock, DatabaseSummary};
use crate::types::{ApiBaseUrl, ApiKey, BlockId, DatabaseId};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: ApiBaseUrl,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey, base_url: ApiBaseUrl) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint (path without base URL).
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = self.base_url.join(endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with a JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.base_url.join(endpoint);

        if endpoint.starts_with("databases/") {
            log::info!("POST DATABASE QUERY: {}", url);
            log::debug!(
                "   Query body: {}",
                serde_json::to_string(body).unwrap_or_else(|_| "Failed to serialize".to_string())
            );
        } else {
            log::debug!("POST {}", url);
        }

        let response = self.client.post(url).json(body).send().await?;
        log::debug!("{} -> {}", endpoint, response.status());
        Ok(response)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn retrieve_children(&self, block: &BlockId) -> Result<Vec<ContentBlock>, AppError> {
        let endpoint = format!("blocks/{}/children", block.to_dashed());
        let response = self.get(&endpoint).await?;
        parser::parse_block_children(extract_response_text(response).await?)
    }

    async fn retrieve_title(&self, block: &BlockId) -> Result<Option<String>, AppError> {
        let endpoint = format!("blocks/{}", block.to_dashed());
        let response = self.get(&endpoint).await?;
        parser::parse_block_title(extract_response_text(response).await?)
    }

    async fn search_databases(&self) -> Result<Vec<DatabaseSummary>, AppError> {
        let response = self.post("search", &database_search_body()).await?;
        parser::parse_database_search(extract_response_text(response).await?)
    }

    async fn query_database(
        &self,
        database: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<Vec<RawPage>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_dashed());
        let response = self.post(&endpoint, &query.to_body()).await?;
        parser::parse_database_query(extract_response_text(response).await?)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text along with status and URL.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
