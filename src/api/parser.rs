// src/api/parser.rs
//! Turns HTTP response bodies into raw shapes or domain values.

use super::adapter::convert_blocks;
use super::client::ApiResponse;
use super::responses::{
    BlockChildrenResponse, DatabaseQueryResponse, DatabaseSearchResponse, RawBlock, RawPage,
};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::flatten::flatten_database;
use crate::model::{ContentBlock, DatabaseSummary};
use reqwest::StatusCode;

/// Parse any Notion API response, mapping non-success statuses to errors.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

/// Decodes a Notion error object, falling back to the bare HTTP status.
fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    match serde_json::from_str::<notion_client::objects::error::Error>(body) {
        Ok(notion_error) => notion_error.into(),
        Err(_) => AppError::NotionService {
            code: NotionErrorCode::from_http_status(status.as_u16()),
            message: format!("HTTP {} from {}", status, url),
            status,
        },
    }
}

fn preview(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// `GET /blocks/{id}/children` → content blocks.
pub fn parse_block_children(result: ApiResponse<String>) -> Result<Vec<ContentBlock>, AppError> {
    let response: BlockChildrenResponse = parse_api_response(result)?;
    Ok(convert_blocks(&response.results))
}

/// `GET /blocks/{id}` → the child-page title, if the block is a page.
pub fn parse_block_title(result: ApiResponse<String>) -> Result<Option<String>, AppError> {
    let block: RawBlock = parse_api_response(result)?;
    let title = block
        .rest
        .get("child_page")
        .and_then(|child| child.get("title"))
        .and_then(|title| title.as_str())
        .map(str::to_string);
    Ok(title)
}

/// `POST /search` → database summaries, in the order Notion returned them.
pub fn parse_database_search(
    result: ApiResponse<String>,
) -> Result<Vec<DatabaseSummary>, AppError> {
    let response: DatabaseSearchResponse = parse_api_response(result)?;
    Ok(response.results.iter().map(flatten_database).collect())
}

/// `POST /databases/{id}/query` → raw page records.
pub fn parse_database_query(result: ApiResponse<String>) -> Result<Vec<RawPage>, AppError> {
    let response: DatabaseQueryResponse = parse_api_response(result)?;
    if response.has_more {
        log::debug!(
            "Database query returned more than one page of results; only the first {} are used",
            response.results.len()
        );
    }
    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(body: &str) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status: StatusCode::OK,
            url: "test_url".to_string(),
        }
    }

    #[test]
    fn test_error_parsing_with_notion_error_object() {
        let error_json = r#"{
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find block with ID: abc123",
            "request_id": "req_123"
        }"#;

        let result = parse_block_children(ApiResponse {
            data: error_json.to_string(),
            status: StatusCode::NOT_FOUND,
            url: "test_url".to_string(),
        });

        match result {
            Err(AppError::NotionService { code, status, .. }) => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("Expected NotionService error, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_error_body_falls_back_to_status() {
        let result = parse_block_children(ApiResponse {
            data: "<html>bad gateway</html>".to_string(),
            status: StatusCode::BAD_GATEWAY,
            url: "test_url".to_string(),
        });
        assert!(matches!(
            result,
            Err(AppError::NotionService {
                code: NotionErrorCode::HttpStatus(502),
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let result = parse_block_children(ok("{ not json"));
        assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn test_block_children() {
        let blocks = parse_block_children(ok(r#"{
            "object": "list",
            "results": [
                {"id": "a", "type": "divider", "divider": {}},
                {"id": "b", "type": "embed", "embed": {"url": "https://example.com"}}
            ],
            "next_cursor": null,
            "has_more": false
        }"#))
        .unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], ContentBlock::Divider);
        assert_eq!(blocks[1].block_type(), "embed");
    }

    #[test]
    fn test_malformed_block_becomes_placeholder() {
        let blocks = parse_block_children(ok(r#"{
            "object": "list",
            "results": [
                {"id": "a", "type": "paragraph", "paragraph": {
                    "rich_text": [{"plain_text": "keep"}, null]
                }},
                null
            ]
        }"#))
        .unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            crate::formatting::render_block(&blocks[0]),
            "<p class=\"wiki-paragraph\">keep</p>"
        );
        assert_eq!(
            crate::formatting::render_block(&blocks[1]),
            "<div class=\"wiki-unsupported\">Unsupported block type: (missing type)</div>"
        );
    }

    #[test]
    fn test_block_title() {
        let title = parse_block_title(ok(
            r#"{"id": "p", "type": "child_page", "child_page": {"title": "Getting started"}}"#,
        ))
        .unwrap();
        assert_eq!(title.as_deref(), Some("Getting started"));

        let title = parse_block_title(ok(r#"{"id": "p", "type": "paragraph"}"#)).unwrap();
        assert_eq!(title, None);
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let body = "가".repeat(ERROR_BODY_PREVIEW_LENGTH + 5);
        let shown = preview(&body);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), ERROR_BODY_PREVIEW_LENGTH + 3);
    }
}
