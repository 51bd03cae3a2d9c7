// src/server/http_error.rs
//! Failures that prevent a complete document from being produced.
//!
//! Outbound API failures never end up here: views render them inline.

use crate::error::AppError;
use crate::formatting::escape_html;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = format!(
            "<!DOCTYPE html><html><body><p class=\"wiki-error\">Error: {}</p></body></html>",
            escape_html(&self.message)
        );
        (self.status, Html(body)).into_response()
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        log::error!("Failed to render document: {}", err);
        HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}
