// src/error.rs
//! Application error types.
//!
//! Each variant tells what went wrong and where. The view layer turns every
//! one of them into visible inline text, so nothing here is fatal except a
//! missing configuration at startup.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is not shared with the integration
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    /// Request body contains invalid JSON
    InvalidJson,
    /// Request parameters failed Notion's validation
    ValidationFailed,
    /// Notion internal server error
    InternalError,
    /// Notion is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "validation_error" => Self::ValidationFailed,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound | Self::HttpStatus(404))
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API returned an error ({code}): {message}")]
    NotionService {
        code: NotionErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<notion_client::objects::error::Error> for AppError {
    fn from(err: notion_client::objects::error::Error) -> Self {
        let status = u16::try_from(err.status)
            .ok()
            .and_then(|code| reqwest::StatusCode::from_u16(code).ok())
            .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR);

        AppError::NotionService {
            code: NotionErrorCode::from_api_response(&err.code),
            message: err.message,
            status,
        }
    }
}

impl AppError {
    /// Whether the Notion API reported the requested object as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotionService { code, .. } if code.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_vocabulary() {
        assert_eq!(
            NotionErrorCode::from_api_response("object_not_found"),
            NotionErrorCode::ObjectNotFound
        );
        assert_eq!(
            NotionErrorCode::from_api_response("brand_new_code"),
            NotionErrorCode::Unknown("brand_new_code".to_string())
        );
        assert!(NotionErrorCode::from_http_status(404).is_not_found());
        assert_eq!(NotionErrorCode::from_http_status(502).to_string(), "http_502");
    }

    #[test]
    fn test_service_error_display() {
        let err = AppError::NotionService {
            code: NotionErrorCode::Unauthorized,
            message: "API token is invalid.".to_string(),
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        assert_eq!(
            err.to_string(),
            "Notion API returned an error (unauthorized): API token is invalid."
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_rejected_id_is_a_validation_error() {
        let err: AppError = crate::types::PageId::parse("not-an-id").unwrap_err().into();
        assert!(matches!(
            err,
            AppError::Validation(crate::types::ValidationError::InvalidId(_))
        ));
    }
}
