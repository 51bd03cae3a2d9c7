// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use std::fmt;
use url::Url;

/// API key for Notion API authentication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();

        if key.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        if !key.starts_with("secret_") && !key.starts_with("ntn_") {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key must start with 'secret_' or 'ntn_'".to_string(),
            });
        }

        if key.len() < 20 {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key is too short".to_string(),
            });
        }

        Ok(Self(key))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact API key in display
        let prefix: String = self.0.chars().take(10).collect();
        write!(f, "{}...", prefix)
    }
}

/// Base URL of the Notion REST API, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        let parsed = Url::parse(url).map_err(|e| ValidationError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: "Only HTTP and HTTPS URLs are supported".to_string(),
            });
        }

        Ok(Self(url.trim_end_matches('/').to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins an endpoint path (without leading slash) onto the base.
    pub fn join(&self, endpoint: &str) -> String {
        format!("{}/{}", self.0, endpoint.trim_start_matches('/'))
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Path under which the wiki view is served, e.g. `/` or `/notion`.
///
/// Every link the wiki emits is built from this so that the view stays
/// navigable wherever it is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPath(String);

impl MountPath {
    pub fn new(path: impl Into<String>) -> Result<Self, ValidationError> {
        let path = path.into();

        if !path.starts_with('/') {
            return Err(ValidationError::InvalidMountPath {
                path,
                reason: "mount path must start with '/'".to_string(),
            });
        }

        if path.contains(['?', '#', '"', '<', '>', ' ']) {
            return Err(ValidationError::InvalidMountPath {
                path,
                reason: "mount path must be a plain URL path".to_string(),
            });
        }

        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MountPath {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl fmt::Display for MountPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_validation() {
        assert!(ApiKey::new("secret_abcdefghijklmnopqrs").is_ok());
        assert!(ApiKey::new("ntn_abcdefghijklmnopqrs").is_ok());
        assert!(ApiKey::new("").is_err());
        assert!(ApiKey::new("invalid_key").is_err());
        assert!(ApiKey::new("secret_short").is_err());
    }

    #[test]
    fn test_api_key_display_is_redacted() {
        let key = ApiKey::new("secret_abcdefghijklmnopqrs").unwrap();
        assert_eq!(key.to_string(), "secret_abc...");

        let non_ascii = ApiKey::new("secret_abé0123456789xyz").unwrap();
        assert_eq!(non_ascii.to_string(), "secret_abé...");
    }

    #[test]
    fn test_api_base_url() {
        let base = ApiBaseUrl::parse("https://api.notion.com/v1/").unwrap();
        assert_eq!(base.as_str(), "https://api.notion.com/v1");
        assert_eq!(base.join("search"), "https://api.notion.com/v1/search");
        assert!(ApiBaseUrl::parse("ftp://example.com").is_err());
        assert!(ApiBaseUrl::parse("not a url").is_err());
    }

    #[test]
    fn test_mount_path() {
        assert_eq!(MountPath::new("/").unwrap().as_str(), "/");
        assert_eq!(MountPath::new("/notion/").unwrap().as_str(), "/notion");
        assert_eq!(MountPath::new("//").unwrap().as_str(), "/");
        assert!(MountPath::new("notion").is_err());
        assert!(MountPath::new("/wiki?x=1").is_err());
    }
}
