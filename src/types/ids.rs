use super::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatabaseMarker;

/// Type aliases for specific ID types
pub type PageId = Id<PageMarker>;
pub type BlockId = Id<BlockMarker>;
pub type DatabaseId = Id<DatabaseMarker>;

impl<T> Id<T> {
    /// Parse various Notion ID formats (dashed, undashed, notion.so URLs)
    /// into the canonical 32-character lowercase form.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_notion_id(input)?;
        Ok(Self {
            value: normalized,
            _phantom: PhantomData,
        })
    }

    /// Get the ID as a string reference (no dashes)
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the ID with dashes for API calls
    pub fn to_dashed(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            &self.value[0..8],
            &self.value[8..12],
            &self.value[12..16],
            &self.value[16..20],
            &self.value[20..32]
        )
    }

    /// Reinterprets the ID as another kind.
    ///
    /// Notion pages are also blocks, so a page id is a valid argument to the
    /// block endpoints.
    pub fn cast<U>(&self) -> Id<U> {
        Id {
            value: self.value.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Normalize various Notion ID formats into a consistent format
fn normalize_notion_id(input: &str) -> Result<String, ValidationError> {
    let cleaned = input.trim().trim_end_matches('/');

    if cleaned.is_empty() {
        return Err(ValidationError::InvalidId("ID cannot be empty".to_string()));
    }

    if let Ok(uuid) = Uuid::parse_str(cleaned) {
        return Ok(uuid.as_simple().to_string());
    }

    if cleaned.starts_with("http://") || cleaned.starts_with("https://") {
        return extract_id_from_url(cleaned);
    }

    Err(ValidationError::InvalidId(format!(
        "Could not parse Notion ID from: {}",
        input
    )))
}

/// Extract ID from Notion URL
fn extract_id_from_url(url: &str) -> Result<String, ValidationError> {
    lazy_static! {
        static ref ID_REGEX: Regex = Regex::new(
            r"(?:[/-])([a-fA-F0-9]{32}|[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12})(?:[/?#]|$)"
        ).expect("Failed to compile Notion ID regex - this is a bug in the code");
    }

    ID_REGEX
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().replace('-', "").to_lowercase())
        .ok_or_else(|| ValidationError::InvalidId(format!("No valid ID found in URL: {}", url)))
}
