use crate::constants::GLYPH_ICON_MAX_LEN;
use chrono::NaiveDate;
use serde::Serialize;

/// A page or database icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PageIcon {
    /// A short glyph such as an emoji, rendered inline as text.
    Glyph(String),
    /// An image URL, rendered as a small inline image.
    Image(String),
}

impl PageIcon {
    /// Classifies an icon string whose kind the API did not state.
    ///
    /// Strings shorter than `GLYPH_ICON_MAX_LEN` bytes are glyphs, anything
    /// longer is taken to be an image URL.
    pub fn classify(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.len() < GLYPH_ICON_MAX_LEN {
            PageIcon::Glyph(value)
        } else {
            PageIcon::Image(value)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PageIcon::Glyph(value) | PageIcon::Image(value) => value,
        }
    }
}

/// The flat, UI-ready record extracted from one database row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub icon: Option<PageIcon>,
    pub cover: Option<String>,
    /// Start of the `date` property, exactly as the API returned it.
    pub date: Option<String>,
    pub last_edited: NaiveDate,
    /// Empty when the page has no `category` property; `["unset"]` when the
    /// property exists but has no options selected.
    pub categories: Vec<String>,
    pub status: Option<String>,
    /// Link carried by the first title run, if any.
    pub url: Option<String>,
}

impl PageSummary {
    /// `last_edited` formatted as a calendar date.
    pub fn last_edited_display(&self) -> String {
        self.last_edited.format("%Y-%m-%d").to_string()
    }
}

/// A database as listed in the sidebar and on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSummary {
    pub id: String,
    pub title: String,
    pub icon: Option<PageIcon>,
    pub last_edited_at: NaiveDate,
    /// Filled by a secondary query; `None` until then or if it failed.
    pub page_count: Option<usize>,
}

impl DatabaseSummary {
    /// The id without dashes, as used in wiki links.
    pub fn compact_id(&self) -> String {
        self.id.replace('-', "")
    }
}

/// Pages that share one category, in the order they were listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub pages: Vec<&'a PageSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_classification_by_length() {
        assert_eq!(PageIcon::classify("📝"), PageIcon::Glyph("📝".to_string()));
        assert_eq!(
            PageIcon::classify("https://example.com/icon.png"),
            PageIcon::Image("https://example.com/icon.png".to_string())
        );
        // Exactly ten bytes is no longer a glyph.
        assert!(matches!(PageIcon::classify("abcdefghij"), PageIcon::Image(_)));
        assert!(matches!(PageIcon::classify("abcdefghi"), PageIcon::Glyph(_)));
    }

    #[test]
    fn test_compact_id() {
        let db = DatabaseSummary {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            title: "Docs".to_string(),
            icon: None,
            last_edited_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            page_count: None,
        };
        assert_eq!(db.compact_id(), "550e8400e29b41d4a716446655440000");
    }
}
