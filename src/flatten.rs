// src/flatten.rs
//! Page flattening: extracts the small fixed-shape records the wiki shows
//! from large nested API objects.
//!
//! Recognized properties are looked up by name rather than discovered by
//! iterating the property map, so the result never depends on the order in
//! which the API listed them.

use crate::api::responses::{RawDatabase, RawFileObject, RawPage, RawProperty};
use crate::constants::{
    CATEGORY_PROPERTY, DATE_PROPERTY, STATUS_PROPERTY, TITLE_PROPERTY, UNSET_CATEGORY,
    UNTITLED_DATABASE, UNTITLED_PAGE,
};
use crate::model::{DatabaseSummary, PageIcon, PageSummary};
use chrono::{DateTime, NaiveDate};

/// Flatten one raw page record into a `PageSummary`.
pub fn flatten_page(page: &RawPage) -> PageSummary {
    let property = |name: &str| page.properties.get(name);

    let (title, url) = property(TITLE_PROPERTY)
        .and_then(title_of)
        .unwrap_or_else(|| (UNTITLED_PAGE.to_string(), None));

    PageSummary {
        id: page.id.clone(),
        title,
        icon: page.icon.as_ref().and_then(resolve_icon),
        cover: page.cover.as_ref().and_then(resolve_cover),
        date: property(DATE_PROPERTY).and_then(date_of),
        last_edited: calendar_date(&page.last_edited_time),
        categories: property(CATEGORY_PROPERTY)
            .map(categories_of)
            .unwrap_or_default(),
        status: property(STATUS_PROPERTY).and_then(status_of),
        url,
    }
}

/// Flatten every page of a query result, keeping the query's order.
pub fn flatten_pages(pages: &[RawPage]) -> Vec<PageSummary> {
    pages.iter().map(flatten_page).collect()
}

/// Flatten a database search result into a `DatabaseSummary`.
///
/// The page count is left unset; it needs a query of its own.
pub fn flatten_database(database: &RawDatabase) -> DatabaseSummary {
    let title = database
        .title
        .first()
        .map(|run| run.plain_text.clone())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNTITLED_DATABASE.to_string());

    DatabaseSummary {
        id: database.id.clone(),
        title,
        icon: database.icon.as_ref().and_then(resolve_icon),
        last_edited_at: calendar_date(&database.last_edited_time),
        page_count: None,
    }
}

/// Emoji first, then an external image; hosted icons are not shown.
///
/// The API's `type` tag decides the icon kind. Only an icon without a tag
/// falls back to the length heuristic.
fn resolve_icon(icon: &RawFileObject) -> Option<PageIcon> {
    if let Some(emoji) = &icon.emoji {
        return Some(match icon.kind.as_deref() {
            Some(_) => PageIcon::Glyph(emoji.clone()),
            None => PageIcon::classify(emoji.clone()),
        });
    }

    icon.external_url().map(|url| match icon.kind.as_deref() {
        Some(_) => PageIcon::Image(url.to_string()),
        None => PageIcon::classify(url),
    })
}

/// External image first, then a hosted file.
fn resolve_cover(cover: &RawFileObject) -> Option<String> {
    cover
        .external_url()
        .or_else(|| cover.file_url())
        .map(str::to_string)
}

fn title_of(property: &RawProperty) -> Option<(String, Option<String>)> {
    let first = property.title.as_ref()?.first()?;
    Some((first.plain_text.clone(), first.link().map(str::to_string)))
}

fn date_of(property: &RawProperty) -> Option<String> {
    property.date.as_ref()?.start.clone()
}

fn status_of(property: &RawProperty) -> Option<String> {
    property.status.as_ref()?.name.clone()
}

fn categories_of(property: &RawProperty) -> Vec<String> {
    match &property.multi_select {
        Some(options) if options.is_empty() => vec![UNSET_CATEGORY.to_string()],
        Some(options) => options.iter().filter_map(|o| o.name.clone()).collect(),
        None => Vec::new(),
    }
}

/// Calendar date of an API timestamp.
///
/// Accepts RFC 3339 timestamps and bare dates. Anything else maps to the
/// Unix epoch so that a bad timestamp never aborts a listing.
fn calendar_date(timestamp: &str) -> NaiveDate {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(timestamp.get(..10).unwrap_or(""), "%Y-%m-%d"))
        .unwrap_or_else(|_| {
            if !timestamp.is_empty() {
                log::warn!("Unparseable timestamp '{}'", timestamp);
            }
            NaiveDate::default()
        })
}
