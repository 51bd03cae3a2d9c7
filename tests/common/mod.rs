// tests/common/mod.rs
//! In-memory `NotionRepository` used by the integration tests.

#![allow(dead_code)]

use notion_wiki::api::query::DatabaseQuery;
use notion_wiki::{
    AppError, BlockId, ContentBlock, DatabaseId, DatabaseSummary, NotionErrorCode,
    NotionRepository, PageIcon, RawPage,
};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub const DOCS_DB: &str = "550e8400-e29b-41d4-a716-446655440000";
pub const DOCS_DB_COMPACT: &str = "550e8400e29b41d4a716446655440000";
pub const NOTES_DB: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
pub const PAGE: &str = "6ba7b8119dad11d180b400c04fd430c8";

/// Canned workspace content plus a log of every call made against it.
#[derive(Default)]
pub struct StubRepository {
    pub blocks: HashMap<String, Vec<ContentBlock>>,
    pub titles: HashMap<String, String>,
    pub databases: Vec<DatabaseSummary>,
    pub pages: HashMap<String, Vec<RawPage>>,
    pub fail_search: bool,
    pub fail_titles: bool,
    pub failing_databases: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl StubRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn not_found(what: &str) -> AppError {
    AppError::NotionService {
        code: NotionErrorCode::ObjectNotFound,
        message: format!("Could not find {}", what),
        status: reqwest::StatusCode::NOT_FOUND,
    }
}

pub fn database(id: &str, title: &str, icon: Option<&str>) -> DatabaseSummary {
    DatabaseSummary {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.map(|glyph| PageIcon::Glyph(glyph.to_string())),
        last_edited_at: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        page_count: None,
    }
}

pub fn raw_page(value: serde_json::Value) -> RawPage {
    serde_json::from_value(value).unwrap()
}

#[async_trait::async_trait]
impl NotionRepository for StubRepository {
    async fn retrieve_children(&self, block: &BlockId) -> Result<Vec<ContentBlock>, AppError> {
        self.record(format!("children {}", block));
        Ok(self.blocks.get(block.as_str()).cloned().unwrap_or_default())
    }

    async fn retrieve_title(&self, block: &BlockId) -> Result<Option<String>, AppError> {
        self.record(format!("title {}", block));
        if self.fail_titles {
            return Err(not_found("block"));
        }
        Ok(self.titles.get(block.as_str()).cloned())
    }

    async fn search_databases(&self) -> Result<Vec<DatabaseSummary>, AppError> {
        self.record("search".to_string());
        if self.fail_search {
            return Err(not_found("databases"));
        }
        Ok(self.databases.clone())
    }

    async fn query_database(
        &self,
        database: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<Vec<RawPage>, AppError> {
        match &query.category {
            Some(category) => self.record(format!(
                "query {} status={} category={}",
                database, query.status, category
            )),
            None => self.record(format!("query {} status={}", database, query.status)),
        }
        if self.failing_databases.contains(database.as_str()) {
            return Err(not_found("database"));
        }
        Ok(self.pages.get(database.as_str()).cloned().unwrap_or_default())
    }
}
