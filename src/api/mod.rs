// src/api/mod.rs
//! Notion API interaction: the four outbound requests the wiki makes.
//!
//! I/O lives in `client`, response decoding in `parser`, request bodies in
//! `query`, and the raw→domain mapping in `adapter`.

pub mod adapter;
pub mod client;
pub mod parser;
pub mod query;
pub mod responses;

use crate::error::AppError;
use crate::model::{ContentBlock, DatabaseSummary};
use crate::types::{BlockId, DatabaseId};
use query::DatabaseQuery;
use responses::RawPage;

/// The ability to read wiki content from a Notion workspace.
///
/// Views depend on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Top-level content blocks of a page.
    async fn retrieve_children(&self, block: &BlockId) -> Result<Vec<ContentBlock>, AppError>;

    /// Title of a page, read from its block metadata.
    async fn retrieve_title(&self, block: &BlockId) -> Result<Option<String>, AppError>;

    /// All databases shared with the integration, most recently edited first.
    async fn search_databases(&self) -> Result<Vec<DatabaseSummary>, AppError>;

    /// Pages of a database matching `query`.
    async fn query_database(
        &self,
        database: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<Vec<RawPage>, AppError>;

    /// Number of pages `query_database` would list.
    async fn count_pages(
        &self,
        database: &DatabaseId,
        query: &DatabaseQuery,
    ) -> Result<usize, AppError> {
        Ok(self.query_database(database, query).await?.len())
    }
}

pub use client::{ApiResponse, NotionHttpClient};
pub use query::database_search_body;
