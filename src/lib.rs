// src/lib.rs
//! notion-wiki library: renders a Notion workspace as a server-side HTML wiki.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `WikiConfig`, `ViewSettings`
//! - **Domain model**: `ContentBlock`, `TextRun`, `PageSummary`, `DatabaseSummary`
//! - **Domain types**: `ApiKey`, `PageId`, `DatabaseId`, `MountPath`
//! - **API client**: `NotionRepository`, `NotionHttpClient`, `DatabaseQuery`
//! - **Flattening**: `flatten_page`, `flatten_pages`, `flatten_database`
//! - **Formatting**: `render_run`, `render_block`, `render_blocks`, listings, `PageShell`
//! - **Server**: `create_router`, `AppState`, `render_view`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod flatten;
pub mod formatting;
pub mod model;
pub mod server;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ViewSettings, WikiConfig};

// --- Domain Model ---
pub use crate::model::{
    CalloutBlock, CategoryGroup, CodeBlock, ContentBlock, DatabaseSummary, ImageBlock, PageIcon,
    PageSummary, StyleFlags, TextBlock, TextRun, ToDoBlock, ToggleBlock, UnsupportedBlock,
};

// --- Domain Types ---
pub use crate::types::{ApiBaseUrl, ApiKey, BlockId, DatabaseId, MountPath, PageId};

// --- API Client ---
pub use crate::api::{query::DatabaseQuery, responses::RawPage, NotionHttpClient, NotionRepository};

// --- Flattening ---
pub use crate::flatten::{flatten_database, flatten_page, flatten_pages};

// --- Formatting ---
pub use crate::formatting::{
    group_by_category, render_block, render_blocks, render_database_list, render_grouped_pages,
    render_run, render_runs, render_sidebar, PageShell, WikiRoutes,
};

// --- Server ---
pub use crate::server::{create_router, render_view, AppState, RenderedView, ViewMode, ViewParams};
