// src/server/views.rs
//! The three display modes of the wiki view.
//!
//! Each view issues its outbound calls one after another and turns every
//! failure into inline text, so a response is always a complete document.

use crate::api::query::DatabaseQuery;
use crate::api::NotionRepository;
use crate::config::ViewSettings;
use crate::constants::{
    DEFAULT_PAGE_TITLE, NO_DATABASES_MESSAGE, NO_PAGES_MESSAGE, PAGE_NOT_FOUND_MESSAGE,
};
use crate::error::AppError;
use crate::flatten::flatten_pages;
use crate::formatting::{
    escape_html, render_blocks, render_database_list, render_error, render_grouped_pages,
    render_notice, render_sidebar,
};
use crate::model::DatabaseSummary;
use crate::types::{DatabaseId, PageId};
use serde::Deserialize;
use std::fmt;

/// Query parameters of the view endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewParams {
    pub page_id: Option<String>,
    pub db: Option<String>,
    pub category: Option<String>,
}

/// Which view a request selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    PageDetail {
        page_id: String,
    },
    DatabaseListing {
        database: String,
        category: Option<String>,
    },
    Index,
}

impl ViewMode {
    /// `page_id` wins over `db`; a blank `db` means the index.
    pub fn from_params(params: ViewParams) -> Self {
        if let Some(page_id) = params.page_id {
            return ViewMode::PageDetail { page_id };
        }

        match params.db {
            Some(database) if !database.trim().is_empty() => ViewMode::DatabaseListing {
                database,
                category: params.category.filter(|c| !c.is_empty()),
            },
            _ => ViewMode::Index,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::PageDetail { page_id } => write!(f, "page {}", page_id),
            ViewMode::DatabaseListing {
                database,
                category: Some(category),
            } => write!(f, "database {} (category {})", database, category),
            ViewMode::DatabaseListing { database, .. } => write!(f, "database {}", database),
            ViewMode::Index => write!(f, "index"),
        }
    }
}

/// The parts of a document a view produces; the page shell puts them
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub title: String,
    pub sidebar: String,
    pub content: String,
}

/// Renders the view `mode` selects.
pub async fn render_view(
    repository: &dyn NotionRepository,
    settings: &ViewSettings,
    mode: &ViewMode,
) -> RenderedView {
    match mode {
        ViewMode::PageDetail { page_id } => render_page_detail(repository, settings, page_id).await,
        ViewMode::DatabaseListing { database, category } => {
            render_database_listing(repository, settings, database, category.as_deref()).await
        }
        ViewMode::Index => render_index(repository, settings).await,
    }
}

async fn render_page_detail(
    repository: &dyn NotionRepository,
    settings: &ViewSettings,
    raw_id: &str,
) -> RenderedView {
    let page_id = PageId::parse(raw_id);

    let title = match &page_id {
        Ok(id) => page_title(repository, id).await,
        Err(_) => DEFAULT_PAGE_TITLE.to_string(),
    };

    let databases = repository.search_databases().await;
    let sidebar = sidebar_html(&databases, settings);

    let body = match page_id {
        Ok(id) => match repository.retrieve_children(&id.cast()).await {
            Ok(blocks) if blocks.is_empty() => render_notice(PAGE_NOT_FOUND_MESSAGE),
            Ok(blocks) => format!("<div class=\"notion-page\">{}</div>", render_blocks(&blocks)),
            Err(e) if e.is_not_found() => {
                log::warn!("Page {} not found: {}", raw_id, e);
                render_notice(PAGE_NOT_FOUND_MESSAGE)
            }
            Err(e) => {
                log::error!("Failed to load content of page {}: {}", raw_id, e);
                render_error(e)
            }
        },
        Err(e) => {
            log::warn!("Rejected page id '{}': {}", raw_id, e);
            render_error(e)
        }
    };

    let content = format!(
        "<div class=\"wiki-page\"><a href=\"{}\" class=\"back-button\"><i class=\"fas fa-arrow-left\"></i> Back</a><h1 class=\"wiki-title\">{}</h1>{}</div>",
        settings.routes.home(),
        escape_html(&title),
        body
    );

    RenderedView {
        title,
        sidebar,
        content,
    }
}

/// Title from the page's block metadata, or the default title.
async fn page_title(repository: &dyn NotionRepository, page_id: &PageId) -> String {
    match repository.retrieve_title(&page_id.cast()).await {
        Ok(Some(title)) if !title.is_empty() => title,
        Ok(_) => DEFAULT_PAGE_TITLE.to_string(),
        Err(e) => {
            log::warn!("Title lookup for page {} failed: {}", page_id, e);
            DEFAULT_PAGE_TITLE.to_string()
        }
    }
}

async fn render_database_listing(
    repository: &dyn NotionRepository,
    settings: &ViewSettings,
    raw_id: &str,
    category: Option<&str>,
) -> RenderedView {
    let databases = repository.search_databases().await;
    let sidebar = sidebar_html(&databases, settings);

    let (title, content) = match DatabaseId::parse(raw_id) {
        Ok(id) => {
            let title = databases
                .as_ref()
                .ok()
                .and_then(|all| {
                    all.iter()
                        .find(|db| db.compact_id().eq_ignore_ascii_case(id.as_str()))
                })
                .map(|db| db.title.clone())
                .unwrap_or_else(|| settings.site_title.clone());

            let query = DatabaseQuery::published(settings.published_status.as_str())
                .with_category(category.map(str::to_string));

            let content = match repository.query_database(&id, &query).await {
                Ok(raw_pages) => {
                    let pages = flatten_pages(&raw_pages);
                    log::info!("Database {} lists {} pages", id, pages.len());
                    if pages.is_empty() {
                        render_notice(NO_PAGES_MESSAGE)
                    } else {
                        render_grouped_pages(&pages, &settings.routes)
                    }
                }
                Err(e) => {
                    log::error!("Failed to query database {}: {}", id, e);
                    render_error(e)
                }
            };
            (title, content)
        }
        Err(e) => {
            log::warn!("Rejected database id '{}': {}", raw_id, e);
            (settings.site_title.clone(), render_error(e))
        }
    };

    RenderedView {
        title,
        sidebar,
        content,
    }
}

async fn render_index(repository: &dyn NotionRepository, settings: &ViewSettings) -> RenderedView {
    let databases = repository.search_databases().await;
    let sidebar = sidebar_html(&databases, settings);

    let listing = match databases {
        Ok(databases) if databases.is_empty() => render_notice(NO_DATABASES_MESSAGE),
        Ok(databases) => {
            render_database_list(&databases, &settings.routes, |db| {
                published_page_count(repository, settings, db.id.clone())
            })
            .await
        }
        Err(e) => {
            log::error!("Failed to list databases: {}", e);
            render_error(e)
        }
    };

    RenderedView {
        title: "Databases".to_string(),
        sidebar,
        content: format!("<h1 class=\"section-title\">Databases</h1>{}", listing),
    }
}

/// Number of published pages in the database; 0 when the lookup fails.
async fn published_page_count(
    repository: &dyn NotionRepository,
    settings: &ViewSettings,
    database_id: String,
) -> usize {
    let count = match DatabaseId::parse(&database_id) {
        Ok(id) => {
            let query = DatabaseQuery::published(settings.published_status.as_str());
            repository.count_pages(&id, &query).await
        }
        Err(e) => Err(AppError::from(e)),
    };

    count.unwrap_or_else(|e| {
        log::warn!("Page count for database {} unavailable: {}", database_id, e);
        0
    })
}

/// The sidebar, or a home-only sidebar with an inline error when the
/// database search failed.
fn sidebar_html(
    databases: &Result<Vec<DatabaseSummary>, AppError>,
    settings: &ViewSettings,
) -> String {
    match databases {
        Ok(databases) => render_sidebar(databases, &settings.routes),
        Err(e) => {
            log::warn!("Sidebar rendered without databases: {}", e);
            format!("{}{}", render_sidebar(&[], &settings.routes), render_error(e))
        }
    }
}
