// src/server/mod.rs
//! HTTP surface: one GET endpoint on the mount path serving every view.
//!
//! ```text
//! GET {mount}                      database index
//! GET {mount}?db=<id>[&category=c] published pages of a database
//! GET {mount}?page_id=<id>         one page
//! ```

mod http_error;
pub mod views;

pub use http_error::HttpError;
pub use views::{render_view, RenderedView, ViewMode, ViewParams};

use crate::api::NotionRepository;
use crate::config::ViewSettings;
use crate::formatting::{PageShell, ShellContext};
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;

/// State shared by all requests. Nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn NotionRepository>,
    pub settings: Arc<ViewSettings>,
    pub shell: Arc<PageShell>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn NotionRepository>,
        settings: ViewSettings,
        shell: PageShell,
    ) -> Self {
        Self {
            repository,
            settings: Arc::new(settings),
            shell: Arc::new(shell),
        }
    }
}

/// Builds the router serving the wiki view under the configured mount path.
pub fn create_router(state: AppState) -> Router {
    let mount = state.settings.routes.mount().as_str().to_string();
    Router::new()
        .route(&mount, get(wiki_view))
        .with_state(state)
}

async fn wiki_view(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Html<String>, HttpError> {
    let mode = ViewMode::from_params(params);
    log::info!("Rendering {}", mode);

    let view = render_view(state.repository.as_ref(), &state.settings, &mode).await;
    Ok(Html(render_document(&state, &view)?))
}

/// Wraps a rendered view in the page shell.
pub fn render_document(state: &AppState, view: &RenderedView) -> Result<String, HttpError> {
    let settings = &state.settings;
    let document = state.shell.render(&ShellContext {
        title: &view.title,
        site_title: &settings.site_title,
        stylesheet: &settings.stylesheet,
        home_href: settings.routes.mount().as_str(),
        sidebar: &view.sidebar,
        content: &view.content,
    })?;
    Ok(document)
}
