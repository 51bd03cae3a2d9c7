// src/formatting/mod.rs
//! Renders wiki data structures into HTML fragments and full documents.
//!
//! Every function here is pure: it takes already-fetched data and returns
//! markup. Nothing in this module touches the network.

pub mod block_renderer;
pub mod html;
pub mod listing;
pub mod rich_text;
pub mod routes;
pub mod shell;

pub use block_renderer::{render_block, render_blocks};
pub use html::{css_url, escape_html, render_error, render_notice};
pub use listing::{group_by_category, render_database_list, render_grouped_pages, render_sidebar};
pub use rich_text::{render_run, render_runs};
pub use routes::WikiRoutes;
pub use shell::{PageShell, ShellContext};
