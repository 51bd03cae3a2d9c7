// src/formatting/shell.rs
//! The HTML document around every view.

use crate::error::AppError;
use handlebars::Handlebars;
use serde::Serialize;

const TEMPLATE_NAME: &str = "page";
const TEMPLATE_SOURCE: &str = include_str!("../../templates/page.hbs");

/// Values substituted into the page template.
///
/// `title`, `site_title`, `stylesheet` and `home_href` are escaped by the
/// template engine. `sidebar` and `content` are inserted as-is and must
/// already be safe HTML.
#[derive(Debug, Clone, Serialize)]
pub struct ShellContext<'a> {
    pub title: &'a str,
    pub site_title: &'a str,
    pub stylesheet: &'a str,
    pub home_href: &'a str,
    pub sidebar: &'a str,
    pub content: &'a str,
}

/// Compiled page template, built once at startup and shared by all requests.
pub struct PageShell {
    handlebars: Handlebars<'static>,
}

impl PageShell {
    pub fn new() -> Result<Self, AppError> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string(TEMPLATE_NAME, TEMPLATE_SOURCE)
            .map_err(|e| AppError::TemplateRenderError {
                name: TEMPLATE_NAME.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { handlebars })
    }

    /// Renders a complete HTML document.
    pub fn render(&self, context: &ShellContext<'_>) -> Result<String, AppError> {
        self.handlebars
            .render(TEMPLATE_NAME, context)
            .map_err(|e| AppError::TemplateRenderError {
                name: TEMPLATE_NAME.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context<'a>(title: &'a str, content: &'a str) -> ShellContext<'a> {
        ShellContext {
            title,
            site_title: "Notion Wiki",
            stylesheet: "./assets/style.css",
            home_href: "/",
            sidebar: "<h3>NOTION WIKI</h3>",
            content,
        }
    }

    #[test]
    fn test_title_is_escaped_and_content_is_raw() {
        let shell = PageShell::new().unwrap();
        let html = shell
            .render(&context("<script>", "<p class=\"wiki-paragraph\">Hi</p>"))
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>&lt;script&gt; - Notion Wiki</title>"));
        assert!(html.contains("<p class=\"wiki-paragraph\">Hi</p>"));
        assert!(html.contains("<h3>NOTION WIKI</h3>"));
        assert!(html.contains("href=\"./assets/style.css\""));
    }
}
