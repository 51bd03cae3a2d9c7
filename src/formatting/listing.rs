// src/formatting/listing.rs
//! Card grids, database cards and the sidebar.

use super::html::{css_url, escape_html};
use super::routes::WikiRoutes;
use crate::constants::CATEGORY_CARD_LIMIT;
use crate::model::{CategoryGroup, DatabaseSummary, PageIcon, PageSummary};
use indexmap::IndexMap;
use std::fmt::Write;
use std::future::Future;

/// Groups pages by category.
///
/// Groups appear in the order their category was first seen. A page lands
/// in the bucket of every category it carries, and each bucket keeps the
/// input order. Pages without categories are not shown in any group.
pub fn group_by_category(pages: &[PageSummary]) -> Vec<CategoryGroup<'_>> {
    let mut buckets: IndexMap<&str, Vec<&PageSummary>> = IndexMap::new();
    for page in pages {
        for category in &page.categories {
            buckets.entry(category.as_str()).or_default().push(page);
        }
    }

    buckets
        .into_iter()
        .map(|(category, pages)| CategoryGroup { category, pages })
        .collect()
}

/// Renders one section per category, each with at most
/// `CATEGORY_CARD_LIMIT` cards.
pub fn render_grouped_pages(pages: &[PageSummary], routes: &WikiRoutes) -> String {
    let groups = group_by_category(pages);
    let mut html = String::new();

    for group in &groups {
        let _ = write!(
            html,
            "<div class=\"category-section\"><h2 class=\"section-title\">{}</h2><div class=\"pages-grid\">",
            escape_html(group.category)
        );
        for page in group.pages.iter().take(CATEGORY_CARD_LIMIT) {
            html.push_str(&render_page_card(page, routes));
        }
        html.push_str("</div></div>");
    }

    log::debug!("Rendered {} category groups from {} pages", groups.len(), pages.len());
    html
}

fn render_page_card(page: &PageSummary, routes: &WikiRoutes) -> String {
    let mut html = String::from("<div class=\"page-card\">");

    if let Some(cover) = &page.cover {
        let _ = write!(
            html,
            "<div class=\"page-card-cover\" style=\"background-image: url('{}')\"></div>",
            css_url(cover)
        );
    }

    html.push_str("<div class=\"page-card-content\">");
    let _ = write!(
        html,
        "<a href=\"{}\" class=\"page-card-title\">{}{}</a>",
        routes.page(&page.id),
        page.icon.as_ref().map(render_page_icon).unwrap_or_default(),
        escape_html(&page.title)
    );

    html.push_str("<div class=\"page-card-tags\">");
    for category in &page.categories {
        let _ = write!(html, "<span class=\"category-tag\">{}</span>", escape_html(category));
    }
    if let Some(status) = &page.status {
        let _ = write!(html, "<span class=\"status-tag\">{}</span>", escape_html(status));
    }
    html.push_str("</div>");

    html.push_str("<div class=\"page-card-meta\">");
    if let Some(date) = &page.date {
        let _ = write!(
            html,
            "<span class=\"page-card-date\"><i class=\"far fa-calendar-alt\"></i> {}</span>",
            escape_html(date)
        );
    }
    let _ = write!(
        html,
        "<span class=\"page-card-edited\"><i class=\"far fa-edit\"></i> {}</span>",
        page.last_edited_display()
    );
    html.push_str("</div></div></div>");

    html
}

fn render_page_icon(icon: &PageIcon) -> String {
    match icon {
        PageIcon::Glyph(glyph) => {
            format!("<span class=\"page-card-icon\">{}</span> ", escape_html(glyph))
        }
        PageIcon::Image(url) => small_image(url, "page-card-icon"),
    }
}

fn small_image(url: &str, class: &str) -> String {
    format!(
        "<img src=\"{}\" alt=\"icon\" class=\"{}\" width=\"16\" height=\"16\"> ",
        escape_html(url),
        class
    )
}

fn render_database_icon(icon: Option<&PageIcon>) -> String {
    match icon {
        Some(PageIcon::Glyph(glyph)) => escape_html(glyph),
        Some(PageIcon::Image(url)) => small_image(url, "database-icon"),
        None => "<i class=\"fas fa-database\"></i>".to_string(),
    }
}

/// Renders one card per database.
///
/// `page_count` is looked up once per card while the card is rendered, in
/// order, and each lookup is awaited before the next card starts.
pub async fn render_database_list<F, Fut>(
    databases: &[DatabaseSummary],
    routes: &WikiRoutes,
    mut page_count: F,
) -> String
where
    F: FnMut(&DatabaseSummary) -> Fut,
    Fut: Future<Output = usize>,
{
    let mut html = String::from("<div class=\"database-list\">");

    for database in databases {
        let count = page_count(database).await;
        let _ = write!(
            html,
            concat!(
                "<div class=\"database-card\">",
                "<div class=\"database-card-header\">",
                "<div class=\"database-card-icon\">{icon}</div>",
                "<a href=\"{href}\" class=\"database-card-title\">{title}</a>",
                "</div>",
                "<div class=\"database-card-meta\">",
                "<span><i class=\"far fa-clock\"></i> Last edited: {edited}</span>",
                "<span class=\"database-card-count\"><i class=\"fas fa-file-alt\"></i> {count} {noun}</span>",
                "</div></div>"
            ),
            icon = render_database_icon(database.icon.as_ref()),
            href = routes.database(&database.compact_id()),
            title = escape_html(&database.title),
            edited = database.last_edited_at.format("%Y-%m-%d"),
            count = count,
            noun = if count == 1 { "page" } else { "pages" },
        );
    }

    html.push_str("</div>");
    html
}

/// Renders the navigation sidebar: a home link plus one link per database.
pub fn render_sidebar(databases: &[DatabaseSummary], routes: &WikiRoutes) -> String {
    let mut html = format!(
        "<h3 class=\"sidebar-title\">NOTION WIKI</h3><ul class=\"sidebar-nav\"><li><a href=\"{}\"><i class=\"fas fa-home\"></i> Home</a></li>",
        routes.home()
    );

    for database in databases {
        let _ = write!(
            html,
            "<li><a href=\"{}\">{} {}</a></li>",
            routes.database(&database.compact_id()),
            render_database_icon(database.icon.as_ref()),
            escape_html(&database.title)
        );
    }

    html.push_str("</ul>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn page(id: &str, categories: &[&str]) -> PageSummary {
        PageSummary {
            id: id.to_string(),
            title: format!("Page {}", id),
            icon: None,
            cover: None,
            date: None,
            last_edited: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            status: None,
            url: None,
        }
    }

    fn database(id: &str, title: &str, icon: Option<PageIcon>) -> DatabaseSummary {
        DatabaseSummary {
            id: id.to_string(),
            title: title.to_string(),
            icon,
            last_edited_at: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            page_count: None,
        }
    }

    #[test]
    fn test_groups_follow_first_seen_order() {
        let pages = vec![
            page("a", &["Web"]),
            page("b", &["Rust", "Web"]),
            page("c", &[]),
            page("d", &["Rust"]),
        ];

        let groups = group_by_category(&pages);
        let summary: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|g| (g.category, g.pages.iter().map(|p| p.id.as_str()).collect()))
            .collect();

        assert_eq!(
            summary,
            vec![("Web", vec!["a", "b"]), ("Rust", vec!["b", "d"])]
        );
    }

    #[test]
    fn test_group_cap_drops_pages_beyond_limit() {
        let pages: Vec<PageSummary> = (0..10)
            .map(|i| page(&format!("p{}", i), &["Docs"]))
            .collect();

        let html = render_grouped_pages(&pages, &WikiRoutes::default());

        assert_eq!(html.matches("class=\"page-card\"").count(), CATEGORY_CARD_LIMIT);
        for shown in 0..CATEGORY_CARD_LIMIT {
            assert!(html.contains(&format!("?page_id=p{}\"", shown)));
        }
        for hidden in CATEGORY_CARD_LIMIT..10 {
            assert!(!html.contains(&format!("?page_id=p{}\"", hidden)));
        }
    }

    #[test]
    fn test_page_card() {
        let mut card = page("p1", &["Rust", "Web"]);
        card.title = "Tips & <Tricks>".to_string();
        card.icon = Some(PageIcon::Glyph("📘".to_string()));
        card.cover = Some("https://images.example/c.jpg".to_string());
        card.status = Some("Done".to_string());
        card.date = Some("2024-02-28".to_string());

        insta::assert_snapshot!(
            render_page_card(&card, &WikiRoutes::default()),
            @r#"<div class="page-card"><div class="page-card-cover" style="background-image: url('https://images.example/c.jpg')"></div><div class="page-card-content"><a href="/?page_id=p1" class="page-card-title"><span class="page-card-icon">📘</span> Tips &amp; &lt;Tricks&gt;</a><div class="page-card-tags"><span class="category-tag">Rust</span><span class="category-tag">Web</span><span class="status-tag">Done</span></div><div class="page-card-meta"><span class="page-card-date"><i class="far fa-calendar-alt"></i> 2024-02-28</span><span class="page-card-edited"><i class="far fa-edit"></i> 2024-01-15</span></div></div></div>"#
        );
    }

    #[test]
    fn test_cover_url_stays_inside_css_string() {
        let mut card = page("p3", &["Docs"]);
        card.cover = Some("https://x.io/a');background:red;('.jpg".to_string());
        let html = render_page_card(&card, &WikiRoutes::default());
        assert!(html.contains("url('https://x.io/a%27%29;background:red;%28%27.jpg')"));
        assert!(!html.contains("&#39;"));
    }

    #[test]
    fn test_image_icon_renders_small_image() {
        let mut card = page("p2", &["Docs"]);
        card.icon = Some(PageIcon::Image("https://x.io/icon.png".to_string()));
        let html = render_page_card(&card, &WikiRoutes::default());
        assert!(html.contains(
            "<img src=\"https://x.io/icon.png\" alt=\"icon\" class=\"page-card-icon\" width=\"16\" height=\"16\">"
        ));
    }

    #[tokio::test]
    async fn test_database_list_calls_page_count_per_card() {
        let databases = vec![
            database("550e8400-e29b-41d4-a716-446655440000", "Docs", None),
            database("db-2", "Notes", Some(PageIcon::Glyph("🗒️".to_string()))),
        ];
        let mut asked = Vec::new();

        let html = render_database_list(&databases, &WikiRoutes::default(), |db| {
            asked.push(db.id.clone());
            std::future::ready(if db.title == "Docs" { 1 } else { 12 })
        })
        .await;

        assert_eq!(asked, vec!["550e8400-e29b-41d4-a716-446655440000", "db-2"]);
        assert!(html.contains("href=\"/?db=550e8400e29b41d4a716446655440000\""));
        assert!(html.contains("<i class=\"fas fa-database\"></i>"));
        assert!(html.contains("1 page</span>"));
        assert!(html.contains("12 pages</span>"));
        assert!(html.contains("Last edited: 2024-06-01"));
    }

    #[test]
    fn test_sidebar() {
        let databases = vec![database("db-1", "Docs", Some(PageIcon::Glyph("📚".to_string())))];
        insta::assert_snapshot!(
            render_sidebar(&databases, &WikiRoutes::default()),
            @r#"<h3 class="sidebar-title">NOTION WIKI</h3><ul class="sidebar-nav"><li><a href="/"><i class="fas fa-home"></i> Home</a></li><li><a href="/?db=db1">📚 Docs</a></li></ul>"#
        );
    }
}
