// src/formatting/rich_text.rs
//! Inline formatting of styled text runs.

use super::html::escape_html;
use crate::model::{StyleFlags, TextRun};

/// Renders one run as HTML.
///
/// The content is escaped first. Style wrappers nest from the inside out as
/// code, underline, strikethrough, italic and bold, and a link (if any)
/// wraps the whole result.
pub fn render_run(run: &TextRun) -> String {
    let styled = apply_styles(escape_html(&run.content), &run.style);

    match &run.link {
        Some(url) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"wiki-link\">{}</a>",
            escape_html(url),
            styled
        ),
        None => styled,
    }
}

/// Renders a sequence of runs, concatenated in order.
pub fn render_runs(runs: &[TextRun]) -> String {
    runs.iter().map(render_run).collect()
}

fn apply_styles(mut html: String, style: &StyleFlags) -> String {
    if style.is_plain() {
        return html;
    }
    if style.code {
        html = format!("<code class=\"wiki-inline-code\">{}</code>", html);
    }
    if style.underline {
        html = format!("<u>{}</u>", html);
    }
    if style.strikethrough {
        html = format!("<s>{}</s>", html);
    }
    if style.italic {
        html = format!("<em>{}</em>", html);
    }
    if style.bold {
        html = format!("<strong>{}</strong>", html);
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_run_is_escaped() {
        assert_eq!(render_run(&TextRun::plain("a < b & c")), "a &lt; b &amp; c");
    }

    #[test]
    fn test_bold_italic_nesting() {
        let run = TextRun::styled(
            "x",
            StyleFlags {
                bold: true,
                italic: true,
                ..Default::default()
            },
        );
        assert_eq!(render_run(&run), "<strong><em>x</em></strong>");
    }

    #[test]
    fn test_all_styles_nest_in_fixed_order() {
        let run = TextRun::styled(
            "x",
            StyleFlags {
                bold: true,
                italic: true,
                strikethrough: true,
                underline: true,
                code: true,
            },
        );
        assert_eq!(
            render_run(&run),
            "<strong><em><s><u><code class=\"wiki-inline-code\">x</code></u></s></em></strong>"
        );
    }

    #[test]
    fn test_link_wraps_styled_content() {
        let run = TextRun::styled(
            "docs",
            StyleFlags {
                bold: true,
                ..Default::default()
            },
        )
        .with_link("https://example.com/?a=1&b=2");

        insta::assert_snapshot!(
            render_run(&run),
            @r#"<a href="https://example.com/?a=1&amp;b=2" target="_blank" rel="noopener noreferrer" class="wiki-link"><strong>docs</strong></a>"#
        );
    }

    #[test]
    fn test_runs_concatenate_in_order() {
        let runs = vec![TextRun::plain("Hello, "), TextRun::plain("world")];
        assert_eq!(render_runs(&runs), "Hello, world");
        assert_eq!(render_runs(&[]), "");
    }
}
