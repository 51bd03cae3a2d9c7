// src/formatting/block_renderer.rs
//! Block rendering: converts content blocks into HTML fragments.
//!
//! `render_block` handles one block in isolation. `render_blocks` renders a
//! whole page body and wraps runs of consecutive list items in a list
//! element.

use super::html::escape_html;
use super::rich_text::render_runs;
use crate::constants::{CHARS_PER_BLOCK_ESTIMATE, TOGGLE_CHILDREN_PLACEHOLDER};
use crate::model::ContentBlock;

/// Renders a single block.
///
/// Never fails: a block the wiki does not know renders as a visible
/// "unsupported" notice naming its type.
pub fn render_block(block: &ContentBlock) -> String {
    let text = || render_runs(block.rich_text());

    match block {
        ContentBlock::Paragraph(_) => format!("<p class=\"wiki-paragraph\">{}</p>", text()),
        ContentBlock::Heading1(_) => heading(1, &text()),
        ContentBlock::Heading2(_) => heading(2, &text()),
        ContentBlock::Heading3(_) => heading(3, &text()),
        ContentBlock::BulletedListItem(_) | ContentBlock::NumberedListItem(_) => {
            format!("<li class=\"wiki-list-item\">{}</li>", text())
        }
        ContentBlock::Quote(_) => {
            format!("<blockquote class=\"wiki-quote\">{}</blockquote>", text())
        }
        ContentBlock::ToDo(todo) => format!(
            "<div class=\"wiki-todo\"><input type=\"checkbox\"{} disabled>{}</div>",
            if todo.checked { " checked" } else { "" },
            text()
        ),
        ContentBlock::Toggle(toggle) => {
            let mut html = format!("<details class=\"wiki-toggle\"><summary>{}</summary>", text());
            if toggle.has_children {
                html.push_str(&format!(
                    "<div class=\"toggle-content\">{}</div>",
                    TOGGLE_CHILDREN_PLACEHOLDER
                ));
            }
            html.push_str("</details>");
            html
        }
        ContentBlock::Code(code) => {
            // Code is shown verbatim: annotations on its runs are ignored.
            let content: String = code
                .rich_text
                .iter()
                .map(|run| escape_html(&run.content))
                .collect();
            format!(
                "<div class=\"wiki-code\"><pre><code class=\"language-{}\">{}</code></pre></div>",
                escape_html(&code.language),
                content
            )
        }
        ContentBlock::Image(image) => match &image.source {
            Some(source) => format!(
                "<div class=\"wiki-image\"><figure><img src=\"{}\" alt=\"Notion image\"></figure></div>",
                escape_html(source)
            ),
            None => "<div class=\"wiki-image\"></div>".to_string(),
        },
        ContentBlock::Divider => "<hr class=\"wiki-divider\">".to_string(),
        ContentBlock::Callout(callout) => format!(
            "<div class=\"wiki-callout\"><div class=\"callout-icon\">{}</div><div class=\"callout-content\">{}</div></div>",
            escape_html(&callout.emoji),
            text()
        ),
        ContentBlock::Unsupported(unsupported) => format!(
            "<div class=\"wiki-unsupported\">Unsupported block type: {}</div>",
            escape_html(&unsupported.block_type)
        ),
    }
}

fn heading(level: u8, inner: &str) -> String {
    format!("<h{level} class=\"wiki-heading\">{inner}</h{level}>")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bulleted,
    Numbered,
}

impl ListKind {
    fn of(block: &ContentBlock) -> Option<Self> {
        match block {
            ContentBlock::BulletedListItem(_) => Some(ListKind::Bulleted),
            ContentBlock::NumberedListItem(_) => Some(ListKind::Numbered),
            _ => None,
        }
    }

    fn open(self) -> &'static str {
        match self {
            ListKind::Bulleted => "<ul class=\"wiki-list\">",
            ListKind::Numbered => "<ol class=\"wiki-list\">",
        }
    }

    fn close(self) -> &'static str {
        match self {
            ListKind::Bulleted => "</ul>",
            ListKind::Numbered => "</ol>",
        }
    }
}

/// Renders a page body, in order.
///
/// Consecutive items of the same list kind share one `<ul>` or `<ol>`; a
/// change of kind closes the current list and opens a new one.
pub fn render_blocks(blocks: &[ContentBlock]) -> String {
    let mut output = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);
    let mut open_list: Option<ListKind> = None;

    for block in blocks {
        let kind = ListKind::of(block);
        if open_list != kind {
            if let Some(current) = open_list {
                output.push_str(current.close());
            }
            if let Some(next) = kind {
                output.push_str(next.open());
            }
            open_list = kind;
        }
        output.push_str(&render_block(block));
    }

    if let Some(current) = open_list {
        output.push_str(current.close());
    }

    log::debug!("Rendered {} blocks ({} bytes)", blocks.len(), output.len());
    output
}
