// src/formatting/html.rs
//! HTML escaping and the small inline messages views fall back to.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that could end a quoted CSS `url('...')` or the attribute
/// around it.
const CSS_URL_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'\\')
    .add(b'<')
    .add(b'>');

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A URL made safe for `url('...')` inside a `style` attribute.
pub fn css_url(url: &str) -> String {
    escape_html(&utf8_percent_encode(url, CSS_URL_SET).to_string())
}

/// An inline error paragraph shown in place of content that failed to load.
pub fn render_error(message: impl std::fmt::Display) -> String {
    format!(
        "<p class=\"wiki-error\">Error: {}</p>",
        escape_html(&message.to_string())
    )
}

/// A plain informational paragraph, e.g. for empty listings.
pub fn render_notice(message: &str) -> String {
    format!("<p class=\"wiki-notice\">{}</p>", escape_html(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("한글 ok"), "한글 ok");
    }

    #[test]
    fn test_css_url_cannot_close_the_string() {
        assert_eq!(
            css_url("https://img.example/a'); color: red; ('.png?x=1&y=2"),
            "https://img.example/a%27%29;%20color:%20red;%20%28%27.png?x=1&amp;y=2"
        );
        assert_eq!(
            css_url("https://img.example/c.jpg"),
            "https://img.example/c.jpg"
        );
    }

    #[test]
    fn test_error_message_is_escaped() {
        assert_eq!(
            render_error("bad <id>"),
            "<p class=\"wiki-error\">Error: bad &lt;id&gt;</p>"
        );
    }
}
