use serde::{Deserialize, Serialize};

/// Inline style flags of one text run. A missing annotation object from the
/// API maps to `StyleFlags::default()`, i.e. all flags off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleFlags {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

impl StyleFlags {
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// One styled run of inline text within a block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextRun {
    pub content: String,
    pub style: StyleFlags,
    pub link: Option<String>,
}

impl TextRun {
    /// A run with no styling and no link.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn styled(content: impl Into<String>, style: StyleFlags) -> Self {
        Self {
            content: content.into(),
            style,
            link: None,
        }
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }
}
