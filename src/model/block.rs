use super::rich_text::TextRun;
use serde::{Deserialize, Serialize};

/// Blocks whose only payload is their rich text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextBlock {
    pub rich_text: Vec<TextRun>,
}

impl TextBlock {
    pub fn new(rich_text: Vec<TextRun>) -> Self {
        Self { rich_text }
    }
}

/// To-do block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToDoBlock {
    pub rich_text: Vec<TextRun>,
    pub checked: bool,
}

/// Toggle block. Children are never fetched; `has_children` only decides
/// whether a placeholder is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToggleBlock {
    pub rich_text: Vec<TextRun>,
    pub has_children: bool,
}

/// Code block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodeBlock {
    pub rich_text: Vec<TextRun>,
    pub language: String,
}

/// Image block. `source` is already resolved: hosted file URL first, then
/// external URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageBlock {
    pub source: Option<String>,
}

/// Callout block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalloutBlock {
    pub rich_text: Vec<TextRun>,
    pub emoji: String,
}

/// A block whose type the wiki does not render.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnsupportedBlock {
    pub block_type: String,
}

/// One unit of page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentBlock {
    Paragraph(TextBlock),
    Heading1(TextBlock),
    Heading2(TextBlock),
    Heading3(TextBlock),
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    ToDo(ToDoBlock),
    Toggle(ToggleBlock),
    Code(CodeBlock),
    Image(ImageBlock),
    Divider,
    Quote(TextBlock),
    Callout(CalloutBlock),
    Unsupported(UnsupportedBlock),
}

impl ContentBlock {
    /// The Notion type discriminator this block was parsed from.
    pub fn block_type(&self) -> &str {
        match self {
            ContentBlock::Paragraph(_) => "paragraph",
            ContentBlock::Heading1(_) => "heading_1",
            ContentBlock::Heading2(_) => "heading_2",
            ContentBlock::Heading3(_) => "heading_3",
            ContentBlock::BulletedListItem(_) => "bulleted_list_item",
            ContentBlock::NumberedListItem(_) => "numbered_list_item",
            ContentBlock::ToDo(_) => "to_do",
            ContentBlock::Toggle(_) => "toggle",
            ContentBlock::Code(_) => "code",
            ContentBlock::Image(_) => "image",
            ContentBlock::Divider => "divider",
            ContentBlock::Quote(_) => "quote",
            ContentBlock::Callout(_) => "callout",
            ContentBlock::Unsupported(block) => &block.block_type,
        }
    }

    /// The block's rich text, or an empty slice for blocks without any.
    pub fn rich_text(&self) -> &[TextRun] {
        match self {
            ContentBlock::Paragraph(b)
            | ContentBlock::Heading1(b)
            | ContentBlock::Heading2(b)
            | ContentBlock::Heading3(b)
            | ContentBlock::BulletedListItem(b)
            | ContentBlock::NumberedListItem(b)
            | ContentBlock::Quote(b) => &b.rich_text,
            ContentBlock::ToDo(b) => &b.rich_text,
            ContentBlock::Toggle(b) => &b.rich_text,
            ContentBlock::Code(b) => &b.rich_text,
            ContentBlock::Callout(b) => &b.rich_text,
            ContentBlock::Image(_) | ContentBlock::Divider | ContentBlock::Unsupported(_) => &[],
        }
    }
}
