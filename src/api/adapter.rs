// src/api/adapter.rs
//! Converts raw block responses into the closed `ContentBlock` model.

use super::responses::{RawBlock, RawRichText};
use crate::constants::DEFAULT_CALLOUT_EMOJI;
use crate::model::{
    CalloutBlock, CodeBlock, ContentBlock, ImageBlock, StyleFlags, TextBlock, TextRun, ToDoBlock,
    ToggleBlock, UnsupportedBlock,
};

/// Label used when a block arrives without a type discriminator.
const MISSING_TYPE: &str = "(missing type)";

/// Convert a raw block into a `ContentBlock`.
///
/// Absent payload fields become empty content. A discriminator the wiki
/// does not know becomes `ContentBlock::Unsupported` carrying its name.
pub fn convert_block(raw: &RawBlock) -> ContentBlock {
    let payload = raw.payload();
    let rich_text = convert_rich_text_array(&payload.rich_text);

    match raw.block_type.as_str() {
        "paragraph" => ContentBlock::Paragraph(TextBlock::new(rich_text)),
        "heading_1" => ContentBlock::Heading1(TextBlock::new(rich_text)),
        "heading_2" => ContentBlock::Heading2(TextBlock::new(rich_text)),
        "heading_3" => ContentBlock::Heading3(TextBlock::new(rich_text)),
        "bulleted_list_item" => ContentBlock::BulletedListItem(TextBlock::new(rich_text)),
        "numbered_list_item" => ContentBlock::NumberedListItem(TextBlock::new(rich_text)),
        "quote" => ContentBlock::Quote(TextBlock::new(rich_text)),
        "to_do" => ContentBlock::ToDo(ToDoBlock {
            rich_text,
            checked: payload.checked,
        }),
        "toggle" => ContentBlock::Toggle(ToggleBlock {
            rich_text,
            has_children: raw.has_children,
        }),
        "code" => ContentBlock::Code(CodeBlock {
            rich_text,
            language: payload.language.unwrap_or_default(),
        }),
        "image" => {
            let hosted = payload.file.and_then(|f| f.url);
            let external = payload.external.and_then(|e| e.url);
            ContentBlock::Image(ImageBlock {
                source: hosted.or(external),
            })
        }
        "divider" => ContentBlock::Divider,
        "callout" => ContentBlock::Callout(CalloutBlock {
            rich_text,
            emoji: payload
                .icon
                .and_then(|icon| icon.emoji)
                .unwrap_or_else(|| DEFAULT_CALLOUT_EMOJI.to_string()),
        }),
        "" => {
            log::warn!("Block {} has no type discriminator", raw.id);
            ContentBlock::Unsupported(UnsupportedBlock {
                block_type: MISSING_TYPE.to_string(),
            })
        }
        other => {
            log::debug!("Unsupported block type '{}' ({})", other, raw.id);
            ContentBlock::Unsupported(UnsupportedBlock {
                block_type: other.to_string(),
            })
        }
    }
}

pub fn convert_blocks(raw: &[RawBlock]) -> Vec<ContentBlock> {
    raw.iter().map(convert_block).collect()
}

pub fn convert_rich_text_array(items: &[RawRichText]) -> Vec<TextRun> {
    items.iter().map(convert_rich_text).collect()
}

fn convert_rich_text(item: &RawRichText) -> TextRun {
    let style = item
        .annotations
        .as_ref()
        .map(|a| StyleFlags {
            bold: a.bold,
            italic: a.italic,
            strikethrough: a.strikethrough,
            underline: a.underline,
            code: a.code,
        })
        .unwrap_or_default();

    TextRun {
        content: item.plain_text.clone(),
        style,
        link: item.link().map(str::to_string),
    }
}
