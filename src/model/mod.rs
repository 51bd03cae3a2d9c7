//! Domain model: what a wiki page is made of once it has left the Notion API.

mod block;
mod rich_text;
mod summary;

pub use block::{
    CalloutBlock, CodeBlock, ContentBlock, ImageBlock, TextBlock, ToDoBlock, ToggleBlock,
    UnsupportedBlock,
};
pub use rich_text::{StyleFlags, TextRun};
pub use summary::{CategoryGroup, DatabaseSummary, PageIcon, PageSummary};
