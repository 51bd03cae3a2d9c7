// src/constants.rs
//! Domain constants that define the operational boundaries of the wiki.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Notion API version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Default base URL of the Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// How many pages a single database query asks for.
///
/// The Notion API maximum is 100. Listings issue exactly one query, so this
/// also caps the page count shown on database cards.
pub const NOTION_API_PAGE_SIZE: usize = 100;

// ---------------------------------------------------------------------------
// Page flattening
// ---------------------------------------------------------------------------

/// Title given to a page whose `title` property is missing or empty.
pub const UNTITLED_PAGE: &str = "untitled";

/// Category recorded when a page's multi-select exists but has no options.
pub const UNSET_CATEGORY: &str = "unset";

/// Property names the flattener recognizes.
pub const DATE_PROPERTY: &str = "date";
pub const TITLE_PROPERTY: &str = "title";
pub const STATUS_PROPERTY: &str = "is_status";
pub const CATEGORY_PROPERTY: &str = "category";

/// Icon strings shorter than this (in bytes) are treated as glyphs when the
/// API did not say what kind of icon it is.
pub const GLYPH_ICON_MAX_LEN: usize = 10;

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// Maximum number of cards shown per category group.
pub const CATEGORY_CARD_LIMIT: usize = 4;

/// Title shown for a page whose metadata lookup yields nothing.
pub const DEFAULT_PAGE_TITLE: &str = "Notion Page";

/// Title shown for a database without a title.
pub const UNTITLED_DATABASE: &str = "Untitled database";

/// Shown when a page has no content blocks.
pub const PAGE_NOT_FOUND_MESSAGE: &str = "Page not found or has no content.";

/// Shown when a database listing matches no pages.
pub const NO_PAGES_MESSAGE: &str = "No pages found.";

/// Shown on the index when no databases are shared with the integration.
pub const NO_DATABASES_MESSAGE: &str = "No databases available.";

/// Icon used by callouts that carry no emoji.
pub const DEFAULT_CALLOUT_EMOJI: &str = "💡";

/// Shown inside a toggle whose children were not fetched.
pub const TOGGLE_CHILDREN_PLACEHOLDER: &str =
    "Showing the toggle contents requires an additional API call.";

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
