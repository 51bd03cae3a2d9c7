// src/api/responses.rs
//! Raw Notion API response shapes.
//!
//! These mirror only the fields the wiki reads. Every nested field is
//! lenient: a missing, null, or oddly-typed value deserializes to its
//! default instead of failing the whole response, so one malformed block or
//! property never takes a page down with it.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Deserializes `T`, falling back to `T::default()` when the value has an
/// unexpected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(or_default(value))
}

fn or_default<T: DeserializeOwned + Default>(value: Value) -> T {
    serde_json::from_value(value).unwrap_or_default()
}

/// A list whose items are decoded one by one; a malformed item becomes
/// `T::default()` and leaves its neighbours intact. The list itself must be
/// an array.
fn each_or_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = Vec::<Value>::deserialize(deserializer)?;
    Ok(items.into_iter().map(or_default).collect())
}

/// Like `each_or_default`, but anything other than an array is an empty
/// list.
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items: Vec<Value> = lenient(deserializer)?;
    Ok(items.into_iter().map(or_default).collect())
}

/// An optional list: anything other than an array is `None`.
fn lenient_optional_items<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items: Option<Vec<Value>> = lenient(deserializer)?;
    Ok(items.map(|items| items.into_iter().map(or_default).collect()))
}

/// A map whose values are decoded entry by entry.
fn lenient_entries<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let entries: IndexMap<String, Value> = lenient(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|(name, value)| (name, or_default(value)))
        .collect())
}

/// Generic paginated list wrapper.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned + Default"))]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub object: String,
    #[serde(default = "Vec::new", deserialize_with = "each_or_default")]
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// `{ "url": ... }` as found under `external` and `file`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawUrl {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

/// The shared shape of icons, covers, and image payloads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFileObject {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub emoji: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub external: Option<RawUrl>,
    #[serde(default, deserialize_with = "lenient")]
    pub file: Option<RawUrl>,
}

impl RawFileObject {
    pub fn external_url(&self) -> Option<&str> {
        self.external.as_ref().and_then(|e| e.url.as_deref())
    }

    pub fn file_url(&self) -> Option<&str> {
        self.file.as_ref().and_then(|f| f.url.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAnnotations {
    #[serde(default, deserialize_with = "lenient")]
    pub bold: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub italic: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub strikethrough: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub underline: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub code: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawTextContent {
    #[serde(default, deserialize_with = "lenient")]
    pub link: Option<RawUrl>,
}

/// One rich text item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRichText {
    #[serde(default, deserialize_with = "lenient")]
    pub plain_text: String,
    #[serde(default, deserialize_with = "lenient")]
    pub annotations: Option<RawAnnotations>,
    #[serde(default, deserialize_with = "lenient")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<RawTextContent>,
}

impl RawRichText {
    /// The run's link: `href` when set, else the text object's link.
    pub fn link(&self) -> Option<&str> {
        self.href
            .as_deref()
            .filter(|href| !href.is_empty())
            .or_else(|| {
                self.text
                    .as_ref()
                    .and_then(|t| t.link.as_ref())
                    .and_then(|l| l.url.as_deref())
                    .filter(|url| !url.is_empty())
            })
    }
}

/// The type-specific payload of a block, e.g. the object under `"paragraph"`.
///
/// One struct covers every block kind the wiki renders; fields a kind does
/// not have stay at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawBlockPayload {
    #[serde(default, deserialize_with = "lenient_items")]
    pub rich_text: Vec<RawRichText>,
    #[serde(default, deserialize_with = "lenient")]
    pub checked: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<RawFileObject>,
    #[serde(default, deserialize_with = "lenient")]
    pub external: Option<RawUrl>,
    #[serde(default, deserialize_with = "lenient")]
    pub file: Option<RawUrl>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
}

/// A block object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawBlock {
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub block_type: String,
    #[serde(default, deserialize_with = "lenient")]
    pub has_children: bool,
    /// Everything else, including the payload keyed by `block_type`.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl RawBlock {
    /// The payload stored under the key named by the block's type.
    pub fn payload(&self) -> RawBlockPayload {
        self.rest
            .get(&self.block_type)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDate {
    #[serde(default, deserialize_with = "lenient")]
    pub start: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawSelectOption {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// A page property value. Only the shapes the flattener reads are modelled.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawProperty {
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<RawDate>,
    #[serde(default, deserialize_with = "lenient_optional_items")]
    pub title: Option<Vec<RawRichText>>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<RawSelectOption>,
    #[serde(default, deserialize_with = "lenient_optional_items")]
    pub multi_select: Option<Vec<RawSelectOption>>,
}

/// A page as returned by a database query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPage {
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub last_edited_time: String,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<RawFileObject>,
    #[serde(default, deserialize_with = "lenient")]
    pub cover: Option<RawFileObject>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub properties: IndexMap<String, RawProperty>,
}

/// A database as returned by search.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDatabase {
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_items")]
    pub title: Vec<RawRichText>,
    #[serde(default, deserialize_with = "lenient")]
    pub icon: Option<RawFileObject>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_edited_time: String,
}

pub type BlockChildrenResponse = PaginatedResponse<RawBlock>;
pub type DatabaseQueryResponse = PaginatedResponse<RawPage>;
pub type DatabaseSearchResponse = PaginatedResponse<RawDatabase>;
