// src/api/query.rs
//! Request bodies for the search and database-query endpoints.
//!
//! Builders are pure: everything a request depends on is passed in.

use crate::constants::{CATEGORY_PROPERTY, DATE_PROPERTY, NOTION_API_PAGE_SIZE, STATUS_PROPERTY};
use serde_json::{json, Value};

/// Filter and sort for listing the published pages of a database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseQuery {
    /// Only pages whose `is_status` equals this value are listed.
    pub status: String,
    /// Optional category the pages must carry.
    pub category: Option<String>,
}

impl DatabaseQuery {
    pub fn published(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category.filter(|c| !c.is_empty());
        self
    }

    /// Builds the JSON body for `POST /databases/{id}/query`.
    pub fn to_body(&self) -> Value {
        let status_filter = json!({
            "property": STATUS_PROPERTY,
            "status": { "equals": self.status }
        });

        let filter = match &self.category {
            Some(category) => json!({
                "and": [
                    status_filter,
                    {
                        "property": CATEGORY_PROPERTY,
                        "multi_select": { "contains": category }
                    }
                ]
            }),
            None => status_filter,
        };

        json!({
            "filter": filter,
            "sorts": [
                { "property": DATE_PROPERTY, "direction": "descending" }
            ],
            "page_size": NOTION_API_PAGE_SIZE
        })
    }
}

/// Builds the JSON body for `POST /search` that lists databases, most
/// recently edited first.
pub fn database_search_body() -> Value {
    json!({
        "filter": { "value": "database", "property": "object" },
        "sort": { "direction": "descending", "timestamp": "last_edited_time" }
    })
}
