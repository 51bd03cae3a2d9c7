// src/formatting/routes.rs
//! Links between wiki views.

use super::html::escape_html;
use crate::types::MountPath;

/// Builds the hrefs the wiki emits. All views live on one path and are
/// selected by query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiRoutes {
    mount: MountPath,
}

impl WikiRoutes {
    pub fn new(mount: MountPath) -> Self {
        Self { mount }
    }

    pub fn mount(&self) -> &MountPath {
        &self.mount
    }

    /// The database index.
    pub fn home(&self) -> String {
        escape_html(self.mount.as_str())
    }

    /// Detail view of one page.
    pub fn page(&self, page_id: &str) -> String {
        escape_html(&format!("{}?page_id={}", self.mount, page_id))
    }

    /// Listing of one database. `database_id` is used as given; callers pass
    /// the dash-free form.
    pub fn database(&self, database_id: &str) -> String {
        escape_html(&format!("{}?db={}", self.mount, database_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_routes_at_root() {
        let routes = WikiRoutes::default();
        assert_eq!(routes.home(), "/");
        assert_eq!(routes.page("p1"), "/?page_id=p1");
        assert_eq!(routes.database("abc"), "/?db=abc");
    }

    #[test]
    fn test_routes_under_mount_path() {
        let routes = WikiRoutes::new(MountPath::new("/notion").unwrap());
        assert_eq!(routes.home(), "/notion");
        assert_eq!(routes.page("p1"), "/notion?page_id=p1");
        assert_eq!(routes.database("x\"y"), "/notion?db=x&quot;y");
    }
}
