//! Route Table: the ordered page sequence of the document.
//!
//! The table is fixed at process start and immutable afterwards. Its
//! insertion order is load-bearing: it defines both the menu order of the
//! navigation bar and the previous/next adjacency used by the sequential
//! navigator. Path matching everywhere in the workspace is exact string
//! equality: `"/deploy/"` is a different (and unknown) path from
//! `"/deploy"`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path of the root page. Exactly one entry of a valid table carries it.
pub const ROOT_PATH: &str = "/";

/// A single navigable page of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Stable short identifier (unique, lowercase-kebab token).
    pub id: String,

    /// Human-readable label shown in menus and pager controls.
    pub title: String,

    /// Absolute URL path, unique across the table.
    pub path: String,
}

impl RouteEntry {
    pub fn new(id: impl Into<String>, title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: path.into(),
        }
    }
}

/// Errors a table can fail construction with.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("duplicate route id '{0}'")]
    DuplicateId(String),

    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),

    #[error("route table has no entry with path \"/\"")]
    MissingRoot,
}

/// Immutable, insertion-ordered sequence of [`RouteEntry`].
///
/// Construction validates the table invariants; after that the table only
/// answers lookups. With a dozen entries linear scans are fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate ids, duplicate paths, and a
    /// non-empty table without a root (`"/"`) entry.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteTableError> {
        for (i, entry) in entries.iter().enumerate() {
            for earlier in &entries[..i] {
                if earlier.id == entry.id {
                    return Err(RouteTableError::DuplicateId(entry.id.clone()));
                }
                if earlier.path == entry.path {
                    return Err(RouteTableError::DuplicatePath(entry.path.clone()));
                }
            }
        }
        if !entries.is_empty() && !entries.iter().any(|e| e.path == ROOT_PATH) {
            return Err(RouteTableError::MissingRoot);
        }
        Ok(Self { entries })
    }

    /// An empty table. Valid: the navigation bar must render an empty menu
    /// without error.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Entry at a given position in table order.
    pub fn get(&self, index: usize) -> Option<&RouteEntry> {
        self.entries.get(index)
    }

    /// Exact-match lookup by path. No trailing-slash or case
    /// normalization.
    pub fn find_by_path(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Position of the entry with the given path, if any.
    pub fn position_of(&self, path: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }

    /// Leading subset of the table, in order, for condensed menus.
    pub fn leading(&self, count: usize) -> &[RouteEntry] {
        &self.entries[..count.min(self.entries.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, path: &str) -> RouteEntry {
        RouteEntry::new(id, id.to_uppercase(), path)
    }

    #[test]
    fn valid_table_preserves_order() {
        let table = RouteTable::new(vec![
            entry("home", "/"),
            entry("deploy", "/deploy"),
            entry("testes", "/testes"),
        ])
        .unwrap();
        let paths: Vec<&str> = table.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/deploy", "/testes"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let err = RouteTable::new(vec![entry("home", "/"), entry("home", "/outro")]).unwrap_err();
        assert_eq!(err, RouteTableError::DuplicateId("home".into()));
    }

    #[test]
    fn duplicate_path_is_rejected() {
        let err = RouteTable::new(vec![entry("home", "/"), entry("inicio", "/")]).unwrap_err();
        assert_eq!(err, RouteTableError::DuplicatePath("/".into()));
    }

    #[test]
    fn missing_root_is_rejected() {
        let err = RouteTable::new(vec![entry("deploy", "/deploy")]).unwrap_err();
        assert_eq!(err, RouteTableError::MissingRoot);
    }

    #[test]
    fn empty_table_is_valid() {
        let table = RouteTable::empty();
        assert!(table.is_empty());
        assert!(table.find_by_path("/").is_none());
    }

    #[test]
    fn find_by_path_is_exact() {
        let table = RouteTable::new(vec![entry("home", "/"), entry("deploy", "/deploy")]).unwrap();
        assert_eq!(table.find_by_path("/deploy").unwrap().id, "deploy");
        // Trailing slash is a different, unknown path.
        assert!(table.find_by_path("/deploy/").is_none());
        assert!(table.find_by_path("/Deploy").is_none());
    }

    #[test]
    fn leading_clamps_to_table_length() {
        let table = RouteTable::new(vec![entry("home", "/"), entry("deploy", "/deploy")]).unwrap();
        assert_eq!(table.leading(6).len(), 2);
        assert_eq!(table.leading(1)[0].id, "home");
    }
}
