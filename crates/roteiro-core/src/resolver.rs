//! Location resolution: URL path → active Route Table entry.
//!
//! Matching is exact string equality, deliberately. The table's paths carry
//! no query strings or fragments, and trailing-slash variants are treated
//! as genuinely unknown locations rather than silently normalized; the
//! page container's not-found fallback handles them like any other
//! unresolved path.

use roteiro_api::{RouteEntry, RouteTable};

/// Resolve the current URL path to its Route Table entry, if any.
///
/// Pure and deterministic; called once per navigation.
pub fn resolve<'a>(table: &'a RouteTable, path: &str) -> Option<&'a RouteEntry> {
    table.find_by_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(vec![
            RouteEntry::new("home", "Introdução", "/"),
            RouteEntry::new("deploy", "Deploy", "/deploy"),
        ])
        .unwrap()
    }

    #[test]
    fn every_table_path_resolves_to_its_own_entry() {
        let table = table();
        for entry in table.iter() {
            let resolved = resolve(&table, &entry.path).unwrap();
            assert_eq!(resolved.id, entry.id);
        }
    }

    #[test]
    fn unknown_path_resolves_to_none() {
        assert!(resolve(&table(), "/does-not-exist").is_none());
    }

    #[test]
    fn trailing_slash_is_not_normalized() {
        assert!(resolve(&table(), "/deploy/").is_none());
    }

    #[test]
    fn empty_table_never_resolves() {
        assert!(resolve(&RouteTable::empty(), "/").is_none());
    }
}
