//! Sequential navigator: previous/next traversal over the Route Table.
//!
//! Adjacency comes straight from table order, one source of truth instead
//! of each page hardcoding its own neighbors. The first entry has no
//! previous, the last no next, and an unknown path has neither.

use roteiro_api::{LinkView, PagerView, RouteEntry, RouteTable};

/// Adjacent entries of the page at `path`: `(previous, next)`.
pub fn neighbors<'a>(
    table: &'a RouteTable,
    path: &str,
) -> (Option<&'a RouteEntry>, Option<&'a RouteEntry>) {
    match table.position_of(path) {
        Some(i) => {
            let previous = i.checked_sub(1).and_then(|p| table.get(p));
            let next = table.get(i + 1);
            (previous, next)
        }
        None => (None, None),
    }
}

/// Project the previous/next controls for the page at `path`.
///
/// Activating either control navigates to the target path; it changes no
/// other state.
pub fn pager(table: &RouteTable, path: &str) -> PagerView {
    let (previous, next) = neighbors(table, path);
    PagerView {
        previous: previous.map(|e| LinkView::internal(&e.path, &e.title)),
        next: next.map(|e| LinkView::internal(&e.path, &e.title)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(vec![
            RouteEntry::new("home", "Introdução", "/"),
            RouteEntry::new("observabilidade", "Observabilidade", "/observabilidade"),
            RouteEntry::new("mensageria", "Mensageria", "/mensageria"),
            RouteEntry::new("resiliencia", "Resiliência", "/resiliencia"),
        ])
        .unwrap()
    }

    #[test]
    fn first_entry_has_no_previous() {
        let table = table();
        let (previous, next) = neighbors(&table, "/");
        assert!(previous.is_none());
        assert_eq!(next.unwrap().id, "observabilidade");
    }

    #[test]
    fn last_entry_has_no_next() {
        let table = table();
        let (previous, next) = neighbors(&table, "/resiliencia");
        assert_eq!(previous.unwrap().id, "mensageria");
        assert!(next.is_none());
    }

    #[test]
    fn interior_entry_targets_both_neighbors() {
        let view = pager(&table(), "/mensageria");
        assert_eq!(view.previous.unwrap().to, "/observabilidade");
        assert_eq!(view.next.unwrap().to, "/resiliencia");
    }

    #[test]
    fn pager_labels_carry_entry_titles() {
        let view = pager(&table(), "/mensageria");
        assert_eq!(view.previous.unwrap().label, "Observabilidade");
        assert_eq!(view.next.unwrap().label, "Resiliência");
    }

    #[test]
    fn unknown_path_has_no_controls() {
        let view = pager(&table(), "/mensageria/");
        assert!(view.previous.is_none());
        assert!(view.next.is_none());
    }
}
