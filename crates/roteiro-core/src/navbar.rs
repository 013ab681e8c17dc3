//! Navigation bar: collapse/expand state machine and view projection.
//!
//! The bar has exactly two UI states: `Collapsed` (the default on every
//! viewport) and `Expanded`. The menu button toggles between them, and
//! following any route link always lands back in `Collapsed`. Viewport
//! width never touches the state: on wide viewports the condensed strip is
//! always visible regardless of it, and the layout alone decides what to
//! show.
//!
//! The projection is a pure function of the Route Table, the current path
//! and the state; it owns no data and produces plain view structs.

use serde::{Deserialize, Serialize};

use roteiro_api::{LinkView, RouteTable};

use crate::resolver;

/// How many leading table entries the condensed (wide-viewport) strip
/// shows.
pub const CONDENSED_LEN: usize = 6;

/// Brand link label; the brand always targets the root path.
pub const BRAND_TITLE: &str = "Sistema de Pagamentos";

/// The fixed outbound repository link shown in both views.
pub const REPOSITORY_URL: &str = "https://github.com/swilliamsilva/pagamento-system";
pub const REPOSITORY_LABEL: &str = "GitHub";

/// Local UI state of one navigation bar instance.
///
/// Created on mount, owned exclusively by the bar; nothing else mutates
/// it. Default is collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavUiState {
    expanded: bool,
}

impl NavUiState {
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Menu-button activation: Collapsed ⇄ Expanded.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Following a route link collapses the menu, whatever state it was
    /// in.
    pub fn collapse(&mut self) {
        self.expanded = false;
    }
}

/// Projected navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavBarView {
    /// Brand link to the root page.
    pub brand: LinkView,

    /// The first [`CONDENSED_LEN`] table entries, in table order. Always
    /// projected; layout decides when to show it.
    pub condensed: Vec<LinkView>,

    /// Fixed outbound repository link, present in both views.
    pub external: LinkView,

    /// Full entry list, projected only while the state is expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel: Option<Vec<LinkView>>,
}

impl NavBarView {
    /// Links of the bar that are marked active (zero or one).
    pub fn active_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self
            .condensed
            .iter()
            .chain(self.panel.iter().flatten())
            .filter(|l| l.active)
            .map(|l| l.to.as_str())
            .collect();
        paths.dedup();
        paths
    }
}

/// Project the navigation bar for the current location and state.
///
/// The entry whose path equals the resolver's match is marked active;
/// an unresolved path marks nothing. An empty table projects an empty
/// bar.
pub fn navbar(table: &RouteTable, current_path: &str, state: &NavUiState) -> NavBarView {
    let active = resolver::resolve(table, current_path).map(|e| e.path.as_str());

    let link = |entry: &roteiro_api::RouteEntry| {
        LinkView::internal(&entry.path, &entry.title).with_active(active == Some(entry.path.as_str()))
    };

    let condensed = table.leading(CONDENSED_LEN).iter().map(link).collect();

    let panel = state
        .expanded()
        .then(|| table.iter().map(link).collect());

    NavBarView {
        brand: LinkView::internal("/", BRAND_TITLE),
        condensed,
        external: LinkView::external(REPOSITORY_URL, REPOSITORY_LABEL),
        panel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roteiro_api::RouteEntry;

    fn table(n: usize) -> RouteTable {
        let mut entries = vec![RouteEntry::new("home", "Introdução", "/")];
        for i in 1..n {
            entries.push(RouteEntry::new(
                format!("page-{i}"),
                format!("Página {i}"),
                format!("/page-{i}"),
            ));
        }
        RouteTable::new(entries).unwrap()
    }

    #[test]
    fn default_state_is_collapsed() {
        assert!(!NavUiState::default().expanded());
    }

    #[test]
    fn toggle_twice_round_trips_to_collapsed() {
        let mut state = NavUiState::default();
        state.toggle();
        assert!(state.expanded());
        state.toggle();
        assert!(!state.expanded());
    }

    #[test]
    fn collapse_is_idempotent() {
        let mut state = NavUiState::default();
        state.collapse();
        assert!(!state.expanded());
        state.toggle();
        state.collapse();
        state.collapse();
        assert!(!state.expanded());
    }

    #[test]
    fn condensed_strip_is_first_six_in_table_order() {
        let bar = navbar(&table(12), "/page-9", &NavUiState::default());
        let targets: Vec<&str> = bar.condensed.iter().map(|l| l.to.as_str()).collect();
        assert_eq!(
            targets,
            vec!["/", "/page-1", "/page-2", "/page-3", "/page-4", "/page-5"]
        );
        // Active entry outside the strip does not change its contents.
        assert!(bar.condensed.iter().all(|l| !l.active));
    }

    #[test]
    fn panel_only_projected_while_expanded() {
        let table = table(12);
        let collapsed = navbar(&table, "/", &NavUiState::default());
        assert!(collapsed.panel.is_none());

        let mut state = NavUiState::default();
        state.toggle();
        let expanded = navbar(&table, "/", &state);
        assert_eq!(expanded.panel.as_ref().unwrap().len(), 12);
    }

    #[test]
    fn exactly_one_link_active_for_known_path() {
        let mut state = NavUiState::default();
        state.toggle();
        let bar = navbar(&table(12), "/page-3", &state);
        assert_eq!(bar.active_paths(), vec!["/page-3"]);
    }

    #[test]
    fn no_link_active_for_unknown_path() {
        let mut state = NavUiState::default();
        state.toggle();
        let bar = navbar(&table(12), "/does-not-exist", &state);
        assert!(bar.active_paths().is_empty());
    }

    #[test]
    fn external_link_present_in_both_views() {
        let table = table(12);
        let collapsed = navbar(&table, "/", &NavUiState::default());
        assert!(collapsed.external.external);
        assert_eq!(collapsed.external.to, REPOSITORY_URL);

        let mut state = NavUiState::default();
        state.toggle();
        let expanded = navbar(&table, "/", &state);
        assert_eq!(expanded.external.to, REPOSITORY_URL);
    }

    #[test]
    fn empty_table_projects_empty_bar() {
        let bar = navbar(&RouteTable::empty(), "/", &NavUiState::default());
        assert!(bar.condensed.is_empty());
        assert!(bar.active_paths().is_empty());
    }
}
