//! Page container: composes one full page view for a location.
//!
//! The container swaps the body subtree based on the resolved route and
//! delegates the content itself to a [`PageSource`]. An unresolved path
//! gets the source's not-found view, no active highlight and no pager;
//! whether that view looks like an error page or something friendlier is
//! the source's choice.

use roteiro_api::{PagerView, RouteTable, ViewNode};

use crate::navbar::{self, NavBarView, NavUiState};
use crate::pager;
use crate::resolver;

/// Content seam: maps a route id to its page body.
///
/// Implementations are pure data suppliers; the container never caches or
/// mutates what they return.
pub trait PageSource {
    /// Body for the page with the given route id, if the source has one.
    fn page(&self, route_id: &str) -> Option<ViewNode>;

    /// Body shown for any unresolved path.
    fn not_found(&self) -> ViewNode {
        ViewNode::group(vec![
            ViewNode::heading(1, "Página não encontrada"),
            ViewNode::muted("O endereço acessado não existe neste documento."),
        ])
    }
}

/// A fully composed page: persistent navigation bar, body, and (for
/// resolved routes) the previous/next pager.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub navbar: NavBarView,
    pub body: ViewNode,
    pub pager: Option<PagerView>,
}

/// The document: a Route Table plus its content source.
pub struct Site<S: PageSource> {
    table: RouteTable,
    source: S,
}

impl<S: PageSource> Site<S> {
    pub fn new(table: RouteTable, source: S) -> Self {
        Self { table, source }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Compose the page for `path` under the given navigation bar state.
    ///
    /// Resolution happens once here; the navigation bar projection and the
    /// pager both key off the same match.
    pub fn view(&self, path: &str, nav: &NavUiState) -> PageView {
        let navbar = navbar::navbar(&self.table, path, nav);

        match resolver::resolve(&self.table, path) {
            Some(entry) => {
                let body = self.source.page(&entry.id).unwrap_or_else(|| {
                    tracing::warn!(route_id = %entry.id, "route has no page content");
                    self.source.not_found()
                });
                PageView {
                    navbar,
                    body,
                    pager: Some(pager::pager(&self.table, path)),
                }
            }
            None => {
                tracing::warn!(%path, "unresolved route, serving not-found view");
                PageView {
                    navbar,
                    body: self.source.not_found(),
                    pager: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roteiro_api::RouteEntry;

    struct StubSource;

    impl PageSource for StubSource {
        fn page(&self, route_id: &str) -> Option<ViewNode> {
            match route_id {
                "home" | "deploy" => Some(ViewNode::heading(1, route_id.to_string())),
                _ => None,
            }
        }
    }

    fn site() -> Site<StubSource> {
        let table = RouteTable::new(vec![
            RouteEntry::new("home", "Introdução", "/"),
            RouteEntry::new("deploy", "Deploy", "/deploy"),
            RouteEntry::new("conclusao", "Conclusão", "/conclusao"),
        ])
        .unwrap();
        Site::new(table, StubSource)
    }

    #[test]
    fn resolved_route_gets_body_and_pager() {
        let page = site().view("/deploy", &NavUiState::default());
        assert_eq!(page.body, ViewNode::heading(1, "deploy"));
        let pager = page.pager.unwrap();
        assert_eq!(pager.previous.unwrap().to, "/");
        assert_eq!(pager.next.unwrap().to, "/conclusao");
        assert_eq!(page.navbar.active_paths(), vec!["/deploy"]);
    }

    #[test]
    fn unresolved_route_gets_not_found_without_pager_or_highlight() {
        let page = site().view("/deploy/", &NavUiState::default());
        assert!(page.pager.is_none());
        assert!(page.navbar.active_paths().is_empty());
        assert_eq!(page.body, StubSource.not_found());
    }

    #[test]
    fn route_without_content_falls_back_to_not_found_body() {
        let page = site().view("/conclusao", &NavUiState::default());
        assert_eq!(page.body, StubSource.not_found());
        // The route itself still resolved: pager and highlight stay.
        assert!(page.pager.is_some());
        assert_eq!(page.navbar.active_paths(), vec!["/conclusao"]);
    }
}
