//! Client runtime model: current location plus the navigation bar's local
//! state.
//!
//! Everything runs synchronously on one execution context; each event
//! (menu toggle, link activation) is a plain method call that completes
//! before the next one starts. The session never validates the paths it is
//! sent; unknown locations are the page container's problem.

use crate::navbar::NavUiState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current_path: String,
    nav: NavUiState,
}

impl Session {
    /// Open a session at the given location with a freshly mounted
    /// (collapsed) navigation bar.
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            current_path: initial_path.into(),
            nav: NavUiState::default(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn nav(&self) -> &NavUiState {
        &self.nav
    }

    /// Menu-button activation.
    pub fn toggle_menu(&mut self) {
        self.nav.toggle();
    }

    /// Activate a route link: navigate to its path and collapse the menu.
    pub fn follow(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
        self.nav.collapse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_collapsed() {
        let session = Session::new("/");
        assert_eq!(session.current_path(), "/");
        assert!(!session.nav().expanded());
    }

    #[test]
    fn follow_while_expanded_always_collapses() {
        for target in ["/deploy", "/testes", "/does-not-exist"] {
            let mut session = Session::new("/");
            session.toggle_menu();
            assert!(session.nav().expanded());
            session.follow(target);
            assert_eq!(session.current_path(), target);
            assert!(!session.nav().expanded());
        }
    }

    #[test]
    fn follow_while_collapsed_stays_collapsed() {
        let mut session = Session::new("/");
        session.follow("/deploy");
        assert!(!session.nav().expanded());
    }
}
