//! Navigation and routing behavior
//!
//! Everything with behavior in the workspace lives here, and all of it is
//! synchronous and single-threaded:
//!
//! - `resolver`: exact-match location resolution against the Route Table
//! - `navbar`: the navigation bar's collapse/expand state machine and its
//!   view projection
//! - `pager`: previous/next traversal derived from table adjacency
//! - `container`: the page container, composing navigation bar, page body
//!   and pager into one `PageView`, with a not-found fallback
//! - `session`: a client runtime model (current path + nav bar state)
//!
//! Page content itself is out of scope; it arrives through the
//! [`container::PageSource`] seam.

pub mod container;
pub mod navbar;
pub mod pager;
pub mod resolver;
pub mod session;

pub use container::{PageSource, PageView, Site};
pub use navbar::{NavBarView, NavUiState};
pub use session::Session;
