//! Data-model types for the roteiro documentation engine
//!
//! This crate defines the two vocabularies shared by every consumer:
//!
//! - `route`: the Route Table, the fixed ordered list of pages that make
//!   up the document, with lookup by path and by position.
//! - `view`: the presentational view tree, plain serializable nodes that a
//!   frontend renders. The backend side of the workspace produces view
//!   trees; frontends only walk them.
//!
//! Nothing in here performs I/O or holds mutable state.

pub mod route;
pub mod view;

pub use route::{RouteEntry, RouteTable, RouteTableError};
pub use view::{CardView, LinkView, PagerView, SectionView, ViewNode};
