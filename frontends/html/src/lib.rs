//! Static HTML export frontend.
//!
//! Consumes the composed page views from `roteiro-core` and turns them into
//! a directory of plain HTML files, one per Route Table entry plus the
//! not-found page. The binary in `main.rs` is a thin CLI over [`export`].

pub mod export;
pub mod render;

pub use export::{export, file_name, page_title};
pub use render::render_page;
