//! Walks the Route Table and writes one HTML file per page.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use roteiro_core::navbar::BRAND_TITLE;
use roteiro_core::{NavUiState, PageSource, Site};

use crate::render::render_page;

/// Placeholder location used to render the not-found page; it must never
/// resolve against the table.
const NOT_FOUND_PROBE: &str = "/__nao-encontrada__";

/// File name for a route path: `/` → `index.html`, `/deploy` →
/// `deploy.html`.
pub fn file_name(path: &str) -> String {
    match path.trim_start_matches('/') {
        "" => "index.html".to_string(),
        rest => format!("{rest}.html"),
    }
}

/// Document title shown for one page.
pub fn page_title(entry_title: &str) -> String {
    format!("{entry_title} — {BRAND_TITLE}")
}

/// Export every route of the site, plus `404.html`, into `out_dir`.
///
/// Pages are rendered with a freshly mounted (collapsed) navigation bar.
/// Returns the number of files written.
pub fn export<S: PageSource>(site: &Site<S>, out_dir: &Path) -> Result<usize> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let nav = NavUiState::default();
    let mut written = 0;

    for entry in site.table().iter() {
        let page = site.view(&entry.path, &nav);
        let html = render_page(&page, &page_title(&entry.title));
        let file = out_dir.join(file_name(&entry.path));
        fs::write(&file, html).with_context(|| format!("writing {}", file.display()))?;
        tracing::info!(path = %entry.path, file = %file.display(), "exported page");
        written += 1;
    }

    let not_found = site.view(NOT_FOUND_PROBE, &nav);
    let html = render_page(&not_found, &page_title("Página não encontrada"));
    let file = out_dir.join("404.html");
    fs::write(&file, html).with_context(|| format!("writing {}", file.display()))?;
    tracing::info!(file = %file.display(), "exported not-found page");
    written += 1;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_index() {
        assert_eq!(file_name("/"), "index.html");
    }

    #[test]
    fn nested_path_maps_to_flat_html_file() {
        assert_eq!(file_name("/visao-geral-arquitetura"), "visao-geral-arquitetura.html");
    }
}
