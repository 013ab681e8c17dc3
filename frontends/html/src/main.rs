use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use roteiro_core::NavUiState;
use roteiro_html::{export, page_title, render_page};

/// Export the pagamento-system documentation as static HTML.
#[derive(Parser)]
#[command(name = "roteiro-html", version)]
struct Cli {
    /// Output directory for the exported site.
    #[arg(long, default_value = "dist")]
    out: PathBuf,

    /// Render a single route path to stdout instead of exporting.
    #[arg(long)]
    route: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roteiro_html=info,roteiro_core=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let site = roteiro_pages::document()?;

    match cli.route {
        Some(path) => {
            let page = site.view(&path, &NavUiState::default());
            let title = site
                .table()
                .find_by_path(&path)
                .map(|e| e.title.as_str())
                .unwrap_or("Página não encontrada");
            print!("{}", render_page(&page, &page_title(title)));
        }
        None => {
            let written = export(&site, &cli.out)?;
            tracing::info!(files = written, out = %cli.out.display(), "export complete");
        }
    }

    Ok(())
}
