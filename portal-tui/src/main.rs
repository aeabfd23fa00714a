//! `pcb-portal`: browse board scans and schematics from the terminal.

use anyhow::Context;
use catalog::{filter_indices, Catalog, SCHEMATIC_MARKER};
use clap::Parser;
use portal_tui::config::{PortalConfig, LOG_FILE_PREFIX};
use portal_tui::report::check_assets;
use portal_tui::ui::{self, theme::Theme};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pcb-portal", about = "Terminal browser for PCB scans and schematics")]
struct Cli {
    /// Asset base: a directory or an http(s) URL. Overrides PCB_PORTAL_ASSETS.
    #[arg(long, value_name = "BASE")]
    assets: Option<String>,

    /// JSON board table to use instead of the built-in one.
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Directory for the daily log file.
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Color theme, `dark` or `light`.
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,

    /// Print the catalog and exit instead of starting the TUI.
    #[arg(long)]
    list: bool,

    /// Filter applied to `--list`.
    #[arg(long, value_name = "TERM", requires = "list")]
    search: Option<String>,

    /// With `--list`, report which scans and schematics the asset base has.
    #[arg(long, requires = "list")]
    check: bool,
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Ok(Catalog::default()),
    }
}

fn print_catalog(catalog: &Catalog, term: &str) {
    for index in filter_indices(catalog.entries(), term) {
        let Some(entry) = catalog.get(index) else {
            continue;
        };
        let marker = if entry.has_schematic {
            SCHEMATIC_MARKER
        } else {
            " "
        };
        println!("{} {:<10} {}", marker, entry.name, entry.description);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = PortalConfig::resolve(cli.assets, cli.catalog, cli.log_dir, cli.theme);

    // Set up tracing with file output; the terminal belongs to the TUI.
    std::fs::create_dir_all(&config.log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(?config, "PCB portal starting up");

    let catalog = load_catalog(config.catalog_path.as_ref())?;

    let term = cli.search.as_deref().unwrap_or("");
    if cli.list && !cli.check {
        print_catalog(&catalog, term);
        return Ok(());
    }

    let source = asset_client::open_source(&config.asset_base)
        .with_context(|| format!("Invalid asset base {:?}", config.asset_base))?;

    if cli.list {
        let entries = filter_indices(catalog.entries(), term)
            .into_iter()
            .filter_map(|index| catalog.get(index));
        println!("Assets: {}", source.describe());
        for row in check_assets(source.as_ref(), entries).await {
            println!("{}", row.summary());
        }
        return Ok(());
    }

    println!("PCB Portal - {} boards", catalog.len());
    println!("Assets: {}", source.describe());
    println!(
        "Debug logs: {}/{}.YYYY-MM-DD",
        config.log_dir.display(),
        LOG_FILE_PREFIX
    );

    ui::run_app(catalog, source, Theme::from_preference(Some(&config.theme))).await?;

    tracing::info!("PCB portal shutting down");
    Ok(())
}
