mod app;
mod config;
mod renderer;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use folio_core::carousel::Carousel;
use folio_core::parsers::parse_auto;
use folio_core::svg::render_svg;
use folio_core::views::{content_height, render_career_journey};
use folio_protocol::Viewport;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::{ConfigSource, FolioConfig};

/// Browse a portfolio content snapshot in the terminal.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Snapshot or endpoint response (JSON). Falls back to `content` from
    /// the config file.
    content: Option<PathBuf>,

    /// Write the career journey as SVG to this file and exit.
    #[arg(long, value_name = "OUT")]
    svg: Option<PathBuf>,

    /// Width of the exported SVG.
    #[arg(long, default_value_t = 900.0, requires = "svg")]
    width: f64,

    /// Config file (TOML, or JSON by extension).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn init_logging(config: &FolioConfig, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        // The alternate screen owns stderr while the browser runs.
        None if interactive => {}
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
    Ok(())
}

fn load_content(path: &Path) -> Result<folio_core::model::Portfolio> {
    let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let content =
        parse_auto(&data).with_context(|| format!("failed to load {}", path.display()))?;
    tracing::info!(kind = content.kind(), path = %path.display(), "loaded content");
    Ok(content.into_portfolio())
}

fn export_svg(portfolio: folio_core::model::Portfolio, out: &Path, width: f64, dark: bool) -> Result<()> {
    let carousel = Carousel::career(portfolio.careers);
    let viewport = Viewport::sized(width, 0.0);
    let commands = render_career_journey(&carousel, &viewport);
    let height = content_height(&commands, 0.0);
    std::fs::write(out, render_svg(&commands, width, height, dark))
        .with_context(|| format!("failed to write {}", out.display()))?;
    tracing::info!(path = %out.display(), commands = commands.len(), "wrote svg");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = FolioConfig::load(cli.config.as_deref())?;
    init_logging(&config, cli.svg.is_none())?;
    if source != ConfigSource::Default {
        tracing::debug!(?source, "loaded config");
    }

    let Some(path) = cli.content.or_else(|| config.content.clone()) else {
        bail!("no content given: pass a JSON file or set `content` in folio.toml");
    };
    let portfolio = load_content(&path)?;

    if let Some(out) = &cli.svg {
        return export_svg(portfolio, out, cli.width, config.theme.is_dark());
    }

    let mut app = App::new(portfolio);
    renderer::run_tui(
        &mut app,
        config.theme.is_dark(),
        Duration::from_millis(config.tick_ms.max(10)),
    )
}
