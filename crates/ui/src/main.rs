#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    /// Desktop browser for a portfolio content snapshot.
    #[derive(Parser)]
    #[command(name = "folio-ui", version)]
    struct Cli {
        /// Snapshot or listing JSON to open on start.
        content: Option<std::path::PathBuf>,
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let content = cli
        .content
        .map(|path| std::fs::read(&path).with_context(|| format!("reading {}", path.display())))
        .transpose()?;

    folio_ui::run_native(content).map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(target_arch = "wasm32")]
fn main() {}
