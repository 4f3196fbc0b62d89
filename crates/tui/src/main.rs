mod config;
mod page;
mod renderer;
mod store;
mod theme;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use folio_core::{MemoryThemeStore, ThemeStore, ViewController};
use tracing_subscriber::EnvFilter;

use crate::store::FileThemeStore;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 || args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: folio [config.json]");
        std::process::exit(1);
    }

    let config_path = args.get(1).map(PathBuf::from);
    let (config, tui) = config::load(config_path.as_deref())?;

    if let Some(log_path) = &tui.log_path {
        init_logging(log_path)?;
    }

    let store: Box<dyn ThemeStore> = match &tui.theme_path {
        Some(path) => Box::new(FileThemeStore::new(path)),
        None => Box::new(MemoryThemeStore::new()),
    };
    let view = ViewController::new(config, store)?;

    renderer::render_tui(view, tui.units_per_row)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
