mod cli;
mod logging;
mod runtime;
mod text_pane;

use std::process::ExitCode;

use panes_common::PanesError;
use panes_config::PanesConfig;
use panes_grid::{GridManager, Pane};

use text_pane::TextPane;

/// One text pane per cell, `counts[i]` cells in row `i`.
fn demo_rows(counts: &[usize]) -> Vec<Vec<Box<dyn Pane>>> {
    counts
        .iter()
        .enumerate()
        .map(|(row, &cells)| {
            (0..cells)
                .map(|col| {
                    Box::new(TextPane::new(format!("pane {row},{col}"))) as Box<dyn Pane>
                })
                .collect()
        })
        .collect()
}

fn run(args: cli::Args) -> Result<(), PanesError> {
    let loaded = match &args.config {
        Some(path) => panes_config::load_config_from(path),
        None => panes_config::load_config(),
    };
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (PanesConfig::default(), Some(e)),
    };

    // Logging settings come from the config, so it is loaded first and any
    // failure is reported once the subscriber exists.
    let directive = args.log_level.as_deref().unwrap_or(&config.logging.level);
    let log_path = args
        .log_file
        .clone()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(logging::default_log_path);
    logging::init(directive, &log_path)?;

    tracing::info!("panes-demo v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    let grid = GridManager::with_config(demo_rows(&args.layout), &config)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(runtime::run(grid))?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("panes-demo: {e}");
            ExitCode::FAILURE
        }
    }
}
