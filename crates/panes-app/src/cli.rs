use std::path::PathBuf;

use clap::Parser;

/// Panes demo: a grid of text panes navigated with the keyboard.
#[derive(Parser, Debug)]
#[command(name = "panes-demo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug`, `panes_grid=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log file path override.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Panes per row, top to bottom.
    #[arg(long, value_delimiter = ',', default_values_t = [2, 3])]
    pub layout: Vec<usize>,
}

pub fn parse() -> Args {
    Args::parse()
}
