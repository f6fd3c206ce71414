//! Log setup. The terminal is in raw alternate-screen mode while the demo
//! runs, so logs always go to a file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// `<cache_dir>/panes/panes-demo.log`, or the working directory when the
/// platform has no cache directory.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("panes"))
        .unwrap_or_default()
        .join("panes-demo.log")
}

/// Build the filter from `directive`, falling back to `info` when it does
/// not parse. `RUST_LOG` directives are kept.
pub fn filter(directive: &str) -> EnvFilter {
    let directive: Directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log directive '{directive}' ({e}), using 'info'");
        LevelFilter::INFO.into()
    });
    EnvFilter::from_default_env().add_directive(directive)
}

fn open(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
pub fn init(directive: &str, path: &Path) -> std::io::Result<()> {
    let file = open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter(directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
