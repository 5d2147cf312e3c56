use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "ATINTO_LOG";

/// `~/.local/state/atinto/atinto.log`
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".local");
        path.push("state");
        path.push("atinto");
        path.push("atinto.log");
        path
    })
}

fn open_log(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to the log file. The terminal belongs
/// to the UI, so nothing is written to stdout or stderr. Returns the log path,
/// or `None` when logging is off because the file could not be opened.
pub fn init() -> Option<PathBuf> {
    let path = default_log_path()?;
    let file = open_log(&path).ok()?;

    let installed = tracing_subscriber::registry()
        .with(filter())
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .is_ok();

    installed.then_some(path)
}
