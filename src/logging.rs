//! Tracing subscriber setup
//!
//! The terminal UI owns stdout and stderr while it runs, so interactive
//! sessions only log when a file is given. Headless runs log to that file
//! too when one is given, and to stderr otherwise. The filter comes from
//! `SORTTY_LOG` and defaults to `info`.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const FILTER_ENV: &str = "SORTTY_LOG";

/// Where a session's logs go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Off,
}

impl LogTarget {
    pub fn choose(log_file: Option<&Path>, headless: bool) -> Self {
        match (log_file, headless) {
            (Some(path), _) => LogTarget::File(path.to_path_buf()),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Off,
        }
    }
}

/// Install the subscriber for `target`
pub fn init(target: &LogTarget) -> io::Result<()> {
    match target {
        LogTarget::File(path) => init_file(path),
        LogTarget::Stderr => {
            init_stderr();
            Ok(())
        }
        LogTarget::Off => Ok(()),
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Send logs to `path`, truncating it
pub fn init_file(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    // A subscriber may already be installed (tests); keep that one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// Send logs to stderr
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(io::stderr)
        .try_init();
}
