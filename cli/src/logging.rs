//! Logging setup for the command line and the terminal UI.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use remunera_core::repository::file::data_dir;
use tracing::trace;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "remunera.log";

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn log_file_path(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    Ok(data_dir(base_dir)?.join(LOG_FILE_NAME))
}

/// `RUST_LOG` wins over `-v`, which wins over the level from the settings file.
/// With `log_file` set (TUI mode) output is appended there instead of stderr.
pub fn init_logging(verbose: u8, configured: Option<&str>, log_file: Option<PathBuf>) -> Result<()> {
    let level = match (verbose, configured) {
        (0, Some(level)) => level,
        _ => level_for(verbose),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(7), "trace");
    }
}
