//! File logging.
//!
//! The terminal belongs to the UI, so log records go to
//! `<cache dir>/folio.log`. Logging stays off unless `RUST_LOG` is set.

use std::{fs::File, path::PathBuf};

use directories::ProjectDirs;

const LOG_FILE: &str = "folio.log";

/// Start logging if `RUST_LOG` is set. Returns the log file path.
pub fn init() -> Option<PathBuf> {
    std::env::var_os("RUST_LOG")?;

    let dir = ProjectDirs::from("", "", "folio")?.cache_dir().to_path_buf();
    std::fs::create_dir_all(&dir).ok()?;
    let path = dir.join(LOG_FILE);
    let file = File::create(&path).ok()?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .ok()?;
    log::info!("logging to {}", path.display());
    Some(path)
}
