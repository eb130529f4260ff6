mod config;

pub use config::{Config, OutputConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the directory holding Timecraft's configuration.
///
/// `TIMECRAFT_HOME` overrides the location outright. Otherwise this is
/// `~/.config/timecraft/`, or `~/.config/timecraft-dev/` when
/// `TIMECRAFT_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("TIMECRAFT_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("TIMECRAFT_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("timecraft-dev")
            } else {
                base_dir.join("timecraft")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
