//! Runtime paths and log level resolution.

use anyhow::{Context, Result};
use std::path::PathBuf;

const DB_FILE_NAME: &str = "planner.sqlite3";
const LOG_DIR_NAME: &str = "logs";

/// Resolved runtime settings for one CLI invocation.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl RuntimeConfig {
    /// Fills unset values from the platform data directory and build mode.
    pub fn resolve(
        db_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        log_level: Option<String>,
    ) -> Result<Self> {
        let db_path = match db_path {
            Some(path) => path,
            None => data_dir()?.join(DB_FILE_NAME),
        };
        let log_dir = match log_dir {
            Some(dir) => dir,
            None => data_dir()?.join(LOG_DIR_NAME),
        };
        let log_level =
            log_level.unwrap_or_else(|| planner_core::default_log_level().to_string());

        Ok(Self {
            db_path,
            log_dir,
            log_level,
        })
    }
}

/// Planner data directory (e.g. ~/.local/share/planner).
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .context("Could not determine local data directory; pass --db and --log-dir")?
        .join("planner");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::RuntimeConfig;
    use std::path::PathBuf;

    #[test]
    fn explicit_values_win() {
        let config = RuntimeConfig::resolve(
            Some(PathBuf::from("/tmp/p.db")),
            Some(PathBuf::from("/tmp/logs")),
            Some("warn".to_string()),
        )
        .unwrap();

        assert_eq!(config.db_path, PathBuf::from("/tmp/p.db"));
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
        assert_eq!(config.log_level, "warn");
    }
}
