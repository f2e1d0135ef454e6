use anyhow::{Context, Result};
use chrono::{Local, Utc};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Path of the file the process-wide `fern` dispatch writes to, set once.
static FILE_LOGGING: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application
///
/// Entries are always kept in memory for the logs dialog. When file logging
/// is enabled they are also emitted through the `log` facade, which `fern`
/// routes to the log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
            log_file: None,
        }
    }

    /// Build a logger from the `[logging] enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
        if enabled {
            let path = Self::get_log_file_path()?;
            init_file_logging(&path)?;
            logger.enabled = true;
            logger.log_file = Some(path);
        }
        Ok(logger)
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        if self.enabled {
            log::info!(target: "taskboard", "{}", message);
        }

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Location of the log file under the user's local data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        let base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
        Ok(base.join("taskboard").join("taskboard.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the `fern` file dispatch. Later calls reuse the first installation.
fn init_file_logging(path: &Path) -> Result<()> {
    FILE_LOGGING.get_or_try_init(|| -> Result<PathBuf> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} {:<5} [{}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Info)
            .chain(
                fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?,
            )
            .apply()
            .map_err(|e| anyhow::anyhow!("Failed to install file logger: {}", e))?;

        Ok(path.to_path_buf())
    })?;
    Ok(())
}
