//! Plugin log sink
//!
//! Mirrors every diagnostic to the console sink (`tracing`) and, once the
//! host configuration has been loaded, appends it to the application's
//! log file. Append failures are reported to the console sink and never
//! propagated; losing a log line must not degrade the bootstrap.

use crate::constants;
use chrono::Local;
use plugin_two_core::{get_nested, DataMap, PluginError};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H:%M:%S%.3f";

/// One parameterized logger for the whole plugin: the verbosity toggle
/// replaces per-module commented-in/out logging variants.
#[derive(Debug, Default)]
pub struct Logger {
    file_path: Option<PathBuf>,
    verbose: bool,
}

impl Logger {
    /// A logger with only the console sink attached.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbosity(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Attach the file sink resolved from the host configuration data.
    /// A configuration without the log file keys leaves the file sink
    /// detached; console logging still works.
    pub fn attach_file_from_configuration(&mut self, configuration: &DataMap) {
        self.file_path = resolve_log_file(configuration);
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Log a message for the given scope. A literal `%%` in the message
    /// is replaced with the scope before emitting.
    pub async fn log(&self, scope: &str, message: &str) {
        let rendered = if message.contains("%%") {
            message.replace("%%", scope)
        } else {
            message.to_string()
        };
        if self.verbose {
            tracing::debug!(scope, "{rendered}");
        }
        self.append_to_file(&rendered).await;
    }

    /// Log a warning-class diagnostic; always reaches the console sink
    /// regardless of verbosity.
    pub async fn warn(&self, scope: &str, message: &str) {
        tracing::warn!(scope, "{message}");
        self.append_to_file(message).await;
    }

    /// Log a fatal-class diagnostic; always reaches the console sink
    /// regardless of verbosity.
    pub async fn fatal(&self, scope: &str, message: &str) {
        tracing::error!(scope, "{message}");
        self.append_to_file(message).await;
    }

    async fn append_to_file(&self, message: &str) {
        let Some(path) = &self.file_path else {
            return;
        };
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let line = format!("{}: {}: {}\r\n", timestamp, constants::PLUGIN_NAME, message);
        let result = async {
            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .await?;
            file.write_all(line.as_bytes()).await?;
            file.flush().await
        }
        .await;
        if let Err(err) = result {
            // Fallback console sink; an unwritable log file is not fatal.
            let diagnostic = append_failure_diagnostic(path, &err);
            tracing::warn!("{diagnostic}");
        }
    }
}

fn append_failure_diagnostic(path: &Path, err: &std::io::Error) -> PluginError {
    PluginError::log_append_failed(&path.display().to_string(), err.to_string())
}

/// Resolve the application log file from the loaded configuration:
/// `<system.clientRootPath>/logs/<system.logFileName>`.
fn resolve_log_file(configuration: &DataMap) -> Option<PathBuf> {
    let root = get_nested(
        configuration,
        &[constants::CONFIG_SYSTEM_KEY, constants::CONFIG_CLIENT_ROOT_PATH_KEY],
    )?
    .as_str()?;
    let name = get_nested(
        configuration,
        &[constants::CONFIG_SYSTEM_KEY, constants::CONFIG_LOG_FILE_NAME_KEY],
    )?
    .as_str()?;
    Some(Path::new(root).join(constants::LOGS_DIR).join(name))
}

/// Install a plain console subscriber for hosts and demos that have none.
/// Safe to call more than once; later calls are ignored.
pub fn install_console_sink() {
    let _ = tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).try_init();
}
