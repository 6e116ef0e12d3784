//! Structured diagnostics for the fail-soft bootstrap
//!
//! Errors here never abort the bootstrap. They are values carried to the
//! log sink while the affected resource degrades to an empty mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard diagnostic codes (machine-readable)
pub mod codes {
    /// The aggregate store holds no plugin data at all.
    pub const NO_PLUGIN_DATA: &str = "NO_PLUGIN_DATA";
    /// The stored host metadata carries no nested framework context object.
    pub const NO_HOST_CONTEXT: &str = "NO_HOST_CONTEXT";
    /// The host refused or failed to re-hydrate a framework instance.
    pub const ACCOUTER_FAILED: &str = "ACCOUTER_FAILED";
    /// No deployment environment could be determined.
    pub const ENV_UNRESOLVED: &str = "ENV_UNRESOLVED";
    /// Appending to the log file failed.
    pub const LOG_APPEND_FAILED: &str = "LOG_APPEND_FAILED";
}

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Bootstrap continued with a safe default
    Warning,
    /// One resource kind degraded to an empty mapping
    Fatal,
}

/// Structured diagnostic value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginError {
    /// Machine-readable code
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// The resource path involved, when one was attempted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl PluginError {
    /// Create a new fatal-class diagnostic
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            severity: Severity::Fatal,
        }
    }

    /// Builder: record the attempted path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Diagnostic Constructors ==========

    pub fn no_plugin_data(path: &str) -> Self {
        Self::new(
            codes::NO_PLUGIN_DATA,
            "Unable to load the specified plugin resource, no data for the plugin",
        )
        .with_path(path)
    }

    pub fn no_host_context() -> Self {
        Self::new(
            codes::NO_HOST_CONTEXT,
            "Unable to load the specified plugin resource, no host framework context data object",
        )
    }

    pub fn accouter_failed(path: &str) -> Self {
        Self::new(
            codes::ACCOUTER_FAILED,
            "Unable to load the specified plugin resource path, host framework data dependency failure",
        )
        .with_path(path)
    }

    pub fn log_append_failed(path: &str, details: impl Into<String>) -> Self {
        Self::new(codes::LOG_APPEND_FAILED, details)
            .with_path(path)
            .with_severity(Severity::Warning)
    }

    pub fn env_unresolved() -> Self {
        Self::new(
            codes::ENV_UNRESOLVED,
            "No deployment environment found, defaulting to the development environment",
        )
        .with_severity(Severity::Warning)
    }
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}: {}", self.code, self.message, path),
            None => write!(f, "{}: {}", self.code, self.message),
        }
    }
}

impl std::error::Error for PluginError {}
