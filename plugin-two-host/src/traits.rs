//! Host platform traits
//!
//! The platform that loads this plugin provides the resource loading and
//! framework re-hydration capabilities behind this trait. The plugin never
//! touches the disk itself.

use crate::ResourceKind;
use async_trait::async_trait;
use plugin_two_core::{DataMap, DataValue};
use thiserror::Error;

/// A failure reported by the host's own subsystems.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("host resource subsystem unreachable: {0}")]
    Unreachable(String),
    #[error("host failed to load {kind} resource data from {path}: {details}")]
    LoadFailed {
        kind: ResourceKind,
        path: String,
        details: String,
    },
    #[error("host failed to accouter a framework instance: {0}")]
    AccouterFailed(String),
}

/// Capabilities the host platform exposes to its plugins.
#[async_trait]
pub trait Host: Send + Sync {
    /// Re-hydrate a fully functional framework instance from a context
    /// object previously exported by the host application instance.
    ///
    /// Returns `Ok(false)` when the context object is not sufficient to
    /// rebuild a cooperating instance.
    async fn accouter_framework(&self, context: &DataValue) -> Result<bool, HostError>;

    /// Load and parse the plugin resource data of the given kind from the
    /// given path, returning the structured result.
    ///
    /// An empty mapping is a legitimate outcome when nothing exists at
    /// `path`.
    async fn load_plugin_resource_data(
        &self,
        kind: ResourceKind,
        path: &str,
    ) -> Result<DataMap, HostError>;
}
