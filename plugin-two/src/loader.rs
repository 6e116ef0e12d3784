//! Resource Loader Adapter
//!
//! Wraps the host's load-and-parse capability for the four resource
//! kinds. Loading is fail-soft: a missing context chain or a failed
//! accoutering degrades that one resource to an empty mapping with a
//! fatal-class diagnostic, and the bootstrap carries on. Only a failure
//! inside the host's own loader propagates to the caller.

use crate::logger::Logger;
use crate::store::PluginStore;
use plugin_two_core::{DataMap, PluginError};
use plugin_two_host::{Host, HostError, ResourceKind};

const SCOPE: &str = "plugins.plugin-two.loader";

/// Outcome of one guarded load attempt.
enum LoadFailure {
    /// A guarded precondition failed; degrade to an empty mapping.
    Degraded(PluginError),
    /// The host's resource subsystem itself failed; abort the bootstrap.
    Host(HostError),
}

/// Adapter between the bootstrap and the host's resource subsystem.
pub struct ResourceLoader<'a> {
    host: &'a dyn Host,
    logger: &'a Logger,
}

impl<'a> ResourceLoader<'a> {
    pub fn new(host: &'a dyn Host, logger: &'a Logger) -> Self {
        Self { host, logger }
    }

    /// Load one resource kind from the given path.
    ///
    /// Returns the host's data verbatim (empty is legitimate), or an
    /// empty mapping after logging when the context chain required to
    /// accouter the framework is incomplete. No retries; a degraded load
    /// never aborts the sequence.
    pub async fn load(
        &self,
        store: &PluginStore,
        kind: ResourceKind,
        path: &str,
    ) -> Result<DataMap, HostError> {
        match self.try_load(store, kind, path).await {
            Ok(data) => Ok(data),
            Err(LoadFailure::Degraded(err)) => {
                self.logger.fatal(SCOPE, &format!("FATAL ERROR: {err}")).await;
                Ok(DataMap::new())
            }
            Err(LoadFailure::Host(err)) => Err(err),
        }
    }

    /// The guarded pipeline: each step short-circuits with a typed
    /// failure instead of nesting conditionals.
    async fn try_load(
        &self,
        store: &PluginStore,
        kind: ResourceKind,
        path: &str,
    ) -> Result<DataMap, LoadFailure> {
        let descriptor = store
            .context()
            .ok_or_else(|| LoadFailure::Degraded(PluginError::no_plugin_data(path)))?;
        let context = descriptor
            .framework_context()
            .ok_or_else(|| LoadFailure::Degraded(PluginError::no_host_context()))?;
        let accoutered = self
            .host
            .accouter_framework(context)
            .await
            .unwrap_or(false);
        if !accoutered {
            return Err(LoadFailure::Degraded(PluginError::accouter_failed(path)));
        }
        self.host
            .load_plugin_resource_data(kind, path)
            .await
            .map_err(LoadFailure::Host)
    }
}
