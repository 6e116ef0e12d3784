//! Bootstrap Orchestrator
//!
//! The single entry point the host platform invokes to load this plugin.
//! The sequence is linear: resolve the deployment environment, assemble
//! the descriptor, build both registries, reset the aggregate store,
//! persist the descriptor, load each resource kind through the fail-soft
//! adapter, and hand the whole aggregate back. Partial aggregates are
//! returned deliberately — a host that can use a subset of the plugin's
//! features is better served than one facing a hard failure.

use crate::commands::plugin_commands_registry;
use crate::descriptor::{Mode, PluginDescriptor};
use crate::loader::ResourceLoader;
use crate::logger::Logger;
use crate::registry::{CommandRegistry, RuleRegistry};
use crate::rules::plugin_rules_registry;
use crate::store::PluginStore;
use plugin_two_core::{DataValue, PluginError};
use plugin_two_host::{Host, HostError, ResourceKind};
use std::path::PathBuf;
use std::sync::Arc;

const SCOPE: &str = "plugins.plugin-two.bootstrap";

/// Everything the plugin hands back to the host: both registries plus
/// the aggregated plugin data. The registries hold function objects, so
/// only the data portion is serializable.
#[derive(Debug)]
pub struct PluginExport {
    pub plugin_business_rules: RuleRegistry,
    pub plugin_commands: CommandRegistry,
    pub data: PluginStore,
}

/// Configurable bootstrap. The defaults match what the host platform
/// requests today: no themes, quiet console logging.
pub struct Bootstrap {
    host: Arc<dyn Host>,
    load_themes: bool,
    verbose: bool,
    mode_override: Option<Mode>,
}

impl Bootstrap {
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self {
            host,
            load_themes: false,
            verbose: false,
            mode_override: None,
        }
    }

    /// Also load the optional themes resource kind.
    pub fn with_themes(mut self, load_themes: bool) -> Self {
        self.load_themes = load_themes;
        self
    }

    /// Mirror every diagnostic to the console sink.
    pub fn with_verbose_logging(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Force a deployment mode instead of consulting the environment.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode_override = Some(mode);
        self
    }

    /// Run the bootstrap sequence with the host-supplied metadata.
    ///
    /// Fails only when the host's own resource subsystem errors; every
    /// plugin-side problem degrades to empty data with a logged
    /// diagnostic.
    pub async fn run(&self, host_meta_data: DataValue) -> Result<PluginExport, HostError> {
        let mut logger = Logger::new().with_verbosity(self.verbose);

        // Step 1: resolve the deployment environment.
        let mode = match self.mode_override.or_else(Mode::from_env) {
            Some(mode) => mode,
            None => {
                let warning = PluginError::env_unresolved();
                logger.warn(SCOPE, &warning.to_string()).await;
                Mode::Development
            }
        };

        // Step 2: assemble the descriptor with the host metadata verbatim.
        let root_path = plugin_root_path();
        let descriptor = PluginDescriptor::assemble(host_meta_data, &root_path, mode);
        tracing::debug!(?mode, root = %root_path.display(), "plugin descriptor assembled");

        // Step 3: build both registries before anything is exposed.
        let plugin_business_rules = plugin_rules_registry();
        let plugin_commands = plugin_commands_registry();

        // Resource paths are fixed once the descriptor exists; resolve
        // them before it moves into the store.
        let mut loads = vec![
            ResourceKind::Configuration,
            ResourceKind::CommandAliases,
            ResourceKind::Workflows,
        ];
        if self.load_themes {
            loads.push(ResourceKind::Themes);
        }
        let loads: Vec<(ResourceKind, String)> = loads
            .into_iter()
            .map(|kind| (kind, descriptor.resource_path(kind).to_string()))
            .collect();

        // Steps 4-5: fresh store, then persist the descriptor as context.
        let mut store = PluginStore::new();
        store.reset();
        store.set_context(descriptor);

        // Steps 6-8: load each resource kind sequentially. The loads are
        // order-insensitive among themselves, but the configuration comes
        // first so the log file sink can be attached from it.
        for (kind, path) in loads {
            let loader = ResourceLoader::new(self.host.as_ref(), &logger);
            let data = loader.load(&store, kind, &path).await?;
            logger
                .log(SCOPE, &format!("loaded {} entries for {kind} from {path}", data.len()))
                .await;
            store.set_resource(kind, data);
            if kind == ResourceKind::Configuration {
                logger.attach_file_from_configuration(store.configuration());
            }
        }

        // Step 9: return the full aggregate.
        Ok(PluginExport {
            plugin_business_rules,
            plugin_commands,
            data: store,
        })
    }
}

/// Initialize the plugin and collect all of its data for the host.
///
/// This is the plugin's sole externally invoked entry point.
pub async fn initialize_plugin(
    host: Arc<dyn Host>,
    host_meta_data: DataValue,
) -> Result<PluginExport, HostError> {
    Bootstrap::new(host).run(host_meta_data).await
}

/// The plugin's own root directory. Resource paths in the descriptor are
/// resolved relative to this.
fn plugin_root_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
