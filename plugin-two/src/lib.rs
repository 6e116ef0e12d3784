//! plugin-two
//!
//! A plugin for the host platform. It registers two business rules and
//! two commands, loads plugin-scoped configuration, command alias,
//! workflow, and (optionally) theme data through the host's resource
//! subsystem, and hands the aggregate back through one initialization
//! call:
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use plugin_two::initialize_plugin;
//! # use plugin_two_host::Host;
//! # async fn load(host: Arc<dyn Host>) {
//! let export = initialize_plugin(host, serde_json::json!({})).await.unwrap();
//! assert!(export.plugin_business_rules.contains("pluginTwoRule01"));
//! # }
//! ```
//!
//! Bootstrap is fail-soft: a resource kind whose context chain cannot be
//! satisfied degrades to an empty mapping with a logged diagnostic, and
//! the rest of the aggregate is still returned.

pub mod bootstrap;
pub mod commands;
pub mod constants;
pub mod descriptor;
pub mod loader;
pub mod logger;
pub mod registry;
pub mod rules;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use bootstrap::{initialize_plugin, Bootstrap, PluginExport};
pub use commands::{plugin_commands_registry, CommandName};
pub use descriptor::{Mode, PluginDescriptor};
pub use loader::ResourceLoader;
pub use logger::{install_console_sink, Logger};
pub use registry::{CommandHandler, CommandRegistry, RuleHandler, RuleRegistry};
pub use rules::{plugin_rules_registry, RuleName};
pub use store::PluginStore;

/// Prelude for host applications embedding this plugin
pub mod prelude {
    pub use crate::{
        initialize_plugin, Bootstrap, CommandName, CommandRegistry, Mode, PluginExport,
        PluginStore, RuleName, RuleRegistry,
    };
    pub use plugin_two_host::prelude::*;
}
