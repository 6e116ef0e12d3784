//! Commands provided by this plugin
//!
//! Same shape as the business rules: placeholder bodies that echo their
//! own identifier, proving the registration path end to end.

use crate::registry::{CommandHandler, CommandRegistry};
use async_trait::async_trait;
use plugin_two_core::DataValue;
use serde_json::json;
use std::sync::{Arc, LazyLock};

/// The closed set of command identifiers this plugin registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    PluginTwoCommand01,
    PluginTwoCommand02,
}

impl CommandName {
    pub const ALL: [CommandName; 2] =
        [CommandName::PluginTwoCommand01, CommandName::PluginTwoCommand02];

    /// The identifier the command is registered under. Case-sensitive.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandName::PluginTwoCommand01 => "pluginTwoCommand01",
            CommandName::PluginTwoCommand02 => "pluginTwoCommand02",
        }
    }

    /// Total mapping from identifier to handler; adding a variant without
    /// a handler fails to compile. Every call hands out the same shared
    /// handler instance.
    pub fn handler(self) -> Arc<dyn CommandHandler> {
        static COMMAND_01: LazyLock<Arc<dyn CommandHandler>> =
            LazyLock::new(|| Arc::new(PluginTwoCommand01));
        static COMMAND_02: LazyLock<Arc<dyn CommandHandler>> =
            LazyLock::new(|| Arc::new(PluginTwoCommand02));
        match self {
            CommandName::PluginTwoCommand01 => Arc::clone(&COMMAND_01),
            CommandName::PluginTwoCommand02 => Arc::clone(&COMMAND_02),
        }
    }
}

pub struct PluginTwoCommand01;

#[async_trait]
impl CommandHandler for PluginTwoCommand01 {
    fn name(&self) -> &'static str {
        CommandName::PluginTwoCommand01.as_str()
    }

    async fn execute(&self, input_data: &DataValue, input_meta_data: &DataValue) -> DataValue {
        tracing::debug!(command = self.name(), ?input_data, ?input_meta_data, "command invoked");
        json!(self.name())
    }
}

pub struct PluginTwoCommand02;

#[async_trait]
impl CommandHandler for PluginTwoCommand02 {
    fn name(&self) -> &'static str {
        CommandName::PluginTwoCommand02.as_str()
    }

    async fn execute(&self, input_data: &DataValue, input_meta_data: &DataValue) -> DataValue {
        tracing::debug!(command = self.name(), ?input_data, ?input_meta_data, "command invoked");
        json!(self.name())
    }
}

/// Register every plugin command into the given registry.
pub fn load_plugin_commands(registry: CommandRegistry) -> CommandRegistry {
    CommandName::ALL
        .iter()
        .fold(registry, |registry, name| registry.with_command_arc(name.handler()))
}

/// Build the commands registry for this plugin. Deterministic: the same
/// identifier set and handler bindings on every call, no I/O.
pub fn plugin_commands_registry() -> CommandRegistry {
    load_plugin_commands(CommandRegistry::new())
}
