//! Plugin descriptor and deployment environment resolution
//!
//! The descriptor is assembled once per bootstrap call and becomes the
//! host-context entry of the aggregate store. It carries the original
//! host metadata verbatim plus every resolved resource path.

use crate::constants;
use plugin_two_core::{is_populated_object, DataValue};
use plugin_two_host::ResourceKind;
use serde::Serialize;
use std::path::Path;

/// Deployment environment, selects the resource path prefix set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    /// Parse the environment variable value. `None` means the mode could
    /// not be determined and the caller must default to development with
    /// a warning diagnostic.
    pub fn from_env_value(value: Option<&str>) -> Option<Mode> {
        match value {
            Some("development") => Some(Mode::Development),
            Some("production") => Some(Mode::Production),
            _ => None,
        }
    }

    /// Read the mode from the process environment.
    pub fn from_env() -> Option<Mode> {
        Mode::from_env_value(std::env::var(constants::ENV_VAR).ok().as_deref())
    }
}

/// Everything the bootstrap resolves about this plugin: the host metadata,
/// the plugin root, and the per-mode resource paths.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PluginDescriptor {
    /// The host metadata passed to the bootstrap, stored verbatim so it
    /// stays addressable separately from the plugin's derived paths.
    #[serde(rename = "hostContextObject")]
    pub host_context: DataValue,
    #[serde(rename = "PluginName")]
    pub plugin_name: &'static str,
    #[serde(rename = "pluginRootPath")]
    pub root_path: String,
    #[serde(rename = "pluginConfigResourcesPath")]
    pub resources_path: String,
    #[serde(rename = "pluginConfigReferencePath")]
    pub configuration_path: String,
    #[serde(rename = "pluginMetaDataPath")]
    pub metadata_path: String,
    #[serde(rename = "pluginCommandAliasesPath")]
    pub command_aliases_path: String,
    #[serde(rename = "pluginConstantsPath")]
    pub constants_path: String,
    #[serde(rename = "pluginWorkflowsPath")]
    pub workflows_path: String,
    #[serde(rename = "pluginThemesPath")]
    pub themes_path: String,
}

impl PluginDescriptor {
    /// Assemble the descriptor for the given mode, joining the plugin
    /// root with the per-mode path fragments.
    pub fn assemble(host_context: DataValue, root_path: &Path, mode: Mode) -> Self {
        let root = root_path.display().to_string();
        let join = |fragment: &str| format!("{}{}", root, fragment);
        match mode {
            Mode::Development => Self {
                host_context,
                plugin_name: constants::PLUGIN_NAME,
                resources_path: join(constants::DEV_RESOURCES_PATH),
                configuration_path: join(constants::DEV_CONFIGURATION_PATH),
                metadata_path: join(constants::DEV_METADATA_PATH),
                command_aliases_path: join(constants::DEV_COMMAND_ALIASES_PATH),
                constants_path: join(constants::DEV_CONSTANTS_PATH),
                workflows_path: join(constants::DEV_WORKFLOWS_PATH),
                themes_path: join(constants::DEV_THEMES_PATH),
                root_path: root,
            },
            Mode::Production => Self {
                host_context,
                plugin_name: constants::PLUGIN_NAME,
                resources_path: join(constants::PROD_RESOURCES_PATH),
                configuration_path: join(constants::PROD_CONFIGURATION_PATH),
                metadata_path: join(constants::PROD_METADATA_PATH),
                command_aliases_path: join(constants::PROD_COMMAND_ALIASES_PATH),
                constants_path: join(constants::PROD_CONSTANTS_PATH),
                workflows_path: join(constants::PROD_WORKFLOWS_PATH),
                themes_path: join(constants::PROD_THEMES_PATH),
                root_path: root,
            },
        }
    }

    /// The resolved path for a loadable resource kind.
    pub fn resource_path(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::Configuration => &self.configuration_path,
            ResourceKind::CommandAliases => &self.command_aliases_path,
            ResourceKind::Workflows => &self.workflows_path,
            ResourceKind::Themes => &self.themes_path,
        }
    }

    /// The nested framework context object inside the host metadata, if
    /// the host supplied one. Required before any accoutering attempt;
    /// an empty or null context cannot re-hydrate a framework instance
    /// and counts as missing.
    pub fn framework_context(&self) -> Option<&DataValue> {
        let context = self.host_context.get(constants::FRAMEWORK_CONTEXT_KEY)?;
        if !is_populated_object(context) {
            return None;
        }
        Some(context)
    }
}
