//! Aggregate Data Store
//!
//! The single structure accumulating everything the bootstrap produces:
//! the plugin descriptor (host context included) and the loaded resource
//! data. One store is constructed per bootstrap call and threaded through
//! the orchestrator, so there is no module-global state and no locking —
//! access is single-task by construction.

use crate::descriptor::PluginDescriptor;
use plugin_two_core::DataMap;
use plugin_two_host::ResourceKind;
use serde::Serialize;

/// Mutable aggregate populated during one bootstrap call.
///
/// Writes are shallow: setting a resource kind replaces the whole
/// previous sub-mapping for that kind, never a recursive merge.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PluginStore {
    #[serde(flatten)]
    descriptor: Option<PluginDescriptor>,
    configuration: DataMap,
    #[serde(rename = "CommandsAliases")]
    command_aliases: DataMap,
    #[serde(rename = "CommandWorkflows")]
    workflows: DataMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    themes: Option<DataMap>,
}

impl PluginStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything, returning the store to its freshly constructed
    /// state. Called before anything else in a bootstrap sequence so no
    /// stale data leaks forward from a previous call.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True until a descriptor or any resource data has been stored.
    pub fn is_empty(&self) -> bool {
        self.descriptor.is_none()
            && self.configuration.is_empty()
            && self.command_aliases.is_empty()
            && self.workflows.is_empty()
            && self.themes.is_none()
    }

    /// Persist the plugin descriptor as the store's host context entry.
    pub fn set_context(&mut self, descriptor: PluginDescriptor) {
        self.descriptor = Some(descriptor);
    }

    pub fn context(&self) -> Option<&PluginDescriptor> {
        self.descriptor.as_ref()
    }

    /// Overwrite the top-level entry for one resource kind.
    pub fn set_resource(&mut self, kind: ResourceKind, data: DataMap) {
        match kind {
            ResourceKind::Configuration => self.configuration = data,
            ResourceKind::CommandAliases => self.command_aliases = data,
            ResourceKind::Workflows => self.workflows = data,
            ResourceKind::Themes => self.themes = Some(data),
        }
    }

    /// The stored data for one resource kind. Themes is absent until the
    /// host requests that kind during bootstrap.
    pub fn resource(&self, kind: ResourceKind) -> Option<&DataMap> {
        match kind {
            ResourceKind::Configuration => Some(&self.configuration),
            ResourceKind::CommandAliases => Some(&self.command_aliases),
            ResourceKind::Workflows => Some(&self.workflows),
            ResourceKind::Themes => self.themes.as_ref(),
        }
    }

    pub fn configuration(&self) -> &DataMap {
        &self.configuration
    }

    pub fn command_aliases(&self) -> &DataMap {
        &self.command_aliases
    }

    pub fn workflows(&self) -> &DataMap {
        &self.workflows
    }

    pub fn themes(&self) -> Option<&DataMap> {
        self.themes.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Mode;
    use serde_json::json;
    use std::path::PathBuf;

    fn descriptor() -> PluginDescriptor {
        PluginDescriptor::assemble(json!({"id": 1}), &PathBuf::from("/p"), Mode::Development)
    }

    fn data(key: &str, value: i64) -> DataMap {
        let mut map = DataMap::new();
        map.insert(key.to_string(), json!(value));
        map
    }

    #[test]
    fn test_new_store_is_empty() {
        assert!(PluginStore::new().is_empty());
    }

    #[test]
    fn test_reset_clears_populated_store() {
        let mut store = PluginStore::new();
        store.set_context(descriptor());
        store.set_resource(ResourceKind::Configuration, data("debug", 1));
        store.set_resource(ResourceKind::Themes, data("dark", 1));
        assert!(!store.is_empty());

        store.reset();
        assert!(store.is_empty());
        assert_eq!(store, PluginStore::new());
    }

    #[test]
    fn test_set_resource_is_shallow_overwrite() {
        let mut store = PluginStore::new();
        store.set_resource(ResourceKind::Configuration, data("first", 1));
        store.set_resource(ResourceKind::Configuration, data("second", 2));

        let configuration = store.configuration();
        assert!(configuration.get("first").is_none());
        assert_eq!(configuration.get("second"), Some(&json!(2)));
    }

    #[test]
    fn test_themes_absent_until_set() {
        let mut store = PluginStore::new();
        assert!(store.themes().is_none());
        assert!(store.resource(ResourceKind::Themes).is_none());

        store.set_resource(ResourceKind::Themes, DataMap::new());
        assert!(store.themes().is_some());
    }

    #[test]
    fn test_serialized_shape_preserves_nested_keys() {
        let mut store = PluginStore::new();
        store.set_context(descriptor());
        store.set_resource(ResourceKind::CommandAliases, data("wrkflo", 1));
        store.set_resource(ResourceKind::Workflows, data("doStuff", 2));

        let serialized = serde_json::to_value(&store).unwrap();
        assert_eq!(serialized["hostContextObject"], json!({"id": 1}));
        assert_eq!(serialized["PluginName"], "plugin-two");
        assert_eq!(serialized["configuration"], json!({}));
        assert_eq!(serialized["CommandsAliases"]["wrkflo"], json!(1));
        assert_eq!(serialized["CommandWorkflows"]["doStuff"], json!(2));
        assert!(serialized.get("themes").is_none());
    }
}
