//! Business rules provided by this plugin
//!
//! The rule bodies are deliberately trivial: each one echoes its own
//! identifier so a host can verify the rule survived registration and
//! dispatch. Real work would replace the bodies, not the wiring.

use crate::registry::{RuleHandler, RuleRegistry};
use async_trait::async_trait;
use plugin_two_core::DataValue;
use serde_json::json;
use std::sync::{Arc, LazyLock};

/// The closed set of rule identifiers this plugin registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    PluginTwoRule01,
    PluginTwoRule02,
}

impl RuleName {
    pub const ALL: [RuleName; 2] = [RuleName::PluginTwoRule01, RuleName::PluginTwoRule02];

    /// The identifier the rule is registered under. Case-sensitive.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::PluginTwoRule01 => "pluginTwoRule01",
            RuleName::PluginTwoRule02 => "pluginTwoRule02",
        }
    }

    /// Total mapping from identifier to handler; adding a variant without
    /// a handler fails to compile. Every call hands out the same shared
    /// handler instance.
    pub fn handler(self) -> Arc<dyn RuleHandler> {
        static RULE_01: LazyLock<Arc<dyn RuleHandler>> =
            LazyLock::new(|| Arc::new(PluginTwoRule01));
        static RULE_02: LazyLock<Arc<dyn RuleHandler>> =
            LazyLock::new(|| Arc::new(PluginTwoRule02));
        match self {
            RuleName::PluginTwoRule01 => Arc::clone(&RULE_01),
            RuleName::PluginTwoRule02 => Arc::clone(&RULE_02),
        }
    }
}

pub struct PluginTwoRule01;

#[async_trait]
impl RuleHandler for PluginTwoRule01 {
    fn name(&self) -> &'static str {
        RuleName::PluginTwoRule01.as_str()
    }

    async fn run(&self, input_data: &DataValue, input_meta_data: &DataValue) -> DataValue {
        tracing::debug!(rule = self.name(), ?input_data, ?input_meta_data, "rule invoked");
        json!(self.name())
    }
}

pub struct PluginTwoRule02;

#[async_trait]
impl RuleHandler for PluginTwoRule02 {
    fn name(&self) -> &'static str {
        RuleName::PluginTwoRule02.as_str()
    }

    async fn run(&self, input_data: &DataValue, input_meta_data: &DataValue) -> DataValue {
        tracing::debug!(rule = self.name(), ?input_data, ?input_meta_data, "rule invoked");
        json!(self.name())
    }
}

/// Register every plugin rule into the given registry.
pub fn load_plugin_rules(registry: RuleRegistry) -> RuleRegistry {
    RuleName::ALL
        .iter()
        .fold(registry, |registry, name| registry.with_rule_arc(name.handler()))
}

/// Build the rules registry for this plugin. Deterministic: the same
/// identifier set and handler bindings on every call, no I/O.
pub fn plugin_rules_registry() -> RuleRegistry {
    load_plugin_rules(RuleRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier_set_is_exact() {
        let registry = plugin_rules_registry();
        assert_eq!(registry.names(), vec!["pluginTwoRule01", "pluginTwoRule02"]);
    }

    #[test]
    fn test_repeated_builds_are_identical() {
        let first = plugin_rules_registry();
        let second = plugin_rules_registry();
        assert_eq!(first.names(), second.names());
        let third = plugin_rules_registry();
        assert_eq!(second.names(), third.names());
    }

    #[tokio::test]
    async fn test_rules_echo_their_identifier() {
        let registry = plugin_rules_registry();
        for name in RuleName::ALL {
            let rule = registry.get(name.as_str()).unwrap();
            let result = rule.run(&json!("anything"), &json!({"meta": true})).await;
            assert_eq!(result, json!(name.as_str()));
        }
    }

    #[tokio::test]
    async fn test_handler_total_function_matches_registration() {
        for name in RuleName::ALL {
            assert_eq!(name.handler().name(), name.as_str());
        }
    }

    #[test]
    fn test_repeated_handler_lookups_share_one_instance() {
        for name in RuleName::ALL {
            assert!(Arc::ptr_eq(&name.handler(), &name.handler()));
        }
    }
}
