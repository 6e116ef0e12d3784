//! Plugin Registries
//!
//! Maps stable string identifiers to invocable handlers, one registry per
//! domain (business rules, commands). Registries are assembled once per
//! bootstrap call; the host may extend them afterwards through the
//! chaining builders, the plugin itself never mutates them again.

use async_trait::async_trait;
use plugin_two_core::DataValue;
use std::collections::HashMap;
use std::sync::Arc;

/// A business rule exposed to the host.
///
/// Rules share one uniform signature so the host can dispatch them all
/// the same way regardless of what each rule actually consumes.
#[async_trait]
pub trait RuleHandler: Send + Sync {
    /// The stable identifier this rule is registered under.
    fn name(&self) -> &'static str;

    async fn run(&self, input_data: &DataValue, input_meta_data: &DataValue) -> DataValue;
}

/// A command exposed to the host, same uniform signature as rules.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// The stable identifier this command is registered under.
    fn name(&self) -> &'static str;

    async fn execute(&self, input_data: &DataValue, input_meta_data: &DataValue) -> DataValue;
}

/// Registry of business rules, keyed by identifier.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<&'static str, Arc<dyn RuleHandler>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: HashMap::new() }
    }

    pub fn with_rule<R: RuleHandler + 'static>(self, rule: R) -> Self {
        self.with_rule_arc(Arc::new(rule))
    }

    pub fn with_rule_arc(mut self, rule: Arc<dyn RuleHandler>) -> Self {
        self.rules.insert(rule.name(), rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn RuleHandler> {
        self.rules.get(name).map(|r| r.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered identifiers, sorted for stable iteration.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.rules.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry").field("rules", &self.names()).finish()
    }
}

/// Registry of commands, keyed by identifier.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }

    pub fn with_command<C: CommandHandler + 'static>(self, command: C) -> Self {
        self.with_command_arc(Arc::new(command))
    }

    pub fn with_command_arc(mut self, command: Arc<dyn CommandHandler>) -> Self {
        self.commands.insert(command.name(), command);
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn CommandHandler> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered identifiers, sorted for stable iteration.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry").field("commands", &self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoRule;

    #[async_trait]
    impl RuleHandler for EchoRule {
        fn name(&self) -> &'static str {
            "echoRule"
        }

        async fn run(&self, input_data: &DataValue, _input_meta_data: &DataValue) -> DataValue {
            input_data.clone()
        }
    }

    struct EchoCommand;

    #[async_trait]
    impl CommandHandler for EchoCommand {
        fn name(&self) -> &'static str {
            "echoCommand"
        }

        async fn execute(&self, input_data: &DataValue, _input_meta_data: &DataValue) -> DataValue {
            input_data.clone()
        }
    }

    #[tokio::test]
    async fn test_rule_registration_and_lookup() {
        let registry = RuleRegistry::new().with_rule(EchoRule);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("echoRule"));
        assert!(registry.get("missing").is_none());

        let rule = registry.get("echoRule").unwrap();
        let result = rule.run(&json!("payload"), &json!(null)).await;
        assert_eq!(result, json!("payload"));
    }

    #[tokio::test]
    async fn test_command_registration_and_lookup() {
        let registry = CommandRegistry::new().with_command(EchoCommand);
        assert_eq!(registry.names(), vec!["echoCommand"]);

        let command = registry.get("echoCommand").unwrap();
        let result = command.execute(&json!(7), &json!(null)).await;
        assert_eq!(result, json!(7));
    }

    #[test]
    fn test_empty_registries() {
        assert!(RuleRegistry::new().is_empty());
        assert!(CommandRegistry::new().is_empty());
    }
}
