//! Resource kinds the host can load for the plugin

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of plugin resource categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Configuration,
    CommandAliases,
    Workflows,
    Themes,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Configuration,
        ResourceKind::CommandAliases,
        ResourceKind::Workflows,
        ResourceKind::Themes,
    ];

    /// The kind name passed over the host's loader contract.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Configuration => "configuration",
            ResourceKind::CommandAliases => "commandAliases",
            ResourceKind::Workflows => "workflows",
            ResourceKind::Themes => "themes",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(ResourceKind::Configuration.as_str(), "configuration");
        assert_eq!(ResourceKind::CommandAliases.as_str(), "commandAliases");
        assert_eq!(ResourceKind::Workflows.as_str(), "workflows");
        assert_eq!(ResourceKind::Themes.as_str(), "themes");
    }

    #[test]
    fn test_all_is_exhaustive_and_distinct() {
        let names: std::collections::HashSet<_> =
            ResourceKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), ResourceKind::ALL.len());
    }
}
