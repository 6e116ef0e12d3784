//! plugin-two Core - Fundamental types
//!
//! This crate provides the core types used throughout the plugin:
//! - `DataMap` / `DataValue`: opaque resource data loaded by the host
//! - `PluginError`: structured fail-soft diagnostics

mod data;
mod error;

pub use data::{get_nested, is_populated_object, DataMap, DataValue};
pub use error::{codes, PluginError, Severity};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{DataMap, DataValue, PluginError, Severity};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod error_tests {
        use super::*;

        #[test]
        fn test_constructors_carry_codes() {
            assert_eq!(PluginError::no_plugin_data("/tmp/x").code, codes::NO_PLUGIN_DATA);
            assert_eq!(PluginError::no_host_context().code, codes::NO_HOST_CONTEXT);
            assert_eq!(PluginError::accouter_failed("/tmp/x").code, codes::ACCOUTER_FAILED);
        }

        #[test]
        fn test_default_severity_is_fatal() {
            assert_eq!(PluginError::no_host_context().severity, Severity::Fatal);
        }

        #[test]
        fn test_env_unresolved_is_warning() {
            assert_eq!(PluginError::env_unresolved().severity, Severity::Warning);
        }

        #[test]
        fn test_log_append_failed_is_best_effort_warning() {
            let err = PluginError::log_append_failed("/opt/client/logs/app.log", "disk full");
            assert_eq!(err.code, codes::LOG_APPEND_FAILED);
            assert_eq!(err.severity, Severity::Warning);
            assert_eq!(err.path.as_deref(), Some("/opt/client/logs/app.log"));
        }

        #[test]
        fn test_display_includes_attempted_path() {
            let err = PluginError::accouter_failed("/plugins/plugin-two/src/resources/");
            let rendered = err.to_string();
            assert!(rendered.contains(codes::ACCOUTER_FAILED));
            assert!(rendered.contains("/plugins/plugin-two/src/resources/"));
        }

        #[test]
        fn test_serializes_without_absent_path() {
            let json = serde_json::to_value(PluginError::no_host_context()).unwrap();
            assert!(json.get("path").is_none());
            assert_eq!(json["severity"], "fatal");
        }
    }

    mod data_tests {
        use super::*;

        fn sample() -> DataMap {
            let mut map = DataMap::new();
            map.insert(
                "system".to_string(),
                json!({
                    "system.clientRootPath": "/opt/client",
                    "system.logFileName": "plugin.log"
                }),
            );
            map
        }

        #[test]
        fn test_get_nested_walks_objects() {
            let data = sample();
            let value = get_nested(&data, &["system", "system.logFileName"]).unwrap();
            assert_eq!(value, &json!("plugin.log"));
        }

        #[test]
        fn test_get_nested_missing_level() {
            let data = sample();
            assert!(get_nested(&data, &["system", "missing"]).is_none());
            assert!(get_nested(&data, &["missing", "system.logFileName"]).is_none());
            assert!(get_nested(&data, &[]).is_none());
        }

        #[test]
        fn test_is_populated_object() {
            assert!(is_populated_object(&json!({"a": 1})));
            assert!(!is_populated_object(&json!({})));
            assert!(!is_populated_object(&json!("text")));
            assert!(!is_populated_object(&json!(null)));
        }
    }
}
