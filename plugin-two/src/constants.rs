//! Plugin naming and resource path constants
//!
//! The dev/prod path tables are parallel on purpose: the same resource
//! layout exists under `/src/` before packaging and under `/bin/` after.

/// The plugin's own name, used as the log-line prefix and descriptor name.
pub const PLUGIN_NAME: &str = "plugin-two";

/// Environment variable selecting the deployment environment.
pub const ENV_VAR: &str = "PLUGIN_TWO_ENV";

/// Key inside the host metadata holding the framework context object
/// needed to accouter a cooperating framework instance.
pub const FRAMEWORK_CONTEXT_KEY: &str = "frameworkContext";

// ============================================================================
// Development paths (relative to the plugin root)
// ============================================================================

pub const DEV_RESOURCES_PATH: &str = "/src/resources/";
pub const DEV_CONFIGURATION_PATH: &str = "/src/resources/configuration/";
pub const DEV_COMMAND_ALIASES_PATH: &str = "/src/resources/commands/";
pub const DEV_WORKFLOWS_PATH: &str = "/src/resources/workflows/";
pub const DEV_THEMES_PATH: &str = "/src/resources/themes/";
pub const DEV_CONSTANTS_PATH: &str = "/src/constants/";
pub const DEV_METADATA_PATH: &str = "/src/resources/metaData.json";

// ============================================================================
// Production paths (relative to the plugin root)
// ============================================================================

pub const PROD_RESOURCES_PATH: &str = "/bin/resources/";
pub const PROD_CONFIGURATION_PATH: &str = "/bin/resources/configuration/";
pub const PROD_COMMAND_ALIASES_PATH: &str = "/bin/resources/commands/";
pub const PROD_WORKFLOWS_PATH: &str = "/bin/resources/workflows/";
pub const PROD_THEMES_PATH: &str = "/bin/resources/themes/";
pub const PROD_CONSTANTS_PATH: &str = "/bin/constants/";
pub const PROD_METADATA_PATH: &str = "/bin/resources/metaData.json";

// ============================================================================
// Log file resolution keys (host configuration)
// ============================================================================

pub const CONFIG_SYSTEM_KEY: &str = "system";
pub const CONFIG_CLIENT_ROOT_PATH_KEY: &str = "system.clientRootPath";
pub const CONFIG_LOG_FILE_NAME_KEY: &str = "system.logFileName";
pub const LOGS_DIR: &str = "logs";
