//! Opaque resource data
//!
//! Everything the host loads on the plugin's behalf (configuration,
//! command aliases, workflows, themes) is structured data the plugin
//! stores and hands back without interpreting, so it is modeled as JSON.

use serde_json::Value;
use std::collections::HashMap;

/// A single opaque data value produced by the host's loader.
pub type DataValue = Value;

/// A top-level mapping of resource data, keyed by resource entry name.
pub type DataMap = HashMap<String, DataValue>;

/// Look up a dotted entry inside nested resource data.
///
/// `get_nested(&config, &["system", "system.logFileName"])` walks one
/// object level per segment and returns `None` when any level is missing
/// or not an object.
pub fn get_nested<'a>(data: &'a DataMap, segments: &[&str]) -> Option<&'a DataValue> {
    let (first, rest) = segments.split_first()?;
    let mut current = data.get(*first)?;
    for segment in rest {
        current = current.as_object()?.get(*segment)?;
    }
    Some(current)
}

/// True when the value is a JSON object with at least one entry.
pub fn is_populated_object(value: &DataValue) -> bool {
    value.as_object().map_or(false, |map| !map.is_empty())
}
