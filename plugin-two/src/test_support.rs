//! Shared test double for the host platform.

use async_trait::async_trait;
use plugin_two_core::{DataMap, DataValue};
use plugin_two_host::{Host, HostError, ResourceKind};
use std::collections::HashMap;
use std::sync::Mutex;

/// Scripted host: hands back configured per-kind data and records calls.
pub struct StubHost {
    resources: HashMap<ResourceKind, DataMap>,
    refuse_accouter: bool,
    fail_accouter: bool,
    fail_loads: bool,
    accouter_calls: Mutex<usize>,
    load_calls: Mutex<Vec<(ResourceKind, String)>>,
}

impl StubHost {
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
            refuse_accouter: false,
            fail_accouter: false,
            fail_loads: false,
            accouter_calls: Mutex::new(0),
            load_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_resource(mut self, kind: ResourceKind, data: DataMap) -> Self {
        self.resources.insert(kind, data);
        self
    }

    /// `accouter_framework` returns `Ok(false)`.
    pub fn refusing_accouter(mut self) -> Self {
        self.refuse_accouter = true;
        self
    }

    /// `accouter_framework` returns an error.
    pub fn failing_accouter(mut self) -> Self {
        self.fail_accouter = true;
        self
    }

    /// `load_plugin_resource_data` returns an error.
    pub fn failing_loads(mut self) -> Self {
        self.fail_loads = true;
        self
    }

    pub fn accouter_calls(&self) -> usize {
        *self.accouter_calls.lock().unwrap()
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.lock().unwrap().len()
    }

    pub fn loaded_paths(&self) -> Vec<(ResourceKind, String)> {
        self.load_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Host for StubHost {
    async fn accouter_framework(&self, _context: &DataValue) -> Result<bool, HostError> {
        *self.accouter_calls.lock().unwrap() += 1;
        if self.fail_accouter {
            return Err(HostError::AccouterFailed("scripted failure".to_string()));
        }
        Ok(!self.refuse_accouter)
    }

    async fn load_plugin_resource_data(
        &self,
        kind: ResourceKind,
        path: &str,
    ) -> Result<DataMap, HostError> {
        self.load_calls.lock().unwrap().push((kind, path.to_string()));
        if self.fail_loads {
            return Err(HostError::LoadFailed {
                kind,
                path: path.to_string(),
                details: "scripted failure".to_string(),
            });
        }
        Ok(self.resources.get(&kind).cloned().unwrap_or_default())
    }
}
