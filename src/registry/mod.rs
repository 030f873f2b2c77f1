//! Tenant registry
//!
//! Turns the configured tenant table into one [`CrawlerHandle`] per entry,
//! keyed by unique tenant name. Every entry is validated before anything is
//! constructed: a single malformed tenant fails the whole build, so a
//! configuration error can never show up later as a silent gap in coverage.

use crate::config::{validate_tenant, Config};
use crate::crawler::CrawlerHandle;
use crate::ConfigError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Registry {
    handles: BTreeMap<String, CrawlerHandle>,
}

impl Registry {
    /// Builds the registry from a loaded configuration.
    ///
    /// Pure and idempotent: building twice from the same input produces
    /// equivalent (not shared) handles; no global state is touched.
    pub fn build(config: &Config) -> Result<Self, ConfigError> {
        // Validate everything before constructing anything
        let mut tenants = Vec::with_capacity(config.tenants.len());
        for entry in &config.tenants {
            tenants.push(validate_tenant(entry)?);
        }

        let mut handles = BTreeMap::new();
        for tenant in tenants {
            let name = tenant.name.clone();
            let handle =
                CrawlerHandle::new(tenant, config.platform.clone(), config.crawler.clone());
            if handles.insert(name.clone(), handle).is_some() {
                return Err(ConfigError::DuplicateName(name));
            }
        }

        Ok(Self { handles })
    }

    pub fn get(&self, name: &str) -> Option<&CrawlerHandle> {
        self.handles.get(name)
    }

    /// Handles in tenant-name order
    pub fn handles(&self) -> impl Iterator<Item = &CrawlerHandle> {
        self.handles.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
