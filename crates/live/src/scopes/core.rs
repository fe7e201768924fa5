use std::sync::Arc;

use {async_trait::async_trait, tokio::sync::RwLock};

use crate::{
    error::{Error, Result},
    registry::ScopeRegistry,
    scope::NamespaceEntry,
    support::ChannelSupport,
};

struct CoreEntry {
    name: String,
    description: String,
    support: Arc<dyn ChannelSupport>,
}

/// Registry of built-in host features, populated explicitly at startup.
///
/// Entries are never removed for the process lifetime; `namespaces` lists
/// them in registration order.
pub struct CoreScope {
    entries: RwLock<Vec<CoreEntry>>,
}

impl Default for CoreScope {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreScope {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Register a feature under `name`.
    ///
    /// A duplicate name overwrites the previous registration in place (last
    /// write wins, original listing position kept).
    pub async fn register(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        support: Arc<dyn ChannelSupport>,
    ) {
        let name = name.into();
        let description = description.into();
        let mut entries = self.entries.write().await;
        if let Some(existing) = entries.iter_mut().find(|e| e.name == name) {
            existing.description = description;
            existing.support = support;
        } else {
            entries.push(CoreEntry {
                name,
                description,
                support,
            });
        }
    }
}

#[async_trait]
impl ScopeRegistry for CoreScope {
    async fn channel_support(&self, namespace: &str) -> Result<Arc<dyn ChannelSupport>> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .find(|e| e.name == namespace)
            .map(|e| e.support.clone())
            .ok_or_else(|| Error::unknown_feature(namespace))
    }

    async fn namespaces(&self) -> Vec<NamespaceEntry> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .map(|e| NamespaceEntry::new(&e.name, &e.name, &e.description))
            .collect()
    }
}
