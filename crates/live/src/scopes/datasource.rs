use std::sync::Arc;

use {async_trait::async_trait, tokio::sync::OnceCell, tracing::debug};

use gridstream_config::BootSettings;

use crate::{
    error::Result,
    registry::ScopeRegistry,
    scope::NamespaceEntry,
    support::ChannelSupport,
};

/// A resolved datasource instance.
pub trait DatasourceInstance: Send + Sync {
    /// Channel support declared by the datasource, if it streams natively.
    fn channel_support(&self) -> Option<Arc<dyn ChannelSupport>> {
        None
    }
}

/// Collaborator that resolves configured datasource instances by name or
/// type. Provided by the host's datasource service.
#[async_trait]
pub trait DatasourceResolver: Send + Sync {
    /// Resolve an instance; fails with a not-found error when no datasource
    /// is configured under `name_or_type`.
    async fn get(&self, name_or_type: &str) -> Result<Arc<dyn DatasourceInstance>>;
}

/// Scope for channels owned by configured datasource instances.
pub struct DatasourceScope {
    resolver: Arc<dyn DatasourceResolver>,
    settings: Arc<BootSettings>,
    fallback: Arc<dyn ChannelSupport>,
    names: OnceCell<Vec<NamespaceEntry>>,
}

impl DatasourceScope {
    #[must_use]
    pub fn new(
        resolver: Arc<dyn DatasourceResolver>,
        settings: Arc<BootSettings>,
        fallback: Arc<dyn ChannelSupport>,
    ) -> Self {
        Self {
            resolver,
            settings,
            fallback,
            names: OnceCell::new(),
        }
    }

    async fn scan(&self) -> Vec<NamespaceEntry> {
        let mut names = Vec::new();
        for ds in self.settings.live_datasources() {
            match self.channel_support(&ds.name).await {
                Ok(_) => {
                    names.push(NamespaceEntry::new(&ds.ty, &ds.name, &ds.ty));
                },
                Err(e) => {
                    // Handled: one broken datasource must not hide the rest.
                    debug!(datasource = %ds.name, error = %e, "skipping datasource during live discovery");
                },
            }
        }
        names
    }
}

#[async_trait]
impl ScopeRegistry for DatasourceScope {
    async fn channel_support(&self, namespace: &str) -> Result<Arc<dyn ChannelSupport>> {
        let instance = self.resolver.get(namespace).await?;
        Ok(instance
            .channel_support()
            .unwrap_or_else(|| self.fallback.clone()))
    }

    /// Computed once on first call and cached for the process lifetime; the
    /// snapshot is not re-scanned even if datasource configuration changes.
    async fn namespaces(&self) -> Vec<NamespaceEntry> {
        self.names.get_or_init(|| self.scan()).await.clone()
    }
}
