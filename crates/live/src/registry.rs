use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    address::ChannelAddress,
    error::{Error, Result},
    scope::{ChannelScope, NamespaceEntry},
    support::{ChannelConfig, ChannelSupport},
};

/// Shared capability interface implemented by every scope registry.
///
/// Resolution is asynchronous because the datasource and plugin scopes may
/// suspend while an external collaborator loads the instance or module.
#[async_trait]
pub trait ScopeRegistry: Send + Sync {
    /// Resolve the support descriptor governing `namespace`.
    async fn channel_support(&self, namespace: &str) -> Result<Arc<dyn ChannelSupport>>;

    /// Enumerate the known namespaces of this scope for discovery UIs.
    ///
    /// Per-entry resolution failures are logged and skipped, never surfaced;
    /// a partial list still renders.
    async fn namespaces(&self) -> Vec<NamespaceEntry>;
}

/// Top-level router over the four scope registries, addressed by
/// `(scope, namespace)`.
///
/// Constructed once at startup and passed around behind an `Arc`; the scope
/// registries live for the process duration.
pub struct LiveChannelRegistry {
    core: Arc<dyn ScopeRegistry>,
    datasource: Arc<dyn ScopeRegistry>,
    plugin: Arc<dyn ScopeRegistry>,
    stream: Arc<dyn ScopeRegistry>,
}

impl LiveChannelRegistry {
    #[must_use]
    pub fn new(
        core: Arc<dyn ScopeRegistry>,
        datasource: Arc<dyn ScopeRegistry>,
        plugin: Arc<dyn ScopeRegistry>,
        stream: Arc<dyn ScopeRegistry>,
    ) -> Self {
        Self {
            core,
            datasource,
            plugin,
            stream,
        }
    }

    /// The registry owning `scope`.
    #[must_use]
    pub fn scope(&self, scope: ChannelScope) -> Arc<dyn ScopeRegistry> {
        match scope {
            ChannelScope::Core => self.core.clone(),
            ChannelScope::Datasource => self.datasource.clone(),
            ChannelScope::Plugin => self.plugin.clone(),
            ChannelScope::Stream => self.stream.clone(),
        }
    }

    /// Resolve the support descriptor for a `(scope, namespace)` pair.
    pub async fn channel_support(
        &self,
        scope: ChannelScope,
        namespace: &str,
    ) -> Result<Arc<dyn ChannelSupport>> {
        self.scope(scope).channel_support(namespace).await
    }

    /// Enumerate the known namespaces of `scope`.
    pub async fn namespaces(&self, scope: ChannelScope) -> Vec<NamespaceEntry> {
        self.scope(scope).namespaces().await
    }

    /// Resolve a full address down to its per-path channel config.
    pub async fn channel_config(&self, address: &ChannelAddress) -> Result<ChannelConfig> {
        let support = self
            .channel_support(address.scope, &address.namespace)
            .await?;
        support
            .channel_config(&address.path)
            .ok_or_else(|| Error::unknown_path(&address.path))
    }
}
