use std::sync::Arc;

use {async_trait::async_trait, tokio::sync::OnceCell};

use crate::{
    error::Result,
    registry::ScopeRegistry,
    scope::NamespaceEntry,
    support::ChannelSupport,
};

/// Scope for generic streams with no owning subsystem.
///
/// Any namespace resolves to the default measurements support; nothing
/// checks that the namespace is actually producing data.
pub struct StreamScope {
    fallback: Arc<dyn ChannelSupport>,
    names: OnceCell<Vec<NamespaceEntry>>,
}

impl StreamScope {
    #[must_use]
    pub fn new(fallback: Arc<dyn ChannelSupport>) -> Self {
        Self {
            fallback,
            names: OnceCell::new(),
        }
    }
}

#[async_trait]
impl ScopeRegistry for StreamScope {
    async fn channel_support(&self, _namespace: &str) -> Result<Arc<dyn ChannelSupport>> {
        Ok(self.fallback.clone())
    }

    async fn namespaces(&self) -> Vec<NamespaceEntry> {
        // TODO: enumerate namespaces of active generic streams once the
        // stream broker exposes a listing API.
        self.names.get_or_init(|| async { Vec::new() }).await.clone()
    }
}
