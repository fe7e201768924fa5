use std::sync::Arc;

use {async_trait::async_trait, tokio::sync::OnceCell, tracing::debug};

use gridstream_config::BootSettings;

use crate::{
    error::{Error, Result},
    registry::ScopeRegistry,
    scope::NamespaceEntry,
    support::ChannelSupport,
};

/// A loaded panel plugin.
pub trait PluginInstance: Send + Sync {
    /// Channel support declared by the plugin, if it streams.
    fn channel_support(&self) -> Option<Arc<dyn ChannelSupport>> {
        None
    }
}

/// Collaborator that loads panel plugins by id. Provided by the host's
/// plugin loader; `Ok(None)` means the id is unknown.
#[async_trait]
pub trait PluginLoader: Send + Sync {
    async fn load(&self, plugin_id: &str) -> Result<Option<Arc<dyn PluginInstance>>>;
}

/// Scope for channels owned by panel plugins.
pub struct PluginScope {
    loader: Arc<dyn PluginLoader>,
    settings: Arc<BootSettings>,
    names: OnceCell<Vec<NamespaceEntry>>,
}

impl PluginScope {
    #[must_use]
    pub fn new(loader: Arc<dyn PluginLoader>, settings: Arc<BootSettings>) -> Self {
        Self {
            loader,
            settings,
            names: OnceCell::new(),
        }
    }

    async fn scan(&self) -> Vec<NamespaceEntry> {
        let mut names = Vec::new();
        for panel in self.settings.live_panels() {
            match self.channel_support(&panel.id).await {
                Ok(_) => {
                    names.push(NamespaceEntry::new(
                        &panel.id,
                        &panel.name,
                        &panel.info.description,
                    ));
                },
                Err(e) => {
                    // Handled: one broken plugin must not hide the rest.
                    debug!(plugin = %panel.id, error = %e, "skipping panel plugin during live discovery");
                },
            }
        }
        names
    }
}

#[async_trait]
impl ScopeRegistry for PluginScope {
    async fn channel_support(&self, namespace: &str) -> Result<Arc<dyn ChannelSupport>> {
        let plugin = match self.loader.load(namespace).await {
            Ok(Some(plugin)) => plugin,
            Ok(None) => return Err(Error::unknown_plugin(namespace)),
            Err(e) => {
                debug!(plugin = %namespace, error = %e, "plugin load failed");
                return Err(Error::unknown_plugin(namespace));
            },
        };
        plugin
            .channel_support()
            .ok_or_else(|| Error::streaming_unsupported(namespace))
    }

    /// Computed once on first call and cached for the process lifetime.
    async fn namespaces(&self) -> Vec<NamespaceEntry> {
        self.names.get_or_init(|| self.scan()).await.clone()
    }
}
