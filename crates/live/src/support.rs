use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Describes a single channel path within a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Path within the namespace, e.g. "cpu/load".
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether clients may publish to this channel (subscribe is implied).
    #[serde(default)]
    pub can_publish: bool,
}

impl ChannelConfig {
    /// A subscribe-only channel with no description.
    #[must_use]
    pub fn subscribe_only(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            description: None,
            can_publish: false,
        }
    }
}

/// Capability descriptor governing the channels a namespace exposes.
///
/// Owned by whichever subsystem registered it (a core feature, a datasource
/// instance, or a panel plugin); the registries hold shared references.
pub trait ChannelSupport: std::fmt::Debug + Send + Sync {
    /// Resolve the channel config for `path`, if this namespace publishes it.
    fn channel_config(&self, path: &str) -> Option<ChannelConfig>;

    /// Channels this namespace is known to publish, for discovery UIs.
    /// Namespaces with dynamic paths return an empty list.
    fn supported_channels(&self) -> Vec<ChannelConfig> {
        Vec::new()
    }
}

/// Generic fallback support: every path is a subscribable measurement stream.
///
/// Used for datasources that stream without declaring their channels, and
/// for the whole of the stream scope.
#[derive(Debug, Default)]
pub struct MeasurementsSupport;

impl ChannelSupport for MeasurementsSupport {
    fn channel_config(&self, path: &str) -> Option<ChannelConfig> {
        Some(ChannelConfig::subscribe_only(path))
    }
}

/// Fixed-table support backed by an explicit channel list.
///
/// The common shape for core features: a known set of paths registered at
/// startup.
#[derive(Debug)]
pub struct StaticChannelSupport {
    channels: Vec<ChannelConfig>,
}

impl StaticChannelSupport {
    #[must_use]
    pub fn new(channels: Vec<ChannelConfig>) -> Self {
        Self { channels }
    }
}

impl ChannelSupport for StaticChannelSupport {
    fn channel_config(&self, path: &str) -> Option<ChannelConfig> {
        self.channels.iter().find(|c| c.path == path).cloned()
    }

    fn supported_channels(&self) -> Vec<ChannelConfig> {
        self.channels.clone()
    }
}

/// Shared default "measurements" support instance.
#[must_use]
pub fn default_measurements_support() -> Arc<dyn ChannelSupport> {
    Arc::new(MeasurementsSupport)
}
