use std::error::Error as StdError;

/// Crate-wide result type for live-channel operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed errors shared across the scope registries.
///
/// Every variant is terminal for the single lookup that produced it; none of
/// them invalidates cached state for other namespaces.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No core feature was registered under this namespace.
    #[error("unknown feature: {name}")]
    UnknownFeature { name: String },

    /// No datasource instance exists for this name or type.
    #[error("unknown datasource: {name}")]
    UnknownDatasource { name: String },

    /// The plugin does not exist or could not be loaded.
    #[error("Unknown streaming plugin: {plugin_id}")]
    UnknownPlugin { plugin_id: String },

    /// The plugin loaded but declares no channel support.
    #[error("Plugin does not support streaming: {plugin_id}")]
    StreamingUnsupported { plugin_id: String },

    /// A channel address string did not parse.
    #[error("invalid channel address: {message}")]
    InvalidAddress { message: String },

    /// The namespace resolved but does not publish the requested path.
    #[error("unknown channel path: {path}")]
    UnknownPath { path: String },

    /// Wrapped source error from a datasource or plugin collaborator.
    #[error("channel lookup failed: {context}: {source}")]
    External {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    #[must_use]
    pub fn unknown_feature(name: impl std::fmt::Display) -> Self {
        Self::UnknownFeature {
            name: name.to_string(),
        }
    }

    #[must_use]
    pub fn unknown_datasource(name: impl std::fmt::Display) -> Self {
        Self::UnknownDatasource {
            name: name.to_string(),
        }
    }

    #[must_use]
    pub fn unknown_plugin(plugin_id: impl std::fmt::Display) -> Self {
        Self::UnknownPlugin {
            plugin_id: plugin_id.to_string(),
        }
    }

    #[must_use]
    pub fn streaming_unsupported(plugin_id: impl std::fmt::Display) -> Self {
        Self::StreamingUnsupported {
            plugin_id: plugin_id.to_string(),
        }
    }

    #[must_use]
    pub fn invalid_address(message: impl std::fmt::Display) -> Self {
        Self::InvalidAddress {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn unknown_path(path: impl std::fmt::Display) -> Self {
        Self::UnknownPath {
            path: path.to_string(),
        }
    }

    #[must_use]
    pub fn external(
        context: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::External {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// The looked-up entity does not exist at all.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownFeature { .. }
                | Self::UnknownDatasource { .. }
                | Self::UnknownPlugin { .. }
                | Self::UnknownPath { .. }
        )
    }

    /// The entity exists but lacks the requested capability.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::StreamingUnsupported { .. })
    }
}
