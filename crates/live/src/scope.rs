use serde::{Deserialize, Serialize};

/// Partition of the channel namespace.
///
/// Exactly one scope registry is active per variant for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelScope {
    /// Built-in host features, registered explicitly at startup.
    Core,
    /// Channels owned by a configured datasource instance.
    Datasource,
    /// Channels owned by a panel plugin.
    Plugin,
    /// Generic streams with no owning subsystem.
    Stream,
}

impl ChannelScope {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Datasource => "datasource",
            Self::Plugin => "plugin",
            Self::Stream => "stream",
        }
    }
}

impl std::fmt::Display for ChannelScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChannelScope {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s {
            "core" => Ok(Self::Core),
            "datasource" => Ok(Self::Datasource),
            "plugin" => Ok(Self::Plugin),
            "stream" => Ok(Self::Stream),
            other => Err(crate::error::Error::invalid_address(format!(
                "unknown scope: {other}"
            ))),
        }
    }
}

/// One selectable namespace within a scope, as shown in discovery UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceEntry {
    /// Machine identifier used in channel addresses.
    pub value: String,
    /// Display label.
    pub label: String,
    pub description: String,
}

impl NamespaceEntry {
    #[must_use]
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}
