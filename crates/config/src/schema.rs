//! Boot snapshot schema: the datasource and panel-plugin definitions the host
//! hands to the live subsystem at startup.

use serde::{Deserialize, Serialize};

/// Boot-time snapshot of everything the host has configured.
///
/// Definition order in the source file is preserved; discovery scans iterate
/// in exactly this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BootSettings {
    pub datasources: Vec<DatasourceDef>,
    pub panels: Vec<PanelDef>,
}

impl BootSettings {
    /// Datasource definitions flagged as live-capable.
    pub fn live_datasources(&self) -> impl Iterator<Item = &DatasourceDef> {
        self.datasources.iter().filter(|d| d.meta.live)
    }

    /// Panel definitions flagged as live-capable.
    pub fn live_panels(&self) -> impl Iterator<Item = &PanelDef> {
        self.panels.iter().filter(|p| p.live)
    }
}

/// A configured datasource instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasourceDef {
    /// Instance id, unique within the snapshot.
    pub id: String,
    /// Display name shown in selector UIs.
    pub name: String,
    /// Datasource type (the backing implementation, e.g. "influxdb").
    #[serde(rename = "type")]
    pub ty: String,
    pub meta: DatasourceMeta,
}

/// Datasource capability flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasourceMeta {
    /// Whether the datasource is eligible for streaming channels.
    pub live: bool,
}

/// A configured panel plugin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelDef {
    /// Plugin id, unique within the snapshot.
    pub id: String,
    /// Display name shown in selector UIs.
    pub name: String,
    pub info: PanelInfo,
    /// Whether the panel is eligible for streaming channels.
    pub live: bool,
}

/// Panel plugin metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelInfo {
    pub description: String,
}
