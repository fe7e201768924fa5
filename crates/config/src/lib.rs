//! Boot snapshot loading and validation for the live-channel subsystem.
//!
//! Snapshot files: `gridstream.toml`, `gridstream.yaml`, or `gridstream.json`,
//! searched in `./` then `~/.config/gridstream/`.

pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    loader::{config_dir, discover_and_load, load_settings},
    schema::{BootSettings, DatasourceDef, DatasourceMeta, PanelDef, PanelInfo},
    validate::{Diagnostic, Severity, ValidationResult, validate},
};
