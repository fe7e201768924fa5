//! One registry implementation per channel scope.

pub mod core;
pub mod datasource;
pub mod plugin;
pub mod stream;

pub use {
    self::core::CoreScope,
    datasource::{DatasourceInstance, DatasourceResolver, DatasourceScope},
    plugin::{PluginInstance, PluginLoader, PluginScope},
    stream::StreamScope,
};
