//! Live-channel scope registry.
//!
//! Pub/sub channel namespaces are partitioned into four scopes (core,
//! datasource, plugin, stream). Each scope resolves a namespace to the
//! [`support::ChannelSupport`] descriptor governing what operations are
//! valid on that channel, and enumerates its namespaces for discovery UIs.
//! Datasource and plugin scopes resolve through injected host collaborators
//! and cache their discovery scan for the process lifetime.

pub mod address;
pub mod error;
pub mod registry;
pub mod scope;
pub mod scopes;
pub mod support;

pub use {
    address::ChannelAddress,
    error::{Error, Result},
    registry::{LiveChannelRegistry, ScopeRegistry},
    scope::{ChannelScope, NamespaceEntry},
    scopes::{
        CoreScope, DatasourceInstance, DatasourceResolver, DatasourceScope, PluginInstance,
        PluginLoader, PluginScope, StreamScope,
    },
    support::{
        ChannelConfig, ChannelSupport, MeasurementsSupport, StaticChannelSupport,
        default_measurements_support,
    },
};
