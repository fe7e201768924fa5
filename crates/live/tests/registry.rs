//! Cross-scope scenarios against the full router with mock collaborators.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use async_trait::async_trait;

use gridstream_config::{BootSettings, DatasourceDef, DatasourceMeta, PanelDef, PanelInfo};
use gridstream_live::{
    ChannelAddress, ChannelConfig, ChannelScope, ChannelSupport, CoreScope, DatasourceInstance,
    DatasourceResolver, DatasourceScope, Error, LiveChannelRegistry, NamespaceEntry,
    PluginInstance, PluginLoader, PluginScope, Result, ScopeRegistry, StaticChannelSupport,
    StreamScope, default_measurements_support,
};

struct FakeDatasource {
    support: Option<Arc<dyn ChannelSupport>>,
}

impl DatasourceInstance for FakeDatasource {
    fn channel_support(&self) -> Option<Arc<dyn ChannelSupport>> {
        self.support.clone()
    }
}

struct FakeResolver;

#[async_trait]
impl DatasourceResolver for FakeResolver {
    async fn get(&self, name_or_type: &str) -> Result<Arc<dyn DatasourceInstance>> {
        match name_or_type {
            "Telemetry" => Ok(Arc::new(FakeDatasource { support: None })),
            other => Err(Error::unknown_datasource(other)),
        }
    }
}

struct FakePlugin {
    support: Option<Arc<dyn ChannelSupport>>,
}

impl PluginInstance for FakePlugin {
    fn channel_support(&self) -> Option<Arc<dyn ChannelSupport>> {
        self.support.clone()
    }
}

struct FakeLoader;

#[async_trait]
impl PluginLoader for FakeLoader {
    async fn load(&self, plugin_id: &str) -> Result<Option<Arc<dyn PluginInstance>>> {
        match plugin_id {
            "testdata" => Ok(Some(Arc::new(FakePlugin {
                support: Some(default_measurements_support()),
            }))),
            "gauge" => Ok(Some(Arc::new(FakePlugin { support: None }))),
            _ => Ok(None),
        }
    }
}

fn settings() -> Arc<BootSettings> {
    Arc::new(BootSettings {
        datasources: vec![
            DatasourceDef {
                id: "ds-1".into(),
                name: "Telemetry".into(),
                ty: "telemetry-db".into(),
                meta: DatasourceMeta { live: true },
            },
            DatasourceDef {
                id: "ds-2".into(),
                name: "Broken".into(),
                ty: "loki".into(),
                meta: DatasourceMeta { live: true },
            },
            DatasourceDef {
                id: "ds-3".into(),
                name: "Static".into(),
                ty: "csv".into(),
                meta: DatasourceMeta { live: false },
            },
        ],
        panels: vec![
            PanelDef {
                id: "testdata".into(),
                name: "Test data".into(),
                info: PanelInfo {
                    description: "synthetic streams".into(),
                },
                live: true,
            },
            PanelDef {
                id: "gauge".into(),
                name: "Gauge".into(),
                info: PanelInfo::default(),
                live: true,
            },
        ],
    })
}

async fn build_registry() -> (LiveChannelRegistry, Arc<dyn ChannelSupport>) {
    let settings = settings();
    let core = Arc::new(CoreScope::new());
    let alpha_support: Arc<dyn ChannelSupport> =
        Arc::new(StaticChannelSupport::new(vec![ChannelConfig {
            path: "updates".into(),
            description: Some("dashboard updates".into()),
            can_publish: false,
        }]));
    core.register("alpha", "desc-A", alpha_support.clone()).await;

    let registry = LiveChannelRegistry::new(
        core,
        Arc::new(DatasourceScope::new(
            Arc::new(FakeResolver),
            settings.clone(),
            default_measurements_support(),
        )),
        Arc::new(PluginScope::new(Arc::new(FakeLoader), settings)),
        Arc::new(StreamScope::new(default_measurements_support())),
    );
    (registry, alpha_support)
}

#[tokio::test]
async fn core_scope_round_trip() {
    let (registry, alpha_support) = build_registry().await;

    let names = registry.namespaces(ChannelScope::Core).await;
    assert_eq!(names, vec![NamespaceEntry::new("alpha", "alpha", "desc-A")]);

    let support = registry
        .channel_support(ChannelScope::Core, "alpha")
        .await
        .unwrap();
    assert!(Arc::ptr_eq(&support, &alpha_support));

    let err = registry
        .channel_support(ChannelScope::Core, "beta")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown feature: beta");
}

#[tokio::test]
async fn datasource_discovery_swallows_per_entry_failures() {
    let (registry, _) = build_registry().await;

    let names = registry.namespaces(ChannelScope::Datasource).await;
    assert_eq!(
        names,
        vec![NamespaceEntry::new(
            "telemetry-db",
            "Telemetry",
            "telemetry-db"
        )]
    );
}

#[tokio::test]
async fn plugin_scope_distinguishes_not_found_from_unsupported() {
    let (registry, _) = build_registry().await;

    let missing = registry
        .channel_support(ChannelScope::Plugin, "missing")
        .await
        .unwrap_err();
    assert!(missing.is_not_found());

    let unsupported = registry
        .channel_support(ChannelScope::Plugin, "gauge")
        .await
        .unwrap_err();
    assert!(unsupported.is_unsupported());

    let names = registry.namespaces(ChannelScope::Plugin).await;
    assert_eq!(
        names,
        vec![NamespaceEntry::new(
            "testdata",
            "Test data",
            "synthetic streams"
        )]
    );
}

#[tokio::test]
async fn stream_scope_accepts_arbitrary_namespaces() {
    let (registry, _) = build_registry().await;

    let support = registry
        .channel_support(ChannelScope::Stream, "whatever")
        .await
        .unwrap();
    assert!(support.channel_config("a/b").is_some());
    assert!(registry.namespaces(ChannelScope::Stream).await.is_empty());
}

#[tokio::test]
async fn address_resolution_reaches_the_per_path_config() {
    let (registry, _) = build_registry().await;

    let addr = ChannelAddress::parse("core/alpha/updates").unwrap();
    let cfg = registry.channel_config(&addr).await.unwrap();
    assert_eq!(cfg.description.as_deref(), Some("dashboard updates"));
    assert!(!cfg.can_publish);

    let bad = ChannelAddress::parse("core/alpha/nope").unwrap();
    let err = registry.channel_config(&bad).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn concurrent_discovery_scans_once() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingResolver(Arc<AtomicUsize>);

    #[async_trait]
    impl DatasourceResolver for CountingResolver {
        async fn get(&self, name_or_type: &str) -> Result<Arc<dyn DatasourceInstance>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            match name_or_type {
                "Telemetry" => Ok(Arc::new(FakeDatasource { support: None })),
                other => Err(Error::unknown_datasource(other)),
            }
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let scope = Arc::new(DatasourceScope::new(
        Arc::new(CountingResolver(calls.clone())),
        settings(),
        default_measurements_support(),
    ));

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let scope = scope.clone();
            tokio::spawn(async move { scope.namespaces().await })
        })
        .collect();
    for task in tasks {
        let names = task.await.unwrap();
        assert_eq!(
            names,
            vec![NamespaceEntry::new(
                "telemetry-db",
                "Telemetry",
                "telemetry-db"
            )]
        );
    }

    // One scan over the two live-flagged datasources, no matter how many
    // callers raced the first populate.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
