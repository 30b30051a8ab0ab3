//! Provenance traversal tests
//!
//! End-to-end walks over an in-memory fixture store, without a cluster.
//! The scenarios mirror the catalog shapes the CLI meets in practice: a
//! fully provisioned wordpress/mysql chain, bindings with absent or stale
//! references, and instances addressed by catalog name instead of direct
//! cluster references.

use kube::core::ObjectMeta;

use svcat::models::{
    ClusterObjectReference, ClusterServiceBroker, ClusterServiceBrokerSpec, ClusterServiceClass,
    ClusterServiceClassSpec, ClusterServicePlan, ClusterServicePlanSpec, LocalObjectReference,
    ServiceBinding, ServiceBindingSpec, ServiceInstance, ServiceInstanceSpec,
};
use svcat::store::MemoryStore;
use svcat::traverse::{self, ChainStage, Hop, TraverseError};

fn meta(namespace: Option<&str>, name: &str) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_string()),
        namespace: namespace.map(|ns| ns.to_string()),
        ..ObjectMeta::default()
    }
}

fn binding(namespace: &str, name: &str, instance: Option<&str>) -> ServiceBinding {
    ServiceBinding {
        metadata: meta(Some(namespace), name),
        spec: ServiceBindingSpec {
            instance_ref: instance.map(|n| LocalObjectReference {
                name: n.to_string(),
            }),
            secret_name: Some(format!("{name}-secret")),
            ..ServiceBindingSpec::default()
        },
        status: None,
    }
}

fn instance_by_external_names(
    namespace: &str,
    name: &str,
    class: &str,
    plan: &str,
) -> ServiceInstance {
    ServiceInstance {
        metadata: meta(Some(namespace), name),
        spec: ServiceInstanceSpec {
            cluster_service_class_external_name: Some(class.to_string()),
            cluster_service_plan_external_name: Some(plan.to_string()),
            ..ServiceInstanceSpec::default()
        },
        status: None,
    }
}

fn class(name: &str, broker: &str) -> ClusterServiceClass {
    ClusterServiceClass {
        metadata: meta(None, name),
        spec: ClusterServiceClassSpec {
            cluster_service_broker_name: broker.to_string(),
            external_name: name.to_string(),
            ..ClusterServiceClassSpec::default()
        },
        status: None,
    }
}

fn plan(name: &str, class_name: &str) -> ClusterServicePlan {
    ClusterServicePlan {
        metadata: meta(None, name),
        spec: ClusterServicePlanSpec {
            cluster_service_class_ref: Some(ClusterObjectReference {
                name: class_name.to_string(),
            }),
            external_name: name.to_string(),
            free: Some(true),
            ..ClusterServicePlanSpec::default()
        },
        status: None,
    }
}

fn broker(name: &str) -> ClusterServiceBroker {
    ClusterServiceBroker {
        metadata: meta(None, name),
        spec: ClusterServiceBrokerSpec {
            url: format!("https://{name}.example.com"),
            relist_behavior: None,
        },
        status: None,
    }
}

/// The spec'd wordpress/mysql chain: binding -> instance -> mysqldb/free
/// -> azure-broker.
fn wordpress_store() -> MemoryStore {
    MemoryStore::new()
        .with_binding(binding(
            "default",
            "wordpress-mysql-binding",
            Some("wordpress-mysql-instance"),
        ))
        .with_instance(instance_by_external_names(
            "default",
            "wordpress-mysql-instance",
            "mysqldb",
            "free",
        ))
        .with_class(class("mysqldb", "azure-broker"))
        .with_plan(plan("free", "mysqldb"))
        .with_broker(broker("azure-broker"))
}

fn stage_summary(stages: &[ChainStage]) -> Vec<(String, String)> {
    stages
        .iter()
        .map(|s| (s.label().to_string(), s.name()))
        .collect()
}

#[tokio::test]
async fn test_full_chain_resolves_in_order() {
    let store = wordpress_store();
    let root = traverse::fetch_binding(&store, "default", "wordpress-mysql-binding")
        .await
        .unwrap();

    let walk = traverse::traverse_binding(&store, &root).await;
    assert!(walk.is_complete(), "unexpected error: {:?}", walk.error);
    assert_eq!(
        stage_summary(&walk.stages),
        vec![
            ("INSTANCE".to_string(), "wordpress-mysql-instance".to_string()),
            ("SERVICE CLASS".to_string(), "mysqldb".to_string()),
            ("SERVICE PLAN".to_string(), "free".to_string()),
            ("BROKER".to_string(), "azure-broker".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_missing_instance_reference_returns_zero_stages() {
    let store = MemoryStore::new();
    let root = binding("default", "orphan", None);

    let walk = traverse::traverse_binding(&store, &root).await;
    assert!(walk.stages.is_empty());
    match walk.error {
        Some(TraverseError::MissingReference { hop, from, .. }) => {
            assert_eq!(hop, Hop::BindingToInstance);
            assert_eq!(from, "binding default/orphan");
        }
        other => panic!("expected missing reference, got {other:?}"),
    }
}

#[tokio::test]
async fn test_dangling_instance_reference_names_both_sides() {
    let store = MemoryStore::new();
    let root = binding("default", "stale", Some("deleted-instance"));

    let walk = traverse::traverse_binding(&store, &root).await;
    assert!(walk.stages.is_empty());
    match walk.error {
        Some(TraverseError::DanglingReference { hop, from, target }) => {
            assert_eq!(hop, Hop::BindingToInstance);
            assert_eq!(from, "binding default/stale");
            assert_eq!(target, "instance \"deleted-instance\"");
        }
        other => panic!("expected dangling reference, got {other:?}"),
    }
}

#[tokio::test]
async fn test_plan_failure_excludes_resolved_class() {
    // Class resolves, plan does not: the hop is all-or-nothing, so the
    // walk ends with only the instance stage.
    let store = MemoryStore::new()
        .with_binding(binding("default", "b", Some("i")))
        .with_instance(instance_by_external_names("default", "i", "mysqldb", "gone"))
        .with_class(class("mysqldb", "azure-broker"));

    let root = traverse::fetch_binding(&store, "default", "b").await.unwrap();
    let walk = traverse::traverse_binding(&store, &root).await;

    let labels: Vec<_> = walk.stages.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["INSTANCE"]);
    match walk.error {
        Some(TraverseError::DanglingReference { target, .. }) => {
            assert!(target.contains("gone"), "target was {target:?}");
        }
        other => panic!("expected dangling plan reference, got {other:?}"),
    }
}

#[tokio::test]
async fn test_broker_failure_keeps_class_and_plan_stages() {
    let store = MemoryStore::new()
        .with_binding(binding("default", "b", Some("i")))
        .with_instance(instance_by_external_names("default", "i", "mysqldb", "free"))
        .with_class(class("mysqldb", "vanished-broker"))
        .with_plan(plan("free", "mysqldb"));

    let root = traverse::fetch_binding(&store, "default", "b").await.unwrap();
    let walk = traverse::traverse_binding(&store, &root).await;

    let labels: Vec<_> = walk.stages.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["INSTANCE", "SERVICE CLASS", "SERVICE PLAN"]);
    assert!(matches!(
        walk.error,
        Some(TraverseError::DanglingReference { hop: Hop::ClassToBroker, .. })
    ));
}

#[tokio::test]
async fn test_idempotent_traversal_over_unchanged_store() {
    let store = wordpress_store();
    let root = traverse::fetch_binding(&store, "default", "wordpress-mysql-binding")
        .await
        .unwrap();

    let first = traverse::traverse_binding(&store, &root).await;
    let second = traverse::traverse_binding(&store, &root).await;
    assert_eq!(stage_summary(&first.stages), stage_summary(&second.stages));
    assert_eq!(
        first.error.map(|e| e.to_string()),
        second.error.map(|e| e.to_string())
    );
}

#[tokio::test]
async fn test_idempotent_failure_over_unchanged_store() {
    let store = MemoryStore::new();
    let root = binding("default", "stale", Some("deleted-instance"));

    let first = traverse::traverse_binding(&store, &root).await;
    let second = traverse::traverse_binding(&store, &root).await;
    assert_eq!(
        first.error.expect("first walk fails").to_string(),
        second.error.expect("second walk fails").to_string()
    );
}

#[tokio::test]
async fn test_root_lookup_of_missing_binding() {
    let store = MemoryStore::new();
    let err = traverse::fetch_binding(&store, "default", "nope")
        .await
        .unwrap_err();
    assert_eq!(err.hop(), Hop::BindingLookup);
    assert!(matches!(err, TraverseError::DanglingReference { .. }));
}
