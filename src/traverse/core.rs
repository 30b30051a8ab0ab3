//! Core traversal implementation
//!
//! Three hop resolvers plus the chain orchestrator. Hops are strictly
//! ordered; each one reads the next resource through the store capability
//! and turns an absent or unresolvable reference into a typed failure
//! naming the hop and the entity it was traversing from.

use kube::ResourceExt;
use tracing::debug;

use crate::models::{
    ClusterServiceBroker, ClusterServiceClass, ClusterServicePlan, ReferenceAddress,
    ServiceBinding, ServiceInstance,
};
use crate::store::{CatalogStore, StoreError};

use super::error::{Hop, TraverseError};
use super::models::{ChainStage, Traversal};

/// Root lookup of the binding itself, a degenerate zero-hop traversal:
/// a missing binding gets the same dangling-reference shape as any other
/// broken link.
pub async fn fetch_binding(
    store: &dyn CatalogStore,
    namespace: &str,
    name: &str,
) -> Result<ServiceBinding, TraverseError> {
    let from = format!("binding {namespace}/{name}");
    store
        .get_binding(namespace, name)
        .await
        .map_err(|err| match err {
            StoreError::NotFound { .. } => TraverseError::DanglingReference {
                hop: Hop::BindingLookup,
                from,
                target: format!("binding {name:?}"),
            },
            other => TraverseError::Transport {
                hop: Hop::BindingLookup,
                from,
                source: other,
            },
        })
}

/// Resolve the instance a binding issues credentials for.
pub async fn binding_to_instance(
    store: &dyn CatalogStore,
    binding: &ServiceBinding,
) -> Result<ServiceInstance, TraverseError> {
    let from = binding.qualified_name();
    let namespace = binding.namespace().unwrap_or_default();
    let Some(target) = binding
        .spec
        .instance_ref
        .as_ref()
        .map(|r| r.name.clone())
        .filter(|n| !n.is_empty())
    else {
        return Err(TraverseError::MissingReference {
            hop: Hop::BindingToInstance,
            from,
            field: "spec.instanceRef.name",
        });
    };

    debug!(binding = %from, instance = %target, "resolving instance reference");
    store
        .get_instance(&namespace, &target)
        .await
        .map_err(|err| match err {
            StoreError::NotFound { .. } => TraverseError::DanglingReference {
                hop: Hop::BindingToInstance,
                from,
                target: format!("instance {target:?}"),
            },
            other => TraverseError::Transport {
                hop: Hop::BindingToInstance,
                from,
                source: other,
            },
        })
}

/// Resolve the class and plan an instance was provisioned from.
///
/// Both must resolve; a dangling plan aborts the hop even when the class
/// resolved, and the class is resolved first so its failure wins when both
/// are broken.
pub async fn instance_to_class_and_plan(
    store: &dyn CatalogStore,
    instance: &ServiceInstance,
) -> Result<(ClusterServiceClass, ClusterServicePlan), TraverseError> {
    let from = instance.qualified_name();

    let class_address =
        instance
            .spec
            .class_address()
            .ok_or_else(|| TraverseError::MissingReference {
                hop: Hop::InstanceToClassAndPlan,
                from: from.clone(),
                field: "spec.clusterServiceClassRef",
            })?;
    debug!(instance = %from, address = ?class_address, "resolving service class");
    let class = resolve_class(store, &from, &class_address).await?;

    let plan_address =
        instance
            .spec
            .plan_address()
            .ok_or_else(|| TraverseError::MissingReference {
                hop: Hop::InstanceToClassAndPlan,
                from: from.clone(),
                field: "spec.clusterServicePlanRef",
            })?;
    debug!(instance = %from, address = ?plan_address, "resolving service plan");
    let plan = resolve_plan(store, &from, &class.name_any(), &plan_address).await?;

    Ok((class, plan))
}

async fn resolve_class(
    store: &dyn CatalogStore,
    from: &str,
    address: &ReferenceAddress,
) -> Result<ClusterServiceClass, TraverseError> {
    const HOP: Hop = Hop::InstanceToClassAndPlan;
    match address {
        ReferenceAddress::ClusterName(name) => {
            store
                .get_service_class(name)
                .await
                .map_err(|err| match err {
                    StoreError::NotFound { .. } => TraverseError::DanglingReference {
                        hop: HOP,
                        from: from.to_string(),
                        target: format!("service class {name:?}"),
                    },
                    other => TraverseError::Transport {
                        hop: HOP,
                        from: from.to_string(),
                        source: other,
                    },
                })
        }
        ReferenceAddress::ExternalName(name) => {
            let mut matches = store
                .find_classes_by_external_name(name)
                .await
                .map_err(|err| TraverseError::Transport {
                    hop: HOP,
                    from: from.to_string(),
                    source: err,
                })?;
            // Anything but exactly one match is a dangling reference; the
            // resolver never picks a candidate from an ambiguous set.
            if matches.len() == 1 {
                Ok(matches.remove(0))
            } else {
                Err(TraverseError::DanglingReference {
                    hop: HOP,
                    from: from.to_string(),
                    target: format!(
                        "service class with external name {name:?} ({} matches)",
                        matches.len()
                    ),
                })
            }
        }
    }
}

async fn resolve_plan(
    store: &dyn CatalogStore,
    from: &str,
    class_name: &str,
    address: &ReferenceAddress,
) -> Result<ClusterServicePlan, TraverseError> {
    const HOP: Hop = Hop::InstanceToClassAndPlan;
    match address {
        ReferenceAddress::ClusterName(name) => {
            store.get_service_plan(name).await.map_err(|err| match err {
                StoreError::NotFound { .. } => TraverseError::DanglingReference {
                    hop: HOP,
                    from: from.to_string(),
                    target: format!("service plan {name:?}"),
                },
                other => TraverseError::Transport {
                    hop: HOP,
                    from: from.to_string(),
                    source: other,
                },
            })
        }
        ReferenceAddress::ExternalName(name) => {
            let mut matches = store
                .find_plans_by_external_name(class_name, name)
                .await
                .map_err(|err| TraverseError::Transport {
                    hop: HOP,
                    from: from.to_string(),
                    source: err,
                })?;
            if matches.len() == 1 {
                Ok(matches.remove(0))
            } else {
                Err(TraverseError::DanglingReference {
                    hop: HOP,
                    from: from.to_string(),
                    target: format!(
                        "service plan with external name {name:?} of class {class_name:?} ({} matches)",
                        matches.len()
                    ),
                })
            }
        }
    }
}

/// Resolve the broker that owns a service class.
pub async fn service_class_to_broker(
    store: &dyn CatalogStore,
    class: &ClusterServiceClass,
) -> Result<ClusterServiceBroker, TraverseError> {
    let from = class.qualified_name();
    let broker_name = class.spec.cluster_service_broker_name.clone();
    if broker_name.is_empty() {
        return Err(TraverseError::MissingReference {
            hop: Hop::ClassToBroker,
            from,
            field: "spec.clusterServiceBrokerName",
        });
    }

    debug!(class = %from, broker = %broker_name, "resolving broker");
    store
        .get_broker(&broker_name)
        .await
        .map_err(|err| match err {
            StoreError::NotFound { .. } => TraverseError::DanglingReference {
                hop: Hop::ClassToBroker,
                from,
                target: format!("broker {broker_name:?}"),
            },
            other => TraverseError::Transport {
                hop: Hop::ClassToBroker,
                from,
                source: other,
            },
        })
}

/// Walk the full chain behind a binding, stopping at the first broken
/// link. Returns every stage that resolved before the stop so the caller
/// can still present the partial chain.
pub async fn traverse_binding(store: &dyn CatalogStore, binding: &ServiceBinding) -> Traversal {
    let mut stages = Vec::new();

    let instance = match binding_to_instance(store, binding).await {
        Ok(instance) => instance,
        Err(err) => {
            return Traversal {
                stages,
                error: Some(err),
            };
        }
    };
    stages.push(ChainStage::Instance(instance.clone()));

    let (class, plan) = match instance_to_class_and_plan(store, &instance).await {
        Ok(pair) => pair,
        Err(err) => {
            return Traversal {
                stages,
                error: Some(err),
            };
        }
    };
    stages.push(ChainStage::ServiceClass(class.clone()));
    stages.push(ChainStage::ServicePlan(plan));

    match service_class_to_broker(store, &class).await {
        Ok(broker) => stages.push(ChainStage::Broker(broker)),
        Err(err) => {
            return Traversal {
                stages,
                error: Some(err),
            };
        }
    }

    Traversal {
        stages,
        error: None,
    }
}
