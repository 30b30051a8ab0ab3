//! In-memory catalog store
//!
//! HashMap-backed [`CatalogStore`] used as the fixture store in tests and
//! wherever a traversal needs to run without a cluster. Resources are
//! keyed the same way the API server keys them: (namespace, name) for
//! namespaced kinds, name for cluster-scoped ones.

use std::collections::HashMap;

use async_trait::async_trait;
use kube::ResourceExt;

use crate::models::{
    CatalogKind, ClusterServiceBroker, ClusterServiceClass, ClusterServicePlan, ServiceBinding,
    ServiceInstance,
};

use super::{CatalogStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bindings: HashMap<(String, String), ServiceBinding>,
    instances: HashMap<(String, String), ServiceInstance>,
    classes: HashMap<String, ClusterServiceClass>,
    plans: HashMap<String, ClusterServicePlan>,
    brokers: HashMap<String, ClusterServiceBroker>,
}

fn namespaced_key(namespace: Option<String>, name: String) -> (String, String) {
    (namespace.unwrap_or_default(), name)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binding(mut self, binding: ServiceBinding) -> Self {
        let key = namespaced_key(binding.namespace(), binding.name_any());
        self.bindings.insert(key, binding);
        self
    }

    pub fn with_instance(mut self, instance: ServiceInstance) -> Self {
        let key = namespaced_key(instance.namespace(), instance.name_any());
        self.instances.insert(key, instance);
        self
    }

    pub fn with_class(mut self, class: ClusterServiceClass) -> Self {
        self.classes.insert(class.name_any(), class);
        self
    }

    pub fn with_plan(mut self, plan: ClusterServicePlan) -> Self {
        self.plans.insert(plan.name_any(), plan);
        self
    }

    pub fn with_broker(mut self, broker: ClusterServiceBroker) -> Self {
        self.brokers.insert(broker.name_any(), broker);
        self
    }
}

fn not_found(kind: CatalogKind, name: &str) -> StoreError {
    StoreError::NotFound {
        kind,
        name: name.to_string(),
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn get_binding(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ServiceBinding, StoreError> {
        self.bindings
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| not_found(CatalogKind::ServiceBinding, name))
    }

    async fn get_instance(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ServiceInstance, StoreError> {
        self.instances
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| not_found(CatalogKind::ServiceInstance, name))
    }

    async fn get_service_class(&self, name: &str) -> Result<ClusterServiceClass, StoreError> {
        self.classes
            .get(name)
            .cloned()
            .ok_or_else(|| not_found(CatalogKind::ClusterServiceClass, name))
    }

    async fn get_service_plan(&self, name: &str) -> Result<ClusterServicePlan, StoreError> {
        self.plans
            .get(name)
            .cloned()
            .ok_or_else(|| not_found(CatalogKind::ClusterServicePlan, name))
    }

    async fn get_broker(&self, name: &str) -> Result<ClusterServiceBroker, StoreError> {
        self.brokers
            .get(name)
            .cloned()
            .ok_or_else(|| not_found(CatalogKind::ClusterServiceBroker, name))
    }

    async fn find_classes_by_external_name(
        &self,
        external_name: &str,
    ) -> Result<Vec<ClusterServiceClass>, StoreError> {
        Ok(self
            .classes
            .values()
            .filter(|class| class.spec.external_name == external_name)
            .cloned()
            .collect())
    }

    async fn find_plans_by_external_name(
        &self,
        class_name: &str,
        external_name: &str,
    ) -> Result<Vec<ClusterServicePlan>, StoreError> {
        Ok(self
            .plans
            .values()
            .filter(|plan| {
                plan.spec.external_name == external_name
                    && plan
                        .spec
                        .cluster_service_class_ref
                        .as_ref()
                        .is_some_and(|r| r.name == class_name)
            })
            .cloned()
            .collect())
    }
}
