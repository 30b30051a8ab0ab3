//! Catalog read capability
//!
//! The traversal core never talks to the Kubernetes API directly; it goes
//! through the narrow [`CatalogStore`] trait so tests can substitute an
//! in-memory fixture store. `KubeCatalogStore` is the real adapter over a
//! kube client, `MemoryStore` the fixture implementation.

mod kube;
mod memory;

use async_trait::async_trait;

use crate::models::{
    CatalogKind, ClusterServiceBroker, ClusterServiceClass, ClusterServicePlan, ServiceBinding,
    ServiceInstance,
};

pub use self::kube::KubeCatalogStore;
pub use self::memory::MemoryStore;

/// Failure reading from the catalog.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} {name:?} not found")]
    NotFound { kind: CatalogKind, name: String },
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Read-only access to catalog resources.
///
/// Get methods address a resource by its stored name; the find methods
/// look up classes and plans by the catalog (external) name the broker
/// advertises. Plan external names are only unique within a class, so the
/// plan lookup is scoped by the owning class.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn get_binding(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ServiceBinding, StoreError>;

    async fn get_instance(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ServiceInstance, StoreError>;

    async fn get_service_class(&self, name: &str) -> Result<ClusterServiceClass, StoreError>;

    async fn get_service_plan(&self, name: &str) -> Result<ClusterServicePlan, StoreError>;

    async fn get_broker(&self, name: &str) -> Result<ClusterServiceBroker, StoreError>;

    async fn find_classes_by_external_name(
        &self,
        external_name: &str,
    ) -> Result<Vec<ClusterServiceClass>, StoreError>;

    async fn find_plans_by_external_name(
        &self,
        class_name: &str,
        external_name: &str,
    ) -> Result<Vec<ClusterServicePlan>, StoreError>;
}
