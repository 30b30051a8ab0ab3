//! Kubernetes-backed catalog store
//!
//! Adapts the aggregated Service Catalog API to the [`CatalogStore`]
//! capability. 404s from the API server become [`StoreError::NotFound`];
//! everything else is surfaced as a transport failure with the kube error
//! preserved as the cause.

use async_trait::async_trait;
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::models::{
    CatalogKind, ClusterServiceBroker, ClusterServiceClass, ClusterServicePlan, ServiceBinding,
    ServiceInstance,
};

use super::{CatalogStore, StoreError};

pub struct KubeCatalogStore {
    client: Client,
}

impl KubeCatalogStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn map_get_error(err: kube::Error, kind: CatalogKind, name: &str) -> StoreError {
    match err {
        kube::Error::Api(response) if response.code == 404 => StoreError::NotFound {
            kind,
            name: name.to_string(),
        },
        other => StoreError::Transport(other.into()),
    }
}

#[async_trait]
impl CatalogStore for KubeCatalogStore {
    async fn get_binding(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ServiceBinding, StoreError> {
        debug!(namespace, name, "fetching binding");
        let api: Api<ServiceBinding> = Api::namespaced(self.client.clone(), namespace);
        api.get(name)
            .await
            .map_err(|e| map_get_error(e, CatalogKind::ServiceBinding, name))
    }

    async fn get_instance(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ServiceInstance, StoreError> {
        debug!(namespace, name, "fetching instance");
        let api: Api<ServiceInstance> = Api::namespaced(self.client.clone(), namespace);
        api.get(name)
            .await
            .map_err(|e| map_get_error(e, CatalogKind::ServiceInstance, name))
    }

    async fn get_service_class(&self, name: &str) -> Result<ClusterServiceClass, StoreError> {
        debug!(name, "fetching service class");
        let api: Api<ClusterServiceClass> = Api::all(self.client.clone());
        api.get(name)
            .await
            .map_err(|e| map_get_error(e, CatalogKind::ClusterServiceClass, name))
    }

    async fn get_service_plan(&self, name: &str) -> Result<ClusterServicePlan, StoreError> {
        debug!(name, "fetching service plan");
        let api: Api<ClusterServicePlan> = Api::all(self.client.clone());
        api.get(name)
            .await
            .map_err(|e| map_get_error(e, CatalogKind::ClusterServicePlan, name))
    }

    async fn get_broker(&self, name: &str) -> Result<ClusterServiceBroker, StoreError> {
        debug!(name, "fetching broker");
        let api: Api<ClusterServiceBroker> = Api::all(self.client.clone());
        api.get(name)
            .await
            .map_err(|e| map_get_error(e, CatalogKind::ClusterServiceBroker, name))
    }

    async fn find_classes_by_external_name(
        &self,
        external_name: &str,
    ) -> Result<Vec<ClusterServiceClass>, StoreError> {
        debug!(external_name, "listing service classes by external name");
        let api: Api<ClusterServiceClass> = Api::all(self.client.clone());
        // The aggregated catalog API supports field selectors on externalName.
        let params = ListParams::default().fields(&format!("spec.externalName={external_name}"));
        let list = api
            .list(&params)
            .await
            .map_err(|e| StoreError::Transport(e.into()))?;
        Ok(list.items)
    }

    async fn find_plans_by_external_name(
        &self,
        class_name: &str,
        external_name: &str,
    ) -> Result<Vec<ClusterServicePlan>, StoreError> {
        debug!(
            class_name,
            external_name, "listing service plans by external name"
        );
        let api: Api<ClusterServicePlan> = Api::all(self.client.clone());
        let params = ListParams::default().fields(&format!(
            "spec.externalName={external_name},spec.clusterServiceClassRef.name={class_name}"
        ));
        let list = api
            .list(&params)
            .await
            .map_err(|e| StoreError::Transport(e.into()))?;
        Ok(list.items)
    }
}
