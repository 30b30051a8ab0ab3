//! Service Catalog resource types
//!
//! Hand-maintained equivalents of the `servicecatalog.k8s.io/v1beta1` API
//! types, limited to the fields this tool reads. Bindings and instances are
//! namespaced; classes, plans and brokers are cluster-scoped catalog
//! entries owned by a broker.

use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};

use super::reference::ReferenceAddress;

/// Reference to a namespaced object in the same namespace.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LocalObjectReference {
    #[serde(default)]
    pub name: String,
}

/// Reference to a cluster-scoped object by name.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ClusterObjectReference {
    #[serde(default)]
    pub name: String,
}

/// A single entry in a resource's condition history.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCondition {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub status: String,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub last_transition_time: Option<String>,
}

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default)]
#[kube(
    group = "servicecatalog.k8s.io",
    version = "v1beta1",
    kind = "ServiceBinding",
    plural = "servicebindings",
    namespaced,
    status = "ServiceBindingStatus",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBindingSpec {
    /// The instance this binding issues credentials for. Same namespace as
    /// the binding.
    pub instance_ref: Option<LocalObjectReference>,
    pub secret_name: Option<String>,
    #[serde(rename = "externalID")]
    pub external_id: Option<String>,
    pub parameters: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBindingStatus {
    #[serde(default)]
    pub conditions: Vec<ServiceCondition>,
}

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default)]
#[kube(
    group = "servicecatalog.k8s.io",
    version = "v1beta1",
    kind = "ServiceInstance",
    plural = "serviceinstances",
    namespaced,
    status = "ServiceInstanceStatus",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstanceSpec {
    /// Catalog (external) name of the class, as advertised by the broker.
    pub cluster_service_class_external_name: Option<String>,
    /// Catalog (external) name of the plan, scoped to the class above.
    pub cluster_service_plan_external_name: Option<String>,
    /// Direct cluster-scoped class reference, filled in by the controller
    /// once the external name has been resolved.
    pub cluster_service_class_ref: Option<ClusterObjectReference>,
    /// Direct cluster-scoped plan reference.
    pub cluster_service_plan_ref: Option<ClusterObjectReference>,
    #[serde(rename = "externalID")]
    pub external_id: Option<String>,
    pub parameters: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstanceStatus {
    #[serde(default)]
    pub conditions: Vec<ServiceCondition>,
}

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default)]
#[kube(
    group = "servicecatalog.k8s.io",
    version = "v1beta1",
    kind = "ClusterServiceClass",
    plural = "clusterserviceclasses",
    status = "ClusterServiceClassStatus",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceClassSpec {
    /// Name of the broker this class was fetched from. Set by the catalog
    /// controller for every class it creates.
    #[serde(default)]
    pub cluster_service_broker_name: String,
    #[serde(default)]
    pub external_name: String,
    #[serde(rename = "externalID")]
    pub external_id: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub bindable: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceClassStatus {
    #[serde(default)]
    pub removed_from_broker_catalog: bool,
}

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default)]
#[kube(
    group = "servicecatalog.k8s.io",
    version = "v1beta1",
    kind = "ClusterServicePlan",
    plural = "clusterserviceplans",
    status = "ClusterServicePlanStatus",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServicePlanSpec {
    #[serde(default)]
    pub cluster_service_broker_name: String,
    /// The class this plan belongs to. Plan external names are only unique
    /// within their class.
    pub cluster_service_class_ref: Option<ClusterObjectReference>,
    #[serde(default)]
    pub external_name: String,
    #[serde(rename = "externalID")]
    pub external_id: Option<String>,
    pub description: Option<String>,
    pub free: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServicePlanStatus {
    #[serde(default)]
    pub removed_from_broker_catalog: bool,
}

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default)]
#[kube(
    group = "servicecatalog.k8s.io",
    version = "v1beta1",
    kind = "ClusterServiceBroker",
    plural = "clusterservicebrokers",
    status = "ClusterServiceBrokerStatus",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceBrokerSpec {
    #[serde(default)]
    pub url: String,
    pub relist_behavior: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceBrokerStatus {
    #[serde(default)]
    pub conditions: Vec<ServiceCondition>,
}

impl ServiceBinding {
    /// Identity string used in traversal errors and logs.
    pub fn qualified_name(&self) -> String {
        format!(
            "binding {}/{}",
            self.namespace().unwrap_or_default(),
            self.name_any()
        )
    }
}

impl ServiceInstance {
    pub fn qualified_name(&self) -> String {
        format!(
            "instance {}/{}",
            self.namespace().unwrap_or_default(),
            self.name_any()
        )
    }
}

impl ServiceInstanceSpec {
    /// How this instance addresses its class, cluster-scoped reference
    /// taking precedence over the catalog name. None when neither mode is
    /// populated.
    pub fn class_address(&self) -> Option<ReferenceAddress> {
        ReferenceAddress::from_fields(
            self.cluster_service_class_ref.as_ref().map(|r| r.name.as_str()),
            self.cluster_service_class_external_name.as_deref(),
        )
    }

    /// How this instance addresses its plan. Same precedence as
    /// [`class_address`](Self::class_address).
    pub fn plan_address(&self) -> Option<ReferenceAddress> {
        ReferenceAddress::from_fields(
            self.cluster_service_plan_ref.as_ref().map(|r| r.name.as_str()),
            self.cluster_service_plan_external_name.as_deref(),
        )
    }
}

impl ClusterServiceClass {
    pub fn qualified_name(&self) -> String {
        format!("service class {}", self.name_any())
    }
}

impl ClusterServicePlan {
    pub fn qualified_name(&self) -> String {
        format!("service plan {}", self.name_any())
    }
}

impl ClusterServiceBroker {
    pub fn qualified_name(&self) -> String {
        format!("broker {}", self.name_any())
    }
}
