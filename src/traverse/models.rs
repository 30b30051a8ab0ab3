//! Data structures for traversal results

use kube::ResourceExt;

use crate::models::{
    ClusterServiceBroker, ClusterServiceClass, ClusterServicePlan, ServiceInstance,
};

use super::error::TraverseError;

/// One resolved stage of the provenance chain, in walk order.
#[derive(Debug, Clone)]
pub enum ChainStage {
    Instance(ServiceInstance),
    ServiceClass(ClusterServiceClass),
    ServicePlan(ClusterServicePlan),
    Broker(ClusterServiceBroker),
}

impl ChainStage {
    /// Stage banner used by the presenter.
    pub fn label(&self) -> &'static str {
        match self {
            ChainStage::Instance(_) => "INSTANCE",
            ChainStage::ServiceClass(_) => "SERVICE CLASS",
            ChainStage::ServicePlan(_) => "SERVICE PLAN",
            ChainStage::Broker(_) => "BROKER",
        }
    }

    /// Name of the resolved resource.
    pub fn name(&self) -> String {
        match self {
            ChainStage::Instance(instance) => instance.name_any(),
            ChainStage::ServiceClass(class) => class.name_any(),
            ChainStage::ServicePlan(plan) => plan.name_any(),
            ChainStage::Broker(broker) => broker.name_any(),
        }
    }
}

/// Outcome of walking the chain behind a binding.
///
/// `stages` holds every hop that resolved, in walk order, so a caller can
/// still present the partial chain when the walk stopped early; `error`
/// names the hop it stopped at. A chain is either fully resolved or
/// explicitly stopped, never silently partial.
#[derive(Debug)]
pub struct Traversal {
    pub stages: Vec<ChainStage>,
    pub error: Option<TraverseError>,
}

impl Traversal {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}
