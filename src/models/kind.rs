//! Service Catalog resource kind definitions

use std::fmt;

/// Enumeration of the Service Catalog resource kinds this tool reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    ServiceBinding,
    ServiceInstance,
    ClusterServiceClass,
    ClusterServicePlan,
    ClusterServiceBroker,
}

impl CatalogKind {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::ServiceBinding => "ServiceBinding",
            CatalogKind::ServiceInstance => "ServiceInstance",
            CatalogKind::ClusterServiceClass => "ClusterServiceClass",
            CatalogKind::ClusterServicePlan => "ClusterServicePlan",
            CatalogKind::ClusterServiceBroker => "ClusterServiceBroker",
        }
    }

    /// True for kinds that live in a namespace rather than at cluster scope.
    pub fn namespaced(&self) -> bool {
        matches!(
            self,
            CatalogKind::ServiceBinding | CatalogKind::ServiceInstance
        )
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trip() {
        assert_eq!(CatalogKind::ServiceBinding.as_str(), "ServiceBinding");
        assert_eq!(
            CatalogKind::ClusterServiceBroker.to_string(),
            "ClusterServiceBroker"
        );
    }

    #[test]
    fn test_namespaced_split() {
        assert!(CatalogKind::ServiceBinding.namespaced());
        assert!(CatalogKind::ServiceInstance.namespaced());
        assert!(!CatalogKind::ClusterServiceClass.namespaced());
        assert!(!CatalogKind::ClusterServicePlan.namespaced());
        assert!(!CatalogKind::ClusterServiceBroker.namespaced());
    }
}
