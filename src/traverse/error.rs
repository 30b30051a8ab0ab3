//! Traversal failure taxonomy

use std::fmt;

use crate::store::StoreError;

/// The reference-resolution step at which a traversal failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hop {
    /// The root lookup of the binding itself, a zero-hop traversal.
    BindingLookup,
    BindingToInstance,
    InstanceToClassAndPlan,
    ClassToBroker,
}

impl Hop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hop::BindingLookup => "binding lookup",
            Hop::BindingToInstance => "binding -> instance",
            Hop::InstanceToClassAndPlan => "instance -> class/plan",
            Hop::ClassToBroker => "class -> broker",
        }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A broken link in the provenance chain.
///
/// Every variant names the hop it happened at and the identity of the
/// entity being traversed from, so a failure deep in the chain still reads
/// as one precise sentence.
#[derive(Debug, thiserror::Error)]
pub enum TraverseError {
    /// A reference field traversal requires was absent or empty.
    #[error("{hop}: {from} has no {field} reference to follow")]
    MissingReference {
        hop: Hop,
        from: String,
        field: &'static str,
    },

    /// A reference pointed at a name that does not resolve to exactly one
    /// resource in the store.
    #[error("{hop}: {from} references {target}, which does not exist")]
    DanglingReference {
        hop: Hop,
        from: String,
        target: String,
    },

    /// The store could not be read; the underlying cause is preserved.
    #[error("{hop}: failed to read the catalog while traversing from {from}")]
    Transport {
        hop: Hop,
        from: String,
        #[source]
        source: StoreError,
    },
}

impl TraverseError {
    /// The hop at which the walk stopped.
    pub fn hop(&self) -> Hop {
        match self {
            TraverseError::MissingReference { hop, .. }
            | TraverseError::DanglingReference { hop, .. }
            | TraverseError::Transport { hop, .. } => *hop,
        }
    }
}
