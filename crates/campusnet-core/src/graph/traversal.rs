use crate::graph::store::EdgeStore;
use crate::graph::types::{Neighbor, NodeId};

/// Trait for providing graph adjacency to the traversal algorithms
///
/// Only open edges are ever reported; closed edges are invisible to every
/// algorithm in `graph::algos`.
pub trait GraphProvider {
    fn contains(&self, node: NodeId) -> bool;
    fn open_neighbors(&self, node: NodeId) -> Vec<Neighbor>;
    fn node_ids(&self) -> Vec<NodeId>;
}

impl GraphProvider for EdgeStore {
    fn contains(&self, node: NodeId) -> bool {
        EdgeStore::contains(self, node)
    }

    fn open_neighbors(&self, node: NodeId) -> Vec<Neighbor> {
        EdgeStore::open_neighbors(self, node).collect()
    }

    fn node_ids(&self) -> Vec<NodeId> {
        EdgeStore::node_ids(self)
    }
}
