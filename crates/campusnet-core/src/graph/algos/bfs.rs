use crate::graph::types::NodeId;
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// Check whether `to` can be reached from `from` using open edges only.
///
/// Weights are ignored and no path is materialised.
#[tracing::instrument(skip(provider), fields(from = %from, to = %to))]
pub fn is_connected(provider: &dyn GraphProvider, from: NodeId, to: NodeId) -> bool {
    if !provider.contains(from) || !provider.contains(to) {
        return false;
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    visited.insert(from);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            tracing::debug!(visited = visited.len(), "connected");
            return true;
        }

        for neighbor in provider.open_neighbors(current) {
            if visited.insert(neighbor.node) {
                queue.push_back(neighbor.node);
            }
        }
    }

    tracing::debug!(visited = visited.len(), "not connected");
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeStore;

    fn two_components() -> EdgeStore {
        let mut store = EdgeStore::new();
        store.add_edge(NodeId(1), NodeId(2), 5);
        store.add_edge(NodeId(2), NodeId(3), 5);
        store.add_edge(NodeId(10), NodeId(11), 1);
        store
    }

    #[test]
    fn test_connected_along_open_edges() {
        let store = two_components();
        assert!(is_connected(&store, NodeId(1), NodeId(3)));
        assert!(is_connected(&store, NodeId(3), NodeId(1)));
        assert!(!is_connected(&store, NodeId(1), NodeId(11)));
    }

    #[test]
    fn test_node_connected_to_itself() {
        let mut store = EdgeStore::new();
        store.add_node(NodeId(7));
        assert!(is_connected(&store, NodeId(7), NodeId(7)));
    }

    #[test]
    fn test_unknown_endpoints() {
        let store = two_components();
        assert!(!is_connected(&store, NodeId(999), NodeId(1)));
        assert!(!is_connected(&store, NodeId(1), NodeId(999)));
        assert!(!is_connected(&store, NodeId(999), NodeId(999)));
    }

    #[test]
    fn test_closing_incident_edges_disconnects() {
        let mut store = two_components();
        store.add_edge(NodeId(1), NodeId(3), 50);
        store
            .toggle_edges(&[(NodeId(2), NodeId(3)), (NodeId(1), NodeId(3))])
            .unwrap();
        assert!(!is_connected(&store, NodeId(1), NodeId(3)));
        assert!(is_connected(&store, NodeId(1), NodeId(2)));
    }
}
