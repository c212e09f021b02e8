//! Zone cost: the cheapest open sub-network linking a residence to a set of
//! class locations.
//!
//! 1. Vertex discovery: the residence plus every node on the shortest path
//!    to each reachable location.
//! 2. Induced subgraph: open edges with both endpoints discovered, each
//!    undirected edge listed once (`from < to`).
//! 3. Prim's MST over that subgraph, starting from the residence.

use std::collections::HashSet;

use crate::graph::algos::{minimum_spanning_tree, shortest_path};
use crate::graph::types::{InducedEdge, NodeId, PathResult, ZoneCost};
use crate::graph::GraphProvider;

/// Vertices collected from the residence's shortest paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Discovery order, residence first, no duplicates
    pub vertices: Vec<NodeId>,
    /// Routes to every reachable location
    pub routes: Vec<PathResult>,
    /// Locations with no open route from the residence
    pub unreachable: Vec<NodeId>,
}

/// Collect the residence and every node lying on a shortest path to one of
/// `locations`. An unknown residence yields an empty vertex set.
pub fn discover_vertices(
    provider: &dyn GraphProvider,
    residence: NodeId,
    locations: &[NodeId],
) -> Discovery {
    let mut discovery = Discovery {
        vertices: Vec::new(),
        routes: Vec::new(),
        unreachable: Vec::new(),
    };

    if !provider.contains(residence) {
        discovery.unreachable = locations.to_vec();
        return discovery;
    }

    let mut seen: HashSet<NodeId> = HashSet::new();
    seen.insert(residence);
    discovery.vertices.push(residence);

    for &location in locations {
        let route = shortest_path(provider, residence, location);
        if !route.is_reachable() {
            discovery.unreachable.push(location);
            continue;
        }
        for &node in &route.path {
            if seen.insert(node) {
                discovery.vertices.push(node);
            }
        }
        discovery.routes.push(route);
    }

    discovery
}

/// Open edges of the subgraph induced by `vertices`, each listed once
pub fn induced_edges(provider: &dyn GraphProvider, vertices: &[NodeId]) -> Vec<InducedEdge> {
    let members: HashSet<NodeId> = vertices.iter().copied().collect();
    let mut edges = Vec::new();

    for &u in vertices {
        for neighbor in provider.open_neighbors(u) {
            if u < neighbor.node && members.contains(&neighbor.node) {
                edges.push(InducedEdge {
                    from: u,
                    to: neighbor.node,
                    weight: neighbor.weight,
                });
            }
        }
    }

    edges
}

/// Compute the zone cost for `residence` and `locations`.
///
/// Unreachable locations are left out silently (listed in `unreachable`).
/// If the induced subgraph cannot be fully spanned the cost covers the
/// residence's component and `partial` is set.
#[tracing::instrument(skip(provider, locations), fields(residence = %residence, locations = locations.len()))]
pub fn zone_cost(provider: &dyn GraphProvider, residence: NodeId, locations: &[NodeId]) -> ZoneCost {
    let discovery = discover_vertices(provider, residence, locations);
    let edges = induced_edges(provider, &discovery.vertices);
    let tree = minimum_spanning_tree(&discovery.vertices, &edges);

    tracing::debug!(
        vertices = discovery.vertices.len(),
        induced_edges = edges.len(),
        cost = tree.cost,
        unreachable = discovery.unreachable.len(),
        "zone computed"
    );

    ZoneCost {
        residence,
        cost: tree.cost,
        partial: tree.is_partial(),
        vertices: discovery.vertices,
        tree: tree.edges,
        unreachable: discovery.unreachable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Cost;
    use crate::graph::EdgeStore;

    /// Star-ish campus:
    ///
    /// ```text
    /// 1 --3-- 2 --4-- 3
    ///         |
    ///         2
    ///         |
    ///         5 --1-- 6        7 (isolated) 8 --1-- 9
    /// ```
    fn campus() -> EdgeStore {
        let mut store = EdgeStore::new();
        store.add_edge(NodeId(1), NodeId(2), 3);
        store.add_edge(NodeId(2), NodeId(3), 4);
        store.add_edge(NodeId(2), NodeId(5), 2);
        store.add_edge(NodeId(5), NodeId(6), 1);
        store.add_edge(NodeId(1), NodeId(3), 20);
        store.add_node(NodeId(7));
        store.add_edge(NodeId(8), NodeId(9), 1);
        store
    }

    #[test]
    fn test_single_residence_costs_zero() {
        let store = campus();
        let zone = zone_cost(&store, NodeId(1), &[]);
        assert_eq!(zone.cost, 0);
        assert_eq!(zone.vertices, vec![NodeId(1)]);
        assert!(!zone.partial);
    }

    #[test]
    fn test_unknown_residence_costs_zero() {
        let store = campus();
        let zone = zone_cost(&store, NodeId(999), &[NodeId(3)]);
        assert_eq!(zone.cost, 0);
        assert!(zone.vertices.is_empty());
        assert_eq!(zone.unreachable, vec![NodeId(3)]);
    }

    #[test]
    fn test_discovery_includes_intermediate_nodes() {
        let store = campus();
        let discovery = discover_vertices(&store, NodeId(1), &[NodeId(3), NodeId(6)]);
        assert_eq!(
            discovery.vertices,
            vec![NodeId(1), NodeId(2), NodeId(3), NodeId(5), NodeId(6)]
        );
        assert_eq!(discovery.routes.len(), 2);
        assert!(discovery.unreachable.is_empty());
    }

    #[test]
    fn test_induced_edges_deduplicated_and_open_only() {
        let mut store = campus();
        let vertices = vec![NodeId(1), NodeId(2), NodeId(3)];
        let edges = induced_edges(&store, &vertices);
        assert_eq!(edges.len(), 3);
        assert!(edges.iter().all(|e| e.from < e.to));

        store.toggle_edges(&[(NodeId(1), NodeId(3))]).unwrap();
        let edges = induced_edges(&store, &vertices);
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_zone_cost_uses_mst() {
        let store = campus();
        let zone = zone_cost(&store, NodeId(1), &[NodeId(3), NodeId(6)]);
        // 1-2 (3) + 2-3 (4) + 2-5 (2) + 5-6 (1); 1-3 (20) unused
        assert_eq!(zone.cost, 10);
        assert_eq!(zone.tree.len(), 4);
        assert!(!zone.partial);
    }

    #[test]
    fn test_unreachable_locations_are_skipped() {
        let store = campus();
        let zone = zone_cost(&store, NodeId(1), &[NodeId(3), NodeId(7), NodeId(9)]);
        assert_eq!(zone.cost, 7);
        assert_eq!(zone.unreachable, vec![NodeId(7), NodeId(9)]);
    }

    #[test]
    fn test_zone_cost_bounded_by_route_costs() {
        let store = campus();
        let locations = [NodeId(3), NodeId(6), NodeId(5)];
        let discovery = discover_vertices(&store, NodeId(1), &locations);
        let route_total: Cost = discovery.routes.iter().filter_map(|r| r.cost).sum();
        let zone = zone_cost(&store, NodeId(1), &locations);
        assert!(zone.cost <= route_total);
    }

    #[test]
    fn test_residence_as_location() {
        let store = campus();
        let zone = zone_cost(&store, NodeId(2), &[NodeId(2)]);
        assert_eq!(zone.cost, 0);
        assert_eq!(zone.vertices, vec![NodeId(2)]);
    }
}
