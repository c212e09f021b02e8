use crate::graph::algos::dijkstra::HeapEntry;
use crate::graph::types::{Cost, InducedEdge, NodeId, SpanningResult, TravelTime};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Minimum spanning tree of the subgraph made of `vertices` and `edges`.
///
/// Grows the tree from `vertices[0]` using a key map (cheapest known edge
/// into each frontier vertex) and a lazy min-heap. Edges with an endpoint
/// outside `vertices` are ignored. When the subgraph is disconnected the
/// result covers only the start vertex's component; `is_partial()` reports it.
#[tracing::instrument(skip_all, fields(vertices = vertices.len(), edges = edges.len()))]
pub fn minimum_spanning_tree(vertices: &[NodeId], edges: &[InducedEdge]) -> SpanningResult {
    let Some(&start) = vertices.first() else {
        return SpanningResult::empty();
    };

    let mut adjacency: HashMap<NodeId, Vec<(NodeId, TravelTime, usize)>> =
        vertices.iter().map(|&v| (v, Vec::new())).collect();
    for (index, edge) in edges.iter().enumerate() {
        if !adjacency.contains_key(&edge.from) || !adjacency.contains_key(&edge.to) {
            continue;
        }
        if let Some(list) = adjacency.get_mut(&edge.from) {
            list.push((edge.to, edge.weight, index));
        }
        if let Some(list) = adjacency.get_mut(&edge.to) {
            list.push((edge.from, edge.weight, index));
        }
    }

    let mut keys: HashMap<NodeId, Cost> = HashMap::new();
    let mut via: HashMap<NodeId, usize> = HashMap::new();
    let mut in_tree: HashSet<NodeId> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut result = SpanningResult {
        vertex_count: adjacency.len(),
        ..SpanningResult::empty()
    };

    keys.insert(start, 0);
    heap.push(Reverse(HeapEntry {
        node_id: start,
        cost: 0,
    }));

    while let Some(Reverse(HeapEntry { node_id, cost })) = heap.pop() {
        if in_tree.contains(&node_id) {
            continue;
        }
        if keys.get(&node_id).is_some_and(|&key| cost > key) {
            continue;
        }

        in_tree.insert(node_id);
        result.cost += cost;
        if let Some(&index) = via.get(&node_id) {
            result.edges.push(edges[index]);
        }

        let Some(neighbors) = adjacency.get(&node_id) else {
            continue;
        };
        for &(next, weight, index) in neighbors {
            if in_tree.contains(&next) {
                continue;
            }
            let weight = Cost::from(weight);
            let key = keys.entry(next).or_insert(Cost::MAX);
            if weight < *key {
                *key = weight;
                via.insert(next, index);
                heap.push(Reverse(HeapEntry {
                    node_id: next,
                    cost: weight,
                }));
            }
        }
    }

    result.spanned = in_tree.len();
    if result.is_partial() {
        tracing::debug!(
            spanned = result.spanned,
            vertex_count = result.vertex_count,
            "induced subgraph is disconnected; cost covers the start component only"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: i64, to: i64, weight: TravelTime) -> InducedEdge {
        InducedEdge {
            from: NodeId(from),
            to: NodeId(to),
            weight,
        }
    }

    fn ids(raw: &[i64]) -> Vec<NodeId> {
        raw.iter().map(|&id| NodeId(id)).collect()
    }

    #[test]
    fn test_empty_vertex_set() {
        let result = minimum_spanning_tree(&[], &[]);
        assert_eq!(result.cost, 0);
        assert_eq!(result.spanned, 0);
        assert!(!result.is_partial());
    }

    #[test]
    fn test_single_vertex() {
        let result = minimum_spanning_tree(&ids(&[1]), &[]);
        assert_eq!(result.cost, 0);
        assert_eq!(result.spanned, 1);
        assert!(result.edges.is_empty());
    }

    #[test]
    fn test_picks_cheapest_edges() {
        // Triangle 1-2 (1), 2-3 (2), 1-3 (10) plus pendant 3-4 (4)
        let edges = vec![edge(1, 2, 1), edge(2, 3, 2), edge(1, 3, 10), edge(3, 4, 4)];
        let result = minimum_spanning_tree(&ids(&[1, 2, 3, 4]), &edges);
        assert_eq!(result.cost, 7);
        assert_eq!(result.spanned, 4);
        assert_eq!(result.edges.len(), 3);
        assert!(!result.edges.contains(&edge(1, 3, 10)));
    }

    #[test]
    fn test_start_vertex_does_not_change_cost() {
        let edges = vec![edge(1, 2, 1), edge(2, 3, 2), edge(1, 3, 10), edge(3, 4, 4)];
        let from_one = minimum_spanning_tree(&ids(&[1, 2, 3, 4]), &edges);
        let from_four = minimum_spanning_tree(&ids(&[4, 3, 2, 1]), &edges);
        assert_eq!(from_one.cost, from_four.cost);
    }

    #[test]
    fn test_parallel_edges_use_cheaper() {
        let edges = vec![edge(1, 2, 8), edge(1, 2, 3)];
        let result = minimum_spanning_tree(&ids(&[1, 2]), &edges);
        assert_eq!(result.cost, 3);
        assert_eq!(result.edges, vec![edge(1, 2, 3)]);
    }

    #[test]
    fn test_disconnected_reports_partial() {
        let edges = vec![edge(1, 2, 5), edge(3, 4, 7)];
        let result = minimum_spanning_tree(&ids(&[1, 2, 3, 4]), &edges);
        assert_eq!(result.cost, 5);
        assert_eq!(result.spanned, 2);
        assert_eq!(result.vertex_count, 4);
        assert!(result.is_partial());
    }

    #[test]
    fn test_edges_outside_vertex_set_ignored() {
        let edges = vec![edge(1, 2, 5), edge(2, 9, 1)];
        let result = minimum_spanning_tree(&ids(&[1, 2]), &edges);
        assert_eq!(result.cost, 5);
        assert_eq!(result.spanned, 2);
    }
}
