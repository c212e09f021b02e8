use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::{Cost, NodeId, PathResult};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by cost, then node)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub node_id: NodeId,
    pub cost: Cost,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// Find the cheapest route from `from` to `to` over open edges.
///
/// Stale heap entries are skipped on pop instead of being decreased in
/// place. The search stops as soon as `to` is settled. Among equal-cost
/// routes the first relaxation wins.
#[tracing::instrument(skip(provider), fields(from = %from, to = %to))]
pub fn shortest_path(provider: &dyn GraphProvider, from: NodeId, to: NodeId) -> PathResult {
    if !provider.contains(from) || !provider.contains(to) {
        tracing::debug!("endpoint not in graph");
        return PathResult::unreachable(from, to);
    }

    let mut distances: HashMap<NodeId, Cost> = provider
        .node_ids()
        .into_iter()
        .map(|id| (id, Cost::MAX))
        .collect();
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    distances.insert(from, 0);
    heap.push(Reverse(HeapEntry {
        node_id: from,
        cost: 0,
    }));

    let mut settled = 0usize;
    while let Some(Reverse(HeapEntry {
        node_id: current,
        cost,
    })) = heap.pop()
    {
        let best = distances.get(&current).copied().unwrap_or(Cost::MAX);
        if cost > best {
            continue;
        }
        settled += 1;

        if current == to {
            break;
        }

        for neighbor in provider.open_neighbors(current) {
            let candidate = cost.saturating_add(Cost::from(neighbor.weight));
            let known = distances.entry(neighbor.node).or_insert(Cost::MAX);
            if candidate < *known {
                *known = candidate;
                parents.insert(neighbor.node, current);
                heap.push(Reverse(HeapEntry {
                    node_id: neighbor.node,
                    cost: candidate,
                }));
            }
        }
    }

    match distances.get(&to).copied() {
        Some(total) if total != Cost::MAX => {
            let path = reconstruct_path(from, to, &parents);
            tracing::debug!(cost = total, hops = path.len().saturating_sub(1), settled, "path found");
            PathResult {
                from,
                to,
                cost: Some(total),
                path,
            }
        }
        _ => {
            tracing::debug!(settled, "no open route");
            PathResult::unreachable(from, to)
        }
    }
}
