//! Path reconstruction utilities for graph traversal

use crate::graph::types::NodeId;
use std::collections::HashMap;

/// Walk `parents` back from `to` and return the route from `from` to `to`.
///
/// The walk ends at the first node without a parent entry, which is `from`
/// whenever `parents` was produced by a search rooted there.
pub fn reconstruct_path(
    from: NodeId,
    to: NodeId,
    parents: &HashMap<NodeId, NodeId>,
) -> Vec<NodeId> {
    let mut path = vec![to];
    let mut current = to;

    while current != from {
        match parents.get(&current) {
            Some(&pred) => {
                path.push(pred);
                current = pred;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
