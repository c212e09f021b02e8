//! Adjacency storage for the campus network
//!
//! Every undirected edge lives exactly once in `edges`; each endpoint's
//! adjacency list holds its index. Weight and open/closed state therefore
//! cannot drift between the two directions.

use std::collections::HashMap;

use crate::error::{CampusError, Result};
use crate::graph::types::{EdgeId, EdgeStatus, Neighbor, NodeId, TravelTime};

#[derive(Debug, Clone, PartialEq, Eq)]
struct EdgeRecord {
    a: NodeId,
    b: NodeId,
    weight: TravelTime,
    open: bool,
}

impl EdgeRecord {
    /// Endpoint opposite `node`; a self-loop returns `node`
    fn other(&self, node: NodeId) -> NodeId {
        if self.a == node {
            self.b
        } else {
            self.a
        }
    }
}

/// Owner of all locations and the edges between them
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    edges: Vec<EdgeRecord>,
    adjacency: HashMap<NodeId, Vec<EdgeId>>,
    names: HashMap<NodeId, String>,
}

impl EdgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location with no edges. Returns false if it already existed.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Insert an open undirected edge, creating both endpoints if needed.
    ///
    /// Calling this twice for the same pair stores a parallel edge.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: TravelTime) -> EdgeId {
        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeRecord {
            a: u,
            b: v,
            weight,
            open: true,
        });
        self.adjacency.entry(u).or_default().push(id);
        if u != v {
            self.adjacency.entry(v).or_default().push(id);
        }
        id
    }

    /// Record a display name for a location; the first name seen wins
    pub fn set_name(&mut self, node: NodeId, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.names
            .entry(node)
            .or_insert_with(|| name.to_string());
    }

    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.names.get(&node).map(String::as_str)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn open_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.open).count()
    }

    /// All known locations in ascending order
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.adjacency.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Edges joining `u` and `v`, in load order (linear scan of `u`'s list)
    pub fn edges_between(&self, u: NodeId, v: NodeId) -> Vec<EdgeId> {
        let Some(list) = self.adjacency.get(&u) else {
            return Vec::new();
        };
        list.iter()
            .copied()
            .filter(|id| self.edges[id.0].other(u) == v)
            .collect()
    }

    /// Status of the link between `u` and `v`, reporting the first-loaded edge
    pub fn edge_status(&self, u: NodeId, v: NodeId) -> EdgeStatus {
        match self.edges_between(u, v).first() {
            None => EdgeStatus::DoesNotExist,
            Some(id) if self.edges[id.0].open => EdgeStatus::Open,
            Some(_) => EdgeStatus::Closed,
        }
    }

    /// Flip open/closed on every edge named by `pairs`.
    ///
    /// All pairs are resolved before anything changes: if one names a missing
    /// edge the store is left untouched and `NotFound` is returned. Parallel
    /// edges between a pair flip together. Returns the number of edge records
    /// flipped.
    pub fn toggle_edges(&mut self, pairs: &[(NodeId, NodeId)]) -> Result<usize> {
        let mut resolved = Vec::with_capacity(pairs.len());
        for &(u, v) in pairs {
            let ids = self.edges_between(u, v);
            if ids.is_empty() {
                tracing::debug!(%u, %v, "toggle rejected: edge does not exist");
                return Err(CampusError::not_found("edge", format!("{u}-{v}")));
            }
            resolved.push(ids);
        }

        let mut flipped = 0;
        for id in resolved.into_iter().flatten() {
            let record = &mut self.edges[id.0];
            record.open = !record.open;
            flipped += 1;
        }
        tracing::debug!(pairs = pairs.len(), flipped, "edges toggled");
        Ok(flipped)
    }

    /// Open edges leaving `node`, in load order
    pub fn open_neighbors(&self, node: NodeId) -> impl Iterator<Item = Neighbor> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flatten()
            .filter_map(move |&id| {
                let record = &self.edges[id.0];
                record.open.then(|| Neighbor {
                    node: record.other(node),
                    weight: record.weight,
                    edge: id,
                })
            })
    }
}
