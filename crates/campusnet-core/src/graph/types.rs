use crate::error::CampusError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a physical campus location
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(NodeId)
            .map_err(|_| CampusError::invalid_value("location id", s))
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId(id)
    }
}

/// Travel time across a single edge, in minutes
pub type TravelTime = u32;

/// Accumulated travel time along a path or tree
pub type Cost = u64;

/// Index of an undirected edge record inside the edge store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// An open edge as seen from one of its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: TravelTime,
    pub edge: EdgeId,
}

/// State of the link between two locations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStatus {
    Open,
    Closed,
    DoesNotExist,
}

impl EdgeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeStatus::Open => "open",
            EdgeStatus::Closed => "closed",
            EdgeStatus::DoesNotExist => "DNE",
        }
    }
}

impl fmt::Display for EdgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EdgeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Sentinel used wherever a cost has to be rendered for an unreachable target
pub const UNREACHABLE: i64 = -1;

fn serialize_cost<S: Serializer>(cost: &Option<Cost>, serializer: S) -> Result<S::Ok, S::Error> {
    match cost {
        Some(c) => serializer.serialize_u64(*c),
        None => serializer.serialize_i64(UNREACHABLE),
    }
}

/// Result of a shortest-path query
///
/// `cost` is `None` exactly when `path` is empty. When present, `path` runs
/// from `from` to `to` inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(serialize_with = "serialize_cost")]
    pub cost: Option<Cost>,
    pub path: Vec<NodeId>,
}

impl PathResult {
    pub fn unreachable(from: NodeId, to: NodeId) -> Self {
        PathResult {
            from,
            to,
            cost: None,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }

    /// Cost as a signed integer, `-1` when unreachable
    pub fn cost_or_sentinel(&self) -> i64 {
        self.cost.map_or(UNREACHABLE, |c| c as i64)
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// An open edge of an induced subgraph, canonicalised so `from < to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InducedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: TravelTime,
}

/// Minimum spanning tree over a vertex set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningResult {
    pub cost: Cost,
    /// Vertices reached from the start vertex
    pub spanned: usize,
    pub vertex_count: usize,
    pub edges: Vec<InducedEdge>,
}

impl SpanningResult {
    pub fn empty() -> Self {
        SpanningResult {
            cost: 0,
            spanned: 0,
            vertex_count: 0,
            edges: Vec::new(),
        }
    }

    /// True when the induced subgraph was disconnected and only part of it
    /// contributed to `cost`
    pub fn is_partial(&self) -> bool {
        self.spanned < self.vertex_count
    }
}

/// Zone cost of a residence and the class locations reachable from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCost {
    pub residence: NodeId,
    pub cost: Cost,
    pub vertices: Vec<NodeId>,
    pub tree: Vec<InducedEdge>,
    /// Class locations left out because no open path reaches them
    pub unreachable: Vec<NodeId>,
    pub partial: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_parse() {
        assert_eq!("42".parse::<NodeId>().unwrap(), NodeId(42));
        assert_eq!(" 7 ".parse::<NodeId>().unwrap(), NodeId(7));
        assert_eq!("-3".parse::<NodeId>().unwrap(), NodeId(-3));
        assert!("1.5".parse::<NodeId>().is_err());
        assert!("abc".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_edge_status_display() {
        assert_eq!(EdgeStatus::Open.to_string(), "open");
        assert_eq!(EdgeStatus::Closed.to_string(), "closed");
        assert_eq!(EdgeStatus::DoesNotExist.to_string(), "DNE");
    }

    #[test]
    fn test_unreachable_path_serializes_sentinel() {
        let result = PathResult::unreachable(NodeId(1), NodeId(3));
        assert!(!result.is_reachable());
        assert_eq!(result.cost_or_sentinel(), -1);
        assert_eq!(result.hops(), 0);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["cost"], -1);
        assert_eq!(json["path"], serde_json::json!([]));
    }

    #[test]
    fn test_reachable_path_serializes_cost() {
        let result = PathResult {
            from: NodeId(1),
            to: NodeId(3),
            cost: Some(10),
            path: vec![NodeId(1), NodeId(2), NodeId(3)],
        };
        assert_eq!(result.hops(), 2);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["cost"], 10);
        assert_eq!(json["path"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_spanning_partial_flag() {
        let mut result = SpanningResult::empty();
        assert!(!result.is_partial());
        result.vertex_count = 3;
        result.spanned = 2;
        assert!(result.is_partial());
    }
}
