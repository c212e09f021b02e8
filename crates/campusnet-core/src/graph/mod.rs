//! Campus travel network graph
//!
//! Provides the edge store and the algorithms that run over it:
//! - Edge storage with open/closed toggling
//! - BFS reachability and Dijkstra shortest paths over open edges
//! - Zone cost: MST of the subgraph spanning a residence and its classes
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;
pub mod zone;

pub use algos::{is_connected, minimum_spanning_tree, shortest_path};
pub use store::EdgeStore;
pub use traversal::GraphProvider;
pub use types::{
    Cost, EdgeId, EdgeStatus, InducedEdge, Neighbor, NodeId, PathResult, SpanningResult,
    TravelTime, ZoneCost, UNREACHABLE,
};
pub use zone::{discover_vertices, induced_edges, zone_cost};
