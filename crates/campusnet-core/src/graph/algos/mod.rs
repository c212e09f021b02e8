//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first reachability over open edges
//! - `dijkstra`: Weighted shortest path finding
//! - `prim`: Minimum spanning tree over an induced subgraph
//! - `path`: Path reconstruction from a parent map

pub mod bfs;
pub mod dijkstra;
pub mod path;
pub mod prim;

pub use bfs::is_connected;
pub use dijkstra::shortest_path;
pub use prim::minimum_spanning_tree;
