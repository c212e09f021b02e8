//! Campusnet Core Library
//!
//! Campus travel network engine: edge storage with closures, reachability,
//! shortest paths, student zone costs and the student/class registry.

pub mod campus;
pub mod config;
pub mod error;
pub mod graph;
pub mod load;
pub mod logging;
pub mod registry;
