//! The loaded network and registry, owned together

use serde::Serialize;

use crate::config::ResolvedConfig;
use crate::error::Result;
use crate::graph::EdgeStore;
use crate::load::{load_classes, load_edges, LoadSummary};
use crate::registry::Registry;

/// Row counts from loading both data files
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CampusLoad {
    pub edges: LoadSummary,
    pub classes: LoadSummary,
}

#[derive(Debug, Clone, Default)]
pub struct Campus {
    pub graph: EdgeStore,
    pub registry: Registry,
}

impl Campus {
    pub fn new(registry: Registry) -> Self {
        Campus {
            graph: EdgeStore::new(),
            registry,
        }
    }

    /// Load both data files named by `config`
    ///
    /// Edges load first so class rows can reuse their location names.
    #[tracing::instrument(skip(config), fields(source = ?config.source))]
    pub fn load(config: &ResolvedConfig) -> Result<(Self, CampusLoad)> {
        let mut campus = Campus::new(Registry::new(config.config.registry));
        let edges = load_edges(&config.edges_path(), &mut campus.graph)?;
        let classes = load_classes(
            &config.classes_path(),
            &mut campus.graph,
            &mut campus.registry,
        )?;

        tracing::info!(
            nodes = campus.graph.node_count(),
            edges = campus.graph.edge_count(),
            classes = campus.registry.catalog().len(),
            "campus loaded"
        );
        Ok((campus, CampusLoad { edges, classes }))
    }
}
