//! `campusnet info` command - summary of the loaded network

use crate::cli::{Cli, OutputFormat};
use campusnet_core::campus::{Campus, CampusLoad};
use campusnet_core::config::ResolvedConfig;
use campusnet_core::error::Result;

/// Execute the info command
pub fn execute(cli: &Cli, campus: &Campus, config: &ResolvedConfig, load: &CampusLoad) -> Result<()> {
    let graph = &campus.graph;
    let registry = &campus.registry;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "config": config.source.as_ref().map(|p| p.display().to_string()),
                "edges_file": config.edges_path().display().to_string(),
                "classes_file": config.classes_path().display().to_string(),
                "locations": graph.node_count(),
                "edges": graph.edge_count(),
                "open_edges": graph.open_edge_count(),
                "classes": registry.catalog().len(),
                "limits": registry.limits(),
                "load": load,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Locations: {}", graph.node_count());
            println!("Edges: {} ({} open)", graph.edge_count(), graph.open_edge_count());
            println!("Classes: {}", registry.catalog().len());
            if cli.quiet {
                return Ok(());
            }
            match &config.source {
                Some(path) => println!("Config: {}", path.display()),
                None => println!("Config: defaults"),
            }
            println!(
                "Edge rows: {} loaded, {} skipped ({})",
                load.edges.loaded,
                load.edges.skipped,
                config.edges_path().display()
            );
            println!(
                "Class rows: {} loaded, {} skipped ({})",
                load.classes.loaded,
                load.classes.skipped,
                config.classes_path().display()
            );
        }
    }

    Ok(())
}
