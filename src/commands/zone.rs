//! `campusnet zone` command - zone cost of a residence and a set of classes

use crate::cli::{Cli, OutputFormat};
use campusnet_core::bail_not_found;
use campusnet_core::campus::Campus;
use campusnet_core::error::Result;
use campusnet_core::graph::{zone_cost, NodeId};
use campusnet_core::registry::ClassCode;

/// Execute the zone command
///
/// Class codes are looked up in the catalog and joined with any explicit
/// location ids.
pub fn execute(
    cli: &Cli,
    campus: &Campus,
    residence: NodeId,
    classes: &[ClassCode],
    locations: &[NodeId],
) -> Result<()> {
    let mut targets = Vec::with_capacity(classes.len() + locations.len());
    for code in classes {
        match campus.registry.class_location(code) {
            Some(location) => targets.push(location),
            None => bail_not_found!("class", code),
        }
    }
    targets.extend_from_slice(locations);

    if !campus.graph.contains(residence) {
        tracing::warn!(residence = %residence, "residence is not a known location");
    }

    let zone = zone_cost(&campus.graph, residence, &targets);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&zone)?);
        }
        OutputFormat::Human => {
            println!("Zone cost for {}: {}", residence, zone.cost);
            if cli.quiet {
                return Ok(());
            }
            for edge in &zone.tree {
                println!("  {} - {} ({})", edge.from, edge.to, edge.weight);
            }
            if !zone.unreachable.is_empty() {
                let ids: Vec<String> = zone.unreachable.iter().map(|n| n.to_string()).collect();
                println!("Unreachable: {}", ids.join(", "));
            }
            if zone.partial {
                println!("Note: the zone subgraph is disconnected; cost covers the residence's component only");
            }
        }
    }

    Ok(())
}
