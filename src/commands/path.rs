//! `campusnet path` command - shortest open route between two locations

use crate::cli::{Cli, OutputFormat};
use campusnet_core::campus::Campus;
use campusnet_core::error::Result;
use campusnet_core::graph::{shortest_path, NodeId};

/// Execute the path command
pub fn execute(cli: &Cli, campus: &Campus, from: NodeId, to: NodeId) -> Result<()> {
    let result = shortest_path(&campus.graph, from, to);

    match cli.format {
        OutputFormat::Json => {
            let stops: Vec<serde_json::Value> = result
                .path
                .iter()
                .map(|node| {
                    serde_json::json!({
                        "id": node,
                        "name": campus.graph.name(*node),
                    })
                })
                .collect();
            let output = serde_json::json!({
                "from": result.from,
                "to": result.to,
                "cost": result.cost_or_sentinel(),
                "reachable": result.is_reachable(),
                "path": stops,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", result.cost_or_sentinel());
            if cli.quiet || !result.is_reachable() {
                return Ok(());
            }
            let route: Vec<String> = result
                .path
                .iter()
                .map(|&node| match campus.graph.name(node) {
                    Some(name) => format!("{} ({})", node, name),
                    None => node.to_string(),
                })
                .collect();
            println!("{}", route.join(" -> "));
        }
    }

    Ok(())
}
