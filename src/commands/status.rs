//! `campusnet status` command - state of the edge between two locations

use crate::cli::{Cli, OutputFormat};
use campusnet_core::campus::Campus;
use campusnet_core::error::Result;
use campusnet_core::graph::NodeId;

/// Execute the status command
pub fn execute(cli: &Cli, campus: &Campus, from: NodeId, to: NodeId) -> Result<()> {
    let status = campus.graph.edge_status(from, to);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "status": status,
                "parallel": campus.graph.edges_between(from, to).len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", status),
    }

    Ok(())
}
