//! `campusnet connected` command - reachability over open edges

use crate::cli::{Cli, OutputFormat};
use campusnet_core::campus::Campus;
use campusnet_core::error::Result;
use campusnet_core::graph::{is_connected, NodeId};

/// Execute the connected command
pub fn execute(cli: &Cli, campus: &Campus, from: NodeId, to: NodeId) -> Result<()> {
    let connected = is_connected(&campus.graph, from, to);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "connected": connected,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", if connected { "successful" } else { "unsuccessful" });
        }
    }

    Ok(())
}
