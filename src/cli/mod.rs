//! CLI argument parsing for campusnet
//!
//! Global flags: --config, --edges, --classes, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod output;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use campusnet_core::graph::NodeId;
use campusnet_core::registry::ClassCode;
pub use output::OutputFormat;
use parse::{parse_class_code, parse_node_id};

/// Campusnet - campus travel network queries and command scripts
#[derive(Parser, Debug)]
#[command(name = "campusnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./campusnet.toml, then the user config dir)
    #[arg(long, global = true, env = "CAMPUSNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Edge CSV file, overriding the config
    #[arg(long, global = true)]
    pub edges: Option<PathBuf>,

    /// Class CSV file, overriding the config
    #[arg(long, global = true)]
    pub classes: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "campusnet_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a command script (reads stdin when no file is given)
    Run {
        /// Script file
        script: Option<PathBuf>,
    },

    /// Shortest open route between two locations
    #[command(allow_negative_numbers = true)]
    Path {
        #[arg(value_parser = parse_node_id)]
        from: NodeId,

        #[arg(value_parser = parse_node_id)]
        to: NodeId,
    },

    /// Whether two locations are joined by open edges
    #[command(allow_negative_numbers = true)]
    Connected {
        #[arg(value_parser = parse_node_id)]
        from: NodeId,

        #[arg(value_parser = parse_node_id)]
        to: NodeId,
    },

    /// Edge state between two locations: open, closed or DNE
    #[command(allow_negative_numbers = true)]
    Status {
        #[arg(value_parser = parse_node_id)]
        from: NodeId,

        #[arg(value_parser = parse_node_id)]
        to: NodeId,
    },

    /// Zone cost of a residence and its class locations
    #[command(allow_negative_numbers = true)]
    Zone {
        /// Residence location id
        #[arg(value_parser = parse_node_id)]
        residence: NodeId,

        /// Class code whose location joins the zone (repeatable)
        #[arg(
            long = "class",
            id = "class_codes",
            value_parser = parse_class_code,
            action = clap::ArgAction::Append
        )]
        class_codes: Vec<ClassCode>,

        /// Location id joining the zone (repeatable)
        #[arg(long = "location", value_parser = parse_node_id, action = clap::ArgAction::Append)]
        locations: Vec<NodeId>,
    },

    /// Summary of the loaded network
    Info,
}
