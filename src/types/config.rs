//! Command line and run configuration
//!
//! This module contains the CLI argument structure and the validated run
//! configuration resolved from it.

use super::OutputFormat;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "floorgraph",
    version,
    about = "Room-graph pathfinding over a building floor plan",
    long_about = "Models a building as a graph of rooms connected by numbered doors, answers \
shortest-path queries between rooms, and exports renderer-ready floor snapshots.

EXAMPLES:
    # Route between two rooms of the built-in sample layout
    floorgraph --from Office1 --to Office4

    # Load a layout file and export a snapshot of its first floor
    floorgraph --layout plan.json --snapshot plan-graph.json

    # Route and export the snapshot with the path highlighted
    floorgraph --layout plan.json --from Lab --to Lobby --snapshot route.json

    # Generate a layout template
    floorgraph --print-layout > plan.json

    # Validate a layout without querying
    floorgraph --layout plan.json --dry-run"
)]
pub struct CliArgs {
    /// Layout file path (JSON format)
    #[arg(
        short,
        long,
        help = "Layout file path (JSON format)",
        long_help = "Path to a JSON layout document describing rooms, adjacency, and doors. \
The built-in sample layout is used when omitted."
    )]
    pub layout: Option<PathBuf>,

    /// Name of the room to route from
    #[arg(long, help = "Name of the room to route from")]
    pub from: Option<String>,

    /// Name of the room to route to
    #[arg(long, help = "Name of the room to route to")]
    pub to: Option<String>,

    /// Output path for the floor snapshot
    #[arg(
        short,
        long,
        help = "Write a renderer-ready floor snapshot to this path",
        long_help = "Write the first floor's graph snapshot (nodes, edges, labels) to this path. \
When a route query is also given, the computed path is included for highlighting."
    )]
    pub snapshot: Option<PathBuf>,

    /// Snapshot encoding
    #[arg(long, help = "Snapshot encoding (json or pretty)")]
    pub output_format: Option<String>,

    /// Print the built-in sample layout and exit
    #[arg(long, help = "Print the built-in sample layout in JSON format and exit")]
    pub print_layout: bool,

    /// Dry run mode - validate the layout without querying
    #[arg(long, help = "Validate the layout and print a summary without querying")]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,
}

/// Errors raised while resolving CLI arguments into a run configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Only one of `--from` / `--to` was given
    #[error("--from and --to must be given together")]
    IncompleteQuery,

    /// The `--output-format` value did not parse
    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}

/// A route query between two rooms, by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    /// Name of the starting room
    pub from: String,
    /// Name of the destination room
    pub to: String,
}

/// Validated run configuration resolved from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Layout file to load; the built-in sample layout when `None`
    pub layout: Option<PathBuf>,
    /// Route query to answer, if any
    pub query: Option<RouteQuery>,
    /// Snapshot output path, if any
    pub snapshot: Option<PathBuf>,
    /// Snapshot encoding
    pub output_format: OutputFormat,
    /// Whether to stop after validating the layout
    pub dry_run: bool,
}

impl RunConfig {
    /// Resolve CLI arguments into a validated run configuration
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let query = match (&args.from, &args.to) {
            (Some(from), Some(to)) => Some(RouteQuery { from: from.clone(), to: to.clone() }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteQuery),
        };

        let output_format = match &args.output_format {
            Some(raw) => raw.parse().map_err(ConfigError::InvalidOutputFormat)?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            layout: args.layout.clone(),
            query,
            snapshot: args.snapshot.clone(),
            output_format,
            dry_run: args.dry_run,
        })
    }
}
