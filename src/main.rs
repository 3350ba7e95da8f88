// Floorgraph - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/floorgraph --from Office1 --to Office4
// ```
//
// Or against a layout file with a snapshot export:
//
// ```console
// $ ./target/release/floorgraph --layout plan.json --from Lab --to Lobby --snapshot route.json
// ```

use anyhow::{bail, Context};
use clap::Parser;
use floorgraph::logging::LoggingConfig;
use floorgraph::model::{Building, LayoutDoc};
use floorgraph::render::FloorGraph;
use floorgraph::types::{CliArgs, RoomId, RunConfig};
use std::collections::HashMap;
use std::process;
use tracing::{error, info, Level};

fn main() {
    let args = CliArgs::parse();

    // Handle flags that don't require full initialization
    if args.print_layout {
        match LayoutDoc::sample().to_json_pretty() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize sample layout: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(Level::WARN).init()
    };
    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let config = match RunConfig::from_cli_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid arguments: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(config) {
        error!("{:#}", e);
        process::exit(1);
    }
}

/// Load the layout, answer the query, and write the snapshot
fn run(config: RunConfig) -> anyhow::Result<()> {
    let doc = match &config.layout {
        Some(path) => LayoutDoc::from_file(path)
            .with_context(|| format!("failed to load layout '{}'", path.display()))?,
        None => LayoutDoc::sample(),
    };

    let (building, names) = doc.build().context("layout failed validation")?;
    info!(
        building = %building.name,
        floors = building.floor_count(),
        rooms = building.room_count(),
        "building ready"
    );

    if config.dry_run {
        eprintln!("Layout validation successful!");
        print_building_summary(&building);
        return Ok(());
    }

    let path = match &config.query {
        Some(query) => {
            let start = resolve_room(&names, &query.from)?;
            let end = resolve_room(&names, &query.to)?;

            match building.find_path(start, end) {
                Some(path) => {
                    println!("{}", format_route(&building, &path));
                    Some(path)
                }
                None => {
                    println!("No door path between {} and {}", query.from, query.to);
                    None
                }
            }
        }
        None => None,
    };

    if let Some(out) = &config.snapshot {
        let floor = match building.floor(0) {
            Some(floor) => floor,
            None => bail!("building has no floors to snapshot"),
        };
        let graph = match &path {
            Some(path) => FloorGraph::capture_with_path(floor, path),
            None => FloorGraph::capture(floor),
        };
        let encoded = graph.to_json(config.output_format).context("failed to encode snapshot")?;
        std::fs::write(out, encoded)
            .with_context(|| format!("failed to write snapshot '{}'", out.display()))?;
        info!(path = %out.display(), "snapshot written");
        eprintln!("Snapshot written to: {}", out.display());
    }

    Ok(())
}

/// Resolve a room name from the layout's name map
fn resolve_room(names: &HashMap<String, RoomId>, name: &str) -> anyhow::Result<RoomId> {
    names.get(name).copied().with_context(|| format!("no room named '{}' in the layout", name))
}

/// Render a path as a readable room-name sequence
fn format_route(building: &Building, path: &[RoomId]) -> String {
    let labels: Vec<&str> = path
        .iter()
        .filter_map(|&id| building.room(id).map(|room| room.name.as_str()))
        .collect();
    format!("{}  ({} doors)", labels.join(" -> "), path.len().saturating_sub(1))
}

/// Print a per-floor room summary
fn print_building_summary(building: &Building) {
    eprintln!("Building: {}", building.name);
    eprintln!("  Floors: {}", building.floor_count());
    for (idx, floor) in building.floors().iter().enumerate() {
        eprintln!("  Floor {} ({} rooms):", idx, floor.room_count());
        for room in floor.rooms() {
            eprintln!(
                "    {} - {} doors, {} windows, {} lights",
                room.name,
                room.door_count(),
                room.windows,
                room.lights
            );
        }
    }
}
