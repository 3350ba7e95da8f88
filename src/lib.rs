//! Floorgraph
//!
//! A building modeled as a graph of rooms connected by numbered doors, with
//! shortest-path queries between rooms and renderer-ready floor snapshots.
//!
//! # Overview
//!
//! Rooms carry a fixed adjacency set ("these rooms share a wall"), a door
//! mapping ("a passage exists", numbered uniquely per room), and countable
//! attributes (windows, lights). Buildings own floors, floors own rooms, and
//! every mutation is building-mediated so the model invariants always hold.
//! Path queries run breadth-first over the door graph and return a shortest
//! path by door-hop count.
//!
//! ## Key Features
//!
//! - **Frozen adjacency**: the floor-plan builder is the only place walls are
//!   declared; built floors never change shape
//! - **Invariant-checked mutation**: doors stay a subset of adjacency, door
//!   numbers stay unique per room, attribute counts never go below zero
//! - **Deterministic routing**: BFS with visited-on-enqueue and ascending
//!   door-number exploration, so equal-length ties resolve the same way every
//!   time
//! - **Renderer handoff**: serializable snapshots with nodes, edges, labels,
//!   and an optional highlighted path; drawing stays outside the crate
//! - **Layout documents**: declarative JSON building descriptions, validated
//!   through the same code paths as programmatic construction
//!
//! ## Quick Start
//!
//! ```rust
//! use floorgraph::model::{Building, FloorPlanBuilder};
//!
//! let mut plan = FloorPlanBuilder::new();
//! let office = plan.add_room("Office");
//! let corridor = plan.add_room("Corridor");
//! let kitchen = plan.add_room("Kitchen");
//! plan.declare_adjacent(office, corridor)?;
//! plan.declare_adjacent(corridor, kitchen)?;
//!
//! let mut building = Building::new("HQ");
//! building.add_floor(plan.build());
//! building.add_door_between_rooms(office, corridor, 1, 1)?;
//! building.add_door_between_rooms(corridor, kitchen, 2, 1)?;
//!
//! let path = building.find_path(office, kitchen).expect("rooms are connected");
//! assert_eq!(path, vec![office, corridor, kitchen]);
//! # Ok::<(), floorgraph::model::ModelError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums, and CLI configuration
//! - [`model`]: rooms, floors, buildings, the floor-plan builder, and layout
//!   documents
//! - [`pathfinding`]: breadth-first search over the door graph
//! - [`render`]: floor snapshots for external renderers
//! - [`logging`]: tracing subscriber configuration

#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod logging;
pub mod model;
pub mod pathfinding;
pub mod render;
pub mod types;

// Re-export the primary types at the crate root

// Core types and identifiers
pub use types::{
    BuildingId, CliArgs, ConfigError, DoorNumber, FloorId, OutputFormat, RoomAttribute, RoomId,
    RouteQuery, RunConfig,
};

// Model types and functionality
pub use model::{
    Building, DoorEntry, Floor, FloorPlanBuilder, LayoutDoc, LayoutError, ModelError, ModelResult,
    Room, RoomEntry,
};

// Pathfinding
pub use pathfinding::shortest_path;

// Render snapshots
pub use render::{DoorEdge, FloorGraph, RoomNode};

// Logging
pub use logging::LoggingConfig;
