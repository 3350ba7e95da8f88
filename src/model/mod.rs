//! The room-graph model: buildings, floors, rooms, and their invariants
//!
//! # Overview
//!
//! The model is a three-level hierarchy:
//!
//! - **Building**: top-level owner of floors; mediates every mutation
//! - **Floor**: an ordered collection of rooms with ID-based lookup
//! - **Room**: a node with fixed adjacency, numbered doors, and countable
//!   attributes (windows, lights)
//!
//! Adjacency ("these rooms share a wall") is declared through
//! [`FloorPlanBuilder`] and frozen when the floor is built. Doors ("a passage
//! exists") are added afterwards through the building and must stay a subset
//! of adjacency; [`Building::add_door_between_rooms`] adds them symmetrically
//! with an independent door number on each side.
//!
//! # Usage Example
//!
//! ```rust
//! use floorgraph::model::{Building, FloorPlanBuilder};
//!
//! let mut builder = FloorPlanBuilder::new();
//! let office = builder.add_room_with_counts("Office", 2, 1);
//! let corridor = builder.add_room("Corridor");
//! builder.declare_adjacent(office, corridor)?;
//!
//! let mut building = Building::new("HQ");
//! building.add_floor(builder.build());
//! building.add_door_between_rooms(office, corridor, 1, 1)?;
//!
//! let path = building.find_path(office, corridor);
//! assert_eq!(path, Some(vec![office, corridor]));
//! # Ok::<(), floorgraph::model::ModelError>(())
//! ```

pub mod builder;
pub mod building;
pub mod error;
pub mod floor;
pub mod layout;
pub mod room;

// Re-export all public types for convenience
pub use builder::FloorPlanBuilder;
pub use building::Building;
pub use error::{LayoutError, ModelError, ModelResult};
pub use floor::Floor;
pub use layout::{DoorEntry, LayoutDoc, RoomEntry};
pub use room::Room;
