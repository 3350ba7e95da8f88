//! Layout documents: declarative building descriptions
//!
//! A layout document is the JSON form of a building: room entries, adjacency
//! pairs, and door declarations, all addressed by room name. Loading a
//! document replays every declaration through the floor-plan builder and the
//! building's mediated mutators, so a document that violates a model
//! invariant is rejected with the same errors a programmatic caller would
//! see. Room names must be unique within a document (and only there — the
//! model itself never requires unique names).

use crate::model::builder::FloorPlanBuilder;
use crate::model::building::Building;
use crate::model::error::LayoutError;
use crate::types::{DoorNumber, RoomId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// A room entry in a layout document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomEntry {
    /// Room name, unique within the document
    pub name: String,
    /// Initial window count
    #[serde(default)]
    pub windows: u32,
    /// Initial light count
    #[serde(default)]
    pub lights: u32,
}

/// A door declaration between two named rooms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorEntry {
    /// First room name
    pub a: String,
    /// Second room name
    pub b: String,
    /// Door number on the first room's side
    pub door_a: DoorNumber,
    /// Door number on the second room's side
    pub door_b: DoorNumber,
}

/// A declarative description of a single-floor building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDoc {
    /// Building name
    pub building: String,
    /// Rooms on the floor, in order
    pub rooms: Vec<RoomEntry>,
    /// Pairs of room names that share a wall
    #[serde(default)]
    pub adjacency: Vec<(String, String)>,
    /// Door declarations; every pair must also appear in `adjacency`
    #[serde(default)]
    pub doors: Vec<DoorEntry>,
}

impl LayoutDoc {
    /// The built-in sample layout: an office floor around a central corridor
    pub fn sample() -> Self {
        let corridor_neighbors = ["Office1", "Kitchen", "Office2", "Bathroom", "Office3"];

        let mut adjacency: Vec<(String, String)> = corridor_neighbors
            .iter()
            .map(|&name| ("Corridor".to_string(), name.to_string()))
            .collect();
        adjacency.push(("Bathroom".to_string(), "Office3".to_string()));
        adjacency.push(("Office3".to_string(), "Office4".to_string()));

        let mut doors: Vec<DoorEntry> = corridor_neighbors
            .iter()
            .enumerate()
            .map(|(i, &name)| DoorEntry {
                a: name.to_string(),
                b: "Corridor".to_string(),
                door_a: 1,
                door_b: i as DoorNumber + 1,
            })
            .collect();
        doors.push(DoorEntry {
            a: "Office3".to_string(),
            b: "Office4".to_string(),
            door_a: 2,
            door_b: 1,
        });

        Self {
            building: "Sample Office Building".to_string(),
            rooms: vec![
                RoomEntry { name: "Office1".to_string(), windows: 2, lights: 2 },
                RoomEntry { name: "Kitchen".to_string(), windows: 1, lights: 3 },
                RoomEntry { name: "Office2".to_string(), windows: 2, lights: 2 },
                RoomEntry { name: "Bathroom".to_string(), windows: 0, lights: 1 },
                RoomEntry { name: "Corridor".to_string(), windows: 0, lights: 4 },
                RoomEntry { name: "Office3".to_string(), windows: 3, lights: 2 },
                RoomEntry { name: "Office4".to_string(), windows: 1, lights: 1 },
            ],
            adjacency,
            doors,
        }
    }

    /// Load a layout document from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Serialize the document as indented JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Build a building from the document
    ///
    /// Also returns the name-to-ID map callers need to address the rooms they
    /// declared. Fails when a room name repeats, an adjacency or door entry
    /// names an unknown room, or a door declaration violates a model
    /// invariant.
    pub fn build(&self) -> Result<(Building, HashMap<String, RoomId>), LayoutError> {
        let mut builder = FloorPlanBuilder::new();
        let mut names: HashMap<String, RoomId> = HashMap::new();

        for entry in &self.rooms {
            if names.contains_key(&entry.name) {
                return Err(LayoutError::DuplicateRoomName(entry.name.clone()));
            }
            let id = builder.add_room_with_counts(&entry.name, entry.windows, entry.lights);
            names.insert(entry.name.clone(), id);
        }

        let resolve = |name: &str| -> Result<RoomId, LayoutError> {
            names.get(name).copied().ok_or_else(|| LayoutError::UnknownRoomName(name.to_string()))
        };

        for (a, b) in &self.adjacency {
            builder.declare_adjacent(resolve(a)?, resolve(b)?)?;
        }

        let mut building = Building::new(&self.building);
        building.add_floor(builder.build());

        for door in &self.doors {
            building.add_door_between_rooms(
                resolve(&door.a)?,
                resolve(&door.b)?,
                door.door_a,
                door.door_b,
            )?;
        }

        info!(
            building = %building.id,
            rooms = building.room_count(),
            doors = self.doors.len(),
            "layout loaded"
        );
        Ok((building, names))
    }
}
