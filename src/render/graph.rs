//! Floor graph snapshots for external renderers

use crate::model::Floor;
use crate::types::{DoorNumber, FloorId, OutputFormat, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A room, flattened into the fields a renderer labels a node with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomNode {
    /// Room identity
    pub id: RoomId,
    /// Room name
    pub name: String,
    /// Window count
    pub windows: u32,
    /// Light count
    pub lights: u32,
    /// Number of doors in the room
    pub doors: usize,
}

impl RoomNode {
    /// Multi-line label text: name plus attribute counts
    pub fn label(&self) -> String {
        format!(
            "{}\nwindows: {}\ndoors: {}\nlights: {}",
            self.name, self.windows, self.doors, self.lights
        )
    }
}

/// A passage between two rooms, one entry per unordered room pair
///
/// Doors added through the building are symmetric, so both sides usually
/// carry a number; a one-sided door added directly on a room leaves the
/// reverse side as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorEdge {
    /// First endpoint
    pub a: RoomId,
    /// Second endpoint
    pub b: RoomId,
    /// Door number on the first endpoint's side
    pub door_a: Option<DoorNumber>,
    /// Door number on the second endpoint's side
    pub door_b: Option<DoorNumber>,
}

/// A serializable snapshot of one floor's door graph
///
/// Nodes are rooms, edges are doors, and `path` carries an ordered room
/// sequence for the renderer to highlight (empty when no path was requested).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorGraph {
    /// The floor the snapshot was captured from
    pub floor_id: FloorId,
    /// Capture timestamp
    pub generated_at: DateTime<Utc>,
    /// One node per room, in floor order
    pub nodes: Vec<RoomNode>,
    /// One edge per connected room pair
    pub edges: Vec<DoorEdge>,
    /// Ordered room sequence to highlight; empty when none
    pub path: Vec<RoomId>,
}

impl FloorGraph {
    /// Capture a floor's rooms and doors
    pub fn capture(floor: &Floor) -> Self {
        Self::capture_with_path(floor, &[])
    }

    /// Capture a floor with an ordered room sequence to highlight
    ///
    /// Path entries that are not on the floor are dropped rather than
    /// rejected; the snapshot is a view, not a validator.
    pub fn capture_with_path(floor: &Floor, path: &[RoomId]) -> Self {
        let nodes = floor
            .rooms()
            .iter()
            .map(|room| RoomNode {
                id: room.id,
                name: room.name.clone(),
                windows: room.windows,
                lights: room.lights,
                doors: room.door_count(),
            })
            .collect();

        let mut edges = Vec::new();
        let mut seen: HashSet<(RoomId, RoomId)> = HashSet::new();
        for room in floor.rooms() {
            for (&number, &other) in room.doors() {
                let key = if room.id < other { (room.id, other) } else { (other, room.id) };
                if !seen.insert(key) {
                    continue;
                }
                // the reverse direction, when the door was added symmetrically
                let reverse = floor.room(other).and_then(|peer| {
                    peer.doors().iter().find_map(|(&n, &target)| (target == room.id).then_some(n))
                });
                edges.push(DoorEdge {
                    a: room.id,
                    b: other,
                    door_a: Some(number),
                    door_b: reverse,
                });
            }
        }

        let path = path.iter().copied().filter(|&id| floor.contains_room(id)).collect();

        Self { floor_id: floor.id, generated_at: Utc::now(), nodes, edges, path }
    }

    /// Serialize the snapshot in the requested encoding
    pub fn to_json(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Pretty => serde_json::to_string_pretty(self),
        }
    }
}
