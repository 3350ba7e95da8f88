//! Floor: an ordered collection of rooms
//!
//! A floor owns its rooms and keeps an ID index beside the ordered list so
//! lookups stay cheap while room order remains stable. Path queries operate
//! per floor; cross-floor structure does not exist.

use crate::model::room::Room;
use crate::pathfinding;
use crate::types::{FloorId, RoomId};
use std::collections::HashMap;

/// An ordered collection of rooms, owned by exactly one building
#[derive(Debug, Clone, Default)]
pub struct Floor {
    /// Unique identifier for the floor
    pub id: FloorId,
    /// Rooms in insertion order
    rooms: Vec<Room>,
    /// Quick lookup map from room ID to index
    index: HashMap<RoomId, usize>,
}

impl Floor {
    /// Create a new empty floor
    pub fn new() -> Self {
        Self { id: FloorId::new(), rooms: Vec::new(), index: HashMap::new() }
    }

    /// Add a room to the floor, returning its ID
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = room.id;
        self.index.insert(id, self.rooms.len());
        self.rooms.push(room);
        id
    }

    /// Rooms in insertion order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Get a room by ID
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.index.get(&id).and_then(|&idx| self.rooms.get(idx))
    }

    /// Get a mutable reference to a room by ID
    pub(crate) fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        let idx = *self.index.get(&id)?;
        self.rooms.get_mut(idx)
    }

    /// Check whether a room is on this floor
    pub fn contains_room(&self, id: RoomId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of rooms on the floor
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Find a shortest door-hop path between two rooms on this floor
    ///
    /// Returns `None` when either endpoint is absent or no door path connects
    /// them; see [`pathfinding::shortest_path`] for the traversal contract.
    pub fn find_path(&self, start: RoomId, end: RoomId) -> Option<Vec<RoomId>> {
        pathfinding::shortest_path(self, start, end)
    }
}
