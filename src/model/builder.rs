//! Floor-plan construction
//!
//! Adjacency is a structural fact of the floor plan, not something mutated at
//! runtime. The builder is the one place adjacency can be declared: rooms are
//! registered, walls shared between them are declared symmetrically, and
//! [`FloorPlanBuilder::build`] freezes the result into a [`Floor`].

use crate::model::error::{ModelError, ModelResult};
use crate::model::floor::Floor;
use crate::model::room::Room;
use crate::types::RoomId;
use std::collections::HashMap;
use tracing::debug;

/// Builder for a floor and its fixed adjacency structure
#[derive(Debug, Default)]
pub struct FloorPlanBuilder {
    rooms: Vec<Room>,
    index: HashMap<RoomId, usize>,
}

impl FloorPlanBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a room with zero windows and lights, returning its ID
    pub fn add_room(&mut self, name: impl Into<String>) -> RoomId {
        self.insert(Room::new(name))
    }

    /// Register a room with initial window and light counts, returning its ID
    pub fn add_room_with_counts(
        &mut self,
        name: impl Into<String>,
        windows: u32,
        lights: u32,
    ) -> RoomId {
        self.insert(Room::with_counts(name, windows, lights))
    }

    fn insert(&mut self, room: Room) -> RoomId {
        let id = room.id;
        self.index.insert(id, self.rooms.len());
        self.rooms.push(room);
        id
    }

    /// Declare that two registered rooms share a wall
    ///
    /// Adjacency is recorded symmetrically on both rooms. Fails with
    /// [`ModelError::UnknownRoom`] when either ID was not registered with this
    /// builder and with [`ModelError::InvalidAdjacency`] when a room is
    /// declared adjacent to itself.
    pub fn declare_adjacent(&mut self, a: RoomId, b: RoomId) -> ModelResult<()> {
        if a == b {
            return Err(ModelError::InvalidAdjacency { room: a, other: b });
        }
        let a_idx = *self.index.get(&a).ok_or(ModelError::UnknownRoom(a))?;
        let b_idx = *self.index.get(&b).ok_or(ModelError::UnknownRoom(b))?;

        self.rooms[a_idx].push_adjacent(b);
        self.rooms[b_idx].push_adjacent(a);
        Ok(())
    }

    /// Freeze the plan into a floor; adjacency is immutable afterwards
    pub fn build(self) -> Floor {
        let mut floor = Floor::new();
        for room in self.rooms {
            floor.add_room(room);
        }
        debug!(floor = %floor.id, rooms = floor.room_count(), "floor plan built");
        floor
    }
}
