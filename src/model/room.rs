//! Room entity and per-room invariants
//!
//! A room is a node in the building graph. Its adjacency set is a fixed
//! structural fact ("these rooms share a wall") established when the floor
//! plan is built; doors are explicitly added passages and must stay a subset
//! of adjacency. Door numbers are unique within a room, and door iteration
//! follows ascending number order.

use crate::model::error::{ModelError, ModelResult};
use crate::types::{DoorNumber, RoomId};
use std::collections::{BTreeMap, BTreeSet};

/// A room within a floor
///
/// Identity is carried by [`Room::id`]; the name is a cosmetic label with no
/// uniqueness constraint.
#[derive(Debug, Clone)]
pub struct Room {
    /// Unique identifier for the room
    pub id: RoomId,
    /// Human-readable name of the room
    pub name: String,
    /// Rooms physically adjacent to this one; fixed once the floor is built
    adjacent: BTreeSet<RoomId>,
    /// Door number to connected room; every target must be adjacent
    doors: BTreeMap<DoorNumber, RoomId>,
    /// Number of windows
    pub windows: u32,
    /// Number of light fixtures
    pub lights: u32,
}

impl Room {
    /// Create a new room with zero windows and lights
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_counts(name, 0, 0)
    }

    /// Create a new room with initial window and light counts
    pub fn with_counts(name: impl Into<String>, windows: u32, lights: u32) -> Self {
        Self {
            id: RoomId::new(),
            name: name.into(),
            adjacent: BTreeSet::new(),
            doors: BTreeMap::new(),
            windows,
            lights,
        }
    }

    /// Record an adjacency; only the floor-plan builder may do this
    pub(crate) fn push_adjacent(&mut self, other: RoomId) {
        self.adjacent.insert(other);
    }

    /// Check whether another room is in this room's adjacency set
    pub fn is_adjacent_to(&self, other: RoomId) -> bool {
        self.adjacent.contains(&other)
    }

    /// The rooms adjacent to this one
    pub fn adjacent_rooms(&self) -> &BTreeSet<RoomId> {
        &self.adjacent
    }

    /// The room's doors, keyed by door number in ascending order
    pub fn doors(&self) -> &BTreeMap<DoorNumber, RoomId> {
        &self.doors
    }

    /// Number of doors in the room
    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Add a door from this room to an adjacent room
    ///
    /// Fails with [`ModelError::InvalidAdjacency`] when `other` is not in the
    /// adjacency set and with [`ModelError::DuplicateDoorNumber`] when the
    /// number is already taken. The other room is not touched; symmetric
    /// passages are established through
    /// [`Building::add_door_between_rooms`](crate::model::Building::add_door_between_rooms).
    pub fn add_door(&mut self, number: DoorNumber, other: RoomId) -> ModelResult<()> {
        if !self.is_adjacent_to(other) {
            return Err(ModelError::InvalidAdjacency { room: self.id, other });
        }
        if self.doors.contains_key(&number) {
            return Err(ModelError::DuplicateDoorNumber { room: self.id, number });
        }
        self.doors.insert(number, other);
        Ok(())
    }

    /// Replace the window count
    pub fn set_windows(&mut self, count: u32) {
        self.windows = count;
    }

    /// Replace the light count
    pub fn set_lights(&mut self, count: u32) {
        self.lights = count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_creation_defaults() {
        let room = Room::new("Office");

        assert_eq!(room.name, "Office");
        assert_eq!(room.windows, 0);
        assert_eq!(room.lights, 0);
        assert!(room.adjacent_rooms().is_empty());
        assert_eq!(room.door_count(), 0);
    }

    #[test]
    fn test_room_creation_with_counts() {
        let room = Room::with_counts("Kitchen", 2, 4);

        assert_eq!(room.windows, 2);
        assert_eq!(room.lights, 4);
    }

    #[test]
    fn test_add_door_requires_adjacency() {
        let mut room = Room::new("Office");
        let stranger = RoomId::new();

        let err = room.add_door(1, stranger).unwrap_err();
        assert_eq!(err, ModelError::InvalidAdjacency { room: room.id, other: stranger });
        assert_eq!(room.door_count(), 0);
    }

    #[test]
    fn test_add_door_rejects_duplicate_number() {
        let mut room = Room::new("Office");
        let neighbor_a = RoomId::new();
        let neighbor_b = RoomId::new();
        room.push_adjacent(neighbor_a);
        room.push_adjacent(neighbor_b);

        room.add_door(1, neighbor_a).unwrap();
        let err = room.add_door(1, neighbor_b).unwrap_err();
        assert_eq!(err, ModelError::DuplicateDoorNumber { room: room.id, number: 1 });

        // The original mapping survives the failed attempt
        assert_eq!(room.doors().get(&1), Some(&neighbor_a));
        assert_eq!(room.door_count(), 1);
    }

    #[test]
    fn test_doors_iterate_in_ascending_number_order() {
        let mut room = Room::new("Corridor");
        let neighbors: Vec<RoomId> = (0..4).map(|_| RoomId::new()).collect();
        for &n in &neighbors {
            room.push_adjacent(n);
        }

        room.add_door(7, neighbors[0]).unwrap();
        room.add_door(2, neighbors[1]).unwrap();
        room.add_door(5, neighbors[2]).unwrap();
        room.add_door(1, neighbors[3]).unwrap();

        let numbers: Vec<u32> = room.doors().keys().copied().collect();
        assert_eq!(numbers, vec![1, 2, 5, 7]);
    }

    #[test]
    fn test_attribute_setters_replace_values() {
        let mut room = Room::with_counts("Lab", 3, 6);
        room.set_windows(1);
        room.set_lights(0);

        assert_eq!(room.windows, 1);
        assert_eq!(room.lights, 0);
    }
}
