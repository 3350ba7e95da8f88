//! Building: top-level owner of floors
//!
//! All graph and attribute mutations are building-mediated so the model
//! invariants hold everywhere: doors stay a subset of adjacency, door numbers
//! stay unique per room, and attribute counts never go below zero. Failed
//! mutations leave the model untouched.

use crate::model::error::{ModelError, ModelResult};
use crate::model::floor::Floor;
use crate::model::room::Room;
use crate::types::{BuildingId, DoorNumber, FloorId, RoomAttribute, RoomId};
use tracing::debug;

/// A building: an ordered collection of floors
#[derive(Debug, Clone)]
pub struct Building {
    /// Unique identifier for the building
    pub id: BuildingId,
    /// Human-readable name of the building
    pub name: String,
    /// Floors in insertion order
    floors: Vec<Floor>,
}

impl Building {
    /// Create a new building with no floors
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: BuildingId::new(), name: name.into(), floors: Vec::new() }
    }

    /// Add a floor to the building, returning its ID
    pub fn add_floor(&mut self, floor: Floor) -> FloorId {
        let id = floor.id;
        self.floors.push(floor);
        id
    }

    /// Floors in insertion order
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Get a floor by position
    pub fn floor(&self, index: usize) -> Option<&Floor> {
        self.floors.get(index)
    }

    /// Number of floors in the building
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Total number of rooms across all floors
    pub fn room_count(&self) -> usize {
        self.floors.iter().map(|f| f.room_count()).sum()
    }

    /// Get a room by ID, searching every floor
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.floors.iter().find_map(|f| f.room(id))
    }

    /// Get a mutable reference to a room by ID
    fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.floors.iter_mut().find_map(|f| f.room_mut(id))
    }

    /// Check whether a room exists anywhere in the building
    pub fn contains_room(&self, id: RoomId) -> bool {
        self.floors.iter().any(|f| f.contains_room(id))
    }

    /// Get the floor that contains a specific room
    pub fn floor_of_room(&self, id: RoomId) -> Option<&Floor> {
        self.floors.iter().find(|f| f.contains_room(id))
    }

    /// Establish a bidirectional passage between two adjacent rooms
    ///
    /// Adjacency must be mutual; each side receives its own door number. The
    /// whole operation is validated before either room is touched, so a
    /// failure (non-mutual adjacency, duplicate number on either side) leaves
    /// both rooms unchanged.
    pub fn add_door_between_rooms(
        &mut self,
        room_a: RoomId,
        room_b: RoomId,
        number_a: DoorNumber,
        number_b: DoorNumber,
    ) -> ModelResult<()> {
        {
            let a = self.room(room_a).ok_or(ModelError::UnknownRoom(room_a))?;
            let b = self.room(room_b).ok_or(ModelError::UnknownRoom(room_b))?;

            if !a.is_adjacent_to(room_b) {
                return Err(ModelError::InvalidAdjacency { room: room_a, other: room_b });
            }
            if !b.is_adjacent_to(room_a) {
                return Err(ModelError::InvalidAdjacency { room: room_b, other: room_a });
            }
            if a.doors().contains_key(&number_a) {
                return Err(ModelError::DuplicateDoorNumber { room: room_a, number: number_a });
            }
            if b.doors().contains_key(&number_b) {
                return Err(ModelError::DuplicateDoorNumber { room: room_b, number: number_b });
            }
        }

        // Validated above; the two inserts cannot fail
        if let Some(a) = self.room_mut(room_a) {
            a.add_door(number_a, room_b)?;
        }
        if let Some(b) = self.room_mut(room_b) {
            b.add_door(number_b, room_a)?;
        }

        debug!(
            building = %self.id,
            room_a = %room_a,
            room_b = %room_b,
            number_a,
            number_b,
            "door added between rooms"
        );
        Ok(())
    }

    /// Add windows to a room
    pub fn add_windows(&mut self, room: RoomId, delta: u32) -> ModelResult<()> {
        let current = self.room(room).ok_or(ModelError::UnknownRoom(room))?.windows;
        self.set_windows(room, current.saturating_add(delta))
    }

    /// Remove windows from a room
    ///
    /// Fails with [`ModelError::NegativeValue`] when `delta` exceeds the
    /// stored count; the count is unchanged afterwards.
    pub fn remove_windows(&mut self, room: RoomId, delta: u32) -> ModelResult<()> {
        let current = self.room(room).ok_or(ModelError::UnknownRoom(room))?.windows;
        let next = current.checked_sub(delta).ok_or(ModelError::NegativeValue {
            room,
            attribute: RoomAttribute::Windows,
            current,
            delta,
        })?;
        self.set_windows(room, next)
    }

    /// Replace a room's window count
    pub fn set_windows(&mut self, room: RoomId, count: u32) -> ModelResult<()> {
        self.room_mut(room).ok_or(ModelError::UnknownRoom(room))?.set_windows(count);
        debug!(room = %room, count, "window count updated");
        Ok(())
    }

    /// Add lights to a room
    pub fn add_lights(&mut self, room: RoomId, delta: u32) -> ModelResult<()> {
        let current = self.room(room).ok_or(ModelError::UnknownRoom(room))?.lights;
        self.set_lights(room, current.saturating_add(delta))
    }

    /// Remove lights from a room
    ///
    /// Fails with [`ModelError::NegativeValue`] when `delta` exceeds the
    /// stored count; the count is unchanged afterwards.
    pub fn remove_lights(&mut self, room: RoomId, delta: u32) -> ModelResult<()> {
        let current = self.room(room).ok_or(ModelError::UnknownRoom(room))?.lights;
        let next = current.checked_sub(delta).ok_or(ModelError::NegativeValue {
            room,
            attribute: RoomAttribute::Lights,
            current,
            delta,
        })?;
        self.set_lights(room, next)
    }

    /// Replace a room's light count
    pub fn set_lights(&mut self, room: RoomId, count: u32) -> ModelResult<()> {
        self.room_mut(room).ok_or(ModelError::UnknownRoom(room))?.set_lights(count);
        debug!(room = %room, count, "light count updated");
        Ok(())
    }

    /// Replace a room's name; names carry no uniqueness constraint
    pub fn rename_room(&mut self, room: RoomId, new_name: impl Into<String>) -> ModelResult<()> {
        let room_ref = self.room_mut(room).ok_or(ModelError::UnknownRoom(room))?;
        room_ref.name = new_name.into();
        Ok(())
    }

    /// Find a shortest door-hop path between two rooms on the first floor
    ///
    /// The first-floor convention matches the current single-floor scope; use
    /// [`Building::find_path_on_floor`] or [`Floor::find_path`] to make the
    /// floor explicit. Returns `None` when the building has no floors, either
    /// room is absent from the first floor, or no door path connects them.
    pub fn find_path(&self, start: RoomId, end: RoomId) -> Option<Vec<RoomId>> {
        self.find_path_on_floor(0, start, end)
    }

    /// Find a shortest door-hop path between two rooms on a specific floor
    pub fn find_path_on_floor(
        &self,
        floor_index: usize,
        start: RoomId,
        end: RoomId,
    ) -> Option<Vec<RoomId>> {
        self.floors.get(floor_index)?.find_path(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::builder::FloorPlanBuilder;

    /// Two adjacent rooms and one detached room on a single floor
    fn setup() -> (Building, RoomId, RoomId, RoomId) {
        let mut builder = FloorPlanBuilder::new();
        let a = builder.add_room("A");
        let b = builder.add_room("B");
        let c = builder.add_room("C");
        builder.declare_adjacent(a, b).unwrap();

        let mut building = Building::new("Test Building");
        building.add_floor(builder.build());
        (building, a, b, c)
    }

    #[test]
    fn test_add_door_between_adjacent_rooms() {
        let (mut building, a, b, _) = setup();

        building.add_door_between_rooms(a, b, 1, 2).unwrap();

        assert_eq!(building.room(a).unwrap().doors().get(&1), Some(&b));
        assert_eq!(building.room(b).unwrap().doors().get(&2), Some(&a));
    }

    #[test]
    fn test_add_door_rejects_non_adjacent_rooms() {
        let (mut building, a, _, c) = setup();

        let err = building.add_door_between_rooms(a, c, 1, 1).unwrap_err();
        assert_eq!(err, ModelError::InvalidAdjacency { room: a, other: c });
        assert_eq!(building.room(a).unwrap().door_count(), 0);
        assert_eq!(building.room(c).unwrap().door_count(), 0);
    }

    #[test]
    fn test_add_door_duplicate_number_leaves_both_rooms_unchanged() {
        let (mut building, a, b, _) = setup();
        building.add_door_between_rooms(a, b, 1, 1).unwrap();

        // Door number 1 is taken on the b side; nothing may change on either side
        let err = building.add_door_between_rooms(a, b, 2, 1).unwrap_err();
        assert_eq!(err, ModelError::DuplicateDoorNumber { room: b, number: 1 });
        assert_eq!(building.room(a).unwrap().door_count(), 1);
        assert_eq!(building.room(b).unwrap().door_count(), 1);
    }

    #[test]
    fn test_add_door_unknown_room() {
        let (mut building, a, _, _) = setup();
        let ghost = RoomId::new();

        let err = building.add_door_between_rooms(a, ghost, 1, 1).unwrap_err();
        assert_eq!(err, ModelError::UnknownRoom(ghost));
    }

    #[test]
    fn test_window_mutators() {
        let (mut building, a, _, _) = setup();

        building.set_windows(a, 3).unwrap();
        assert_eq!(building.room(a).unwrap().windows, 3);

        building.add_windows(a, 2).unwrap();
        assert_eq!(building.room(a).unwrap().windows, 5);

        building.remove_windows(a, 4).unwrap();
        assert_eq!(building.room(a).unwrap().windows, 1);
    }

    #[test]
    fn test_remove_windows_below_zero_fails_and_preserves_count() {
        let (mut building, a, _, _) = setup();
        building.set_windows(a, 2).unwrap();

        let err = building.remove_windows(a, 5).unwrap_err();
        assert_eq!(
            err,
            ModelError::NegativeValue {
                room: a,
                attribute: RoomAttribute::Windows,
                current: 2,
                delta: 5,
            }
        );
        assert_eq!(building.room(a).unwrap().windows, 2);
    }

    #[test]
    fn test_light_mutators() {
        let (mut building, a, _, _) = setup();

        building.set_lights(a, 1).unwrap();
        building.add_lights(a, 3).unwrap();
        assert_eq!(building.room(a).unwrap().lights, 4);

        let err = building.remove_lights(a, 6).unwrap_err();
        assert!(matches!(
            err,
            ModelError::NegativeValue { attribute: RoomAttribute::Lights, .. }
        ));
        assert_eq!(building.room(a).unwrap().lights, 4);
    }

    #[test]
    fn test_rename_room() {
        let (mut building, a, b, _) = setup();

        building.rename_room(a, "Reception").unwrap();
        assert_eq!(building.room(a).unwrap().name, "Reception");

        // Names carry no uniqueness constraint
        building.rename_room(b, "Reception").unwrap();
        assert_eq!(building.room(b).unwrap().name, "Reception");
    }

    #[test]
    fn test_mutators_reject_unknown_room() {
        let (mut building, _, _, _) = setup();
        let ghost = RoomId::new();

        assert_eq!(building.set_windows(ghost, 1).unwrap_err(), ModelError::UnknownRoom(ghost));
        assert_eq!(building.add_lights(ghost, 1).unwrap_err(), ModelError::UnknownRoom(ghost));
        assert_eq!(
            building.rename_room(ghost, "Ghost").unwrap_err(),
            ModelError::UnknownRoom(ghost)
        );
    }

    #[test]
    fn test_find_path_on_empty_building() {
        let building = Building::new("Empty");
        assert!(building.find_path(RoomId::new(), RoomId::new()).is_none());
    }

    #[test]
    fn test_room_lookup_spans_floors() {
        let mut builder = FloorPlanBuilder::new();
        let upstairs = builder.add_room("Upstairs");

        let (mut building, a, _, _) = setup();
        building.add_floor(builder.build());

        assert_eq!(building.floor_count(), 2);
        assert_eq!(building.room_count(), 4);
        assert!(building.contains_room(upstairs));
        assert_eq!(building.floor_of_room(upstairs).unwrap().id, building.floors()[1].id);
        assert_eq!(building.floor_of_room(a).unwrap().id, building.floors()[0].id);
    }
}
