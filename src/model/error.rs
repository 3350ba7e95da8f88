//! Error types for the room-graph model
//!
//! Every variant is an immediate validation failure: the caller must fix the
//! input and retry. A failed mutation never leaves partial state behind.

use crate::types::{DoorNumber, RoomAttribute, RoomId};
use thiserror::Error;

/// Errors raised by room and building mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A door was requested between rooms that are not mutually adjacent
    #[error("Rooms {room} and {other} are not mutually adjacent")]
    InvalidAdjacency {
        /// Room the door was requested on
        room: RoomId,
        /// The intended peer room
        other: RoomId,
    },

    /// A door number is already in use within the room
    #[error("Door number {number} already exists in room {room}")]
    DuplicateDoorNumber {
        /// Room the door was requested on
        room: RoomId,
        /// The door number that is already taken
        number: DoorNumber,
    },

    /// A decrement would drive an attribute count below zero
    #[error("Removing {delta} {attribute} from room {room} would drop the count below zero (current: {current})")]
    NegativeValue {
        /// Room the mutation targeted
        room: RoomId,
        /// Which attribute the mutation touched
        attribute: RoomAttribute,
        /// The stored count at the time of the attempt
        current: u32,
        /// The requested decrement
        delta: u32,
    },

    /// An operation referenced a room the building does not contain
    #[error("Room {0} is not part of this building")]
    UnknownRoom(RoomId),
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while loading a layout document
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Two room entries share a name; the layout format addresses rooms by name
    #[error("Duplicate room name in layout: {0}")]
    DuplicateRoomName(String),

    /// An adjacency or door entry referenced a name with no room entry
    #[error("Layout references unknown room name: {0}")]
    UnknownRoomName(String),

    /// Replaying the layout through the model failed validation
    #[error("Layout violates a model invariant: {0}")]
    Model(#[from] ModelError),

    /// Reading the layout file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The layout document did not parse
    #[error("Layout parse error: {0}")]
    Json(#[from] serde_json::Error),
}
