//! Unique identifier types for the room graph
//!
//! This module contains UUID-based identifier types for buildings, floors,
//! and rooms. Room identity is carried by `RoomId`, never by the room name:
//! names are cosmetic labels that may collide or change.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Parse an identifier from its prefixed string form, accepting a raw UUID
/// as a fallback for data written before the prefixes were introduced.
fn parse_prefixed(value: &str, prefix: &str) -> Result<Uuid, uuid::Error> {
    Uuid::parse_str(value.strip_prefix(prefix).unwrap_or(value))
}

/// Unique identifier for a building
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildingId(pub Uuid);

impl BuildingId {
    /// Create a new random building ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BuildingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BLD_{}", self.0.simple())
    }
}

impl Serialize for BuildingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BuildingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "BLD_").map(BuildingId).map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a floor within a building
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FloorId(pub Uuid);

impl FloorId {
    /// Create a new random floor ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FloorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FLR_{}", self.0.simple())
    }
}

impl Serialize for FloorId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FloorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "FLR_").map(FloorId).map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a room within a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub Uuid);

impl RoomId {
    /// Create a new random room ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ROOM_{}", self.0.simple())
    }
}

impl Serialize for RoomId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RoomId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "ROOM_").map(RoomId).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(RoomId::new(), RoomId::new());
        assert_ne!(FloorId::new(), FloorId::new());
        assert_ne!(BuildingId::new(), BuildingId::new());
    }

    #[test]
    fn test_room_id_display() {
        let id = RoomId::new();
        let display_str = format!("{}", id);

        assert!(display_str.starts_with("ROOM_"));
        // ROOM_ + 32 hex chars
        assert_eq!(display_str.len(), 37);
    }

    #[test]
    fn test_id_serialization_round_trip() {
        let room_id = RoomId::new();
        let json = serde_json::to_string(&room_id).unwrap();
        assert!(json.contains("ROOM_"));
        let back: RoomId = serde_json::from_str(&json).unwrap();
        assert_eq!(room_id, back);

        let floor_id = FloorId::new();
        let json = serde_json::to_string(&floor_id).unwrap();
        assert!(json.contains("FLR_"));
        let back: FloorId = serde_json::from_str(&json).unwrap();
        assert_eq!(floor_id, back);

        let building_id = BuildingId::new();
        let json = serde_json::to_string(&building_id).unwrap();
        assert!(json.contains("BLD_"));
        let back: BuildingId = serde_json::from_str(&json).unwrap();
        assert_eq!(building_id, back);
    }

    #[test]
    fn test_raw_uuid_deserialization_fallback() {
        let raw = Uuid::new_v4();
        let json = format!("\"{}\"", raw);

        let room_id: RoomId = serde_json::from_str(&json).unwrap();
        assert_eq!(room_id.0, raw);
    }

    #[test]
    fn test_id_hash_and_equality() {
        use std::collections::HashSet;

        let id1 = RoomId::new();
        let id2 = RoomId::new();
        let id1_copy = RoomId(id1.0);

        assert_eq!(id1, id1_copy);
        assert_ne!(id1, id2);

        let mut set = HashSet::new();
        set.insert(id1);
        set.insert(id2);
        set.insert(id1_copy);
        assert_eq!(set.len(), 2);
    }
}
