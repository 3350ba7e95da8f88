//! Core types and identifiers for the room graph
//!
//! This module contains the foundational data types used throughout the
//! crate:
//!
//! - **Identifiers**: UUID-based unique identifiers for buildings, floors,
//!   and rooms
//! - **Enums**: type-safe enumerations for room attributes and output formats
//! - **Configuration**: CLI arguments and the validated run configuration
//!
//! # Usage Example
//!
//! ```rust
//! use floorgraph::types::*;
//!
//! let room_id = RoomId::new();
//! let floor_id = FloorId::new();
//!
//! let attribute = RoomAttribute::Windows;
//! let format = OutputFormat::Pretty;
//! # let _ = (room_id, floor_id, attribute, format);
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;

/// A door's number, unique within the room that owns it
///
/// The same physical passage carries an independent number on each side, so a
/// door between two rooms is identified by a (room, number) pair rather than
/// by the number alone.
pub type DoorNumber = u32;
