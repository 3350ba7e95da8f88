//! Enumeration types for the room graph
//!
//! This module contains the small enumerations shared across the crate: the
//! countable room attributes and the snapshot output encodings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Countable attributes of a room
///
/// Used to identify which attribute a mutation touched, primarily in error
/// reporting and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomAttribute {
    /// Window count
    Windows,
    /// Light fixture count
    Lights,
}

impl fmt::Display for RoomAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomAttribute::Windows => write!(f, "windows"),
            RoomAttribute::Lights => write!(f, "lights"),
        }
    }
}

impl FromStr for RoomAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "window" => Ok(RoomAttribute::Windows),
            "lights" | "light" => Ok(RoomAttribute::Lights),
            _ => Err(format!("Unknown room attribute: {}", s)),
        }
    }
}

/// Output encodings for floor snapshots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Compact JSON
    #[default]
    Json,
    /// Human-readable indented JSON
    Pretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Pretty => write!(f, "pretty"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" | "pretty-json" | "prettyjson" => Ok(OutputFormat::Pretty),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
