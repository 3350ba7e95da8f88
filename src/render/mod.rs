//! Renderer-facing floor snapshots
//!
//! Rendering happens outside this crate. What a renderer needs is structural
//! data — rooms as nodes, doors as edges, attribute values for labels, and
//! optionally a path to distinguish — and this module captures exactly that
//! as a serializable snapshot. No drawing happens here.

mod graph;

pub use graph::{DoorEdge, FloorGraph, RoomNode};
