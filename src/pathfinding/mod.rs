//! Shortest-path search over the door graph
//!
//! The search runs over doors, not raw adjacency: two rooms that share a wall
//! but no door are not connected. Edges are unweighted, so breadth-first
//! search yields a shortest path by door-hop count. The search is a pure
//! function of the floor's door graph at call time; no state persists between
//! queries.

mod bfs;

pub use bfs::shortest_path;
