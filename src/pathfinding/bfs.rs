//! Breadth-first search over a floor's door graph

use crate::model::Floor;
use crate::types::RoomId;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Find a shortest door-hop path between two rooms on one floor
///
/// Returns the rooms visited in order, endpoints included, so the path length
/// is always one greater than the number of doors traversed. Returns `None`
/// when either endpoint is absent from the floor or no door path connects
/// them — both are ordinary query outcomes, not errors.
///
/// Rooms are marked visited the moment they are enqueued, never at dequeue:
/// this guarantees no room enters the queue twice and the search terminates.
/// Each queue entry carries the full path taken to reach its last room, and
/// the first time the destination is dequeued its path is returned. Doors are
/// explored in ascending number order, which fixes the tie-break among
/// equal-length paths without affecting path length.
pub fn shortest_path(floor: &Floor, start: RoomId, end: RoomId) -> Option<Vec<RoomId>> {
    if !floor.contains_room(start) || !floor.contains_room(end) {
        debug!(floor = %floor.id, %start, %end, "endpoint absent from floor");
        return None;
    }
    if start == end {
        return Some(vec![start]);
    }

    let mut visited: HashSet<RoomId> = HashSet::from([start]);
    let mut queue: VecDeque<Vec<RoomId>> = VecDeque::from([vec![start]]);

    while let Some(path) = queue.pop_front() {
        let current = match path.last() {
            Some(&room) => room,
            None => continue,
        };

        if current == end {
            debug!(floor = %floor.id, hops = path.len() - 1, "path found");
            return Some(path);
        }

        let room = match floor.room(current) {
            Some(room) => room,
            None => continue,
        };

        for &next in room.doors().values() {
            if visited.insert(next) {
                let mut extended = path.clone();
                extended.push(next);
                queue.push_back(extended);
            }
        }
    }

    debug!(floor = %floor.id, %start, %end, "no door path between rooms");
    None
}
