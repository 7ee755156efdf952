//! Shortest-path search over coupling maps.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;

use crate::error::{RouteError, RouteResult};
use crate::graph::CouplingMap;

/// Find a shortest path between two physical qubits.
///
/// Unweighted breadth-first search. Returns the inclusive sequence
/// `[from, ..., to]` where consecutive entries are adjacent in `map`;
/// `from == to` yields the single-element path. Exhausting the search
/// without reaching `to` is an explicit [`RouteError::NoPath`], never an
/// empty sequence (which would be ambiguous with the trivial case).
///
/// Neighbors are expanded in the map's ascending neighbor order, so ties
/// between equal-length routes resolve the same way on every run: one
/// reproducible path per `(from, to)` pair for a given map.
pub fn shortest_path(map: &CouplingMap, from: u32, to: u32) -> RouteResult<Vec<u32>> {
    if from == to {
        return Ok(vec![from]);
    }

    // Predecessor map doubling as the visited set.
    let mut visited: FxHashMap<u32, Option<u32>> = FxHashMap::default();
    let mut queue = VecDeque::new();

    visited.insert(from, None);
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        for &neighbor in map.neighbors(current) {
            if visited.contains_key(&neighbor) {
                continue;
            }

            visited.insert(neighbor, Some(current));

            if neighbor == to {
                let mut path = vec![to];
                let mut node = to;
                while let Some(Some(prev)) = visited.get(&node) {
                    path.push(*prev);
                    node = *prev;
                }
                path.reverse();
                return Ok(path);
            }

            queue.push_back(neighbor);
        }
    }

    Err(RouteError::NoPath { from, to })
}
