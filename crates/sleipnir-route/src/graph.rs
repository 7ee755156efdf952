//! Physical coupling maps.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::{RouteError, RouteResult};
use crate::topology::TopologyFamily;

/// Target device coupling map.
///
/// The coupling map defines which pairs of physical qubits can interact
/// with two-qubit operations. Adjacency lists are indexed by qubit id and
/// kept sorted ascending: neighbor order is part of the contract (path
/// search and swap insertion must be reproducible across runs), not an
/// artifact of a hash container.
///
/// ## Deserialization
///
/// Adjacency lists are rebuilt from the edge list and skipped during
/// serialization. After deserializing, call
/// [`rebuild_caches()`](Self::rebuild_caches) before querying adjacency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouplingMap {
    /// Number of physical qubits.
    num_qubits: u32,
    /// List of connected qubit pairs (bidirectional).
    edges: Vec<(u32, u32)>,
    /// Adjacency lists indexed by qubit id, each sorted ascending.
    #[serde(skip)]
    adjacency: Vec<Vec<u32>>,
}

impl CouplingMap {
    /// Create a new coupling map with the given number of qubits and no edges.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            edges: vec![],
            adjacency: vec![vec![]; num_qubits as usize],
        }
    }

    /// Build the coupling map for a topology family.
    ///
    /// Verifies connectivity after construction: a map with an unreachable
    /// qubit cannot route and is rejected outright.
    pub fn from_family(family: TopologyFamily, num_qubits: u32) -> RouteResult<Self> {
        let mut map = Self::new(num_qubits);
        for (q1, q2) in family.edges(num_qubits) {
            map.add_edge(q1, q2)?;
        }
        map.validate_connectivity()?;
        Ok(map)
    }

    /// Build a custom coupling map from an explicit edge list.
    ///
    /// Endpoints are range-checked and connectivity is verified, same as
    /// [`from_family`](Self::from_family).
    pub fn from_edges(
        num_qubits: u32,
        edges: impl IntoIterator<Item = (u32, u32)>,
    ) -> RouteResult<Self> {
        let mut map = Self::new(num_qubits);
        for (q1, q2) in edges {
            map.add_edge(q1, q2)?;
        }
        map.validate_connectivity()?;
        Ok(map)
    }

    /// Add an edge between two qubits (bidirectional).
    ///
    /// Duplicate edges (including reversed pairs) and self-loops are
    /// silently ignored. Out-of-range endpoints are rejected.
    pub fn add_edge(&mut self, q1: u32, q2: u32) -> RouteResult<()> {
        if q1 >= self.num_qubits || q2 >= self.num_qubits {
            return Err(RouteError::EdgeOutOfRange {
                q1,
                q2,
                num_qubits: self.num_qubits,
            });
        }
        if q1 == q2 || self.are_adjacent(q1, q2) {
            return Ok(());
        }
        self.edges.push((q1, q2));
        insert_sorted(&mut self.adjacency[q1 as usize], q2);
        insert_sorted(&mut self.adjacency[q2 as usize], q1);
        Ok(())
    }

    /// Check if two qubits are directly connected.
    #[inline]
    pub fn are_adjacent(&self, q1: u32, q2: u32) -> bool {
        self.adjacency
            .get(q1 as usize)
            .is_some_and(|neighbors| neighbors.binary_search(&q2).is_ok())
    }

    /// Get the number of physical qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the coupling edges.
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    /// Get the neighbors of a qubit, in ascending id order.
    pub fn neighbors(&self, qubit: u32) -> &[u32] {
        self.adjacency
            .get(qubit as usize)
            .map_or(&[], Vec::as_slice)
    }

    /// Verify every qubit is reachable from qubit 0.
    ///
    /// Empty and single-qubit maps are trivially connected.
    pub fn validate_connectivity(&self) -> RouteResult<()> {
        if self.num_qubits <= 1 {
            return Ok(());
        }
        let mut seen = vec![false; self.num_qubits as usize];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back(0u32);
        let mut count = 1u32;

        while let Some(current) = queue.pop_front() {
            for &neighbor in self.neighbors(current) {
                if !seen[neighbor as usize] {
                    seen[neighbor as usize] = true;
                    count += 1;
                    queue.push_back(neighbor);
                }
            }
        }

        if count < self.num_qubits {
            let qubit = seen.iter().position(|&v| !v).map_or(0, |i| i as u32);
            return Err(RouteError::DisconnectedTopology { qubit });
        }
        Ok(())
    }

    /// Rebuild the adjacency lists from the edge list.
    ///
    /// Must be called after deserialization to restore adjacency queries.
    pub fn rebuild_caches(&mut self) {
        self.adjacency = vec![vec![]; self.num_qubits as usize];
        for &(q1, q2) in &self.edges {
            insert_sorted(&mut self.adjacency[q1 as usize], q2);
            insert_sorted(&mut self.adjacency[q2 as usize], q1);
        }
    }
}

fn insert_sorted(neighbors: &mut Vec<u32>, qubit: u32) {
    if let Err(pos) = neighbors.binary_search(&qubit) {
        neighbors.insert(pos, qubit);
    }
}
