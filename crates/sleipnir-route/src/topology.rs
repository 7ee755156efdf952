//! Device topology families.
//!
//! Each family is a rule for generating coupling edges from a qubit count.
//! The set is closed: a new family means a new variant plus its edge
//! builder, and everything downstream (graph construction, routing, device
//! profiles) picks it up through [`TopologyFamily::edges`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// The connectivity families a device can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyFamily {
    /// Sparse superconducting lattice approximated by index arithmetic:
    /// a nearest-neighbor chain with skip couplers every third qubit.
    /// Degree stays at or below 4.
    HeavyHex,
    /// Cycle of all qubits plus non-wrapping next-nearest-neighbor chords.
    RingWithSkip,
    /// Complete graph; every pair interacts directly and routing never
    /// inserts a swap.
    AllToAll,
}

impl TopologyFamily {
    /// All families, in stable order.
    pub const ALL: [TopologyFamily; 3] = [
        TopologyFamily::HeavyHex,
        TopologyFamily::RingWithSkip,
        TopologyFamily::AllToAll,
    ];

    /// Stable string key, as used in reports and serialized forms.
    pub fn key(&self) -> &'static str {
        match self {
            TopologyFamily::HeavyHex => "heavy_hex",
            TopologyFamily::RingWithSkip => "ring_with_skip",
            TopologyFamily::AllToAll => "all_to_all",
        }
    }

    /// Generate the coupling edges for a device with `n` qubits.
    ///
    /// Degenerate pairs (self-loops from tiny ring sizes) and duplicates
    /// may appear in the output; the graph builder drops them.
    pub fn edges(&self, n: u32) -> Vec<(u32, u32)> {
        match self {
            TopologyFamily::HeavyHex => heavy_hex_edges(n),
            TopologyFamily::RingWithSkip => ring_with_skip_edges(n),
            TopologyFamily::AllToAll => all_to_all_edges(n),
        }
    }
}

impl fmt::Display for TopologyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TopologyFamily {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heavy_hex" => Ok(TopologyFamily::HeavyHex),
            "ring_with_skip" => Ok(TopologyFamily::RingWithSkip),
            "all_to_all" => Ok(TopologyFamily::AllToAll),
            other => Err(RouteError::UnknownTopologyFamily(other.to_string())),
        }
    }
}

/// Chain backbone with +3 skips at multiples of three, plus +4 diagonals.
fn heavy_hex_edges(n: u32) -> Vec<(u32, u32)> {
    let mut edges = vec![];
    for i in 0..n.saturating_sub(1) {
        edges.push((i, i + 1));
        if i % 3 == 0 && i + 3 < n {
            edges.push((i, i + 3));
        }
    }
    let mut i = 0;
    while i + 4 < n {
        edges.push((i, i + 4));
        i += 3;
    }
    edges
}

/// Full cycle plus +2 chords that do not wrap around the ring.
fn ring_with_skip_edges(n: u32) -> Vec<(u32, u32)> {
    if n == 0 {
        return vec![];
    }
    let mut edges = vec![];
    for i in 0..n {
        edges.push((i, (i + 1) % n));
        if i + 2 < n {
            edges.push((i, i + 2));
        }
    }
    edges
}

fn all_to_all_edges(n: u32) -> Vec<(u32, u32)> {
    let mut edges = vec![];
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((i, j));
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_key_round_trip() {
        for family in TopologyFamily::ALL {
            assert_eq!(family.key().parse::<TopologyFamily>().unwrap(), family);
            assert_eq!(format!("{family}"), family.key());
        }
    }

    #[test]
    fn test_unknown_family() {
        let err = "hexagonal".parse::<TopologyFamily>().unwrap_err();
        assert!(matches!(err, RouteError::UnknownTopologyFamily(name) if name == "hexagonal"));
    }

    #[test]
    fn test_heavy_hex_edges() {
        let edges = TopologyFamily::HeavyHex.edges(7);
        assert!(edges.contains(&(0, 1)));
        assert!(edges.contains(&(5, 6)));
        assert!(edges.contains(&(0, 3)));
        assert!(edges.contains(&(3, 6)));
        assert!(edges.contains(&(0, 4)));
        assert!(!edges.contains(&(1, 4)));
    }

    #[test]
    fn test_ring_with_skip_edges() {
        let edges = TopologyFamily::RingWithSkip.edges(5);
        // Cycle edges.
        assert!(edges.contains(&(0, 1)));
        assert!(edges.contains(&(4, 0)));
        // Skip chords stop before wrapping.
        assert!(edges.contains(&(0, 2)));
        assert!(edges.contains(&(2, 4)));
        assert!(!edges.contains(&(3, 0)));
        assert!(!edges.contains(&(4, 1)));
    }

    #[test]
    fn test_all_to_all_edge_count() {
        let edges = TopologyFamily::AllToAll.edges(6);
        assert_eq!(edges.len(), 15);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(TopologyFamily::RingWithSkip.edges(0).is_empty());
        assert_eq!(TopologyFamily::RingWithSkip.edges(1), vec![(0, 0)]);
        assert!(TopologyFamily::HeavyHex.edges(1).is_empty());
        assert!(TopologyFamily::AllToAll.edges(1).is_empty());
    }
}
