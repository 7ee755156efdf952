//! Logical-to-physical qubit layouts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use sleipnir_ir::QubitId;

use crate::error::{RouteError, RouteResult};

/// A mapping from logical qubits to physical qubits.
///
/// Both directions are stored so lookups and [`swap`](Self::swap) are
/// O(1). Every mutation keeps the two maps consistent: the layout is a
/// bijection on its assigned domain at all times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Map from logical qubit to physical qubit index.
    logical_to_physical: FxHashMap<QubitId, u32>,
    /// Map from physical qubit index to logical qubit.
    physical_to_logical: FxHashMap<u32, QubitId>,
}

impl Layout {
    /// Create a new empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trivial layout (logical qubit i → physical qubit i).
    ///
    /// Rejects oversubscription: a circuit with more logical qubits than
    /// the device has physical qubits cannot be laid out, and silently
    /// dropping the excess would corrupt routing.
    pub fn trivial(logical_count: u32, physical_count: u32) -> RouteResult<Self> {
        if logical_count > physical_count {
            return Err(RouteError::MappingCapacityExceeded {
                logical: logical_count,
                physical: physical_count,
            });
        }
        let mut layout = Self::new();
        for i in 0..logical_count {
            layout.add(QubitId(i), i);
        }
        Ok(layout)
    }

    /// Add a mapping from logical to physical qubit.
    ///
    /// If either side is already mapped elsewhere, the conflicting entry
    /// is removed first to keep both maps consistent.
    pub fn add(&mut self, logical: QubitId, physical: u32) {
        if let Some(&old_logical) = self.physical_to_logical.get(&physical) {
            if old_logical != logical {
                self.logical_to_physical.remove(&old_logical);
            }
        }
        if let Some(&old_physical) = self.logical_to_physical.get(&logical) {
            if old_physical != physical {
                self.physical_to_logical.remove(&old_physical);
            }
        }
        self.logical_to_physical.insert(logical, physical);
        self.physical_to_logical.insert(physical, logical);
    }

    /// Get the physical qubit for a logical qubit.
    pub fn get_physical(&self, logical: QubitId) -> Option<u32> {
        self.logical_to_physical.get(&logical).copied()
    }

    /// Get the logical qubit at a physical qubit.
    pub fn get_logical(&self, physical: u32) -> Option<QubitId> {
        self.physical_to_logical.get(&physical).copied()
    }

    /// Swap the logical occupants of two physical qubits.
    ///
    /// Either slot may be unoccupied: the occupied entry moves across and
    /// the vacated slot empties. The set of assigned physical ids as a
    /// whole only changes when exactly one slot was occupied.
    pub fn swap(&mut self, p1: u32, p2: u32) {
        let l1 = self.physical_to_logical.get(&p1).copied();
        let l2 = self.physical_to_logical.get(&p2).copied();

        if let Some(l1) = l1 {
            self.logical_to_physical.insert(l1, p2);
            self.physical_to_logical.insert(p2, l1);
        } else {
            self.physical_to_logical.remove(&p2);
        }

        if let Some(l2) = l2 {
            self.logical_to_physical.insert(l2, p1);
            self.physical_to_logical.insert(p1, l2);
        } else {
            self.physical_to_logical.remove(&p1);
        }
    }

    /// Get the number of mapped qubits.
    pub fn len(&self) -> usize {
        self.logical_to_physical.len()
    }

    /// Check if the layout is empty.
    pub fn is_empty(&self) -> bool {
        self.logical_to_physical.is_empty()
    }

    /// Iterate over (logical, physical) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (QubitId, u32)> + '_ {
        self.logical_to_physical.iter().map(|(&l, &p)| (l, p))
    }
}
