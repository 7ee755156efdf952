//! Stream operations combining a kind with its operands.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::qubit::QubitId;

/// The kind of operation in a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    /// A named unitary gate (`h`, `x`, `cx`, `rz`, ...).
    ///
    /// Gate names are opaque at this layer; routing only ever dispatches on
    /// operand count, so nothing here interprets them.
    Gate(String),
    /// Measurement of the operand qubits.
    Measure,
    /// Exchange of the states held by two qubits.
    ///
    /// Routing inserts these between adjacent physical qubits to move state
    /// into coupling range; input streams may also contain them as ordinary
    /// two-qubit gates.
    Swap,
}

/// A single operation over qubit operands.
///
/// The same shape serves both stream levels: in a logical stream the
/// operands index the abstract register, in a physical stream they are
/// device qubit ids. Which applies is a property of the surrounding
/// [`Circuit`](crate::circuit::Circuit), not of the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// What the operation does.
    pub kind: OpKind,
    /// Qubits this operation acts on, in operand order.
    pub qubits: Vec<QubitId>,
    /// Named numeric parameters (rotation angles etc.).
    ///
    /// `BTreeMap` so serialized parameter order is deterministic.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, f64>,
}

impl Operation {
    /// Create a gate operation.
    pub fn gate(name: impl Into<String>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: OpKind::Gate(name.into()),
            qubits: qubits.into_iter().collect(),
            params: BTreeMap::new(),
        }
    }

    /// Create a measurement operation over the given qubits.
    pub fn measure(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: OpKind::Measure,
            qubits: qubits.into_iter().collect(),
            params: BTreeMap::new(),
        }
    }

    /// Create a swap operation between two qubits.
    pub fn swap(a: QubitId, b: QubitId) -> Self {
        Self {
            kind: OpKind::Swap,
            qubits: vec![a, b],
            params: BTreeMap::new(),
        }
    }

    /// Attach a named numeric parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Check if this is a gate operation.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, OpKind::Gate(_))
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, OpKind::Measure)
    }

    /// Check if this is a swap.
    pub fn is_swap(&self) -> bool {
        matches!(self.kind, OpKind::Swap)
    }

    /// Number of operands.
    #[inline]
    pub fn arity(&self) -> usize {
        self.qubits.len()
    }

    /// Get the name of the operation.
    pub fn name(&self) -> &str {
        match &self.kind {
            OpKind::Gate(name) => name.as_str(),
            OpKind::Measure => "measure",
            OpKind::Swap => "swap",
        }
    }
}
