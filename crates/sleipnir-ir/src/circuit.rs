//! High-level operation-stream builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::op::Operation;
use crate::qubit::QubitId;

/// Whether a circuit's operands index the abstract register or device qubits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitLevel {
    /// Operands are abstract register indices, device-independent.
    Logical,
    /// Operands are device qubit ids under some layout.
    Physical,
}

/// An ordered stream of operations over a fixed-size qubit register.
///
/// Routing consumes circuits as a strict in-order fold, so a flat
/// `Vec<Operation>` is the entire structure; there is no graph form and no
/// reordering. Operand validity (in range, no duplicates) is enforced at
/// push time so downstream passes can rely on it. Deserialization bypasses
/// those checks; [`validate`](Self::validate) re-runs them over a whole
/// stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Size of the qubit register operands index into.
    num_qubits: u32,
    /// Logical or physical operand semantics.
    level: CircuitLevel,
    /// The operations, in program order.
    ops: Vec<Operation>,
}

impl Circuit {
    /// Create a new empty logical circuit over `num_qubits` qubits.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            level: CircuitLevel::Logical,
            ops: vec![],
        }
    }

    /// Create a new empty physical circuit over a device register.
    pub fn physical(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            level: CircuitLevel::Physical,
            ops: vec![],
        }
    }

    /// Name of the circuit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size of the qubit register.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Operand semantics of this stream.
    #[inline]
    pub fn level(&self) -> CircuitLevel {
        self.level
    }

    /// Append an operation, validating its operands.
    pub fn push(&mut self, op: Operation) -> IrResult<()> {
        self.check_operands(&op)?;
        self.ops.push(op);
        Ok(())
    }

    /// Re-check every operation's operands.
    ///
    /// `Deserialize` bypasses [`push`](Self::push), so a circuit read from
    /// external data may carry operands `push` would have rejected. Run
    /// this once on ingested circuits before handing them to a pass.
    pub fn validate(&self) -> IrResult<()> {
        self.ops.iter().try_for_each(|op| self.check_operands(op))
    }

    fn check_operands(&self, op: &Operation) -> IrResult<()> {
        for (i, &qubit) in op.qubits.iter().enumerate() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                    op_name: Some(op.name().to_string()),
                });
            }
            if op.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    op_name: Some(op.name().to_string()),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::gate("h", [qubit]))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::gate("x", [qubit]))?;
        Ok(self)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::gate("y", [qubit]))?;
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::gate("z", [qubit]))?;
        Ok(self)
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::gate("rz", [qubit]).with_param("theta", theta))?;
        Ok(self)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::gate("cx", [control, target]))?;
        Ok(self)
    }

    /// Apply controlled-Z gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::gate("cz", [control, target]))?;
        Ok(self)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, a: QubitId, b: QubitId) -> IrResult<&mut Self> {
        self.push(Operation::swap(a, b))?;
        Ok(self)
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Measure the given qubits as one operation.
    pub fn measure(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.push(Operation::measure(qubits))?;
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The operations, in program order.
    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    /// Iterate over the operations in program order.
    pub fn iter(&self) -> impl Iterator<Item = &Operation> {
        self.ops.iter()
    }

    /// Number of operations in the stream.
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the stream contains no operations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Count single-operand gate operations (measurements excluded).
    pub fn count_single_qubit(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| !op.is_measure() && op.arity() == 1)
            .count()
    }

    /// Count two-operand gate operations, swaps included (measurements excluded).
    pub fn count_two_qubit(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| !op.is_measure() && op.arity() == 2)
            .count()
    }

    /// Count measurement operations.
    pub fn count_measurements(&self) -> usize {
        self.ops.iter().filter(|op| op.is_measure()).count()
    }

    // =========================================================================
    // Factories
    // =========================================================================

    /// Create a Bell state preparation circuit with measurement.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::new("bell", 2);
        circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
        circuit.measure([QubitId(0), QubitId(1)])?;
        Ok(circuit)
    }
}
