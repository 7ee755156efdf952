//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur when building operation streams.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Operand refers to a qubit outside the circuit register.
    #[error("Qubit {qubit:?} is out of range for a {num_qubits}-qubit circuit{}", format_op_context(.op_name))]
    QubitOutOfRange {
        /// The offending operand.
        qubit: QubitId,
        /// Size of the circuit register.
        num_qubits: u32,
        /// Optional operation name for context.
        op_name: Option<String>,
    },

    /// Same qubit appears twice among one operation's operands.
    #[error("Duplicate qubit {qubit:?} in operation{}", format_op_context(.op_name))]
    DuplicateQubit {
        /// The duplicated operand.
        qubit: QubitId,
        /// Optional operation name for context.
        op_name: Option<String>,
    },
}

/// Helper function to format optional operation context.
#[allow(clippy::ref_option)]
fn format_op_context(op_name: &Option<String>) -> String {
    match op_name {
        Some(name) => format!(" (op: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
