//! Error types for the routing crate.

use sleipnir_ir::{IrError, QubitId};
use thiserror::Error;

/// Errors that can occur during topology construction and routing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RouteError {
    /// Topology family name not recognized.
    #[error("Unknown topology family '{0}' (expected heavy_hex, ring_with_skip, or all_to_all)")]
    UnknownTopologyFamily(String),

    /// The topology contains a qubit unreachable from the rest.
    #[error("Disconnected topology: qubit {qubit} is unreachable")]
    DisconnectedTopology {
        /// A representative unreachable qubit.
        qubit: u32,
    },

    /// Edge endpoint outside the device register.
    #[error("Edge ({q1}, {q2}) is out of range for a {num_qubits}-qubit device")]
    EdgeOutOfRange {
        /// First endpoint of the edge.
        q1: u32,
        /// Second endpoint of the edge.
        q2: u32,
        /// Size of the device register.
        num_qubits: u32,
    },

    /// More logical qubits than the device can hold.
    #[error("Circuit requires {logical} qubits but the device has only {physical}")]
    MappingCapacityExceeded {
        /// Logical qubits requested.
        logical: u32,
        /// Physical qubits available.
        physical: u32,
    },

    /// Logical qubit with no physical assignment.
    #[error("Logical qubit {0} has no physical assignment")]
    UnmappedLogicalQubit(QubitId),

    /// Operation with an operand count routing cannot handle.
    #[error("Operation '{name}' has {arity} operands; routing handles 1 or 2")]
    InvalidOperationArity {
        /// Name of the offending operation.
        name: String,
        /// Its operand count.
        arity: usize,
    },

    /// Routing input was already a physical stream.
    #[error("Circuit '{0}' is already physical; routing consumes logical streams")]
    AlreadyPhysical(String),

    /// No route exists between two physical qubits.
    #[error("No path between physical qubits {from} and {to}")]
    NoPath {
        /// Search origin.
        from: u32,
        /// Search target.
        to: u32,
    },

    /// Underlying IR error.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
