//! Sleipnir Operation-Stream Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! operation streams in Sleipnir. It is the foundation the routing stack
//! builds on.
//!
//! # Overview
//!
//! Circuits here are flat, ordered operation streams, not DAGs: the routing
//! pass is a strict in-order fold over the program, so program order is the
//! only structure it needs. A [`Circuit`] is tagged with a [`CircuitLevel`]
//! recording whether its operands index the abstract logical register or a
//! device's physical register.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for circuit operands (routing-side tables
//!   address physical qubits as plain `u32` device indices)
//! - **Operations**: [`Operation`] combining an [`OpKind`] (named gate,
//!   measurement, or swap) with its operands and numeric parameters
//! - **Circuit**: [`Circuit`] high-level builder API over the stream
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use sleipnir_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("bell_state", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure([QubitId(0), QubitId(1)]).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.len(), 3);
//! ```

pub mod circuit;
pub mod error;
pub mod op;
pub mod qubit;

pub use circuit::{Circuit, CircuitLevel};
pub use error::{IrError, IrResult};
pub use op::{OpKind, Operation};
pub use qubit::QubitId;
