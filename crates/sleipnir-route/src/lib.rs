//! Sleipnir Qubit Mapping and Routing Engine
//!
//! This crate rewrites logical operation streams into physical ones that
//! respect a device's connectivity: every two-operand operation in the
//! output acts on physically adjacent qubits, with swap operations
//! inserted wherever state had to move into coupling range.
//!
//! # Overview
//!
//! Routing is a strict in-order fold over the input stream. The one piece
//! of mutable state is a [`Layout`] (the logical→physical bijection); the
//! [`CouplingMap`] and the path search are pure and shared. Neighbor lists
//! are kept sorted and path ties break toward lower qubit ids, so the same
//! input always yields the same output stream.
//!
//! # Core Components
//!
//! - **Topology**: [`TopologyFamily`] names the closed set of device
//!   connectivity shapes and generates their coupling edges
//! - **Coupling map**: [`CouplingMap`] holds the physical adjacency
//!   relation, validated connected at construction
//! - **Path search**: [`shortest_path`] runs a deterministic unweighted BFS
//! - **Layout**: [`Layout`] tracks the live logical→physical bijection
//! - **Router**: [`Router`] orchestrates the pass and emits a
//!   [`RoutedCircuit`] with the physical stream and swap statistics
//!
//! # Example
//!
//! ```rust
//! use sleipnir_ir::{Circuit, QubitId};
//! use sleipnir_route::{CouplingMap, Router, TopologyFamily};
//!
//! let map = CouplingMap::from_family(TopologyFamily::HeavyHex, 27).unwrap();
//!
//! let mut circuit = Circuit::new("demo", 4);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(3)).unwrap();
//!
//! let routed = Router::new(&map).route(&circuit).unwrap();
//! assert_eq!(routed.circuit.num_qubits(), 27);
//! assert!(routed.emitted_ops() >= circuit.len());
//! ```

pub mod error;
pub mod graph;
pub mod layout;
pub mod path;
pub mod router;
pub mod topology;

pub use error::{RouteError, RouteResult};
pub use graph::CouplingMap;
pub use layout::Layout;
pub use path::shortest_path;
pub use router::{RoutedCircuit, Router};
pub use topology::TopologyFamily;
