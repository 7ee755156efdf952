//! Property-based tests for swap-insertion routing.
//!
//! Tests that routing arbitrary logical streams onto each topology family
//! preserves program content and produces hardware-executable output.

use proptest::prelude::*;
use sleipnir_ir::{Circuit, QubitId};
use sleipnir_route::{CouplingMap, Router, TopologyFamily};

/// Generate a random logical circuit for property testing.
///
/// Generates circuits with:
/// - 1-8 qubits
/// - 1-12 operations from a basic set (H, X, Z, RZ, CX, CZ)
fn arb_logical_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=8).prop_flat_map(|num_qubits| {
        (
            Just(num_qubits),
            prop::collection::vec(arb_stream_op(num_qubits), 1..=12),
        )
            .prop_map(move |(nq, ops)| {
                let mut circuit = Circuit::new("prop", nq);
                for op in ops {
                    op.apply(&mut circuit);
                }
                circuit
            })
    })
}

/// Operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum StreamOp {
    H(u32),
    X(u32),
    Z(u32),
    Rz(u32, f64),
    Cx(u32, u32),
    Cz(u32, u32),
}

impl StreamOp {
    fn apply(self, circuit: &mut Circuit) {
        match self {
            StreamOp::H(q) => {
                let _ = circuit.h(QubitId(q));
            }
            StreamOp::X(q) => {
                let _ = circuit.x(QubitId(q));
            }
            StreamOp::Z(q) => {
                let _ = circuit.z(QubitId(q));
            }
            StreamOp::Rz(q, theta) => {
                let _ = circuit.rz(theta, QubitId(q));
            }
            StreamOp::Cx(q1, q2) => {
                let _ = circuit.cx(QubitId(q1), QubitId(q2));
            }
            StreamOp::Cz(q1, q2) => {
                let _ = circuit.cz(QubitId(q1), QubitId(q2));
            }
        }
    }
}

/// Generate a random operation for a circuit with given number of qubits.
fn arb_stream_op(num_qubits: u32) -> impl Strategy<Value = StreamOp> {
    // For single-qubit circuits, only generate single-qubit operations
    if num_qubits < 2 {
        prop_oneof![
            (0..num_qubits).prop_map(StreamOp::H),
            (0..num_qubits).prop_map(StreamOp::X),
            (0..num_qubits).prop_map(StreamOp::Z),
            (0..num_qubits, -3.2_f64..3.2).prop_map(|(q, theta)| StreamOp::Rz(q, theta)),
        ]
        .boxed()
    } else {
        prop_oneof![
            (0..num_qubits).prop_map(StreamOp::H),
            (0..num_qubits).prop_map(StreamOp::X),
            (0..num_qubits).prop_map(StreamOp::Z),
            (0..num_qubits, -3.2_f64..3.2).prop_map(|(q, theta)| StreamOp::Rz(q, theta)),
            (0..num_qubits, 0..num_qubits)
                .prop_filter("Control and target must differ", |(c, t)| c != t)
                .prop_map(|(c, t)| StreamOp::Cx(c, t)),
            (0..num_qubits, 0..num_qubits)
                .prop_filter("Control and target must differ", |(c, t)| c != t)
                .prop_map(|(c, t)| StreamOp::Cz(c, t)),
        ]
        .boxed()
    }
}

/// The three families at a size that fits every generated circuit.
fn all_device_maps() -> Vec<CouplingMap> {
    TopologyFamily::ALL
        .iter()
        .map(|&family| {
            CouplingMap::from_family(family, 16).expect("16-qubit families are connected")
        })
        .collect()
}

proptest! {
    /// Test that every two-operand operation in routed output sits on an edge.
    ///
    /// Properties verified:
    /// - Output is physical-level with the device register size
    /// - All emitted two-operand operations are adjacent on the coupling map
    /// - Emitted length equals input length plus inserted swaps
    #[test]
    fn test_routed_stream_respects_coupling(circuit in arb_logical_circuit()) {
        for map in all_device_maps() {
            let routed = Router::new(&map).route(&circuit).expect("routing failed");

            prop_assert_eq!(routed.circuit.num_qubits(), map.num_qubits(),
                "Routed register must match the device");
            for op in routed.circuit.iter() {
                if op.arity() == 2 {
                    prop_assert!(map.are_adjacent(op.qubits[0].0, op.qubits[1].0),
                        "Non-adjacent pair ({}, {}) in routed output",
                        op.qubits[0].0, op.qubits[1].0);
                }
            }
            prop_assert_eq!(routed.circuit.len(), circuit.len() + routed.swap_count as usize,
                "Emitted length must be input plus swaps");
        }
    }

    /// Test that routing preserves the non-swap operation sequence.
    ///
    /// Dropping inserted swaps from the output must leave the input's
    /// operation kinds and parameters, in order; only operands are remapped.
    #[test]
    fn test_non_swap_sequence_is_preserved(circuit in arb_logical_circuit()) {
        for map in all_device_maps() {
            let routed = Router::new(&map).route(&circuit).expect("routing failed");

            let input: Vec<_> = circuit
                .iter()
                .map(|op| (op.kind.clone(), op.params.clone()))
                .collect();
            let emitted: Vec<_> = routed
                .circuit
                .iter()
                .filter(|op| !op.is_swap())
                .map(|op| (op.kind.clone(), op.params.clone()))
                .collect();
            prop_assert_eq!(emitted, input, "Routing must not reorder or rewrite operations");
        }
    }

    /// Test that the final layout is still a bijection after routing.
    #[test]
    fn test_final_layout_remains_bijective(circuit in arb_logical_circuit()) {
        for map in all_device_maps() {
            let routed = Router::new(&map).route(&circuit).expect("routing failed");

            let mut physicals: Vec<u32> = routed.final_layout.iter().map(|(_, p)| p).collect();
            physicals.sort_unstable();
            physicals.dedup();
            prop_assert_eq!(physicals.len() as u32, circuit.num_qubits(),
                "Each logical qubit must keep a distinct physical slot");
        }
    }

    /// Test that full connectivity never needs swaps.
    #[test]
    fn test_all_to_all_never_inserts_swaps(circuit in arb_logical_circuit()) {
        let map = CouplingMap::from_family(TopologyFamily::AllToAll, 16)
            .expect("complete graph is connected");
        let routed = Router::new(&map).route(&circuit).expect("routing failed");

        prop_assert_eq!(routed.swap_count, 0, "All-to-all coupling admits every pair");
        prop_assert_eq!(routed.circuit.len(), circuit.len());
    }

    /// Test that routing is deterministic.
    ///
    /// Routing the same circuit twice must produce identical output streams.
    #[test]
    fn test_routing_is_deterministic(circuit in arb_logical_circuit()) {
        for map in all_device_maps() {
            let router = Router::new(&map);
            let first = router.route(&circuit).expect("first run failed");
            let second = router.route(&circuit).expect("second run failed");

            prop_assert_eq!(first.circuit, second.circuit,
                "Routing is not deterministic");
            prop_assert_eq!(first.swap_count, second.swap_count);
        }
    }
}
