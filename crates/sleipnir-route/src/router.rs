//! The routing pass: swap insertion over an operation stream.

use sleipnir_ir::{Circuit, CircuitLevel, IrError, Operation, QubitId};
use tracing::{debug, info, trace};

use crate::error::{RouteError, RouteResult};
use crate::graph::CouplingMap;
use crate::layout::Layout;
use crate::path::shortest_path;

/// Output of one routing run.
#[derive(Debug, Clone)]
pub struct RoutedCircuit {
    /// The physical-level operation stream, inserted swaps included.
    pub circuit: Circuit,
    /// Number of swap operations the router inserted.
    pub swap_count: u32,
    /// The layout after the final operation.
    pub final_layout: Layout,
}

impl RoutedCircuit {
    /// Total emitted operation count.
    ///
    /// This is the stream length, not a layered schedule depth; reports
    /// use it as a coarse size proxy.
    pub fn emitted_ops(&self) -> usize {
        self.circuit.len()
    }

    /// Ratio of inserted swaps to input operations (0.0 for empty input).
    pub fn swap_overhead(&self, input_ops: usize) -> f64 {
        if input_ops == 0 {
            0.0
        } else {
            f64::from(self.swap_count) / input_ops as f64
        }
    }
}

/// Greedy shortest-path router.
///
/// Walks the logical stream in order, translating operands through a live
/// [`Layout`] and inserting swaps along a BFS shortest path whenever a
/// two-operand operation lands on non-adjacent physical qubits. Simple,
/// deterministic, and correct; not swap-minimal.
///
/// The router only borrows the coupling map, so independent runs over the
/// same device can proceed in parallel, each with its own layout.
pub struct Router<'a> {
    coupling: &'a CouplingMap,
}

impl<'a> Router<'a> {
    /// Create a router over a device coupling map.
    pub fn new(coupling: &'a CouplingMap) -> Self {
        Self { coupling }
    }

    /// Route a logical circuit into a physical one.
    ///
    /// A fresh trivial layout (logical i → physical i) is created per
    /// call and returned in the result. Any failure aborts the whole run
    /// with the originating error; no partial stream is ever produced.
    /// Physical-level input is refused rather than routed twice.
    pub fn route(&self, circuit: &Circuit) -> RouteResult<RoutedCircuit> {
        if circuit.level() == CircuitLevel::Physical {
            return Err(RouteError::AlreadyPhysical(circuit.name().to_string()));
        }

        let mut layout = Layout::trivial(circuit.num_qubits(), self.coupling.num_qubits())?;
        let mut routed = Circuit::physical(circuit.name(), self.coupling.num_qubits());
        let mut swap_count = 0u32;

        for op in circuit.iter() {
            trace!(op = op.name(), "translating");
            match *op.qubits.as_slice() {
                [q] => {
                    let p = physical_of(&layout, q)?;
                    routed.push(translated(op, vec![QubitId(p)]))?;
                }
                [q1, q2] => {
                    let p1 = physical_of(&layout, q1)?;
                    let p2 = physical_of(&layout, q2)?;

                    // A bijective layout only collides when the operands do.
                    if p1 == p2 {
                        return Err(IrError::DuplicateQubit {
                            qubit: q1,
                            op_name: Some(op.name().to_string()),
                        }
                        .into());
                    }

                    if !self.coupling.are_adjacent(p1, p2) {
                        let path = shortest_path(self.coupling, p1, p2)?;
                        // Swap along the path, stopping one hop short: the
                        // final edge is where the operation itself runs.
                        for i in 0..path.len() - 2 {
                            let (a, b) = (path[i], path[i + 1]);
                            debug!(gate = op.name(), a, b, "inserting swap");
                            routed.push(Operation::swap(QubitId(a), QubitId(b)))?;
                            layout.swap(a, b);
                            swap_count += 1;
                        }
                    }

                    let p1 = physical_of(&layout, q1)?;
                    let p2 = physical_of(&layout, q2)?;
                    routed.push(translated(op, vec![QubitId(p1), QubitId(p2)]))?;
                }
                _ => {
                    return Err(RouteError::InvalidOperationArity {
                        name: op.name().to_string(),
                        arity: op.arity(),
                    });
                }
            }
        }

        info!(
            input_ops = circuit.len(),
            emitted_ops = routed.len(),
            swap_count,
            "routing complete"
        );

        Ok(RoutedCircuit {
            circuit: routed,
            swap_count,
            final_layout: layout,
        })
    }
}

fn physical_of(layout: &Layout, q: QubitId) -> RouteResult<u32> {
    layout
        .get_physical(q)
        .ok_or(RouteError::UnmappedLogicalQubit(q))
}

/// Same operation with operands substituted by physical ids.
fn translated(op: &Operation, qubits: Vec<QubitId>) -> Operation {
    Operation {
        kind: op.kind.clone(),
        qubits,
        params: op.params.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::TopologyFamily;

    fn linear(n: u32) -> CouplingMap {
        CouplingMap::from_edges(n, (0..n - 1).map(|i| (i, i + 1))).unwrap()
    }

    #[test]
    fn test_route_adjacent_unchanged() {
        let map = linear(5);
        let mut circuit = Circuit::new("test", 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap();

        let routed = Router::new(&map).route(&circuit).unwrap();
        assert_eq!(routed.swap_count, 0);
        assert_eq!(routed.circuit.len(), 2);
        assert_eq!(
            routed.circuit.ops()[1].qubits,
            vec![QubitId(0), QubitId(1)]
        );
    }

    #[test]
    fn test_route_inserts_swaps() {
        let map = linear(5);
        let mut circuit = Circuit::new("test", 4);
        circuit.cx(QubitId(0), QubitId(3)).unwrap();

        let routed = Router::new(&map).route(&circuit).unwrap();
        // Path 0-1-2-3 has two intermediate hops.
        assert_eq!(routed.swap_count, 2);
        assert_eq!(routed.circuit.len(), 3);
        assert!(routed.circuit.ops()[0].is_swap());
        assert!(routed.circuit.ops()[1].is_swap());
        // After swapping 0↔1 then 1↔2, logical 0 sits at physical 2.
        assert_eq!(
            routed.circuit.ops()[2].qubits,
            vec![QubitId(2), QubitId(3)]
        );
        assert_eq!(routed.final_layout.get_physical(QubitId(0)), Some(2));
    }

    #[test]
    fn test_route_preserves_params() {
        let map = linear(3);
        let mut circuit = Circuit::new("test", 2);
        circuit.rz(0.75, QubitId(1)).unwrap();

        let routed = Router::new(&map).route(&circuit).unwrap();
        assert_eq!(routed.circuit.ops()[0].params.get("theta"), Some(&0.75));
    }

    #[test]
    fn test_route_rejects_bad_arity() {
        let map = linear(4);
        let mut circuit = Circuit::new("test", 3);
        circuit
            .push(Operation::gate(
                "ccx",
                [QubitId(0), QubitId(1), QubitId(2)],
            ))
            .unwrap();

        let err = Router::new(&map).route(&circuit).unwrap_err();
        assert!(matches!(
            err,
            RouteError::InvalidOperationArity { arity: 3, .. }
        ));
    }

    #[test]
    fn test_route_oversubscribed() {
        let map = linear(3);
        let circuit = Circuit::new("test", 5);
        let err = Router::new(&map).route(&circuit).unwrap_err();
        assert!(matches!(
            err,
            RouteError::MappingCapacityExceeded {
                logical: 5,
                physical: 3,
            }
        ));
    }

    #[test]
    fn test_route_rejects_physical_input() {
        let map = linear(4);
        let mut circuit = Circuit::new("once", 2);
        circuit.cx(QubitId(0), QubitId(1)).unwrap();

        let first = Router::new(&map).route(&circuit).unwrap();
        let err = Router::new(&map).route(&first.circuit).unwrap_err();
        assert!(matches!(err, RouteError::AlreadyPhysical(name) if name == "once"));
    }

    #[test]
    fn test_all_to_all_never_swaps() {
        let map = CouplingMap::from_family(TopologyFamily::AllToAll, 6).unwrap();
        let mut circuit = Circuit::new("test", 6);
        circuit
            .cx(QubitId(0), QubitId(5))
            .unwrap()
            .cx(QubitId(2), QubitId(4))
            .unwrap()
            .cz(QubitId(1), QubitId(3))
            .unwrap();

        let routed = Router::new(&map).route(&circuit).unwrap();
        assert_eq!(routed.swap_count, 0);
        assert_eq!(routed.circuit.len(), circuit.len());
    }

    #[test]
    fn test_swap_overhead_ratio() {
        let map = linear(4);
        let mut circuit = Circuit::new("test", 4);
        circuit.cx(QubitId(0), QubitId(2)).unwrap();

        let routed = Router::new(&map).route(&circuit).unwrap();
        assert_eq!(routed.swap_count, 1);
        assert!((routed.swap_overhead(circuit.len()) - 1.0).abs() < f64::EPSILON);
        assert!((routed.swap_overhead(0) - 0.0).abs() < f64::EPSILON);
    }
}
