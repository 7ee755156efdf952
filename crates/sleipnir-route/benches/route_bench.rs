//! Benchmarks for Sleipnir routing.
//!
//! Run with: cargo bench -p sleipnir-route

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sleipnir_ir::{Circuit, QubitId};
use sleipnir_route::{CouplingMap, Router, TopologyFamily, shortest_path};

/// A fan-out circuit whose two-qubit gates span the whole register.
fn fan_out_circuit(num_qubits: u32) -> Circuit {
    let mut circuit = Circuit::new("fan_out", num_qubits);
    circuit.h(QubitId(0)).unwrap();
    for i in 1..num_qubits {
        circuit.cx(QubitId(0), QubitId(i)).unwrap();
    }
    circuit
}

/// Benchmark coupling-map construction for each family
fn bench_map_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_construction");

    for family in TopologyFamily::ALL {
        for num_qubits in &[16_u32, 27, 40] {
            group.bench_with_input(
                BenchmarkId::new(family.key(), num_qubits),
                num_qubits,
                |b, &n| {
                    b.iter(|| CouplingMap::from_family(black_box(family), black_box(n)).unwrap());
                },
            );
        }
    }

    group.finish();
}

/// Benchmark breadth-first path search across a device
fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    let heavy_hex = CouplingMap::from_family(TopologyFamily::HeavyHex, 27).unwrap();
    group.bench_function("heavy_hex_27_span", |b| {
        b.iter(|| shortest_path(&heavy_hex, black_box(0), black_box(26)).unwrap());
    });

    let ring = CouplingMap::from_family(TopologyFamily::RingWithSkip, 40).unwrap();
    group.bench_function("ring_with_skip_40_span", |b| {
        b.iter(|| shortest_path(&ring, black_box(0), black_box(20)).unwrap());
    });

    group.finish();
}

/// Benchmark full routing runs on the contract device sizes
fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");

    let circuit = fan_out_circuit(12);
    for (family, num_qubits) in [
        (TopologyFamily::HeavyHex, 27_u32),
        (TopologyFamily::RingWithSkip, 40),
        (TopologyFamily::AllToAll, 25),
    ] {
        let map = CouplingMap::from_family(family, num_qubits).unwrap();
        group.bench_with_input(
            BenchmarkId::new("fan_out_12", family.key()),
            &map,
            |b, map| {
                b.iter(|| Router::new(map).route(black_box(&circuit)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_map_construction,
    bench_shortest_path,
    bench_routing,
);

criterion_main!(benches);
