//! Coarse execution estimators.
//!
//! Aggregate models over device-median calibration data: good enough to
//! compare devices and routing outcomes against each other, not a noise
//! simulation. Both estimators consume the physical stream a router
//! produced, so inserted swaps are priced like any other two-qubit gate.

use sleipnir_ir::Circuit;

use crate::profile::DeviceProfile;

/// Estimate the probability that at least one gate in the stream errs.
///
/// Per-gate success probabilities multiply: `1 - F1^n1 * F2^n2`, with
/// `n1`/`n2` the single- and two-qubit gate counts. Measurements are
/// covered by readout fidelity and excluded here.
pub fn estimate_error_rate(circuit: &Circuit, profile: &DeviceProfile) -> f64 {
    let n1 = circuit.count_single_qubit() as f64;
    let n2 = circuit.count_two_qubit() as f64;
    let f1 = profile.calibration.single_qubit_fidelity;
    let f2 = profile.calibration.two_qubit_fidelity;
    1.0 - f1.powf(n1) * f2.powf(n2)
}

/// Estimate wall-clock execution time of one shot, in nanoseconds.
///
/// Critical-path model: stream length times the gate-count-weighted mean
/// gate duration, plus one readout when the stream measures.
pub fn estimate_duration_ns(circuit: &Circuit, profile: &DeviceProfile) -> f64 {
    let n1 = circuit.count_single_qubit() as f64;
    let n2 = circuit.count_two_qubit() as f64;
    let gates = n1 + n2;
    let mean_gate_ns = if gates > 0.0 {
        (profile.timings.single_qubit_ns * n1 + profile.timings.two_qubit_ns * n2) / gates
    } else {
        0.0
    };
    let readout_ns = if circuit.count_measurements() > 0 {
        profile.timings.readout_ns
    } else {
        0.0
    };
    circuit.len() as f64 * mean_gate_ns + readout_ns
}
