//! Static descriptions of commercial quantum processors.
//!
//! Each [`DeviceProfile`] bundles the facts the rest of the stack needs to
//! target a device: register size, topology family, native gate names, and
//! aggregate characterization data. Numbers are device-wide medians from
//! public vendor datasheets, suitable for coarse estimation rather than
//! per-qubit noise modelling.

use serde::{Deserialize, Serialize};
use sleipnir_route::{CouplingMap, RouteResult, TopologyFamily};

/// Aggregate calibration data for a device.
///
/// All fidelity values are in `[0.0, 1.0]` where `1.0` means perfect.
/// Coherence times are in **microseconds**.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calibration {
    /// T1 relaxation time (device median, microseconds).
    pub t1_us: f64,
    /// T2 dephasing time (device median, microseconds).
    pub t2_us: f64,
    /// Median single-qubit gate fidelity.
    pub single_qubit_fidelity: f64,
    /// Median two-qubit gate fidelity.
    pub two_qubit_fidelity: f64,
    /// Median readout fidelity.
    pub readout_fidelity: f64,
}

/// Characteristic operation durations for a device, in **nanoseconds**.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateTimings {
    /// Single-qubit gate duration.
    pub single_qubit_ns: f64,
    /// Two-qubit gate duration.
    pub two_qubit_ns: f64,
    /// Readout duration.
    pub readout_ns: f64,
}

/// Gates that execute without decomposition on a device.
///
/// Names follow the OpenQASM 3 lowercase convention. Routing never
/// interprets gate names, so these are informational: catalog listings
/// and downstream basis-translation passes consume them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeGates {
    /// Native single-qubit gates.
    pub single_qubit: Vec<String>,
    /// Native two-qubit gates.
    pub two_qubit: Vec<String>,
}

/// Static description of one quantum processor.
///
/// Profiles are the bridge from a CLI device key to a routable
/// [`CouplingMap`] plus the calibration data the estimators consume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Short lookup key (`"ibm"`, `"rigetti"`, `"ionq"`).
    pub key: String,
    /// Processor name as the vendor publishes it.
    pub name: String,
    /// Vendor name.
    pub vendor: String,
    /// Number of qubits in the routing register.
    pub num_qubits: u32,
    /// Connectivity family of the device.
    pub family: TopologyFamily,
    /// Native gate set.
    pub native_gates: NativeGates,
    /// Aggregate calibration data.
    pub calibration: Calibration,
    /// Characteristic operation durations.
    pub timings: GateTimings,
    /// Quantum volume, where published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum_volume: Option<u32>,
    /// Circuit layer operations per second, where published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clops: Option<u32>,
    /// Error per layered gate, where published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eplg: Option<f64>,
}

impl DeviceProfile {
    /// Create the profile for IBM's Falcon r5.11L processor.
    ///
    /// 27 superconducting qubits on a heavy-hex lattice. Native gates per
    /// the Falcon generation: `id`/`rz`/`sx`/`x` plus `cx`/`ecr`.
    pub fn ibm_falcon_r5() -> Self {
        Self {
            key: "ibm".into(),
            name: "IBM Falcon r5.11L".into(),
            vendor: "IBM".into(),
            num_qubits: 27,
            family: TopologyFamily::HeavyHex,
            native_gates: NativeGates {
                single_qubit: vec!["id".into(), "rz".into(), "sx".into(), "x".into()],
                two_qubit: vec!["cx".into(), "ecr".into()],
            },
            calibration: Calibration {
                t1_us: 180.5,
                t2_us: 95.3,
                single_qubit_fidelity: 0.9996,
                two_qubit_fidelity: 0.994,
                readout_fidelity: 0.988,
            },
            timings: GateTimings {
                single_qubit_ns: 35.6,
                two_qubit_ns: 347.0,
                readout_ns: 1456.0,
            },
            quantum_volume: Some(128),
            clops: Some(7800),
            eplg: Some(0.0089),
        }
    }

    /// Create the profile for Rigetti's Aspen-M-3 processor.
    ///
    /// The routing register spans one 40-qubit die of the two-chip lattice.
    /// Superconducting, short coherence, fast gates.
    pub fn rigetti_aspen_m3() -> Self {
        Self {
            key: "rigetti".into(),
            name: "Rigetti Aspen-M-3".into(),
            vendor: "Rigetti".into(),
            num_qubits: 40,
            family: TopologyFamily::RingWithSkip,
            native_gates: NativeGates {
                single_qubit: vec!["rx".into(), "rz".into()],
                two_qubit: vec!["cz".into(), "xy".into()],
            },
            calibration: Calibration {
                t1_us: 24.8,
                t2_us: 18.6,
                single_qubit_fidelity: 0.9983,
                two_qubit_fidelity: 0.9645,
                readout_fidelity: 0.954,
            },
            timings: GateTimings {
                single_qubit_ns: 40.0,
                two_qubit_ns: 200.0,
                readout_ns: 2000.0,
            },
            quantum_volume: Some(32),
            clops: Some(4200),
            eplg: Some(0.0234),
        }
    }

    /// Create the profile for IonQ's Aria processor.
    ///
    /// 25 trapped-ion qubits with all-to-all connectivity. Coherence times
    /// are measured in seconds; gates are orders of magnitude slower than
    /// superconducting devices but substantially higher fidelity.
    pub fn ionq_aria() -> Self {
        Self {
            key: "ionq".into(),
            name: "IonQ Aria".into(),
            vendor: "IonQ".into(),
            num_qubits: 25,
            family: TopologyFamily::AllToAll,
            native_gates: NativeGates {
                single_qubit: vec!["gpi".into(), "gpi2".into(), "rz".into()],
                two_qubit: vec!["ms".into(), "zz".into()],
            },
            calibration: Calibration {
                t1_us: 1_000_000.0,
                t2_us: 100_000.0,
                single_qubit_fidelity: 0.9993,
                two_qubit_fidelity: 0.9965,
                readout_fidelity: 0.997,
            },
            timings: GateTimings {
                single_qubit_ns: 10_000.0,
                two_qubit_ns: 400_000.0,
                readout_ns: 200_000.0,
            },
            quantum_volume: Some(524_288),
            clops: Some(150),
            eplg: Some(0.0012),
        }
    }

    /// Build the coupling map this device exposes.
    pub fn coupling_map(&self) -> RouteResult<CouplingMap> {
        CouplingMap::from_family(self.family, self.num_qubits)
    }
}
