//! Sleipnir Hardware Profiles
//!
//! Static descriptions of the quantum processors Sleipnir can target, plus
//! coarse estimators for how a routed stream would fare on them.
//!
//! # Overview
//!
//! A [`DeviceProfile`] names a processor, its topology family, its native
//! gates, and device-median calibration numbers. The built-in catalog
//! carries one profile per supported CLI device key; profiles know how to
//! produce the coupling map the router needs. The estimators turn a routed
//! physical stream into a headline error rate and shot duration.
//!
//! # Core Components
//!
//! - **Profiles**: [`DeviceProfile`] with one factory per processor
//! - **Catalog**: [`catalog`] and [`lookup`], keyed by short device names
//! - **Estimators**: [`estimate_error_rate`] and [`estimate_duration_ns`]
//!
//! # Example
//!
//! ```rust
//! use sleipnir_hw::lookup;
//!
//! let profile = lookup("ibm").unwrap();
//! let map = profile.coupling_map().unwrap();
//! assert_eq!(map.num_qubits(), 27);
//! ```

pub mod catalog;
pub mod estimate;
pub mod profile;

pub use catalog::{catalog, lookup};
pub use estimate::{estimate_duration_ns, estimate_error_rate};
pub use profile::{Calibration, DeviceProfile, GateTimings, NativeGates};
