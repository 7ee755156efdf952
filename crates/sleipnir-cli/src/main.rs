//! Sleipnir Command-Line Interface
//!
//! Routes a logical operation stream onto a named device's connectivity
//! and prints the routing report as JSON.
//!
//! ```text
//!              S L E I P N I R
//!       Qubit Mapping and Routing Engine
//!
//!        "Eight legs reach every qubit"
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sleipnir_hw::{DeviceProfile, catalog, estimate_duration_ns, estimate_error_rate, lookup};
use sleipnir_ir::{Circuit, QubitId};
use sleipnir_route::Router;

/// Sleipnir - route logical circuits onto physical qubit topologies
#[derive(Parser)]
#[command(name = "sleipnir")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Device to route for (ibm, rigetti, ionq)
    #[arg(required_unless_present = "list")]
    device: Option<String>,

    /// Input circuit file (JSON); the built-in demo stream if omitted
    #[arg(short, long)]
    input: Option<String>,

    /// Write the routed physical circuit to this file as JSON
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// List known devices and exit
    #[arg(long)]
    list: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// The routing report printed on standard output.
#[derive(Debug, Serialize)]
struct TranspileReport {
    /// Topology family key of the routed device.
    topology: String,
    /// Number of physical qubits on the device.
    physical_qubits: u32,
    /// Inserted swaps per input operation.
    swap_overhead: f64,
    /// Number of swap operations the router inserted.
    swap_gates_inserted: u32,
    /// Length of the emitted physical stream, not a layered schedule depth.
    transpiled_depth: usize,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and exit cleanly; argument
            // errors get the usage text and a failure code.
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    // Setup logging; stdout stays reserved for the report
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        print_catalog();
        return Ok(());
    }

    let device = cli
        .device
        .as_deref()
        .context("a device argument is required")?;
    let profile = resolve_device(device)?;

    let circuit = match cli.input.as_deref() {
        Some(path) => load_circuit(path)?,
        None => demo_circuit()?,
    };
    info!(
        "routing '{}' ({} qubits, {} ops) onto {}",
        circuit.name(),
        circuit.num_qubits(),
        circuit.len(),
        profile.name
    );

    let map = profile.coupling_map()?;
    let routed = Router::new(&map).route(&circuit)?;

    info!(
        "estimated error rate {:.4}, shot duration {:.1} µs",
        estimate_error_rate(&routed.circuit, &profile),
        estimate_duration_ns(&routed.circuit, &profile) / 1_000.0
    );

    if let Some(path) = cli.output.as_deref() {
        save_circuit(&routed.circuit, path, cli.pretty)?;
        info!("wrote routed circuit to {path}");
    }

    let report = TranspileReport {
        topology: profile.family.key().to_string(),
        physical_qubits: map.num_qubits(),
        swap_overhead: routed.swap_overhead(circuit.len()),
        swap_gates_inserted: routed.swap_count,
        transpiled_depth: routed.emitted_ops(),
    };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}

/// Resolve a device key against the built-in catalog.
fn resolve_device(key: &str) -> Result<DeviceProfile> {
    match lookup(key) {
        Some(profile) => Ok(profile),
        None => {
            let known: Vec<String> = catalog().into_iter().map(|p| p.key).collect();
            anyhow::bail!(
                "Unknown device: '{}'. Usage: sleipnir <DEVICE>. Known devices: {}",
                key,
                known.join(", ")
            )
        }
    }
}

/// Load a logical circuit from a JSON file and re-check its operands.
fn load_circuit(path: &str) -> Result<Circuit> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {}", path);
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    let circuit: Circuit = serde_json::from_str(&source)
        .with_context(|| format!("Invalid circuit JSON in {}", path))?;
    circuit
        .validate()
        .with_context(|| format!("Invalid circuit in {}", path))?;
    Ok(circuit)
}

/// Save a circuit to a file as JSON.
fn save_circuit(circuit: &Circuit, path: &str, pretty: bool) -> Result<()> {
    let content = if pretty {
        serde_json::to_string_pretty(circuit)?
    } else {
        serde_json::to_string(circuit)?
    };
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path))
}

/// The built-in demonstration stream: entangle a pair, then read it out.
fn demo_circuit() -> Result<Circuit> {
    let mut circuit = Circuit::new("demo", 4);
    circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
    circuit.measure([QubitId(0), QubitId(1)])?;
    Ok(circuit)
}

/// Print the device catalog, one line per profile.
fn print_catalog() {
    println!("{} Known devices:\n", style("Sleipnir").cyan().bold());

    // Rows stay unstyled: escape codes would break the column widths.
    for profile in catalog() {
        println!(
            "  {:<8} {:<20} {:>3} qubits  {:<14} 2q fidelity {:.2}%",
            profile.key,
            profile.name,
            profile.num_qubits,
            profile.family.key(),
            profile.calibration.two_qubit_fidelity * 100.0
        );
    }
}
