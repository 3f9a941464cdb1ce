//! Shared helpers for CLI commands.

use anyhow::Result;
use console::style;

use qturb_compile::BasisGates;
use qturb_hal::Counts;
use qturb_viz::{DEFAULT_MAX_ROWS, render_histogram};

/// Basis gates for a named target.
pub fn get_basis_gates(name: &str) -> Result<BasisGates> {
    match name.to_lowercase().replace('_', "-").as_str() {
        "universal" | "simulator" | "sim" => Ok(BasisGates::universal()),
        "rz-sx-cx" | "ibm" => Ok(BasisGates::rz_sx_cx()),
        "rz-sx-cz" | "iqm" => Ok(BasisGates::rz_sx_cz()),
        other => {
            anyhow::bail!("Unknown basis: '{other}'. Available: universal, rz-sx-cx, rz-sx-cz")
        }
    }
}

/// Print measurement counts as a histogram.
pub fn print_counts(counts: &Counts) {
    println!(
        "{} Results ({} shots):",
        style("✓").green().bold(),
        counts.total_shots()
    );
    println!("{}", render_histogram(counts, DEFAULT_MAX_ROWS));
}

/// Print gate counts on one line, alphabetically.
pub fn print_gate_counts(label: &str, circuit: &qturb_ir::Circuit) {
    let ops: Vec<String> = circuit
        .count_ops()
        .into_iter()
        .map(|(name, n)| format!("{name}: {n}"))
        .collect();
    println!(
        "  {}: depth {}, {} ops ({})",
        label,
        circuit.depth(),
        circuit.num_ops(),
        ops.join(", ")
    );
}
