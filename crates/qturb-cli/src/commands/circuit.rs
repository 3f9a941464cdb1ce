//! Circuit command implementation.

use std::f64::consts::FRAC_PI_4;

use anyhow::Result;
use console::style;

use qturb_compile::PassManagerBuilder;
use qturb_pipeline::turbulence_circuit;
use qturb_viz::draw_circuit;

use super::common::{get_basis_gates, print_gate_counts};

/// Execute the circuit command.
pub fn execute(qubits: u32, time_step: f64, theta: Option<f64>, basis: Option<&str>) -> Result<()> {
    let theta = theta.unwrap_or(FRAC_PI_4);
    println!(
        "{} Turbulence circuit: {} qubits, t = {}, θ = {:.4}",
        style("→").cyan().bold(),
        style(qubits).green(),
        time_step,
        theta
    );

    let circuit = turbulence_circuit(qubits, time_step, theta)?;
    println!("{}\n", draw_circuit(&circuit));
    print_gate_counts("Circuit", &circuit);

    if let Some(name) = basis {
        let (pm, mut props) = PassManagerBuilder::new()
            .with_basis_gates(get_basis_gates(name)?)
            .build();
        let mut compiled = circuit.clone();
        pm.run(&mut compiled, &mut props)?;

        println!(
            "\n{} Lowered to {} ({} passes)",
            style("✓").green().bold(),
            style(name).yellow(),
            pm.len()
        );
        println!("{}\n", draw_circuit(&compiled));
        print_gate_counts("Compiled", &compiled);
    }

    Ok(())
}
