//! qturb Command-Line Interface
//!
//! Runs the quantum-decorated turbulence pipeline and renders its output.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{circuit, run};

/// qturb - quantum circuits alongside an animated synthetic turbulence field
#[derive(Parser)]
#[command(name = "qturb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every time step and write the animated figure
    Run(run::RunArgs),

    /// Print the circuit for a single time step
    Circuit {
        /// Number of qubits
        #[arg(short, long, default_value = "7")]
        qubits: u32,

        /// Time step scaling the rotation angles
        #[arg(short, long, default_value = "0.1")]
        time_step: f64,

        /// Value bound to θ (defaults to π/4)
        #[arg(long)]
        theta: Option<f64>,

        /// Also show the circuit lowered to a basis (universal, rz-sx-cx, rz-sx-cz)
        #[arg(short, long)]
        basis: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Circuit {
            qubits,
            time_step,
            theta,
            basis,
        } => circuit::execute(qubits, time_step, theta, basis.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
