//! Run command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use qturb_adapter_sim::SimulatorBackend;
use qturb_pipeline::{BackendExecutor, Pipeline, PipelineConfig, PipelineOutput, TimeSteps};
use qturb_viz::{assemble_figure, draw_circuit, write_html, write_json};

use super::common::print_counts;

/// Arguments of `qturb run`. Flags override values from the config file.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of qubits per circuit
    #[arg(short, long)]
    pub qubits: Option<u32>,

    /// Side length of the field grid
    #[arg(short, long)]
    pub grid_size: Option<usize>,

    /// Number of time steps, spread over the configured time range
    #[arg(long)]
    pub steps: Option<usize>,

    /// Shots per circuit
    #[arg(short, long)]
    pub shots: Option<u32>,

    /// Value bound to θ
    #[arg(long)]
    pub theta: Option<f64>,

    /// Seed for field noise and measurement sampling
    #[arg(long, env = "QTURB_SEED")]
    pub seed: Option<u64>,

    /// Output HTML file
    #[arg(short, long, default_value = "turbulence.html")]
    pub output: PathBuf,

    /// Also write the figure as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Skip per-step circuit diagrams and histograms
    #[arg(long)]
    pub no_diagrams: bool,
}

impl RunArgs {
    /// Resolve the effective configuration.
    pub fn resolve_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(qubits) = self.qubits {
            config.num_qubits = qubits;
        }
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(count) = self.steps {
            let values = config.time_steps.values();
            config.time_steps = TimeSteps::Linspace {
                start: values.first().copied().unwrap_or(0.1),
                stop: values.last().copied().unwrap_or(2.0),
                count,
            };
        }
        if let Some(shots) = self.shots {
            config.shots = shots;
        }
        if let Some(theta) = self.theta {
            config.theta = theta;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Execute the run command.
pub async fn execute(args: RunArgs) -> Result<()> {
    let config = args.resolve_config()?;
    debug!("Effective configuration: {:?}", config);

    println!(
        "{} Running {} time steps: {} qubits, {}³ grid, {} shots",
        style("→").cyan().bold(),
        style(config.time_steps.len()).green(),
        config.num_qubits,
        config.grid_size,
        config.shots
    );

    let backend = match config.seed {
        Some(seed) => SimulatorBackend::new().with_seed(seed),
        None => SimulatorBackend::new(),
    };
    let executor = BackendExecutor::new(backend, config.shots);
    let pipeline = Pipeline::new(config, executor)?;

    let bar = ProgressBar::new(pipeline.config().time_steps.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );
    let output = pipeline
        .run_with(|step| {
            bar.set_message(format!("t = {:.3}", step.time_step));
            bar.inc(1);
        })
        .await;
    bar.finish_and_clear();
    let output = output?;

    if !args.no_diagrams {
        print_steps(&output);
    }

    let figure = assemble_figure(&output.fields(), &output.pressure_points, output.len())?;
    write_html(&figure, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!(
        "{} Figure written to {}",
        style("✓").green().bold(),
        style(args.output.display()).green()
    );

    if let Some(path) = &args.json {
        write_json(&figure, path).with_context(|| format!("writing {}", path.display()))?;
        println!("  JSON: {}", style(path.display()).green());
    }

    Ok(())
}

fn print_steps(output: &PipelineOutput) {
    for step in &output.steps {
        println!(
            "\n{} Time step {} (t = {:.3})",
            style("●").cyan().bold(),
            step.index,
            step.time_step
        );
        println!("{}\n", draw_circuit(&step.circuit));
        print_counts(&step.counts);
    }
    println!();
}
