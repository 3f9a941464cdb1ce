//! The time-step loop.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, instrument};

use qturb_field::{FieldGenerator, PressurePoint, TurbulenceField};
use qturb_hal::Counts;
use qturb_ir::Circuit;

use crate::circuit::turbulence_circuit;
use crate::config::PipelineConfig;
use crate::error::PipelineResult;
use crate::executor::CircuitExecutor;

/// Everything computed for one time step.
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    /// Position in the run, starting at 0.
    pub index: usize,
    /// Time value.
    pub time_step: f64,
    /// The bound circuit that was executed.
    pub circuit: Circuit,
    /// Measurement counts.
    pub counts: Counts,
    /// The turbulence field.
    #[serde(skip)]
    pub field: TurbulenceField,
}

/// Result of a full run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// One record per time step, in order.
    pub steps: Vec<StepRecord>,
    /// Pressure points used for every field.
    pub pressure_points: Vec<PressurePoint>,
}

impl PipelineOutput {
    /// The fields in time order.
    pub fn fields(&self) -> Vec<TurbulenceField> {
        self.steps.iter().map(|s| s.field.clone()).collect()
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the run produced no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Pairs circuit execution with field generation over the configured time
/// steps.
pub struct Pipeline<E> {
    config: PipelineConfig,
    executor: E,
    generator: FieldGenerator,
}

impl<E: CircuitExecutor> Pipeline<E> {
    /// Validate the configuration and build a pipeline.
    pub fn new(config: PipelineConfig, executor: E) -> PipelineResult<Self> {
        config.validate()?;
        let generator = FieldGenerator::new(config.grid_size, config.pressure_points.clone());
        Ok(Self {
            config,
            executor,
            generator,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The executor in use.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run every time step.
    pub async fn run(&self) -> PipelineResult<PipelineOutput> {
        self.run_with(|_| {}).await
    }

    /// Run every time step, calling `on_step` after each one completes.
    ///
    /// Steps run in order and the first error aborts the run. All fields
    /// draw from one random stream, seeded from the configuration when a
    /// seed is set.
    #[instrument(skip_all, fields(steps = self.config.time_steps.len()))]
    pub async fn run_with<F>(&self, mut on_step: F) -> PipelineResult<PipelineOutput>
    where
        F: FnMut(&StepRecord),
    {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let time_steps = self.config.time_steps.values();
        let mut steps = Vec::with_capacity(time_steps.len());
        for (index, &time_step) in time_steps.iter().enumerate() {
            let circuit = turbulence_circuit(self.config.num_qubits, time_step, self.config.theta)?;
            let counts = self.executor.execute(&circuit).await?;
            let field = self.generator.generate(time_step, &mut rng);

            let record = StepRecord {
                index,
                time_step,
                circuit,
                counts,
                field,
            };
            on_step(&record);
            steps.push(record);
        }

        info!("Completed {} time steps", steps.len());
        Ok(PipelineOutput {
            steps,
            pressure_points: self.config.pressure_points.clone(),
        })
    }
}
