//! Simulator backend implementation.

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use qturb_hal::{
    Backend, BackendAvailability, Capabilities, Counts, ExecutionResult, HalError, HalResult, Job,
    JobId, JobStatus, ValidationResult,
};
use qturb_ir::Circuit;

use crate::statevector::{Statevector, bitstring};

/// Default qubit limit (2^20 amplitudes, ~16 MB).
pub const DEFAULT_MAX_QUBITS: u32 = 20;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector simulator backend.
///
/// The unitary part of the circuit is simulated exactly once per job and
/// every shot is sampled from the final distribution, so measurements must
/// come after all gates on their qubit.
pub struct SimulatorBackend {
    capabilities: Capabilities,
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
    rng: Mutex<StdRng>,
}

impl SimulatorBackend {
    /// Create a simulator with an entropy-seeded sampler.
    pub fn new() -> Self {
        Self {
            capabilities: Capabilities::simulator(DEFAULT_MAX_QUBITS),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fix the sampling seed so counts are reproducible.
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Change the qubit limit.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.capabilities.num_qubits = max_qubits;
        self
    }

    /// Jobs submitted but not yet collected with `result`.
    pub fn job_count(&self) -> usize {
        self.jobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Collect every reason the circuit cannot be simulated.
    fn check(&self, circuit: &Circuit) -> Vec<String> {
        let mut reasons = vec![];
        let gate_set = &self.capabilities.gate_set;

        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            reasons.push(format!(
                "circuit has {} qubits but simulator supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            ));
        }

        let mut measured = FxHashSet::default();
        for inst in circuit.instructions() {
            if inst.is_measure() {
                measured.extend(inst.qubits.iter().copied());
                continue;
            }
            let Some(gate) = inst.as_gate() else {
                continue;
            };
            if !gate_set.contains(gate.name()) {
                reasons.push(format!("unsupported gate '{}'", gate.name()));
            }
            if gate.kind.is_parameterized() {
                reasons.push(format!("gate '{}' has an unbound parameter", gate.name()));
            }
            if let Some(q) = inst.qubits.iter().find(|q| measured.contains(*q)) {
                reasons.push(format!(
                    "gate '{}' acts on {q} after it was measured",
                    gate.name()
                ));
            }
        }
        reasons
    }

    /// Run the simulation synchronously.
    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        let start = Instant::now();
        debug!(
            "Starting simulation: {} qubits, {} shots",
            circuit.num_qubits(),
            shots
        );

        let mut sv = Statevector::new(circuit.num_qubits());
        for inst in circuit.instructions() {
            sv.apply(inst)
                .map_err(|e| HalError::InvalidCircuit(e.to_string()))?;
        }

        let measurements = circuit.measurements();
        let num_clbits = circuit.num_clbits();
        let sampler = sv.sampler();
        let mut counts = Counts::new();
        {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            for _ in 0..shots {
                let outcome = sampler.sample(&mut *rng);
                counts.add(bitstring(outcome, &measurements, num_clbits), 1);
            }
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        Ok(ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64))
    }

    fn update_job(&self, job_id: &JobId, status: JobStatus, result: Option<ExecutionResult>) {
        let mut jobs = self.jobs.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(sim_job) = jobs.get_mut(&job_id.0) {
            sim_job.job.transition(status);
            if result.is_some() {
                sim_job.result = result;
            }
        }
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        Ok(BackendAvailability::always_available())
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        let reasons = self.check(circuit);
        if reasons.is_empty() {
            Ok(ValidationResult::Valid)
        } else {
            Ok(ValidationResult::Invalid { reasons })
        }
    }

    #[instrument(skip(self, circuit), fields(circuit = circuit.name()))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        if shots == 0 || shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots {
                shots,
                max: self.capabilities.max_shots,
            });
        }
        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            return Err(HalError::CircuitTooLarge {
                backend: self.name().to_string(),
                required: circuit.num_qubits(),
                available: self.capabilities.num_qubits,
            });
        }
        let reasons = self.check(circuit);
        if !reasons.is_empty() {
            return Err(HalError::InvalidCircuit(reasons.join("; ")));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), shots).with_backend(self.name());
        {
            let mut jobs = self.jobs.lock().unwrap_or_else(PoisonError::into_inner);
            jobs.insert(job_id.0.clone(), SimJob { job, result: None });
        }
        debug!("Submitted job: {}", job_id);

        self.update_job(&job_id, JobStatus::Running, None);
        match self.run_simulation(circuit, shots) {
            Ok(result) => self.update_job(&job_id, JobStatus::Completed, Some(result)),
            Err(e) => self.update_job(&job_id, JobStatus::Failed(e.to_string()), None),
        }

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self.jobs.lock().unwrap_or_else(PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.clone()))
    }

    /// Collect a job's outcome. Terminal jobs are removed from the table
    /// once read, so a second call reports [`HalError::JobNotFound`].
    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let mut jobs = self.jobs.lock().unwrap_or_else(PoisonError::into_inner);
        let status = jobs
            .get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.clone()))?;
        if !status.is_terminal() {
            return Err(HalError::ResultNotReady {
                job_id: job_id.clone(),
                status,
            });
        }

        let sim_job = jobs
            .remove(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.clone()))?;
        match (sim_job.job.status, sim_job.result) {
            (JobStatus::Completed, Some(result)) => Ok(result),
            (JobStatus::Failed(msg), _) => Err(HalError::JobFailed(msg)),
            (_, _) => Err(HalError::JobCancelled(job_id.clone())),
        }
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self.jobs.lock().unwrap_or_else(PoisonError::into_inner);
        let sim_job = jobs
            .get_mut(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.clone()))?;
        sim_job.job.transition(JobStatus::Cancelled);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qturb_ir::{ClbitId, QubitId};

    #[test]
    fn test_simulator_capabilities() {
        let backend = SimulatorBackend::new();
        let caps = backend.capabilities();
        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, DEFAULT_MAX_QUBITS);
        assert_eq!(backend.name(), "statevector");
    }

    #[tokio::test]
    async fn test_simulator_bell_state() {
        let backend = SimulatorBackend::new();
        let job_id = backend.submit(&Circuit::bell().unwrap(), 1000).await.unwrap();

        assert_eq!(backend.status(&job_id).await.unwrap(), JobStatus::Completed);
        let result = backend.result(&job_id).await.unwrap();
        assert_eq!(result.shots, 1000);

        let counts = &result.counts;
        assert_eq!(counts.get("00") + counts.get("11"), 1000);
        assert_eq!(counts.total_shots(), 1000);
    }

    #[tokio::test]
    async fn test_simulator_ghz_state() {
        let backend = SimulatorBackend::new();
        let job_id = backend.submit(&Circuit::ghz(3).unwrap(), 1000).await.unwrap();
        let counts = backend.wait(&job_id).await.unwrap().counts;
        assert_eq!(counts.get("000") + counts.get("111"), 1000);
    }

    #[tokio::test]
    async fn test_simulator_too_many_qubits() {
        let backend = SimulatorBackend::new().with_max_qubits(5);
        let circuit = Circuit::with_size("test", 10, 0);
        let result = backend.submit(&circuit, 100).await;
        assert!(matches!(
            result,
            Err(HalError::CircuitTooLarge {
                required: 10,
                available: 5,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_zero_shots_rejected() {
        let backend = SimulatorBackend::new();
        let result = backend.submit(&Circuit::bell().unwrap(), 0).await;
        assert!(matches!(result, Err(HalError::InvalidShots { shots: 0, .. })));
    }

    #[tokio::test]
    async fn test_mid_circuit_measurement_is_invalid() {
        let mut circuit = Circuit::with_size("mid", 1, 1);
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        circuit.x(QubitId(0)).unwrap();

        let backend = SimulatorBackend::new();
        let validation = backend.validate(&circuit).await.unwrap();
        assert!(matches!(validation, ValidationResult::Invalid { .. }));
        assert!(matches!(
            backend.submit(&circuit, 10).await,
            Err(HalError::InvalidCircuit(_))
        ));
    }

    #[tokio::test]
    async fn test_result_is_collected_once() {
        let backend = SimulatorBackend::new();
        let job_id = backend.submit(&Circuit::bell().unwrap(), 64).await.unwrap();

        assert_eq!(backend.job_count(), 1);
        let result = backend.wait(&job_id).await.unwrap();
        assert_eq!(result.counts.total_shots(), 64);
        assert_eq!(backend.job_count(), 0);
        assert!(matches!(
            backend.result(&job_id).await,
            Err(HalError::JobNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_job() {
        let backend = SimulatorBackend::new();
        let missing = JobId::new("nope");
        assert!(matches!(
            backend.status(&missing).await,
            Err(HalError::JobNotFound(_))
        ));
        assert!(matches!(
            backend.cancel(&missing).await,
            Err(HalError::JobNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_seeded_counts_are_reproducible() {
        let mut circuit = Circuit::with_size("mix", 3, 3);
        for i in 0..3 {
            circuit.h(QubitId(i)).unwrap();
        }
        circuit.measure_all().unwrap();

        let a = SimulatorBackend::new().with_seed(42);
        let b = SimulatorBackend::new().with_seed(42);
        let ra = a.wait(&a.submit(&circuit, 512).await.unwrap()).await.unwrap();
        let rb = b.wait(&b.submit(&circuit, 512).await.unwrap()).await.unwrap();
        assert_eq!(ra.counts, rb.counts);
    }
}
