//! Circuit execution seam between the pipeline and a backend.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use qturb_compile::{BasisGates, PassManager, PassManagerBuilder, PropertySet};
use qturb_hal::{Backend, Counts, HalError};
use qturb_ir::Circuit;

use crate::error::PipelineResult;

/// Compiles circuits for a target and runs them.
#[async_trait]
pub trait CircuitExecutor: Send + Sync {
    /// Lower a circuit into something the target accepts.
    fn compile(&self, circuit: &Circuit) -> PipelineResult<Circuit>;

    /// Compile and run a circuit, returning its measurement counts.
    async fn execute(&self, circuit: &Circuit) -> PipelineResult<Counts>;
}

/// Runs circuits on a [`Backend`] after compiling them to its native gates.
pub struct BackendExecutor<B> {
    backend: B,
    pass_manager: PassManager,
    properties: PropertySet,
    shots: u32,
}

impl<B: Backend> BackendExecutor<B> {
    /// Build an executor whose pass manager targets the backend's native
    /// gates and qubit count.
    pub fn new(backend: B, shots: u32) -> Self {
        let caps = backend.capabilities();
        let basis = BasisGates::new(
            caps.gate_set
                .native_gates()
                .into_iter()
                .chain(["measure".to_string(), "barrier".to_string()]),
        );
        let (pass_manager, properties) = PassManagerBuilder::new()
            .with_basis_gates(basis)
            .with_max_qubits(caps.num_qubits)
            .build();
        debug!(
            "Executor for '{}' with passes {:?}",
            backend.name(),
            pass_manager.pass_names()
        );

        Self {
            backend,
            pass_manager,
            properties,
            shots,
        }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Shots per execution.
    pub fn shots(&self) -> u32 {
        self.shots
    }
}

#[async_trait]
impl<B: Backend> CircuitExecutor for BackendExecutor<B> {
    fn compile(&self, circuit: &Circuit) -> PipelineResult<Circuit> {
        let mut compiled = circuit.clone();
        // Passes record findings; start each run from the configured target.
        let mut properties = PropertySet::new();
        properties.basis_gates = self.properties.basis_gates.clone();
        properties.max_qubits = self.properties.max_qubits;
        self.pass_manager.run(&mut compiled, &mut properties)?;
        Ok(compiled)
    }

    #[instrument(skip_all, fields(circuit = circuit.name(), backend = self.backend.name()))]
    async fn execute(&self, circuit: &Circuit) -> PipelineResult<Counts> {
        let availability = self.backend.availability().await?;
        if !availability.is_available {
            return Err(HalError::BackendUnavailable(
                availability
                    .status_message
                    .unwrap_or_else(|| self.backend.name().to_string()),
            )
            .into());
        }

        let compiled = self.compile(circuit)?;
        let job_id = self.backend.submit(&compiled, self.shots).await?;
        let result = self.backend.wait(&job_id).await?;
        info!(
            "Job {} finished: {} outcomes over {} shots",
            job_id,
            result.counts.len(),
            result.shots
        );
        Ok(result.counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qturb_adapter_sim::SimulatorBackend;
    use qturb_hal::{Capabilities, GateSet};
    use qturb_ir::QubitId;

    #[test]
    fn test_compile_keeps_universal_circuit() {
        let executor = BackendExecutor::new(SimulatorBackend::new(), 100);
        let circuit = Circuit::bell().unwrap();
        let compiled = executor.compile(&circuit).unwrap();
        assert_eq!(compiled.instructions(), circuit.instructions());
    }

    #[test]
    fn test_compile_rejects_oversized_circuit() {
        let executor = BackendExecutor::new(SimulatorBackend::new().with_max_qubits(2), 100);
        let circuit = Circuit::ghz(3).unwrap();
        assert!(matches!(
            executor.compile(&circuit),
            Err(crate::PipelineError::Compile(_))
        ));
    }

    #[tokio::test]
    async fn test_execute_counts_sum_to_shots() {
        let executor = BackendExecutor::new(SimulatorBackend::new().with_seed(3), 256);
        let counts = executor.execute(&Circuit::bell().unwrap()).await.unwrap();
        assert_eq!(counts.total_shots(), 256);
        assert_eq!(counts.get("00") + counts.get("11"), 256);
    }

    #[test]
    fn test_basis_follows_backend_gate_set() {
        let caps = Capabilities::simulator(4).with_gate_set(GateSet::rz_sx_cx());
        assert!(!caps.gate_set.is_native("h"));

        let mut circuit = Circuit::with_size("h", 1, 0);
        circuit.h(QubitId(0)).unwrap();

        let mut basis = caps.gate_set.native_gates();
        basis.extend(["measure".to_string(), "barrier".to_string()]);
        let (pm, mut props) = PassManagerBuilder::new()
            .with_basis_gates(BasisGates::new(basis))
            .build();
        pm.run(&mut circuit, &mut props).unwrap();
        assert!(circuit.count_ops().keys().all(|g| ["rz", "sx"].contains(g)));
    }
}
