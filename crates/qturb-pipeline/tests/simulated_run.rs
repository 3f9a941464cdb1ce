//! Full runs against the statevector simulator.

use qturb_adapter_sim::SimulatorBackend;
use qturb_pipeline::{
    BackendExecutor, CircuitExecutor, Pipeline, PipelineConfig, PipelineError, TimeSteps,
    turbulence_circuit,
};

fn config(num_qubits: u32, steps: usize) -> PipelineConfig {
    PipelineConfig {
        num_qubits,
        grid_size: 5,
        time_steps: TimeSteps::Linspace {
            start: 0.1,
            stop: 2.0,
            count: steps,
        },
        shots: 512,
        seed: Some(2024),
        ..PipelineConfig::default()
    }
}

#[tokio::test]
async fn counts_sum_to_shots_every_step() {
    let cfg = config(4, 4);
    let executor = BackendExecutor::new(SimulatorBackend::new().with_seed(1), cfg.shots);
    let output = Pipeline::new(cfg, executor).unwrap().run().await.unwrap();

    assert_eq!(output.len(), 4);
    for step in &output.steps {
        assert_eq!(step.counts.total_shots(), 512);
        assert!(step.counts.iter().all(|(bits, _)| bits.len() == 4));
        assert_eq!(step.field.values.shape(), &[5, 5, 5]);
    }
    assert_eq!(output.steps[3].time_step, 2.0);
}

#[tokio::test]
async fn default_seven_qubit_run_completes() {
    let cfg = PipelineConfig {
        seed: Some(5),
        ..PipelineConfig::default()
    };
    let executor = BackendExecutor::new(SimulatorBackend::new().with_seed(5), cfg.shots);
    let output = Pipeline::new(cfg, executor).unwrap().run().await.unwrap();

    assert_eq!(output.len(), 10);
    assert!(output.steps.iter().all(|s| s.counts.total_shots() == 1024));
    assert_eq!(output.fields().len(), 10);
}

#[tokio::test]
async fn single_qubit_run_succeeds() {
    let cfg = config(1, 2);
    let executor = BackendExecutor::new(SimulatorBackend::new(), cfg.shots);
    let output = Pipeline::new(cfg, executor).unwrap().run().await.unwrap();
    for step in &output.steps {
        assert!(step.counts.iter().all(|(bits, _)| bits == "0" || bits == "1"));
    }
}

#[tokio::test]
async fn circuit_too_large_for_backend_is_fatal() {
    let cfg = config(6, 3);
    let executor = BackendExecutor::new(SimulatorBackend::new().with_max_qubits(4), cfg.shots);
    let result = Pipeline::new(cfg, executor).unwrap().run().await;
    assert!(matches!(result, Err(PipelineError::Compile(_))));
}

#[test]
fn simulator_compile_keeps_turbulence_gates() {
    let executor = BackendExecutor::new(SimulatorBackend::new(), 1);
    let circuit = turbulence_circuit(3, 0.7, std::f64::consts::FRAC_PI_4).unwrap();
    let compiled = executor.compile(&circuit).unwrap();

    // Same gates on the same wires; bound angles are folded to literals.
    assert_eq!(compiled.instructions().len(), circuit.instructions().len());
    for (after, before) in compiled.instructions().iter().zip(circuit.instructions()) {
        assert_eq!(after.name(), before.name());
        assert_eq!(after.qubits, before.qubits);
        let angle = |inst: &qturb_ir::Instruction| {
            inst.as_gate()
                .and_then(|g| g.kind.parameter())
                .and_then(|p| p.as_f64())
        };
        assert_eq!(angle(after), angle(before));
    }
}

#[test]
fn config_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.yaml");
    std::fs::write(&path, "num_qubits: 3\nshots: 64\nseed: 1\n").unwrap();

    let cfg = PipelineConfig::from_file(&path).unwrap();
    assert_eq!(cfg.num_qubits, 3);
    assert_eq!(cfg.shots, 64);
    assert_eq!(cfg.time_steps.len(), 10);

    let missing = PipelineConfig::from_file(dir.path().join("nope.yaml"));
    assert!(matches!(missing, Err(qturb_pipeline::ConfigError::Io { .. })));
}
