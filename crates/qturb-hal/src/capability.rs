//! Backend capability descriptions.

use serde::{Deserialize, Serialize};

/// What a backend can run.
///
/// Capabilities are fixed when the backend is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Supported gate set (OpenQASM-style lower-case names).
    pub gate_set: GateSet,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// True for simulators.
    pub is_simulator: bool,
    /// Free-form feature flags such as `"statevector"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Capabilities {
    /// Capabilities of the local statevector simulator.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "statevector".into(),
            num_qubits,
            gate_set: GateSet::universal(),
            max_shots: 1_000_000,
            is_simulator: true,
            features: vec!["statevector".into(), "seeded_sampling".into()],
        }
    }

    /// Replace the gate set.
    #[must_use]
    pub fn with_gate_set(mut self, gate_set: GateSet) -> Self {
        self.gate_set = gate_set;
        self
    }

    /// True if the feature flag is present.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

/// Gates a backend accepts.
///
/// If `native` is empty, every supported gate is native.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateSet {
    /// Single-qubit gates supported.
    pub single_qubit: Vec<String>,
    /// Two-qubit gates supported.
    pub two_qubit: Vec<String>,
    /// Gates that execute without decomposition.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub native: Vec<String>,
}

impl GateSet {
    /// Every gate the IR can express.
    pub fn universal() -> Self {
        Self {
            single_qubit: names(&["h", "x", "y", "z", "sx", "rx", "ry", "rz", "p"]),
            two_qubit: names(&["cx", "cz", "crz"]),
            native: vec![],
        }
    }

    /// Superconducting basis with CX as the entangler: `rz, sx, x, cx`.
    pub fn rz_sx_cx() -> Self {
        let single = names(&["rz", "sx", "x"]);
        let two = names(&["cx"]);
        Self {
            native: single.iter().chain(&two).cloned().collect(),
            single_qubit: single,
            two_qubit: two,
        }
    }

    /// Superconducting basis with CZ as the entangler: `rz, sx, x, cz`.
    pub fn rz_sx_cz() -> Self {
        let single = names(&["rz", "sx", "x"]);
        let two = names(&["cz"]);
        Self {
            native: single.iter().chain(&two).cloned().collect(),
            single_qubit: single,
            two_qubit: two,
        }
    }

    /// Check if a gate is supported.
    pub fn contains(&self, gate: &str) -> bool {
        self.single_qubit.iter().any(|g| g == gate) || self.two_qubit.iter().any(|g| g == gate)
    }

    /// Check if a gate executes without decomposition.
    pub fn is_native(&self, gate: &str) -> bool {
        if self.native.is_empty() {
            self.contains(gate)
        } else {
            self.native.iter().any(|g| g == gate)
        }
    }

    /// Names of the native gates.
    pub fn native_gates(&self) -> Vec<String> {
        if self.native.is_empty() {
            self.single_qubit
                .iter()
                .chain(&self.two_qubit)
                .cloned()
                .collect()
        } else {
            self.native.clone()
        }
    }
}

fn names(gates: &[&str]) -> Vec<String> {
    gates.iter().map(|g| (*g).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_contains_turbulence_gates() {
        let gates = GateSet::universal();
        for g in ["h", "cx", "ry", "rz", "crz"] {
            assert!(gates.contains(g), "{g}");
            assert!(gates.is_native(g), "{g}");
        }
    }

    #[test]
    fn test_restricted_basis() {
        let gates = GateSet::rz_sx_cx();
        assert!(gates.is_native("sx"));
        assert!(!gates.contains("crz"));
        assert!(!gates.is_native("h"));
        assert_eq!(gates.native_gates().len(), 4);
    }

    #[test]
    fn test_simulator_capabilities() {
        let caps = Capabilities::simulator(20);
        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 20);
        assert!(caps.has_feature("statevector"));
        let caps = caps.with_gate_set(GateSet::rz_sx_cz());
        assert!(caps.gate_set.is_native("cz"));
    }
}
