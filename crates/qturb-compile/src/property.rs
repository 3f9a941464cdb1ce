//! `PropertySet` and related types for pass communication.
//!
//! Passes share the compilation target through [`PropertySet`] and may
//! leave typed findings for later passes or callers:
//!
//! ```
//! use qturb_compile::{BasisGates, PropertySet};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct GatesRemoved(usize);
//!
//! let mut props = PropertySet::new().with_basis_gates(BasisGates::rz_sx_cx());
//! props.insert(GatesRemoved(3));
//!
//! assert!(props.basis_gates.as_ref().unwrap().contains("sx"));
//! assert_eq!(props.get::<GatesRemoved>(), Some(&GatesRemoved(3)));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};

/// Basis gates for the target device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasisGates {
    gates: Vec<String>,
}

impl BasisGates {
    /// Create a basis from gate names.
    pub fn new(gates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            gates: gates.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if a gate is in the basis.
    pub fn contains(&self, gate: &str) -> bool {
        self.gates.iter().any(|g| g == gate)
    }

    /// Get the basis gates.
    pub fn gates(&self) -> &[String] {
        &self.gates
    }

    /// Every gate the IR can express.
    pub fn universal() -> Self {
        Self::new([
            "h", "x", "y", "z", "sx", "rx", "ry", "rz", "p", "cx", "cz", "crz", "measure",
            "barrier",
        ])
    }

    /// RZ + SX + X + CX.
    pub fn rz_sx_cx() -> Self {
        Self::new(["rz", "sx", "x", "cx", "measure", "barrier"])
    }

    /// RZ + SX + X + CZ.
    pub fn rz_sx_cz() -> Self {
        Self::new(["rz", "sx", "x", "cz", "measure", "barrier"])
    }
}

/// Properties shared between compilation passes.
#[derive(Default)]
pub struct PropertySet {
    /// Target basis gates for gate decomposition.
    pub basis_gates: Option<BasisGates>,

    /// Qubit limit of the target.
    pub max_qubits: Option<u32>,

    custom: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl PropertySet {
    /// Create a new empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target basis.
    #[must_use]
    pub fn with_basis_gates(mut self, basis_gates: BasisGates) -> Self {
        self.basis_gates = Some(basis_gates);
        self
    }

    /// Set the target qubit limit.
    #[must_use]
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.max_qubits = Some(max_qubits);
        self
    }

    /// Store a typed property, replacing any previous value of that type.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
        self.custom.insert(TypeId::of::<T>(), Box::new(value));
    }

    /// Get a typed property.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.custom
            .get(&TypeId::of::<T>())
            .and_then(|b| b.downcast_ref())
    }

    /// Check whether a typed property is present.
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.custom.contains_key(&TypeId::of::<T>())
    }
}

impl std::fmt::Debug for PropertySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertySet")
            .field("basis_gates", &self.basis_gates)
            .field("max_qubits", &self.max_qubits)
            .field("custom", &self.custom.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_gates() {
        let basis = BasisGates::rz_sx_cz();
        assert!(basis.contains("cz"));
        assert!(!basis.contains("cx"));
        assert!(BasisGates::universal().contains("crz"));
    }

    #[test]
    fn test_custom_properties_by_type() {
        let mut props = PropertySet::new();
        props.insert(7usize);
        props.insert(String::from("tag"));
        assert_eq!(props.get::<usize>(), Some(&7));
        assert_eq!(props.get::<String>().map(String::as_str), Some("tag"));
        assert!(!props.contains::<u8>());
        props.insert(9usize);
        assert_eq!(props.get::<usize>(), Some(&9));
    }
}
