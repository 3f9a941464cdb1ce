//! Gate definitions.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::{IrError, IrResult};
use crate::parameter::ParameterExpression;

/// A 2×2 complex matrix in row-major order.
pub type Matrix2 = [[Complex64; 2]; 2];

/// Gates understood by the IR, compiler and simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard.
    H,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
    /// sqrt(X).
    SX,
    /// Rotation about X.
    Rx(ParameterExpression),
    /// Rotation about Y.
    Ry(ParameterExpression),
    /// Rotation about Z.
    Rz(ParameterExpression),
    /// Phase gate.
    P(ParameterExpression),
    /// Controlled-X (CNOT).
    CX,
    /// Controlled-Z.
    CZ,
    /// Controlled rotation about Z.
    CRz(ParameterExpression),
}

impl StandardGate {
    /// Lower-case OpenQASM-style name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::SX => "sx",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::P(_) => "p",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::CRz(_) => "crz",
        }
    }

    /// Number of qubit operands.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::CX | StandardGate::CZ | StandardGate::CRz(_) => 2,
            _ => 1,
        }
    }

    /// The angle parameter, if the gate has one.
    pub fn parameter(&self) -> Option<&ParameterExpression> {
        match self {
            StandardGate::Rx(p)
            | StandardGate::Ry(p)
            | StandardGate::Rz(p)
            | StandardGate::P(p)
            | StandardGate::CRz(p) => Some(p),
            _ => None,
        }
    }

    /// Mutable access to the angle parameter.
    pub fn parameter_mut(&mut self) -> Option<&mut ParameterExpression> {
        match self {
            StandardGate::Rx(p)
            | StandardGate::Ry(p)
            | StandardGate::Rz(p)
            | StandardGate::P(p)
            | StandardGate::CRz(p) => Some(p),
            _ => None,
        }
    }

    /// True if the angle still contains a free symbol.
    pub fn is_parameterized(&self) -> bool {
        self.parameter().is_some_and(ParameterExpression::is_symbolic)
    }

    /// True for two-qubit gates that act as "if control is |1⟩ apply U".
    pub fn is_controlled(&self) -> bool {
        matches!(
            self,
            StandardGate::CX | StandardGate::CZ | StandardGate::CRz(_)
        )
    }

    /// The single-qubit unitary of this gate, or the target unitary of a
    /// controlled gate.
    ///
    /// Fails if the angle is still symbolic.
    pub fn matrix(&self) -> IrResult<Matrix2> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        Ok(match self {
            StandardGate::H => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            StandardGate::X | StandardGate::CX => [[zero, one], [one, zero]],
            StandardGate::Y => [[zero, -i], [i, zero]],
            StandardGate::Z | StandardGate::CZ => [[one, zero], [zero, -one]],
            StandardGate::SX => {
                let a = Complex64::new(0.5, 0.5);
                let b = Complex64::new(0.5, -0.5);
                [[a, b], [b, a]]
            }
            StandardGate::Rx(p) => {
                let theta = bound_angle(p)?;
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new(0.0, -(theta / 2.0).sin());
                [[c, s], [s, c]]
            }
            StandardGate::Ry(p) => {
                let theta = bound_angle(p)?;
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new((theta / 2.0).sin(), 0.0);
                [[c, -s], [s, c]]
            }
            StandardGate::Rz(p) | StandardGate::CRz(p) => {
                let theta = bound_angle(p)?;
                [
                    [Complex64::from_polar(1.0, -theta / 2.0), zero],
                    [zero, Complex64::from_polar(1.0, theta / 2.0)],
                ]
            }
            StandardGate::P(p) => {
                let theta = bound_angle(p)?;
                [[one, zero], [zero, Complex64::from_polar(1.0, theta)]]
            }
        })
    }
}

fn bound_angle(p: &ParameterExpression) -> IrResult<f64> {
    p.as_f64().ok_or_else(|| {
        IrError::UnboundParameter(p.symbols().into_iter().collect::<Vec<_>>().join(", "))
    })
}

/// A gate plus optional display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The gate kind.
    pub kind: StandardGate,
    /// Optional label shown by diagram renderers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    /// Wrap a standard gate.
    pub fn new(kind: StandardGate) -> Self {
        Self { kind, label: None }
    }

    /// Attach a display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Gate name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Number of qubit operands.
    pub fn num_qubits(&self) -> u32 {
        self.kind.num_qubits()
    }
}

impl From<StandardGate> for Gate {
    fn from(kind: StandardGate) -> Self {
        Gate::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn approx(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn test_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::CRz(0.1.into()).num_qubits(), 2);
        assert!(StandardGate::CRz(0.1.into()).is_controlled());
        assert!(!StandardGate::Ry(0.1.into()).is_controlled());
    }

    #[test]
    fn test_parameterized() {
        assert!(!StandardGate::H.is_parameterized());
        assert!(!StandardGate::Ry(PI.into()).is_parameterized());
        assert!(StandardGate::Ry(ParameterExpression::symbol("θ")).is_parameterized());
    }

    #[test]
    fn test_symbolic_matrix_fails() {
        let gate = StandardGate::Rz(ParameterExpression::symbol("θ") * 2.0);
        assert!(matches!(gate.matrix(), Err(IrError::UnboundParameter(name)) if name == "θ"));
    }

    #[test]
    fn test_ry_pi_flips() {
        let m = StandardGate::Ry(PI.into()).matrix().unwrap();
        assert!(approx(m[0][0], Complex64::new(0.0, 0.0)));
        assert!(approx(m[1][0], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_sx_squared_is_x() {
        let m = StandardGate::SX.matrix().unwrap();
        let sq00 = m[0][0] * m[0][0] + m[0][1] * m[1][0];
        let sq01 = m[0][0] * m[0][1] + m[0][1] * m[1][1];
        assert!(approx(sq00, Complex64::new(0.0, 0.0)));
        assert!(approx(sq01, Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_labeled_gate() {
        let g = Gate::new(StandardGate::H).with_label("mix");
        assert_eq!(g.name(), "h");
        assert_eq!(g.label.as_deref(), Some("mix"));
    }
}
