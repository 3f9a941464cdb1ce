//! Statevector simulation engine.
//!
//! Qubit `i` is bit `i` of the basis-state index.

use num_complex::Complex64;
use rand::Rng;

use qturb_ir::{ClbitId, Instruction, InstructionKind, IrResult, Matrix2, QubitId};

/// A pure state of `n` qubits: 2^n complex amplitudes.
#[derive(Debug, Clone)]
pub struct Statevector {
    amplitudes: Vec<Complex64>,
    num_qubits: usize,
}

impl Statevector {
    /// Create a statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitudes indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply an instruction. Measurements and barriers leave the state as is.
    ///
    /// Fails if a gate angle is still symbolic.
    pub fn apply(&mut self, instruction: &Instruction) -> IrResult<()> {
        if let InstructionKind::Gate(gate) = &instruction.kind {
            let matrix = gate.kind.matrix()?;
            match instruction.qubits.as_slice() {
                [target] if !gate.kind.is_controlled() => {
                    self.apply_single(&matrix, target.index());
                }
                [control, target] if gate.kind.is_controlled() => {
                    self.apply_controlled(&matrix, control.index(), target.index());
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply a 2×2 unitary to one qubit.
    pub fn apply_single(&mut self, m: &Matrix2, target: usize) {
        let mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let (a0, a1) = (self.amplitudes[i], self.amplitudes[j]);
                self.amplitudes[i] = m[0][0] * a0 + m[0][1] * a1;
                self.amplitudes[j] = m[1][0] * a0 + m[1][1] * a1;
            }
        }
    }

    /// Apply a 2×2 unitary to `target` on the subspace where `control` is 1.
    pub fn apply_controlled(&mut self, m: &Matrix2, control: usize, target: usize) {
        let cmask = 1 << control;
        let tmask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if i & cmask != 0 && i & tmask == 0 {
                let j = i | tmask;
                let (a0, a1) = (self.amplitudes[i], self.amplitudes[j]);
                self.amplitudes[i] = m[0][0] * a0 + m[0][1] * a1;
                self.amplitudes[j] = m[1][0] * a0 + m[1][1] * a1;
            }
        }
    }

    /// Probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Sampler drawing basis states from this state's distribution.
    pub fn sampler(&self) -> Sampler {
        let mut total = 0.0;
        let cumulative = self
            .amplitudes
            .iter()
            .map(|a| {
                total += a.norm_sqr();
                total
            })
            .collect();
        Sampler { cumulative, total }
    }
}

/// Cumulative distribution over basis states.
#[derive(Debug, Clone)]
pub struct Sampler {
    cumulative: Vec<f64>,
    total: f64,
}

impl Sampler {
    /// Draw one basis-state index.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.r#gen::<f64>() * self.total;
        self.cumulative
            .partition_point(|&c| c <= r)
            .min(self.cumulative.len() - 1)
    }
}

/// Classical-register readout of a basis state.
///
/// The bitstring has one character per classical bit with bit 0 rightmost.
/// A bit that no measurement writes reads `0`; when several measurements
/// write the same bit the last one wins.
pub fn bitstring(outcome: usize, measurements: &[(QubitId, ClbitId)], num_clbits: usize) -> String {
    let mut bits = vec![b'0'; num_clbits];
    for (qubit, clbit) in measurements {
        let value = if (outcome >> qubit.index()) & 1 == 1 { b'1' } else { b'0' };
        bits[num_clbits - 1 - clbit.index()] = value;
    }
    String::from_utf8_lossy(&bits).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qturb_ir::StandardGate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    fn gate(kind: StandardGate, qubits: &[u32]) -> Instruction {
        Instruction::gate(kind, qubits.iter().copied().map(QubitId))
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
        assert!(sv.amplitudes()[1..].iter().all(|a| a.norm() < 1e-12));
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply(&gate(StandardGate::H, &[0])).unwrap();
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        assert!(approx_eq(sv.amplitudes()[0], h));
        assert!(approx_eq(sv.amplitudes()[1], h));
    }

    #[test]
    fn test_bell_amplitudes() {
        let mut sv = Statevector::new(2);
        sv.apply(&gate(StandardGate::H, &[0])).unwrap();
        sv.apply(&gate(StandardGate::CX, &[0, 1])).unwrap();
        let probs = sv.probabilities();
        assert!((probs[0] - 0.5).abs() < 1e-10);
        assert!(probs[1].abs() < 1e-10);
        assert!(probs[2].abs() < 1e-10);
        assert!((probs[3] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_x_on_second_qubit_sets_bit_one() {
        let mut sv = Statevector::new(2);
        sv.apply(&gate(StandardGate::X, &[1])).unwrap();
        assert!(approx_eq(sv.amplitudes()[0b10], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_crz_only_acts_when_control_set() {
        let angle = PI / 3.0;
        let mut sv = Statevector::new(2);
        sv.apply(&gate(StandardGate::H, &[1])).unwrap();
        sv.apply(&gate(StandardGate::CRz(angle.into()), &[0, 1])).unwrap();
        // Control (qubit 0) is |0⟩, so the state is unchanged.
        let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
        assert!(approx_eq(sv.amplitudes()[0b00], h));
        assert!(approx_eq(sv.amplitudes()[0b10], h));

        let mut sv = Statevector::new(2);
        sv.apply(&gate(StandardGate::X, &[0])).unwrap();
        sv.apply(&gate(StandardGate::CRz(angle.into()), &[0, 1])).unwrap();
        assert!(approx_eq(
            sv.amplitudes()[0b01],
            Complex64::from_polar(1.0, -angle / 2.0)
        ));
    }

    #[test]
    fn test_unbound_parameter_fails() {
        let mut sv = Statevector::new(1);
        let inst = gate(
            StandardGate::Ry(qturb_ir::ParameterExpression::symbol("θ")),
            &[0],
        );
        assert!(sv.apply(&inst).is_err());
    }

    #[test]
    fn test_sampler_is_deterministic_for_basis_state() {
        let mut sv = Statevector::new(3);
        sv.apply(&gate(StandardGate::X, &[2])).unwrap();
        let sampler = sv.sampler();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng), 0b100);
        }
    }

    #[test]
    fn test_bitstring_puts_clbit_zero_rightmost() {
        let measurements = [(QubitId(0), ClbitId(0)), (QubitId(1), ClbitId(1))];
        assert_eq!(bitstring(0b01, &measurements, 2), "01");
        assert_eq!(bitstring(0b10, &measurements, 2), "10");
        // Unmeasured classical bits read 0.
        assert_eq!(bitstring(0b11, &measurements[..1], 3), "001");
    }
}
