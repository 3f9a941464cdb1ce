//! Passes over gate parameters.

use tracing::debug;

use qturb_ir::{Circuit, ParameterExpression};

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Rejects circuits whose gate angles still reference free symbols.
pub struct UnboundParameterCheck;

impl Pass for UnboundParameterCheck {
    fn name(&self) -> &'static str {
        "unbound_parameter_check"
    }

    fn kind(&self) -> PassKind {
        PassKind::Analysis
    }

    fn run(&self, circuit: &mut Circuit, _properties: &mut PropertySet) -> CompileResult<()> {
        let unbound = circuit.parameters();
        if unbound.is_empty() {
            Ok(())
        } else {
            Err(CompileError::UnboundParameters(unbound.into_iter().collect()))
        }
    }
}

/// Collapses constant parameter expressions into literals.
pub struct FoldParameters;

impl Pass for FoldParameters {
    fn name(&self) -> &'static str {
        "fold_parameters"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, _properties: &mut PropertySet) -> CompileResult<()> {
        let mut folded = 0usize;
        circuit.map_parameters(|param| {
            let out = param.fold();
            if !matches!(param, ParameterExpression::Constant(_)) && !out.is_symbolic() {
                folded += 1;
            }
            out
        });
        debug!("Folded {} parameter expressions", folded);
        Ok(())
    }
}
