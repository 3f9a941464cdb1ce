//! Built-in compilation passes.

mod parameters;
mod translation;
mod verification;

pub use parameters::{FoldParameters, UnboundParameterCheck};
pub use translation::BasisTranslation;
pub use verification::{MeasurementVerification, QubitLimitCheck, VerificationResult};
