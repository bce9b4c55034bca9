use crate::poly_commit::errors::PolyComSchemeError;
use ark_std::{boxed::Box, error, fmt, format, string::String};
use honk_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, HonkError>;

#[derive(Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs)]
pub enum HonkError {
    /// Algebra error
    Algebra(AlgebraError),
    /// Polynomial commitment error
    PolyCom(PolyComSchemeError),
    /// Error with message
    Message(String),
    /// The circuit size in the proof does not match the verifier key.
    CircuitSizeMismatch,
    /// The number of public inputs in the proof does not match the verifier key.
    PublicInputSizeMismatch,
    /// The proof bytes cannot be read by the transcript.
    TranscriptError,
    /// A sumcheck round is inconsistent with the running claim.
    SumcheckRoundError,
    /// The final sumcheck claim does not match the relations at the challenge point.
    SumcheckEvaluationError,
    /// The copy constraints do not form a valid permutation.
    PermutationError,
    /// Error occurred when verify.
    VerificationError,
    /// Division by zero.
    DivisionByZero,
    /// Function params error.
    FuncParamsError,
    /// The witness if error when prove.
    ProofErrorInvalidWitness,
    /// Cannot compute the opening proof.
    PCSProveEvalError,
    /// The degree of the polynomial is higher than the maximum degree supported.
    DegreeError,
    /// Polynomial commitment error.
    CommitmentError,
}

impl fmt::Display for HonkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HonkError::*;
        f.write_str(match self {
            Algebra(e) => Box::leak(format!("Algebra: {}", e).into_boxed_str()),
            PolyCom(e) => Box::leak(format!("PolyCom: {}", e).into_boxed_str()),
            Message(e) => Box::leak(e.to_string().into_boxed_str()),
            CircuitSizeMismatch => "Circuit size does not match the verifier key.",
            PublicInputSizeMismatch => "Public input size does not match the verifier key.",
            TranscriptError => "Malformed proof transcript.",
            SumcheckRoundError => "Sumcheck round check failed.",
            SumcheckEvaluationError => "Sumcheck final evaluation check failed.",
            PermutationError => "Copy constraints do not form a permutation.",
            VerificationError => "Verification error.",
            DivisionByZero => "Division by zero.",
            FuncParamsError => "Function params error",
            ProofErrorInvalidWitness => "Proof error invalid witness.",
            PCSProveEvalError => "Cannot compute the opening proof.",
            DegreeError => {
                "The degree of the polynomial is higher than the maximum degree supported."
            }
            CommitmentError => "Commitment error.",
        })
    }
}

impl error::Error for HonkError {
    #[cfg(feature = "std")]
    fn description(&self) -> &str {
        Box::leak(format!("{}", self).into_boxed_str())
    }
}

impl From<AlgebraError> for HonkError {
    fn from(e: AlgebraError) -> HonkError {
        HonkError::Algebra(e)
    }
}

impl From<PolyComSchemeError> for HonkError {
    fn from(e: PolyComSchemeError) -> HonkError {
        HonkError::PolyCom(e)
    }
}
