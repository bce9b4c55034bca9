use ark_std::fmt;

/// Polynomial commitment scheme errors.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PolyComSchemeError {
    /// It is not possible to compute the proof as F(x) != y.
    PCSProveEvalError,
    /// The opening does not pass the pairing check.
    PCSVerifyEvalError,
    /// The degree of the polynomial is higher than the maximum degree allowed.
    DegreeError,
    /// The public parameters cannot be decoded.
    DeserializationError,
}

impl fmt::Display for PolyComSchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PolyComSchemeError::PCSProveEvalError => {
                "It is not possible to compute the proof as F(x) != y."
            }
            PolyComSchemeError::PCSVerifyEvalError => "The opening proof is invalid.",
            PolyComSchemeError::DegreeError => {
                "The degree of the polynomial is higher than the maximum degree allowed."
            }
            PolyComSchemeError::DeserializationError => "Cannot decode the public parameters.",
        })
    }
}
