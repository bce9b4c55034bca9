use ark_std::{error, fmt};

/// Failures of the field, group and encoding helpers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlgebraError {
    /// A byte string has the wrong length for the element it should encode.
    WrongLength {
        /// the length the decoder needs.
        expected: usize,
        /// the length it received.
        found: usize,
    },
    /// The bytes are not the canonical encoding of an element.
    InvalidEncoding,
    /// Zero has no multiplicative inverse.
    ZeroInverse,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgebraError::WrongLength { expected, found } => {
                write!(f, "expected {} bytes, found {}", expected, found)
            }
            AlgebraError::InvalidEncoding => f.write_str("not a canonical encoding"),
            AlgebraError::ZeroInverse => f.write_str("zero is not invertible"),
        }
    }
}

impl error::Error for AlgebraError {}

pub(crate) type Result<T> = core::result::Result<T, AlgebraError>;

/// Fail unless `bytes` has exactly `expected` bytes.
pub(crate) fn check_length(bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() == expected {
        Ok(())
    } else {
        Err(AlgebraError::WrongLength {
            expected,
            found: bytes.len(),
        })
    }
}
