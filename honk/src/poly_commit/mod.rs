/// Module for polynomial commitment errors.
pub mod errors;

/// Module for field polynomial.
pub mod field_polynomial;

/// Module for the Gemini multilinear-to-univariate reduction.
pub mod gemini;

/// Module for KZG polynomial commitment scheme.
pub mod kzg_poly_com;

/// Module for polynomial commitment traits.
pub mod pcs;

/// Module for the Shplonk batch opening.
pub mod shplonk;

/// Module for the Fiat-Shamir transcript.
pub mod transcript;
