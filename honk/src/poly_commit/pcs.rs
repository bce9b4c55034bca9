use crate::poly_commit::{
    errors::PolyComSchemeError, field_polynomial::FpPolynomial, transcript::TranscriptElement,
};
use ark_std::fmt::Debug;
use honk_algebra::prelude::*;
use serde::{de::DeserializeOwned, Serialize};

/// The trait for homomorphic polynomial commitment field.
pub trait HomomorphicPolyComElem: Sized {
    /// This is the scalar field of the polynomial.
    type Scalar;

    /// Get base (generator) of the group, i.e. the commitment of the constant one.
    fn get_base() -> Self;

    /// Get identity of the group.
    fn get_identity() -> Self;

    /// Add the underlying polynomials.
    fn add(&self, other: &Self) -> Self;

    /// Add assign the underlying polynomials.
    fn add_assign(&mut self, other: &Self);

    /// Subtract the underlying polynomials.
    fn sub(&self, other: &Self) -> Self;

    /// Subtract assign the underlying polynomials.
    fn sub_assign(&mut self, other: &Self);

    /// Multiply underlying polynomial by scalar `exp`.
    fn mul(&self, exp: &Self::Scalar) -> Self;

    /// Multiply underlying polynomial by scalar `exp`.
    fn mul_assign(&mut self, exp: &Self::Scalar);
}

/// Trait for polynomial commitment scheme.
pub trait PolyComScheme: Sized {
    /// Type of prime field.
    type Field: Scalar;

    /// Type of commitment produces, need to implement `HomomorphicPolyComElem`.
    type Commitment: HomomorphicPolyComElem<Scalar = Self::Field>
        + TranscriptElement
        + Debug
        + PartialEq
        + Eq
        + Clone
        + Serialize
        + DeserializeOwned;

    /// Return the max degree supported by the public parameters.
    fn max_degree(&self) -> usize;

    /// Commits to the polynomial, commitment is binding.
    fn commit(
        &self,
        polynomial: &FpPolynomial<Self::Field>,
    ) -> core::result::Result<Self::Commitment, PolyComSchemeError>;

    /// Evaluate the polynomial.
    fn eval(&self, poly: &FpPolynomial<Self::Field>, point: &Self::Field) -> Self::Field {
        poly.eval(point)
    }

    /// Compute the opening proof of `poly` at `x`.
    fn prove(
        &self,
        poly: &FpPolynomial<Self::Field>,
        x: &Self::Field,
        max_degree: usize,
    ) -> core::result::Result<Self::Commitment, PolyComSchemeError>;

    /// Verify an evaluation proof that polynomial inside commitment
    /// evaluates to `eval` on input `point`.
    fn verify(
        &self,
        cm: &Self::Commitment,
        degree: usize,
        point: &Self::Field,
        eval: &Self::Field,
        proof: &Self::Commitment,
    ) -> core::result::Result<(), PolyComSchemeError>;

    /// Shrink this to only for verifier use.
    fn shrink_to_verifier_only(&self) -> Self;

    /// Compute `\sum_i scalars[i] * commitments[i]`.
    fn linear_combination(
        commitments: &[&Self::Commitment],
        scalars: &[Self::Field],
    ) -> Self::Commitment {
        commitments.iter().zip(scalars.iter()).fold(
            Self::Commitment::get_identity(),
            |mut acc, (cm, scalar)| {
                acc.add_assign(&cm.mul(scalar));
                acc
            },
        )
    }
}

/// A polynomial held by the prover, claimed to evaluate to `eval` at `point`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProverOpeningClaim<F: Scalar> {
    /// The polynomial.
    pub polynomial: FpPolynomial<F>,
    /// The opening point.
    pub point: F,
    /// The claimed evaluation.
    pub eval: F,
}

/// The verifier's view of an opening claim: `commitment` opens to `eval` at `point`.
#[derive(Debug)]
pub struct OpeningClaim<PCS: PolyComScheme> {
    /// The commitment.
    pub commitment: PCS::Commitment,
    /// The opening point.
    pub point: PCS::Field,
    /// The claimed evaluation.
    pub eval: PCS::Field,
}

impl<PCS: PolyComScheme> Clone for OpeningClaim<PCS> {
    fn clone(&self) -> Self {
        Self {
            commitment: self.commitment.clone(),
            point: self.point,
            eval: self.eval,
        }
    }
}
