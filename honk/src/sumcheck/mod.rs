//! The sumcheck protocol for the zero-check of the batched relations.
//!
//! The prover shows `sum_i pow_zeta(i) * F(row_i) = 0` over the hypercube, with
//! `pow_zeta(i) = zeta^i` and `F = sum_k alpha^k R_k`. Variables are bound
//! lowest bit first, so round `l` pairs the rows `2j` and `2j + 1` of the
//! partially evaluated tables.
use crate::circuit::arithmetization::PolynomialValues;

/// Module for the sumcheck prover.
pub mod prover;

/// Module for the relations.
pub mod relations;

/// Module for univariate polynomials in evaluation form.
pub mod univariate;

/// Module for the sumcheck verifier.
pub mod verifier;

pub(crate) const SUMCHECK_UNIVARIATE_LABEL: &[u8] = b"Sumcheck:univariate";
pub(crate) const SUMCHECK_U_LABEL: &[u8] = b"Sumcheck:u";
pub(crate) const SUMCHECK_EVALUATIONS_LABEL: &[u8] = b"Sumcheck:evaluations";

/// The output of the sumcheck: the challenge point and the claimed
/// evaluations of every polynomial at it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SumcheckOutput<F> {
    /// `u_0, ..., u_{d-1}`.
    pub challenge: Vec<F>,
    /// the multilinear evaluations at the challenge, in `PolyId` order.
    pub claimed_evaluations: PolynomialValues<F>,
}
