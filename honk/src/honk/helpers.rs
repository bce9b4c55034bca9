use crate::circuit::arithmetization::{PolyId, NUM_POLYNOMIALS, NUM_PRECOMPUTED, NUM_UNSHIFTED};
use crate::errors::{HonkError, Result};
use crate::poly_commit::{field_polynomial::FpPolynomial, pcs::PolyComScheme};
use honk_algebra::prelude::*;

/// Commit to the polynomial whose coefficients are `table`.
pub(crate) fn commit_table<PCS: PolyComScheme>(
    pcs: &PCS,
    table: &[PCS::Field],
) -> Result<PCS::Commitment> {
    if table.len() > pcs.max_degree() + 1 {
        return Err(HonkError::DegreeError);
    }
    pcs.commit(&FpPolynomial::from_coefs(table.to_vec()))
        .map_err(|_| HonkError::CommitmentError)
}

/// `1, rho, rho^2, ..., rho^{NUM_POLYNOMIALS - 1}`.
fn rho_powers<F: Scalar>(rho: &F) -> Vec<F> {
    let mut powers = Vec::with_capacity(NUM_POLYNOMIALS);
    let mut cur = F::one();
    for _ in 0..NUM_POLYNOMIALS {
        powers.push(cur);
        cur.mul_assign(rho);
    }
    powers
}

/// Batch the tables, in `PolyId` order, into the unshifted table
/// `F = sum_{i < 17} rho^i P_i` and the to-be-shifted table
/// `G = rho^17 (z - L_first)`, so that `F + shift(G)` evaluates to the
/// batched claimed evaluations.
pub(crate) fn batch_tables<F: Scalar>(tables: &[Vec<F>], rho: &F) -> Result<(Vec<F>, Vec<F>)> {
    if tables.len() < NUM_UNSHIFTED {
        return Err(HonkError::FuncParamsError);
    }
    let n = tables[0].len();
    let powers = rho_powers(rho);

    let mut unshifted = vec![F::zero(); n];
    for (table, power) in tables.iter().take(NUM_UNSHIFTED).zip(powers.iter()) {
        if table.len() != n {
            return Err(HonkError::FuncParamsError);
        }
        for (acc, value) in unshifted.iter_mut().zip(table.iter()) {
            acc.add_assign(&(*value * power));
        }
    }

    // z[0] = 1, so the shifted table starts with a zero
    let scaling = powers[PolyId::ZPermShift.index()];
    let to_be_shifted = tables[PolyId::ZPerm.index()]
        .iter()
        .zip(tables[PolyId::LagrangeFirst.index()].iter())
        .map(|(z, l)| (*z - l) * &scaling)
        .collect();
    Ok((unshifted, to_be_shifted))
}

/// `sum_i rho^i eval_i` over every claimed evaluation.
pub(crate) fn batch_evaluations<F: Scalar>(evaluations: &[F], rho: &F) -> F {
    evaluations
        .iter()
        .zip(rho_powers(rho).iter())
        .fold(F::zero(), |acc, (eval, power)| acc + &(*eval * power))
}

/// The commitments to the batched tables of `batch_tables`.
pub(crate) fn batch_commitments<PCS: PolyComScheme>(
    precomputed: &[PCS::Commitment],
    wires: &[PCS::Commitment],
    z_perm: &PCS::Commitment,
    rho: &PCS::Field,
) -> Result<(PCS::Commitment, PCS::Commitment)> {
    if precomputed.len() != NUM_PRECOMPUTED
        || precomputed.len() + wires.len() + 1 != NUM_UNSHIFTED
    {
        return Err(HonkError::FuncParamsError);
    }
    let powers = rho_powers(rho);
    let commitments = precomputed
        .iter()
        .chain(wires.iter())
        .chain(ark_std::iter::once(z_perm))
        .collect::<Vec<_>>();
    let unshifted = PCS::linear_combination(&commitments, &powers[..NUM_UNSHIFTED]);

    let lagrange_first = &precomputed[PolyId::LagrangeFirst.index()];
    let to_be_shifted = PCS::linear_combination(
        &[z_perm, lagrange_first],
        &[
            powers[PolyId::ZPermShift.index()],
            powers[PolyId::ZPermShift.index()].neg(),
        ],
    );
    Ok((unshifted, to_be_shifted))
}
