//! The relations of standard Honk. Each relation is a polynomial identity in the
//! values of one row that vanishes on every row of a satisfying trace.
use crate::circuit::arithmetization::{PolyId, PolynomialValues};
use crate::errors::{HonkError, Result};
use honk_algebra::prelude::*;

/// The number of evaluations needed to represent a round univariate, one more
/// than the highest relation degree.
pub const MAX_RELATION_LENGTH: usize = max_relation_length(&Relation::ALL);

const fn max_relation_length(relations: &[Relation]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < relations.len() {
        let length = relations[i].relation_length();
        if length > max {
            max = length;
        }
        i += 1;
    }
    max
}

/// The challenges the relations depend on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelationParameters<F> {
    /// the relation batching challenge.
    pub alpha: F,
    /// the permutation challenge multiplying the slot indices.
    pub beta: F,
    /// the permutation challenge added to every slot.
    pub gamma: F,
    /// the challenge of the power polynomial.
    pub zeta: F,
    /// the value of the grand product over all slots.
    pub public_input_delta: F,
}

/// The relations of standard Honk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// `q_m * w_1 * w_2 + q_1 * w_1 + q_2 * w_2 + q_3 * w_3 + q_c`
    Arithmetic,
    /// `z * prod_j (w_j + beta * id_j + gamma) - (z_shift + L_last * delta) * prod_j (w_j + beta * sigma_j + gamma)`
    GrandProductComputation,
    /// `L_first * (z - 1)`
    GrandProductInitialization,
}

impl Relation {
    /// The relations, in batching order.
    pub const ALL: [Relation; 3] = [
        Relation::Arithmetic,
        Relation::GrandProductComputation,
        Relation::GrandProductInitialization,
    ];

    /// The degree of the relation plus one.
    pub const fn relation_length(self) -> usize {
        match self {
            Relation::Arithmetic => 4,
            Relation::GrandProductComputation => 5,
            Relation::GrandProductInitialization => 3,
        }
    }

    /// Add `scaling` times the value of the relation on `row` to `acc`.
    pub fn add_edge_contribution<F: Scalar>(
        self,
        acc: &mut F,
        row: &PolynomialValues<F>,
        params: &RelationParameters<F>,
        scaling: &F,
    ) {
        let value = match self {
            Relation::Arithmetic => {
                let w_1 = row[PolyId::W1];
                let w_2 = row[PolyId::W2];
                row[PolyId::QM] * &w_1 * &w_2
                    + &(row[PolyId::Q1] * &w_1)
                    + &(row[PolyId::Q2] * &w_2)
                    + &(row[PolyId::Q3] * &row[PolyId::W3])
                    + &row[PolyId::QC]
            }
            Relation::GrandProductComputation => {
                let mut numerator = row[PolyId::ZPerm];
                let mut denominator =
                    row[PolyId::ZPermShift] + &(row[PolyId::LagrangeLast] * &params.public_input_delta);
                for (wire, id, sigma) in izip!(&PolyId::WIRES, &PolyId::IDS, &PolyId::SIGMAS) {
                    let w = row[*wire] + &params.gamma;
                    numerator.mul_assign(&(w + &(params.beta * &row[*id])));
                    denominator.mul_assign(&(w + &(params.beta * &row[*sigma])));
                }
                numerator - &denominator
            }
            Relation::GrandProductInitialization => {
                row[PolyId::LagrangeFirst] * &(row[PolyId::ZPerm] - &F::one())
            }
        };
        acc.add_assign(&(value * scaling));
    }
}

/// Add `scaling * sum_k alpha^k R_k(row)` to `acc`.
pub fn accumulate_relations<F: Scalar>(
    acc: &mut F,
    row: &PolynomialValues<F>,
    params: &RelationParameters<F>,
    scaling: &F,
) {
    let mut alpha_pow = *scaling;
    for relation in Relation::ALL.iter() {
        relation.add_edge_contribution(acc, row, params, &alpha_pow);
        alpha_pow.mul_assign(&params.alpha);
    }
}

/// Return `sum_k alpha^k R_k(row)`.
pub fn evaluate_relations<F: Scalar>(row: &PolynomialValues<F>, params: &RelationParameters<F>) -> F {
    let mut acc = F::zero();
    accumulate_relations(&mut acc, row, params, &F::one());
    acc
}

/// Compute the permutation grand product
/// ```text
///     z[0] = 1,  z[i + 1] = z[i] * prod_j (w_j[i] + beta * id_j[i] + gamma)
///                                / prod_j (w_j[i] + beta * sigma_j[i] + gamma)
/// ```
/// Returns `z` and its shift `z_shift[i] = z[i + 1]`, `z_shift[n - 1] = 0`.
pub fn compute_grand_product<F: Scalar>(
    wires: &[Vec<F>],
    ids: &[Vec<F>],
    sigmas: &[Vec<F>],
    beta: &F,
    gamma: &F,
) -> Result<(Vec<F>, Vec<F>)> {
    let n = wires.first().map(|w| w.len()).unwrap_or(0);
    if n == 0
        || wires.len() != ids.len()
        || wires.len() != sigmas.len()
        || wires
            .iter()
            .chain(ids.iter())
            .chain(sigmas.iter())
            .any(|t| t.len() != n)
    {
        return Err(HonkError::FuncParamsError);
    }

    let mut z = Vec::with_capacity(n);
    z.push(F::one());
    for i in 0..n - 1 {
        let mut numerator = F::one();
        let mut denominator = F::one();
        for (w, id, sigma) in izip!(wires, ids, sigmas) {
            numerator.mul_assign(&(w[i] + &(*beta * &id[i]) + gamma));
            denominator.mul_assign(&(w[i] + &(*beta * &sigma[i]) + gamma));
        }
        let denominator_inv = denominator.inv().map_err(|_| HonkError::DivisionByZero)?;
        z.push(z[i] * &numerator * &denominator_inv);
    }

    let mut z_shift = z[1..].to_vec();
    z_shift.push(F::zero());
    Ok((z, z_shift))
}
