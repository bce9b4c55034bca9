use crate::circuit::arithmetization::{PolyId, PolynomialValues, NUM_POLYNOMIALS};
use crate::errors::{HonkError, Result};
use crate::poly_commit::{gemini::fold_multilinear, transcript::ProverTranscript};
use crate::sumcheck::{
    relations::{accumulate_relations, RelationParameters, MAX_RELATION_LENGTH},
    univariate::Univariate,
    SumcheckOutput, SUMCHECK_EVALUATIONS_LABEL, SUMCHECK_UNIVARIATE_LABEL, SUMCHECK_U_LABEL,
};
use honk_algebra::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The sumcheck prover, owning the tables it folds round by round.
pub struct SumcheckProver<'a, F> {
    tables: Vec<Vec<F>>,
    num_vars: usize,
    params: &'a RelationParameters<F>,
}

fn add_evaluations<F: Scalar>(
    mut a: [F; MAX_RELATION_LENGTH],
    b: [F; MAX_RELATION_LENGTH],
) -> [F; MAX_RELATION_LENGTH] {
    for (x, y) in a.iter_mut().zip(b.iter()) {
        x.add_assign(y);
    }
    a
}

impl<'a, F: Scalar> SumcheckProver<'a, F> {
    /// Take the tables of every polynomial, in `PolyId` order, each of the
    /// same power of two length, at least 2.
    pub fn new(tables: Vec<Vec<F>>, params: &'a RelationParameters<F>) -> Result<Self> {
        if tables.len() != NUM_POLYNOMIALS {
            return Err(HonkError::FuncParamsError);
        }
        let n = tables[0].len();
        if n < 2 || !n.is_power_of_two() || tables.iter().any(|t| t.len() != n) {
            return Err(HonkError::FuncParamsError);
        }
        Ok(Self {
            tables,
            num_vars: n.trailing_zeros() as usize,
            params,
        })
    }

    /// The number of variables, i.e. rounds.
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// The contributions of edge `j` at `X = 0, 1, ..., MAX_RELATION_LENGTH - 1`.
    fn edge_evaluations(&self, j: usize, weight: &F) -> [F; MAX_RELATION_LENGTH] {
        let mut row = PolynomialValues::zero();
        let mut evaluations = [F::zero(); MAX_RELATION_LENGTH];
        for (k, evaluation) in evaluations.iter_mut().enumerate() {
            let x = F::from(k as u64);
            for (id, table) in PolyId::ALL.iter().zip(self.tables.iter()) {
                let lo = table[2 * j];
                let hi = table[2 * j + 1];
                row[*id] = lo + &(x * &(hi - &lo));
            }
            accumulate_relations(evaluation, &row, self.params, weight);
        }
        evaluations
    }

    /// Compute `sum_j weight^j * F(edge_j(X))` in evaluation form.
    pub fn compute_univariate(&self, weight: &F) -> Univariate<F, MAX_RELATION_LENGTH> {
        let num_edges = self.tables[0].len() / 2;
        let mut weights = Vec::with_capacity(num_edges);
        let mut cur = F::one();
        for _ in 0..num_edges {
            weights.push(cur);
            cur.mul_assign(weight);
        }

        #[cfg(not(feature = "parallel"))]
        let evaluations = weights
            .iter()
            .enumerate()
            .map(|(j, w)| self.edge_evaluations(j, w))
            .fold([F::zero(); MAX_RELATION_LENGTH], add_evaluations);

        #[cfg(feature = "parallel")]
        let evaluations = weights
            .par_iter()
            .enumerate()
            .map(|(j, w)| self.edge_evaluations(j, w))
            .reduce(|| [F::zero(); MAX_RELATION_LENGTH], add_evaluations);

        Univariate::new(evaluations)
    }

    /// Bind the lowest remaining variable of every table to `u`.
    pub fn partially_evaluate(&mut self, u: &F) {
        #[cfg(not(feature = "parallel"))]
        self.tables
            .iter_mut()
            .for_each(|table| *table = fold_multilinear(table, u));

        #[cfg(feature = "parallel")]
        self.tables
            .par_iter_mut()
            .for_each(|table| *table = fold_multilinear(table, u));
    }

    /// Run every round, then send the evaluations at the challenge point.
    pub fn prove(mut self, transcript: &mut ProverTranscript) -> Result<SumcheckOutput<F>> {
        let mut challenge = Vec::with_capacity(self.num_vars);
        // zeta^{2^l}
        let mut zeta_pow = self.params.zeta;
        // prod_{k < l} (1 + u_k * (zeta^{2^k} - 1))
        let mut pow_scaling = F::one();

        for _ in 0..self.num_vars {
            let next_zeta_pow = zeta_pow.square();
            let mut univariate = self.compute_univariate(&next_zeta_pow);
            for evaluation in univariate.evaluations.iter_mut() {
                evaluation.mul_assign(&pow_scaling);
            }
            transcript.send_to_verifier(SUMCHECK_UNIVARIATE_LABEL, &univariate);

            let u: F = transcript.get_challenge(SUMCHECK_U_LABEL);
            self.partially_evaluate(&u);
            pow_scaling.mul_assign(&(F::one() + &(u * &(zeta_pow - &F::one()))));
            zeta_pow = next_zeta_pow;
            challenge.push(u);
        }

        let claimed_evaluations =
            PolynomialValues::new(self.tables.iter().map(|t| t[0]).collect())?;
        transcript.send_to_verifier(SUMCHECK_EVALUATIONS_LABEL, &claimed_evaluations);

        Ok(SumcheckOutput {
            challenge,
            claimed_evaluations,
        })
    }
}
