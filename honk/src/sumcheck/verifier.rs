use crate::errors::{HonkError, Result};
use crate::poly_commit::transcript::VerifierTranscript;
use crate::circuit::arithmetization::PolynomialValues;
use crate::sumcheck::{
    relations::{evaluate_relations, RelationParameters, MAX_RELATION_LENGTH},
    univariate::Univariate,
    SumcheckOutput, SUMCHECK_EVALUATIONS_LABEL, SUMCHECK_UNIVARIATE_LABEL, SUMCHECK_U_LABEL,
};
use honk_algebra::prelude::*;

/// The sumcheck verifier, tracking the running claim.
pub struct SumcheckVerifier<'a, F> {
    num_vars: usize,
    params: &'a RelationParameters<F>,
    target: F,
    zeta_pow: F,
    pow_scaling: F,
}

impl<'a, F: Scalar> SumcheckVerifier<'a, F> {
    /// Start with the claim that the weighted sum is zero.
    pub fn new(num_vars: usize, params: &'a RelationParameters<F>) -> Self {
        Self {
            num_vars,
            params,
            target: F::zero(),
            zeta_pow: params.zeta,
            pow_scaling: F::one(),
        }
    }

    /// Check `T(0) + zeta^{2^l} * T(1)` against the running claim.
    pub fn check_sum(&self, univariate: &Univariate<F, MAX_RELATION_LENGTH>) -> bool {
        let sum = univariate.evaluations[0] + &(self.zeta_pow * &univariate.evaluations[1]);
        sum == self.target
    }

    /// Move the claim to `(1 + u * (zeta^{2^l} - 1)) * T(u)` and to the next round.
    pub fn compute_next_target_sum(
        &mut self,
        univariate: &Univariate<F, MAX_RELATION_LENGTH>,
        u: &F,
    ) -> Result<()> {
        let factor = F::one() + &(*u * &(self.zeta_pow - &F::one()));
        self.target = factor * &univariate.evaluate(u)?;
        self.pow_scaling.mul_assign(&factor);
        self.zeta_pow = self.zeta_pow.square();
        Ok(())
    }

    /// Run every round and the final check against the relations.
    pub fn verify(mut self, transcript: &mut VerifierTranscript) -> Result<SumcheckOutput<F>> {
        let mut challenge = Vec::with_capacity(self.num_vars);
        for _ in 0..self.num_vars {
            let univariate: Univariate<F, MAX_RELATION_LENGTH> =
                transcript.receive_from_prover(SUMCHECK_UNIVARIATE_LABEL)?;
            if !self.check_sum(&univariate) {
                return Err(HonkError::SumcheckRoundError);
            }
            let u: F = transcript.get_challenge(SUMCHECK_U_LABEL);
            self.compute_next_target_sum(&univariate, &u)?;
            challenge.push(u);
        }

        let claimed_evaluations: PolynomialValues<F> =
            transcript.receive_from_prover(SUMCHECK_EVALUATIONS_LABEL)?;
        let full_honk_relation = evaluate_relations(&claimed_evaluations, self.params);
        if self.pow_scaling * &full_honk_relation != self.target {
            return Err(HonkError::SumcheckEvaluationError);
        }

        Ok(SumcheckOutput {
            challenge,
            claimed_evaluations,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::circuit::arithmetization::NUM_POLYNOMIALS;
    use crate::errors::HonkError;
    use crate::poly_commit::{
        gemini::evaluate_multilinear,
        transcript::{ProverTranscript, VerifierTranscript},
    };
    use crate::sumcheck::{
        prover::SumcheckProver, test_utils::honest_tables, verifier::SumcheckVerifier,
    };
    use honk_algebra::{bn254::BN254Scalar, prelude::*};
    use merlin::Transcript;

    type F = BN254Scalar;

    #[test]
    fn test_sumcheck_honest() {
        let mut prng = test_rng();
        let (tables, params) = honest_tables(&mut prng, false);

        let mut prover_transcript = Transcript::new(b"Sumcheck Test");
        let mut prover = ProverTranscript::new(&mut prover_transcript);
        let sumcheck = SumcheckProver::new(tables.clone(), &params).unwrap();
        let num_vars = sumcheck.num_vars();
        assert_eq!(num_vars, 3);
        let output = sumcheck.prove(&mut prover).unwrap();
        let proof = prover.into_proof_data();
        assert_eq!(proof.len(), (num_vars * 5 + NUM_POLYNOMIALS) * 32);

        for (table, eval) in tables
            .iter()
            .zip(output.claimed_evaluations.as_slice().iter())
        {
            assert_eq!(
                evaluate_multilinear(table, &output.challenge).unwrap(),
                *eval
            );
        }

        let mut verifier_transcript = Transcript::new(b"Sumcheck Test");
        let mut verifier = VerifierTranscript::new(&mut verifier_transcript, &proof);
        let verifier_output = SumcheckVerifier::new(num_vars, &params)
            .verify(&mut verifier)
            .unwrap();
        assert!(verifier.finish().is_ok());
        assert_eq!(verifier_output, output);
    }

    #[test]
    fn test_sumcheck_wrong_witness() {
        let mut prng = test_rng();
        let (tables, params) = honest_tables(&mut prng, true);

        let mut prover_transcript = Transcript::new(b"Sumcheck Test");
        let mut prover = ProverTranscript::new(&mut prover_transcript);
        let sumcheck = SumcheckProver::new(tables, &params).unwrap();
        let num_vars = sumcheck.num_vars();
        sumcheck.prove(&mut prover).unwrap();
        let proof = prover.into_proof_data();

        let mut verifier_transcript = Transcript::new(b"Sumcheck Test");
        let mut verifier = VerifierTranscript::new(&mut verifier_transcript, &proof);
        let res = SumcheckVerifier::new(num_vars, &params).verify(&mut verifier);
        assert_eq!(res, Err(HonkError::SumcheckRoundError));
    }

    #[test]
    fn test_sumcheck_tampered_evaluations() {
        let mut prng = test_rng();
        let (tables, params) = honest_tables(&mut prng, false);

        let mut prover_transcript = Transcript::new(b"Sumcheck Test");
        let mut prover = ProverTranscript::new(&mut prover_transcript);
        let sumcheck = SumcheckProver::new(tables, &params).unwrap();
        let num_vars = sumcheck.num_vars();
        sumcheck.prove(&mut prover).unwrap();
        let mut proof = prover.into_proof_data();
        // the first byte of the first claimed evaluation, little endian
        let offset = num_vars * 5 * 32;
        proof[offset] ^= 1;

        let mut verifier_transcript = Transcript::new(b"Sumcheck Test");
        let mut verifier = VerifierTranscript::new(&mut verifier_transcript, &proof);
        let res = SumcheckVerifier::new(num_vars, &params).verify(&mut verifier);
        assert_eq!(res, Err(HonkError::SumcheckEvaluationError));
    }
}
