//! Batch several univariate opening claims, possibly at distinct points, into a
//! single claim that a polynomial vanishes at a random point.

use crate::errors::{HonkError, Result};
use crate::poly_commit::{
    field_polynomial::FpPolynomial,
    pcs::{HomomorphicPolyComElem, OpeningClaim, PolyComScheme, ProverOpeningClaim},
    transcript::{ProverTranscript, VerifierTranscript},
};
use honk_algebra::prelude::*;

const SHPLONK_NU_LABEL: &[u8] = b"Shplonk:nu";
const SHPLONK_QUOTIENT_LABEL: &[u8] = b"Shplonk:Q";
const SHPLONK_Z_LABEL: &[u8] = b"Shplonk:z";

/// Return `nu^i / (z - x_i)` for each opening point `x_i`.
fn claim_weights<F: Scalar>(points: &[F], nu: &F, z: &F) -> Option<Vec<F>> {
    let mut nu_pow = F::one();
    let mut weights = Vec::with_capacity(points.len());
    for x in points {
        let inv = (*z - x).inv().ok()?;
        weights.push(nu_pow * &inv);
        nu_pow.mul_assign(nu);
    }
    Some(weights)
}

/// The prover side of Shplonk.
///
/// Sends `[Q]` for `Q = sum_i nu^i (f_i - v_i) / (X - x_i)` and returns the
/// claim that `Q - sum_i nu^i / (z - x_i) (f_i - v_i)` evaluates to zero at `z`.
pub fn shplonk_prove<PCS: PolyComScheme>(
    transcript: &mut ProverTranscript,
    pcs: &PCS,
    claims: &[ProverOpeningClaim<PCS::Field>],
) -> Result<ProverOpeningClaim<PCS::Field>> {
    let nu: PCS::Field = transcript.get_challenge(SHPLONK_NU_LABEL);

    let mut quotient = FpPolynomial::zero();
    let mut nu_pow = PCS::Field::one();
    for claim in claims {
        let (q, _) = claim.polynomial.divide_by_linear(&claim.point);
        quotient.add_scaled_assign(&q, &nu_pow);
        nu_pow.mul_assign(&nu);
    }
    let quotient_cm = pcs
        .commit(&quotient)
        .map_err(|_| HonkError::CommitmentError)?;
    transcript.send_to_verifier(SHPLONK_QUOTIENT_LABEL, &quotient_cm);

    let z: PCS::Field = transcript.get_challenge(SHPLONK_Z_LABEL);

    let points = claims.iter().map(|c| c.point).collect::<Vec<_>>();
    let weights = claim_weights(&points, &nu, &z).ok_or(HonkError::DivisionByZero)?;

    let mut batched = quotient;
    for (claim, weight) in claims.iter().zip(weights.iter()) {
        let mut shifted = claim.polynomial.clone();
        shifted.sub_assign(&FpPolynomial::from_coefs(vec![claim.eval]));
        batched.add_scaled_assign(&shifted, &weight.neg());
    }

    Ok(ProverOpeningClaim {
        polynomial: batched,
        point: z,
        eval: PCS::Field::zero(),
    })
}

/// The verifier side of Shplonk: fold the claims into one via the homomorphism
/// of the commitments.
pub fn shplonk_verify<PCS: PolyComScheme>(
    transcript: &mut VerifierTranscript,
    claims: &[OpeningClaim<PCS>],
) -> Result<OpeningClaim<PCS>> {
    let nu: PCS::Field = transcript.get_challenge(SHPLONK_NU_LABEL);
    let quotient_cm: PCS::Commitment = transcript.receive_from_prover(SHPLONK_QUOTIENT_LABEL)?;
    let z: PCS::Field = transcript.get_challenge(SHPLONK_Z_LABEL);

    let points = claims.iter().map(|c| c.point).collect::<Vec<_>>();
    let weights = claim_weights(&points, &nu, &z).ok_or(HonkError::VerificationError)?;

    let mut commitment = quotient_cm;
    let mut constant = PCS::Field::zero();
    for (claim, weight) in claims.iter().zip(weights.iter()) {
        commitment.sub_assign(&claim.commitment.mul(weight));
        constant.add_assign(&(claim.eval * weight));
    }
    commitment.add_assign(&PCS::Commitment::get_base().mul(&constant));

    Ok(OpeningClaim {
        commitment,
        point: z,
        eval: PCS::Field::zero(),
    })
}

#[cfg(test)]
mod test {
    use crate::poly_commit::{
        field_polynomial::FpPolynomial,
        kzg_poly_com::{kzg_open, kzg_reduce, KZGCommitmentSchemeBN254},
        pcs::{OpeningClaim, PolyComScheme, ProverOpeningClaim},
        shplonk::{shplonk_prove, shplonk_verify},
        transcript::{ProverTranscript, VerifierTranscript},
    };
    use honk_algebra::{bn254::BN254Scalar, prelude::*};
    use merlin::Transcript;

    type F = BN254Scalar;

    fn random_claims(
        pcs: &KZGCommitmentSchemeBN254,
        prng: &mut (impl CryptoRng + RngCore),
    ) -> (
        Vec<ProverOpeningClaim<F>>,
        Vec<OpeningClaim<KZGCommitmentSchemeBN254>>,
    ) {
        let mut prover_claims = vec![];
        let mut claims = vec![];
        for degree in [3usize, 7, 5] {
            let polynomial = FpPolynomial::<F>::random(prng, degree);
            let point = F::from(prng.next_u64());
            let eval = polynomial.eval(&point);
            claims.push(OpeningClaim {
                commitment: pcs.commit(&polynomial).unwrap(),
                point,
                eval,
            });
            prover_claims.push(ProverOpeningClaim {
                polynomial,
                point,
                eval,
            });
        }
        (prover_claims, claims)
    }

    #[test]
    fn test_shplonk_then_kzg() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(16, &mut prng);
        let (prover_claims, claims) = random_claims(&pcs, &mut prng);

        let mut prover_transcript = Transcript::new(b"Shplonk Test");
        let mut prover = ProverTranscript::new(&mut prover_transcript);
        let batched = shplonk_prove(&mut prover, &pcs, &prover_claims).unwrap();
        assert!(batched.polynomial.eval(&batched.point).is_zero());
        kzg_open(&mut prover, &pcs, &batched).unwrap();
        let proof = prover.into_proof_data();

        let verifier_pcs = pcs.shrink_to_verifier_only();
        let mut verifier_transcript = Transcript::new(b"Shplonk Test");
        let mut verifier = VerifierTranscript::new(&mut verifier_transcript, &proof);
        let claim = shplonk_verify(&mut verifier, &claims).unwrap();
        assert_eq!(claim.point, batched.point);
        assert_eq!(claim.commitment, pcs.commit(&batched.polynomial).unwrap());
        let accumulator = kzg_reduce(&mut verifier, claim).unwrap();
        assert!(verifier.finish().is_ok());
        assert!(accumulator.verify(&verifier_pcs).is_ok());
    }

    #[test]
    fn test_shplonk_wrong_eval() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(16, &mut prng);
        let (prover_claims, mut claims) = random_claims(&pcs, &mut prng);
        claims[1].eval.add_assign(&F::one());

        let mut prover_transcript = Transcript::new(b"Shplonk Test");
        let mut prover = ProverTranscript::new(&mut prover_transcript);
        let batched = shplonk_prove(&mut prover, &pcs, &prover_claims).unwrap();
        kzg_open(&mut prover, &pcs, &batched).unwrap();
        let proof = prover.into_proof_data();

        let mut verifier_transcript = Transcript::new(b"Shplonk Test");
        let mut verifier = VerifierTranscript::new(&mut verifier_transcript, &proof);
        let claim = shplonk_verify(&mut verifier, &claims).unwrap();
        let accumulator = kzg_reduce(&mut verifier, claim).unwrap();
        assert!(accumulator.verify(&pcs).is_err());
    }
}
