//! Reduce an evaluation claim about a multilinear polynomial, given by its table
//! of values on the hypercube, to openings of univariate polynomials.
//!
//! A table `t` of length `2^d` is read as the univariate polynomial whose
//! coefficients are `t`. Folding with a challenge `u` pairs up the entries
//! `t[2j]` and `t[2j + 1]`, which binds the lowest variable first. After `d`
//! folds the table is the constant `t(u_0, ..., u_{d-1})`.
//!
//! Shifts are handled on the univariate side: when `g[0] = 0`, the table of
//! `i -> g[i + 1]` is the polynomial `g(X) / X`.

use crate::errors::{HonkError, Result};
use crate::poly_commit::{
    field_polynomial::FpPolynomial,
    pcs::{HomomorphicPolyComElem, OpeningClaim, PolyComScheme, ProverOpeningClaim},
    transcript::{ProverTranscript, VerifierTranscript},
};
use honk_algebra::prelude::*;

const GEMINI_FOLD_LABEL: &[u8] = b"Gemini:FOLD";
const GEMINI_R_LABEL: &[u8] = b"Gemini:r";
const GEMINI_EVAL_LABEL: &[u8] = b"Gemini:a";

/// Bind the lowest variable of a multilinear table to `u`.
pub fn fold_multilinear<F: Scalar>(table: &[F], u: &F) -> Vec<F> {
    table
        .chunks_exact(2)
        .map(|pair| pair[0] + &(*u * &(pair[1] - &pair[0])))
        .collect()
}

/// Evaluate a multilinear table at `point`, lowest variable first.
pub fn evaluate_multilinear<F: Scalar>(table: &[F], point: &[F]) -> Result<F> {
    if table.len() != 1 << point.len() {
        return Err(HonkError::FuncParamsError);
    }
    let mut current = table.to_vec();
    for u in point {
        current = fold_multilinear(&current, u);
    }
    Ok(current[0])
}

/// The table of `i -> table[i + 1]`, with a zero appended.
pub fn shift_table<F: Scalar>(table: &[F]) -> Vec<F> {
    let mut shifted = table.iter().skip(1).copied().collect::<Vec<_>>();
    shifted.push(F::zero());
    shifted
}

/// Compute `r, r^2, r^4, ..., r^{2^{d-1}}`.
fn squares<F: Scalar>(r: &F, d: usize) -> Vec<F> {
    let mut res = Vec::with_capacity(d);
    let mut cur = *r;
    for _ in 0..d {
        res.push(cur);
        cur = cur.square();
    }
    res
}

/// The prover side of Gemini.
///
/// `unshifted` and `to_be_shifted` are the batched tables `F` and `G`; the claim
/// being reduced is `F(u) + shift(G)(u) = v`, which needs `G[0] = 0`.
/// Returns the univariate opening claims to hand to Shplonk.
pub fn gemini_prove<PCS: PolyComScheme>(
    transcript: &mut ProverTranscript,
    pcs: &PCS,
    unshifted: &[PCS::Field],
    to_be_shifted: &[PCS::Field],
    challenge: &[PCS::Field],
) -> Result<Vec<ProverOpeningClaim<PCS::Field>>> {
    let num_vars = challenge.len();
    let n = 1usize << num_vars;
    if num_vars == 0 || unshifted.len() != n || to_be_shifted.len() != n {
        return Err(HonkError::FuncParamsError);
    }
    if !to_be_shifted[0].is_zero() {
        return Err(HonkError::FuncParamsError);
    }

    // A_0 = F + G / X, as a table
    let shifted = shift_table(to_be_shifted);
    let mut folds: Vec<Vec<PCS::Field>> = Vec::with_capacity(num_vars);
    folds.push(
        unshifted
            .iter()
            .zip(shifted.iter())
            .map(|(f, g)| *f + g)
            .collect(),
    );
    for u in challenge.iter().take(num_vars - 1) {
        let next = fold_multilinear(&folds[folds.len() - 1], u);
        folds.push(next);
    }

    let fold_polys = folds
        .iter()
        .map(|t| FpPolynomial::from_coefs(t.clone()))
        .collect::<Vec<_>>();
    for poly in fold_polys.iter().skip(1) {
        let cm = pcs.commit(poly).map_err(|_| HonkError::CommitmentError)?;
        transcript.send_to_verifier(GEMINI_FOLD_LABEL, &cm);
    }

    let r: PCS::Field = transcript.get_challenge(GEMINI_R_LABEL);
    let r_inv = r.inv().map_err(|_| HonkError::DivisionByZero)?;
    let r_squares = squares(&r, num_vars);

    let mut evals = Vec::with_capacity(num_vars);
    for (poly, r_pow) in fold_polys.iter().zip(r_squares.iter()) {
        let eval = poly.eval(&r_pow.neg());
        transcript.send_to_verifier(GEMINI_EVAL_LABEL, &eval);
        evals.push(eval);
    }

    let f_poly = FpPolynomial::from_coefs(unshifted.to_vec());
    let g_poly = FpPolynomial::from_coefs(to_be_shifted.to_vec());
    let g_over_r = g_poly.mul_scalar(&r_inv);

    let a_0_pos = f_poly.add(&g_over_r);
    let a_0_neg = f_poly.sub(&g_over_r);
    let a_0_pos_eval = a_0_pos.eval(&r);

    let mut claims = Vec::with_capacity(num_vars + 1);
    claims.push(ProverOpeningClaim {
        polynomial: a_0_pos,
        point: r,
        eval: a_0_pos_eval,
    });
    claims.push(ProverOpeningClaim {
        polynomial: a_0_neg,
        point: r.neg(),
        eval: evals[0],
    });
    for (poly, r_pow, eval) in izip!(fold_polys, &r_squares, &evals).skip(1) {
        claims.push(ProverOpeningClaim {
            polynomial: poly,
            point: r_pow.neg(),
            eval: *eval,
        });
    }
    Ok(claims)
}

/// The verifier side of Gemini.
///
/// Reads the fold commitments and evaluations, recovers `A_0(r)` from the
/// claimed multilinear evaluation, and returns the opening claims.
pub fn gemini_verify<PCS: PolyComScheme>(
    transcript: &mut VerifierTranscript,
    unshifted_commitment: &PCS::Commitment,
    to_be_shifted_commitment: &PCS::Commitment,
    challenge: &[PCS::Field],
    batched_evaluation: &PCS::Field,
) -> Result<Vec<OpeningClaim<PCS>>> {
    let num_vars = challenge.len();
    if num_vars == 0 {
        return Err(HonkError::FuncParamsError);
    }

    let mut fold_commitments: Vec<PCS::Commitment> = Vec::with_capacity(num_vars - 1);
    for _ in 1..num_vars {
        fold_commitments.push(transcript.receive_from_prover(GEMINI_FOLD_LABEL)?);
    }

    let r: PCS::Field = transcript.get_challenge(GEMINI_R_LABEL);
    let r_inv = r.inv().map_err(|_| HonkError::VerificationError)?;
    let r_squares = squares(&r, num_vars);

    let mut evals: Vec<PCS::Field> = Vec::with_capacity(num_vars);
    for _ in 0..num_vars {
        evals.push(transcript.receive_from_prover(GEMINI_EVAL_LABEL)?);
    }

    // 2X * A_{l+1}(X^2) = A_l(X)((1 - u)X + u) + A_l(-X)((1 - u)X - u)
    let one = PCS::Field::one();
    let two = one + &one;
    let mut next = *batched_evaluation;
    for l in (0..num_vars).rev() {
        let x = r_squares[l];
        let u = challenge[l];
        let one_minus_u_x = (one - &u) * &x;
        let numerator = two * &x * &next - &(evals[l] * &(one_minus_u_x - &u));
        let denominator = (one_minus_u_x + &u)
            .inv()
            .map_err(|_| HonkError::VerificationError)?;
        next = numerator * &denominator;
    }
    let a_0_pos_eval = next;

    let g_over_r = to_be_shifted_commitment.mul(&r_inv);

    let mut claims = Vec::with_capacity(num_vars + 1);
    claims.push(OpeningClaim {
        commitment: unshifted_commitment.add(&g_over_r),
        point: r,
        eval: a_0_pos_eval,
    });
    claims.push(OpeningClaim {
        commitment: unshifted_commitment.sub(&g_over_r),
        point: r.neg(),
        eval: evals[0],
    });
    for (cm, r_pow, eval) in izip!(fold_commitments, &r_squares[1..], &evals[1..]) {
        claims.push(OpeningClaim {
            commitment: cm,
            point: r_pow.neg(),
            eval: *eval,
        });
    }
    Ok(claims)
}

#[cfg(test)]
mod test {
    use crate::poly_commit::{
        field_polynomial::FpPolynomial,
        gemini::{
            evaluate_multilinear, fold_multilinear, gemini_prove, gemini_verify, shift_table,
        },
        kzg_poly_com::KZGCommitmentSchemeBN254,
        pcs::PolyComScheme,
        transcript::{ProverTranscript, VerifierTranscript},
    };
    use honk_algebra::{bn254::BN254Scalar, prelude::*};
    use merlin::Transcript;

    type F = BN254Scalar;

    #[test]
    fn test_fold_and_evaluate() {
        // t = 1 + 2 x_0 + 3 x_1 + 4 x_0 x_1 on the hypercube, x_0 is the low bit
        let table = [1u32, 3, 4, 10].map(F::from).to_vec();
        let u0 = F::from(5u32);
        let u1 = F::from(7u32);
        let folded = fold_multilinear(&table, &u0);
        assert_eq!(folded, vec![F::from(11u32), F::from(34u32)]);

        let expected = F::from(1u32 + 2 * 5 + 3 * 7 + 4 * 35);
        assert_eq!(evaluate_multilinear(&table, &[u0, u1]).unwrap(), expected);
        assert!(evaluate_multilinear(&table, &[u0]).is_err());

        assert_eq!(
            shift_table(&table),
            vec![F::from(3u32), F::from(4u32), F::from(10u32), F::zero()]
        );
    }

    #[test]
    fn test_gemini_claims_are_consistent() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(20, &mut prng);
        let num_vars = 3;
        let n = 1 << num_vars;

        let unshifted = (0..n).map(|_| F::random(&mut prng)).collect::<Vec<_>>();
        let mut to_be_shifted = (0..n).map(|_| F::random(&mut prng)).collect::<Vec<_>>();
        to_be_shifted[0] = F::zero();
        let challenge = (0..num_vars)
            .map(|_| F::random(&mut prng))
            .collect::<Vec<_>>();
        let v = evaluate_multilinear(&unshifted, &challenge).unwrap()
            + evaluate_multilinear(&shift_table(&to_be_shifted), &challenge).unwrap();

        let mut prover_transcript = Transcript::new(b"Gemini Test");
        let mut prover = ProverTranscript::new(&mut prover_transcript);
        let prover_claims =
            gemini_prove(&mut prover, &pcs, &unshifted, &to_be_shifted, &challenge).unwrap();
        let proof = prover.into_proof_data();
        assert_eq!(prover_claims.len(), num_vars + 1);
        for claim in prover_claims.iter() {
            assert_eq!(claim.polynomial.eval(&claim.point), claim.eval);
        }

        let f_cm = pcs.commit(&FpPolynomial::from_coefs(unshifted)).unwrap();
        let g_cm = pcs.commit(&FpPolynomial::from_coefs(to_be_shifted)).unwrap();
        let mut verifier_transcript = Transcript::new(b"Gemini Test");
        let mut verifier = VerifierTranscript::new(&mut verifier_transcript, &proof);
        let claims = gemini_verify::<KZGCommitmentSchemeBN254>(
            &mut verifier,
            &f_cm,
            &g_cm,
            &challenge,
            &v,
        )
        .unwrap();
        assert!(verifier.finish().is_ok());

        assert_eq!(claims.len(), prover_claims.len());
        for (claim, prover_claim) in claims.iter().zip(prover_claims.iter()) {
            assert_eq!(claim.point, prover_claim.point);
            assert_eq!(claim.eval, prover_claim.eval);
            assert_eq!(
                claim.commitment,
                pcs.commit(&prover_claim.polynomial).unwrap()
            );
        }
    }

    #[test]
    fn test_gemini_rejects_nonzero_shift_head() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(8, &mut prng);
        let table = vec![F::one(); 4];
        let challenge = vec![F::one(), F::one()];
        let mut transcript = Transcript::new(b"Gemini Test");
        let mut prover = ProverTranscript::new(&mut transcript);
        assert!(gemini_prove(&mut prover, &pcs, &table, &table, &challenge).is_err());
    }
}
