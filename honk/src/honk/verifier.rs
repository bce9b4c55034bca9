use crate::circuit::arithmetization::NUM_PRECOMPUTED;
use crate::circuit::permutation::compute_public_input_delta;
use crate::errors::{HonkError, Result};
use crate::honk::{
    helpers::{batch_commitments, batch_evaluations},
    indexer::{HonkProof, HonkVK},
    transcript::{
        transcript_init_honk, ALPHA_LABEL, BETA_LABEL, CIRCUIT_SIZE_LABEL, GAMMA_LABEL,
        PUBLIC_INPUT_LABEL, PUBLIC_INPUT_SIZE_LABEL, RHO_LABEL, WIRE_LABELS, ZETA_LABEL,
        Z_PERM_LABEL,
    },
};
use crate::poly_commit::{
    gemini::gemini_verify,
    kzg_poly_com::kzg_reduce,
    pcs::PolyComScheme,
    shplonk::shplonk_verify,
    transcript::VerifierTranscript,
};
use crate::sumcheck::{relations::RelationParameters, verifier::SumcheckVerifier};
use ark_std::{end_timer, start_timer};
use honk_algebra::prelude::*;
use merlin::Transcript;

/// Verify a proof.
///
/// The transcript must be in the state the prover's transcript was in when the
/// proof was built.
pub fn verifier<PCS: PolyComScheme>(
    transcript: &mut Transcript,
    pcs: &PCS,
    verifier_params: &HonkVK<PCS>,
    proof: &HonkProof,
) -> Result<()> {
    let timer = start_timer!(|| "Honk verifier");
    let n = verifier_params.n;
    if n < 2 || !n.is_power_of_two() || verifier_params.commitments.len() != NUM_PRECOMPUTED {
        return Err(HonkError::FuncParamsError);
    }
    let num_vars = n.trailing_zeros() as usize;

    transcript_init_honk(transcript, verifier_params);
    let mut transcript = VerifierTranscript::new(transcript, &proof.proof_data);

    // 1. read the sizes and the public inputs.
    let circuit_size = transcript.receive_u32(CIRCUIT_SIZE_LABEL)? as usize;
    if circuit_size != n {
        return Err(HonkError::CircuitSizeMismatch);
    }
    let public_input_size = transcript.receive_u32(PUBLIC_INPUT_SIZE_LABEL)? as usize;
    if public_input_size != verifier_params.num_public_inputs {
        return Err(HonkError::PublicInputSizeMismatch);
    }
    let mut public_inputs = Vec::with_capacity(public_input_size);
    for _ in 0..public_input_size {
        let public_input: PCS::Field = transcript.receive_from_prover(PUBLIC_INPUT_LABEL)?;
        public_inputs.push(public_input);
    }

    // 2. read the commitments and recompute the challenges.
    let mut cm_wires: Vec<PCS::Commitment> = Vec::with_capacity(WIRE_LABELS.len());
    for label in WIRE_LABELS.iter() {
        cm_wires.push(transcript.receive_from_prover(*label)?);
    }
    let [beta, gamma]: [PCS::Field; 2] = transcript.get_challenges([BETA_LABEL, GAMMA_LABEL]);
    let public_input_delta = compute_public_input_delta(&public_inputs, &beta, &gamma, n)?;
    let cm_z_perm: PCS::Commitment = transcript.receive_from_prover(Z_PERM_LABEL)?;
    let [alpha, zeta]: [PCS::Field; 2] = transcript.get_challenges([ALPHA_LABEL, ZETA_LABEL]);
    let relation_parameters = RelationParameters {
        alpha,
        beta,
        gamma,
        zeta,
        public_input_delta,
    };

    // 3. check the sumcheck.
    let sumcheck_output =
        SumcheckVerifier::new(num_vars, &relation_parameters).verify(&mut transcript)?;

    // 4. reduce the claimed evaluations to a single pairing check.
    let rho: PCS::Field = transcript.get_challenge(RHO_LABEL);
    let batched_evaluation =
        batch_evaluations(sumcheck_output.claimed_evaluations.as_slice(), &rho);
    let (cm_unshifted, cm_to_be_shifted) = batch_commitments::<PCS>(
        &verifier_params.commitments,
        &cm_wires,
        &cm_z_perm,
        &rho,
    )?;
    let claims = gemini_verify::<PCS>(
        &mut transcript,
        &cm_unshifted,
        &cm_to_be_shifted,
        &sumcheck_output.challenge,
        &batched_evaluation,
    )?;
    let claim = shplonk_verify(&mut transcript, &claims)?;
    let accumulator = kzg_reduce(&mut transcript, claim)?;
    transcript.finish()?;

    let res = accumulator.verify(pcs);
    end_timer!(timer);
    res
}

/// Verify a proof, collapsing every failure into `false`.
pub fn verify<PCS: PolyComScheme>(
    transcript: &mut Transcript,
    pcs: &PCS,
    verifier_params: &HonkVK<PCS>,
    proof: &HonkProof,
) -> bool {
    verifier(transcript, pcs, verifier_params, proof).is_ok()
}
