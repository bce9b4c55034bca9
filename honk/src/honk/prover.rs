use crate::circuit::{
    arithmetization::{PolyId, NUM_PRECOMPUTED},
    permutation::compute_public_input_delta,
    ConstraintSystem,
};
use crate::errors::{HonkError, Result};
use crate::honk::{
    helpers::{batch_tables, commit_table},
    indexer::{HonkPK, HonkProof},
    transcript::{
        transcript_init_honk, ALPHA_LABEL, BETA_LABEL, CIRCUIT_SIZE_LABEL, GAMMA_LABEL,
        PUBLIC_INPUT_LABEL, PUBLIC_INPUT_SIZE_LABEL, RHO_LABEL, WIRE_LABELS, ZETA_LABEL,
        Z_PERM_LABEL,
    },
};
use crate::poly_commit::{
    gemini::gemini_prove, kzg_poly_com::kzg_open, pcs::PolyComScheme, shplonk::shplonk_prove,
    transcript::ProverTranscript,
};
use crate::sumcheck::{
    prover::SumcheckProver,
    relations::{compute_grand_product, RelationParameters},
};
use ark_std::{end_timer, start_timer};
use honk_algebra::prelude::*;
use merlin::Transcript;

/// Build a Honk proof for the witness of `cs`.
///
/// The witness must assign every variable of `cs`, including the public inputs,
/// and `prover_params` must come from running the indexer on the same circuit.
///
/// # Example
/// ```
/// use honk::circuit::{standard::AddTriple, StandardCircuitBuilder};
/// use honk::honk::{indexer::indexer, prover::prover, verifier::verifier};
/// use honk::poly_commit::kzg_poly_com::KZGCommitmentSchemeBN254;
/// use honk_algebra::{bn254::BN254Scalar, prelude::*};
/// use merlin::Transcript;
///
/// let mut prng = test_rng();
/// let pcs = KZGCommitmentSchemeBN254::new(20, &mut prng);
/// let one = BN254Scalar::one();
/// let two = BN254Scalar::from(2u32);
///
/// let mut cs = StandardCircuitBuilder::<BN254Scalar>::new();
/// let a = cs.add_variable(one);
/// let b = cs.add_variable(one);
/// let c = cs.add_public_variable(two);
/// cs.create_add_gate(&AddTriple {
///     a,
///     b,
///     c,
///     a_scaling: one,
///     b_scaling: one,
///     c_scaling: one.neg(),
///     const_scaling: BN254Scalar::zero(),
/// });
/// let witness = cs.get_witness();
///
/// let mut pk = indexer(&cs, &pcs).unwrap();
/// let mut transcript = Transcript::new(b"Test");
/// let proof = prover(&mut transcript, &pcs, &cs, &mut pk, &witness).unwrap();
///
/// let mut transcript = Transcript::new(b"Test");
/// assert!(verifier(&mut transcript, &pcs, pk.get_verifier_params_ref(), &proof).is_ok());
/// ```
pub fn prover<PCS: PolyComScheme, CS: ConstraintSystem<Field = PCS::Field>>(
    transcript: &mut Transcript,
    pcs: &PCS,
    cs: &CS,
    prover_params: &mut HonkPK<PCS>,
    witness: &[PCS::Field],
) -> Result<HonkProof> {
    let timer = start_timer!(|| "Honk prover");
    prover_params.compute_witness(cs, witness)?;
    let public_inputs = cs.public_inputs(witness);
    if public_inputs.len() != prover_params.num_public_inputs {
        return Err(HonkError::PublicInputSizeMismatch);
    }
    let n = prover_params.n;
    let circuit_size = u32::try_from(n).map_err(|_| HonkError::FuncParamsError)?;
    let public_input_size =
        u32::try_from(public_inputs.len()).map_err(|_| HonkError::FuncParamsError)?;

    transcript_init_honk(transcript, prover_params.get_verifier_params_ref());
    let mut transcript = ProverTranscript::new(transcript);

    // 1. send the sizes and the public inputs.
    transcript.send_u32(CIRCUIT_SIZE_LABEL, circuit_size);
    transcript.send_u32(PUBLIC_INPUT_SIZE_LABEL, public_input_size);
    for public_input in public_inputs.iter() {
        transcript.send_to_verifier(PUBLIC_INPUT_LABEL, public_input);
    }

    // 2. commit to the wires.
    let wire_timer = start_timer!(|| "Commit to the wires");
    for (label, table) in WIRE_LABELS.iter().zip(prover_params.witness.iter()) {
        let cm = commit_table(pcs, table)?;
        transcript.send_to_verifier(*label, &cm);
    }
    end_timer!(wire_timer);

    // 3. compute and commit to the permutation grand product.
    let [beta, gamma]: [PCS::Field; 2] = transcript.get_challenges([BETA_LABEL, GAMMA_LABEL]);
    let public_input_delta = compute_public_input_delta(&public_inputs, &beta, &gamma, n)?;
    let (z_perm, z_perm_shift) = compute_grand_product(
        &prover_params.witness,
        &prover_params.precomputed[PolyId::Id1.index()..=PolyId::Id3.index()],
        &prover_params.precomputed[PolyId::Sigma1.index()..=PolyId::Sigma3.index()],
        &beta,
        &gamma,
    )?;
    let cm_z_perm = commit_table(pcs, &z_perm)?;
    transcript.send_to_verifier(Z_PERM_LABEL, &cm_z_perm);

    // 4. run the sumcheck on the batched relations.
    let [alpha, zeta]: [PCS::Field; 2] = transcript.get_challenges([ALPHA_LABEL, ZETA_LABEL]);
    let relation_parameters = RelationParameters {
        alpha,
        beta,
        gamma,
        zeta,
        public_input_delta,
    };

    let mut tables = Vec::with_capacity(NUM_PRECOMPUTED + 5);
    tables.extend(prover_params.precomputed.iter().cloned());
    tables.extend(prover_params.witness.iter().cloned());
    tables.push(z_perm);
    tables.push(z_perm_shift);

    let sumcheck_timer = start_timer!(|| "Sumcheck");
    let sumcheck_output =
        SumcheckProver::new(tables.clone(), &relation_parameters)?.prove(&mut transcript)?;
    end_timer!(sumcheck_timer);

    // 5. open every polynomial at the sumcheck challenge.
    let opening_timer = start_timer!(|| "Gemini, Shplonk and KZG");
    let rho: PCS::Field = transcript.get_challenge(RHO_LABEL);
    let (unshifted, to_be_shifted) = batch_tables(&tables, &rho)?;
    let claims = gemini_prove(
        &mut transcript,
        pcs,
        &unshifted,
        &to_be_shifted,
        &sumcheck_output.challenge,
    )?;
    let claim = shplonk_prove(&mut transcript, pcs, &claims)?;
    kzg_open(&mut transcript, pcs, &claim)?;
    end_timer!(opening_timer);

    end_timer!(timer);
    Ok(HonkProof {
        proof_data: transcript.into_proof_data(),
    })
}
