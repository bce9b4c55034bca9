use honk::circuit::{
    arithmetization::NUM_PRECOMPUTED,
    standard::{AddTriple, MulTriple},
    ConstraintSystem, StandardCircuitBuilder,
};
use honk::errors::HonkError;
use honk::honk::{
    indexer::{indexer, HonkPK, HonkProof, HonkVK},
    prover::prover,
    verifier::{verifier, verify},
};
use honk::poly_commit::{
    kzg_poly_com::{KZGCommitmentScheme, KZGCommitmentSchemeBN254},
    pcs::PolyComScheme,
};
use honk_algebra::{
    bn254::{BN254PairingEngine, BN254Scalar},
    prelude::*,
};
use merlin::Transcript;

type F = BN254Scalar;
type PCS = KZGCommitmentSchemeBN254;

const LABEL: &[u8] = b"Standard Honk Test";

fn prove_and_verify(
    pcs: &PCS,
    cs: &StandardCircuitBuilder<F>,
    witness: &[F],
) -> (HonkProof, HonkVK<PCS>, Result<(), HonkError>) {
    let mut pk = indexer(cs, pcs).unwrap();
    let mut transcript = Transcript::new(LABEL);
    let proof = prover(&mut transcript, pcs, cs, &mut pk, witness).unwrap();

    let vk = pk.get_verifier_params();
    let mut transcript = Transcript::new(LABEL);
    let res = verifier(&mut transcript, pcs, &vk, &proof);
    (proof, vk, res)
}

fn add_gate(cs: &mut StandardCircuitBuilder<F>, a: usize, b: usize, c: usize) {
    cs.create_add_gate(&AddTriple {
        a,
        b,
        c,
        a_scaling: F::one(),
        b_scaling: F::one(),
        c_scaling: F::one().neg(),
        const_scaling: F::zero(),
    });
}

fn mul_gate(cs: &mut StandardCircuitBuilder<F>, a: usize, b: usize, c: usize) {
    cs.create_mul_gate(&MulTriple {
        a,
        b,
        c,
        mul_scaling: F::one(),
        c_scaling: F::one().neg(),
        const_scaling: F::zero(),
    });
}

/// A circuit with two public inputs and a few copy constraints.
fn public_input_circuit() -> StandardCircuitBuilder<F> {
    let mut cs = StandardCircuitBuilder::new();
    let a = cs.add_public_variable(F::from(3u32));
    let b = cs.add_public_variable(F::from(4u32));
    let a_sq = cs.add_variable(F::from(9u32));
    let b_sq = cs.add_variable(F::from(16u32));
    let sum = cs.add_variable(F::from(25u32));
    mul_gate(&mut cs, a, a, a_sq);
    mul_gate(&mut cs, b, b, b_sq);
    add_gate(&mut cs, a_sq, b_sq, sum);
    let expected = cs.put_constant_variable(F::from(25u32));
    cs.assert_equal(sum, expected);
    cs
}

#[test]
fn test_base_case() {
    let mut prng = test_rng();
    let pcs = PCS::new(16, &mut prng);

    let mut cs = StandardCircuitBuilder::<F>::new();
    cs.add_variable(F::one());
    assert_eq!(cs.circuit_size(), 2);

    let witness = cs.get_witness();
    let (_, _, res) = prove_and_verify(&pcs, &cs, &witness);
    assert!(res.is_ok());
}

#[test]
fn test_add_gate() {
    let mut prng = test_rng();
    let pcs = PCS::new(16, &mut prng);

    let mut cs = StandardCircuitBuilder::<F>::new();
    let a = cs.add_variable(F::one());
    let b = cs.add_variable(F::one());
    let c = cs.add_variable(F::from(2u32));
    add_gate(&mut cs, a, b, c);

    let witness = cs.get_witness();
    cs.check_circuit(&witness).unwrap();
    let (_, _, res) = prove_and_verify(&pcs, &cs, &witness);
    assert!(res.is_ok());

    // 0 + 1 - 2 != 0
    let mut bad_witness = witness.clone();
    bad_witness[a] = F::zero();
    assert!(cs.check_circuit(&bad_witness).is_err());
    let (_, _, res) = prove_and_verify(&pcs, &cs, &bad_witness);
    assert!(res.is_err());
}

#[test]
fn test_mul_gate() {
    let mut prng = test_rng();
    let pcs = PCS::new(16, &mut prng);

    let mut cs = StandardCircuitBuilder::<F>::new();
    let a = cs.add_variable(F::from(2u32));
    let b = cs.add_variable(F::from(2u32));
    let c = cs.add_variable(F::from(4u32));
    mul_gate(&mut cs, a, b, c);

    let witness = cs.get_witness();
    let (_, vk, res) = prove_and_verify(&pcs, &cs, &witness);
    assert!(res.is_ok());
    assert_eq!(vk.commitments.len(), NUM_PRECOMPUTED);

    let mut bad_witness = witness;
    bad_witness[c] = F::from(5u32);
    let (_, _, res) = prove_and_verify(&pcs, &cs, &bad_witness);
    assert!(res.is_err());
}

#[test]
fn test_broken_copy_constraint() {
    let mut prng = test_rng();
    let pcs = PCS::new(32, &mut prng);

    let mut cs = StandardCircuitBuilder::<F>::new();
    let a = cs.add_variable(F::from(2u32));
    let b = cs.add_variable(F::from(3u32));
    let c = cs.add_variable(F::from(5u32));
    let d = cs.add_variable(F::from(10u32));
    add_gate(&mut cs, a, b, c);
    mul_gate(&mut cs, c, a, d);
    let (_, _, res) = prove_and_verify(&pcs, &cs, &cs.get_witness());
    assert!(res.is_ok());

    // every gate still holds on its own, but `c` takes two different values
    let mut cs_broken = StandardCircuitBuilder::<F>::new();
    let a = cs_broken.add_variable(F::from(2u32));
    let b = cs_broken.add_variable(F::from(3u32));
    let c = cs_broken.add_variable(F::from(5u32));
    let c_copy = cs_broken.add_variable(F::from(6u32));
    let d = cs_broken.add_variable(F::from(12u32));
    add_gate(&mut cs_broken, a, b, c);
    mul_gate(&mut cs_broken, c_copy, a, d);
    cs_broken.assert_equal(c, c_copy);
    assert!(cs_broken.failed());

    let mut witness = cs_broken.get_witness();
    witness[c_copy] = F::from(6u32);
    assert!(cs_broken.check_circuit(&witness).is_err());
    let (_, _, res) = prove_and_verify(&pcs, &cs_broken, &witness);
    assert!(res.is_err());
}

#[test]
fn test_public_input_bound_by_equality() {
    let mut prng = test_rng();
    let pcs = PCS::new(16, &mut prng);

    let mut cs = StandardCircuitBuilder::<F>::new();
    let public = cs.add_public_variable(F::from(7u32));
    let private = cs.add_variable(F::from(7u32));
    cs.assert_equal(public, private);
    assert!(!cs.failed());

    let (_, vk, res) = prove_and_verify(&pcs, &cs, &cs.get_witness());
    assert!(res.is_ok());
    // 5 selectors, 3 sigmas, 3 identities and 2 Lagrange polynomials
    assert_eq!(vk.commitments.len(), 5 + 2 * 3 + 2);
}

#[test]
fn test_public_input_copied_into_gate() {
    let mut prng = test_rng();
    let pcs = PCS::new(16, &mut prng);

    let mut cs = StandardCircuitBuilder::<F>::new();
    let public = cs.add_public_variable(F::from(7u32));
    let private = cs.add_variable(F::from(7u32));
    let double = cs.add_variable(F::from(14u32));
    add_gate(&mut cs, private, private, double);
    cs.assert_equal(public, private);
    assert_eq!(cs.circuit_size(), 4);

    let witness = cs.get_witness();
    let (_, _, res) = prove_and_verify(&pcs, &cs, &witness);
    assert!(res.is_ok());

    // the public row claims 8 while the gate still uses 7
    let mut witness = witness;
    witness[public] = F::from(8u32);
    let (_, _, res) = prove_and_verify(&pcs, &cs, &witness);
    assert!(res.is_err());
}

#[test]
fn test_public_inputs() {
    let mut prng = test_rng();
    let pcs = PCS::new(32, &mut prng);

    let cs = public_input_circuit();
    let witness = cs.get_witness();
    cs.check_circuit(&witness).unwrap();
    assert_eq!(
        cs.public_inputs(&witness),
        vec![F::from(3u32), F::from(4u32)]
    );

    let (proof, vk, res) = prove_and_verify(&pcs, &cs, &witness);
    assert!(res.is_ok());
    let mut transcript = Transcript::new(LABEL);
    assert!(verify(&mut transcript, &pcs, &vk, &proof));

    // a different transcript label
    let mut transcript = Transcript::new(b"Another label");
    assert!(!verify(&mut transcript, &pcs, &vk, &proof));

    // a key with the wrong circuit size
    let mut small = StandardCircuitBuilder::<F>::new();
    small.add_public_variable(F::one());
    let small_vk = indexer(&small, &pcs).unwrap().get_verifier_params();
    assert_ne!(small_vk.n, vk.n);
    let mut transcript = Transcript::new(LABEL);
    assert_eq!(
        verifier(&mut transcript, &pcs, &small_vk, &proof),
        Err(HonkError::CircuitSizeMismatch)
    );

    // a key with the wrong number of public inputs
    let mut wrong_vk = vk.clone();
    wrong_vk.num_public_inputs = 1;
    let mut transcript = Transcript::new(LABEL);
    assert_eq!(
        verifier(&mut transcript, &pcs, &wrong_vk, &proof),
        Err(HonkError::PublicInputSizeMismatch)
    );
}

#[test]
fn test_wrong_public_input() {
    let mut prng = test_rng();
    let pcs = PCS::new(32, &mut prng);

    let cs = public_input_circuit();
    let mut witness = cs.get_witness();
    let a = cs.public_input_vars()[0];
    witness[a] = F::from(5u32);
    let (_, _, res) = prove_and_verify(&pcs, &cs, &witness);
    assert!(res.is_err());
}

#[test]
fn test_tampered_proof() {
    let mut prng = test_rng();
    let pcs = PCS::new(32, &mut prng);

    let cs = public_input_circuit();
    let (proof, vk, res) = prove_and_verify(&pcs, &cs, &cs.get_witness());
    assert!(res.is_ok());

    for position in (0..proof.proof_data.len()).step_by(29) {
        let mut tampered = proof.clone();
        tampered.proof_data[position] ^= 0x01;
        let mut transcript = Transcript::new(LABEL);
        assert!(
            !verify(&mut transcript, &pcs, &vk, &tampered),
            "flipping byte {} is not detected",
            position
        );
    }

    let mut truncated = proof.clone();
    truncated.proof_data.pop();
    let mut transcript = Transcript::new(LABEL);
    assert!(!verify(&mut transcript, &pcs, &vk, &truncated));

    let mut extended = proof;
    extended.proof_data.push(0);
    let mut transcript = Transcript::new(LABEL);
    assert_eq!(
        verifier(&mut transcript, &pcs, &vk, &extended),
        Err(HonkError::TranscriptError)
    );
}

#[test]
fn test_proof_size() {
    let mut prng = test_rng();
    let pcs = PCS::new(32, &mut prng);

    let cs = public_input_circuit();
    let (proof, vk, res) = prove_and_verify(&pcs, &cs, &cs.get_witness());
    assert!(res.is_ok());

    let d = vk.n.trailing_zeros() as usize;
    let num_scalars = 2 + 5 * d + 18 + d;
    let num_commitments = 4 + (d - 1) + 2;
    assert_eq!(
        proof.proof_data.len(),
        8 + 32 * num_scalars + 32 * num_commitments
    );
}

#[test]
fn test_serialization() {
    let mut prng = test_rng();
    let pcs = PCS::new(32, &mut prng);
    let pcs_json = serde_json::to_string(&pcs).unwrap();
    let pcs: KZGCommitmentScheme<BN254PairingEngine> = serde_json::from_str(&pcs_json).unwrap();

    let cs = public_input_circuit();
    let pk = indexer(&cs, &pcs).unwrap();
    let pk_json = serde_json::to_string(&pk).unwrap();
    let mut pk: HonkPK<PCS> = serde_json::from_str(&pk_json).unwrap();

    let vk_json = serde_json::to_string(pk.get_verifier_params_ref()).unwrap();
    let vk: HonkVK<PCS> = serde_json::from_str(&vk_json).unwrap();
    assert_eq!(&vk, pk.get_verifier_params_ref());

    let mut transcript = Transcript::new(LABEL);
    let proof = prover(&mut transcript, &pcs, &cs, &mut pk, &cs.get_witness()).unwrap();
    let proof_json = serde_json::to_string(&proof).unwrap();
    let proof: HonkProof = serde_json::from_str(&proof_json).unwrap();

    let verifier_pcs = pcs.shrink_to_verifier_only();
    let mut transcript = Transcript::new(LABEL);
    assert!(verifier(&mut transcript, &verifier_pcs, &vk, &proof).is_ok());
}
