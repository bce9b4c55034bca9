use crate::circuit::{
    arithmetization::{trace_selectors, trace_wires, NUM_PRECOMPUTED},
    permutation::compute_permutation,
    ConstraintSystem,
};
use crate::errors::{HonkError, Result};
use crate::honk::helpers::commit_table;
use crate::poly_commit::pcs::PolyComScheme;
use ark_std::{end_timer, start_timer};
use honk_algebra::prelude::*;

/// The data structure of a Honk proof: the bytes written by the prover transcript.
#[derive(Debug, Deserialize, Eq, PartialEq, Serialize, Clone, Default)]
pub struct HonkProof {
    /// The proof bytes, in transcript order.
    pub proof_data: Vec<u8>,
}

/// Honk prover parameters.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProvingKey<F, C> {
    /// The circuit size, a power of two.
    pub n: usize,
    /// The number of public inputs.
    pub num_public_inputs: usize,
    /// The selector, sigma, identity and Lagrange tables, in `PolyId` order.
    pub precomputed: Vec<Vec<F>>,
    /// The wire tables of the last witness, filled by `compute_witness`.
    pub witness: Vec<Vec<F>>,
    /// The Honk verifier parameters.
    pub verifier_params: VerificationKey<C>,
}

/// Prover parameters over a particular polynomial commitment scheme.
pub type HonkPK<PCS> =
    ProvingKey<<PCS as PolyComScheme>::Field, <PCS as PolyComScheme>::Commitment>;

impl<F: Scalar, C> ProvingKey<F, C> {
    /// Return the verifier parameters.
    pub fn get_verifier_params(self) -> VerificationKey<C> {
        self.verifier_params
    }

    /// Return a reference of verifier parameters.
    pub fn get_verifier_params_ref(&self) -> &VerificationKey<C> {
        &self.verifier_params
    }

    /// Lay out the witness of `cs` into the wire tables.
    pub fn compute_witness<CS: ConstraintSystem<Field = F>>(
        &mut self,
        cs: &CS,
        witness: &[F],
    ) -> Result<()> {
        if cs.circuit_size() != self.n {
            return Err(HonkError::CircuitSizeMismatch);
        }
        if cs.num_public_inputs() != self.num_public_inputs {
            return Err(HonkError::PublicInputSizeMismatch);
        }
        self.witness = trace_wires(cs, witness)?;
        Ok(())
    }
}

/// Honk verifier parameters.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VerificationKey<C> {
    /// The circuit size, a power of two.
    pub n: usize,
    /// The number of public inputs.
    pub num_public_inputs: usize,
    /// The commitments of the precomputed tables, in `PolyId` order.
    pub commitments: Vec<C>,
}

/// Define the Honk verifier params by given `PolyComScheme`.
pub type HonkVK<PCS> = VerificationKey<<PCS as PolyComScheme>::Commitment>;

/// Precompute the parameters of a circuit.
pub fn indexer<PCS: PolyComScheme, CS: ConstraintSystem<Field = PCS::Field>>(
    cs: &CS,
    pcs: &PCS,
) -> Result<HonkPK<PCS>> {
    let timer = start_timer!(|| "Honk indexer");
    let n = cs.circuit_size();
    if n > pcs.max_degree() + 1 {
        return Err(HonkError::DegreeError);
    }

    let mut precomputed = trace_selectors(cs)?;
    let permutation = compute_permutation(cs)?;
    precomputed.extend(permutation.sigmas);
    precomputed.extend(permutation.ids);
    precomputed.push(permutation.lagrange_first);
    precomputed.push(permutation.lagrange_last);
    if precomputed.len() != NUM_PRECOMPUTED {
        return Err(HonkError::FuncParamsError);
    }

    let commit_timer = start_timer!(|| "Commit to the precomputed tables");
    let commitments = precomputed
        .iter()
        .map(|table| commit_table(pcs, table))
        .collect::<Result<Vec<_>>>()?;
    end_timer!(commit_timer);

    let verifier_params = VerificationKey {
        n,
        num_public_inputs: cs.num_public_inputs(),
        commitments,
    };
    end_timer!(timer);

    Ok(ProvingKey {
        n,
        num_public_inputs: cs.num_public_inputs(),
        precomputed,
        witness: vec![],
        verifier_params,
    })
}
