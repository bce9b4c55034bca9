//! Compile the copy constraints of a circuit into the sigma and identity
//! polynomials, together with the Lagrange polynomials of the first and last rows.
//!
//! Slots are flattened as `column * n + row`. Both wire slots of public input row
//! `i` sit in the copy cycle of its variable, `(0, i)` pointing at `(1, i)`. The
//! sigma value `n + i` of `(0, i)` is then replaced by `-(i + 1)`, so the grand
//! product over all slots equals the public input delta instead of one.
use crate::circuit::ConstraintSystem;
use crate::errors::{HonkError, Result};
use honk_algebra::prelude::*;

/// The tables produced by the permutation compiler, each of length `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTables<F> {
    /// `sigma_1, sigma_2, sigma_3`.
    pub sigmas: Vec<Vec<F>>,
    /// `id_1, id_2, id_3`.
    pub ids: Vec<Vec<F>>,
    /// The indicator of the first row.
    pub lagrange_first: Vec<F>,
    /// The indicator of the last row.
    pub lagrange_last: Vec<F>,
}

/// Compute the permutation of the flattened slots implied by the copy constraints.
///
/// Each set of copied slots is linked into a cycle in the order the slots were
/// created. The two wire slots of each public input row open the cycle of its
/// variable. Slots not linked by any cycle are fixed points.
pub fn compute_permutation_mapping<CS: ConstraintSystem>(cs: &CS) -> Result<Vec<usize>> {
    let n = cs.circuit_size();
    let width = CS::n_wires_per_gate();
    let num_pi = cs.num_public_inputs();
    let num_gates = cs.num_gates();
    let num_slots = width * n;

    let wire_cycles = cs.wire_cycles();
    let mut cycles = vec![Vec::new(); wire_cycles.len()];
    for (i, var) in cs.public_input_vars().iter().enumerate() {
        let root = cs.real_variable_index(*var);
        cycles
            .get_mut(root)
            .ok_or(HonkError::PermutationError)?
            .extend([i, n + i]);
    }
    for (cycle, slots) in wire_cycles.into_iter().zip(cycles.iter_mut()) {
        for (column, gate) in cycle {
            if column >= width || gate >= num_gates {
                return Err(HonkError::PermutationError);
            }
            slots.push(column * n + num_pi + gate);
        }
    }

    let mut mapping: Vec<Option<usize>> = vec![None; num_slots];
    for cycle in cycles.iter() {
        for (k, from) in cycle.iter().enumerate() {
            let to = cycle[(k + 1) % cycle.len()];
            let entry = mapping
                .get_mut(*from)
                .ok_or(HonkError::PermutationError)?;
            if entry.is_some() {
                return Err(HonkError::PermutationError);
            }
            *entry = Some(to);
        }
    }
    let mapping = mapping
        .into_iter()
        .enumerate()
        .map(|(i, to)| to.unwrap_or(i))
        .collect::<Vec<_>>();

    let mut seen = vec![false; num_slots];
    for to in mapping.iter() {
        if *to >= num_slots || seen[*to] {
            return Err(HonkError::PermutationError);
        }
        seen[*to] = true;
    }
    if (0..num_pi).any(|i| mapping[i] != n + i) {
        return Err(HonkError::PermutationError);
    }

    Ok(mapping)
}

/// Compute the sigma, identity and Lagrange tables of the circuit.
pub fn compute_permutation<CS: ConstraintSystem>(
    cs: &CS,
) -> Result<PermutationTables<CS::Field>> {
    let n = cs.circuit_size();
    let width = CS::n_wires_per_gate();
    let mapping = compute_permutation_mapping(cs)?;

    let to_field = |i: usize| CS::Field::from(i as u64);
    let mut sigmas = mapping
        .chunks_exact(n)
        .map(|column| column.iter().map(|to| to_field(*to)).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    for (i, sigma) in sigmas[0].iter_mut().take(cs.num_public_inputs()).enumerate() {
        *sigma = to_field(i + 1).neg();
    }

    let ids = (0..width)
        .map(|j| (0..n).map(|i| to_field(j * n + i)).collect::<Vec<_>>())
        .collect();

    let mut lagrange_first = vec![CS::Field::zero(); n];
    lagrange_first[0] = CS::Field::one();
    let mut lagrange_last = vec![CS::Field::zero(); n];
    lagrange_last[n - 1] = CS::Field::one();

    Ok(PermutationTables {
        sigmas,
        ids,
        lagrange_first,
        lagrange_last,
    })
}

/// Compute the public input delta
/// ```text
///     prod_i (pub_i + gamma + beta * (n + i)) / prod_i (pub_i + gamma - beta * (i + 1))
/// ```
/// which is the value of the permutation grand product over all slots of a circuit
/// of size `n`.
pub fn compute_public_input_delta<F: Scalar>(
    public_inputs: &[F],
    beta: &F,
    gamma: &F,
    circuit_size: usize,
) -> Result<F> {
    let mut numerator = F::one();
    let mut denominator = F::one();
    let mut numerator_acc = *gamma + &(*beta * &F::from(circuit_size as u64));
    let mut denominator_acc = *gamma - beta;
    for public_input in public_inputs {
        numerator.mul_assign(&(numerator_acc + public_input));
        denominator.mul_assign(&(denominator_acc + public_input));
        numerator_acc.add_assign(beta);
        denominator_acc.sub_assign(beta);
    }
    let denominator_inv = denominator.inv().map_err(|_| HonkError::DivisionByZero)?;
    Ok(numerator * &denominator_inv)
}
