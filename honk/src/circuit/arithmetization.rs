//! The static ordering of the polynomials of standard Honk and the layout of
//! the execution trace.
//!
//! Rows `0..num_public_inputs` hold the public inputs, gate `g` sits on row
//! `num_public_inputs + g`, and the remaining rows up to the circuit size are
//! padding with every wire and selector set to zero.
use crate::circuit::{ConstraintSystem, VarIndex};
use crate::errors::{HonkError, Result};
use crate::poly_commit::transcript::TranscriptElement;
use honk_algebra::prelude::*;

/// The number of polynomials the sumcheck evaluates.
pub const NUM_POLYNOMIALS: usize = 18;

/// The number of polynomials fixed by the circuit.
pub const NUM_PRECOMPUTED: usize = 13;

/// The number of polynomials that are opened without a shift.
pub const NUM_UNSHIFTED: usize = 17;

/// The identifiers of the polynomials, in their transcript and batching order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolyId {
    QM = 0,
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
    QC = 4,
    Sigma1 = 5,
    Sigma2 = 6,
    Sigma3 = 7,
    Id1 = 8,
    Id2 = 9,
    Id3 = 10,
    LagrangeFirst = 11,
    LagrangeLast = 12,
    W1 = 13,
    W2 = 14,
    W3 = 15,
    ZPerm = 16,
    ZPermShift = 17,
}

impl PolyId {
    /// Every polynomial, in order.
    pub const ALL: [PolyId; NUM_POLYNOMIALS] = [
        PolyId::QM,
        PolyId::Q1,
        PolyId::Q2,
        PolyId::Q3,
        PolyId::QC,
        PolyId::Sigma1,
        PolyId::Sigma2,
        PolyId::Sigma3,
        PolyId::Id1,
        PolyId::Id2,
        PolyId::Id3,
        PolyId::LagrangeFirst,
        PolyId::LagrangeLast,
        PolyId::W1,
        PolyId::W2,
        PolyId::W3,
        PolyId::ZPerm,
        PolyId::ZPermShift,
    ];

    /// The wire polynomials.
    pub const WIRES: [PolyId; 3] = [PolyId::W1, PolyId::W2, PolyId::W3];

    /// The permutation polynomials.
    pub const SIGMAS: [PolyId; 3] = [PolyId::Sigma1, PolyId::Sigma2, PolyId::Sigma3];

    /// The identity polynomials.
    pub const IDS: [PolyId; 3] = [PolyId::Id1, PolyId::Id2, PolyId::Id3];

    /// The position of the polynomial.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the polynomial is part of the proving key.
    #[inline]
    pub fn is_precomputed(self) -> bool {
        self.index() < NUM_PRECOMPUTED
    }
}

/// One value per polynomial, e.g. a row of the trace or the evaluations at
/// the sumcheck challenge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolynomialValues<F>(Vec<F>);

impl<F: Scalar> PolynomialValues<F> {
    /// Wrap exactly `NUM_POLYNOMIALS` values.
    pub fn new(values: Vec<F>) -> Result<Self> {
        if values.len() != NUM_POLYNOMIALS {
            return Err(HonkError::FuncParamsError);
        }
        Ok(Self(values))
    }

    /// All values set to zero.
    pub fn zero() -> Self {
        Self(vec![F::zero(); NUM_POLYNOMIALS])
    }

    /// The values in `PolyId` order.
    pub fn as_slice(&self) -> &[F] {
        &self.0
    }
}

impl<F> Index<PolyId> for PolynomialValues<F> {
    type Output = F;

    fn index(&self, id: PolyId) -> &F {
        &self.0[id as usize]
    }
}

impl<F> IndexMut<PolyId> for PolynomialValues<F> {
    fn index_mut(&mut self, id: PolyId) -> &mut F {
        &mut self.0[id as usize]
    }
}

impl<F: Scalar> TranscriptElement for PolynomialValues<F> {
    fn transcript_size() -> usize {
        NUM_POLYNOMIALS * F::transcript_size()
    }

    fn to_transcript_bytes(&self) -> Vec<u8> {
        self.0
            .iter()
            .flat_map(|value| value.to_transcript_bytes())
            .collect()
    }

    fn from_transcript_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::transcript_size() {
            return Err(HonkError::TranscriptError);
        }
        let values = bytes
            .chunks_exact(F::transcript_size())
            .map(F::from_transcript_bytes)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(values))
    }
}

/// The variable on each wire of each row, padding rows use the zero variable.
pub fn trace_wire_vars<CS: ConstraintSystem>(cs: &CS) -> Vec<Vec<VarIndex>> {
    let n = cs.circuit_size();
    let zero_var = cs.zero_var();
    let mut columns = vec![Vec::with_capacity(n); CS::n_wires_per_gate()];
    for var in cs.public_input_vars() {
        columns[0].push(*var);
        columns[1].push(*var);
        columns[2].push(zero_var);
    }
    for (column, wires) in columns.iter_mut().zip(cs.wiring().iter()) {
        column.extend_from_slice(wires);
        column.resize(n, zero_var);
    }
    columns
}

/// The wire tables of the execution trace.
pub fn trace_wires<CS: ConstraintSystem>(cs: &CS, witness: &[CS::Field]) -> Result<Vec<Vec<CS::Field>>> {
    if witness.len() != cs.num_vars() {
        return Err(HonkError::ProofErrorInvalidWitness);
    }
    Ok(trace_wire_vars(cs)
        .into_iter()
        .map(|column| column.into_iter().map(|var| witness[var]).collect())
        .collect())
}

/// The selector tables of the execution trace. Every selector vanishes on the
/// public input rows, whose values are bound by the permutation argument.
pub fn trace_selectors<CS: ConstraintSystem>(cs: &CS) -> Result<Vec<Vec<CS::Field>>> {
    let n = cs.circuit_size();
    let num_pi = cs.num_public_inputs();
    let mut tables = Vec::with_capacity(CS::num_selectors());
    for index in 0..CS::num_selectors() {
        let mut table = vec![CS::Field::zero(); num_pi];
        table.extend_from_slice(cs.selector(index)?);
        table.resize(n, CS::Field::zero());
        tables.push(table);
    }
    Ok(tables)
}
