//! The standard width-3 arithmetic circuit builder.
//!
//! Every gate enforces
//! ```text
//!     q_m * w_1 * w_2 + q_1 * w_1 + q_2 * w_2 + q_3 * w_3 + q_c = 0
//! ```
//! Copy constraints are kept as a union-find over variables, where each root
//! owns the ordered list of wire slots its variables occupy.
use crate::circuit::{ConstraintSystem, GateIndex, VarIndex, WireSlot};
use crate::errors::{HonkError, Result};
use ark_std::{collections::BTreeMap, format};
use honk_algebra::prelude::*;

/// The wires number of a gate in the standard circuit.
pub const PROGRAM_WIDTH: usize = 3;

/// The selectors number in the standard circuit.
pub const N_SELECTORS: usize = 5;

/// A generic gate `q_m * a * b + q_l * a + q_r * b + q_o * c + q_c = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StandardGate<F> {
    /// the first wire.
    pub a: VarIndex,
    /// the second wire.
    pub b: VarIndex,
    /// the third wire.
    pub c: VarIndex,
    /// the multiplication selector.
    pub q_m: F,
    /// the selector of `a`.
    pub q_l: F,
    /// the selector of `b`.
    pub q_r: F,
    /// the selector of `c`.
    pub q_o: F,
    /// the constant selector.
    pub q_c: F,
}

/// `a_scaling * a + b_scaling * b + c_scaling * c + const_scaling = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddTriple<F> {
    pub a: VarIndex,
    pub b: VarIndex,
    pub c: VarIndex,
    pub a_scaling: F,
    pub b_scaling: F,
    pub c_scaling: F,
    pub const_scaling: F,
}

/// `mul_scaling * a * b + c_scaling * c + const_scaling = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MulTriple<F> {
    pub a: VarIndex,
    pub b: VarIndex,
    pub c: VarIndex,
    pub mul_scaling: F,
    pub c_scaling: F,
    pub const_scaling: F,
}

/// Standard Honk circuit builder.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardCircuitBuilder<F> {
    /// the values of the variables.
    pub variables: Vec<F>,
    /// the union-find parent of each variable, a root points to itself.
    parent: Vec<VarIndex>,
    /// the ordered wire slots owned by each root.
    cycles: Vec<Vec<WireSlot>>,
    /// the wiring of the circuit.
    pub wiring: [Vec<VarIndex>; PROGRAM_WIDTH],
    /// the selectors of the circuit, in the order `q_m, q_1, q_2, q_3, q_c`.
    pub selectors: [Vec<F>; N_SELECTORS],
    /// the public input variables.
    pub public_inputs: Vec<VarIndex>,
    /// the cache of constant variables, keyed by the canonical bytes of the constant.
    constants: BTreeMap<Vec<u8>, VarIndex>,
    zero_var: VarIndex,
    failure: Option<String>,
}

impl<F: Scalar> Default for StandardCircuitBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Scalar> ConstraintSystem for StandardCircuitBuilder<F> {
    type Field = F;

    fn num_gates(&self) -> usize {
        self.wiring[0].len()
    }

    fn num_public_inputs(&self) -> usize {
        self.public_inputs.len()
    }

    fn num_vars(&self) -> usize {
        self.variables.len()
    }

    fn n_wires_per_gate() -> usize {
        PROGRAM_WIDTH
    }

    fn num_selectors() -> usize {
        N_SELECTORS
    }

    fn wiring(&self) -> &[Vec<VarIndex>] {
        &self.wiring[..]
    }

    fn selector(&self, index: usize) -> Result<&[F]> {
        if index >= N_SELECTORS {
            return Err(HonkError::FuncParamsError);
        }
        Ok(&self.selectors[index])
    }

    fn public_input_vars(&self) -> &[VarIndex] {
        &self.public_inputs
    }

    fn zero_var(&self) -> VarIndex {
        self.zero_var
    }

    fn real_variable_index(&self, var: VarIndex) -> VarIndex {
        let mut current = var;
        while self.parent[current] != current {
            current = self.parent[current];
        }
        current
    }

    fn wire_cycles(&self) -> Vec<Vec<WireSlot>> {
        self.cycles.clone()
    }
}

impl<F: Scalar> StandardCircuitBuilder<F> {
    /// Create a builder holding only the zero variable and the gate that fixes it.
    pub fn new() -> Self {
        let mut builder = Self {
            variables: vec![],
            parent: vec![],
            cycles: vec![],
            wiring: [vec![], vec![], vec![]],
            selectors: [vec![], vec![], vec![], vec![], vec![]],
            public_inputs: vec![],
            constants: BTreeMap::new(),
            zero_var: 0,
            failure: None,
        };
        let zero_var = builder.add_variable(F::zero());
        builder.zero_var = zero_var;
        builder.fix_witness(zero_var, F::zero());
        builder
    }

    /// Add a variable (with actual value `value`) into the circuit.
    pub fn add_variable(&mut self, value: F) -> VarIndex {
        let index = self.variables.len();
        self.variables.push(value);
        self.parent.push(index);
        self.cycles.push(vec![]);
        index
    }

    /// Add a variable and mark it as the next public input.
    pub fn add_public_variable(&mut self, value: F) -> VarIndex {
        let index = self.add_variable(value);
        self.public_inputs.push(index);
        index
    }

    /// Mark an existing variable as the next public input.
    pub fn set_public_input(&mut self, var: VarIndex) -> Result<()> {
        if var >= self.variables.len() {
            return Err(HonkError::FuncParamsError);
        }
        if self.public_inputs.contains(&var) {
            return Err(HonkError::Message(format!(
                "variable {} is already a public input",
                var
            )));
        }
        self.public_inputs.push(var);
        Ok(())
    }

    /// Return a variable fixed to `value`, creating it on first use.
    pub fn put_constant_variable(&mut self, value: F) -> VarIndex {
        let key = value.to_bytes();
        if let Some(var) = self.constants.get(&key) {
            return *var;
        }
        let var = self.add_variable(value);
        self.fix_witness(var, value);
        self.constants.insert(key, var);
        var
    }

    /// Add the gate `var - value = 0`.
    pub fn fix_witness(&mut self, var: VarIndex, value: F) {
        let zero_var = self.zero_var;
        self.create_gate(&StandardGate {
            a: var,
            b: zero_var,
            c: zero_var,
            q_m: F::zero(),
            q_l: F::one(),
            q_r: F::zero(),
            q_o: F::zero(),
            q_c: value.neg(),
        });
    }

    /// Add a generic gate.
    pub fn create_gate(&mut self, gate: &StandardGate<F>) {
        let num_vars = self.variables.len();
        assert!(
            gate.a < num_vars && gate.b < num_vars && gate.c < num_vars,
            "wire index out of bound"
        );
        let index = self.num_gates();
        for (column, var) in [gate.a, gate.b, gate.c].into_iter().enumerate() {
            self.wiring[column].push(var);
            let root = self.real_variable_index(var);
            self.cycles[root].push((column, index));
        }
        self.selectors[0].push(gate.q_m);
        self.selectors[1].push(gate.q_l);
        self.selectors[2].push(gate.q_r);
        self.selectors[3].push(gate.q_o);
        self.selectors[4].push(gate.q_c);
        self.finish_new_gate(index);
    }

    /// Add the gate `a_scaling * a + b_scaling * b + c_scaling * c + const_scaling = 0`.
    pub fn create_add_gate(&mut self, triple: &AddTriple<F>) {
        self.create_gate(&StandardGate {
            a: triple.a,
            b: triple.b,
            c: triple.c,
            q_m: F::zero(),
            q_l: triple.a_scaling,
            q_r: triple.b_scaling,
            q_o: triple.c_scaling,
            q_c: triple.const_scaling,
        });
    }

    /// Add the gate `mul_scaling * a * b + c_scaling * c + const_scaling = 0`.
    pub fn create_mul_gate(&mut self, triple: &MulTriple<F>) {
        self.create_gate(&StandardGate {
            a: triple.a,
            b: triple.b,
            c: triple.c,
            q_m: triple.mul_scaling,
            q_l: F::zero(),
            q_r: F::zero(),
            q_o: triple.c_scaling,
            q_c: triple.const_scaling,
        });
    }

    /// Copy-constrain `a` and `b`. The set of `b` joins the set of `a`, and the
    /// slots of `b` are appended to those of `a`.
    pub fn assert_equal(&mut self, a: VarIndex, b: VarIndex) {
        let root_a = self.real_variable_index(a);
        let root_b = self.real_variable_index(b);
        if root_a == root_b {
            return;
        }
        if self.variables[root_a] != self.variables[root_b] && self.failure.is_none() {
            self.failure = Some(format!(
                "assert_equal: variable {} and variable {} have different values",
                a, b
            ));
        }
        self.parent[root_b] = root_a;
        let moved = core::mem::take(&mut self.cycles[root_b]);
        self.cycles[root_a].extend(moved);
    }

    /// Return the value of `var`, read through its root.
    pub fn get_variable(&self, var: VarIndex) -> F {
        self.variables[self.real_variable_index(var)]
    }

    /// Return the number of gates.
    pub fn size(&self) -> usize {
        self.num_gates()
    }

    /// Return the number of variables.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Return the values of the public inputs, in order.
    pub fn public_input_values(&self) -> Vec<F> {
        self.public_inputs
            .iter()
            .map(|var| self.get_variable(*var))
            .collect()
    }

    /// Return the witness assigned while building, with every variable read
    /// through its root.
    pub fn get_witness(&self) -> Vec<F> {
        (0..self.variables.len())
            .map(|var| self.get_variable(var))
            .collect()
    }

    /// Whether a copy constraint or a checked gate was found unsatisfied while building.
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }

    /// The first failure recorded while building.
    pub fn err(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Return the left hand side of the gate `index` on `witness`.
    fn eval_gate(&self, index: GateIndex, witness: &[F]) -> F {
        let w_1 = witness[self.wiring[0][index]];
        let w_2 = witness[self.wiring[1][index]];
        let w_3 = witness[self.wiring[2][index]];
        let mut r = self.selectors[0][index] * &w_1 * &w_2;
        r.add_assign(&(self.selectors[1][index] * &w_1));
        r.add_assign(&(self.selectors[2][index] * &w_2));
        r.add_assign(&(self.selectors[3][index] * &w_3));
        r.add_assign(&self.selectors[4][index]);
        r
    }

    /// Check if the gate is satisfied.
    #[cfg(feature = "debug")]
    fn finish_new_gate(&mut self, index: GateIndex) {
        let witness = self.get_witness();
        if !self.eval_gate(index, &witness).is_zero() && self.failure.is_none() {
            self.failure = Some(format!("gate {} is not satisfied", index));
        }
    }

    #[cfg(not(feature = "debug"))]
    #[inline]
    fn finish_new_gate(&mut self, _index: GateIndex) {}

    /// Verify the given witness against every gate and every copy constraint.
    pub fn check_circuit(&self, witness: &[F]) -> Result<()> {
        if witness.len() != self.variables.len() {
            return Err(HonkError::Message(format!(
                "witness len = {}, num_vars = {}",
                witness.len(),
                self.variables.len()
            )));
        }
        for index in 0..self.num_gates() {
            if !self.eval_gate(index, witness).is_zero() {
                return Err(HonkError::Message(format!(
                    "gate {}: wires = ({}, {}, {}) not satisfied",
                    index, self.wiring[0][index], self.wiring[1][index], self.wiring[2][index]
                )));
            }
        }
        for (var, value) in witness.iter().enumerate() {
            let root = self.real_variable_index(var);
            if *value != witness[root] {
                return Err(HonkError::Message(format!(
                    "variable {} differs from variable {} it is copied from",
                    var, root
                )));
            }
        }
        Ok(())
    }
}
