use crate::errors::Result;
use honk_algebra::traits::Scalar;

/// Module for the polynomial ordering and execution trace layout.
pub mod arithmetization;

/// Module for the permutation compiler.
pub mod permutation;

/// Module for the standard width-3 circuit builder.
pub mod standard;

/// Default used circuit builder.
pub use standard::StandardCircuitBuilder;

/// Variable index
pub type VarIndex = usize;

/// Gate index
pub type GateIndex = usize;

/// A wire slot given by its column and the gate it belongs to.
pub type WireSlot = (usize, GateIndex);

/// Trait for constraint systems compiled by the Honk indexer.
pub trait ConstraintSystem: Sized {
    /// The scalar field.
    type Field: Scalar;

    /// Return the number of gates, excluding public input rows.
    fn num_gates(&self) -> usize;

    /// Return the number of public inputs.
    fn num_public_inputs(&self) -> usize;

    /// Return number of variables in the constraint system.
    fn num_vars(&self) -> usize;

    /// Return the number of wires in a single gate.
    fn n_wires_per_gate() -> usize;

    /// Return the number of selectors.
    fn num_selectors() -> usize;

    /// Return the wiring of the constraint system, one vector per column.
    fn wiring(&self) -> &[Vec<VarIndex>];

    /// Borrow the (index)-th selector vector.
    fn selector(&self, index: usize) -> Result<&[Self::Field]>;

    /// The variables bound to public inputs, in order.
    fn public_input_vars(&self) -> &[VarIndex];

    /// The variable constrained to zero, used for unused wires.
    fn zero_var(&self) -> VarIndex;

    /// Return the representative of the copy-constraint set of `var`.
    fn real_variable_index(&self, var: VarIndex) -> VarIndex;

    /// The ordered wire slots of every copy-constraint set, indexed by the
    /// representative variable. Other variables own no slots.
    fn wire_cycles(&self) -> Vec<Vec<WireSlot>>;

    /// The number of rows of the execution trace, a power of two and at least 2.
    fn circuit_size(&self) -> usize {
        (self.num_public_inputs() + self.num_gates())
            .next_power_of_two()
            .max(2)
    }

    /// Read the public input values out of a witness.
    fn public_inputs(&self, witness: &[Self::Field]) -> Vec<Self::Field> {
        self.public_input_vars()
            .iter()
            .map(|var| witness[*var])
            .collect()
    }
}
