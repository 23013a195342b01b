//! The evaluation contract through which external Boolean functions are
//! consumed by the synthesis algorithm (`Bdd::from_function`).

use crate::{Bdd, BddValuation};

/// A Boolean function with a fixed number of inputs and outputs.
///
/// Implementations must be *pure*: `execute` is deterministic, has no side
/// effects, and may be called repeatedly for the same input — synthesis calls
/// it once for each of the `2^num_inputs` assignments.
pub trait BooleanFunction {
    /// The fixed input arity of this function.
    fn num_inputs(&self) -> u16;

    /// The fixed output arity of this function.
    fn num_outputs(&self) -> usize;

    /// Evaluate the function on the given input vector, producing one value
    /// per output.
    ///
    /// *Panics:* `inputs` must have exactly `num_inputs` elements.
    fn execute(&self, inputs: &[bool]) -> Vec<bool>;
}

/// A `Bdd` is itself a single-output Boolean function, so one decision diagram
/// can be used as the source for synthesizing another.
impl BooleanFunction for Bdd {
    fn num_inputs(&self) -> u16 {
        Bdd::num_inputs(self)
    }

    fn num_outputs(&self) -> usize {
        1
    }

    fn execute(&self, inputs: &[bool]) -> Vec<bool> {
        vec![self.eval_in(&BddValuation::new(inputs.to_vec()))]
    }
}
