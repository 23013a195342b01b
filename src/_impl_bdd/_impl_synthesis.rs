use crate::boolean_function::BooleanFunction;
use crate::*;
use fxhash::{FxBuildHasher, FxHashMap};

/// Synthesis of a `Bdd` from an arbitrary Boolean function by exhaustive
/// truth-table enumeration.
impl Bdd {
    /// Create a `Bdd` computing the selected `output` of the given function.
    ///
    /// The function is evaluated on all `2^k` input assignments — exactly once
    /// per assignment — and the graph is assembled strictly bottom-up, so the
    /// result is canonical by construction. This is intentionally exponential
    /// (it assumes no special structure in the source function) and therefore
    /// only practical for small input counts.
    ///
    /// *Panics:* `output` must be one of the function's output channels.
    pub fn from_function<F: BooleanFunction + ?Sized>(function: &F, output: usize) -> Bdd {
        if output >= function.num_outputs() {
            panic!(
                "The function has {} outputs, cannot synthesise output {}.",
                function.num_outputs(),
                output
            );
        }
        let num_inputs = function.num_inputs();
        let mut result = Bdd::mk_false(num_inputs);
        let mut existing: FxHashMap<BddNode, BddPointer> =
            FxHashMap::with_capacity_and_hasher(16, FxBuildHasher::default());
        existing.insert(BddNode::mk_zero(num_inputs), BddPointer::zero());
        existing.insert(BddNode::mk_one(num_inputs), BddPointer::one());

        let mut inputs = vec![false; num_inputs as usize];
        result.root = build_levels(function, output, &mut inputs, 0, &mut result, &mut existing);
        result
    }

    /// Create a `Bdd` computing the given single-output function.
    ///
    /// *Panics:* the function must have exactly one output; use
    /// `from_function` to pick a channel of a multi-output function.
    pub fn from_single_output_function<F: BooleanFunction + ?Sized>(function: &F) -> Bdd {
        if function.num_outputs() != 1 {
            panic!(
                "The function has {} outputs, expected exactly one.",
                function.num_outputs()
            );
        }
        Bdd::from_function(function, 0)
    }
}

/// **(internal)** Enumerate the assignments of `inputs[next_input..]`, low
/// branch first, and combine the two sub-results of every level through the
/// canonicalization primitive. At the innermost level, the source function is
/// consulted for the terminal value.
fn build_levels<F: BooleanFunction + ?Sized>(
    function: &F,
    output: usize,
    inputs: &mut Vec<bool>,
    next_input: u16,
    result: &mut Bdd,
    existing: &mut FxHashMap<BddNode, BddPointer>,
) -> BddPointer {
    if next_input == function.num_inputs() {
        BddPointer::from_bool(function.execute(inputs)[output])
    } else {
        inputs[next_input as usize] = false;
        let low = build_levels(function, output, inputs, next_input + 1, result, existing);
        inputs[next_input as usize] = true;
        let high = build_levels(function, output, inputs, next_input + 1, result, existing);
        result.mk_unique(
            BddNode::mk_node(BddVariable(next_input), low, high),
            existing,
        )
    }
}
