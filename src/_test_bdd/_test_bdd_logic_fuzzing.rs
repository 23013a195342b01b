//!
//! Here, we have a small toolbox for fuzzing the construction algorithms.
//! It allows us to create an evaluable binary tree of operations, where
//! each leaf is a random input variable and each tree node represents one
//! binary boolean operation, possibly negated.
//!
//! Hence, each tree is just a Boolean formula. We can produce a `Bdd` for
//! this formula and exhaustively check whether all valuations actually match
//! the result expected by the op tree. To get predictable test cases, we use
//! a predefined set of randomness seeds.
//!
//! On top of the plain formula check, each tree also exercises restriction
//! (compared against evaluation with the input forced) and raw
//! self-substitution (which must be an identity).

use crate::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

#[derive(Debug)]
enum BddOp {
    And,
    Or,
    Xor,
    Imp,
    Iff,
}

#[derive(Debug)]
struct Op {
    op: BddOp,
    negate: bool,
}

#[derive(Debug)]
struct BddOpTree {
    leaves: Vec<BddVariable>,
    ops: Vec<Vec<Op>>,
}

impl BddOpTree {
    /// Create a new random tree. The `tree_height` is the number of levels in
    /// the tree (so the number of leaves will be `2^tree_height`).
    fn new_random(tree_height: u8, num_inputs: u16, seed: u64) -> BddOpTree {
        let mut rand = StdRng::seed_from_u64(seed);
        let num_leaves = 1 << (tree_height as usize);
        let mut levels: Vec<Vec<Op>> = Vec::new();

        let leaves: Vec<BddVariable> = (0..num_leaves)
            .map(|_| {
                let id = rand.next_u32() % num_inputs as u32;
                BddVariable(id as u16)
            })
            .collect();

        let mut level_width = num_leaves / 2;
        for _ in 0..tree_height {
            let level: Vec<Op> = (0..level_width)
                .map(|_| {
                    let negate = rand.next_u32() % 2 == 0;
                    let op = match rand.next_u32() % 5 {
                        0 => BddOp::And,
                        1 => BddOp::Or,
                        2 => BddOp::Xor,
                        3 => BddOp::Imp,
                        _ => BddOp::Iff,
                    };
                    Op { op, negate }
                })
                .collect();
            levels.push(level);
            level_width /= 2;
        }

        BddOpTree {
            leaves,
            ops: levels,
        }
    }

    /// Evaluate this op tree into a `Bdd` over the given number of inputs.
    fn eval_as_bdd(&self, num_inputs: u16) -> Bdd {
        let mut formulas: Vec<Bdd> = self
            .leaves
            .iter()
            .map(|v| Bdd::mk_var(num_inputs, *v))
            .collect();

        for level in self.ops.iter() {
            let mut i = 0;
            let mut new_formulas = Vec::new();
            while i < formulas.len() {
                let a = &formulas[i];
                let b = &formulas[i + 1];
                let op = &level[i / 2];
                let result = match op.op {
                    BddOp::And => a.and(b),
                    BddOp::Or => a.or(b),
                    BddOp::Xor => a.xor(b),
                    BddOp::Imp => a.imp(b),
                    BddOp::Iff => a.iff(b),
                };
                if op.negate {
                    new_formulas.push(result.not())
                } else {
                    new_formulas.push(result);
                }
                i += 2;
            }
            formulas = new_formulas;
        }

        formulas[0].clone()
    }

    /// Evaluate this op tree in the specified valuation.
    fn eval_in_valuation(&self, valuation: &BddValuation) -> bool {
        let mut values: Vec<bool> = self.leaves.iter().map(|v| valuation.value(*v)).collect();

        for level in self.ops.iter() {
            let mut i = 0;
            let mut new_values = Vec::new();
            while i < values.len() {
                let a = values[i];
                let b = values[i + 1];
                let op = &level[i / 2];
                let result = match op.op {
                    BddOp::And => a && b,
                    BddOp::Or => a || b,
                    BddOp::Xor => a ^ b,
                    BddOp::Imp => (!a) || b,
                    BddOp::Iff => a == b,
                };
                if op.negate {
                    new_values.push(!result)
                } else {
                    new_values.push(result);
                }
                i += 2;
            }
            values = new_values;
        }

        values[0]
    }
}

const FUZZ_SEEDS: [u64; 10] = [
    1, 12, 123, 1234, 12345, 123456, 1234567, 12345678, 123456789, 1234567890,
];

fn fuzz_test(num_inputs: u16, tree_height: u8, seed: u64) -> bool {
    let op_tree = BddOpTree::new_random(tree_height, num_inputs, seed);
    let eval = op_tree.eval_as_bdd(num_inputs);

    assert!(eval.validate().is_ok());

    if eval.is_true() || eval.is_false() {
        return false;
    }

    for valuation in BddValuationIterator::new(num_inputs) {
        assert_eq!(
            op_tree.eval_in_valuation(&valuation),
            eval.eval_in(&valuation),
            "Error in valuation {}",
            valuation
        );
    }

    // Restriction agrees with evaluation under a forced input.
    let restrict_var = op_tree.leaves[0];
    let restrict_value = seed % 2 == 0;
    let restricted = eval.var_restrict(restrict_var, restrict_value);
    assert!(restricted.validate().is_ok());
    for valuation in BddValuationIterator::new(num_inputs) {
        let mut forced = valuation.clone();
        if forced.value(restrict_var) != restrict_value {
            forced.flip_value(restrict_var);
        }
        assert_eq!(
            eval.eval_in(&forced),
            restricted.eval_in(&valuation),
            "Error restricting {} in valuation {}",
            restrict_var,
            valuation
        );
    }

    // Raw self-substitution is an identity.
    let substituted = eval.compose_raw(restrict_var, &Bdd::mk_var(num_inputs, restrict_var));
    assert_eq!(eval, substituted);

    true
}

#[test]
fn fuzz_inputs_2() {
    let mut non_trivial = 0;

    for height in 1..9 {
        for seed in FUZZ_SEEDS.iter() {
            if fuzz_test(2, height, *seed) {
                non_trivial += 1;
            }
        }
    }

    println!(
        "Check {}/{} non-trivial BDDs.",
        non_trivial,
        8 * FUZZ_SEEDS.len()
    );
}

#[test]
fn fuzz_inputs_4() {
    let mut non_trivial = 0;

    for height in 1..9 {
        for seed in FUZZ_SEEDS.iter() {
            if fuzz_test(4, height, *seed) {
                non_trivial += 1;
            }
        }
    }

    println!(
        "Check {}/{} non-trivial BDDs.",
        non_trivial,
        8 * FUZZ_SEEDS.len()
    );
}

#[test]
fn fuzz_inputs_8() {
    let mut non_trivial = 0;

    for height in 1..9 {
        for seed in FUZZ_SEEDS.iter() {
            if fuzz_test(8, height, *seed) {
                non_trivial += 1;
            }
        }
    }

    println!(
        "Check {}/{} non-trivial BDDs.",
        non_trivial,
        8 * FUZZ_SEEDS.len()
    );
}
