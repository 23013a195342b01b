use super::*;

/// Compute the full truth table of `bdd`, enumerating assignments from the
/// all-true valuation down to the all-false one, with input 0 as the most
/// significant bit.
pub fn truth_table(bdd: &Bdd) -> Vec<bool> {
    let num_inputs = bdd.num_inputs();
    let rows: u32 = 1 << num_inputs;
    (0..rows)
        .rev()
        .map(|row| {
            let values = (0..num_inputs)
                .map(|input| (row >> (num_inputs - 1 - input)) & 1 == 1)
                .collect();
            bdd.eval_in(&BddValuation::new(values))
        })
        .collect()
}

/// The three-input example function from Andersen's lecture notes that the
/// restrict algorithm is classically demonstrated on:
/// $(x_0 \Leftrightarrow x_1) \lor x_2$.
pub fn mk_andersen_example() -> Bdd {
    let mut bdd = Bdd::mk_false(3);
    let x2 = bdd.push_node(BddNode::mk_node(
        BddVariable(2), // x2
        BddPointer::zero(),
        BddPointer::one(),
    ));
    let x1_low = bdd.push_node(BddNode::mk_node(
        BddVariable(1), // !x1 | x2
        BddPointer::one(),
        x2,
    ));
    let x1_high = bdd.push_node(BddNode::mk_node(
        BddVariable(1), // x1 | x2
        x2,
        BddPointer::one(),
    ));
    bdd.root = bdd.push_node(BddNode::mk_node(BddVariable(0), x1_low, x1_high));
    bdd
}

/// The published result of restricting `mk_andersen_example` at input 1
/// to `false`: $\neg x_0 \lor x_2$ (input 1 stays in the space, vacuously).
pub fn mk_andersen_example_restricted() -> Bdd {
    let mut bdd = Bdd::mk_false(3);
    let x2 = bdd.push_node(BddNode::mk_node(
        BddVariable(2), // x2
        BddPointer::zero(),
        BddPointer::one(),
    ));
    bdd.root = bdd.push_node(BddNode::mk_node(BddVariable(0), BddPointer::one(), x2));
    bdd
}

/// The left operand of Andersen's worked apply example (five inputs).
pub fn mk_andersen_apply_left() -> Bdd {
    let mut bdd = Bdd::mk_false(5);
    let x4 = bdd.push_node(BddNode::mk_node(
        BddVariable(4), // !x4
        BddPointer::one(),
        BddPointer::zero(),
    ));
    let x3_low = bdd.push_node(BddNode::mk_node(BddVariable(3), x4, BddPointer::zero()));
    let x3_high = bdd.push_node(BddNode::mk_node(BddVariable(3), BddPointer::zero(), x4));
    let x2 = bdd.push_node(BddNode::mk_node(BddVariable(2), x3_low, x3_high));
    let x1_low = bdd.push_node(BddNode::mk_node(BddVariable(1), x2, BddPointer::zero()));
    let x1_high = bdd.push_node(BddNode::mk_node(BddVariable(1), BddPointer::zero(), x2));
    bdd.root = bdd.push_node(BddNode::mk_node(BddVariable(0), x1_low, x1_high));
    bdd
}

/// The right operand of Andersen's worked apply example (five inputs).
pub fn mk_andersen_apply_right() -> Bdd {
    let mut bdd = Bdd::mk_false(5);
    let x4 = bdd.push_node(BddNode::mk_node(
        BddVariable(4), // !x4
        BddPointer::one(),
        BddPointer::zero(),
    ));
    let x2_low = bdd.push_node(BddNode::mk_node(BddVariable(2), x4, BddPointer::zero()));
    let x2_high = bdd.push_node(BddNode::mk_node(BddVariable(2), BddPointer::zero(), x4));
    bdd.root = bdd.push_node(BddNode::mk_node(BddVariable(0), x2_low, x2_high));
    bdd
}

/// Exclusive-or of the *last* two inputs of a four-input space — what
/// `mk_xor_gate` becomes after prepending two inputs.
pub fn mk_xor_of_high_pair() -> Bdd {
    let mut bdd = Bdd::mk_false(4);
    let x3 = bdd.push_node(BddNode::mk_node(
        BddVariable(3), // x3
        BddPointer::zero(),
        BddPointer::one(),
    ));
    let not_x3 = bdd.push_node(BddNode::mk_node(
        BddVariable(3), // !x3
        BddPointer::one(),
        BddPointer::zero(),
    ));
    bdd.root = bdd.push_node(BddNode::mk_node(BddVariable(2), x3, not_x3));
    bdd
}

/// Exclusive-or of the *first* two inputs of a four-input space — what
/// `mk_xor_gate` becomes after appending two inputs.
pub fn mk_xor_of_low_pair() -> Bdd {
    let mut bdd = Bdd::mk_false(4);
    let x1 = bdd.push_node(BddNode::mk_node(
        BddVariable(1), // x1
        BddPointer::zero(),
        BddPointer::one(),
    ));
    let not_x1 = bdd.push_node(BddNode::mk_node(
        BddVariable(1), // !x1
        BddPointer::one(),
        BddPointer::zero(),
    ));
    bdd.root = bdd.push_node(BddNode::mk_node(BddVariable(0), x1, not_x1));
    bdd
}
