use crate::*;

/// Hand-assembled constructors for the elementary gate functions.
///
/// These bypass truth-table synthesis entirely — the canonical graphs are
/// known and tiny, so they are pushed directly.
impl Bdd {
    /// A single-input function that negates its input.
    pub fn mk_not_gate() -> Bdd {
        let mut bdd = Bdd::mk_false(1);
        bdd.root = bdd.push_node(BddNode::mk_node(
            BddVariable(0),
            BddPointer::one(),
            BddPointer::zero(),
        ));
        bdd
    }

    /// A single-input function that passes its input through unchanged
    /// (the shunt).
    pub fn mk_identity_gate() -> Bdd {
        let mut bdd = Bdd::mk_false(1);
        bdd.root = bdd.push_node(BddNode::mk_node(
            BddVariable(0),
            BddPointer::zero(),
            BddPointer::one(),
        ));
        bdd
    }

    /// The two-input conjunction gate.
    pub fn mk_and_gate() -> Bdd {
        let mut bdd = Bdd::mk_false(2);
        let x1 = bdd.push_node(BddNode::mk_node(
            BddVariable(1), // x1
            BddPointer::zero(),
            BddPointer::one(),
        ));
        bdd.root = bdd.push_node(BddNode::mk_node(BddVariable(0), BddPointer::zero(), x1));
        bdd
    }

    /// The two-input disjunction gate.
    pub fn mk_or_gate() -> Bdd {
        let mut bdd = Bdd::mk_false(2);
        let x1 = bdd.push_node(BddNode::mk_node(
            BddVariable(1), // x1
            BddPointer::zero(),
            BddPointer::one(),
        ));
        bdd.root = bdd.push_node(BddNode::mk_node(BddVariable(0), x1, BddPointer::one()));
        bdd
    }

    /// The two-input exclusive-or gate.
    pub fn mk_xor_gate() -> Bdd {
        let mut bdd = Bdd::mk_false(2);
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

    /// The two-input negated-conjunction gate.
    pub fn mk_nand_gate() -> Bdd {
        let mut bdd = Bdd::mk_false(2);
        let not_x1 = bdd.push_node(BddNode::mk_node(
            BddVariable(1), // !x1
            BddPointer::one(),
            BddPointer::zero(),
        ));
        bdd.root = bdd.push_node(BddNode::mk_node(BddVariable(0), BddPointer::one(), not_x1));
        bdd
    }
}
