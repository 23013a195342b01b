use super::*;

impl BddNode {
    /// Make a new terminal `zero` node.
    pub fn mk_zero(num_inputs: u16) -> BddNode {
        BddNode {
            var: BddVariable(num_inputs),
            low_link: BddPointer::zero(),
            high_link: BddPointer::zero(),
        }
    }

    /// Make a new terminal `one` node.
    pub fn mk_one(num_inputs: u16) -> BddNode {
        BddNode {
            var: BddVariable(num_inputs),
            low_link: BddPointer::one(),
            high_link: BddPointer::one(),
        }
    }

    /// Make a new general node.
    ///
    /// *Assumptions:*
    ///  - `low_link` and `high_link` are pointers in the same `Bdd` array.
    ///  - Returned node will be added to the same `Bdd` where `low_link` and
    ///    `high_link` are pointers.
    pub fn mk_node(var: BddVariable, low_link: BddPointer, high_link: BddPointer) -> BddNode {
        BddNode {
            var,
            low_link,
            high_link,
        }
    }

    /// Check whether this node is a terminal. Valid only under the terminal
    /// encoding of this crate: terminals have self-referential links.
    pub fn is_terminal(&self) -> bool {
        self.low_link == self.high_link && (self.low_link.is_one() || self.low_link.is_zero())
    }

    /// Check whether this node is the `one` terminal.
    pub fn is_one(&self) -> bool {
        self.is_terminal() && self.low_link.is_one()
    }

    /// Check whether this node is the `zero` terminal.
    pub fn is_zero(&self) -> bool {
        self.is_terminal() && self.low_link.is_zero()
    }
}
