use crate::*;
use fxhash::{FxBuildHasher, FxHashMap};
use log::debug;

/// The restrict algorithm: fixing one input of a function to a constant.
impl Bdd {
    /// Create a `Bdd` of the function obtained by fixing input `var` of this
    /// function to `value`.
    ///
    /// The resulting function no longer depends on `var`, but its input space
    /// is unchanged — the input simply becomes vacuous. Decision nodes testing
    /// `var` are replaced by the child selected by `value`; everything else is
    /// re-emitted, canonically, into a fresh table. Results are memoized per
    /// node of this `Bdd`.
    ///
    /// *Panics:* `var` must be an input of the function, i.e. `var < num_inputs`.
    pub fn var_restrict(&self, var: BddVariable, value: bool) -> Bdd {
        let num_inputs = self.num_inputs();
        if var.0 >= num_inputs {
            panic!(
                "Cannot restrict input {} in a function of {} inputs.",
                var, num_inputs
            );
        }
        debug!(
            "restrict(size = {} nodes, var = {}, value = {})",
            self.size(),
            var,
            value
        );

        let mut result = Bdd::mk_false(num_inputs);

        let mut existing: FxHashMap<BddNode, BddPointer> =
            FxHashMap::with_capacity_and_hasher(self.size(), FxBuildHasher::default());
        existing.insert(BddNode::mk_zero(num_inputs), BddPointer::zero());
        existing.insert(BddNode::mk_one(num_inputs), BddPointer::one());

        // Memoization cache of already rebuilt nodes; terminals map to
        // themselves, since they sit at the same indices in every table.
        let mut finished: FxHashMap<BddPointer, BddPointer> =
            FxHashMap::with_capacity_and_hasher(self.size(), FxBuildHasher::default());
        finished.insert(BddPointer::zero(), BddPointer::zero());
        finished.insert(BddPointer::one(), BddPointer::one());

        let mut stack: Vec<BddPointer> = vec![self.root_pointer()];
        while let Some(&top) = stack.last() {
            if finished.contains_key(&top) {
                stack.pop();
                continue;
            }
            let top_var = self.var_of(top);
            if top_var == var {
                // The tested node disappears; the selected child stands in
                // for it.
                let selected = if value {
                    self.high_link_of(top)
                } else {
                    self.low_link_of(top)
                };
                if let Some(&new_selected) = finished.get(&selected) {
                    finished.insert(top, new_selected);
                    stack.pop();
                } else {
                    stack.push(selected);
                }
            } else {
                let (low, high) = (self.low_link_of(top), self.high_link_of(top));
                let new_low = finished.get(&low).copied();
                let new_high = finished.get(&high).copied();
                if let (Some(new_low), Some(new_high)) = (new_low, new_high) {
                    let node = BddNode::mk_node(top_var, new_low, new_high);
                    finished.insert(top, result.mk_unique(node, &mut existing));
                    stack.pop();
                } else {
                    if new_low.is_none() {
                        stack.push(low);
                    }
                    if new_high.is_none() {
                        stack.push(high);
                    }
                }
            }
        }

        // Even a constant result must reassign the root.
        result.root = finished[&self.root_pointer()];
        result
    }
}
