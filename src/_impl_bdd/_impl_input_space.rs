use crate::*;

/// Re-mapping operations on the input space of a `Bdd`.
///
/// These are the only operations that mutate an existing table: they rewrite
/// the `var` field of every node in place, as a deliberate pre-processing step
/// before composing functions whose input spaces must first be made disjoint.
/// The graph structure itself (links, root) never changes.
impl Bdd {
    /// Prepend `count` fresh inputs to the input space of this function.
    ///
    /// Every existing input moves up by `count` positions, so the function
    /// now ignores inputs `0..count` and tests the remaining ones exactly as
    /// before.
    pub fn pre_concatenate_inputs(&mut self, count: u16) {
        let num_inputs = self.num_inputs();
        if num_inputs.checked_add(count).is_none() {
            panic!(
                "Cannot add {} inputs to a function of {} inputs.",
                count, num_inputs
            );
        }
        // Terminal markers carry `num_inputs` and therefore shift with the
        // decision nodes.
        for node in self.nodes.iter_mut() {
            node.var.0 += count;
        }
    }

    /// Append `count` fresh inputs to the input space of this function.
    ///
    /// Existing inputs keep their positions; the function ignores the new
    /// trailing inputs.
    pub fn post_concatenate_inputs(&mut self, count: u16) {
        let num_inputs = self.num_inputs();
        let new_count = match num_inputs.checked_add(count) {
            Some(new_count) => new_count,
            None => panic!(
                "Cannot add {} inputs to a function of {} inputs.",
                count, num_inputs
            ),
        };
        self.nodes[0].var = BddVariable(new_count);
        self.nodes[1].var = BddVariable(new_count);
    }

    /// Remove input `var` from the input space of this function, shifting all
    /// higher inputs down by one position.
    ///
    /// *Panics:* the function must not depend on `var` (the slot has to be
    /// vacuous, e.g. after the input was substituted away by composition),
    /// and `var < num_inputs`.
    pub fn collapse_input(&mut self, var: BddVariable) {
        let num_inputs = self.num_inputs();
        if var.0 >= num_inputs {
            panic!(
                "Cannot collapse input {} in a function of {} inputs.",
                var, num_inputs
            );
        }
        for node in self.nodes.iter().skip(2) {
            if node.var == var {
                panic!(
                    "Cannot collapse input {}: the function still depends on it.",
                    var
                );
            }
        }
        // Shift everything above the removed slot, terminal markers included.
        for node in self.nodes.iter_mut() {
            if node.var > var {
                node.var.0 -= 1;
            }
        }
    }
}
