use crate::*;
use log::debug;

/// Function composition: substituting one function's output for another
/// function's input.
impl Bdd {
    /// Create a `Bdd` of the function obtained by feeding the output of
    /// `inner` into input `var` of this function (elementary composition).
    ///
    /// The input spaces of the two operands are concatenated automatically:
    /// if the operands have `k1` and `k2` inputs, the result has exactly
    /// `k1 + k2 - 1` — the inputs of `inner` occupy positions `0..k2`, the
    /// remaining inputs of this function follow in their original order, and
    /// the substituted slot disappears.
    ///
    /// *Panics:* `var` must be an input of this function, i.e. `var < num_inputs`.
    pub fn compose(&self, var: BddVariable, inner: &Bdd) -> Bdd {
        let outer_inputs = self.num_inputs();
        let inner_inputs = inner.num_inputs();
        if var.0 >= outer_inputs {
            panic!(
                "Cannot compose into input {} of a function of {} inputs.",
                var, outer_inputs
            );
        }
        debug!(
            "compose(outer = {} nodes / {} inputs, inner = {} nodes / {} inputs, var = {})",
            self.size(),
            outer_inputs,
            inner.size(),
            inner_inputs,
            var
        );

        // Re-map the operand copies into one disjoint input space: inner
        // keeps the low positions, outer moves up by `k2`, and the target
        // slot moves with it.
        let mut outer = self.clone();
        let mut inner = inner.clone();
        outer.pre_concatenate_inputs(inner_inputs);
        let var = BddVariable(var.0 + inner_inputs);
        inner.post_concatenate_inputs(outer_inputs);

        let mut result = shannon_substitution(&outer, &inner, var);
        // The substituted slot is now vacuous and can be removed.
        result.collapse_input(var);
        result
    }

    /// Create a `Bdd` of the function obtained by substituting `inner` for
    /// input `var` of this function *without* any input re-indexing.
    ///
    /// The caller is responsible for having already aligned the input spaces
    /// of the two operands (see `pre_concatenate_inputs` and
    /// `post_concatenate_inputs`); this is the right tool when composing
    /// functions that deliberately share inputs. The input space of the
    /// result is the common input space of the operands and no slot is
    /// collapsed.
    ///
    /// *Panics:* `var` must be an input of this function, and the operand
    /// input counts must match.
    pub fn compose_raw(&self, var: BddVariable, inner: &Bdd) -> Bdd {
        if var.0 >= self.num_inputs() {
            panic!(
                "Cannot compose into input {} of a function of {} inputs.",
                var,
                self.num_inputs()
            );
        }
        if inner.num_inputs() != self.num_inputs() {
            panic!(
                "Input count mismatch: the functions are not compatible. {} != {}",
                self.num_inputs(),
                inner.num_inputs()
            );
        }
        shannon_substitution(self, inner, var)
    }
}

/// **(internal)** Substitute `inner` for input `var` of `outer`, assuming the
/// two functions already live in the same input space.
///
/// Uses the Shannon expansion of `outer` on `var`:
/// `outer[var <- inner] = (inner ∧ outer|var=1) ∨ (¬inner ∧ outer|var=0)`,
/// i.e. two restricts and three applies. All intermediate graphs are
/// discarded.
fn shannon_substitution(outer: &Bdd, inner: &Bdd, var: BddVariable) -> Bdd {
    // A constant inner function selects one of the two restrictions directly.
    if let Some(value) = inner.as_bool() {
        return outer.var_restrict(var, value);
    }

    let when_true = inner.and(&outer.var_restrict(var, true));
    let when_false = inner.not().and(&outer.var_restrict(var, false));
    when_true.or(&when_false)
}
