use crate::*;
use fxhash::{FxBuildHasher, FxHashMap};
use log::debug;
use std::cmp::{max, min};

/// Basic logical operations for `Bdd`s:
/// $\neg, \land, \lor, \overline{\land}, \oplus, \Rightarrow, \Leftrightarrow$.
impl Bdd {
    /// Create a `Bdd` corresponding to the $\neg \phi$ formula, where $\phi$
    /// is this `Bdd`.
    pub fn not(&self) -> Bdd {
        if self.is_true() {
            Bdd::mk_false(self.num_inputs())
        } else if self.is_false() {
            Bdd::mk_true(self.num_inputs())
        } else {
            // Note that this does not break the ordering invariant of the
            // graph because we are only flipping terminal links, and terminals
            // already have special positions.
            let mut result = self.clone();
            for node in result.nodes.iter_mut().skip(2) {
                // skip terminals
                node.high_link.flip_if_terminal();
                node.low_link.flip_if_terminal();
            }
            result
        }
    }

    /// Create a `Bdd` corresponding to the $\phi \land \psi$ formula, where
    /// $\phi$ and $\psi$ are the two given `Bdd`s.
    pub fn and(&self, right: &Bdd) -> Bdd {
        apply(self, right, crate::op_function::and)
    }

    /// Create a `Bdd` corresponding to the $\phi \lor \psi$ formula, where
    /// $\phi$ and $\psi$ are the two given `Bdd`s.
    pub fn or(&self, right: &Bdd) -> Bdd {
        apply(self, right, crate::op_function::or)
    }

    /// Create a `Bdd` corresponding to the $\overline{\phi \land \psi}$
    /// formula, where $\phi$ and $\psi$ are the two given `Bdd`s.
    pub fn nand(&self, right: &Bdd) -> Bdd {
        apply(self, right, crate::op_function::nand)
    }

    /// Create a `Bdd` corresponding to the $\phi \Rightarrow \psi$ formula,
    /// where $\phi$ and $\psi$ are the two given `Bdd`s.
    pub fn imp(&self, right: &Bdd) -> Bdd {
        apply(self, right, crate::op_function::imp)
    }

    /// Create a `Bdd` corresponding to the $\phi \Leftrightarrow \psi$
    /// formula, where $\phi$ and $\psi$ are the two given `Bdd`s.
    pub fn iff(&self, right: &Bdd) -> Bdd {
        apply(self, right, crate::op_function::iff)
    }

    /// Create a `Bdd` corresponding to the $\phi \oplus \psi$ formula, where
    /// $\phi$ and $\psi$ are the two given `Bdd`s.
    pub fn xor(&self, right: &Bdd) -> Bdd {
        apply(self, right, crate::op_function::xor)
    }

    /// Create a `Bdd` corresponding to the $\phi \land \neg \psi$ formula,
    /// where $\phi$ and $\psi$ are the two given `Bdd`s.
    pub fn and_not(&self, right: &Bdd) -> Bdd {
        apply(self, right, crate::op_function::and_not)
    }

    /// Apply a general binary operation to two given `Bdd` objects.
    ///
    /// The `op_function` specifies the actual logical operation that will be
    /// performed. See the `op_function` module for examples.
    ///
    /// In general, this function can be used to slightly speed up less common
    /// Boolean operations or to fuse together several operations (like
    /// negation and a binary operation).
    pub fn binary_op<T>(left: &Bdd, right: &Bdd, op_function: T) -> Bdd
    where
        T: Fn(Option<bool>, Option<bool>) -> Option<bool>,
    {
        apply(left, right, op_function)
    }
}

/// **(internal)** Universal function implementing the binary operations.
///
/// The `terminal_lookup` function takes the terminal values of the two
/// currently considered nodes (`None` if the node is not terminal) and returns
/// a boolean as soon as these two nodes can be evaluated by the operation
/// being implemented. For example, if one of the nodes is `false` and we are
/// implementing `and`, we can immediately evaluate to `false`.
///
/// The two operand graphs are walked side by side, always conditioning on the
/// smallest input tested by either of the current nodes; an operand that does
/// not test that input is simply carried into both sub-problems unchanged.
/// Results are memoized per node *pair*, which bounds the exploration by the
/// product of the operand sizes. The memo table lives and dies with a single
/// invocation — pointers of different tables must never meet in one map.
fn apply<T>(left: &Bdd, right: &Bdd, terminal_lookup: T) -> Bdd
where
    T: Fn(Option<bool>, Option<bool>) -> Option<bool>,
{
    let num_inputs = left.num_inputs();
    if right.num_inputs() != num_inputs {
        panic!(
            "Input count mismatch: the functions are not compatible. {} != {}",
            num_inputs,
            right.num_inputs()
        );
    }
    debug!(
        "apply(left = {} nodes, right = {} nodes, inputs = {})",
        left.size(),
        right.size(),
        num_inputs
    );

    // Result holds the new table we are computing; its root is reassigned
    // once the root task is resolved.
    let mut result = Bdd::mk_false(num_inputs);

    // Every node in `result` is indexed in `existing` - this ensures we have
    // no duplicates.
    let mut existing: FxHashMap<BddNode, BddPointer> = FxHashMap::with_capacity_and_hasher(
        max(left.size(), right.size()),
        FxBuildHasher::default(),
    );
    existing.insert(BddNode::mk_zero(num_inputs), BddPointer::zero());
    existing.insert(BddNode::mk_one(num_inputs), BddPointer::one());

    // Task is a pair of pointers into the `left` and `right` BDDs.
    #[derive(Eq, PartialEq, Hash, Copy, Clone)]
    struct Task {
        left: BddPointer,
        right: BddPointer,
    }

    // `stack` is used to explore the two BDDs "side by side" in DFS-like
    // manner. Each task on the stack is a pair of nodes that needs to be fully
    // processed before we are finished.
    let mut stack: Vec<Task> = Vec::with_capacity(max(left.size(), right.size()));
    let root_task = Task {
        left: left.root_pointer(),
        right: right.root_pointer(),
    };
    stack.push(root_task);

    // `finished` is a memoization cache of tasks which are already completed,
    // since the same combination of nodes can be often explored multiple times.
    let mut finished: FxHashMap<Task, BddPointer> = FxHashMap::with_capacity_and_hasher(
        max(left.size(), right.size()),
        FxBuildHasher::default(),
    );

    while let Some(on_stack) = stack.last() {
        if finished.contains_key(on_stack) {
            stack.pop();
        } else {
            // skip finished tasks
            let (l, r) = (on_stack.left, on_stack.right);

            // Determine which input we are conditioning on, moving from
            // smallest to largest.
            let (l_v, r_v) = (left.var_of(l), right.var_of(r));
            let decision_var = min(l_v, r_v);

            // If the input is the same as in the left/right decision node,
            // advance the exploration there. Otherwise, keep the pointers the
            // same.
            let (l_low, l_high) = if l_v != decision_var {
                (l, l)
            } else {
                (left.low_link_of(l), left.high_link_of(l))
            };
            let (r_low, r_high) = if r_v != decision_var {
                (r, r)
            } else {
                (right.low_link_of(r), right.high_link_of(r))
            };

            // Two tasks which correspond to the two recursive sub-problems we
            // need to solve.
            let comp_low = Task {
                left: l_low,
                right: r_low,
            };
            let comp_high = Task {
                left: l_high,
                right: r_high,
            };

            // Try to solve the tasks using the terminal lookup table or from
            // the memoization cache.
            let new_low = terminal_lookup(l_low.as_bool(), r_low.as_bool())
                .map(BddPointer::from_bool)
                .or_else(|| finished.get(&comp_low).cloned());
            let new_high = terminal_lookup(l_high.as_bool(), r_high.as_bool())
                .map(BddPointer::from_bool)
                .or_else(|| finished.get(&comp_high).cloned());

            // If both values are computed, mark this task as resolved.
            if let (Some(new_low), Some(new_high)) = (new_low, new_high) {
                let node = BddNode::mk_node(decision_var, new_low, new_high);
                finished.insert(*on_stack, result.mk_unique(node, &mut existing));
                stack.pop();
            } else {
                // Otherwise, if either value is unknown, push it to the stack.
                if new_low.is_none() {
                    stack.push(comp_low);
                }
                if new_high.is_none() {
                    stack.push(comp_high);
                }
            }
        }
    }

    // The root must be assigned explicitly, even when the combined function
    // is a constant and no decision node was ever emitted.
    result.root = finished[&root_task];
    result
}
