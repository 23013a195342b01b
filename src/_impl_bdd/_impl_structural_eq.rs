use crate::*;
use fxhash::FxHashSet;

/// Equality of `Bdd`s is *functional* equivalence.
///
/// Two reduced ordered decision diagrams over the same input ordering compute
/// the same function exactly when they are isomorphic as rooted DAGs, so the
/// check is a depth-first traversal from both roots comparing node *content* —
/// never node indices, since two independently built tables will generally
/// number equivalent nodes differently. Already-confirmed pairs are tracked in
/// a visited set, keeping the traversal linear in the smaller graph; without
/// the set, diagrams with heavy sharing degrade exponentially.
impl PartialEq for Bdd {
    fn eq(&self, other: &Self) -> bool {
        if self.num_inputs() != other.num_inputs() {
            return false;
        }
        let mut confirmed: FxHashSet<(BddPointer, BddPointer)> = FxHashSet::default();
        let mut stack: Vec<(BddPointer, BddPointer)> =
            vec![(self.root_pointer(), other.root_pointer())];
        while let Some((left, right)) = stack.pop() {
            if left.is_terminal() || right.is_terminal() {
                // Terminals sit at fixed indices in every table, so content
                // comparison reduces to pointer comparison, and a terminal can
                // never match a decision node.
                if left != right {
                    return false;
                }
                continue;
            }
            if !confirmed.insert((left, right)) {
                continue;
            }
            if self.var_of(left) != other.var_of(right) {
                return false;
            }
            stack.push((self.low_link_of(left), other.low_link_of(right)));
            stack.push((self.high_link_of(left), other.high_link_of(right)));
        }
        true
    }
}

impl Eq for Bdd {}
