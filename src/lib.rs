//! This crate provides an engine for building, combining and composing
//! [reduced ordered binary decision diagrams](https://en.wikipedia.org/wiki/Binary_decision_diagram)
//! (ROBDDs) — canonical DAG representations of Boolean functions over a fixed
//! ordering of input variables.
//!
//! Every `Bdd` owns its node table, so values are trivial to copy, compare and
//! share between threads, and no operation can ever be observed mutating its
//! operands. Canonical (reduced) form is not a separate pass: it is maintained
//! incrementally by every node-creating operation, so two `Bdd`s over the same
//! input ordering compute the same function exactly when they are structurally
//! isomorphic — which is what `==` checks.
//!
//! Supported operations:
//!
//!  - Synthesis of a `Bdd` from any [boolean_function::BooleanFunction] by
//!    exhaustive truth-table enumeration.
//!  - Hand-assembled constructors for constants, literals and the elementary
//!    two-input gates.
//!  - Any binary logical operation (`and`, `or`, `xor`, `nand`, ...) via the
//!    memoized apply algorithm, and of course negation.
//!  - Restriction of an input to a constant (`var_restrict`).
//!  - Function composition (`compose`, `compose_raw`): substituting one
//!    function's output for another function's input.
//!  - Evaluation in a [BddValuation], input-space re-mapping, and export to
//!    `.dot` graphs.
//!
//! ```rust
//! use robdd::*;
//!
//! let nand = Bdd::mk_nand_gate();
//! let xor = Bdd::mk_xor_gate();
//!
//! // Combine two functions under a binary operator.
//! let conjunction = nand.and(&xor);
//! assert!(conjunction.eval_in(&BddValuation::new(vec![false, true])));
//!
//! // Feed one exclusive-or into input 0 of another: three-input parity.
//! let parity = xor.compose(BddVariable::from_index(0), &xor);
//! assert_eq!(3, parity.num_inputs());
//! assert!(parity.eval_in(&BddValuation::new(vec![true, true, true])));
//! ```

/// The evaluation contract of Boolean functions that can be turned into `Bdd`s.
pub mod boolean_function;
/// Operator functions for use with `Bdd::binary_op`.
pub mod op_function;

/// **(internal)** Implementations for the `Bdd` struct.
mod _impl_bdd;

/// **(internal)** Implementation of the `BddNode`.
mod _impl_bdd_node;

/// **(internal)** Implementation of the `BddPointer`.
mod _impl_bdd_pointer;

/// **(internal)** Implementation of the `BddValuation`.
mod _impl_bdd_valuation;

/// **(internal)** Implementation of the `BddVariable`.
mod _impl_bdd_variable;


/// Several basic utility methods for testing `Bdd`s.
#[cfg(test)]
mod _test_util;

/// An array-based encoding of a reduced ordered binary decision diagram.
///
/// A `Bdd` exclusively owns its node table: indices `0` and `1` are permanently
/// bound to the `false` and `true` terminal nodes, and a distinguished root
/// pointer selects the node where evaluation starts. All construction
/// algorithms allocate a fresh table for their result, hence a `Bdd` is never
/// observably mutated by being used as an operand.
///
/// Equality of `Bdd`s is *functional* equivalence: a memoized depth-first
/// isomorphism check of the two rooted DAGs. For this reason the type
/// deliberately does not implement `Hash`.
#[derive(Clone, Debug)]
pub struct Bdd {
    nodes: Vec<BddNode>,
    root: BddPointer,
}

/// Identifies one of the inputs that can appear as a decision condition in
/// the `Bdd`, i.e. a position in the fixed input ordering.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BddVariable(u16);

/// Exactly describes one assignment of boolean values to the inputs of a `Bdd`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BddValuation(Vec<bool>);

/// Exhaustively iterates over all valuations of a fixed number of inputs.
///
/// Be aware of the exponential number of iterations!
#[derive(Clone)]
pub struct BddValuationIterator(Option<BddValuation>);

/// A type-safe index into the `Bdd` node array representation.
///
/// BDD pointers are an internal type-safe wrapper around indices into BDD
/// arrays. Outside this crate, no one should know or care about their
/// existence. Since we can't reasonably expect a BDD to be larger than `2^32`
/// right now, the pointer is represented as `u32` instead of `usize`, because
/// `usize` can be 64-bits and pointers represent most of the memory consumed
/// by our BDDs.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BddPointer(u32);

/// **(internal)** Representation of individual vertices of the `Bdd` directed
/// acyclic graph.
///
/// A `BddNode` can be a terminal, in which case it is either `0` or `1`, or a
/// decision node, in which case it tests the input `var` and carries two
/// pointers (`low_link` and `high_link`) to other nodes in the same `Bdd`,
/// followed when `var` is `false`/`true` respectively.
///
/// Internally, we represent terminal nodes using the same structure, giving
/// them cyclic pointers. Instead of an input index, terminals carry the number
/// of inputs of the owning `Bdd`. This is consistent with the fact that we
/// first condition on the smallest input indices, and it removes the terminal
/// special case from the variable-interleaving logic of the construction
/// algorithms.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
struct BddNode {
    pub var: BddVariable,
    pub low_link: BddPointer,
    pub high_link: BddPointer,
}
