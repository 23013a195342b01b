//! Contains simple operator functions that can be used with `Bdd::binary_op` to
//! implement binary logical operations.
//!
//! Each operator is a *partial* function on terminal values: it receives the
//! terminal values of the two nodes currently combined (`None` when the node is
//! not terminal) and returns the result value as soon as it is determined. For
//! example, `and` can answer `Some(false)` once either operand is `false`, even
//! if the other operand is still a decision node.

/// Partial operator function corresponding to $x \land y$.
pub fn and(l: Option<bool>, r: Option<bool>) -> Option<bool> {
    match (l, r) {
        (Some(true), Some(true)) => Some(true),
        (Some(false), _) => Some(false),
        (_, Some(false)) => Some(false),
        _ => None,
    }
}

/// Partial operator function corresponding to $x \lor y$.
pub fn or(l: Option<bool>, r: Option<bool>) -> Option<bool> {
    match (l, r) {
        (Some(false), Some(false)) => Some(false),
        (Some(true), _) => Some(true),
        (_, Some(true)) => Some(true),
        _ => None,
    }
}

/// Partial operator function corresponding to $\neg (x \land y)$.
pub fn nand(l: Option<bool>, r: Option<bool>) -> Option<bool> {
    match (l, r) {
        (Some(true), Some(true)) => Some(false),
        (Some(false), _) => Some(true),
        (_, Some(false)) => Some(true),
        _ => None,
    }
}

/// Partial operator function corresponding to $x \Rightarrow y$.
pub fn imp(l: Option<bool>, r: Option<bool>) -> Option<bool> {
    match (l, r) {
        (Some(true), Some(false)) => Some(false),
        (Some(false), _) => Some(true),
        (_, Some(true)) => Some(true),
        _ => None,
    }
}

/// Partial operator function corresponding to $x \Leftrightarrow y$.
pub fn iff(l: Option<bool>, r: Option<bool>) -> Option<bool> {
    match (l, r) {
        (Some(l), Some(r)) => Some(l == r),
        _ => None,
    }
}

/// Partial operator function corresponding to $x \oplus y$.
pub fn xor(l: Option<bool>, r: Option<bool>) -> Option<bool> {
    match (l, r) {
        (Some(l), Some(r)) => Some(l ^ r),
        _ => None,
    }
}

/// Partial operator function corresponding to $x \land \neg y$.
pub fn and_not(l: Option<bool>, r: Option<bool>) -> Option<bool> {
    match (l, r) {
        (Some(false), _) => Some(false),
        (_, Some(true)) => Some(false),
        (Some(true), Some(false)) => Some(true),
        _ => None,
    }
}
