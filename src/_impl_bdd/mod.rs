/// **(internal)** Apply algorithm and the named binary logical operations.
mod _impl_boolean_ops;

/// **(internal)** Function composition via Shannon expansion.
mod _impl_compose;

/// **(internal)** Export of `Bdd`s into `.dot` graphs.
mod _impl_export_dot;

/// **(internal)** Hand-assembled constructors for the elementary gates.
mod _impl_gates;

/// **(internal)** Re-mapping of the input space (concatenation, collapsing).
mod _impl_input_space;

/// **(internal)** The restrict algorithm (fixing one input to a constant).
mod _impl_restrict;

/// **(internal)** Structural equality of `Bdd`s as rooted-DAG isomorphism.
mod _impl_structural_eq;

/// **(internal)** Synthesis of `Bdd`s from Boolean functions by truth-table
/// enumeration.
mod _impl_synthesis;

/// **(internal)** Utility methods: accessors, constructors and the
/// hash-consing primitive maintaining canonical form.
mod _impl_util;
