/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the central dispatch over AST nodes, and
/// the statement, block and program rules that propagate `return` values and
/// errors.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements `!` under truthiness and integer negation.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements integer arithmetic and comparisons, the identity fallback for
/// `==` and `!=`, and the type-mismatch and unknown-operator errors.
pub mod binary;

/// Utility functions for evaluation.
///
/// Provides conditional evaluation and name lookup.
pub mod utils;
