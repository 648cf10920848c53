/// Runtime object representation.
///
/// Defines the `Object` enum produced by the evaluator, the shared `TRUE`,
/// `FALSE` and `NULL` constants, type names used in error messages, and the
/// truthiness and identity rules the evaluator relies on.
pub mod core;
/// Name bindings.
///
/// Defines the `Environment` that stores values bound with `let`.
pub mod environment;
