/// Parsing errors.
///
/// Defines the errors the parser records while building the AST. Parse errors
/// are accumulated rather than raised: the parser always produces a program
/// and hands the collected errors back alongside it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be produced during evaluation. Runtime
/// errors travel inside `Object::Error` and halt the current evaluation.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
