/// Parser state, token handling and the precedence-climbing loop.
///
/// Contains the `Parser` struct, the prefix and infix handler tables, and
/// the entry point `parse_program`.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the current token to `let`, `return` and expression
/// statements.
pub mod statement;

/// Prefix expression parsing.
///
/// Handles identifiers, literals, prefix operators and grouped expressions.
pub mod unary;

/// Infix expression parsing and the precedence table.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited blocks and the constructs built on them: `if`
/// expressions and function literals.
pub mod block;

/// Helpers shared by several parsing routines.
pub mod utils;

/// Optional tracing of the parser's recursive descent.
pub mod trace;
