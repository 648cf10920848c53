//! # monkey
//!
//! monkey is an interpreter for a small expression-oriented language written
//! in Rust. Source text is tokenized, parsed with a precedence-climbing parser
//! into an abstract syntax tree, and evaluated by walking that tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{ParseError, ParseErrors},
    interpreter::{
        evaluator::core::Context, lexer::Lexer, object::core::Object, parser::core::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Renders every node back to a canonical, fully parenthesized text.
/// - Offers a borrowed `Node` view so any node can be evaluated.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// This module defines the errors the parser records and the errors the
/// evaluator produces. Both render the exact messages users see.
///
/// # Responsibilities
/// - Defines error enums for both phases (parser, evaluator).
/// - Attaches line numbers to parse errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and runtime objects
/// to provide a complete pipeline from source text to a value.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and objects.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
pub mod repl;

/// Parses source text into a program and the errors met along the way.
///
/// The program is best-effort: statements that failed to parse are missing
/// from it. Callers should check that the error list is empty before trusting
/// the program.
///
/// # Examples
/// ```
/// use monkey::parse;
///
/// let (program, errors) = parse("a - b - c");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "((a - b) - c)");
///
/// let (program, errors) = parse("let = 5;");
/// assert!(!errors.is_empty());
/// assert_eq!(errors[0].to_string(), "expected token type IDENT, got = instead");
/// assert!(program.statements.len() <= 1);
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

/// Returns the final evaluation result of a program.
///
/// The source is parsed in full first; if the parser recorded any errors
/// they are all returned together and nothing is evaluated. Otherwise the
/// program is evaluated in a fresh context and an `Error` object is turned
/// into an `Err`.
///
/// # Errors
/// Returns [`ParseErrors`] if parsing failed, or the
/// [`RuntimeError`](error::RuntimeError) that halted evaluation.
///
/// # Examples
/// ```
/// use monkey::{get_result, interpreter::object::core::Object};
///
/// let result = get_result("(5 + 10 * 2 + 15 / 3) * 2 + -10").unwrap();
/// assert_eq!(result, Object::Integer(50));
///
/// // Example with an intentional error (type mismatch).
/// assert!(get_result("1 + true; 5;").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Object, Box<dyn std::error::Error>> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(Box::new(ParseErrors(errors)));
    }

    match Context::new().eval(&program) {
        Object::Error(e) => Err(Box::new(e)),
        object => Ok(object),
    }
}
