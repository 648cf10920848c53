/// The evaluator module walks the AST and computes runtime objects.
///
/// The evaluator dispatches on every AST variant, applies prefix and infix
/// operators to integers and booleans, threads statement results through
/// blocks and programs, and turns failures into `Error` objects that halt
/// evaluation.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Propagates `return` values and errors through nested blocks.
/// - Manages `let` bindings in the evaluation context.
pub mod evaluator;
/// The lexer module tokenizes source code for the parser.
///
/// The lexer reads raw source text and produces tokens one at a time. It is
/// the parser's only source of input.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and line.
/// - Turns unrecognized characters into `Illegal` tokens instead of failing.
/// - Terminates the stream with an `Eof` token.
pub mod lexer;
/// The object module defines the runtime values produced by evaluation.
///
/// # Responsibilities
/// - Defines the `Object` enum and the shared boolean and null constants.
/// - Implements truthiness, identity comparison and type names.
/// - Stores `let` bindings in an `Environment`.
pub mod object;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens one ahead of its current position and builds the
/// AST with recursive descent for statements and precedence climbing for
/// expressions. Errors are collected rather than raised.
///
/// # Responsibilities
/// - Converts tokens into AST nodes (statements, expressions, blocks).
/// - Resolves operator precedence and associativity.
/// - Records every syntax error and keeps parsing the rest of the input.
pub mod parser;
/// The token module defines the lexical units shared by lexer and parser.
pub mod token;
