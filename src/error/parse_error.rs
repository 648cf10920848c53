use crate::interpreter::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A specific token kind was required next but another one was found.
    UnexpectedToken {
        /// The token kind that was required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A token that cannot start an expression appeared in expression
    /// position.
    NoPrefixParseFunction {
        /// The offending token kind.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token that cannot continue an expression was treated as an infix
    /// operator.
    NoInfixParseFunction {
        /// The offending token kind.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer literal text that does not fit a 64-bit signed integer.
    InvalidInteger {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Boolean literal text other than `true` or `false`.
    InvalidBoolean {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Gets the source line the error was recorded on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParseFunction { line, .. }
            | Self::NoInfixParseFunction { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::InvalidBoolean { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, .. } => {
                write!(f, "expected token type {expected}, got {found} instead")
            },
            Self::NoPrefixParseFunction { kind, .. } => {
                write!(f, "no prefix parse function for {kind} found")
            },
            Self::NoInfixParseFunction { kind, .. } => {
                write!(f, "no infix parse function for {kind} found")
            },
            Self::InvalidInteger { literal, .. } => {
                write!(f, "could not parse \"{literal}\" as integer")
            },
            Self::InvalidBoolean { literal, .. } => {
                write!(f, "could not parse \"{literal}\" as boolean")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// Every error recorded while parsing one program.
///
/// Returned by [`crate::get_result`] when the parser reported anything, since
/// a program with parse errors is never evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "Error on line {}: {error}", error.line())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
