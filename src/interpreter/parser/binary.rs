use crate::{
    ast::{Expression, InfixOperator},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

/// Binding strength of operators, from loosest to tightest.
///
/// The parser keeps extending an expression only while the next operator
/// binds strictly tighter than the current floor, which makes every infix
/// operator left-associative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Floor for a fresh expression; also the precedence of non-operators.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `!` and `-`
    Prefix,
    /// Call expressions, which bind tightest of all.
    Call,
}

impl Precedence {
    /// Returns the precedence a token has when it appears as an infix
    /// operator.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{parser::binary::Precedence, token::TokenKind};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            _ => Self::Lowest,
        }
    }
}

/// Maps a token kind to its infix operator, if it is one.
#[must_use]
pub const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Asterisk),
        TokenKind::Slash => Some(InfixOperator::Slash),
        TokenKind::Lt => Some(InfixOperator::Lt),
        TokenKind::Gt => Some(InfixOperator::Gt),
        TokenKind::Eq => Some(InfixOperator::Eq),
        TokenKind::NotEq => Some(InfixOperator::NotEq),
        _ => None,
    }
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses the right-hand side of an infix operation.
    ///
    /// The current token is the operator. The right operand is parsed with
    /// the operator's own precedence as the floor, so `a - b - c` groups as
    /// `(a - b) - c`.
    ///
    /// # Errors
    /// - `NoInfixParseFunction` if the current token is not an operator.
    /// - Propagates any error from the right operand.
    pub(in crate::interpreter::parser) fn parse_infix_expression(&mut self,
                                                                 left: Expression)
                                                                 -> ParseResult<Expression> {
        self.traced("parse_infix_expression", |parser| {
                let kind = parser.current.kind;
                let Some(operator) = token_to_infix_operator(kind) else {
                    return Err(ParseError::NoInfixParseFunction { kind,
                                                                  line: parser.current.line });
                };
                let precedence = parser.current_precedence();
                parser.next_token();
                let right = parser.parse_expression(precedence)?;

                Ok(Expression::Infix { left: Box::new(left),
                                       operator,
                                       right: Box::new(right) })
            })
    }
}
