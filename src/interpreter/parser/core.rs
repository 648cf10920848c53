use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::{
        parser::{binary::Precedence, trace::Tracer},
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Handler for a token that starts an expression.
pub type PrefixParseFn<I> = fn(&mut Parser<I>) -> ParseResult<Expression>;
/// Handler for a token that continues an expression from its left operand.
pub type InfixParseFn<I> = fn(&mut Parser<I>, Expression) -> ParseResult<Expression>;

/// A Pratt parser over a pull-based token source.
///
/// The parser always holds the current token and one token of lookahead.
/// It never fails outright: malformed statements are dropped and their error
/// is recorded, so [`Parser::parse_program`] always returns a program and
/// [`Parser::errors`] tells the caller whether it can be trusted.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let mut parser = Parser::new(Lexer::new("-a * b;"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "((-a) * b)");
/// ```
pub struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
    pub(in crate::interpreter::parser) current: Token,
    pub(in crate::interpreter::parser) peek: Token,
    pub(in crate::interpreter::parser) errors: Vec<ParseError>,
    pub(in crate::interpreter::parser) tracer: Tracer,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Creates a parser and primes the current and lookahead tokens.
    ///
    /// A source that runs dry is treated as if it ended with `Eof`.
    pub fn new(tokens: I) -> Self {
        let mut parser = Self { tokens,
                                current: Token::eof(1),
                                peek: Token::eof(1),
                                errors: Vec::new(),
                                tracer: Tracer::default() };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Enables or disables tracing of the recursive descent on stderr.
    #[must_use]
    pub fn with_tracing(self, enabled: bool) -> Self {
        self.with_tracer(Tracer::new(enabled))
    }

    /// Replaces the parser's tracer.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// Returns every error recorded so far, in the order encountered.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser and returns its recorded errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses statements until the end of input.
    ///
    /// A statement that fails to parse is left out of the program and its
    /// error recorded; the parser advances past the token it stopped on and
    /// tries the next statement.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(e) => self.errors.push(e),
            }
            self.next_token();
        }

        program
    }

    /// Parses an expression whose operators bind tighter than `precedence`.
    ///
    /// The current token must start the expression. On return the current
    /// token is the last token of the parsed expression.
    ///
    /// # Errors
    /// - `NoPrefixParseFunction` if the current token cannot start an
    ///   expression.
    /// - Propagates any error from the operand and operator handlers.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        self.traced("parse_expression", |parser| {
                let Some(prefix) = Self::prefix_parse_fn(parser.current.kind) else {
                    return Err(ParseError::NoPrefixParseFunction { kind: parser.current.kind,
                                                                   line: parser.current.line, });
                };
                let mut left = prefix(parser)?;

                while !parser.peek_token_is(TokenKind::Semicolon)
                      && precedence < parser.peek_precedence()
                {
                    let Some(infix) = Self::infix_parse_fn(parser.peek.kind) else {
                        return Ok(left);
                    };
                    parser.next_token();
                    left = infix(parser, left)?;
                }

                Ok(left)
            })
    }

    /// Looks up the handler for a token that starts an expression.
    fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<I>> {
        use TokenKind::{
            Asterisk, Assign, Bang, Comma, Else, Eof, Eq, False, Function, Gt, Ident, If, Illegal,
            Int, LBrace, LParen, Let, Lt, Minus, NewLine, NotEq, Plus, RBrace, RParen, Return,
            Semicolon, Slash, True,
        };

        match kind {
            Ident => Some(Self::parse_identifier),
            Int => Some(Self::parse_integer_literal),
            True | False => Some(Self::parse_boolean),
            Bang | Minus => Some(Self::parse_prefix_expression),
            LParen => Some(Self::parse_grouped_expression),
            If => Some(Self::parse_if_expression),
            Function => Some(Self::parse_function_literal),
            Illegal | Eof | Assign | Plus | Asterisk | Slash | Lt | Gt | Eq | NotEq | Comma
            | Semicolon | RParen | LBrace | RBrace | Let | Else | Return | NewLine => None,
        }
    }

    /// Looks up the handler for a token that continues an expression.
    fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<I>> {
        use TokenKind::{
            Asterisk, Assign, Bang, Comma, Else, Eof, Eq, False, Function, Gt, Ident, If, Illegal,
            Int, LBrace, LParen, Let, Lt, Minus, NewLine, NotEq, Plus, RBrace, RParen, Return,
            Semicolon, Slash, True,
        };

        match kind {
            Plus | Minus | Asterisk | Slash | Lt | Gt | Eq | NotEq => {
                Some(Self::parse_infix_expression)
            },
            Illegal | Eof | Ident | Int | Assign | Bang | Comma | Semicolon | LParen | RParen
            | LBrace | RBrace | Function | Let | True | False | If | Else | Return | NewLine => {
                None
            },
        }
    }

    /// Moves the lookahead token into the current position and pulls a new
    /// lookahead from the source.
    pub(in crate::interpreter::parser) fn next_token(&mut self) {
        let next = self.tokens
                       .next()
                       .unwrap_or_else(|| Token::eof(self.peek.line));
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(in crate::interpreter::parser) fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(in crate::interpreter::parser) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances onto the lookahead token if it has the expected kind.
    ///
    /// # Errors
    /// `UnexpectedToken` naming the lookahead, which is left in place.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self,
                                                      kind: TokenKind)
                                                      -> ParseResult<()> {
        if self.peek_token_is(kind) {
            self.next_token();
            return Ok(());
        }
        Err(ParseError::UnexpectedToken { expected: kind,
                                          found:    self.peek.kind,
                                          line:     self.peek.line, })
    }

    /// Consumes an optional statement-terminating semicolon.
    pub(in crate::interpreter::parser) fn skip_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    pub(in crate::interpreter::parser) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(in crate::interpreter::parser) fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    /// Runs `parse` between a matching pair of trace lines.
    pub(in crate::interpreter::parser) fn traced<T>(&mut self,
                                                    name: &str,
                                                    parse: impl FnOnce(&mut Self) -> T)
                                                    -> T {
        self.tracer.begin(name);
        let result = parse(self);
        self.tracer.end(name);
        result
    }
}
