use logos::Logos;

use crate::interpreter::token::{LexerExtras, Token, TokenKind};

/// Turns source text into a stream of [`Token`]s.
///
/// The lexer never fails: unrecognized input becomes [`TokenKind::Illegal`]
/// and the parser reports it. Once the input is exhausted,
/// [`Lexer::next_token`] keeps returning [`TokenKind::Eof`].
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("let x = 5;");
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal, "x");
/// ```
pub struct Lexer<'source> {
    inner:    logos::Lexer<'source, TokenKind>,
    finished: bool,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over `source`, starting at line 1.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner:    TokenKind::lexer_with_extras(source, LexerExtras::default()),
               finished: false, }
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Token {
        let kind = match self.inner.next() {
            Some(Ok(kind)) => kind,
            Some(Err(())) => TokenKind::Illegal,
            None => return Token::eof(self.inner.extras.line),
        };
        Token::new(kind, self.inner.slice(), self.inner.extras.line)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token including the terminating `Eof`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}
