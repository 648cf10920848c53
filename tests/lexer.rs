use monkey::interpreter::{
    lexer::Lexer,
    token::{Token, TokenKind},
};

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(source).map(|token| (token.kind, token.literal))
                      .collect()
}

#[test]
fn tokenizes_a_small_program() {
    use TokenKind::{
        Asterisk, Assign, Bang, Comma, Else, Eof, Eq, False, Function, Gt, Ident, If, Int, LBrace,
        LParen, Let, Lt, Minus, NotEq, Plus, RBrace, RParen, Return, Semicolon, Slash, True,
    };

    let source = "let five = 5;
let add = fn(x, y) {
  x + y;
};
!-/*5;
5 < 10 > 5;
if (5 < 10) { return true; } else { return false; }
10 == 10; 10 != 9;";

    let expected = [(Let, "let"),
                    (Ident, "five"),
                    (Assign, "="),
                    (Int, "5"),
                    (Semicolon, ";"),
                    (Let, "let"),
                    (Ident, "add"),
                    (Assign, "="),
                    (Function, "fn"),
                    (LParen, "("),
                    (Ident, "x"),
                    (Comma, ","),
                    (Ident, "y"),
                    (RParen, ")"),
                    (LBrace, "{"),
                    (Ident, "x"),
                    (Plus, "+"),
                    (Ident, "y"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Semicolon, ";"),
                    (Bang, "!"),
                    (Minus, "-"),
                    (Slash, "/"),
                    (Asterisk, "*"),
                    (Int, "5"),
                    (Semicolon, ";"),
                    (Int, "5"),
                    (Lt, "<"),
                    (Int, "10"),
                    (Gt, ">"),
                    (Int, "5"),
                    (Semicolon, ";"),
                    (If, "if"),
                    (LParen, "("),
                    (Int, "5"),
                    (Lt, "<"),
                    (Int, "10"),
                    (RParen, ")"),
                    (LBrace, "{"),
                    (Return, "return"),
                    (True, "true"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Else, "else"),
                    (LBrace, "{"),
                    (Return, "return"),
                    (False, "false"),
                    (Semicolon, ";"),
                    (RBrace, "}"),
                    (Int, "10"),
                    (Eq, "=="),
                    (Int, "10"),
                    (Semicolon, ";"),
                    (Int, "10"),
                    (NotEq, "!="),
                    (Int, "9"),
                    (Semicolon, ";"),
                    (Eof, "")];

    let expected: Vec<(TokenKind, String)> =
        expected.iter()
                .map(|(kind, literal)| (*kind, (*literal).to_string()))
                .collect();

    assert_eq!(kinds_and_literals(source), expected);
}

#[test]
fn keywords_only_match_whole_words() {
    let tokens = kinds_and_literals("fn fnx letter iffy return_value");
    let kinds: Vec<TokenKind> = tokens.iter().map(|(kind, _)| *kind).collect();

    assert_eq!(kinds,
               vec![TokenKind::Function,
                    TokenKind::Ident,
                    TokenKind::Ident,
                    TokenKind::Ident,
                    TokenKind::Ident,
                    TokenKind::Eof]);
}

#[test]
fn unknown_characters_become_illegal_tokens() {
    let tokens = kinds_and_literals("5 @ 5");

    assert_eq!(tokens[1], (TokenKind::Illegal, "@".to_string()));
    assert_eq!(tokens.len(), 4);
}

#[test]
fn tokens_carry_their_line() {
    let lines: Vec<usize> = Lexer::new("let x = 1;\n\nx").map(|token| token.line).collect();

    assert_eq!(lines, vec![1, 1, 1, 1, 1, 3, 3]);
}

#[test]
fn end_of_input_repeats() {
    let mut lexer = Lexer::new("");

    assert_eq!(lexer.next_token(), Token::eof(1));
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(Lexer::new("").count(), 1);
}

#[test]
fn long_integers_are_left_for_the_parser() {
    let tokens = kinds_and_literals("99999999999999999999");

    assert_eq!(tokens[0], (TokenKind::Int, "99999999999999999999".to_string()));
}
