use std::io::{self, BufRead, Write};

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::Context, lexer::Lexer, parser::core::Parser},
};

/// Printed before reading each line.
pub const PROMPT: &str = ">> ";

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

/// Runs the read-evaluate-print loop until `input` is exhausted.
///
/// Every line is parsed as a whole program. If the parser reports errors,
/// all of them are printed and the line is not evaluated; otherwise the
/// result is printed. Bindings made with `let` persist from one line to the
/// next.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// let mut output = Vec::new();
/// monkey::repl::start(Cursor::new("let x = 2;\nx * 21\n"), &mut output, false).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("42"));
/// ```
pub fn start<R: BufRead, W: Write>(input: R, mut output: W, trace: bool) -> io::Result<()> {
    let mut context = Context::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;

        let mut parser = Parser::new(Lexer::new(&line)).with_tracing(trace);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            print_parser_errors(&mut output, parser.errors())?;
            continue;
        }
        if program.statements.is_empty() {
            continue;
        }

        writeln!(output, "{}", context.eval(&program))?;
    }
}

fn print_parser_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> io::Result<()> {
    write!(output, "{MONKEY_FACE}")?;
    writeln!(output, "Woops! We ran into some monkey business here!")?;
    writeln!(output, " parser errors:")?;
    for error in errors {
        writeln!(output, "\t{error}")?;
    }
    Ok(())
}
