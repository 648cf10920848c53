use std::{fs, io};

use clap::Parser;
use monkey::{
    interpreter::{
        evaluator::core::Context, lexer::Lexer, object::core::Object,
        parser::core::Parser as SourceParser,
    },
    repl,
};

/// monkey is an interpreter for a small expression-oriented language.
///
/// Without a script it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to treat `contents` as a path to a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the parser's recursive descent to stderr.
    #[arg(short, long)]
    trace: bool,

    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        println!("Hello! This is the monkey programming language!");
        println!("Feel free to type in commands");
        if let Err(e) = repl::start(io::stdin().lock(), io::stdout().lock(), args.trace) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &contents);
            std::process::exit(1);
        })
    } else {
        contents
    };

    std::process::exit(run(&script, args.trace));
}

/// Runs a whole script, printing its result or its errors. Returns the exit
/// status.
fn run(script: &str, trace: bool) -> i32 {
    let mut parser = SourceParser::new(Lexer::new(script)).with_tracing(trace);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            eprintln!("Error on line {}: {error}", error.line());
        }
        return 1;
    }

    match Context::new().eval(&program) {
        Object::Error(e) => {
            eprintln!("{e}");
            1
        },
        object => {
            println!("{object}");
            0
        },
    }
}
