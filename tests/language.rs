use std::fs;

use monkey::{get_result, interpreter::object::core::Object};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_monkey_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code) {
                panic!("Monkey example {} in {:?} failed:\n{}\nError: {}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No monkey examples found in book/src");
}

fn extract_monkey_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```monkey") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: impl Into<Object>) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected.into(), "script: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str, message: &str) {
    match get_result(src) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), message, "script: {src}"),
    }
}

#[test]
fn bindings_and_basic_arithmetic() {
    assert_value("let x = 1 + 2\nx", 3);
    assert_value("let x = 7 * 9; x", 63);
    assert_value("let x = 8 - 5; x == 3", true);
    assert_value("let x = 10 / 3; x", 3);
}

#[test]
fn comparisons_and_negation() {
    assert_value("2 < 3", true);
    assert_value("3 > 2", true);
    assert_value("2 != 3", true);
    assert_value("2 == 2", true);
    assert_value("!false", true);
    assert_value("!!0", true);
    assert_value("false == false", true);
}

#[test]
fn conditionals_and_early_return() {
    assert_value("let x = if (2 < 3) { 7 } else { 11 }; x", 7);
    assert_value(r"
        let limit = 10;
        if (limit > 5) {
            if (limit > 8) {
                return limit * 2;
            }
            return 0;
        }
        1
    ",
                 20);
}

#[test]
fn empty_results_are_null() {
    assert_value("", Object::Null);
    assert_value("if (false) { 1 }", Object::Null);
    assert_value("return;", Object::Null);
}

#[test]
fn runtime_errors_fail() {
    assert_failure("let x = 1 / 0", "division by zero: 1 / 0");
    assert_failure("foo == 1", "identifier not found: foo");
    assert_failure("1 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_failure("-true", "unknown operator: -BOOLEAN");
}

#[test]
fn parse_errors_fail_with_line_numbers() {
    assert_failure("let x = 1;\nlet = 2;",
                   "Error on line 2: expected token type IDENT, got = instead\n\
                    Error on line 2: no prefix parse function for = found");
}

#[test]
fn function_literals_cannot_be_evaluated() {
    assert_failure("let f = fn(a, b) { a + b };", "invalid node: fn(a,b)(a + b)");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.monkey").unwrap();
    assert_value(&contents, 42);
}
