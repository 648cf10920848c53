use monkey::{
    ast::{Expression, Statement},
    interpreter::{
        evaluator::core::{Context, eval},
        object::core::{FALSE, NULL, Object, TRUE},
    },
    parse,
};

fn eval_source(source: &str) -> Object {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "parser errors for {source:?}: {errors:?}");
    eval(&program)
}

fn assert_error(source: &str, message: &str) {
    match eval_source(source) {
        Object::Error(error) => assert_eq!(error.to_string(), message, "source: {source}"),
        other => panic!("expected an error for {source:?}, found {other:?}"),
    }
}

#[test]
fn integer_expressions() {
    let cases = [("5", 5),
                 ("10", 10),
                 ("-5", -5),
                 ("-10", -10),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("5 * 2 + 10", 20),
                 ("5 + 2 * 10", 25),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("2 * (5 + 10)", 30),
                 ("3 * 3 * 3 + 10", 37),
                 ("3 * (3 * 3) + 10", 37),
                 ("2 * 2 + 2 * 3", 10),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
                 ("-7 / 2", -3),
                 ("7 / -2", -3)];

    for (source, expected) in cases {
        assert_eq!(eval_source(source), Object::Integer(expected), "source: {source}");
    }
}

#[test]
fn integer_literals_evaluate_to_themselves() {
    for n in [0, 1, 42, 1_000_000, i64::MAX] {
        assert_eq!(eval_source(&format!("{n};")), Object::Integer(n));
    }
    assert_eq!(eval_source("-9223372036854775807"), Object::Integer(-i64::MAX));
}

#[test]
fn boolean_expressions() {
    let cases = [("true", true),
                 ("false", false),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 < 1", false),
                 ("1 > 1", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("1 == 2", false),
                 ("1 != 2", true),
                 ("true == true", true),
                 ("false == false", true),
                 ("true == false", false),
                 ("true != false", true),
                 ("false != true", true),
                 ("(1 < 2) == true", true),
                 ("(1 < 2) == false", false),
                 ("(1 > 2) == true", false),
                 ("(1 > 2) == false", true)];

    for (source, expected) in cases {
        assert_eq!(eval_source(source), Object::from(expected), "source: {source}");
    }
}

#[test]
fn booleans_and_null_are_the_shared_constants() {
    assert_eq!(eval_source("true"), TRUE);
    assert_eq!(eval_source("1 > 2"), FALSE);
    assert_eq!(eval_source("if (false) { 1 }"), NULL);
}

#[test]
fn equality_across_types_falls_back_to_identity() {
    assert_eq!(eval_source("1 == true"), FALSE);
    assert_eq!(eval_source("1 != true"), TRUE);
    assert_eq!(eval_source("(if (false) { 1 }) == (if (false) { 2 })"), TRUE);
    assert_eq!(eval_source("(if (false) { 1 }) == false"), FALSE);
}

#[test]
fn bang_operator() {
    let cases = [("!true", false),
                 ("!false", true),
                 ("!5", false),
                 ("!0", false),
                 ("!!true", true),
                 ("!!false", false),
                 ("!!5", true),
                 ("!!0", true),
                 ("!(if (false) { 1 })", true)];

    for (source, expected) in cases {
        assert_eq!(eval_source(source), Object::from(expected), "source: {source}");
    }
}

#[test]
fn double_negation_gives_truthiness() {
    for source in ["5", "0", "-1", "true", "false", "if (false) { 1 }", "1 < 2"] {
        let truthy = eval_source(source).is_truthy();
        assert_eq!(eval_source(&format!("!!({source})")),
                   Object::from(truthy),
                   "source: {source}");
    }
}

#[test]
fn if_else_expressions() {
    let cases = [("if (true) { 10 }", Object::Integer(10)),
                 ("if (false) { 10 }", NULL),
                 ("if (1) { 10 }", Object::Integer(10)),
                 ("if (0) { 10 } else { 20 }", Object::Integer(10)),
                 ("if (1 < 2) { 10 }", Object::Integer(10)),
                 ("if (1 > 2) { 10 }", NULL),
                 ("if (1 > 2) { 10 } else { 20 }", Object::Integer(20)),
                 ("if (1 < 2) { 10 } else { 20 }", Object::Integer(10)),
                 ("if (true) { }", NULL)];

    for (source, expected) in cases {
        assert_eq!(eval_source(source), expected, "source: {source}");
    }
}

#[test]
fn return_statements() {
    let cases = [("return 10;", Object::Integer(10)),
                 ("return 10; 9;", Object::Integer(10)),
                 ("return 2 * 5; 9;", Object::Integer(10)),
                 ("9; return 2 * 5; 9;", Object::Integer(10)),
                 ("if (false) { return 1; } return 2;", Object::Integer(2)),
                 ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", Object::Integer(10)),
                 ("if (10 > 1) { if (10 > 1) { return 10; } return 1; } 99;", Object::Integer(10)),
                 ("return;", NULL),
                 ("let x = if (true) { return 7; }; 99;", Object::Integer(7)),
                 ("1 + if (true) { return 3; }; 99;", Object::Integer(3))];

    for (source, expected) in cases {
        assert_eq!(eval_source(source), expected, "source: {source}");
    }
}

#[test]
fn only_the_program_unwraps_return_values() {
    let (program, errors) = parse("if (true) { return 3; }");
    assert!(errors.is_empty());

    let statement = &program.statements[0];
    let Statement::Expression(Expression::If { consequence, .. }) = statement else {
        panic!("expected an if expression, found {statement:?}");
    };

    let wrapped = Object::ReturnValue(Box::new(Object::Integer(3)));
    assert_eq!(eval(consequence), wrapped);
    assert_eq!(eval(statement), wrapped);
    assert_eq!(eval(&program), Object::Integer(3));
    assert_eq!(wrapped.to_string(), "3");
}

#[test]
fn error_handling() {
    let cases = [("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
                 ("true - 5", "type mismatch: BOOLEAN - INTEGER"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 ("-(if (false) { 1 })", "unknown operator: -NULL"),
                 ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("true > false", "unknown operator: BOOLEAN > BOOLEAN"),
                 ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (true + 1) { 10 }", "type mismatch: BOOLEAN + INTEGER"),
                 ("-(true + 1) + 2", "type mismatch: BOOLEAN + INTEGER"),
                 ("let x = true * 2; x", "type mismatch: BOOLEAN * INTEGER"),
                 ("foobar", "identifier not found: foobar"),
                 ("1 / 0", "division by zero: 1 / 0"),
                 ("9223372036854775807 + 1", "integer overflow: 9223372036854775807 + 1"),
                 ("-9223372036854775807 - 2", "integer overflow: -9223372036854775807 - 2"),
                 ("fn(x) { x }", "invalid node: fn(x)x")];

    for (source, message) in cases {
        assert_error(source, message);
    }
}

#[test]
fn errors_short_circuit_later_statements() {
    let result = eval_source("1 + true; 5;");

    assert!(result.is_error());
    assert_ne!(result, Object::Integer(5));
    assert_eq!(result.to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn let_statements() {
    let cases = [("let a = 5; a;", 5),
                 ("let a = 5 * 5; a;", 25),
                 ("let a = 5; let b = a; b;", 5),
                 ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
                 ("if (true) { let inner = 4; } inner * 2", 8)];

    for (source, expected) in cases {
        assert_eq!(eval_source(source), Object::Integer(expected), "source: {source}");
    }
    assert_eq!(eval_source("let x = 5;"), NULL);
}

#[test]
fn context_keeps_bindings_between_programs() {
    let mut context = Context::new();

    assert_eq!(context.eval(&parse("let x = 3;").0), NULL);
    assert_eq!(context.eval(&parse("x * 2").0), Object::Integer(6));
}

#[test]
fn separate_evaluations_are_independent() {
    assert_eq!(eval(&parse("let x = 3;").0), NULL);
    assert!(eval(&parse("x").0).is_error());
}

#[test]
fn empty_program_is_null() {
    assert_eq!(eval_source(""), NULL);
}
