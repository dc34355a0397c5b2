use std::fs;

use pretty_assertions::assert_eq;
use quill::{
    Context, Dialect, Error, SemanticError, SyntaxError, Value, interpreter::dialect::ArithmeticMode,
    parse_with, run,
};
use walkdir::WalkDir;

/// Runs `source` with captured output and returns what it printed together
/// with its result.
fn execute(source: &str, dialect: &Dialect) -> (String, Result<Value, Error>) {
    let mut context = Context::with_dialect(dialect.clone()).capturing();
    let result = parse_with(source, dialect).map_err(Error::from)
                                            .and_then(|program| {
                                                Ok(context.evaluate(&program)?)
                                            });

    (context.output().to_string(), result)
}

/// Printed output followed by the error label, if the run failed.
fn transcript(source: &str) -> String {
    let (mut output, result) = execute(source, &Dialect::default());
    if let Err(e) = result {
        output.push_str(e.label());
        output.push('\n');
    }
    output
}

fn assert_value(src: &str, expected: Value) {
    match run(src, &Dialect::default()) {
        Ok(value) => assert_eq!(value, expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_semantic_error(src: &str) {
    match run(src, &Dialect::default()) {
        Err(Error::Semantic(_)) => {},
        other => panic!("expected a semantic error, got {other:?}\n{src}"),
    }
}

fn assert_syntax_error(src: &str) {
    match run(src, &Dialect::default()) {
        Err(Error::Syntax(_)) => {},
        other => panic!("expected a syntax error, got {other:?}\n{src}"),
    }
}

#[test]
fn programs_match_their_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "ql"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read \
                                                                     {expected_path:?}: {e}")
                                                         });

        count += 1;
        assert_eq!(transcript(&source), expected, "program {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn precedence_and_associativity() {
    assert_value("1 + 2 * 3;", Value::Integer(7));
    assert_value("(1 + 2) * 3;", Value::Integer(9));
    assert_value("2 ** 3 ** 2;", Value::Integer(512));
    assert_value("10 - 4 - 3;", Value::Integer(3));
    assert_value("1 < 2 == 1;", Value::Integer(1));
    assert_value("NOT 0 AND 1;", Value::Integer(1));
    assert_value("NOT 1 OR 1;", Value::Integer(1));
}

#[test]
fn logical_operators_evaluate_both_sides() {
    let source = "
        left() { print \"left\"; return 0; }
        right() { print \"right\"; return 1; }
        print left() AND right();
        print right() OR left();
    ";
    assert_eq!(transcript(source), "left\nright\n0\nright\nleft\n1\n");
}

#[test]
fn division_rules() {
    assert_semantic_error("5 / 0;");
    assert_semantic_error("5.0 / 0.0;");
    assert_semantic_error("5 % 0;");
    assert_semantic_error("5 // 0.0;");
    assert_value("5 // 2;", Value::Integer(2));
    assert_value("5 % 2;", Value::Integer(1));
    assert_value("5 / 2;", Value::Real(2.5));
    assert_value("0 - 7 // 2;", Value::Integer(-3));
    assert_value("(2 ** 60) / 2;", Value::Real(576_460_752_303_423_488.0));
    assert_semantic_error("0 ** (0 - 1);");
}

#[test]
fn large_integers_compare_exactly_with_reals() {
    let source = "a = 9007199254740993; b = 9007199254740992.0; [a == b, a < b, a > b];";
    assert_eq!(run(source, &Dialect::default()).unwrap().to_string(), "[0, 0, 1]");
}

#[test]
fn default_call_depth_is_reachable_on_a_test_thread() {
    let source = "down(n) { if (n > 0) { return down(n - 1); } return 0; } down(63);";
    assert_value(source, Value::Integer(0));
    assert!(matches!(run("down(n) { return down(n + 1); } down(0);", &Dialect::default()),
                     Err(Error::Semantic(SemanticError::CallDepthExceeded { .. }))));
}

#[test]
fn globals_are_visible_inside_functions() {
    assert_value("scale = 3; times(x) { return x * scale; } times(5);",
                 Value::Integer(15));
}

#[test]
fn function_locals_do_not_leak() {
    let source = "f() { secret = 1; return secret; } f(); secret;";
    match run(source, &Dialect::default()) {
        Err(Error::Semantic(SemanticError::UndefinedVariable { name, .. })) => {
            assert_eq!(name, "secret");
        },
        other => panic!("expected an undefined variable, got {other:?}"),
    }
}

#[test]
fn caller_locals_are_invisible_to_callees() {
    let source = "inner() { return hidden; } outer() { hidden = 1; return inner(); } outer();";
    assert_semantic_error(source);
}

#[test]
fn frames_balance_after_failures() {
    let dialect = Dialect::default();
    let mut context = Context::with_dialect(dialect.clone()).capturing();

    let setup = parse_with("deep(n) { if (n == 0) { return 1 / 0; } return deep(n - 1); }
                            ok(n) { if (n == 0) { return 7; } return ok(n - 1); }",
                           &dialect).unwrap();
    context.evaluate(&setup).unwrap();

    let failing = parse_with("deep(5);", &dialect).unwrap();
    assert_eq!(context.evaluate(&failing),
               Err(SemanticError::DivisionByZero { line: 1 }));
    assert_eq!(context.depth(), 0);

    let working = parse_with("ok(5);", &dialect).unwrap();
    assert_eq!(context.evaluate(&working), Ok(Value::Integer(7)));
    assert_eq!(context.depth(), 0);
}

#[test]
#[allow(clippy::approx_constant)]
fn literals_round_trip() {
    assert_value("42;", Value::Integer(42));
    assert_value("3.14;", Value::Real(3.14));
    assert_value("\"abc\";", Value::from("abc"));
    assert_value("true;", Value::Integer(1));
    assert_value("[];", Value::from(vec![]));
}

#[test]
fn list_indexing_and_assignment() {
    assert_value("x = [1, 2, 3]; x[1];", Value::Integer(2));
    assert_value("x = [1, 2, 3]; x[0] = 9; x[0];", Value::Integer(9));

    match run("x = [1, 2, 3]; x[5];", &Dialect::default()) {
        Err(Error::Semantic(SemanticError::IndexOutOfBounds { index, len, .. })) => {
            assert_eq!((index, len), (5, 3));
        },
        other => panic!("expected an index error, got {other:?}"),
    }
}

#[test]
fn block_returns_early() {
    let source = "pick(c) { { if (c) { return 1; } return 2; } } [pick(1), pick(0)];";
    assert_value(source, Value::from(vec![Value::Integer(1), Value::Integer(2)]));
}

#[test]
fn strings_concatenate_and_compare() {
    assert_value("\"ab\" + \"cd\";", Value::from("abcd"));
    assert_value("\"abc\" < \"abd\";", Value::Integer(1));
    assert_value("\"abc\"[1];", Value::from("b"));
    assert_semantic_error("\"abc\" < 1;");
    assert_semantic_error("\"abc\" - \"a\";");
}

#[test]
fn logic_requires_integers() {
    assert_semantic_error("1.0 AND 1;");
    assert_semantic_error("NOT \"x\";");
    assert_value("2 AND 3;", Value::Integer(1));
}

#[test]
fn syntax_errors_are_reported() {
    assert_syntax_error("x = ;");
    assert_syntax_error("print 1");
    assert_syntax_error("x = [ ];");
    assert_syntax_error("f(1) = 2;");
    assert_syntax_error("x = 1 $ 2;");
    assert_syntax_error("if 1 { print 1; }");
    assert_syntax_error("while (1) print 1;");
}

#[test]
fn syntax_errors_stop_before_evaluation() {
    let (output, result) = execute("print 1;\nprint (2;", &Dialect::default());
    assert_eq!(output, "");
    assert!(matches!(result, Err(Error::Syntax(SyntaxError::ExpectedToken { line: 2, .. }))));
}

#[test]
fn semantic_error_keeps_earlier_output() {
    assert_eq!(transcript("print 1; print 1 + \"a\"; print 2;"), "1\nSEMANTIC ERROR\n");
}

#[test]
fn arithmetic_modes() {
    assert_value("1 + 2.5;", Value::Real(3.5));

    let strict = Dialect { arithmetic: ArithmeticMode::SameType,
                           ..Dialect::default() };
    assert!(matches!(run("1 + 2.5;", &strict), Err(Error::Semantic(_))));
    assert_eq!(run("1.0 + 2.5;", &strict).unwrap(), Value::Real(3.5));
}

#[test]
fn disabled_features_are_syntax_errors() {
    let plain = Dialect { lists: false,
                          functions: false,
                          ..Dialect::default() };

    assert!(matches!(run("x = [1];", &plain),
                     Err(Error::Syntax(SyntaxError::FeatureDisabled { feature: "lists", .. }))));
    assert!(matches!(run("f();", &plain),
                     Err(Error::Syntax(SyntaxError::FeatureDisabled { feature: "functions", .. }))));
    assert_eq!(run("x = 2; x ** 10;", &plain).unwrap(), Value::Integer(1024));
}

#[test]
fn program_value_rules() {
    assert_value("x = 1;", Value::Unit);
    assert_value("1; 2; x = 3;", Value::Integer(2));
    assert_value("return 5; 6;", Value::Integer(5));
    assert_value("if (1) { return 8; } 9;", Value::Integer(8));
}
