use pemdas_calc::{evaluate, CalcError};

fn check(cases: &[(&str, usize, &str)]) {
    for &(expression, precision, expected) in cases {
        assert_eq!(
            evaluate(expression, precision),
            (expected.to_string(), String::new()),
            "{expression} at precision {precision}"
        );
    }
}

fn check_err(cases: &[(&str, CalcError)]) {
    for &(expression, error) in cases {
        assert_eq!(
            evaluate(expression, 4),
            (expression.to_string(), error.to_string()),
            "{expression}"
        );
    }
}

#[test]
fn basic_arithmetic() {
    check(&[
        ("3+5", 4, "8"),
        ("10-4", 4, "6"),
        ("6*7", 4, "42"),
        ("21/5", 4, "4.2"),
        ("2^3", 4, "8"),
    ]);
}

#[test]
fn operator_precedence() {
    check(&[
        ("2+3*4", 4, "14"),
        ("(2+3)*4", 4, "20"),
        ("3*4^2", 4, "48"),
        ("3^2*4", 4, "36"),
        ("8/4/2", 4, "1"),
        ("2^3^2", 4, "64"),
    ]);
}

#[test]
fn negative_numbers() {
    check(&[
        ("-5+3", 4, "-2"),
        ("3*-2", 4, "-6"),
        ("-2^3", 4, "-8"),
        ("(-2)^3", 4, "-8"),
        ("-2--3", 4, "1"),
        ("-5", 4, "-5"),
        ("-3*-2", 4, "6"),
        ("2*(-3+1)", 4, "-4"),
    ]);
}

#[test]
fn nested_parentheses() {
    check(&[
        ("2*(3+(4-1)*2)", 4, "18"),
        ("(2+3)*(4-1)", 4, "15"),
        ("((2+3)*4)^2", 4, "400"),
        ("(((7)))", 4, "7"),
    ]);
}

#[test]
fn division() {
    check(&[("10/3", 4, "3.3333"), ("0/5", 4, "0"), ("2/3", 2, "0.67")]);
}

#[test]
fn whitespace_is_ignored() {
    check(&[(" 2 +  3 ", 4, "5"), ("1 2 + 1", 4, "13"), ("( 1 + 2 ) * 3", 4, "9")]);
}

#[test]
fn float_display() {
    check(&[
        ("3.141592", 2, "3.14"),
        ("3.141592", 3, "3.142"),
        ("3.141592", 4, "3.1416"),
        ("3.141592", 5, "3.14159"),
        ("3.141592", 6, "3.141592"),
        ("0.1+0.2", 4, "0.3"),
        ("5.04", 4, "5.04"),
        ("5.004", 4, "5.004"),
        ("5.0004", 4, "5.0004"),
        ("5.00004", 4, "5"),
        (".5+1.", 4, "1.5"),
    ]);
}

#[test]
fn results_evaluate_to_themselves() {
    for expression in ["5+3", "10/3", "-7*3", "2^0.5"] {
        let (display, error) = evaluate(expression, 4);
        assert!(error.is_empty(), "{expression}: {error}");
        assert_eq!(evaluate(&display, 4), (display.clone(), String::new()));
    }
}

#[test]
fn error_handling() {
    check_err(&[
        ("", CalcError::EmptyExpression),
        ("3/0", CalcError::DivisionByZero),
        ("2++3", CalcError::ConsecutiveOperators),
        ("(2+3", CalcError::UnequalParenthesis),
        ("2+5abc3", CalcError::UnexpectedCharacters),
        ("--2--3", CalcError::InvalidOperatorPlacement),
        (")2+3(", CalcError::ImproperParenthesis),
        ("8..3+5", CalcError::ConsecutiveNumbers),
        ("8(3+5)", CalcError::CalculationIncomplete),
        ("8...3+5", CalcError::DecimalError),
        ("9^999999", CalcError::Overflow),
    ]);
}

#[test]
fn error_messages() {
    assert_eq!(evaluate("", 4).1, "Invalid: No expression");
    assert_eq!(evaluate("3/0", 4).1, "Error: Division by zero");
    assert_eq!(evaluate("2++3", 4).1, "Invalid: Consecutive operators");
    assert_eq!(evaluate("(2+3", 4).1, "Invalid: Unbalanced parentheses");
    assert_eq!(evaluate("2+5abc3", 4).1, "Invalid: Unexpected characters");
    assert_eq!(evaluate("--2--3", 4).1, "Invalid: Operators at start/end");
    assert_eq!(evaluate(")2+3(", 4).1, "Invalid: Improperly paired parenthesis");
    assert_eq!(evaluate("8..3+5", 4).1, "Invalid: Consecutive numbers");
    assert_eq!(evaluate("8(3+5)", 4).1, "Error: Calculation incomplete");
    assert_eq!(evaluate("8...3+5", 4).1, "Invalid: Excess decimal points");
    assert_eq!(evaluate("9^999999", 4).1, "Error: Overflow due to large numbers");
}

#[test]
fn stacked_signs() {
    check_err(&[
        ("- - 3", CalcError::InvalidOperatorPlacement),
        ("2*--3", CalcError::ConsecutiveOperators),
    ]);
}
