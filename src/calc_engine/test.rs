use super::*;

fn assert(input: &str, expected: &str) {
    assert_eq!(evaluate(input, DEFAULT_PRECISION), (expected.to_string(), String::new()));
}

fn assert_err(input: &str, expected: CalcError) {
    assert_eq!(calculate(input, DEFAULT_PRECISION), Err(expected));
    assert_eq!(evaluate(input, DEFAULT_PRECISION), (input.to_string(), expected.to_string()));
}

#[test]
fn single_number() {
    assert("42", "42");
    assert("4.5", "4.5");
    assert(" 7 ", "7");
}

#[test]
fn result_reevaluates_to_itself() {
    let (display, error) = evaluate("5+3", DEFAULT_PRECISION);
    assert!(error.is_empty());
    assert_eq!(evaluate(&display, DEFAULT_PRECISION), (display.clone(), String::new()));

    let (display, _) = evaluate("-7/2", DEFAULT_PRECISION);
    assert_eq!(display, "-3.5");
    assert("-3.5", "-3.5");
}

#[test]
fn unary_sign_binds_before_exponent() {
    assert("-2^2", "4");
    assert("-2^3", "-8");
}

#[test]
fn sign_after_closing_paren_fuses() {
    // `)` counts as a sign position, so the `-` becomes part of the literal
    assert_err("(2)-3", CalcError::CalculationIncomplete);
    assert("(2)*-3", "-6");
}

#[test]
fn negative_zero_displays_as_zero() {
    assert("-0", "0");
    assert("0*-1", "0");
}

#[test]
fn division_by_zero_inside_groups() {
    assert_err("2+(4/(1-1))", CalcError::DivisionByZero);
    assert_err("0^-2", CalcError::DivisionByZero);
}

#[test]
fn overflow() {
    assert_err("9^999999", CalcError::Overflow);
    assert_err(&"9".repeat(400), CalcError::Overflow);
    assert_err(&format!("{}*0", "9".repeat(400)), CalcError::Overflow);
}

#[test]
fn not_a_real_number() {
    assert_err("(-8)^0.5", CalcError::NotARealNumber);
}

#[test]
fn empty_parens() {
    assert_err("()", CalcError::CalculationIncomplete);
    assert_err("2*()", CalcError::CalculationIncomplete);
}

#[test]
fn unexpected_characters_win_over_everything() {
    assert_err("2++3x", CalcError::UnexpectedCharacters);
    assert_err("3/0 ", CalcError::DivisionByZero);
}

#[test]
fn trace_is_empty_unless_detailed() {
    let mut trace = EvaluationTrace::new(false);
    evaluate_traced("1+2*3", 4, &mut trace);
    assert!(trace.steps.is_empty());

    let mut trace = EvaluationTrace::new(true);
    let result = evaluate_traced("1+2*3", 4, &mut trace);
    assert_eq!(result, ("7".to_string(), String::new()));
    let steps: Vec<(&str, f64)> = trace.steps.iter().map(|s| (s.operation.as_str(), s.result)).collect();
    assert_eq!(steps, vec![("2 * 3", 6.0), ("1 + 6", 7.0)]);
}

#[test]
fn error_codes() {
    assert_eq!(CalcError::DivisionByZero.code(), "DIVISION_BY_ZERO");
    assert_eq!(CalcError::CalculationIncomplete.to_string(), "Error: Calculation incomplete");
}
