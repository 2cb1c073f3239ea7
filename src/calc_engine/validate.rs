use super::error::CalcError;
use super::token::{Symbol, Token};

/// Characters allowed anywhere in the raw expression.
pub const ALLOWED_CHARACTERS: &str = "0123456789. ()^*/+-";

/// Rejects malformed token sequences before any arithmetic happens.
///
/// The first failing check wins: unexpected characters in `input`, an empty
/// sequence, then a left-to-right scan where each position is checked for
/// consecutive operators, a bare decimal point and consecutive numbers (in
/// that order), then unbalanced parentheses and finally an operator at either
/// end.
pub fn validate(tokens: &[Token], input: &str) -> Result<(), CalcError> {
    if input.chars().any(|c| !ALLOWED_CHARACTERS.contains(c)) {
        return Err(CalcError::UnexpectedCharacters);
    }

    let (first, last) = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(CalcError::EmptyExpression),
    };

    if first.is_symbol(Symbol::Dot) {
        return Err(CalcError::DecimalError);
    }
    for pair in tokens.windows(2) {
        let (prev, item) = (&pair[0], &pair[1]);
        if prev.is_operator() && item.is_operator() {
            return Err(CalcError::ConsecutiveOperators);
        }
        if item.is_symbol(Symbol::Dot) {
            return Err(CalcError::DecimalError);
        }
        if prev.is_number() && item.is_number() {
            return Err(CalcError::ConsecutiveNumbers);
        }
    }

    let opening = tokens.iter().filter(|t| t.is_symbol(Symbol::LParen)).count();
    let closing = tokens.iter().filter(|t| t.is_symbol(Symbol::RParen)).count();
    if opening != closing {
        return Err(CalcError::UnequalParenthesis);
    }

    if first.is_operator() || last.is_operator() {
        return Err(CalcError::InvalidOperatorPlacement);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::calc_engine::token::{merge_negatives, tokenize};

    fn check(input: &str) -> Result<(), CalcError> {
        let tokens = merge_negatives(tokenize(input).unwrap());
        validate(&tokens, input)
    }

    #[test]
    fn valid_expressions() {
        assert_eq!(check("2+3*4"), Ok(()));
        assert_eq!(check("(2 + 3) * -4"), Ok(()));
        assert_eq!(check("()"), Ok(()));
        assert_eq!(check("8(3+5)"), Ok(()));
    }

    #[test]
    fn unexpected_characters() {
        assert_eq!(check("2+5abc3"), Err(CalcError::UnexpectedCharacters));
        assert_eq!(check("2\t+3"), Err(CalcError::UnexpectedCharacters));
        assert_eq!(check("1,5"), Err(CalcError::UnexpectedCharacters));
    }

    #[test]
    fn unexpected_characters_beat_empty() {
        assert_eq!(check("abc"), Err(CalcError::UnexpectedCharacters));
    }

    #[test]
    fn empty() {
        assert_eq!(check(""), Err(CalcError::EmptyExpression));
        assert_eq!(check("   "), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn consecutive_operators() {
        assert_eq!(check("2++3"), Err(CalcError::ConsecutiveOperators));
        assert_eq!(check("2*/3"), Err(CalcError::ConsecutiveOperators));
        assert_eq!(check("2-(-3)"), Ok(()));
    }

    #[test]
    fn decimal_error() {
        assert_eq!(check("8...3+5"), Err(CalcError::DecimalError));
        assert_eq!(check(".+3"), Err(CalcError::DecimalError));
    }

    #[test]
    fn consecutive_numbers() {
        assert_eq!(check("8..3+5"), Err(CalcError::ConsecutiveNumbers));
        assert_eq!(check("1.2.3"), Err(CalcError::ConsecutiveNumbers));
    }

    #[test]
    fn scan_order_is_positional() {
        // the numbers come before the operators, so they are reported first
        assert_eq!(check("1..2+*3"), Err(CalcError::ConsecutiveNumbers));
        assert_eq!(check("1+*2..3"), Err(CalcError::ConsecutiveOperators));
    }

    #[test]
    fn unequal_parenthesis() {
        assert_eq!(check("(2+3"), Err(CalcError::UnequalParenthesis));
        assert_eq!(check("2+3))"), Err(CalcError::UnequalParenthesis));
    }

    #[test]
    fn operator_placement() {
        assert_eq!(check("--2--3"), Err(CalcError::InvalidOperatorPlacement));
        assert_eq!(check("3+"), Err(CalcError::InvalidOperatorPlacement));
        assert_eq!(check("*3"), Err(CalcError::InvalidOperatorPlacement));
    }

    #[test]
    fn misplaced_parens_pass_validation() {
        assert_eq!(check(")2+3("), Ok(()));
    }
}
