use super::error::CalcError;
use super::token::{Symbol, Token};
use super::EvaluationTrace;

const EXPONENT: &[Symbol] = &[Symbol::Caret];
const MULTIPLY_DIVIDE: &[Symbol] = &[Symbol::Star, Symbol::Slash];
const ADD_SUBTRACT: &[Symbol] = &[Symbol::Plus, Symbol::Minus];

/// Collapses every parenthesized group into a single number.
///
/// The leftmost `)` is always paired with the nearest `(` before it, so
/// nested groups resolve innermost first.
pub fn resolve_parentheses(
    mut tokens: Vec<Token>,
    trace: &mut EvaluationTrace,
) -> Result<Vec<Token>, CalcError> {
    while let Some(close) = tokens.iter().position(|t| t.is_symbol(Symbol::RParen)) {
        let open = tokens[..close]
            .iter()
            .rposition(|t| t.is_symbol(Symbol::LParen))
            .ok_or(CalcError::ImproperParenthesis)?;

        let group = tokens[open + 1..close].to_vec();
        let operation = render(&group);
        let value = single_number(reduce(group, trace)?)?;
        trace.add_step(format!("({})", operation), value);

        tokens.splice(open..=close, std::iter::once(Token::Number(value)));
    }
    Ok(tokens)
}

/// Runs the three precedence passes: `^`, then `*` `/`, then `+` `-`.
pub fn reduce(tokens: Vec<Token>, trace: &mut EvaluationTrace) -> Result<Vec<Token>, CalcError> {
    let tokens = fold_pass(tokens, EXPONENT, trace)?;
    let tokens = fold_pass(tokens, MULTIPLY_DIVIDE, trace)?;
    fold_pass(tokens, ADD_SUBTRACT, trace)
}

/// The value of a fully reduced sequence.
pub fn single_number(tokens: Vec<Token>) -> Result<f64, CalcError> {
    match tokens.as_slice() {
        [Token::Number(n)] if !n.is_finite() => Err(CalcError::Overflow),
        [Token::Number(n)] => Ok(*n),
        _ => Err(CalcError::CalculationIncomplete),
    }
}

/// Folds, left to right, every operator in `ops` that has a number directly on
/// both sides. The result takes the place of the left operand, so it feeds
/// the next operator of the same pass.
fn fold_pass(
    tokens: Vec<Token>,
    ops: &[Symbol],
    trace: &mut EvaluationTrace,
) -> Result<Vec<Token>, CalcError> {
    let mut folded: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut rest = tokens.into_iter().peekable();

    while let Some(token) = rest.next() {
        let lhs = match folded.last() {
            Some(&Token::Number(n)) => Some(n),
            _ => None,
        };
        let rhs = match rest.peek() {
            Some(&Token::Number(n)) => Some(n),
            _ => None,
        };

        match (token, lhs, rhs) {
            (Token::Symbol(op), Some(lhs), Some(rhs)) if ops.contains(&op) => {
                rest.next();
                folded.pop();
                let result = apply(op, lhs, rhs)?;
                trace.add_step(format!("{} {} {}", lhs, op.as_char(), rhs), result);
                folded.push(Token::Number(result));
            }
            (token, _, _) => folded.push(token),
        }
    }
    Ok(folded)
}

fn apply(op: Symbol, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
    if !lhs.is_finite() || !rhs.is_finite() {
        return Err(CalcError::Overflow);
    }
    let result = match op {
        Symbol::Caret => {
            if lhs == 0.0 && rhs < 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            lhs.powf(rhs)
        }
        Symbol::Star => lhs * rhs,
        Symbol::Slash => {
            if rhs == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            lhs / rhs
        }
        Symbol::Plus => lhs + rhs,
        Symbol::Minus => lhs - rhs,
        Symbol::LParen | Symbol::RParen | Symbol::Dot => {
            return Err(CalcError::CalculationIncomplete)
        }
    };

    if result.is_nan() {
        Err(CalcError::NotARealNumber)
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(result)
    }
}

fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
