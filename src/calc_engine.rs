//! Text-in, text-out arithmetic engine.
//!
//! An expression goes through a fixed pipeline: [`token::tokenize`],
//! [`token::merge_negatives`], [`validate::validate`],
//! [`reduce::resolve_parentheses`], [`reduce::reduce`] and finally
//! [`format::format_result`]. The first failing stage ends the evaluation.

pub mod error;
pub mod format;
pub mod reduce;
pub mod token;
pub mod validate;

#[cfg(test)]
mod test;

pub use error::CalcError;

/// Digits shown after the decimal point when the caller has no preference.
pub const DEFAULT_PRECISION: usize = 4;

pub struct Step {
    pub operation: String,
    pub result: f64,
}

/// Records each fold performed during an evaluation.
pub struct EvaluationTrace {
    pub steps: Vec<Step>,
    pub detailed_mode: bool,
}

impl EvaluationTrace {
    pub fn new(detailed_mode: bool) -> Self {
        EvaluationTrace {
            steps: Vec::new(),
            detailed_mode,
        }
    }

    pub fn add_step(&mut self, operation: String, result: f64) {
        if self.detailed_mode {
            self.steps.push(Step { operation, result });
        }
    }
}

/// Evaluates `expression` and returns `(display, error)`.
///
/// On success `display` is the formatted result and `error` is empty. On
/// failure `display` is `expression`, unchanged, and `error` holds the
/// message of the first problem found.
pub fn evaluate(expression: &str, precision: usize) -> (String, String) {
    evaluate_traced(expression, precision, &mut EvaluationTrace::new(false))
}

/// Same as [`evaluate`], recording steps into `trace`.
pub fn evaluate_traced(
    expression: &str,
    precision: usize,
    trace: &mut EvaluationTrace,
) -> (String, String) {
    match calculate_traced(expression, precision, trace) {
        Ok(display) => (display, String::new()),
        Err(e) => (expression.to_string(), e.to_string()),
    }
}

pub fn calculate(expression: &str, precision: usize) -> Result<String, CalcError> {
    calculate_traced(expression, precision, &mut EvaluationTrace::new(false))
}

pub fn calculate_traced(
    expression: &str,
    precision: usize,
    trace: &mut EvaluationTrace,
) -> Result<String, CalcError> {
    let tokens = token::tokenize(expression)?;
    let tokens = token::merge_negatives(tokens);
    validate::validate(&tokens, expression)?;

    let tokens = reduce::resolve_parentheses(tokens, trace)?;
    let value = reduce::single_number(reduce::reduce(tokens, trace)?)?;
    Ok(format::format_result(value, precision))
}
