//! PEMDAS calculator: evaluates `+ - * / ^` expressions with parentheses and
//! returns either a formatted number or the first error found.
//!
//! ```
//! let (display, error) = pemdas_calc::evaluate("2*(3+(4-1)*2)", 4);
//! assert_eq!(display, "18");
//! assert!(error.is_empty());
//! ```

pub mod calc_engine;
pub mod command;

pub use calc_engine::{
    calculate, calculate_traced, evaluate, evaluate_traced, CalcError, EvaluationTrace, Step,
    DEFAULT_PRECISION,
};
