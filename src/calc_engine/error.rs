/// Every way an evaluation can fail.
///
/// Errors carry no payload: the caller always gets the untouched input text
/// back next to the error, which is all a user needs to correct it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// No tokens were found in the input.
    EmptyExpression,
    /// The input contains a character outside digits, `.`, space and `()^*/+-`.
    UnexpectedCharacters,
    /// Two binary operators stand next to each other.
    ConsecutiveOperators,
    /// A decimal point could not be attached to any digits.
    DecimalError,
    /// Two numbers stand next to each other.
    ConsecutiveNumbers,
    /// The number of `(` differs from the number of `)`.
    UnequalParenthesis,
    /// The expression starts or ends with a binary operator.
    InvalidOperatorPlacement,
    /// A `)` has no `(` before it.
    ImproperParenthesis,
    /// Division by zero, or zero raised to a negative power.
    DivisionByZero,
    /// Reduction did not end with exactly one number.
    CalculationIncomplete,
    /// A literal or an intermediate result is too large for an `f64`.
    Overflow,
    /// An operation has no real result, e.g. an even root of a negative number.
    NotARealNumber,
}

impl CalcError {
    /// Stable upper-case name of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyExpression => "EMPTY_EXPRESSION",
            Self::UnexpectedCharacters => "UNEXPECTED_CHARACTERS",
            Self::ConsecutiveOperators => "CONSECUTIVE_OPERATORS",
            Self::DecimalError => "DECIMAL_ERROR",
            Self::ConsecutiveNumbers => "CONSECUTIVE_NUMBERS",
            Self::UnequalParenthesis => "UNEQUAL_PARENTHESIS",
            Self::InvalidOperatorPlacement => "INVALID_OPERATOR_PLACEMENT",
            Self::ImproperParenthesis => "IMPROPER_PARENTHESIS",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::CalculationIncomplete => "CALCULATION_INCOMPLETE",
            Self::Overflow => "OVERFLOW",
            Self::NotARealNumber => "NOT_A_REAL_NUMBER",
        }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Invalid: No expression"),
            Self::UnexpectedCharacters => write!(f, "Invalid: Unexpected characters"),
            Self::ConsecutiveOperators => write!(f, "Invalid: Consecutive operators"),
            Self::DecimalError => write!(f, "Invalid: Excess decimal points"),
            Self::ConsecutiveNumbers => write!(f, "Invalid: Consecutive numbers"),
            Self::UnequalParenthesis => write!(f, "Invalid: Unbalanced parentheses"),
            Self::InvalidOperatorPlacement => write!(f, "Invalid: Operators at start/end"),
            Self::ImproperParenthesis => write!(f, "Invalid: Improperly paired parenthesis"),
            Self::DivisionByZero => write!(f, "Error: Division by zero"),
            Self::CalculationIncomplete => write!(f, "Error: Calculation incomplete"),
            Self::Overflow => write!(f, "Error: Overflow due to large numbers"),
            Self::NotARealNumber => write!(f, "Error: Result is not a real number"),
        }
    }
}

impl std::error::Error for CalcError {}
