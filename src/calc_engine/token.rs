use super::error::CalcError;

/// Single-character symbols of the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    LParen,
    RParen,
    Caret,
    Star,
    Slash,
    Plus,
    Minus,
    /// A decimal point that could not be attached to any digits.
    Dot,
}

impl Symbol {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            '^' => Some(Self::Caret),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '.' => Some(Self::Dot),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::LParen => '(',
            Self::RParen => ')',
            Self::Caret => '^',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Dot => '.',
        }
    }

    /// Binary operators: `^ * / + -`.
    pub fn is_operator(self) -> bool {
        matches!(self, Self::Caret | Self::Star | Self::Slash | Self::Plus | Self::Minus)
    }

    /// Operators and parentheses; a `-` following one of these is a sign.
    pub fn is_operator_or_paren(self) -> bool {
        self.is_operator() || matches!(self, Self::LParen | Self::RParen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Symbol(Symbol),
}

impl Token {
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Symbol(s) if s.is_operator())
    }

    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        matches!(self, Token::Symbol(s) if *s == symbol)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Symbol(s) => write!(f, "{}", s.as_char()),
        }
    }
}

/// Splits `input` into numbers and symbols.
///
/// Whitespace is removed before scanning, so it never separates digits:
/// `"1 2"` is the single literal `12`. A number is `digits[.digits]`,
/// `digits.` or `.digits`; a `.` that fits none of these becomes
/// [`Symbol::Dot`]. Characters outside the alphabet are skipped; the
/// validator reports them from the raw input.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tokens = Vec::new();
    let mut chars = compact.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '0'..='9' | '.' => {
                let mut num_str = String::new();
                while let Some(&ch) = chars.peek() {
                    if !ch.is_ascii_digit() {
                        break;
                    }
                    num_str.push(ch);
                    chars.next();
                }

                if chars.peek() == Some(&'.') {
                    chars.next();
                    let mut fraction = String::new();
                    while let Some(&ch) = chars.peek() {
                        if !ch.is_ascii_digit() {
                            break;
                        }
                        fraction.push(ch);
                        chars.next();
                    }

                    if num_str.is_empty() && fraction.is_empty() {
                        tokens.push(Token::Symbol(Symbol::Dot));
                        continue;
                    }
                    num_str.push('.');
                    num_str.push_str(&fraction);
                }

                let value = num_str.parse::<f64>().map_err(|_| CalcError::DecimalError)?;
                tokens.push(Token::Number(value));
            }
            _ => {
                if let Some(symbol) = Symbol::from_char(c) {
                    tokens.push(Token::Symbol(symbol));
                }
                chars.next();
            }
        }
    }
    Ok(tokens)
}

/// Fuses every unary `-` into the number that follows it.
///
/// A `-` is a sign when it is the first token, or when the token before it
/// (after earlier fusions) is an operator or a parenthesis, and a number
/// follows it directly. The scan never steps back, so in `--2` only the inner
/// sign fuses and the outer `-` is left as an operator.
pub fn merge_negatives(tokens: Vec<Token>) -> Vec<Token> {
    let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut rest = tokens.into_iter().peekable();

    while let Some(token) = rest.next() {
        if token.is_symbol(Symbol::Minus) {
            let sign_position = match merged.last() {
                None => true,
                Some(Token::Symbol(prev)) => prev.is_operator_or_paren(),
                Some(Token::Number(_)) => false,
            };

            if sign_position {
                if let Some(&Token::Number(n)) = rest.peek() {
                    rest.next();
                    merged.push(Token::Number(-n));
                    continue;
                }
            }
        }
        merged.push(token);
    }
    merged
}
