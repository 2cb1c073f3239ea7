//! Commands understood by the interactive front-ends.

/// Precisions offered by the precision selector.
pub const PRECISION_CHOICES: std::ops::RangeInclusive<usize> = 1..=6;

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Clear,
    Help,
    /// `precision <n>`; `None` when the argument is not a number.
    Precision(Option<usize>),
    /// `details` without an expression.
    MissingExpression,
    Evaluate {
        expression: &'a str,
        detailed: bool,
    },
}

/// Interprets one submitted line. Returns `None` for a blank line.
pub fn parse(input: &str) -> Option<Command<'_>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let lower = input.to_lowercase();
    match lower.as_str() {
        "quit" | "exit" | "q" => return Some(Command::Quit),
        "clear" | "reset" => return Some(Command::Clear),
        "help" => return Some(Command::Help),
        "details" => return Some(Command::MissingExpression),
        _ => {}
    }

    if let Some(arg) = lower.strip_prefix("precision") {
        if arg.is_empty() || arg.starts_with(' ') {
            return Some(Command::Precision(arg.trim().parse().ok()));
        }
    }

    let (detailed, expression) = if lower.starts_with("details ") {
        (true, input[8..].trim())
    } else if lower.ends_with(" details") {
        (true, input[..input.len() - 8].trim())
    } else {
        (false, input)
    };

    if expression.is_empty() {
        return Some(Command::MissingExpression);
    }
    Some(Command::Evaluate { expression, detailed })
}

/// The next precision of the selector, wrapping around after the largest.
pub fn next_precision(current: usize) -> usize {
    if current >= *PRECISION_CHOICES.end() || current < *PRECISION_CHOICES.start() {
        *PRECISION_CHOICES.start()
    } else {
        current + 1
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn blank() {
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn session_commands() {
        assert_eq!(parse("Quit"), Some(Command::Quit));
        assert_eq!(parse(" q "), Some(Command::Quit));
        assert_eq!(parse("reset"), Some(Command::Clear));
        assert_eq!(parse("HELP"), Some(Command::Help));
    }

    #[test]
    fn precision() {
        assert_eq!(parse("precision 2"), Some(Command::Precision(Some(2))));
        assert_eq!(parse("precision x"), Some(Command::Precision(None)));
        assert_eq!(parse("precision"), Some(Command::Precision(None)));
    }

    #[test]
    fn details() {
        assert_eq!(
            parse("details 2 + 3"),
            Some(Command::Evaluate { expression: "2 + 3", detailed: true })
        );
        assert_eq!(
            parse("2*3 details"),
            Some(Command::Evaluate { expression: "2*3", detailed: true })
        );
        assert_eq!(parse("details"), Some(Command::MissingExpression));
        assert_eq!(parse("details   "), Some(Command::MissingExpression));
    }

    #[test]
    fn expression() {
        assert_eq!(
            parse(" (1+2)*3 "),
            Some(Command::Evaluate { expression: "(1+2)*3", detailed: false })
        );
    }

    #[test]
    fn precision_wraps() {
        assert_eq!(next_precision(4), 5);
        assert_eq!(next_precision(6), 1);
        assert_eq!(next_precision(0), 1);
        assert_eq!(next_precision(12), 1);
    }
}
