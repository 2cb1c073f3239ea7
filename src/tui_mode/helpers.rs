use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec!["".to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }

            let mut chunk = String::new();
            let mut chunk_width = 0;
            for c in word.chars() {
                let char_width = UnicodeWidthChar::width(c).unwrap_or(1);
                if chunk_width + char_width > width && !chunk.is_empty() {
                    lines.push(std::mem::take(&mut chunk));
                    chunk_width = 0;
                }
                chunk.push(c);
                chunk_width += char_width;
            }
            if !chunk.is_empty() {
                lines.push(chunk);
            }
            continue;
        }

        if current_width + word_width + 1 > width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += 1;
        }

        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Puts single spaces around binary operators: `2*(3+4)` → `2 * (3 + 4)`.
///
/// A `-` that starts the expression or follows another operator or `(` is a
/// sign and stays attached to its operand.
pub fn format_with_spaces(expr: &str) -> String {
    let mut result = String::new();
    let mut prev: Option<char> = None;

    for c in expr.chars().filter(|c| !c.is_whitespace()) {
        let is_sign = c == '-' && prev.map_or(true, |p| "+-*/^(".contains(p));
        match c {
            '+' | '-' | '*' | '/' | '^' if !is_sign => {
                result.push(' ');
                result.push(c);
                result.push(' ');
            }
            _ => result.push(c),
        }
        prev = Some(c);
    }

    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn highlight_expression(expr: &str, base_style: Style) -> Vec<Span<'static>> {
    let operator_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let number_style = Style::default()
        .fg(Color::LightGreen);

    let invalid_style = Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::UNDERLINED);

    let mut spans = Vec::new();
    let mut number = String::new();

    for c in expr.chars() {
        if c.is_ascii_digit() || c == '.' {
            number.push(c);
            continue;
        }
        if !number.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut number), number_style));
        }

        match c {
            '+' | '-' | '*' | '/' | '^' => {
                spans.push(Span::styled(c.to_string(), operator_style));
            }
            '(' | ')' => {
                spans.push(Span::styled(c.to_string(), base_style));
            }
            ' ' => {
                spans.push(Span::raw(" "));
            }
            _ => {
                spans.push(Span::styled(c.to_string(), invalid_style));
            }
        }
    }

    if !number.is_empty() {
        spans.push(Span::styled(number, number_style));
    }

    spans
}
