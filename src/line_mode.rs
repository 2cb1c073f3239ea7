use crate::input_line::InputLine;
use anyhow::Result;
use pemdas_calc::command::{self, Command};
use pemdas_calc::{evaluate_traced, EvaluationTrace};
use std::io::{stdin, stdout, Write};
use termion::{
    clear::CurrentLine as ClearLine,
    cursor::{DetectCursorPos, Goto},
    event::Key,
    input::TermRead,
    raw::IntoRawMode,
};

const PROMPT: &str = "Expression: ";

pub fn run_line(mut precision: usize) -> Result<()> {
    println!("PEMDAS Console Calculator");
    println!("Supports: +, -, *, /, ^ and parentheses");
    println!("Navigation: ←/→, Backspace/Delete, Home/End, ↑/↓ for history");
    println!("Commands: 'quit' to exit, 'clear' to reset history, 'precision N' (now {})", precision);
    println!("\rAdd 'details' before expression for step-by-step evaluation\n");

    let mut stdout = stdout().into_raw_mode()?;
    let mut history: Vec<String> = Vec::new();
    let mut history_index = 0;

    loop {
        write!(stdout, "{}{}", ClearLine, PROMPT)?;
        stdout.flush()?;

        let mut input = InputLine::default();
        let (_, initial_y) = stdout.cursor_pos()?;
        let mut keys = stdin().keys();

        loop {
            write!(stdout, "{}{}{}{}", Goto(1, initial_y), ClearLine, PROMPT, input.text())?;
            let column = 1 + PROMPT.len() + input.cursor_width_from(0);
            write!(stdout, "{}", Goto(column as u16, initial_y))?;
            stdout.flush()?;

            let key = match keys.next() {
                Some(key) => key?,
                None => return Ok(()),
            };
            match key {
                Key::Char('\n') => break,
                Key::Ctrl('c') | Key::Ctrl('d') => {
                    write!(stdout, "\r\n")?;
                    return Ok(());
                }
                Key::Ctrl('u') => input.clear(),
                Key::Char(c) => input.insert(c.encode_utf8(&mut [0; 4])),
                Key::Backspace => input.backspace(),
                Key::Delete => input.delete(),
                Key::Left => input.move_left(),
                Key::Right => input.move_right(),
                Key::Alt('b') => input.move_word_left(),
                Key::Alt('f') => input.move_word_right(),
                Key::Home => input.move_home(),
                Key::End => input.move_end(),
                Key::Up => {
                    if history_index > 0 {
                        history_index -= 1;
                        input.set(&history[history_index]);
                    }
                }
                Key::Down => {
                    if history_index < history.len().saturating_sub(1) {
                        history_index += 1;
                        input.set(&history[history_index]);
                    } else {
                        history_index = history.len();
                        input.clear();
                    }
                }
                _ => {}
            }
        }

        let line = input.text().trim().to_string();
        let Some(cmd) = command::parse(&line) else {
            write!(stdout, "\r\n")?;
            continue;
        };

        match cmd {
            Command::Quit => {
                write!(stdout, "\r\nGoodbye!\r\n")?;
                return Ok(());
            }
            Command::Clear => {
                history.clear();
                history_index = 0;
                write!(stdout, "\r\nHistory cleared\r\n\n")?;
            }
            Command::Help => {
                write!(stdout, "\r\n  Operators: + - * / ^ ( )\r\n")?;
                write!(stdout, "  Commands: details <expr>, precision <1-6>, clear, quit\r\n\n")?;
            }
            Command::Precision(Some(p)) => {
                precision = p;
                write!(stdout, "\r\nPrecision set to {}\r\n\n", precision)?;
            }
            Command::Precision(None) => {
                write!(stdout, "\r\nUsage: precision <digits> (now {})\r\n\n", precision)?;
            }
            Command::MissingExpression => {
                write!(stdout, "\r\nPlease enter a valid expression after 'details'\r\n\n")?;
            }
            Command::Evaluate { expression, detailed } => {
                history.push(line.clone());
                history_index = history.len();

                let mut trace = EvaluationTrace::new(detailed);
                let (display, error) = evaluate_traced(expression, precision, &mut trace);
                if error.is_empty() {
                    write!(stdout, "\r\n  {} = {}\r\n", expression, display)?;
                } else {
                    write!(stdout, "\r\n  {} = {}\r\n", display, error)?;
                }

                if detailed && !trace.steps.is_empty() {
                    write!(stdout, "\r\n  Step-by-step evaluation:\r\n")?;
                    for (i, step) in trace.steps.iter().enumerate() {
                        write!(stdout, "  Step {}: {} = {}\r\n", i + 1, step.operation, step.result)?;
                    }
                }
                write!(stdout, "\r\n")?;
            }
        }
    }
}
