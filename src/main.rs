#[cfg(any(feature = "tui", feature = "line"))]
mod input_line;
#[cfg(all(feature = "line", not(feature = "tui")))]
mod line_mode;
#[cfg(feature = "tui")]
mod tui_mode;

use anyhow::Result;
use clap::Parser;
use pemdas_calc::{calculate, DEFAULT_PRECISION};

/// Evaluates arithmetic expressions with `+ - * / ^` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Digits shown after the decimal point.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Evaluate this expression, print the result and exit.
    expression: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match calculate(&expression, args.precision) {
            Ok(display) => println!("{}", display),
            Err(e) => {
                eprintln!("{}: {} ({})", expression, e, e.code());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    run_interactive(args.precision)
}

#[cfg(feature = "tui")]
fn run_interactive(precision: usize) -> Result<()> {
    tui_mode::run_tui(precision)
}

#[cfg(all(feature = "line", not(feature = "tui")))]
fn run_interactive(precision: usize) -> Result<()> {
    line_mode::run_line(precision)
}

#[cfg(not(any(feature = "tui", feature = "line")))]
fn run_interactive(precision: usize) -> Result<()> {
    use pemdas_calc::evaluate;
    use std::io::{self, BufRead, Write};

    println!("Provide the expression you wish to calculate.");
    println!("Usable operators are + , - , * , / , ^, ( , )");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "---> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if matches!(line.trim(), "q" | "quit" | "exit") {
            return Ok(());
        }

        let (display, error) = evaluate(line, precision);
        println!("Results: {}\nError: {}", display, error);
    }
}
