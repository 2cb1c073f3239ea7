use super::app::App;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
    ))
}

pub fn render_help(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" PEMDAS Calculator Help ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let help_text = vec![
        Line::from(Span::styled(
            "PEMDAS Calculator",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Operations (highest precedence first):"),
        Line::from("  ( ) : Grouping      (e.g., (2 + 3) * 4 = 20)"),
        Line::from("  ^   : Power         (e.g., 3 * 4 ^ 2 = 48, 2 ^ 3 ^ 2 = 64)"),
        Line::from("  * / : Multiply and divide, left to right"),
        Line::from("  + - : Add and subtract, left to right"),
        Line::from("  -   : Sign directly before a number (e.g., 3 * -2 = -6)"),
        Line::from(""),
        heading("Not supported:"),
        Line::from("  Implicit multiplication: write 8 * (3 + 5), not 8(3 + 5)"),
        Line::from("  Stacked signs such as --2"),
        Line::from(""),
        heading("Precision:"),
        Line::from(format!("  Current: {} digits after the decimal point", app.precision)),
        Line::from("  F2 cycles 1 to 6, 'precision <n>' sets any value"),
        Line::from(""),
        heading("Keypad:"),
        Line::from("  Click a button to insert it at the cursor"),
        Line::from("  = : Calculate     CLR : Clear the input and the error"),
        Line::from(""),
        heading("Commands:"),
        Line::from("  details <expression> : Show step-by-step evaluation with time"),
        Line::from("  clear : Clear calculation history"),
        Line::from("  help  : Show this help screen"),
        Line::from("  quit  : Exit the calculator"),
        Line::from(""),
        heading("Navigation:"),
        Line::from("  ← → : Move cursor left/right"),
        Line::from("  Ctrl+←/→ : Move cursor by words"),
        Line::from("  Home/End : Move to start/end of line"),
        Line::from("  ↑ ↓ : Navigate calculation history"),
        Line::from("  PgUp/PgDn : Page through history"),
        Line::from("  Ctrl+U : Clear current input"),
        Line::from("  Ctrl+C : Quit"),
        Line::from(""),
        heading("Examples:"),
        Line::from("  2 * (3 + (4 - 1) * 2)"),
        Line::from("  (-2) ^ 3"),
        Line::from("  details ((2 + 3) * 4) ^ 2"),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .scroll((app.help_scroll as u16, 0));

    frame.render_widget(Clear, frame.size());
    frame.render_widget(paragraph, frame.size());
}
