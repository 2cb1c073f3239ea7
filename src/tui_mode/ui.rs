use super::app::App;
use super::help::render_help;
use super::helpers::{format_with_spaces, highlight_expression, wrap_text};
use super::keypad;
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::time::Duration;

const MIN_TERMINAL_WIDTH: u16 = 50;
const MIN_TERMINAL_HEIGHT: u16 = 16;
const KEYPAD_WIDTH: u16 = 26;

pub fn run_ui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            if app.show_help {
                render_help(f, app);
            } else {
                ui(f, app);
            }
        })?;

        if app.should_quit {
            break;
        }

        if crossterm::event::poll(Duration::from_millis(50))? {
            match crossterm::event::read()? {
                Event::Key(KeyEvent { code, modifiers, kind, .. }) if kind == KeyEventKind::Press => {
                    handle_key_event(app, code, modifiers);
                }
                Event::Mouse(event) => {
                    handle_mouse_event(app, event);
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if app.show_help {
        match code {
            KeyCode::Down => app.help_scroll = app.help_scroll.saturating_add(1),
            KeyCode::Up => app.help_scroll = app.help_scroll.saturating_sub(1),
            KeyCode::PageDown => app.help_scroll = app.help_scroll.saturating_add(10),
            KeyCode::PageUp => app.help_scroll = app.help_scroll.saturating_sub(10),
            KeyCode::Esc | KeyCode::F(1) => {
                app.show_help = false;
                app.help_scroll = 0;
            }
            _ => {}
        }
        return;
    }

    let control = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Char('c') | KeyCode::Char('C') if control => app.should_quit = true,
        KeyCode::Char('u') | KeyCode::Char('U') if control => app.clear_input(),
        KeyCode::Char(c) if !control && !modifiers.contains(KeyModifiers::ALT) => {
            app.input.insert(c.encode_utf8(&mut [0; 4]));
        }
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left if control => app.input.move_word_left(),
        KeyCode::Right if control => app.input.move_word_right(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => {
            app.input.move_home();
            app.input_scroll = 0;
        }
        KeyCode::End => app.input.move_end(),
        KeyCode::Up => app.navigate_history(-1),
        KeyCode::Down => app.navigate_history(1),
        KeyCode::PageUp => app.scroll_history(-1),
        KeyCode::PageDown => app.scroll_history(1),
        KeyCode::Enter => app.submit(),
        KeyCode::F(1) => {
            app.show_help = true;
            app.help_scroll = 0;
        }
        KeyCode::F(2) => app.cycle_precision(),
        KeyCode::Esc => {
            app.clear_input();
            app.error_message.clear();
        }
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, event: MouseEvent) {
    if app.show_help {
        match event.kind {
            MouseEventKind::ScrollDown => app.help_scroll = app.help_scroll.saturating_add(3),
            MouseEventKind::ScrollUp => app.help_scroll = app.help_scroll.saturating_sub(3),
            _ => {}
        }
    } else {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => app.click(event.column, event.row),
            MouseEventKind::ScrollDown => {
                app.history_scroll = app.history_scroll.saturating_add(3);
            }
            MouseEventKind::ScrollUp => {
                app.history_scroll = app.history_scroll.saturating_sub(3);
            }
            _ => {}
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let terminal_size = frame.size();

    if terminal_size.width < MIN_TERMINAL_WIDTH || terminal_size.height < MIN_TERMINAL_HEIGHT {
        app.keypad_areas.clear();
        render_resize_message(frame, terminal_size);
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(terminal_size);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Min(20), Constraint::Length(KEYPAD_WIDTH)])
        .split(layout[2]);

    render_input(frame, app, layout[0]);
    render_message(frame, app, layout[1]);
    render_history(frame, app, body[0]);
    render_keypad(frame, app, body[1]);
    render_status(frame, layout[3]);
    app.list_height = body[0].height as usize;
}

fn render_resize_message(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small! Min size: {}x{}. Current: {}x{}",
        MIN_TERMINAL_WIDTH,
        MIN_TERMINAL_HEIGHT,
        area.width,
        area.height
    );

    let text = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal window",
            Style::default().fg(Color::Yellow)
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Resize Required ")
        .title_alignment(Alignment::Center);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_message(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.error_message.is_empty() {
        Line::from(Span::styled(
            " Type an expression or use the keypad",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {}", app.error_message),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_keypad(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Keypad ")
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    app.keypad_areas.clear();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, keypad::LAYOUT.len() as u32); keypad::LAYOUT.len()])
        .split(inner_area);

    for (row_area, labels) in rows.iter().zip(keypad::LAYOUT.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, labels.len() as u32); labels.len()])
            .split(*row_area);

        for (cell, &label) in cells.iter().zip(labels.iter()) {
            let style = match label {
                keypad::CALCULATE_LABEL => Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
                keypad::CLEAR_LABEL => Style::default().fg(Color::Red),
                "+" | "-" | "*" | "/" | "^" => Style::default().fg(Color::Yellow),
                _ => Style::default().fg(Color::LightGreen),
            };

            let mut button = Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center);
            if cell.height >= 3 {
                button = button.block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                );
            }
            frame.render_widget(button, *cell);
            app.keypad_areas.push((*cell, label));
        }
    }
}

fn render_history(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" History ")
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if app.history.is_empty() {
        let empty_msg = Paragraph::new("No calculations yet. Enter an expression to see results here.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(empty_msg, inner_area);
        return;
    }

    let mut items = Vec::new();
    app.item_start_indices.clear();

    let wrap_width = inner_area.width.saturating_sub(4) as usize;

    for (i, entry) in app.history.iter().enumerate() {
        app.item_start_indices.push(items.len());

        let is_selected = i == app.cursor_history;
        let base_style = Style::default()
            .fg(if is_selected { Color::Yellow } else { Color::Cyan });

        let input = format_with_spaces(&entry.input);
        let input_lines = wrap_text(&input, wrap_width);

        for (line_idx, line) in input_lines.into_iter().enumerate() {
            let mut result_spans = vec![];

            if line_idx == 0 {
                result_spans.push(Span::styled("> ", Style::default().fg(Color::Green)));
            } else {
                result_spans.push(Span::styled("  ", Style::default()));
            }

            result_spans.extend(highlight_expression(&line, base_style));
            items.push(ListItem::new(Line::from(result_spans)));
        }

        let result_span = if entry.error.is_empty() {
            Span::styled(
                format!("  = {}", entry.display),
                Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!("  {}", entry.error),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        };
        items.push(ListItem::new(Line::from(result_span)));

        if entry.detailed_mode {
            for (j, step) in entry.detailed_steps.iter().enumerate() {
                let step_text = format!("Step {}: {} = {}", j + 1, step.operation, step.result);
                let step_lines = wrap_text(&step_text, wrap_width.saturating_sub(6));

                for (step_idx, line) in step_lines.into_iter().enumerate() {
                    let prefix = if step_idx == 0 { "    - " } else { "      " };
                    let span = Span::styled(
                        format!("{}{}", prefix, line),
                        Style::default().fg(Color::DarkGray)
                    );
                    items.push(ListItem::new(Line::from(span)));
                }
            }

            let time_str = format!(
                "    - Time: {:.6} ms",
                entry.duration.as_secs_f64() * 1000.0
            );
            items.push(ListItem::new(Line::from(Span::styled(
                time_str,
                Style::default().fg(Color::Magenta),
            ))));
        }

        if i < app.history.len() - 1 {
            let separator = Span::styled(
                "-".repeat(inner_area.width as usize),
                Style::default().fg(Color::DarkGray)
            );
            items.push(ListItem::new(Line::from(separator)));
        }
    }

    if app.scroll_to_bottom {
        app.history_scroll = items.len().saturating_sub(inner_area.height as usize);
        app.scroll_to_bottom = false;
    }

    let selected_index = app.item_start_indices.get(app.cursor_history).copied();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut state = ListState::default()
        .with_selected(selected_index)
        .with_offset(app.history_scroll);

    frame.render_stateful_widget(list, inner_area, &mut state);
}

fn render_status(frame: &mut Frame, area: Rect) {
    let keys = [
        ("Enter", "Calculate"),
        ("Up/Down", "History"),
        ("F1", "Help"),
        ("F2", "Precision"),
        ("Esc", "Clear"),
    ];

    let spans: Vec<Span> = keys
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    *key,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {} ", desc),
                    Style::default().fg(Color::DarkGray),
                ),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Expression | precision {} ", app.precision))
        .title_alignment(Alignment::Center);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let visible_width = (inner_area.width.saturating_sub(2)) as usize;
    let total = app.input.len();
    app.adjust_input_scroll(visible_width);

    let visible_input = app.input.window(app.input_scroll, visible_width);

    let input_line = Line::from(
        std::iter::once(Span::raw("> "))
            .chain(highlight_expression(&visible_input, Style::default()))
            .collect::<Vec<_>>(),
    );
    frame.render_widget(Paragraph::new(input_line), inner_area);

    let cursor_x = inner_area.x + 2 + app.input.cursor_width_from(app.input_scroll) as u16;
    frame.set_cursor(cursor_x, inner_area.y);

    let scroll_indicator_style = Style::default().fg(Color::DarkGray);

    if app.input_scroll > 0 {
        let left_indicator = Paragraph::new("<").style(scroll_indicator_style);
        frame.render_widget(left_indicator, Rect::new(inner_area.x, inner_area.y, 1, 1));
    }

    if total > app.input_scroll + visible_width {
        let right_indicator = Paragraph::new(">").style(scroll_indicator_style);
        frame.render_widget(
            right_indicator,
            Rect::new(inner_area.x + inner_area.width - 1, inner_area.y, 1, 1),
        );
    }
}
