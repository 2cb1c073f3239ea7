use super::keypad::{self, Button};
use crate::input_line::InputLine;
use pemdas_calc::command::{self, Command};
use pemdas_calc::{evaluate_traced, EvaluationTrace, Step};
use ratatui::layout::Rect;

pub struct HistoryEntry {
    pub input: String,
    pub display: String,
    pub error: String,
    pub detailed_steps: Vec<Step>,
    pub detailed_mode: bool,
    pub duration: std::time::Duration,
}

pub struct App {
    pub input: InputLine,
    pub input_scroll: usize,
    pub precision: usize,
    /// Error of the last evaluation, shown under the input.
    pub error_message: String,
    pub history: Vec<HistoryEntry>,
    pub cursor_history: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: usize,
    pub list_height: usize,
    pub item_start_indices: Vec<usize>,
    pub history_scroll: usize,
    pub scroll_to_bottom: bool,
    /// Screen area of every keypad button, filled in while drawing.
    pub keypad_areas: Vec<(Rect, &'static str)>,
}

impl App {
    pub fn new(precision: usize) -> Self {
        App {
            input: InputLine::default(),
            input_scroll: 0,
            precision,
            error_message: String::new(),
            history: Vec::new(),
            cursor_history: 0,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            list_height: 5,
            item_start_indices: Vec::new(),
            history_scroll: 0,
            scroll_to_bottom: false,
            keypad_areas: Vec::new(),
        }
    }

    pub fn adjust_input_scroll(&mut self, visible_width: usize) {
        let total = self.input.len();
        let cursor_pos = self.input.cursor();

        if cursor_pos < self.input_scroll {
            self.input_scroll = cursor_pos;
        } else if cursor_pos >= self.input_scroll + visible_width {
            self.input_scroll = cursor_pos - visible_width + 1;
        }

        if self.input_scroll > total.saturating_sub(visible_width) {
            self.input_scroll = total.saturating_sub(visible_width);
        }
    }

    pub fn submit(&mut self) {
        let line = self.input.text().trim().to_string();
        let Some(cmd) = command::parse(&line) else {
            return;
        };

        match cmd {
            Command::Quit => self.should_quit = true,
            Command::Clear => {
                self.history.clear();
                self.cursor_history = 0;
                self.history_scroll = 0;
                self.error_message.clear();
                self.clear_input();
            }
            Command::Help => {
                self.show_help = true;
                self.help_scroll = 0;
                self.clear_input();
            }
            Command::Precision(Some(precision)) => {
                self.precision = precision;
                self.error_message.clear();
                self.clear_input();
            }
            Command::Precision(None) => {
                self.error_message = format!("Usage: precision <digits> (now {})", self.precision);
            }
            Command::MissingExpression => {
                self.history.push(HistoryEntry {
                    input: line.clone(),
                    display: line.clone(),
                    error: "Please enter a valid expression after 'details'".to_string(),
                    detailed_steps: Vec::new(),
                    detailed_mode: false,
                    duration: std::time::Duration::ZERO,
                });
                self.clear_input();
                self.scroll_to_bottom = true;
            }
            Command::Evaluate { expression, detailed } => self.calculate(expression, detailed),
        }
    }

    /// Evaluates `expression`, records it in the history and, like a desk
    /// calculator, leaves the result (or the untouched input) in the entry.
    pub fn calculate(&mut self, expression: &str, detailed_mode: bool) {
        let start_time = std::time::Instant::now();
        let mut trace = EvaluationTrace::new(detailed_mode);
        let (display, error) = evaluate_traced(expression, self.precision, &mut trace);
        let duration = start_time.elapsed();

        self.input.set(&display);
        self.input_scroll = 0;
        self.error_message = error.clone();

        self.history.push(HistoryEntry {
            input: expression.to_string(),
            display,
            error,
            detailed_steps: trace.steps,
            detailed_mode,
            duration,
        });
        self.cursor_history = self.history.len().saturating_sub(1);
        self.scroll_to_bottom = true;
    }

    pub fn press(&mut self, label: &str) {
        match keypad::button(label) {
            Some(Button::Insert(text)) => self.input.insert(text),
            Some(Button::Clear) => {
                self.clear_input();
                self.error_message.clear();
            }
            Some(Button::Calculate) => {
                if self.input.text().trim().is_empty() {
                    let text = self.input.text().to_string();
                    self.calculate(&text, false);
                } else {
                    self.submit();
                }
            }
            None => {}
        }
    }

    /// Handles a left click at a screen position.
    pub fn click(&mut self, column: u16, row: u16) {
        let hit = self.keypad_areas.iter().find(|(area, _)| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        });
        if let Some(&(_, label)) = hit {
            self.press(label);
        }
    }

    pub fn cycle_precision(&mut self) {
        self.precision = command::next_precision(self.precision);
    }

    pub fn navigate_history(&mut self, direction: i32) {
        if direction < 0 && self.cursor_history > 0 {
            self.cursor_history -= 1;
        } else if direction > 0 && self.cursor_history < self.history.len().saturating_sub(1) {
            self.cursor_history += 1;
        }

        if let Some(entry) = self.history.get(self.cursor_history) {
            let input = entry.input.clone();
            self.input.set(&input);
        } else {
            self.input.clear();
        }
        self.input_scroll = 0;
        self.scroll_to_bottom = false;
    }

    pub fn scroll_history(&mut self, direction: i32) {
        let step = self.list_height.saturating_sub(1);
        if direction < 0 {
            self.cursor_history = self.cursor_history.saturating_sub(step);
        } else {
            self.cursor_history = self
                .cursor_history
                .saturating_add(step)
                .min(self.history.len().saturating_sub(1));
        }

        if let Some(entry) = self.history.get(self.cursor_history) {
            let input = entry.input.clone();
            self.input.set(&input);
        }
        self.input_scroll = 0;
        self.scroll_to_bottom = false;
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.input_scroll = 0;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn app_with(input: &str) -> App {
        let mut app = App::new(4);
        app.input.set(input);
        app
    }

    #[test]
    fn enter_replaces_input_with_result() {
        let mut app = app_with("2+3*4");
        app.submit();
        assert_eq!(app.input.text(), "14");
        assert!(app.error_message.is_empty());
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].input, "2+3*4");
    }

    #[test]
    fn error_keeps_input() {
        let mut app = app_with("3/0");
        app.submit();
        assert_eq!(app.input.text(), "3/0");
        assert_eq!(app.error_message, "Error: Division by zero");
    }

    #[test]
    fn keypad_builds_expression() {
        let mut app = App::new(2);
        for label in ["1", "0", "/", "3", "="] {
            app.press(label);
        }
        assert_eq!(app.input.text(), "3.33");

        app.press("CLR");
        assert_eq!(app.input.text(), "");
    }

    #[test]
    fn calculate_on_empty_input_reports_it() {
        let mut app = App::new(4);
        app.press("=");
        assert_eq!(app.error_message, "Invalid: No expression");
    }

    #[test]
    fn precision_command_and_cycle() {
        let mut app = app_with("precision 6");
        app.submit();
        assert_eq!(app.precision, 6);
        app.cycle_precision();
        assert_eq!(app.precision, 1);
    }

    #[test]
    fn details_records_steps() {
        let mut app = app_with("details (1+2)*3");
        app.submit();
        let entry = &app.history[0];
        assert!(entry.detailed_mode);
        assert_eq!(entry.display, "9");
        assert_eq!(entry.detailed_steps.len(), 3);
    }

    #[test]
    fn click_hits_keypad_button() {
        let mut app = App::new(4);
        app.keypad_areas = vec![(Rect::new(10, 5, 5, 3), "7")];
        app.click(12, 6);
        app.click(30, 6);
        assert_eq!(app.input.text(), "7");
    }

    #[test]
    fn quit_and_clear() {
        let mut app = app_with("1+1");
        app.submit();
        app.input.set("clear");
        app.submit();
        assert!(app.history.is_empty());
        app.input.set("quit");
        app.submit();
        assert!(app.should_quit);
    }
}
