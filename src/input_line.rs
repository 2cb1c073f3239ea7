use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Editable single-line input. The cursor counts grapheme clusters.
#[derive(Default)]
pub struct InputLine {
    text: String,
    cursor: usize,
}

impl InputLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Replaces the whole text and puts the cursor at its end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, s: &str) {
        let byte_idx = self.byte_index(self.cursor);
        self.text.insert_str(byte_idx, s);
        self.cursor += s.graphemes(true).count();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_at_cursor();
        }
    }

    pub fn delete(&mut self) {
        self.remove_at_cursor();
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn move_word_left(&mut self) {
        let graphemes: Vec<&str> = self.text.graphemes(true).collect();
        let mut pos = self.cursor;

        while pos > 0 && is_blank(graphemes[pos - 1]) {
            pos -= 1;
        }
        while pos > 0 && !is_blank(graphemes[pos - 1]) {
            pos -= 1;
        }
        self.cursor = pos;
    }

    pub fn move_word_right(&mut self) {
        let graphemes: Vec<&str> = self.text.graphemes(true).collect();
        let len = graphemes.len();
        let mut pos = self.cursor;

        while pos < len && !is_blank(graphemes[pos]) {
            pos += 1;
        }
        while pos < len && is_blank(graphemes[pos]) {
            pos += 1;
        }
        self.cursor = pos;
    }

    /// Terminal columns between grapheme `start` and the cursor.
    pub fn cursor_width_from(&self, start: usize) -> usize {
        let start = self.byte_index(start.min(self.cursor));
        self.text[start..self.byte_index(self.cursor)].width()
    }

    /// The text starting at grapheme `start`, at most `count` graphemes long.
    pub fn window(&self, start: usize, count: usize) -> String {
        self.text.graphemes(true).skip(start).take(count).collect()
    }

    fn byte_index(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn remove_at_cursor(&mut self) {
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.drain(start..end);
    }
}

fn is_blank(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}
