use unicode_width::UnicodeWidthStr;

/// Single-line input for new prompts
///
/// Keys (wired in `input.rs`):
/// - Ctrl+A / Home: move to beginning
/// - Ctrl+E / End: move to end
/// - Ctrl+K: kill to end, Ctrl+U: kill to beginning
/// - Ctrl+W / Alt+Backspace: delete word backward
///
/// Pasted newlines become spaces since a prompt is one line.
#[derive(Debug, Clone, Default)]
pub struct TextEditor {
    pub text: String,
    /// Cursor position as byte offset
    cursor: usize,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor column in terminal cells (wide characters count as two)
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        let c = if c == '\n' || c == '\r' { ' ' } else { c };
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn handle_paste(&mut self, text: &str) {
        let flattened: String = text
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join(" ");
        self.text.insert_str(self.cursor, &flattened);
        self.cursor += flattened.len();
    }

    /// Backspace
    pub fn delete_char_before(&mut self) {
        if self.cursor > 0 {
            let prev_boundary = self.prev_boundary();
            self.text.remove(prev_boundary);
            self.cursor = prev_boundary;
        }
    }

    /// Delete key
    pub fn delete_char_at(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn kill_to_line_end(&mut self) {
        self.text.truncate(self.cursor);
    }

    pub fn kill_to_line_start(&mut self) {
        self.text.drain(..self.cursor);
        self.cursor = 0;
    }

    pub fn delete_word_backward(&mut self) {
        let before = &self.text[..self.cursor];
        let trimmed = before.trim_end();
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Return the current text and reset the editor
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}
