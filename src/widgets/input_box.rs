//! Text input state for the tool forms.
//!
//! Two flavors: a single-line [`InputBox`] with cursor handling and
//! horizontal scrolling, and a [`MultilineInput`] for script and
//! description fields fed by typing and bracketed paste.

/// A single-line text input with cursor handling and scrolling support.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    content: String,
    cursor_position: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the current cursor position.
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor_position);
        self.content.insert(byte_idx, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor (Backspace).
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let byte_idx = self.byte_index(self.cursor_position);
            self.content.remove(byte_idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.char_len();
    }

    pub fn paste(&mut self, text: &str) {
        // Single-line field: newlines collapse to spaces.
        for c in text.chars() {
            self.insert_char(if c == '\n' || c == '\r' { ' ' } else { c });
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn set_content(&mut self, content: String) {
        self.cursor_position = content.chars().count();
        self.content = content;
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Visible slice of the content for a given width, keeping the cursor
    /// in view.
    pub fn visible(&self, width: usize) -> String {
        if width == 0 {
            return String::new();
        }
        let chars: Vec<char> = self.content.chars().collect();
        let start = self.cursor_position.saturating_sub(width.saturating_sub(1));
        chars[start..].iter().take(width).collect()
    }
}

/// An append-oriented multi-line buffer for long text (scripts).
#[derive(Debug, Clone, Default)]
pub struct MultilineInput {
    content: String,
}

impl MultilineInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.push(c);
    }

    pub fn newline(&mut self) {
        self.content.push('\n');
    }

    pub fn backspace(&mut self) {
        self.content.pop();
    }

    pub fn paste(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Word count used in the form footer.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Last `n` lines for the preview area.
    pub fn tail_lines(&self, n: usize) -> Vec<&str> {
        let lines: Vec<&str> = self.content.lines().collect();
        let start = lines.len().saturating_sub(n);
        lines[start..].to_vec()
    }
}
