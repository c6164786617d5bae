/// Editable text with a cursor and a cached character count.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
    char_count: usize,
}

impl TextBuffer {
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut buffer = Self::default();
        buffer.set(text.into());
        buffer
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn count_label(&self) -> String {
        char_count_label(self.char_count)
    }

    /// Replace the whole buffer; the cursor moves to the end.
    pub fn set(&mut self, text: String) {
        self.cursor = text.len();
        self.text = text;
        self.recount();
    }

    pub fn clear(&mut self) {
        self.set(String::new());
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.recount();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
            self.recount();
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
            self.recount();
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Start of the cursor's line.
    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor]
            .rfind('\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);
    }

    /// End of the cursor's line.
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|idx| self.cursor + idx)
            .unwrap_or(self.text.len());
    }

    /// Zero-based line index of the cursor.
    pub fn cursor_line(&self) -> usize {
        self.text[..self.cursor].matches('\n').count()
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }

    fn recount(&mut self) {
        self.char_count = self.text.chars().count();
    }
}

/// "1 character", otherwise "N characters".
pub fn char_count_label(count: usize) -> String {
    if count == 1 {
        "1 character".to_string()
    } else {
        format!("{} characters", count)
    }
}
