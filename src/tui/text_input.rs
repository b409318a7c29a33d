//! Single-line text input used for editing form fields and the avatar path
//! prompt.

/// Converts a character index to a byte position within `s`.
///
/// Returns `s.len()` when `char_idx` is at or past the end.
fn char_to_byte_pos(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(pos, _)| pos)
        .unwrap_or(s.len())
}

/// A text buffer with a cursor measured in characters.
///
/// ```
/// # use profile_settings::tui::text_input::TextInput;
/// let mut input = TextInput::new();
/// input.set_text("Acme");
/// input.move_cursor_home();
/// input.insert_char('@');
/// assert_eq!(input.text(), "@Acme");
/// assert_eq!(input.cursor_pos(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    buffer: String,
    cursor_pos: usize,
}

impl TextInput {
    /// Creates an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `c` at the cursor and advances the cursor.
    pub fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_pos(&self.buffer, self.cursor_pos);
        self.buffer.insert(byte_pos, c);
        self.cursor_pos += 1;
    }

    /// Removes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        self.cursor_pos -= 1;
        let byte_pos = char_to_byte_pos(&self.buffer, self.cursor_pos);
        self.buffer.remove(byte_pos);
    }

    /// Removes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor_pos < self.len() {
            let byte_pos = char_to_byte_pos(&self.buffer, self.cursor_pos);
            self.buffer.remove(byte_pos);
        }
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_pos = 0;
    }

    /// Replaces the buffer and puts the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor_pos = self.len();
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Text before and after the cursor, for drawing the cursor in between.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer
            .split_at(char_to_byte_pos(&self.buffer, self.cursor_pos))
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }
}
