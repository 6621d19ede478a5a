//! Input field handling for the terminal user interface.

/// A text input field with cursor position and active state management.
///
/// The cursor counts characters, not bytes, so multi-byte input edits cleanly.
#[derive(Clone, Debug, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
    pub active: bool,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input field with initial text value.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
            active: false,
        }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Trimmed contents.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_in_the_middle() {
        let mut f = InputField::with_value("ac");
        f.move_cursor_left();
        f.handle_char('b');
        assert_eq!(f.value, "abc");
        assert_eq!(f.cursor, 2);
        f.handle_backspace();
        assert_eq!(f.value, "ac");
        f.handle_delete();
        assert_eq!(f.value, "a");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut f = InputField::new();
        for c in "ünï".chars() {
            f.handle_char(c);
        }
        assert_eq!(f.cursor, 3);
        f.move_cursor_left();
        f.handle_backspace();
        assert_eq!(f.value, "üï");
        f.move_cursor_right();
        f.move_cursor_right();
        assert_eq!(f.cursor, 2);
    }

    #[test]
    fn test_clear() {
        let mut f = InputField::with_value("  text ");
        assert_eq!(f.trimmed(), "text");
        f.clear();
        assert_eq!(f.value, "");
        assert_eq!(f.cursor, 0);
    }
}
