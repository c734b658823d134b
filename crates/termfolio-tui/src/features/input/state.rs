//! User input state.
//!
//! Manages the single-line input buffer, command history, and history
//! navigation.

/// User input state.
///
/// Encapsulates the buffer, command history, and navigation state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Text typed so far.
    buffer: String,

    /// Submitted lines, oldest first, stored exactly as typed.
    pub history: Vec<String>,

    /// Current position in history (None = not navigating).
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current buffer text.
    pub fn get_text(&self) -> String {
        self.buffer.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Appends a character. Browsing history is left as is.
    pub fn insert_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    pub fn insert_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Removes the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Removes the word before the end of the buffer, and any whitespace
    /// after it.
    pub fn delete_word_left(&mut self) {
        let trimmed_len = self.buffer.trim_end().len();
        let word_start = self.buffer[..trimmed_len]
            .rfind(char::is_whitespace)
            .map_or(0, |idx| {
                idx + self.buffer[idx..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8)
            });
        self.buffer.truncate(word_start);
    }

    /// Clears the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Replaces the buffer wholesale.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.clear();
        self.buffer.push_str(text);
    }

    /// Resets history navigation state.
    pub fn reset_navigation(&mut self) {
        self.history_index = None;
    }

    /// Records a submitted line and ends any history browsing.
    pub fn push_history(&mut self, line: String) {
        self.history.push(line);
        self.reset_navigation();
    }

    /// Navigates up in command history.
    ///
    /// Stops at the oldest entry.
    pub fn navigate_up(&mut self) {
        if self.history.is_empty() {
            return;
        }

        let idx = match self.history_index {
            None => self.history.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.history_index = Some(idx);

        if let Some(entry) = self.history.get(idx).cloned() {
            self.set_text(&entry);
        }
    }

    /// Navigates down in command history.
    ///
    /// Moving past the newest entry leaves history and empties the buffer.
    pub fn navigate_down(&mut self) {
        let Some(idx) = self.history_index else {
            return;
        };

        if idx + 1 < self.history.len() {
            self.history_index = Some(idx + 1);
            if let Some(entry) = self.history.get(idx + 1).cloned() {
                self.set_text(&entry);
            }
        } else {
            self.history_index = None;
            self.clear();
        }
    }
}
