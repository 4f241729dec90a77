#[cfg(test)]
#[path = "line_test.rs"]
mod tests;

/// The uncommitted input line. The cursor is always pinned to the end of the
/// line; there is no mid-line editing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    buffer: String,
}

impl LineBuffer {
    pub fn new() -> LineBuffer {
        return LineBuffer::default();
    }

    pub fn append(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    /// Removes the last character. Returns false on an empty buffer so the
    /// caller knows not to erase anything on screen.
    pub fn delete_last(&mut self) -> bool {
        return self.buffer.pop().is_some();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Replaces the whole line, returning the previous length in characters.
    /// The caller must erase that many columns, not the new length, or a
    /// shorter replacement leaves stale characters on screen.
    pub fn replace(&mut self, content: &str) -> usize {
        let previous_len = self.len();
        self.buffer = content.to_string();
        return previous_len;
    }

    /// Empties the buffer and hands back its content, used at submit.
    pub fn take(&mut self) -> String {
        return std::mem::take(&mut self.buffer);
    }

    pub fn len(&self) -> usize {
        return self.buffer.chars().count();
    }

    pub fn is_empty(&self) -> bool {
        return self.buffer.is_empty();
    }

    pub fn as_str(&self) -> &str {
        return &self.buffer;
    }
}
