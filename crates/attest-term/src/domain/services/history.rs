#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

/// What an arrow-down recall resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecallNext {
    /// Substitute the buffer with this entry.
    Entry(String),
    /// Walked past the newest entry; the caller clears the line.
    EmptyLine,
    /// Not browsing history; nothing to do.
    NoOp,
}

/// Append-only store of previously submitted commands with a recall cursor.
///
/// The cursor is an offset from the newest entry; -1 means not browsing.
/// It never leaves the range [-1, entries.len() - 1].
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: isize,
}

impl Default for History {
    fn default() -> History {
        return History::new();
    }
}

impl History {
    pub fn new() -> History {
        return History {
            entries: vec![],
            cursor: -1,
        };
    }

    /// Appends the submitted line unless it is blank. Duplicates of the
    /// previous entry are kept. Always resets the cursor, appended or not.
    pub fn record(&mut self, line: &str) {
        if !line.trim().is_empty() {
            self.entries.push(line.to_string());
        }
        self.cursor = -1;
    }

    /// Moves one entry toward the oldest and returns it; the newest entry
    /// comes back first. Clamped at the oldest entry, so repeated calls there
    /// keep returning it rather than wrapping.
    pub fn recall_previous(&mut self) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        if self.cursor < self.entries.len() as isize - 1 {
            self.cursor += 1;
        }

        let index = self.entries.len() - 1 - self.cursor as usize;
        return Some(self.entries[index].clone());
    }

    /// Moves one entry back toward the newest. Stepping past the newest
    /// recalled entry signals a return to the empty line rather than
    /// restoring any unsubmitted draft.
    pub fn recall_next(&mut self) -> RecallNext {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.entries.len() - 1 - self.cursor as usize;
            return RecallNext::Entry(self.entries[index].clone());
        }

        if self.cursor == 0 {
            self.cursor = -1;
            return RecallNext::EmptyLine;
        }

        return RecallNext::NoOp;
    }

    pub fn entries(&self) -> &[String] {
        return &self.entries;
    }
}
