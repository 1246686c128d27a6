//! Multi-line text input buffer with a single insertion cursor.

use crate::input::MIN_INPUT_CHARS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    /// Cursor position as a byte offset on a char boundary.
    cursor: usize,
}

impl InputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert pasted text, normalising CRLF/CR line endings to `\n`.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.text.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |i| self.cursor + i);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Characters counted toward the minimum (trimmed).
    pub fn trimmed_len(&self) -> usize {
        self.text.trim().chars().count()
    }

    pub fn meets_minimum(&self) -> bool {
        self.trimmed_len() >= MIN_INPUT_CHARS
    }

    /// Cursor as (row, column) in characters, for placing the terminal cursor.
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let row = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (row, before[line_start..].chars().count())
    }

    /// The text hard-wrapped to `width` columns, one entry per screen row.
    ///
    /// Every logical line yields at least one row, so blank lines survive.
    pub fn visual_lines(&self, width: usize) -> Vec<String> {
        let width = width.max(1);
        let mut rows = Vec::new();
        for line in self.text.split('\n') {
            let chars: Vec<char> = line.chars().collect();
            if chars.is_empty() {
                rows.push(String::new());
            } else {
                rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect()));
            }
        }
        rows
    }

    /// Cursor as (screen row, column) within [`Self::visual_lines`].
    ///
    /// A cursor right after a full row sits at the start of the next one.
    pub fn visual_cursor(&self, width: usize) -> (usize, usize) {
        let width = width.max(1);
        let (row, col) = self.cursor_row_col();
        let rows_above: usize = self
            .text
            .split('\n')
            .take(row)
            .map(|line| line.chars().count().div_ceil(width).max(1))
            .sum();
        (rows_above + col / width, col % width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> InputBuffer {
        let mut buf = InputBuffer::default();
        buf.insert_str(text);
        buf
    }

    #[test]
    fn typing_and_backspace() {
        let mut buf = InputBuffer::default();
        for ch in "héllo".chars() {
            buf.insert_char(ch);
        }
        buf.backspace();
        assert_eq!(buf.text(), "héll");
        assert_eq!(buf.cursor(), buf.text().len());
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut buf = InputBuffer::default();
        buf.backspace();
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn paste_normalises_line_endings() {
        let buf = buffer("a\r\nb\rc");
        assert_eq!(buf.text(), "a\nb\nc");
    }

    #[test]
    fn insert_in_the_middle() {
        let mut buf = buffer("ac");
        buf.move_left();
        buf.insert_char('b');
        assert_eq!(buf.text(), "abc");
        buf.delete();
        assert_eq!(buf.text(), "ab");
    }

    #[test]
    fn home_and_end_stay_on_the_line() {
        let mut buf = buffer("one\ntwo");
        buf.move_home();
        assert_eq!(buf.cursor_row_col(), (1, 0));
        buf.move_end();
        assert_eq!(buf.cursor_row_col(), (1, 3));
        buf.move_left();
        buf.move_left();
        buf.move_left();
        buf.move_left();
        assert_eq!(buf.cursor_row_col(), (0, 3));
    }

    #[test]
    fn minimum_uses_trimmed_chars() {
        let buf = buffer(&format!("  {}  ", "a".repeat(49)));
        assert_eq!(buf.trimmed_len(), 49);
        assert!(!buf.meets_minimum());
        let buf = buffer(&"a".repeat(50));
        assert!(buf.meets_minimum());
    }

    #[test]
    fn long_line_wraps_into_rows() {
        let buf = buffer(&"x".repeat(25));
        assert_eq!(
            buf.visual_lines(10),
            vec!["x".repeat(10), "x".repeat(10), "x".repeat(5)]
        );
        assert_eq!(buf.visual_cursor(10), (2, 5));
    }

    #[test]
    fn wrapped_rows_keep_blank_lines() {
        let mut buf = buffer(&format!("{}\n\nab", "y".repeat(12)));
        assert_eq!(
            buf.visual_lines(10),
            vec!["y".repeat(10), "yy".to_string(), String::new(), "ab".to_string()]
        );
        assert_eq!(buf.visual_cursor(10), (3, 2));

        buf.move_home();
        assert_eq!(buf.visual_cursor(10), (3, 0));
    }

    #[test]
    fn cursor_after_full_row_moves_to_next_row() {
        let buf = buffer(&"z".repeat(20));
        assert_eq!(buf.visual_lines(10).len(), 2);
        assert_eq!(buf.visual_cursor(10), (2, 0));
    }

    #[test]
    fn clear_resets_cursor() {
        let mut buf = buffer("text");
        buf.clear();
        assert_eq!(buf.cursor(), 0);
        assert!(buf.text().is_empty());
    }
}
