//! Line-oriented input text.
//!
//! A [`Text`] is an ordered list of raw byte lines. Lines are kept as bytes
//! so decoding failures surface when a profile is built, with the index of
//! the offending line.

use memchr::memchr_iter;

/// Ordered lines of input text, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    lines: Vec<Vec<u8>>,
}

impl Text {
    /// Creates an empty text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits an in-memory buffer into lines on `\n`.
    ///
    /// The `\n` separators are dropped. A `\r` before a separator stays on
    /// its line; profile building strips it. A final line without a
    /// trailing newline is kept, an empty remainder after the last `\n` is not.
    pub fn from_bytes(buf: &[u8]) -> Self {
        let mut lines = Vec::new();
        let mut start = 0usize;

        for end in memchr_iter(b'\n', buf) {
            lines.push(buf[start..end].to_vec());
            start = end + 1;
        }

        if start < buf.len() {
            lines.push(buf[start..].to_vec());
        }

        Self { lines }
    }

    /// Creates a text from lines that are already split.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a line.
    pub fn push_line(&mut self, line: impl Into<Vec<u8>>) {
        self.lines.push(line.into());
    }

    /// Returns the number of lines.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the text has no lines.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the raw lines.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = &'a Vec<u8>;
    type IntoIter = core::slice::Iter<'a, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
