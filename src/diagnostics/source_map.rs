//! Byte offset to line/column mapping.
//!
//! The map keeps a normalized copy of the source: carriage returns are
//! dropped and a trailing newline is guaranteed. Lines and columns are
//! 1-based, offsets are 0-based.

/// Line-start index over a normalized copy of one source text.
#[derive(Debug, Clone)]
pub struct SourceMap {
    content: String,
    /// `starts[0] == 0`; `starts[i]` is the offset just past the i-th newline.
    starts: Vec<usize>,
    /// Offsets in the original text of every dropped `\r`, ascending.
    removed_cr: Vec<usize>,
}

impl SourceMap {
    pub fn new(source: &str) -> Self {
        let mut content = String::with_capacity(source.len() + 1);
        let mut removed_cr = Vec::new();
        for (i, ch) in source.char_indices() {
            if ch == '\r' {
                removed_cr.push(i);
            } else {
                content.push(ch);
            }
        }
        if !content.ends_with('\n') {
            content.push('\n');
        }

        let starts = std::iter::once(0)
            .chain(
                content
                    .bytes()
                    .enumerate()
                    .filter(|&(_, b)| b == b'\n')
                    .map(|(i, _)| i + 1),
            )
            .collect();

        Self {
            content,
            starts,
            removed_cr,
        }
    }

    /// Builds a map over raw bytes. Invalid UTF-8 becomes U+FFFD, so offsets
    /// stay exact up to the first non-ASCII byte and shift after it.
    pub fn from_bytes(source: &[u8]) -> Self {
        Self::new(&String::from_utf8_lossy(source))
    }

    /// The normalized text.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn line_starts(&self) -> &[usize] {
        &self.starts
    }

    /// One more than the number of newlines in the normalized text.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Maps an offset into the normalized text to a 1-based `(line, column)`.
    /// Offsets past the end are clamped to the length.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        // starts[0] == 0, so at least one start is <= offset.
        let line_idx = self.starts.partition_point(|&start| start <= offset) - 1;
        (line_idx + 1, offset - self.starts[line_idx] + 1)
    }

    /// Like [`SourceMap::line_col`], but for an offset into the original
    /// text, before carriage returns were stripped.
    pub fn locate(&self, raw_offset: usize) -> (usize, usize) {
        let dropped = self.removed_cr.partition_point(|&cr| cr < raw_offset);
        self.line_col(raw_offset - dropped)
    }

    /// Text of a 1-based line without its newline. Out of range yields `""`.
    pub fn get_line(&self, line: usize) -> &str {
        if line == 0 || line >= self.starts.len() {
            return "";
        }
        &self.content[self.starts[line - 1]..self.starts[line] - 1]
    }
}
