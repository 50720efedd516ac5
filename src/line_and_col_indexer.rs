//! Compute line and column info for an expression, for pointing at errors. Expressions may span
//! several lines, since newlines count as whitespace.
//!
//! ```
//! use yardcalc::line_and_col_indexer::LineAndColIndexer;
//!
//! //                                    0123 4 56
//! let indexer = LineAndColIndexer::new("1 +\r\n2)");
//!
//! assert_eq!(indexer.num_lines(), 2);
//! assert_eq!(indexer.line_col(2), (0, 2));
//! assert_eq!(indexer.line_col(6), (1, 1));
//! assert_eq!(indexer.line_contents(1), "2)");
//! ```

/// A store of line start offsets within a source text.
#[derive(Debug, Clone)]
pub struct LineAndColIndexer<'s> {
    source: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> LineAndColIndexer<'s> {
    /// Scan the source for newlines. Even the empty string has one line.
    pub fn new(source: &'s str) -> LineAndColIndexer<'s> {
        let mut line_starts = vec![0];
        for (i, ch) in source.char_indices() {
            if ch == '\n' && i + 1 < source.len() {
                line_starts.push(i + 1);
            }
        }
        LineAndColIndexer {
            source,
            line_starts,
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Get the 0-indexed line and column of a byte offset. The column is counted in bytes. A
    /// newline character is considered part of the line it ends.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the end of the source string.
    pub fn line_col(&self, pos: usize) -> (usize, usize) {
        assert!(pos <= self.source.len(), "position out of bounds");
        let line = match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        (line, pos - self.line_starts[line])
    }

    pub fn num_lines(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the contents of the `line_num`th line, excluding the line terminator.
    ///
    /// # Panics
    ///
    /// Panics if there are fewer than `line_num` lines.
    pub fn line_contents(&self, line_num: usize) -> &'s str {
        let (start, end) = self.line_span(line_num);
        &self.source[start..end]
    }

    /// Get the start (inclusive) and end (exclusive) byte offsets of the `line_num`th line,
    /// excluding the line terminator.
    pub fn line_span(&self, line_num: usize) -> (usize, usize) {
        let start = self.line_starts[line_num];
        let mut end = match self.line_starts.get(line_num + 1) {
            Some(next_start) => *next_start,
            None => self.source.len(),
        };
        let line = &self.source[start..end];
        if line.ends_with("\r\n") {
            end -= 2;
        } else if line.ends_with('\n') {
            end -= 1;
        }
        (start, end)
    }
}
