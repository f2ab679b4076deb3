//! Line acquisition for the interactive loop.

use std::io::{self, BufRead};

/// Initial capacity of the per-line buffer. Lines longer than this grow the
/// buffer geometrically; input length is unbounded.
pub(crate) const LINE_BUFFER_CAPACITY: usize = 1024;

/// Reads one raw line at a time from a buffered input source.
///
/// Each call to [`LineReader::read_line`] returns a fresh owned buffer, so
/// nothing read in one loop iteration survives into the next.
pub struct LineReader<R> {
    input: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Read characters up to and excluding the next newline.
    ///
    /// End-of-stream is not a distinct condition: a stream that ends
    /// mid-line yields the partial line, and a stream with no data left
    /// yields an empty string, which the caller dispatches as an ordinary
    /// no-op command. Only an I/O error is returned as a failure.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::with_capacity(LINE_BUFFER_CAPACITY);
        self.input.read_line(&mut line)?;
        if line.ends_with('\n') {
            line.pop();
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_short_line_round_trips() {
        let mut reader = LineReader::new(Cursor::new(b"ls -la\n".to_vec()));
        assert_eq!(reader.read_line().unwrap(), "ls -la");
    }

    #[test]
    fn test_line_longer_than_initial_capacity() {
        let long: String = "x".repeat(2000);
        let mut input = long.clone();
        input.push('\n');
        let mut reader = LineReader::new(Cursor::new(input.into_bytes()));
        assert_eq!(reader.read_line().unwrap(), long);
    }

    #[test]
    fn test_missing_final_newline() {
        let mut reader = LineReader::new(Cursor::new(b"exit".to_vec()));
        assert_eq!(reader.read_line().unwrap(), "exit");
    }

    #[test]
    fn test_end_of_stream_yields_empty_line() {
        let mut reader = LineReader::new(Cursor::new(Vec::new()));
        assert_eq!(reader.read_line().unwrap(), "");
        // Still an empty line on every subsequent call.
        assert_eq!(reader.read_line().unwrap(), "");
    }

    #[test]
    fn test_consecutive_lines() {
        let mut reader = LineReader::new(Cursor::new(b"one\ntwo\n".to_vec()));
        assert_eq!(reader.read_line().unwrap(), "one");
        assert_eq!(reader.read_line().unwrap(), "two");
    }
}
