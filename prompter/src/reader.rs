//! # Line Readers
//!
//! The engine never touches the terminal directly. It pulls one line at a
//! time from a [`PromptReader`], which keeps it testable and lets other
//! transports (scripted input, pipes, sockets) stand in for the terminal.
//!
//! Contract for implementors:
//! - every successful read returns one line **including** its trailing `\n`
//! - end of input is reported as [`ReadError::EndOfInput`], never as an
//!   empty `Ok`
//!
//! [`LineReader`] adapts any [`BufRead`] source. The interactive terminal
//! reader lives in [`crate::utils::Terminal`] (`std` feature).
use std::io::{self, BufRead, Cursor};

use thiserror::Error;

/// Failure to acquire a line from a [`PromptReader`].
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("end of input reached")]
    EndOfInput,
    #[error("couldn't read line: {0}")]
    Io(#[from] io::Error),
}

/// Source of raw prompt entries.
pub trait PromptReader {
    /// Blocking read of one visible line.
    fn read_clear_text(&mut self) -> Result<String, ReadError>;

    /// Blocking read of one line without echoing it.
    fn read_secure_text(&mut self) -> Result<String, ReadError>;
}

impl<R: PromptReader + ?Sized> PromptReader for &mut R {
    fn read_clear_text(&mut self) -> Result<String, ReadError> {
        (**self).read_clear_text()
    }

    fn read_secure_text(&mut self) -> Result<String, ReadError> {
        (**self).read_secure_text()
    }
}

impl<R: PromptReader + ?Sized> PromptReader for Box<R> {
    fn read_clear_text(&mut self) -> Result<String, ReadError> {
        (**self).read_clear_text()
    }

    fn read_secure_text(&mut self) -> Result<String, ReadError> {
        (**self).read_secure_text()
    }
}

/// Reads a single line from `source`, normalising the final unterminated line.
pub(crate) fn read_line_from<B: BufRead + ?Sized>(source: &mut B) -> Result<String, ReadError> {
    let mut line = String::new();
    if source.read_line(&mut line)? == 0 {
        return Err(ReadError::EndOfInput);
    }
    if !line.ends_with('\n') {
        line.push('\n');
    }
    Ok(line)
}

/// A [`PromptReader`] over any buffered source.
///
/// Secure reads cannot hide anything on a plain stream, so both methods read
/// clear text.
///
/// ```rust
/// use prompter::{LineReader, PromptReader};
///
/// let mut reader = LineReader::scripted("first\nsecond");
/// assert_eq!(reader.read_clear_text().unwrap(), "first\n");
/// assert_eq!(reader.read_secure_text().unwrap(), "second\n");
/// assert!(reader.read_clear_text().is_err());
/// ```
#[derive(Debug)]
pub struct LineReader<B> {
    source: B,
}

impl<B: BufRead> LineReader<B> {
    pub fn new(source: B) -> Self {
        Self { source }
    }

    pub fn into_inner(self) -> B {
        self.source
    }
}

impl LineReader<Cursor<Vec<u8>>> {
    /// An in-memory reader that replays `script` line by line.
    pub fn scripted(script: impl Into<String>) -> Self {
        Self::new(Cursor::new(script.into().into_bytes()))
    }

    /// Replaces whatever is left of the script.
    pub fn reset(&mut self, script: impl Into<String>) {
        self.source = Cursor::new(script.into().into_bytes());
    }
}

impl<B: BufRead> PromptReader for LineReader<B> {
    fn read_clear_text(&mut self) -> Result<String, ReadError> {
        read_line_from(&mut self.source)
    }

    fn read_secure_text(&mut self) -> Result<String, ReadError> {
        read_line_from(&mut self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl io::Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_line_reader_keeps_newline() {
        let mut reader = LineReader::scripted("test 1234\n\n");
        assert_eq!(reader.read_clear_text().unwrap(), "test 1234\n");
        assert_eq!(reader.read_clear_text().unwrap(), "\n");
    }

    #[test]
    fn test_line_reader_end_of_input() {
        let mut reader = LineReader::scripted("");
        assert!(matches!(
            reader.read_clear_text(),
            Err(ReadError::EndOfInput)
        ));
    }

    #[test]
    fn test_line_reader_reset_replaces_script() {
        let mut reader = LineReader::scripted("old\nunused\n");
        assert_eq!(reader.read_clear_text().unwrap(), "old\n");
        reader.reset("new\n");
        assert_eq!(reader.read_secure_text().unwrap(), "new\n");
        assert!(reader.read_secure_text().is_err());
    }

    #[test]
    fn test_line_reader_io_error() {
        let mut reader = LineReader::new(io::BufReader::new(BrokenPipe));
        let err = reader.read_clear_text().unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
        assert_eq!(format!("{}", err), "couldn't read line: pipe closed");
    }

    #[test]
    fn test_boxed_reader_is_a_reader() {
        fn read_all<R: PromptReader>(mut reader: R) -> (String, String, bool) {
            let first = reader.read_clear_text().unwrap();
            let second = reader.read_secure_text().unwrap();
            let ended = matches!(reader.read_clear_text(), Err(ReadError::EndOfInput));
            (first, second, ended)
        }
        let reader: Box<dyn PromptReader> = Box::new(LineReader::scripted("one\ntwo\n"));
        assert_eq!(
            read_all(reader),
            ("one\n".to_string(), "two\n".to_string(), true)
        );
    }

    #[test]
    fn test_into_inner_returns_unread_input() {
        let mut reader = LineReader::scripted("read\nleft\n");
        reader.read_clear_text().unwrap();
        let mut rest = String::new();
        io::Read::read_to_string(&mut reader.into_inner(), &mut rest).unwrap();
        assert_eq!(rest, "left\n");
    }

    #[test]
    fn test_mut_ref_is_a_reader() {
        fn read_one<R: PromptReader>(mut reader: R) -> String {
            reader.read_clear_text().unwrap()
        }
        let mut reader = LineReader::scripted("a\nb\n");
        assert_eq!(read_one(&mut reader), "a\n");
        assert_eq!(read_one(&mut reader), "b\n");
    }
}
