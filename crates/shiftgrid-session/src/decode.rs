//! Length-limited line decoding.

use std::io::{self, BufRead, Read as _};

/// Maximum number of characters kept from a command line.
pub const MAX_LINE_LENGTH: usize = 30;

// Enough bytes for `MAX_LINE_LENGTH + 1` characters of any UTF-8 width.
const MAX_CAPTURED_BYTES: u64 = (MAX_LINE_LENGTH as u64 + 1) * 4;

/// One command line as read from an input stream.
///
/// At most [`MAX_LINE_LENGTH`] characters are kept. Longer lines are
/// truncated and flagged as overflowed; what happens to an overflowed line is
/// up to the caller (an interactive session reports it as an invalid command,
/// a configuration replay treats it as fatal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine {
    text: String,
    overflowed: bool,
}

impl DecodedLine {
    /// Builds a decoded line from the content of one line, without terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use shiftgrid_session::DecodedLine;
    ///
    /// let line = DecodedLine::new("left 8");
    /// assert_eq!(line.text(), "left 8");
    /// assert!(!line.is_overflowed());
    ///
    /// let line = DecodedLine::new(&"x".repeat(31));
    /// assert_eq!(line.text().len(), 30);
    /// assert!(line.is_overflowed());
    /// ```
    #[must_use]
    pub fn new(line: &str) -> Self {
        match line.char_indices().nth(MAX_LINE_LENGTH) {
            Some((end, _)) => Self {
                text: line[..end].to_owned(),
                overflowed: true,
            },
            None => Self {
                text: line.to_owned(),
                overflowed: false,
            },
        }
    }

    /// Returns the captured text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the line was longer than [`MAX_LINE_LENGTH`].
    #[must_use]
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }
}

impl From<&str> for DecodedLine {
    fn from(line: &str) -> Self {
        Self::new(line)
    }
}

/// Reads the next line from `reader`.
///
/// Returns `Ok(None)` once the input is exhausted. Only a bounded prefix of
/// an over-long line is buffered; the rest is skipped. The `\n` or `\r\n`
/// terminator is stripped; a last line without a terminator is still
/// returned. Invalid UTF-8 is replaced rather than rejected, so it surfaces
/// as an unrecognized command.
///
/// # Errors
///
/// Returns any I/O error raised by `reader`.
///
/// # Examples
///
/// ```
/// use shiftgrid_session::decode_line;
///
/// let mut input = "up 3\nquit".as_bytes();
/// assert_eq!(decode_line(&mut input).unwrap().unwrap().text(), "up 3");
/// assert_eq!(decode_line(&mut input).unwrap().unwrap().text(), "quit");
/// assert_eq!(decode_line(&mut input).unwrap(), None);
/// ```
pub fn decode_line<R>(reader: &mut R) -> io::Result<Option<DecodedLine>>
where
    R: BufRead + ?Sized,
{
    let mut raw = Vec::new();
    let read = (&mut *reader)
        .take(MAX_CAPTURED_BYTES)
        .read_until(b'\n', &mut raw)?;
    if read == 0 {
        return Ok(None);
    }
    if raw.last() == Some(&b'\n') {
        raw.pop();
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
    } else {
        // Over-long line: the captured prefix already overflows.
        reader.skip_until(b'\n')?;
    }
    Ok(Some(DecodedLine::new(&String::from_utf8_lossy(&raw))))
}
