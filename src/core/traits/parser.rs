use std::borrow::Cow;
use std::fmt::Write;
use std::io::BufRead;

use crate::core::errors::Result;
use crate::core::models::env_var::EnvVar;

/// Port for turning env-file text into variables.
///
/// Only `DotenvParser` exists today; the trait keeps the line format
/// swappable without touching the reader or the diff.
pub trait EnvParser {
    /// Parse one line. `None` for comments, blank or malformed lines.
    fn parse_line(&self, line: &str) -> Option<EnvVar>;

    /// Read every line of `reader` in order, skipping lines that do not parse.
    ///
    /// Only I/O failures of the stream are errors. A trailing `\r` is
    /// dropped from each line; lines that are not valid UTF-8 go through
    /// [`decode_line`].
    fn read(&self, reader: &mut dyn BufRead) -> Result<Vec<EnvVar>> {
        let mut vars = Vec::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let mut line = buf.as_slice();
            if let Some(rest) = line.strip_suffix(b"\n") {
                line = rest;
            }
            if let Some(rest) = line.strip_suffix(b"\r") {
                line = rest;
            }
            if let Some(var) = self.parse_line(&decode_line(line)) {
                vars.push(var);
            }
        }

        Ok(vars)
    }
}

/// Decode one raw line.
///
/// Valid UTF-8 is returned unchanged. Otherwise valid runs are kept,
/// backslashes are doubled and each invalid byte becomes `\xNN`, so two
/// distinct invalid lines never decode to the same text.
pub fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(bytes.len() + 8);
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            if c == '\\' {
                out.push_str("\\\\");
            } else {
                out.push(c);
            }
        }
        for b in chunk.invalid() {
            let _ = write!(out, "\\x{b:02x}");
        }
    }
    Cow::Owned(out)
}
