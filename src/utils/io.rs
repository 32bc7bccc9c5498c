//! Standard-stream primitives with consistent error handling.

use crate::error::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write one newline-terminated line in a single `write_all`.
///
/// Stdout is line-buffered, so each call reaches the reader immediately.
pub fn write_line<W: Write + ?Sized>(out: &mut W, line: &[u8]) -> Result<()> {
    let mut buf = Vec::with_capacity(line.len() + 1);
    buf.extend_from_slice(line);
    buf.push(b'\n');
    out.write_all(&buf).map_err(Error::output_write)
}

/// Write raw bytes with no line terminator.
pub fn write_bytes<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> Result<()> {
    out.write_all(bytes).map_err(Error::output_write)
}

/// Flush `out`, mapping failures the same way as writes.
pub fn flush<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    out.flush().map_err(Error::output_write)
}

/// Raw bytes of a path as the OS encodes them.
pub fn path_bytes(path: &Path) -> &[u8] {
    path.as_os_str().as_encoded_bytes()
}

/// Build a path from raw input bytes.
#[cfg(unix)]
pub fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
pub fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Strip surrounding whitespace from one input line.
///
/// Valid UTF-8 is trimmed with Unicode whitespace rules; anything else falls
/// back to ASCII whitespace so the remaining bytes survive untouched.
pub fn trim_line(line: &[u8]) -> &[u8] {
    match std::str::from_utf8(line) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => line.trim_ascii(),
    }
}
