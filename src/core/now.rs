use chrono::{DateTime, Utc};
use std::io::Write;

use crate::error::Result;
use crate::utils::io;

/// `YYYYMMDDhhmmss`, fixed width, no separators.
pub const COMPACT_FORMAT: &str = "%Y%m%d%H%M%S";

/// Format an instant as a compact UTC timestamp, dropping sub-second precision.
pub fn compact_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(COMPACT_FORMAT).to_string()
}

/// Capture the current UTC time once and write it as a single line.
pub fn write_now<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    let stamp = compact_timestamp(Utc::now());
    io::write_line(out, stamp.as_bytes())?;
    io::flush(out)
}
