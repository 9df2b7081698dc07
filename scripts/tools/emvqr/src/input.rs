//! QR text acquisition from the command line or stdin

use std::io::BufRead;

use anyhow::{bail, Context, Result};

/// Argument value that means "read the payload from stdin"
pub const STDIN_MARKER: &str = "-";

/// Payload text for `arg`, reading one line from `reader` for `-`
///
/// Only the line terminator is stripped; any other whitespace is part of the
/// payload and will be rejected or checksummed as such.
pub fn resolve_qr(arg: &str, mut reader: impl BufRead) -> Result<String> {
    if arg != STDIN_MARKER {
        return Ok(arg.to_string());
    }

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("Failed to read QR payload from stdin")?;
    if read == 0 {
        bail!("No QR payload on stdin");
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
