//! Line-oriented prompt helpers shared by the login gate and the menu.

use std::io::{self, BufRead, Write};

/// Writes `label`, flushes, and reads one trimmed line.
///
/// Returns `Ok(None)` when input is exhausted.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
