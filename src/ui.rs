//! User interaction helpers for pwsmith.
//!
//! This module centralizes terminal prompting. Helpers take the input and
//! output streams explicitly so sessions can run against in-memory buffers.
//! No generation or clipboard logic should live here.

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one line, without the trailing newline.
///
/// Returns `None` at end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask a yes/no question. Only `y` or `yes` count as yes.
pub fn prompt_yes<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<bool> {
    let answer = prompt_line(input, output, &format!("{} (y/n): ", prompt))?;
    Ok(answer.is_some_and(|s| matches!(s.trim().to_lowercase().as_str(), "y" | "yes")))
}
