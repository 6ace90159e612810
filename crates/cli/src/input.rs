//! Prompt-and-parse helpers for console input.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Prompt until the user types something that parses as `T`.
///
/// Re-prompts on parse failure. Returns `Ok(None)` when the input stream
/// ends, which the caller should treat as the end of the session.
pub fn prompt_parse<T, R, W>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Enter a number.")?,
        }
    }
}
