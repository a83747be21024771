//! Numbered choice prompts for the interactive browser

use colored::Colorize;
use std::io::{BufRead, Write};

/// Placeholder option meaning "not yet chosen"
pub const PLACEHOLDER: &str = "-- choose --";

/// Ask the user to pick one of `options`.
///
/// Returns `Ok(None)` when the placeholder (`0` or an empty line) is chosen
/// or input ends. Invalid answers re-prompt.
pub fn choose<R, W>(
    input: &mut R,
    out: &mut W,
    label: &str,
    options: &[String],
) -> std::io::Result<Option<usize>>
where
    R: BufRead,
    W: Write,
{
    writeln!(out)?;
    writeln!(out, "{}", label.bold())?;
    writeln!(out, "   {:>3}) {}", 0, PLACEHOLDER.bright_black())?;
    for (idx, option) in options.iter().enumerate() {
        writeln!(out, "   {:>3}) {}", idx + 1, option)?;
    }

    loop {
        write!(out, "{} ", ">".cyan())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match parse_choice(line.trim(), options.len()) {
            Some(choice) => return Ok(choice),
            None => writeln!(
                out,
                "{}",
                format!("Enter a number between 0 and {}", options.len()).yellow()
            )?,
        }
    }
}

/// `Some(None)` for the placeholder, `Some(Some(i))` for option `i`, `None` if invalid
fn parse_choice(answer: &str, option_count: usize) -> Option<Option<usize>> {
    if answer.is_empty() {
        return Some(None);
    }
    match answer.parse::<usize>() {
        Ok(0) => Some(None),
        Ok(n) if n <= option_count => Some(Some(n - 1)),
        _ => None,
    }
}
