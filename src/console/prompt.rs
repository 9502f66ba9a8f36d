//! Reply parsing for menu prompts
//!
//! Replies are compared after trimming surrounding whitespace; yes/no is
//! case-insensitive, menu choices are matched exactly.

use std::io::{self, BufRead, Write};

use super::actions::{find_action, MenuAction};

/// Accepted affirmative replies
pub const YES_REPLIES: &[&str] = &["y", "yes"];

/// Accepted negative replies
pub const NO_REPLIES: &[&str] = &["n", "no"];

/// Parse a menu choice
pub fn parse_choice(line: &str) -> Option<MenuAction> {
    find_action(line.trim())
}

/// Parse a yes/no reply
pub fn parse_yes_no(line: &str) -> Option<bool> {
    let reply = line.trim().to_lowercase();
    if YES_REPLIES.contains(&reply.as_str()) {
        Some(true)
    } else if NO_REPLIES.contains(&reply.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Print `prompt` and read one line without its line terminator.
///
/// Returns `None` at end of input.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
