//! End-of-value locator: given a cursor known to start a complete value,
//! find the cursor immediately after it.
//!
//! Callers only hand this positions the completers have already vetted, so
//! the scans are deliberately permissive: the numeric scan accepts runs
//! like `1-2`, and literal advances are by fixed width without re-matching.
//! A position the locator cannot classify is returned unchanged; callers
//! treat "no advance" as a malformed tail and close at their last valid
//! index.

use super::scanner::{Cursor, Text};

pub(super) fn end_of_value(text: &Text<'_>, at: Cursor) -> Cursor {
    match text.peek(at) {
        Some('"') => end_of_string(text, at),
        Some('{' | '[') => end_of_container(text, at),
        Some('t' | 'n') => advance_by(text, at, 4),
        Some('f') => advance_by(text, at, 5),
        Some('I') => advance_by(text, at, "Infinity".len()),
        Some('N') => advance_by(text, at, "NaN".len()),
        Some('-') if text.peek(text.advance(at)) == Some('I') => {
            advance_by(text, at, "-Infinity".len())
        }
        Some('-' | '0'..='9' | '.') => end_of_number(text, at),
        _ => at,
    }
}

/// Walks past the closing quote of a complete string, tracking the same
/// single-bit escape state as the string completer.
pub(super) fn end_of_string(text: &Text<'_>, at: Cursor) -> Cursor {
    let mut i = text.advance(at);
    let mut escape = false;
    while let Some(c) = text.peek(i) {
        i = text.advance(i);
        if escape {
            escape = false;
        } else if c == '\\' {
            escape = true;
        } else if c == '"' {
            return i;
        }
    }
    i
}

/// Depth-counter walk over a complete container. Open and close scalars
/// count only outside strings; strings are skipped with the escape bit.
fn end_of_container(text: &Text<'_>, at: Cursor) -> Cursor {
    let mut i = at;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape = false;
    while let Some(c) = text.peek(i) {
        i = text.advance(i);
        if in_string {
            if escape {
                escape = false;
            } else if c == '\\' {
                escape = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i;
                }
            }
            _ => {}
        }
    }
    i
}

fn end_of_number(text: &Text<'_>, at: Cursor) -> Cursor {
    let mut i = at;
    while matches!(text.peek(i), Some('0'..='9' | '.' | '-' | '+' | 'e' | 'E')) {
        i = text.advance(i);
    }
    i
}

fn advance_by(text: &Text<'_>, at: Cursor, scalars: usize) -> Cursor {
    let mut i = at;
    for _ in 0..scalars {
        i = text.advance(i);
    }
    i
}
