use alloc::string::String;

use super::{
    scanner::{Cursor, Text},
    Completion,
};

/// Walks a JSON number (`-? int frac? exp?`) and repairs dangling states
/// instead of rejecting them:
///
/// - a bare sign gets `0` (`-` becomes `-0`)
/// - a lone decimal point is dropped and replaced with `0.0`
///   (`-.` becomes `-0.0`)
/// - a trailing point gets a fraction digit (`1.` becomes `1.0`)
/// - a trailing exponent marker or exponent sign gets an exponent digit
///   (`1.23e` becomes `1.23e0`, `2e-` becomes `2e-0`)
///
/// A number that is valid as far as it goes returns `None`; the scalar
/// after it (`,`, `]`, `}`, whitespace) belongs to the enclosing container
/// and is never consumed here. Anything that fails to continue the grammar
/// ends the number at the repair point; stray tail scalars fall outside the
/// returned end index and are dropped by the caller.
pub(super) fn complete_number(text: &Text<'_>, at: Cursor) -> Option<Completion> {
    let mut i = at;
    if text.peek(i) == Some('-') {
        i = text.advance(i);
    }

    let mut int_digits = 0usize;
    while matches!(text.peek(i), Some('0'..='9')) {
        i = text.advance(i);
        int_digits += 1;
    }
    if int_digits == 0 {
        // Sign (or nothing) with no integer part: only EOF and a lone dot
        // are repairable; anything else was never a number.
        return match text.peek(i) {
            None => Some(Completion {
                suffix: String::from("0"),
                end_index: i,
            }),
            Some('.') => Some(Completion {
                suffix: String::from("0.0"),
                end_index: i,
            }),
            Some(_) => None,
        };
    }

    if text.peek(i) == Some('.') {
        i = text.advance(i);
        let mut frac_digits = 0usize;
        while matches!(text.peek(i), Some('0'..='9')) {
            i = text.advance(i);
            frac_digits += 1;
        }
        if frac_digits == 0 {
            return Some(Completion {
                suffix: String::from("0"),
                end_index: i,
            });
        }
    }

    if matches!(text.peek(i), Some('e' | 'E')) {
        i = text.advance(i);
        if matches!(text.peek(i), Some('+' | '-')) {
            i = text.advance(i);
        }
        let mut exp_digits = 0usize;
        while matches!(text.peek(i), Some('0'..='9')) {
            i = text.advance(i);
            exp_digits += 1;
        }
        if exp_digits == 0 {
            return Some(Completion {
                suffix: String::from("0"),
                end_index: i,
            });
        }
    }

    None
}
