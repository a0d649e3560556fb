use alloc::string::String;

use super::{
    scanner::{Cursor, Text},
    Completion,
};

/// Matches `input` against an expected literal in lockstep from `at`.
///
/// - Input exhausted on a proper prefix: the missing tail is the suffix.
/// - Full match: `None`.
/// - Mismatch: also `None`; "not this literal" is not the completer's
///   problem; the downstream decoder surfaces the error.
///
/// Literals are ASCII, so byte indexing into `literal` is safe.
pub(super) fn complete_literal(
    text: &Text<'_>,
    at: Cursor,
    literal: &'static str,
) -> Option<Completion> {
    let mut i = at;
    let mut matched = 0usize;
    for expected in literal.chars() {
        match text.peek(i) {
            None => {
                return Some(Completion {
                    suffix: String::from(&literal[matched..]),
                    end_index: i,
                })
            }
            Some(c) if c == expected => {
                i = text.advance(i);
                matched += c.len_utf8();
            }
            Some(_) => return None,
        }
    }
    None
}
