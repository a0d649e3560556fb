use alloc::string::String;

use super::{
    scanner::{Cursor, Text},
    Completion,
};

/// Walks a quoted string from its opening `"`, honouring backslash-escape
/// pairing. Returns `None` when the closing quote is present, otherwise the
/// closing-quote suffix at end of input.
///
/// Two truncation shapes are closed but not made decodable: a dangling
/// backslash (the appended quote lands inside the escape) and a partial
/// `\uXXXX` escape. Both are left for the downstream decoder to reject.
pub(super) fn complete_string(text: &Text<'_>, at: Cursor) -> Option<Completion> {
    debug_assert_eq!(text.peek(at), Some('"'));
    let mut i = text.advance(at);
    let mut escape = false;
    while let Some(c) = text.peek(i) {
        if escape {
            escape = false;
        } else if c == '\\' {
            escape = true;
        } else if c == '"' {
            return None;
        }
        i = text.advance(i);
    }
    Some(Completion {
        suffix: String::from("\""),
        end_index: i,
    })
}
