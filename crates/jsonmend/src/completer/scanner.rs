//! Scanner primitives: a read-only text view and the scalar cursor.
//!
//! All walking in the engine happens through [`Text`] so that byte offsets
//! stay private to this module tree. A [`Cursor`] always sits on a scalar
//! boundary; the only ways to move one are [`Text::advance`] and
//! [`Text::skip_whitespace`].

/// An opaque position between Unicode scalars of the input text.
///
/// Cursors are produced by [`JsonCompleter::completion`] (as the end index
/// of a repair) and by [`Cursor::start`]; they order and compare like the
/// positions they denote. A cursor is only meaningful for the exact input
/// it was derived from.
///
/// [`JsonCompleter::completion`]: crate::JsonCompleter::completion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor(pub(crate) usize);

impl Cursor {
    /// The position before the first scalar of any input.
    #[must_use]
    pub const fn start() -> Self {
        Self(0)
    }
}

/// Read-only view over the input text for the duration of one completion
/// call. Borrows only; no state survives the call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Text<'a> {
    raw: &'a str,
}

impl<'a> Text<'a> {
    pub(crate) fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The scalar at `at`, or `None` at (or past) end of input.
    pub(crate) fn peek(&self, at: Cursor) -> Option<char> {
        self.raw.get(at.0..)?.chars().next()
    }

    /// The cursor one scalar past `at`. Saturates at end of input.
    pub(crate) fn advance(&self, at: Cursor) -> Cursor {
        match self.peek(at) {
            Some(c) => Cursor(at.0 + c.len_utf8()),
            None => Cursor(self.raw.len()),
        }
    }

    /// Skips the four JSON whitespace scalars: space, tab, line feed,
    /// carriage return.
    pub(crate) fn skip_whitespace(&self, at: Cursor) -> Cursor {
        let mut at = at;
        while matches!(self.peek(at), Some(' ' | '\t' | '\n' | '\r')) {
            at = self.advance(at);
        }
        at
    }
}
