//! The JSON completion engine.
//!
//! A single-pass, bounded-depth recursive walk over a prefix of JSON that
//! computes the minimal suffix of closing tokens needed to make the prefix
//! parse. The engine is pure and re-entrant: it borrows the input for the
//! duration of one call, keeps no state across calls, and can be invoked
//! repeatedly as a buffer grows.

mod literals;
mod locator;
mod numbers;
mod scanner;
mod strings;


use alloc::{borrow::Cow, string::String};

pub use scanner::Cursor;
use scanner::Text;

use crate::{error::CompleteError, options::CompleterOptions, NonConformingFloats};

/// The repair for a truncated document: append [`suffix`] to the input
/// prefix ending at [`end_index`].
///
/// Scalars past `end_index` (a trailing comma, an unparseable tail) are
/// intentionally not part of the repaired document.
///
/// [`suffix`]: Completion::suffix
/// [`end_index`]: Completion::end_index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Closing tokens and default values to append.
    pub suffix: String,
    /// Position the suffix is inserted at; everything before it is kept
    /// verbatim.
    pub end_index: Cursor,
}

impl Completion {
    /// Joins the input this completion was computed from with the suffix.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(self.end_index.0 + self.suffix.len());
        out.push_str(&input[..self.end_index.0]);
        out.push_str(&self.suffix);
        out
    }
}

/// Completes truncated JSON text.
///
/// The completer walks the input once, tracking what must be emitted to
/// close every open container, string, number or literal, and either
/// reports the input complete or returns the suffix to append. The input
/// is preserved verbatim up to the repair point; the engine only ever
/// appends.
///
/// # Examples
///
/// ```rust
/// use jsonmend::JsonCompleter;
///
/// let completer = JsonCompleter::default();
/// assert_eq!(completer.complete("[1, 2, 3").unwrap(), "[1, 2, 3]");
/// assert_eq!(completer.complete(r#"{"key":"#).unwrap(), r#"{"key":null}"#);
/// // Already-complete input comes back unchanged (and borrowed).
/// assert_eq!(completer.complete("[true]").unwrap(), "[true]");
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonCompleter {
    options: CompleterOptions,
}

impl JsonCompleter {
    /// Creates a completer with the given options.
    #[must_use]
    pub fn new(options: CompleterOptions) -> Self {
        Self { options }
    }

    /// The options this completer was built with.
    #[must_use]
    pub fn options(&self) -> &CompleterOptions {
        &self.options
    }

    /// Returns `input` unchanged if it already parses as a JSON value, or
    /// the repaired document otherwise.
    ///
    /// # Errors
    ///
    /// [`CompleteError::InvalidValue`] for a rejected non-conforming float,
    /// [`CompleteError::DepthLimitExceeded`] past the configured depth.
    pub fn complete<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, CompleteError> {
        match self.completion(input, Cursor::start())? {
            None => Ok(Cow::Borrowed(input)),
            Some(completion) => Ok(Cow::Owned(completion.apply(input))),
        }
    }

    /// Computes the repair for the value starting at `from`, or `None` if
    /// that value is already complete.
    ///
    /// # Errors
    ///
    /// Same conditions as [`complete`](Self::complete).
    pub fn completion(
        &self,
        input: &str,
        from: Cursor,
    ) -> Result<Option<Completion>, CompleteError> {
        let text = Text::new(input);
        self.complete_value(&text, from, 0)
    }

    /// Value dispatcher: skip whitespace, classify the next scalar, and
    /// delegate to the matching completer. Containers dispatch their
    /// children one level deeper.
    fn complete_value(
        &self,
        text: &Text<'_>,
        at: Cursor,
        depth: usize,
    ) -> Result<Option<Completion>, CompleteError> {
        if depth >= self.options.maximum_depth {
            return Err(CompleteError::DepthLimitExceeded(self.options.maximum_depth));
        }
        let at = text.skip_whitespace(at);
        let Some(c) = text.peek(at) else {
            return Ok(None);
        };
        match c {
            '{' => self.complete_object(text, at, depth + 1),
            '[' => self.complete_array(text, at, depth + 1),
            '"' => Ok(strings::complete_string(text, at)),
            '-' if text.peek(text.advance(at)) == Some('I') => {
                self.complete_non_conforming(text, at, "-Infinity")
            }
            '-' | '.' | '0'..='9' => Ok(numbers::complete_number(text, at)),
            't' => Ok(literals::complete_literal(text, at, "true")),
            'f' => Ok(literals::complete_literal(text, at, "false")),
            'n' => Ok(literals::complete_literal(text, at, "null")),
            'I' => self.complete_non_conforming(text, at, "Infinity"),
            'N' => self.complete_non_conforming(text, at, "NaN"),
            // Not a value start. The caller decides what an empty or
            // invalid position means; the engine has nothing to append.
            _ => Ok(None),
        }
    }

    fn complete_non_conforming(
        &self,
        text: &Text<'_>,
        at: Cursor,
        literal: &'static str,
    ) -> Result<Option<Completion>, CompleteError> {
        match self.options.non_conforming_floats {
            NonConformingFloats::Reject => Err(CompleteError::InvalidValue(literal)),
            NonConformingFloats::Accept { .. } => {
                Ok(literals::complete_literal(text, at, literal))
            }
        }
    }

    /// Array completer: element / comma expectations over a cursor inside
    /// `[ … ]`.
    ///
    /// `last_valid` is the position immediately after the last successfully
    /// consumed element (or after `[` and leading whitespace), i.e. the
    /// furthest point where inserting `]` yields well-formed JSON. Closing
    /// there drops a trailing comma or an unparseable tail.
    fn complete_array(
        &self,
        text: &Text<'_>,
        at: Cursor,
        depth: usize,
    ) -> Result<Option<Completion>, CompleteError> {
        debug_assert_eq!(text.peek(at), Some('['));
        let mut i = text.skip_whitespace(text.advance(at));
        let mut last_valid = i;
        loop {
            // Expect element or close.
            match text.peek(i) {
                None => return Ok(Some(close(']', last_valid))),
                Some(']') => return Ok(None),
                Some(_) => {}
            }
            match self.complete_value(text, i, depth)? {
                Some(mut nested) => {
                    nested.suffix.push(']');
                    return Ok(Some(nested));
                }
                None => {
                    let after = locator::end_of_value(text, i);
                    if after == i {
                        // Requires an element but found something that is
                        // not one (e.g. `[1,,`): best-effort close before it.
                        return Ok(Some(close(']', last_valid)));
                    }
                    i = after;
                    last_valid = i;
                }
            }
            // Expect comma or close.
            i = text.skip_whitespace(i);
            match text.peek(i) {
                None => return Ok(Some(close(']', last_valid))),
                Some(']') => return Ok(None),
                Some(',') => i = text.skip_whitespace(text.advance(i)),
                Some(_) => return Ok(Some(close(']', last_valid))),
            }
        }
    }

    /// Object completer: the array machine plus key / colon / value
    /// sub-phases per member.
    ///
    /// Truncation inside a member synthesises the rest of it: a truncated
    /// key is closed and given `: null`, a missing colon or value becomes
    /// `: null` / `null`, and the object is closed. A trailing comma at end
    /// of input is dropped, like the array's.
    fn complete_object(
        &self,
        text: &Text<'_>,
        at: Cursor,
        depth: usize,
    ) -> Result<Option<Completion>, CompleteError> {
        debug_assert_eq!(text.peek(at), Some('{'));
        let mut i = text.skip_whitespace(text.advance(at));
        let mut last_valid = i;
        loop {
            // Expect key or close.
            match text.peek(i) {
                None => return Ok(Some(close('}', last_valid))),
                Some('}') => return Ok(None),
                Some('"') => {}
                Some(_) => return Ok(Some(close('}', last_valid))),
            }
            if let Some(mut truncated_key) = strings::complete_string(text, i) {
                truncated_key.suffix.push_str(": null}");
                return Ok(Some(truncated_key));
            }
            let after_key = locator::end_of_string(text, i);
            if after_key == i {
                return Ok(Some(close('}', last_valid)));
            }
            i = after_key;

            // Colon.
            i = text.skip_whitespace(i);
            match text.peek(i) {
                Some(':') => i = text.advance(i),
                _ => {
                    return Ok(Some(Completion {
                        suffix: String::from(": null}"),
                        end_index: i,
                    }))
                }
            }

            // Value.
            i = text.skip_whitespace(i);
            if text.peek(i).is_none() {
                return Ok(Some(Completion {
                    suffix: String::from("null}"),
                    end_index: i,
                }));
            }
            match self.complete_value(text, i, depth)? {
                Some(mut nested) => {
                    nested.suffix.push('}');
                    return Ok(Some(nested));
                }
                None => {
                    let after = locator::end_of_value(text, i);
                    if after == i {
                        // Unparseable scalar where the value should be:
                        // treat like end of input here so the member still
                        // gets a value and the document stays well-formed.
                        return Ok(Some(Completion {
                            suffix: String::from("null}"),
                            end_index: i,
                        }));
                    }
                    i = after;
                    last_valid = i;
                }
            }

            // Expect comma or close.
            i = text.skip_whitespace(i);
            match text.peek(i) {
                None => return Ok(Some(close('}', last_valid))),
                Some('}') => return Ok(None),
                Some(',') => i = text.skip_whitespace(text.advance(i)),
                Some(_) => return Ok(Some(close('}', last_valid))),
            }
        }
    }
}

fn close(closer: char, at: Cursor) -> Completion {
    let mut suffix = String::with_capacity(1);
    suffix.push(closer);
    Completion {
        suffix,
        end_index: at,
    }
}
