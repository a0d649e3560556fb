//! Streaming adaptor: decode partial values from a byte-at-a-time source.

use alloc::vec::Vec;
use core::mem;

use serde::de::DeserializeOwned;

use crate::{
    completer::JsonCompleter,
    error::StreamError,
};

/// A value yielded by [`PartialValues`].
///
/// `is_final` is `true` only on the terminal yield of a stream that ended
/// while data was still buffered, i.e. the last word on that buffer.
/// Intermediate snapshots of a growing value carry `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamedValue<T> {
    pub value: T,
    pub is_final: bool,
}

/// Iterator that pulls bytes from a fallible source, repeatedly decodes the
/// growing buffer through [`JsonCompleter::decode`], and yields each *new*
/// decoded value.
///
/// Equal consecutive decodes are suppressed, so consumers only see change.
/// When the buffered text parses as a complete document on its own the
/// buffer is cleared, which lets multiple concatenated top-level documents
/// stream through one adaptor. Mid-stream decode failures just mean "read
/// more bytes" and are swallowed; see the error rules on
/// [`next`](Iterator::next).
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
///
/// use jsonmend::{JsonCompleter, PartialValues};
/// use serde_json::{json, Value};
///
/// let source = br#"[1, 2]"#.iter().map(|b| Ok::<u8, Infallible>(*b));
/// let values: Vec<Value> = PartialValues::<Value, _>::new(source, JsonCompleter::default())
///     .map(|r| r.unwrap().value)
///     .collect();
/// assert_eq!(values, vec![json!([]), json!([1]), json!([1, 2])]);
/// ```
#[derive(Debug)]
pub struct PartialValues<T, I> {
    source: I,
    completer: JsonCompleter,
    buffer: Vec<u8>,
    last: Option<T>,
    yielded_any: bool,
    end_of_input: bool,
}

impl<T, I> PartialValues<T, I> {
    /// Adapts `source` with an empty buffer.
    #[must_use]
    pub fn new(source: I, completer: JsonCompleter) -> Self {
        Self::with_buffer_capacity(source, completer, 0)
    }

    /// Adapts `source`, preallocating the growing buffer for callers that
    /// know roughly how large a document to expect.
    #[must_use]
    pub fn with_buffer_capacity(source: I, completer: JsonCompleter, capacity: usize) -> Self {
        Self {
            source,
            completer,
            buffer: Vec::with_capacity(capacity),
            last: None,
            yielded_any: false,
            end_of_input: false,
        }
    }
}

impl<T, I, E> Iterator for PartialValues<T, I>
where
    T: DeserializeOwned + PartialEq + Clone,
    I: Iterator<Item = Result<u8, E>>,
{
    type Item = Result<StreamedValue<T>, StreamError<E>>;

    /// Drives the buffer one step: decode what is buffered, yield if the
    /// value changed, otherwise pull one more byte and try again.
    ///
    /// Error rules: a source error clears the buffer and is fatal. At end
    /// of source a non-empty buffer gets one last decode, yielded with
    /// `is_final = true`; a failure there terminates silently when it is
    /// ordinary incompleteness (missing fields) or when at least one value
    /// was already yielded, and is raised otherwise; a consumer that never
    /// saw a value deserves to know why.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.end_of_input {
                if self.buffer.is_empty() {
                    return None;
                }
                let bytes = mem::take(&mut self.buffer);
                return match self.completer.decode::<T>(&bytes) {
                    Ok(decoded) => {
                        self.yielded_any = true;
                        Some(Ok(StreamedValue {
                            value: decoded.value,
                            is_final: true,
                        }))
                    }
                    Err(err) if err.is_incomplete_data() => None,
                    Err(_) if self.yielded_any => None,
                    Err(err) => Some(Err(err.into())),
                };
            }

            if !self.buffer.is_empty() {
                if let Ok(decoded) = self.completer.decode::<T>(&self.buffer) {
                    if decoded.was_complete {
                        self.buffer.clear();
                    }
                    if self.last.as_ref() != Some(&decoded.value) {
                        self.last = Some(decoded.value.clone());
                        self.yielded_any = true;
                        return Some(Ok(StreamedValue {
                            value: decoded.value,
                            is_final: false,
                        }));
                    }
                }
            }

            match self.source.next() {
                Some(Ok(byte)) => self.buffer.push(byte),
                Some(Err(err)) => {
                    self.buffer.clear();
                    self.end_of_input = true;
                    return Some(Err(StreamError::Source(err)));
                }
                None => self.end_of_input = true,
            }
        }
    }
}
