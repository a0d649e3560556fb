//! Decode façade: try the raw bytes, and only on failure complete and
//! retry.

use serde::de::DeserializeOwned;

use crate::{completer::JsonCompleter, error::DecodeError};

/// A decoded value plus whether the raw input was already complete.
///
/// `was_complete` is `true` when the input decoded without any completion,
/// `false` when a repair suffix was required first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded<T> {
    pub value: T,
    pub was_complete: bool,
}

impl JsonCompleter {
    /// Decodes `bytes` into `T`, completing the text first if the raw
    /// bytes do not parse.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::InvalidUtf8Data`] if the bytes need completion but
    ///   are not UTF-8.
    /// - [`DecodeError::Complete`] if the completion engine refuses the
    ///   input (rejected non-conforming float, depth limit).
    /// - [`DecodeError::DecodingFailed`] if the completed text still does
    ///   not decode into `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonmend::JsonCompleter;
    ///
    /// let completer = JsonCompleter::default();
    /// let decoded = completer.decode::<Vec<u32>>(b"[1, 2").unwrap();
    /// assert_eq!(decoded.value, vec![1, 2]);
    /// assert!(!decoded.was_complete);
    /// ```
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Decoded<T>, DecodeError> {
        if let Ok(value) = serde_json::from_slice(bytes) {
            return Ok(Decoded {
                value,
                was_complete: true,
            });
        }
        let text = core::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8Data)?;
        let completed = self.complete(text)?;
        match serde_json::from_str(&completed) {
            Ok(value) => Ok(Decoded {
                value,
                was_complete: false,
            }),
            Err(err) => Err(DecodeError::DecodingFailed(err)),
        }
    }

    /// [`decode`](Self::decode) for text input.
    ///
    /// # Errors
    ///
    /// As [`decode`](Self::decode), minus the UTF-8 failure.
    pub fn decode_str<T: DeserializeOwned>(&self, text: &str) -> Result<Decoded<T>, DecodeError> {
        self.decode(text.as_bytes())
    }
}
