//! Complete truncated JSON and decode partial values from growing byte
//! streams.
//!
//! JSON produced by streaming sources (language-model APIs, server-sent
//! events, chunked HTTP bodies) is routinely cut off at an arbitrary byte
//! boundary. [`JsonCompleter`] reconstructs a syntactically valid document
//! from such a prefix by synthesising the minimal suffix of closing tokens
//! (quotes, brackets, braces, digits, placeholder `null`s) needed to parse:
//!
//! ```rust
//! use jsonmend::JsonCompleter;
//!
//! let completer = JsonCompleter::default();
//! let fixed = completer.complete(r#"{"name": "Alice", "tags": ["swift", "json"#).unwrap();
//! assert_eq!(fixed, r#"{"name": "Alice", "tags": ["swift", "json"]}"#);
//! ```
//!
//! On top of the completion engine sit two layers:
//!
//! - [`JsonCompleter::decode`] feeds the (completed, if necessary) text to
//!   `serde_json` and reports whether repair was needed.
//! - [`PartialValues`] drives the decode step over a byte-at-a-time source,
//!   yielding each *new* decoded value as the buffer grows.
//!
//! The engine appends, it never edits: the returned text always starts with
//! a prefix of the input, byte for byte. It is also not a validator:
//! hopelessly malformed input is closed off on a best-effort basis and left
//! for the downstream decoder to reject.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod completer;
mod decode;
mod error;
mod options;
mod stream;

pub use completer::{Completion, Cursor, JsonCompleter};
pub use decode::Decoded;
pub use error::{CompleteError, DecodeError, StreamError};
pub use options::{CompleterOptions, NonConformingFloats};
pub use stream::{PartialValues, StreamedValue};

#[cfg(test)]
mod tests;
