use thiserror::Error;

/// Errors raised by the completion engine itself.
///
/// Malformed-but-closable input is not an error: the engine closes what it
/// can and leaves rejection to the downstream decoder. Only inputs the
/// configured policy forbids outright land here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompleteError {
    /// A non-conforming numeric literal started a value while the policy is
    /// [`NonConformingFloats::Reject`].
    ///
    /// [`NonConformingFloats::Reject`]: crate::NonConformingFloats::Reject
    #[error("invalid value: '{0}'")]
    InvalidValue(&'static str),

    /// Completing the input would nest containers beyond the configured
    /// [`maximum_depth`].
    ///
    /// [`maximum_depth`]: crate::CompleterOptions::maximum_depth
    #[error("maximum nesting depth exceeded ({0})")]
    DepthLimitExceeded(usize),
}

/// Errors raised by the decode façade ([`JsonCompleter::decode`]).
///
/// [`JsonCompleter::decode`]: crate::JsonCompleter::decode
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The completion engine refused the input.
    #[error(transparent)]
    Complete(#[from] CompleteError),

    /// The raw bytes are not valid UTF-8, so completion cannot run.
    #[error("input bytes are not valid UTF-8")]
    InvalidUtf8Data,

    /// Completion succeeded but the structured decode of the completed text
    /// still failed; carries the decoder's error verbatim.
    #[error("decoding failed after completion: {0}")]
    DecodingFailed(serde_json::Error),
}

impl DecodeError {
    /// Returns `true` when the structured decode failed only because the
    /// payload ended before all required data arrived, e.g. a missing struct
    /// field or a sequence shorter than the target type requires.
    ///
    /// The streaming adaptor uses this at end-of-stream to tell legitimate
    /// incompleteness (terminate silently) from genuine decode failures.
    #[must_use]
    pub fn is_incomplete_data(&self) -> bool {
        let Self::DecodingFailed(err) = self else {
            return false;
        };
        if !err.is_data() {
            return false;
        }
        // serde_json does not expose the cause structurally; the message
        // prefix is stable for serde's derive-generated errors.
        let message = alloc::string::ToString::to_string(err);
        message.starts_with("missing field") || message.starts_with("invalid length")
    }
}

/// Errors yielded by [`PartialValues`], generic over the byte source's
/// error type.
///
/// [`PartialValues`]: crate::PartialValues
#[derive(Error, Debug)]
pub enum StreamError<E> {
    /// The underlying byte source failed; fatal for the iterator.
    #[error("byte source failed: {0}")]
    Source(E),

    /// The end-of-stream decode failed before any value was yielded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
