use alloc::string::String;

/// Policy for the non-conforming numeric literals `Infinity`, `-Infinity`
/// and `NaN`.
///
/// Standard JSON has no spelling for these values, but LLM output and
/// JavaScript-adjacent producers emit them anyway. The completer either
/// rejects them outright or treats them as ordinary literals that can be
/// truncated and completed like `true` or `null`.
///
/// The spellings recognised in the *input* are fixed: `Infinity`,
/// `-Infinity`, `NaN`. The strings carried by [`Accept`] are the spellings
/// the downstream structured decoder has been configured to accept, kept
/// here so one options value can describe both halves of the pipeline.
///
/// [`Accept`]: NonConformingFloats::Accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonConformingFloats {
    /// Raise [`CompleteError::InvalidValue`] when such a literal starts a
    /// value.
    ///
    /// [`CompleteError::InvalidValue`]: crate::CompleteError::InvalidValue
    Reject,
    /// Recognise the literals as values, completing truncated spellings.
    Accept {
        /// Decoder-side spelling for positive infinity.
        positive_infinity: String,
        /// Decoder-side spelling for negative infinity.
        negative_infinity: String,
        /// Decoder-side spelling for not-a-number.
        nan: String,
    },
}

impl NonConformingFloats {
    /// `Accept` with the canonical spellings, matching what the completer
    /// recognises in the input.
    #[must_use]
    pub fn accept() -> Self {
        Self::Accept {
            positive_infinity: String::from("Infinity"),
            negative_infinity: String::from("-Infinity"),
            nan: String::from("NaN"),
        }
    }
}

impl Default for NonConformingFloats {
    fn default() -> Self {
        Self::Reject
    }
}

/// Configuration for [`JsonCompleter`].
///
/// Options are captured by value at construction and are immutable for the
/// lifetime of the completer; there is no process-wide configuration.
///
/// # Examples
///
/// ```rust
/// use jsonmend::{CompleterOptions, JsonCompleter, NonConformingFloats};
///
/// let completer = JsonCompleter::new(CompleterOptions {
///     non_conforming_floats: NonConformingFloats::accept(),
///     ..Default::default()
/// });
/// assert_eq!(completer.complete("[Infin").unwrap(), "[Infinity]");
/// ```
///
/// [`JsonCompleter`]: crate::JsonCompleter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleterOptions {
    /// How to treat `Infinity`, `-Infinity` and `NaN` in value position.
    ///
    /// # Default
    ///
    /// [`NonConformingFloats::Reject`]
    pub non_conforming_floats: NonConformingFloats,

    /// Hard cap on nested containers the completer will descend into.
    ///
    /// Dispatching a value at this depth raises
    /// [`CompleteError::DepthLimitExceeded`] instead of recursing, bounding
    /// stack use on adversarial input such as a long run of `[`. Must be
    /// positive; a value of `0` rejects every input.
    ///
    /// # Default
    ///
    /// `64`
    ///
    /// [`CompleteError::DepthLimitExceeded`]: crate::CompleteError::DepthLimitExceeded
    pub maximum_depth: usize,
}

impl Default for CompleterOptions {
    fn default() -> Self {
        Self {
            non_conforming_floats: NonConformingFloats::Reject,
            maximum_depth: 64,
        }
    }
}
