use alloc::string::String;

use quickcheck::{Arbitrary, Gen};
use serde_json::{Map, Value};

use crate::JsonCompleter;

/// Every scalar-boundary prefix of `s`, from empty to the full text.
pub fn char_prefixes(s: &str) -> impl Iterator<Item = &str> {
    s.char_indices()
        .map(move |(i, _)| &s[..i])
        .chain(core::iter::once(s))
}

/// Completes `input` with default options, panicking on engine errors.
pub fn complete(input: &str) -> String {
    JsonCompleter::default()
        .complete(input)
        .unwrap()
        .into_owned()
}

/// Builds an arbitrary JSON value for property tests.
///
/// Strings are drawn from an escape-free alphabet (including multi-byte
/// scalars and structural characters) so that every truncation point of the
/// serialised document is repairable; the escape-related quirks are pinned
/// by explicit tests instead.
pub fn arbitrary_value(g: &mut Gen, depth: usize) -> Value {
    let upper = if depth == 0 { 4 } else { 6 };
    match pick(g, upper) {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => {
            if bool::arbitrary(g) {
                Value::from(i64::from(i32::arbitrary(g)))
            } else {
                // Exact in f64, so serialisation round-trips by value.
                Value::from(f64::from(i32::arbitrary(g)) / 8.0)
            }
        }
        3 => Value::String(arbitrary_text(g)),
        4 => {
            let len = pick(g, 4);
            (0..len).map(|_| arbitrary_value(g, depth - 1)).collect()
        }
        _ => {
            let len = pick(g, 4);
            let mut map = Map::new();
            for _ in 0..len {
                map.insert(arbitrary_text(g), arbitrary_value(g, depth - 1));
            }
            Value::Object(map)
        }
    }
}

/// Escape-free, deliberately including structural scalars and multi-byte
/// text so truncation points land inside interesting string content.
const TEXT_ALPHABET: &[char] = &[
    'a', 'b', 'c', 'x', 'y', 'z', 'A', 'Z', '0', '9', ' ', '-', '.', ',', ':', '[', '{', 'é', '日',
];

pub fn arbitrary_text(g: &mut Gen) -> String {
    (0..pick(g, 8)).map(|_| *g.choose(TEXT_ALPHABET).unwrap()).collect()
}

fn pick(g: &mut Gen, upper: usize) -> usize {
    usize::arbitrary(g) % upper
}
