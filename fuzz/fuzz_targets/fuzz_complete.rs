#![no_main]

use jsonmend::{CompleterOptions, JsonCompleter, NonConformingFloats, PartialValues};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

const HEADER: usize = 3; // 1 flag byte + 2-byte depth seed

/// Exercise the completion engine, the façade and the streaming adaptor on
/// arbitrary input. Nothing here asserts output shape; the target exists to
/// surface panics, overflows and runaway recursion.
fn complete(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let maximum_depth = usize::from(u16::from_le_bytes([data[1], data[2]]) % 256).max(1);
    let data = &data[HEADER..];

    let completer = JsonCompleter::new(CompleterOptions {
        non_conforming_floats: if flags & 1 != 0 {
            NonConformingFloats::accept()
        } else {
            NonConformingFloats::Reject
        },
        maximum_depth,
    });

    let text = String::from_utf8_lossy(data);

    if let Ok(completed) = completer.complete(&text) {
        // Completing a completed document must never error.
        let _ = completer.complete(&completed);
    }

    let _ = completer.decode::<Value>(data);

    if flags & 2 != 0 {
        let source = data.iter().map(|b| Ok::<u8, core::convert::Infallible>(*b));
        for _ in PartialValues::<Value, _>::new(source, completer) {
            // drain
        }
    }
}

fuzz_target!(|data: &[u8]| complete(data));
