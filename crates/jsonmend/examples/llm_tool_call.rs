//! React to a streamed LLM tool call **before** the full response arrives.
//!
//! The assistant has been prompted with a tool schema that yields a JSON
//! object describing a generated code snippet, with a `moderation` field
//! first so that backend code can abort early on a policy violation
//! (abridged):
//!
//! ```text
//! {
//!   "moderation": { "decision": "allow" | "block", "reason": string | null },
//!   "filename":   string,
//!   "language":   string,
//!   "code":       string,
//! }
//! ```
//!
//! The payload is fed to [`PartialValues`] byte by byte, the way a
//! `chat.completions`-style API trickles tokens in. Each snapshot is a
//! fully-typed `ToolCall` built from the completed buffer, so the program
//! can:
//!
//! 1. Abort the moment `moderation.decision` reads `"block"`.
//! 2. Render the growing `code` field as it streams in.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonmend --example llm_tool_call
//! ```

use std::convert::Infallible;

use jsonmend::{JsonCompleter, PartialValues};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
struct Moderation {
    decision: String,
    reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
struct ToolCall {
    moderation: Moderation,
    filename: String,
    language: String,
    code: String,
}

fn main() {
    // A toy assistant response. In real life this comes from the network.
    let payload = concat!(
        r#"{"moderation": {"decision": "allow", "reason": null}, "#,
        r#""filename": "hello.rs", "language": "rust", "#,
        r#""code": "fn main() {\n    println!(\"Hello from jsonmend!\");\n}\n""#,
        r#"}"#,
    );

    let source = payload.bytes().map(Ok::<u8, Infallible>);
    let stream = PartialValues::<ToolCall, _>::new(source, JsonCompleter::default());

    let mut printed = 0usize;
    let mut decided = false;
    let mut last = ToolCall::default();

    for snapshot in stream {
        let call = match snapshot {
            Ok(value) => value.value,
            Err(err) => {
                eprintln!("stream failed: {err}");
                return;
            }
        };

        if call.moderation.decision.starts_with("block") {
            eprintln!(
                "moderation blocked the content ({}), aborting",
                call.moderation.reason.as_deref().unwrap_or("no reason")
            );
            return;
        }
        if !decided && call.moderation.decision == "allow" {
            println!("moderation decision: allow");
            decided = true;
        }

        // Print only the newly arrived tail of the code field. Successful
        // snapshots grow the field monotonically; a buffer cut inside an
        // escape sequence simply fails to decode and yields no snapshot.
        if call.code.len() > printed {
            print!("{}", &call.code[printed..]);
            printed = call.code.len();
        }
        last = call;
    }

    println!("wrote {} ({})", last.filename, last.language);
}
