//! Inline-snapshot coverage of representative repairs. The interesting part
//! of each case is the exact suffix chosen, which diffs poorly in
//! assert_eq! form once inputs get long.

use insta::assert_snapshot;

use super::utils::complete;

#[test]
fn snapshot_object_repairs() {
    assert_snapshot!(complete(r#"{"model": "gpt", "choices": [{"delta": {"content": "Hel"#), @r#"{"model": "gpt", "choices": [{"delta": {"content": "Hel"}}]}"#);
    assert_snapshot!(complete(r#"{"a": {"b": {"c":"#), @r#"{"a": {"b": {"c":null}}}"#);
    assert_snapshot!(complete(r#"{"done": fa"#), @r#"{"done": false}"#);
}

#[test]
fn snapshot_array_repairs() {
    assert_snapshot!(complete(r#"[["x", -1.5e"#), @r#"[["x", -1.5e0]]"#);
    assert_snapshot!(complete(r#"[1, [nu"#), @"[1, [null]]");
    assert_snapshot!(complete("[0, 1, [2, [3, [4,"), @"[0, 1, [2, [3, [4]]]]");
}

#[test]
fn snapshot_scalar_repairs() {
    assert_snapshot!(complete(r#""stream me"#), @r#""stream me""#);
    assert_snapshot!(complete("-12."), @"-12.0");
    assert_snapshot!(complete("3.1e-"), @"3.1e-0");
}
