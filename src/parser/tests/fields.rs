//! Field and part extraction tests.

use super::helpers::{field_parts, parse_ok};
use rstest::rstest;

#[rstest]
#[case("name: alice, age: 30", vec![vec!["name", "alice"], vec!["age", "30"]])]
#[case("broken", vec![vec!["broken"]])]
#[case("", vec![vec![""]])]
#[case(": v", vec![vec!["", "v"]])]
#[case("k: ", vec![vec!["k", ""]])]
#[case("a: b: c", vec![vec!["a", "b", "c"]])]
#[case("a:b, c: d", vec![vec!["a:b"], vec!["c", "d"]])]
#[case("x: 1,2, y: 3", vec![vec!["x", "1,2"], vec!["y", "3"]])]
#[case(",, ", vec![vec![","], vec![""]])]
#[case(":, ", vec![vec![":"], vec![""]])]
#[case(", : ", vec![vec![""], vec!["", ""]])]
fn splits_like_nested_string_split(#[case] src: &str, #[case] expected: Vec<Vec<&str>>) {
    assert_eq!(field_parts(src), expected);
}

#[test]
fn key_and_value_accessors() {
    let parsed = parse_ok("name: alice, broken, a: b: c");
    let fields = parsed.root().fields();
    let summary: Vec<(Option<String>, Option<String>)> =
        fields.iter().map(|f| (f.key(), f.value())).collect();
    assert_eq!(
        summary,
        vec![
            (Some("name".into()), Some("alice".into())),
            (None, None),
            (Some("a".into()), Some("b".into())),
        ]
    );
}

#[rstest]
#[case("k: v", true)]
#[case(": ", true)]
#[case("k:v", false)]
#[case("", false)]
fn detects_pair_separator(#[case] src: &str, #[case] expected: bool) {
    let parsed = parse_ok(src);
    let fields = parsed.root().fields();
    let first = fields
        .first()
        .unwrap_or_else(|| panic!("record without fields"));
    assert_eq!(first.has_pair_separator(), expected);
}

#[test]
fn well_formed_record_has_no_errors() {
    assert!(crate::parse("a: 1, b: 2").errors().is_empty());
}
