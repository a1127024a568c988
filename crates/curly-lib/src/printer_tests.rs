use crate::parse_str;
use crate::value::{Group, Value};

#[test]
fn outline() {
    let value = parse_str(r#"{"a": {"b": 1, "c": "x"}, "d": {}}"#).unwrap();
    insta::assert_snapshot!(value.printer().dump(), @r#"
    Root
      Group "a"
        Number "b" 1
        String "c" "x"
      Group "d"
    "#);
}

#[test]
fn with_counts() {
    let value = parse_str(r#"{"a": {"b": 1, "c": "x"}, "d": {}}"#).unwrap();
    insta::assert_snapshot!(value.printer().with_counts(true).dump(), @r#"
    Root (2)
      Group "a" (2)
        Number "b" 1
        String "c" "x"
      Group "d" (0)
    "#);
}

#[test]
fn names_are_quoted() {
    let value = Value::Group(Group::root(vec![
        Value::string("", "empty name"),
        Value::string("has space", "a b"),
    ]));
    insta::assert_snapshot!(value.printer().dump(), @r#"
    Root
      String "" "empty name"
      String "has space" "a b"
    "#);
}

#[test]
fn leaf_value_alone() {
    assert_eq!(Value::number("n", 3).printer().dump(), "Number \"n\" 3\n");
}
