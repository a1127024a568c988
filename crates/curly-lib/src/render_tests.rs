use indoc::indoc;

use crate::render::render;
use crate::value::{Group, Value};
use crate::{Parser, parse_str, scan};

fn root(children: Vec<Value>) -> Value {
    Value::Group(Group::root(children))
}

fn roundtrip(input: &str) {
    let value = parse_str(input).unwrap();
    let rendered = render(&value);
    assert_eq!(parse_str(&rendered).unwrap(), value, "{rendered}");
}

#[test]
fn empty_root() {
    assert_eq!(render(&root(Vec::new())), "{\n}");
}

#[test]
fn single_field() {
    let value = root(vec![Value::number("a", 1)]);
    assert_eq!(render(&value), "{\n\t\"a\": 1\n}");
}

#[test]
fn fields_are_comma_separated() {
    let value = root(vec![Value::string("a", "x"), Value::number("b", 2)]);
    assert_eq!(render(&value), "{\n\t\"a\": \"x\",\n\t\"b\": 2\n}");
}

#[test]
fn nested_groups_indent_with_tabs() {
    let value = root(vec![Value::group("a", vec![Value::number("b", 1)])]);
    assert_eq!(render(&value), "{\n\t\"a\": {\n\t\t\"b\": 1\n\t}\n}");
}

#[test]
fn empty_named_group() {
    let value = root(vec![Value::group("a", Vec::new())]);
    assert_eq!(render(&value), "{\n\t\"a\": {\n\t}\n}");
}

#[test]
fn anonymous_group_has_no_name() {
    let value = root(vec![
        Value::number("x", 1),
        root(vec![Value::number("y", 2)]),
    ]);
    assert_eq!(render(&value), "{\n\t\"x\": 1,\n\t{\n\t\t\"y\": 2\n\t}\n}");
}

#[test]
fn display_matches_render() {
    let value = parse_str(r#"{"a": {"b": "c"}, "d": 4}"#).unwrap();
    assert_eq!(value.to_string(), render(&value));
}

#[test]
fn field_value_is_not_escaped() {
    let value = root(vec![Value::string("path", r"C:\temp")]);
    assert_eq!(render(&value), "{\n\t\"path\": \"C:\\temp\"\n}");
}

#[test]
fn reparse_preserves_tree() {
    roundtrip("{}");
    roundtrip(r#"{"a": 1, "b": "two", "c": {}}"#);
    roundtrip(r#"{"x": 1, {"y": 2}}"#);
    roundtrip(r#"{"a": 1} {"b": 2}"#);
    roundtrip(r#"{"x": {{"a": 1}}}"#);
    roundtrip(indoc! {r#"
    {
        "name": "curly",
        "version": {
            "major": 1,
            "minor": 20,
            "tags": {"stable": "yes"}
        }
    }
    "#});
}

#[test]
fn rendering_is_a_fixed_point() {
    let value = parse_str(r#"{"a": {"b": {"c": 1}}, "d": ""}"#).unwrap();
    let once = render(&value);
    let twice = render(&parse_str(&once).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn deep_tree() {
    let depth = 1_000;
    let mut value = Value::number("leaf", 1);
    for _ in 0..depth {
        value = Value::group("n", vec![value]);
    }
    let value = root(vec![value]);

    let rendered = render(&value);
    assert_eq!(rendered.lines().count(), 2 * depth + 3);
    assert!(rendered.contains(&format!("{}\"leaf\": 1\n", "\t".repeat(depth + 1))));

    let tokens = scan(&rendered).unwrap();
    let reparsed = Parser::new().parse(&tokens).unwrap();
    assert_eq!(reparsed, value);
}
