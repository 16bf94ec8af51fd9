//! A small JSON parser built from the public API, checked against
//! serde_json. Escape sequences and floats are left out; the point is the
//! shape of a real recursive grammar, not RFC coverage.

use presage::{parse, parsers::*, Parser, Reply, State};
use serde_json::{json, Value};

type JsonReply<'a> = Reply<&'a str, (), Value>;

fn ws() -> SkipManyParser<OneOfParser> {
    skip_many(one_of(" \t\r\n"))
}

/// A token parser with the whitespace after it stripped.
fn lexeme<P>(p: P) -> SkipParser<P, SkipManyParser<OneOfParser>> {
    skip(p, ws())
}

fn json_value(state: State<&str, ()>) -> JsonReply<'_> {
    let string_lit = lexeme(between(
        char('"'),
        to_str(many(none_of("\"\\"))),
        char('"'),
    ));
    let number = lexeme(int::<i64>());
    let array = between(
        lexeme(char('[')),
        sep_by(parser(json_value), lexeme(char(','))),
        lexeme(char(']')),
    );
    let member = and(
        skip(string_lit, lexeme(char(':'))),
        parser(json_value),
    );
    let object = between(
        lexeme(char('{')),
        sep_by(member, lexeme(char(','))),
        lexeme(char('}')),
    );

    choice((
        map(lexeme(string("null")), |_| Value::Null),
        map(lexeme(string("true")), |_| Value::Bool(true)),
        map(lexeme(string("false")), |_| Value::Bool(false)),
        map(number, |n: i64| Value::Number(n.into())),
        map(string_lit, Value::String),
        map(array, Value::Array),
        map(object, |members: Vec<(String, Value)>| {
            Value::Object(members.into_iter().collect())
        }),
    ))
    .run(state)
}

fn parse_json(text: &str) -> Result<Value, presage::Failure> {
    let document = skip(with(ws(), parser(json_value)), eof());
    parse(&document, text).map(|ok| ok.value)
}

#[test]
fn test_scalars() {
    assert_eq!(parse_json("null").unwrap(), Value::Null);
    assert_eq!(parse_json("true").unwrap(), Value::Bool(true));
    assert_eq!(parse_json(" -17 ").unwrap(), json!(-17));
    assert_eq!(parse_json("\"hi\"").unwrap(), json!("hi"));
}

#[test]
fn test_nested_document() {
    let text = r#"
        {
            "Width": 800,
            "Title": "View from the 15th Floor",
            "Animated": false,
            "IDs": [116, 943, 234, 38793],
            "Thumbnail": {
                "Url": "http://example.com/481989943",
                "Height": 125
            }
        }
    "#;
    let expected = json!({
        "Width": 800,
        "Title": "View from the 15th Floor",
        "Animated": false,
        "IDs": [116, 943, 234, 38793],
        "Thumbnail": {
            "Url": "http://example.com/481989943",
            "Height": 125
        }
    });
    assert_eq!(parse_json(text).unwrap(), expected);
}

#[test]
fn test_empty_containers() {
    assert_eq!(parse_json("[]").unwrap(), json!([]));
    assert_eq!(parse_json("{}").unwrap(), json!({}));
    assert_eq!(parse_json("[[], {}]").unwrap(), json!([[], {}]));
}

#[test]
fn test_malformed_documents() {
    assert!(parse_json("[1, 2").is_err());
    assert!(parse_json("{\"a\": }").is_err());
    assert!(parse_json("[1, 2] trailing").is_err());

    // The unbalanced bracket is reported where it happens.
    let failure = parse_json("[1, 2]]").unwrap_err();
    assert_eq!(failure.error.pos().column(), 7);
}

#[test]
fn test_error_points_into_nested_structure() {
    let failure = parse_json("{\"ids\": [1, 2, x]}").unwrap_err();
    assert_eq!(failure.error.pos().line(), 1);
    assert_eq!(failure.error.pos().column(), 16);
}
