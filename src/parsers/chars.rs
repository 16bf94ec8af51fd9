//! Parsers for streams of characters.

use crate::error::{ErrorItem, Info, ParseError};
use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

use crate::parsers::choice::{or, OrParser};
use crate::parsers::repeat::{skip_many, SkipManyParser};
use crate::parsers::sequence::{with, WithParser};

/// The type of parser returned by [`satisfy()`].
#[derive(Clone, Copy)]
pub struct SatisfyParser<F> {
    predicate: F,
}

impl<S, U, F> Parser<S, U> for SatisfyParser<F>
where
    S: Stream<Item = char>,
    F: Fn(char) -> bool,
{
    type Output = char;

    fn run(&self, state: State<S, U>) -> Reply<S, U, char> {
        match state.input.uncons() {
            None => Reply::EmptyErr(state.sys_unexpected(Info::EndOfInput)),
            Some((c, rest)) => {
                if (self.predicate)(c) {
                    consume_char(c, rest, state)
                } else {
                    Reply::EmptyErr(state.sys_unexpected(Info::token(c)))
                }
            }
        }
    }
}

/// Match any character the predicate accepts.
///
/// The failure message names only the offending character; wrap in
/// [`label`](crate::parsers::label) to say what was wanted.
pub fn satisfy<F>(predicate: F) -> SatisfyParser<F>
where
    F: Fn(char) -> bool,
{
    SatisfyParser { predicate }
}

fn consume_char<S, U>(c: char, rest: S, state: State<S, U>) -> Reply<S, U, char>
where
    S: Stream<Item = char>,
{
    let pos = state.pos.advance(c);
    let err = ParseError::empty(pos.clone());
    Reply::ConsumedOk(c, State::new(rest, pos, state.user), err)
}

/// A character-class parser with a noun for error messages.
///
/// The type of parser returned by [`alpha()`] and the other class parsers.
#[derive(Clone, Copy)]
pub struct CharClassParser {
    noun: &'static str,
    predicate: fn(char) -> bool,
}

impl<S, U> Parser<S, U> for CharClassParser
where
    S: Stream<Item = char>,
{
    type Output = char;

    fn run(&self, state: State<S, U>) -> Reply<S, U, char> {
        match state.input.uncons() {
            None => {
                Reply::EmptyErr(state.sys_unexpected(Info::EndOfInput).expecting(Info::desc(self.noun)))
            }
            Some((c, rest)) => {
                if (self.predicate)(c) {
                    consume_char(c, rest, state)
                } else {
                    Reply::EmptyErr(state.sys_unexpected(Info::token(c)).expecting(Info::desc(self.noun)))
                }
            }
        }
    }
}

/// Matches any alphabetic character (see [`char::is_alphabetic`]).
pub fn alpha() -> CharClassParser {
    CharClassParser {
        noun: "letter",
        predicate: char::is_alphabetic,
    }
}

/// Matches any alphabetic or numeric character (see
/// [`char::is_alphanumeric`]).
pub fn alphanumeric() -> CharClassParser {
    CharClassParser {
        noun: "letter or digit",
        predicate: char::is_alphanumeric,
    }
}

/// Matches any uppercase letter.
pub fn upper() -> CharClassParser {
    CharClassParser {
        noun: "uppercase letter",
        predicate: char::is_uppercase,
    }
}

/// Matches any lowercase letter.
pub fn lower() -> CharClassParser {
    CharClassParser {
        noun: "lowercase letter",
        predicate: char::is_lowercase,
    }
}

/// Matches any ASCII decimal digit `'0'`-`'9'`.
pub fn digit() -> CharClassParser {
    CharClassParser {
        noun: "digit",
        predicate: |c| c.is_ascii_digit(),
    }
}

/// Matches any whitespace character (see [`char::is_whitespace`]).
pub fn space() -> CharClassParser {
    CharClassParser {
        noun: "whitespace",
        predicate: char::is_whitespace,
    }
}

/// Matches a tab character, advancing the column to the next tab stop.
pub fn tab() -> CharClassParser {
    CharClassParser {
        noun: "tab",
        predicate: |c| c == '\t',
    }
}

/// Matches any character at all. Fails only at the end of input.
pub fn any_char() -> CharClassParser {
    CharClassParser {
        noun: "any character",
        predicate: |_| true,
    }
}

/// The type of parser returned by [`spaces()`].
pub type SpacesParser = SkipManyParser<CharClassParser>;

/// Skips zero or more whitespace characters.
pub fn spaces() -> SpacesParser {
    skip_many(space())
}

/// The type of parser returned by [`char()`].
#[derive(Clone, Copy)]
pub struct CharParser {
    expected: char,
}

impl<S, U> Parser<S, U> for CharParser
where
    S: Stream<Item = char>,
{
    type Output = char;

    fn run(&self, state: State<S, U>) -> Reply<S, U, char> {
        match state.input.uncons() {
            None => Reply::EmptyErr(
                state
                    .sys_unexpected(Info::EndOfInput)
                    .expecting(Info::token(self.expected)),
            ),
            Some((c, rest)) => {
                if c == self.expected {
                    consume_char(c, rest, state)
                } else {
                    Reply::EmptyErr(
                        state
                            .sys_unexpected(Info::token(c))
                            .expecting(Info::token(self.expected)),
                    )
                }
            }
        }
    }
}

/// Matches exactly the character `expected`.
pub fn char(expected: char) -> CharParser {
    CharParser { expected }
}

/// The type of parser returned by [`one_of()`].
#[derive(Clone, Copy)]
pub struct OneOfParser {
    options: &'static str,
}

impl<S, U> Parser<S, U> for OneOfParser
where
    S: Stream<Item = char>,
{
    type Output = char;

    fn run(&self, state: State<S, U>) -> Reply<S, U, char> {
        let expected = || Info::desc(format!("one of {:?}", self.options));
        match state.input.uncons() {
            None => Reply::EmptyErr(state.sys_unexpected(Info::EndOfInput).expecting(expected())),
            Some((c, rest)) => {
                if self.options.contains(c) {
                    consume_char(c, rest, state)
                } else {
                    Reply::EmptyErr(state.sys_unexpected(Info::token(c)).expecting(expected()))
                }
            }
        }
    }
}

/// Matches any single character in `options`.
///
/// ```
/// use presage::{parse, parsers::one_of};
///
/// let p = one_of("abc");
/// assert_eq!(parse(&p, "a").unwrap().value, 'a');
/// assert_eq!(
///     parse(&p, "d").unwrap_err().error.to_string(),
///     "at line 1, column 1:\nunexpected \"d\"\nexpecting one of \"abc\"",
/// );
/// ```
pub fn one_of(options: &'static str) -> OneOfParser {
    OneOfParser { options }
}

/// The type of parser returned by [`none_of()`].
#[derive(Clone, Copy)]
pub struct NoneOfParser {
    forbidden: &'static str,
}

impl<S, U> Parser<S, U> for NoneOfParser
where
    S: Stream<Item = char>,
{
    type Output = char;

    fn run(&self, state: State<S, U>) -> Reply<S, U, char> {
        let expected = || Info::desc(format!("none of {:?}", self.forbidden));
        match state.input.uncons() {
            None => Reply::EmptyErr(state.sys_unexpected(Info::EndOfInput).expecting(expected())),
            Some((c, rest)) => {
                if !self.forbidden.contains(c) {
                    consume_char(c, rest, state)
                } else {
                    Reply::EmptyErr(state.sys_unexpected(Info::token(c)).expecting(expected()))
                }
            }
        }
    }
}

/// Matches any single character not in `forbidden`.
pub fn none_of(forbidden: &'static str) -> NoneOfParser {
    NoneOfParser { forbidden }
}

/// The type of parser returned by [`string()`].
#[derive(Clone, Copy)]
pub struct StringParser {
    literal: &'static str,
}

impl<S, U> Parser<S, U> for StringParser
where
    S: Stream<Item = char>,
{
    type Output = String;

    fn run(&self, state: State<S, U>) -> Reply<S, U, String> {
        let mut input = state.input;
        let mut pos = state.pos;
        let mut consumed = false;
        for expected in self.literal.chars() {
            let found = match input.uncons() {
                None => Some(Info::EndOfInput),
                Some((c, _)) if c != expected => Some(Info::token(c)),
                Some((c, rest)) => {
                    pos = pos.advance(c);
                    input = rest;
                    consumed = true;
                    None
                }
            };
            if let Some(found) = found {
                // Until the first character matches, failure is free; after
                // that the parser has committed.
                let expect_info = if consumed {
                    Info::desc(format!("{:?} in string {:?}", expected, self.literal))
                } else {
                    Info::desc(format!("{:?}", self.literal))
                };
                let err = ParseError::new(pos, ErrorItem::SysUnexpected(found))
                    .expecting(expect_info);
                return if consumed {
                    Reply::ConsumedErr(err)
                } else {
                    Reply::EmptyErr(err)
                };
            }
        }
        let next = State::new(input, pos, state.user);
        let err = next.empty_error();
        if consumed {
            Reply::ConsumedOk(self.literal.to_string(), next, err)
        } else {
            Reply::EmptyOk(String::new(), next, err)
        }
    }
}

/// Matches exactly the text `literal`, producing it as a `String`.
///
/// Matching commits character by character: failing on the third character
/// of the literal is a consumed failure at that character's position, and an
/// enclosing `or` will not try its alternative. Wrap in
/// [`attempt`](crate::parsers::attempt) when a prefix overlap between
/// alternatives is possible.
pub fn string(literal: &'static str) -> StringParser {
    StringParser { literal }
}

/// The type of parser returned by [`to_str()`].
#[derive(Clone, Copy)]
pub struct ToStrParser<P> {
    parser: P,
}

impl<S, U, P> Parser<S, U> for ToStrParser<P>
where
    S: Stream,
    P: Parser<S, U>,
    P::Output: IntoIterator<Item = char>,
{
    type Output = String;

    fn run(&self, state: State<S, U>) -> Reply<S, U, String> {
        self.parser.run(state).map(|v| v.into_iter().collect())
    }
}

/// Collect a parser's characters into a `String`.
///
/// `many(alpha())` produces a `Vec<char>`, which is rarely what anyone
/// wants; `to_str(many(alpha()))` produces a `String`.
pub fn to_str<P>(parser: P) -> ToStrParser<P> {
    ToStrParser { parser }
}

/// The type of parser returned by [`newline()`].
pub type NewlineParser = OrParser<CharParser, WithParser<CharParser, CharParser>>;

/// Matches a line ending, either `"\n"` or `"\r\n"`, producing `'\n'`.
///
/// After consuming a `'\r'` the `'\n'` is required, and its absence is a
/// committed failure.
pub fn newline() -> NewlineParser {
    or(char('\n'), with(char('\r'), char('\n')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{eof, many, skip};
    use crate::testing::*;

    #[test]
    fn test_one_of() {
        assert_parse_eq(one_of("abc"), "a", 'a');
        assert_parse_error(
            one_of("abc"),
            "d",
            "at line 1, column 1:\nunexpected \"d\"\nexpecting one of \"abc\"",
        );
    }

    #[test]
    fn test_none_of() {
        assert_parse_eq(none_of("abc"), "d", 'd');
        assert_no_parse(none_of("abc"), "b");
    }

    #[test]
    fn test_char_classes() {
        assert_parse_eq(alpha(), "x", 'x');
        assert_parse_error(
            alpha(),
            "9",
            "at line 1, column 1:\nunexpected \"9\"\nexpecting letter",
        );
        assert_parse_eq(digit(), "9", '9');
        assert_parse_eq(upper(), "Q", 'Q');
        assert_parse_eq(lower(), "q", 'q');
        assert_parse_eq(space(), " ", ' ');
        assert_parse_error(
            digit(),
            "",
            "at line 1, column 1:\nunexpected end of input\nexpecting digit",
        );
    }

    #[test]
    fn test_satisfy_has_no_noun() {
        assert_parse_error(
            satisfy(|c| c == '!'),
            "?",
            "at line 1, column 1:\nunexpected \"?\"",
        );
    }

    #[test]
    fn test_string_commits_at_mismatch() {
        let p = string("abc");
        assert_parse_eq(&p, "abc", "abc".to_string());

        let failure = parse_failure(&p, "abx");
        assert!(failure.consumed);
        assert_eq!(
            failure.error.to_string(),
            "at line 1, column 3:\nunexpected \"x\"\nexpecting \"c\" in string \"abc\"",
        );

        // A first-character mismatch has consumed nothing.
        let failure = parse_failure(&p, "xbc");
        assert!(!failure.consumed);
        assert_eq!(
            failure.error.to_string(),
            "at line 1, column 1:\nunexpected \"x\"\nexpecting \"abc\"",
        );
    }

    #[test]
    fn test_empty_string_literal() {
        let ok = parse_success(string(""), "anything");
        assert_eq!(ok.value, "");
        assert!(!ok.consumed);
    }

    #[test]
    fn test_newline() {
        // "\r\n" collapses to '\n'.
        assert_parse_eq(newline(), "\r\n", '\n');
        assert_parse_eq(newline(), "\n", '\n');

        // A '\r' commits; the failure reports column 2.
        let failure = parse_failure(newline(), "\ra");
        assert!(failure.consumed);
        assert_eq!(
            failure.error.to_string(),
            "at line 1, column 2:\nunexpected \"a\"\nexpecting \"\\n\"",
        );
    }

    #[test]
    fn test_to_str() {
        assert_parse_eq(to_str(many(alpha())), "abc", "abc".to_string());
    }

    #[test]
    fn test_many_alpha_then_eof() {
        let p = skip(many(alpha()), eof());
        assert_parse_eq(&p, "abc", vec!['a', 'b', 'c']);
    }
}
