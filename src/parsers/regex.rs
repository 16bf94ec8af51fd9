//! Matching text with a regular expression.

use regex::Regex;

use crate::error::Info;
use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// The type of parser returned by [`regex_match()`].
#[derive(Clone, Copy)]
pub struct RegexMatchParser<'r> {
    regex: &'r Regex,
}

impl<'r, 'a, U> Parser<&'a str, U> for RegexMatchParser<'r> {
    type Output = String;

    fn run(&self, state: State<&'a str, U>) -> Reply<&'a str, U, String> {
        match self.regex.find(state.input) {
            Some(m) if m.start() == 0 && m.end() > 0 => {
                let mut pos = state.pos;
                for c in m.as_str().chars() {
                    pos = pos.advance(c);
                }
                let rest = &state.input[m.end()..];
                let err = crate::ParseError::empty(pos.clone());
                Reply::ConsumedOk(m.as_str().to_string(), State::new(rest, pos, state.user), err)
            }
            Some(m) if m.start() == 0 => {
                // Zero-width match: a success that consumed nothing.
                let value = String::new();
                let err = state.empty_error();
                Reply::EmptyOk(value, state, err)
            }
            _ => {
                let found = match state.input.uncons() {
                    None => Info::EndOfInput,
                    Some((c, _)) => Info::token(c),
                };
                let expected = Info::desc(format!("text matching {:?}", self.regex.as_str()));
                Reply::EmptyErr(state.sys_unexpected(found).expecting(expected))
            }
        }
    }
}

/// Match `regex` at the current location, producing the matched text.
///
/// The match must start exactly here, so anchor the pattern with `\A`; a
/// match found further along the input counts as a failure. Greediness and
/// alternation behave however the regex engine says they do; there is no
/// backing off to a shorter match if the rest of the grammar fails.
///
/// Compile the regex once and keep it around, typically with `lazy_static`:
///
/// ```
/// use lazy_static::lazy_static;
/// use presage::{parse, parsers::regex_match};
/// use regex::Regex;
///
/// lazy_static! {
///     static ref WORD: Regex = Regex::new(r"\A[a-z]+").unwrap();
/// }
///
/// assert_eq!(parse(&regex_match(&WORD), "hello world").unwrap().value, "hello");
/// ```
pub fn regex_match(regex: &Regex) -> RegexMatchParser<'_> {
    RegexMatchParser { regex }
}
