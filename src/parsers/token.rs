//! The one primitive that consumes input, and parsers built directly on it.
//!
//! Everything that advances past a token goes through [`TokenParser`]. It
//! owns the bookkeeping that the rest of the library relies on: a mismatch
//! or end of input is an empty error, and a match is a consumed success
//! whose state carries the position computed for the next token.

use std::fmt;

use crate::error::{Info, ParseError};
use crate::parsers::attempt::{not_followed_by, NotFollowedByParser};
use crate::parsers::label::{label, LabelParser};
use crate::pos::SourcePos;
use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// How a token parser computes the position of the token after the one it
/// consumed.
///
/// This is a small strategy trait so that the common policies can be named
/// types; any closure of the right shape works too.
pub trait NextPos<S: Stream> {
    /// The position following `item`, given the position of `item` itself
    /// and the input remaining after it.
    fn next_pos(&self, pos: &SourcePos, item: &S::Item, rest: &S) -> SourcePos;
}

/// Leave the position untouched.
///
/// The default for abstract token streams, where lines and columns have no
/// inherent meaning. Override with [`token_prim`] when they do.
#[derive(Clone, Copy)]
pub struct SamePos;

impl<S: Stream> NextPos<S> for SamePos {
    fn next_pos(&self, pos: &SourcePos, _item: &S::Item, _rest: &S) -> SourcePos {
        pos.clone()
    }
}

/// Advance line and column the way text does: newlines start a new line,
/// tabs jump to the next tab stop, anything else moves one column.
#[derive(Clone, Copy)]
pub struct TextPos;

impl<S: Stream<Item = char>> NextPos<S> for TextPos {
    fn next_pos(&self, pos: &SourcePos, item: &char, _rest: &S) -> SourcePos {
        pos.advance(*item)
    }
}

impl<S, F> NextPos<S> for F
where
    S: Stream,
    F: Fn(&SourcePos, &S::Item, &S) -> SourcePos,
{
    fn next_pos(&self, pos: &SourcePos, item: &S::Item, rest: &S) -> SourcePos {
        self(pos, item, rest)
    }
}

/// The type of parser returned by [`token()`] and [`token_prim()`].
#[derive(Clone, Copy)]
pub struct TokenParser<F, G> {
    test: F,
    next_pos: G,
}

impl<S, U, F, G, T> Parser<S, U> for TokenParser<F, G>
where
    S: Stream,
    S::Item: fmt::Display,
    F: Fn(&S::Item) -> Option<T>,
    G: NextPos<S>,
{
    type Output = T;

    fn run(&self, state: State<S, U>) -> Reply<S, U, T> {
        match state.input.uncons() {
            None => Reply::EmptyErr(state.sys_unexpected(Info::EndOfInput)),
            Some((item, rest)) => match (self.test)(&item) {
                None => Reply::EmptyErr(state.sys_unexpected(Info::token(&item))),
                Some(value) => {
                    let pos = self.next_pos.next_pos(&state.pos, &item, &rest);
                    let err = ParseError::empty(pos.clone());
                    Reply::ConsumedOk(value, State::new(rest, pos, state.user), err)
                }
            },
        }
    }
}

/// Match one token with `test`, leaving the reported position untouched.
///
/// `test` inspects the next token and returns the parsed value to accept it,
/// or `None` to refuse it. Refusal (and end of input) is an empty failure,
/// so alternatives can still be tried. On success the token is consumed.
///
/// For token types where line and column mean something, use [`token_prim`]
/// and supply the position policy.
///
/// ```
/// use presage::{parse, parsers::token};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Tok { Word(&'static str), Comma }
///
/// impl std::fmt::Display for Tok {
///     fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
///         match self {
///             Tok::Word(w) => write!(f, "{}", w),
///             Tok::Comma => write!(f, ","),
///         }
///     }
/// }
///
/// let word = token(|t: &Tok| match t {
///     Tok::Word(w) => Some(*w),
///     Tok::Comma => None,
/// });
/// let input: &[Tok] = &[Tok::Word("hi"), Tok::Comma];
/// assert_eq!(parse(&word, input).unwrap().value, "hi");
/// ```
pub fn token<F>(test: F) -> TokenParser<F, SamePos> {
    TokenParser {
        test,
        next_pos: SamePos,
    }
}

/// Match one token with `test`, computing the next position with `next_pos`.
///
/// This is the fully general consuming primitive. `next_pos` sees the
/// current position, the consumed token, and the remaining input.
pub fn token_prim<F, G>(test: F, next_pos: G) -> TokenParser<F, G> {
    TokenParser { test, next_pos }
}

/// The type of parser returned by [`any_token()`].
#[derive(Clone, Copy)]
pub struct AnyTokenParser;

impl<S, U> Parser<S, U> for AnyTokenParser
where
    S: Stream,
    S::Item: fmt::Display,
{
    type Output = S::Item;

    fn run(&self, state: State<S, U>) -> Reply<S, U, S::Item> {
        match state.input.uncons() {
            None => Reply::EmptyErr(state.sys_unexpected(Info::EndOfInput)),
            Some((item, rest)) => {
                let pos = state.pos.clone();
                let err = ParseError::empty(pos.clone());
                Reply::ConsumedOk(item, State::new(rest, pos, state.user), err)
            }
        }
    }
}

/// Consume and return the next token, whatever it is. Fails only at the end
/// of input. The reported position does not move; pair with [`eof()`] or use
/// stream-specific parsers when positions matter.
pub fn any_token() -> AnyTokenParser {
    AnyTokenParser
}

/// The type of parser returned by [`eof()`].
pub type EofParser = LabelParser<NotFollowedByParser<AnyTokenParser>>;

/// Succeed only at the end of the input. Never consumes.
pub fn eof() -> EofParser {
    label(not_followed_by(any_token()), "end of input")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn test_token_over_slices() {
        let even = token(|t: &i32| if t % 2 == 0 { Some(*t) } else { None });
        let input: &[i32] = &[4, 5];
        let reply = run_state(&even, State::new(input, SourcePos::new(), ()));
        match reply {
            Reply::ConsumedOk(value, state, _) => {
                assert_eq!(value, 4);
                assert_eq!(state.input, &[5]);
            }
            _ => panic!("expected ConsumedOk"),
        }

        let input: &[i32] = &[5, 4];
        let reply = run_state(&even, State::new(input, SourcePos::new(), ()));
        assert!(matches!(reply, Reply::EmptyErr(_)));
    }

    #[test]
    fn test_token_prim_positions() {
        // A newline-counting policy for a slice of strings, one per word.
        let word = token_prim(
            |t: &&str| Some(t.to_string()),
            |pos: &SourcePos, t: &&str, _rest: &&[&str]| {
                if *t == "\n" {
                    pos.advance('\n')
                } else {
                    pos.clone().at(pos.line(), pos.column() + 1)
                }
            },
        );
        let input: &[&str] = &["hello", "\n"];
        let reply = run_state(&word, State::new(input, SourcePos::new(), ()));
        match reply {
            Reply::ConsumedOk(value, state, _) => {
                assert_eq!(value, "hello");
                assert_eq!(state.pos.column(), 2);
            }
            _ => panic!("expected ConsumedOk"),
        }
    }

    #[test]
    fn test_eof() {
        assert_parse_eq(eof(), "", ());
        assert_parse_error(
            eof(),
            "leftover",
            "at line 1, column 1:\nunexpected \"l\"\nexpecting end of input",
        );
    }
}
