//! Parsers that don't look at the input.

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::error::{ErrorItem, Info, ParseError};
use crate::pos::SourcePos;
use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// The type of parser returned by [`pure()`].
#[derive(Clone, Copy)]
pub struct PureParser<T> {
    value: T,
}

impl<S, U, T> Parser<S, U> for PureParser<T>
where
    S: Stream,
    T: Clone,
{
    type Output = T;

    fn run(&self, state: State<S, U>) -> Reply<S, U, T> {
        let err = state.empty_error();
        Reply::EmptyOk(self.value.clone(), state, err)
    }
}

/// Succeed with `value` without consuming any input.
pub fn pure<T: Clone>(value: T) -> PureParser<T> {
    PureParser { value }
}

/// The type of parser returned by [`fail()`].
pub struct FailParser<T> {
    message: Cow<'static, str>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Clone for FailParser<T> {
    fn clone(&self) -> Self {
        FailParser {
            message: self.message.clone(),
            _output: PhantomData,
        }
    }
}

impl<S: Stream, U, T> Parser<S, U> for FailParser<T> {
    type Output = T;

    fn run(&self, state: State<S, U>) -> Reply<S, U, T> {
        Reply::EmptyErr(ParseError::new(
            state.pos,
            ErrorItem::Message(self.message.clone().into_owned()),
        ))
    }
}

/// Fail without consuming input, attaching a free-form message.
///
/// The output type is whatever the surrounding grammar needs; no value is
/// ever produced.
pub fn fail<T, M>(message: M) -> FailParser<T>
where
    M: Into<Cow<'static, str>>,
{
    FailParser {
        message: message.into(),
        _output: PhantomData,
    }
}

/// The type of parser returned by [`unexpected()`].
pub struct UnexpectedParser<T> {
    description: Cow<'static, str>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Clone for UnexpectedParser<T> {
    fn clone(&self) -> Self {
        UnexpectedParser {
            description: self.description.clone(),
            _output: PhantomData,
        }
    }
}

impl<S: Stream, U, T> Parser<S, U> for UnexpectedParser<T> {
    type Output = T;

    fn run(&self, state: State<S, U>) -> Reply<S, U, T> {
        Reply::EmptyErr(ParseError::new(
            state.pos,
            ErrorItem::Unexpected(Info::desc(self.description.clone())),
        ))
    }
}

/// Fail without consuming input, reporting `unexpected <description>`.
pub fn unexpected<T, M>(description: M) -> UnexpectedParser<T>
where
    M: Into<Cow<'static, str>>,
{
    UnexpectedParser {
        description: description.into(),
        _output: PhantomData,
    }
}

/// The type of parser returned by [`position()`].
#[derive(Clone, Copy)]
pub struct PositionParser;

impl<S: Stream, U> Parser<S, U> for PositionParser {
    type Output = SourcePos;

    fn run(&self, state: State<S, U>) -> Reply<S, U, SourcePos> {
        let pos = state.pos.clone();
        let err = state.empty_error();
        Reply::EmptyOk(pos, state, err)
    }
}

/// Yield the current position without consuming input.
pub fn position() -> PositionParser {
    PositionParser
}

/// The type of parser returned by [`parser()`].
pub struct FnParser<F, T> {
    f: F,
    _output: PhantomData<fn() -> T>,
}

impl<F: Clone, T> Clone for FnParser<F, T> {
    fn clone(&self) -> Self {
        FnParser {
            f: self.f.clone(),
            _output: PhantomData,
        }
    }
}

impl<S, U, F, T> Parser<S, U> for FnParser<F, T>
where
    S: Stream,
    F: Fn(State<S, U>) -> Reply<S, U, T>,
{
    type Output = T;

    fn run(&self, state: State<S, U>) -> Reply<S, U, T> {
        (self.f)(state)
    }
}

/// Wrap a function as a parser.
///
/// The function receives the state and must reply according to the protocol
/// documented on [`Parser`]. This is the escape hatch for parsers the
/// builders don't cover, and the usual way to tie a recursive grammar:
///
/// ```
/// use presage::{parse, parsers::*, Parser, Reply, State};
///
/// // nested ::= '(' nested ')' | 'x'
/// fn nested(state: State<&str, ()>) -> Reply<&str, (), ()> {
///     or(
///         with(char('('), skip(parser(nested), char(')'))),
///         map(char('x'), |_| ()),
///     )
///     .run(state)
/// }
///
/// assert!(parse(&parser(nested), "((x))").is_ok());
/// assert!(parse(&parser(nested), "((x)").is_err());
/// ```
pub fn parser<F, T>(f: F) -> FnParser<F, T> {
    FnParser {
        f,
        _output: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn test_pure() {
        assert_parse_eq(pure(7), "", 7);
        // pure ignores the input entirely and consumes nothing
        assert_parse_eq(pure('x'), "abc", 'x');
    }

    #[test]
    fn test_fail() {
        let p: FailParser<i32> = fail("numbers must be positive");
        assert_parse_error(p, "123", "at line 1, column 1:\nnumbers must be positive");
    }

    #[test]
    fn test_unexpected() {
        let p: UnexpectedParser<i32> = unexpected("keyword");
        assert_parse_error(p, "let", "at line 1, column 1:\nunexpected keyword");
    }

    #[test]
    fn test_position() {
        assert_parse_eq(position(), "", crate::SourcePos::new());
    }
}
