//! Running a parser against an input.

use thiserror::Error;

use crate::error::ParseError;
use crate::pos::{SourcePos, DEFAULT_TAB_WIDTH};
use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// Options for [`parse_with()`]: where the parse starts and what rides along.
#[derive(Clone, Debug)]
pub struct Options<U> {
    /// A name for the input, used in error positions. Usually a file name.
    pub source_name: Option<String>,
    /// Column width of a tab stop. Defaults to 8.
    pub tab_width: u32,
    /// Line the input starts on. Defaults to 1.
    pub line: u32,
    /// Column the input starts on. Defaults to 1.
    pub column: u32,
    /// The initial user state.
    pub user: U,
}

impl Default for Options<()> {
    fn default() -> Options<()> {
        Options {
            source_name: None,
            tab_width: DEFAULT_TAB_WIDTH,
            line: 1,
            column: 1,
            user: (),
        }
    }
}

impl<U> Options<U> {
    /// Name the input for error messages.
    pub fn source_name(mut self, name: impl Into<String>) -> Options<U> {
        self.source_name = Some(name.into());
        self
    }

    /// Set the tab stop width.
    pub fn tab_width(mut self, width: u32) -> Options<U> {
        self.tab_width = width;
        self
    }

    /// Start positions at the given line and column instead of 1, 1. Useful
    /// when the input is an excerpt of a larger document.
    pub fn starting_at(mut self, line: u32, column: u32) -> Options<U> {
        self.line = line;
        self.column = column;
        self
    }

    /// Supply the initial user state, which may be any cloneable type.
    pub fn user_state<V>(self, user: V) -> Options<V> {
        Options {
            source_name: self.source_name,
            tab_width: self.tab_width,
            line: self.line,
            column: self.column,
            user,
        }
    }
}

/// A successful parse.
#[derive(Clone, Debug)]
pub struct Success<T, S, U> {
    /// The parsed value.
    pub value: T,
    /// True if at least one token was consumed.
    pub consumed: bool,
    /// The state after the parse: remaining input, final position, final
    /// user value. The parse stops wherever the grammar stops; sequence
    /// with [`eof`](crate::parsers::eof) to insist on consuming everything.
    pub state: State<S, U>,
}

/// A failed parse.
///
/// `consumed` is the commit bit: true means the grammar got somewhere
/// before failing, which callers doing their own recovery usually treat
/// differently from an outright non-match.
#[derive(Clone, Debug, Error)]
#[error("{error}")]
pub struct Failure {
    /// What went wrong and where.
    pub error: ParseError,
    /// True if input was consumed before the failure.
    pub consumed: bool,
}

/// What a parse run returns.
pub type ParseResult<T, S, U> = Result<Success<T, S, U>, Failure>;

/// Run `parser` against `input` with default options and no user state.
///
/// ```
/// use presage::{parse, parsers::*};
///
/// let p = sep_by1(to_str(many1(alpha())), char(' '));
/// let ok = parse(&p, "hello brave world").unwrap();
/// assert_eq!(ok.value, vec!["hello", "brave", "world"]);
/// ```
pub fn parse<S, P>(parser: &P, input: S) -> ParseResult<P::Output, S, ()>
where
    S: Stream,
    P: Parser<S, ()>,
{
    parse_with(parser, input, Options::default())
}

/// Run `parser` against `input` with the given [`Options`].
pub fn parse_with<S, U, P>(parser: &P, input: S, options: Options<U>) -> ParseResult<P::Output, S, U>
where
    S: Stream,
    P: Parser<S, U>,
{
    let mut pos = SourcePos::new()
        .with_tab_width(options.tab_width)
        .at(options.line, options.column);
    if let Some(name) = options.source_name {
        pos = pos.with_source(name);
    }
    let state = State::new(input, pos, options.user);
    match parser.run(state) {
        Reply::ConsumedOk(value, state, _) => Ok(Success {
            value,
            consumed: true,
            state,
        }),
        Reply::EmptyOk(value, state, _) => Ok(Success {
            value,
            consumed: false,
            state,
        }),
        Reply::ConsumedErr(error) => Err(Failure {
            error,
            consumed: true,
        }),
        Reply::EmptyErr(error) => Err(Failure {
            error,
            consumed: false,
        }),
    }
}
