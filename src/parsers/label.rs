//! Naming what a parser expects.

use std::borrow::Cow;

use crate::error::Info;
use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// The type of parser returned by [`label()`].
#[derive(Clone)]
pub struct LabelParser<P> {
    parser: P,
    text: Cow<'static, str>,
}

impl<S, U, P> Parser<S, U> for LabelParser<P>
where
    S: Stream,
    P: Parser<S, U>,
{
    type Output = P::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, P::Output> {
        let text = || {
            if self.text.is_empty() {
                None
            } else {
                Some(Info::desc(self.text.clone()))
            }
        };
        match self.parser.run(state) {
            Reply::EmptyErr(mut err) => {
                err.set_expected(text());
                Reply::EmptyErr(err)
            }
            Reply::EmptyOk(value, next, mut err) => {
                if !err.is_empty() {
                    err.set_expected(text());
                }
                Reply::EmptyOk(value, next, err)
            }
            committed => committed,
        }
    }
}

/// Give `parser` a name for error messages.
///
/// Whenever `parser` completes without consuming input, its expected-set is
/// replaced by the single entry `text`, turning a pile of character-level
/// detail into something like `expecting identifier`. Once input has been
/// consumed the low-level error is more precise than the label, so it is
/// kept. An empty `text` clears the expected-set without adding anything.
///
/// ```
/// use presage::{parse, parsers::*};
///
/// let ident = label(to_str(many1(alpha())), "identifier");
/// let err = parse(&ident, "42").unwrap_err();
/// assert_eq!(
///     err.error.to_string(),
///     "at line 1, column 1:\nunexpected \"4\"\nexpecting identifier",
/// );
/// ```
pub fn label<P>(parser: P, text: impl Into<Cow<'static, str>>) -> LabelParser<P> {
    LabelParser {
        parser,
        text: text.into(),
    }
}
