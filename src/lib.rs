//! Predictive parser combinators with precise error reporting.
//!
//! presage is a library in the Parsec family: a grammar is built by
//! composing small parser values, and running one against an input yields
//! either a value or a structured error with a line and column. Two rules
//! define the family and this crate:
//!
//! -   **Choice is predictive.** `or(p, q)` tries `q` only if `p` failed
//!     *without consuming input*. A branch that consumes has committed, so
//!     grammars run without backtracking by default and errors point at the
//!     real problem instead of the last alternative. Backtracking is opt-in,
//!     one branch at a time, with [`attempt`](parsers::attempt).
//!
//! -   **Errors merge.** When alternatives fail, the error that got furthest
//!     through the input wins, and failures at the same spot pool their
//!     "expected" messages. The rendered result reads like
//!     `expecting digit or letter` with a position, for free.
//!
//! # A taste
//!
//! ```
//! use presage::{parse, parsers::*};
//!
//! // A key=value line, like "retries=3".
//! let key = to_str(many1(alpha()));
//! let entry = and(skip(key, char('=')), uint::<u32>());
//!
//! assert_eq!(parse(&entry, "retries=3").unwrap().value, ("retries".to_string(), 3));
//!
//! let err = parse(&entry, "retries=x").unwrap_err();
//! assert_eq!(
//!     err.error.to_string(),
//!     "at line 1, column 9:\nunexpected \"x\"\nexpecting integer",
//! );
//! ```
//!
//! # Building blocks
//!
//! The [`parsers`] module has the whole vocabulary; the important ones:
//!
//! -   Characters and text: [`char`](parsers::char), [`string`](parsers::string),
//!     [`one_of`](parsers::one_of), [`alpha`](parsers::alpha),
//!     [`digit`](parsers::digit), [`newline`](parsers::newline),
//!     [`uint`](parsers::uint), [`regex_match`](parsers::regex_match).
//! -   Composition: [`or`](parsers::or), [`choice`](parsers::choice), tuples
//!     of parsers for fixed sequences, [`map`](parsers::map),
//!     [`bind`](parsers::bind), [`with`](parsers::with)/[`skip`](parsers::skip),
//!     [`between`](parsers::between), [`optional`](parsers::optional).
//! -   Repetition: [`many`](parsers::many), [`many1`](parsers::many1),
//!     [`sep_by`](parsers::sep_by), [`many_till`](parsers::many_till),
//!     [`count`](parsers::count), and the
//!     [`chainl1`](parsers::chainl1)/[`chainr1`](parsers::chainr1) operator
//!     chains.
//! -   Control: [`attempt`](parsers::attempt),
//!     [`look_ahead`](parsers::look_ahead),
//!     [`not_followed_by`](parsers::not_followed_by),
//!     [`label`](parsers::label) for naming what a failed parser wanted.
//!
//! Parsers work over any [`Stream`] of cloneable tokens: `&str` streams
//! `char`s, `&[T]` streams tokens of your own type (handy downstream of a
//! lexer), and [`from_iter`] adapts any cloneable iterator. Position
//! tracking, tab stops, source names, and an arbitrary user-state value are
//! configured per run with [`Options`] and [`parse_with`]; [`parse`] is the
//! no-frills entry point.
//!
//! # Committing and errors
//!
//! The engine tracks one bit per parser invocation: did it consume input?
//! That bit is what `or` consults, what [`Failure::consumed`] reports, and
//! what [`attempt`](parsers::attempt) erases. Getting it right in every
//! combinator is the point of this library; grammars built from these pieces
//! inherit it without thinking.
//!
//! A parser that could loop forever (`many` of something that matches
//! emptily) is a bug in the grammar, not an input problem, and panics with a
//! message saying so rather than hanging.

#![deny(missing_docs)]

mod error;
mod pos;
mod reply;
mod run;
mod state;
#[cfg(test)]
mod testing;
mod traits;

pub mod parsers;

pub use error::{ErrorItem, Info, ParseError};
pub use pos::SourcePos;
pub use reply::Reply;
pub use run::{parse, parse_with, Failure, Options, ParseResult, Success};
pub use state::{from_iter, IterStream, State, Stream};
pub use traits::{BoxParser, Parser};

/// The common imports in one line: `use presage::prelude::*;`.
///
/// Brings in the [`Parser`] trait, the entry points, and every builder from
/// [`parsers`].
pub mod prelude {
    pub use crate::parsers::*;
    pub use crate::run::{parse, parse_with, Options};
    pub use crate::traits::Parser;
}
