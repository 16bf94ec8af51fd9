//! Opting out of the commit rule: `attempt`, `look_ahead`, `not_followed_by`.

use std::fmt;

use crate::error::{ErrorItem, Info, ParseError};
use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// The type of parser returned by [`attempt()`].
#[derive(Clone, Copy)]
pub struct AttemptParser<P> {
    parser: P,
}

impl<S, U, P> Parser<S, U> for AttemptParser<P>
where
    S: Stream,
    P: Parser<S, U>,
{
    type Output = P::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, P::Output> {
        match self.parser.run(state) {
            Reply::ConsumedErr(err) => Reply::EmptyErr(err),
            other => other,
        }
    }
}

/// Run `parser`, pretending on failure that no input was consumed.
///
/// This is the opt-in for unbounded lookahead. `or` refuses to try its
/// second branch once the first has consumed input; wrapping the first
/// branch in `attempt` lifts that restriction for exactly that branch:
///
/// ```
/// use presage::{parse, parsers::*};
///
/// let ident = to_str(many1(alpha()));
///
/// // "lexical" starts with "le", so the keyword branch consumes and
/// // commits; the bare choice fails.
/// let p = or(string("let"), ident.clone());
/// assert!(parse(&p, "lexical").is_err());
///
/// let p = or(attempt(string("let")), ident);
/// assert_eq!(parse(&p, "lexical").unwrap().value, "lexical");
/// ```
///
/// The reported error is unchanged, including its position; only the
/// consumed flag is erased. Successes pass through untouched.
pub fn attempt<P>(parser: P) -> AttemptParser<P> {
    AttemptParser { parser }
}

/// The type of parser returned by [`look_ahead()`].
#[derive(Clone, Copy)]
pub struct LookAheadParser<P> {
    parser: P,
}

impl<S, U, P> Parser<S, U> for LookAheadParser<P>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
{
    type Output = P::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, P::Output> {
        let saved = state.clone();
        match self.parser.run(state) {
            Reply::ConsumedOk(value, _, _) | Reply::EmptyOk(value, _, _) => {
                let err = saved.empty_error();
                Reply::EmptyOk(value, saved, err)
            }
            failed => failed,
        }
    }
}

/// Run `parser` and return its value without consuming anything.
///
/// Failures pass through as they are, so a branch that consumes before
/// failing still commits; combine with [`attempt`] for a fully
/// non-consuming probe.
pub fn look_ahead<P>(parser: P) -> LookAheadParser<P> {
    LookAheadParser { parser }
}

/// The type of parser returned by [`not_followed_by()`].
#[derive(Clone, Copy)]
pub struct NotFollowedByParser<P> {
    parser: P,
}

impl<S, U, P> Parser<S, U> for NotFollowedByParser<P>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
    P::Output: fmt::Display,
{
    type Output = ();

    fn run(&self, state: State<S, U>) -> Reply<S, U, ()> {
        let saved = state.clone();
        match self.parser.run(state) {
            Reply::ConsumedOk(value, _, _) | Reply::EmptyOk(value, _, _) => Reply::EmptyErr(
                ParseError::new(saved.pos, ErrorItem::Unexpected(Info::token(&value))),
            ),
            Reply::ConsumedErr(_) | Reply::EmptyErr(_) => {
                let err = saved.empty_error();
                Reply::EmptyOk((), saved, err)
            }
        }
    }
}

/// Succeed only if `parser` fails here. Never consumes input.
///
/// On success of the inner parser, fails with `unexpected` naming the value
/// that matched. The classic use is ruling out a longer match, like keywords
/// that must not continue as identifiers:
///
/// ```
/// use presage::{parse, parsers::*};
///
/// let keyword = skip(string("let"), not_followed_by(alphanumeric()));
/// assert!(parse(&keyword, "let x").is_ok());
/// assert!(parse(&keyword, "lets").is_err());
/// ```
pub fn not_followed_by<P>(parser: P) -> NotFollowedByParser<P> {
    NotFollowedByParser { parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{string, with};
    use crate::testing::*;

    #[test]
    fn test_attempt_erases_consumption_only() {
        let p = string("abc");
        let plain = parse_failure(&p, "abx");
        assert!(plain.consumed);

        let wrapped = parse_failure(attempt(&p), "abx");
        assert!(!wrapped.consumed);
        // The message is byte-identical; only the commit bit changed.
        assert_eq!(plain.error, wrapped.error);
    }

    #[test]
    fn test_look_ahead_keeps_state() {
        let p = with(look_ahead(string("ab")), string("abc"));
        assert_parse_eq(p, "abc", "abc".to_string());
    }

    #[test]
    fn test_not_followed_by() {
        assert_parse_eq(not_followed_by(string("no")), "yes", ());
        assert_parse_error(
            not_followed_by(string("no")),
            "no",
            "at line 1, column 1:\nunexpected \"no\"",
        );
    }
}
