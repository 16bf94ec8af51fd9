//! Helpers shared by the unit tests.

use std::fmt::Debug;

use crate::reply::Reply;
use crate::run::{parse, Failure, Success};
use crate::state::State;
use crate::traits::Parser;

#[track_caller]
pub fn assert_parse_eq<'s, P, E>(parser: P, input: &'s str, expected: E)
where
    P: Parser<&'s str, ()>,
    P::Output: PartialEq<E> + Debug,
    E: Debug,
{
    match parse(&parser, input) {
        Err(failure) => panic!("parse of {:?} failed: {}", input, failure.error),
        Ok(ok) => assert_eq!(ok.value, expected),
    }
}

#[track_caller]
pub fn assert_no_parse<'s, P>(parser: P, input: &'s str)
where
    P: Parser<&'s str, ()>,
    P::Output: Debug,
{
    if let Ok(ok) = parse(&parser, input) {
        panic!("parse of {:?} unexpectedly matched: {:?}", input, ok.value);
    }
}

#[track_caller]
pub fn assert_parse_error<'s, P>(parser: P, input: &'s str, expected_message: &str)
where
    P: Parser<&'s str, ()>,
    P::Output: Debug,
{
    let failure = parse_failure(parser, input);
    assert_eq!(failure.error.to_string(), expected_message);
}

#[track_caller]
pub fn parse_success<'s, P>(parser: P, input: &'s str) -> Success<P::Output, &'s str, ()>
where
    P: Parser<&'s str, ()>,
{
    match parse(&parser, input) {
        Err(failure) => panic!("parse of {:?} failed: {}", input, failure.error),
        Ok(ok) => ok,
    }
}

#[track_caller]
pub fn parse_failure<'s, P>(parser: P, input: &'s str) -> Failure
where
    P: Parser<&'s str, ()>,
{
    match parse(&parser, input) {
        Err(failure) => failure,
        Ok(_) => panic!("parse of {:?} unexpectedly succeeded", input),
    }
}

/// Run a parser directly against a hand-built state, for tests that poke at
/// the reply protocol itself.
pub fn run_state<S, U, P>(parser: &P, state: State<S, U>) -> Reply<S, U, P::Output>
where
    S: crate::state::Stream,
    P: Parser<S, U>,
{
    parser.run(state)
}
