//! The `Parser` trait.

use crate::reply::Reply;
use crate::state::{State, Stream};

/// A parser over streams of type `S` carrying user state `U`.
///
/// A parser is a pure value: running it against a [`State`] yields a
/// [`Reply`] and leaves the state untouched (states are immutable; advanced
/// states are new values). Parsers have no identity and compose by wrapping.
///
/// Implementations must uphold the reply protocol:
///
/// - exactly one reply per invocation;
/// - a consumed-ok reply's state has advanced past at least one token;
/// - an empty reply leaves the caller's state as it was;
/// - the error on a successful reply is the residual expected-set, merged
///   into a later failure at the same position.
///
/// Most users never implement this trait; the builder functions in
/// [`parsers`](crate::parsers) cover the grammar-building surface, and
/// [`parser`](crate::parsers::parser) wraps a plain function for anything
/// exotic.
pub trait Parser<S: Stream, U> {
    /// The type of value a successful parse produces.
    type Output;

    /// Run the parser at `state`.
    fn run(&self, state: State<S, U>) -> Reply<S, U, Self::Output>;
}

impl<'a, S, U, P> Parser<S, U> for &'a P
where
    S: Stream,
    P: Parser<S, U> + ?Sized,
{
    type Output = P::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Self::Output> {
        (**self).run(state)
    }
}

impl<S, U, P> Parser<S, U> for Box<P>
where
    S: Stream,
    P: Parser<S, U> + ?Sized,
{
    type Output = P::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Self::Output> {
        (**self).run(state)
    }
}

/// A boxed parser with its implementation type erased.
///
/// Handy for recursive grammars and for storing differently-shaped parsers
/// in one collection.
pub type BoxParser<'a, S, U, T> = Box<dyn Parser<S, U, Output = T> + 'a>;
