//! Mapping parser output.

use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// The type of parser returned by [`map()`].
#[derive(Clone, Copy)]
pub struct MapParser<P, F> {
    parser: P,
    f: F,
}

impl<S, U, P, F, T> Parser<S, U> for MapParser<P, F>
where
    S: Stream,
    P: Parser<S, U>,
    F: Fn(P::Output) -> T,
{
    type Output = T;

    fn run(&self, state: State<S, U>) -> Reply<S, U, T> {
        self.parser.run(state).map(|value| (self.f)(value))
    }
}

/// Match the same input as `parser`, applying `f` to the produced value.
///
/// The reply is otherwise untouched: consumption, failure, and error
/// messages all come straight from `parser`.
pub fn map<P, F>(parser: P, f: F) -> MapParser<P, F> {
    MapParser { parser, f }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{any_token, digit};
    use crate::testing::*;

    #[test]
    fn test_map() {
        let p = map(digit(), |c: char| c.to_digit(10).unwrap());
        assert_parse_eq(p, "7", 7);

        let p = map(any_token(), |c: char| c.is_uppercase());
        assert_parse_eq(p, "Q", true);
    }
}
