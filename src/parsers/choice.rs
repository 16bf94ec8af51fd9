//! Predictive alternatives.

use crate::error::ParseError;
use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// The type of parser returned by [`or()`].
#[derive(Clone, Copy)]
pub struct OrParser<P, Q> {
    first: P,
    second: Q,
}

impl<S, U, P, Q> Parser<S, U> for OrParser<P, Q>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
    Q: Parser<S, U, Output = P::Output>,
{
    type Output = P::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, P::Output> {
        let saved = state.clone();
        match self.first.run(state) {
            Reply::EmptyErr(err1) => match self.second.run(saved) {
                Reply::EmptyOk(value, next, err2) => {
                    Reply::EmptyOk(value, next, err1.merge(err2))
                }
                Reply::EmptyErr(err2) => Reply::EmptyErr(err1.merge(err2)),
                committed => committed,
            },
            committed => committed,
        }
    }
}

/// Try `first`; if it fails without consuming input, try `second`.
///
/// The choice is predictive: once `first` consumes a token it has committed,
/// and its failure is the failure of the whole alternative. Wrap `first` in
/// [`attempt`](crate::parsers::attempt) to roll that commitment back.
///
/// When both branches fail empty, their errors merge, so the report lists
/// everything that would have been acceptable here.
///
/// ```
/// use presage::{parse, parsers::*};
///
/// let p = or(string("yes"), string("no"));
/// assert!(parse(&p, "yes").is_ok());
/// assert!(parse(&p, "no").is_ok());
/// assert!(parse(&p, "maybe").is_err());
/// ```
pub fn or<P, Q>(first: P, second: Q) -> OrParser<P, Q> {
    OrParser { first, second }
}

/// The type of parser returned by [`choice()`].
#[derive(Clone, Copy)]
pub struct ChoiceParser<A> {
    alternatives: A,
}

/// Try each parser in the tuple in order, committing to the first one that
/// consumes input or succeeds.
///
/// `choice((a, b, c))` behaves exactly like `or(a, or(b, c))`; the tuple
/// form just reads better for longer alternative lists. Tuples of 2 through
/// 12 parsers are supported, and every element must produce the same output
/// type. The empty tuple is deliberately not a parser.
///
/// ```
/// use presage::{parse, parsers::*};
///
/// let p = choice((string("red"), string("green"), string("blue")));
/// assert!(parse(&p, "green").is_ok());
/// ```
pub fn choice<A>(alternatives: A) -> ChoiceParser<A> {
    ChoiceParser { alternatives }
}

macro_rules! impl_choice {
    ( $( $p:ident ),+ ; $first:ident ) => {
        impl<S, U, $first, $( $p ),+> Parser<S, U> for ChoiceParser<($first, $( $p ),+)>
        where
            S: Stream,
            U: Clone,
            $first: Parser<S, U>,
            $( $p: Parser<S, U, Output = $first::Output> ),+
        {
            type Output = $first::Output;

            #[allow(non_snake_case)]
            fn run(&self, state: State<S, U>) -> Reply<S, U, Self::Output> {
                let ($first, $( $p ),+) = &self.alternatives;
                let mut collected: Option<ParseError> = None;
                let merge_into = |acc: Option<ParseError>, err: ParseError| match acc {
                    None => err,
                    Some(prev) => prev.merge(err),
                };

                match $first.run(state.clone()) {
                    Reply::EmptyErr(err) => collected = Some(merge_into(collected.take(), err)),
                    Reply::EmptyOk(value, next, err) => {
                        return Reply::EmptyOk(value, next, merge_into(collected.take(), err));
                    }
                    committed => return committed,
                }
                $(
                    match $p.run(state.clone()) {
                        Reply::EmptyErr(err) => collected = Some(merge_into(collected.take(), err)),
                        Reply::EmptyOk(value, next, err) => {
                            return Reply::EmptyOk(value, next, merge_into(collected.take(), err));
                        }
                        committed => return committed,
                    }
                )+
                Reply::EmptyErr(collected.expect("at least one alternative ran"))
            }
        }
    };
}

impl_choice!(P1; P0);
impl_choice!(P1, P2; P0);
impl_choice!(P1, P2, P3; P0);
impl_choice!(P1, P2, P3, P4; P0);
impl_choice!(P1, P2, P3, P4, P5; P0);
impl_choice!(P1, P2, P3, P4, P5, P6; P0);
impl_choice!(P1, P2, P3, P4, P5, P6, P7; P0);
impl_choice!(P1, P2, P3, P4, P5, P6, P7, P8; P0);
impl_choice!(P1, P2, P3, P4, P5, P6, P7, P8, P9; P0);
impl_choice!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10; P0);
impl_choice!(P1, P2, P3, P4, P5, P6, P7, P8, P9, P10, P11; P0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{attempt, string};
    use crate::testing::*;

    #[test]
    fn test_or_prefers_first() {
        let p = or(string("a"), string("ab"));
        assert_parse_eq(p, "a", "a".to_string());
        // "ab" never matches: the first branch wins and leaves the b behind,
        // which only shows up when something demands the whole input.
    }

    #[test]
    fn test_or_merges_empty_failures() {
        let p = or(string("left"), string("right"));
        assert_parse_error(
            p,
            "up",
            "at line 1, column 1:\nunexpected \"u\"\nexpecting \"left\" or \"right\"",
        );
    }

    #[test]
    fn test_or_commits_after_consumption() {
        // Both start with 'f'; the first consumes it and commits.
        let p = or(string("fork"), string("fish"));
        let failure = parse_failure(p, "fish");
        assert!(failure.consumed);

        let p = or(attempt(string("fork")), string("fish"));
        assert_parse_eq(p, "fish", "fish".to_string());
    }

    #[test]
    fn test_choice_tuple() {
        let p = choice((string("red"), string("green"), string("blue")));
        assert_parse_eq(p, "blue", "blue".to_string());
        assert_parse_error(
            p,
            "pink",
            "at line 1, column 1:\nunexpected \"p\"\nexpecting \"blue\" or \"green\" or \"red\"",
        );
    }
}
