//! Monadic sequencing: pick the next parser from the last value.

use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// The type of parser returned by [`bind()`].
#[derive(Clone, Copy)]
pub struct BindParser<P, F> {
    parser: P,
    f: F,
}

impl<S, U, P, F, Q> Parser<S, U> for BindParser<P, F>
where
    S: Stream,
    P: Parser<S, U>,
    F: Fn(P::Output) -> Q,
    Q: Parser<S, U>,
{
    type Output = Q::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Q::Output> {
        self.parser
            .run(state)
            .then(|value, next| (self.f)(value).run(next))
    }
}

/// Run `parser`, then run the parser that `f` builds from its value.
///
/// This is the general form of sequencing: the second grammar may depend on
/// the first value. Consumed/empty bookkeeping and error residues combine
/// per [`Reply::then`], so a failure right after `parser` still reports what
/// `parser` would also have accepted.
///
/// ```
/// use presage::{parse, parsers::*};
///
/// // A length-prefixed word: a digit saying how many letters follow.
/// let sized = bind(digit(), |d: char| count(d.to_digit(10).unwrap() as usize, alpha()));
/// assert_eq!(parse(&sized, "3abc").unwrap().value, vec!['a', 'b', 'c']);
/// assert!(parse(&sized, "3ab").is_err());
/// ```
pub fn bind<P, F>(parser: P, f: F) -> BindParser<P, F> {
    BindParser { parser, f }
}
