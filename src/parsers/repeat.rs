//! Repetition: `many`, `many1`, `skip_many`, `count`, `many_till`.
//!
//! All of these run as loops with explicit accumulators. The grammar-level
//! recursion in their textbook definitions would burn a stack frame per
//! matched element, and repetition is exactly where element counts get big.

use crate::error::ParseError;
use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// A parser that succeeds without consuming has been handed to a repetition
/// combinator. Repeating it would never advance, so this is a bug in the
/// grammar, not a parse failure.
pub(crate) fn zero_width_repeat(combinator: &str) -> ! {
    panic!(
        "`{}` applied to a parser that matches without consuming input; \
         repeating it would loop forever",
        combinator
    )
}

fn finish<S, U, T>(
    consumed: bool,
    value: T,
    state: State<S, U>,
    err: ParseError,
) -> Reply<S, U, T> {
    if consumed {
        Reply::ConsumedOk(value, state, err)
    } else {
        Reply::EmptyOk(value, state, err)
    }
}

/// The type of parser returned by [`many()`].
#[derive(Clone, Copy)]
pub struct ManyParser<P> {
    parser: P,
}

impl<S, U, P> Parser<S, U> for ManyParser<P>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
{
    type Output = Vec<P::Output>;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Vec<P::Output>> {
        let mut acc = Vec::new();
        let mut consumed = false;
        let mut cur = state;
        loop {
            match self.parser.run(cur.clone()) {
                Reply::ConsumedOk(value, next, _) => {
                    consumed = true;
                    acc.push(value);
                    cur = next;
                }
                // The error of the iteration that stopped the loop rides
                // along as the residue of the successful repetition.
                Reply::EmptyErr(err) => return finish(consumed, acc, cur, err),
                Reply::ConsumedErr(err) => return Reply::ConsumedErr(err),
                Reply::EmptyOk(..) => zero_width_repeat("many"),
            }
        }
    }
}

/// Match `parser` zero or more times, collecting the values in a `Vec`.
///
/// The repetition is greedy and commits as it goes: a match that consumes
/// input is kept, and a later failure does not give elements back. Matching
/// zero times succeeds without consuming.
///
/// # Panics
///
/// If `parser` ever succeeds without consuming input. Such a parser would
/// match forever; rejecting it loudly beats hanging.
pub fn many<P>(parser: P) -> ManyParser<P> {
    ManyParser { parser }
}

/// The type of parser returned by [`many1()`].
#[derive(Clone, Copy)]
pub struct Many1Parser<P> {
    parser: P,
}

impl<S, U, P> Parser<S, U> for Many1Parser<P>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
{
    type Output = Vec<P::Output>;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Vec<P::Output>> {
        self.parser.run(state).then(|first, next| {
            many(&self.parser).run(next).map(|rest| {
                let mut all = Vec::with_capacity(rest.len() + 1);
                all.push(first);
                all.extend(rest);
                all
            })
        })
    }
}

/// Match `parser` one or more times. Like [`many()`], but failing to match
/// at all is a failure.
pub fn many1<P>(parser: P) -> Many1Parser<P> {
    Many1Parser { parser }
}

/// The type of parser returned by [`skip_many()`].
#[derive(Clone, Copy)]
pub struct SkipManyParser<P> {
    parser: P,
}

impl<S, U, P> Parser<S, U> for SkipManyParser<P>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
{
    type Output = ();

    fn run(&self, state: State<S, U>) -> Reply<S, U, ()> {
        let mut consumed = false;
        let mut cur = state;
        loop {
            match self.parser.run(cur.clone()) {
                Reply::ConsumedOk(_, next, _) => {
                    consumed = true;
                    cur = next;
                }
                Reply::EmptyErr(err) => return finish(consumed, (), cur, err),
                Reply::ConsumedErr(err) => return Reply::ConsumedErr(err),
                Reply::EmptyOk(..) => zero_width_repeat("skip_many"),
            }
        }
    }
}

/// Match `parser` zero or more times and throw the values away.
///
/// Same commitment and zero-width rules as [`many()`].
pub fn skip_many<P>(parser: P) -> SkipManyParser<P> {
    SkipManyParser { parser }
}

/// The type of parser returned by [`skip_many1()`].
#[derive(Clone, Copy)]
pub struct SkipMany1Parser<P> {
    parser: P,
}

impl<S, U, P> Parser<S, U> for SkipMany1Parser<P>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
{
    type Output = ();

    fn run(&self, state: State<S, U>) -> Reply<S, U, ()> {
        self.parser
            .run(state)
            .then(|_, next| skip_many(&self.parser).run(next))
    }
}

/// Match `parser` one or more times and throw the values away.
pub fn skip_many1<P>(parser: P) -> SkipMany1Parser<P> {
    SkipMany1Parser { parser }
}

/// The type of parser returned by [`count()`].
#[derive(Clone, Copy)]
pub struct CountParser<P> {
    parser: P,
    n: usize,
}

impl<S, U, P> Parser<S, U> for CountParser<P>
where
    S: Stream,
    P: Parser<S, U>,
{
    type Output = Vec<P::Output>;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Vec<P::Output>> {
        let mut residual = state.empty_error();
        let mut acc = Vec::with_capacity(self.n);
        let mut consumed = false;
        let mut cur = state;
        for _ in 0..self.n {
            match self.parser.run(cur) {
                Reply::ConsumedOk(value, next, err) => {
                    consumed = true;
                    acc.push(value);
                    residual = err;
                    cur = next;
                }
                Reply::EmptyOk(value, next, err) => {
                    acc.push(value);
                    residual = residual.merge(err);
                    cur = next;
                }
                Reply::ConsumedErr(err) => return Reply::ConsumedErr(err),
                Reply::EmptyErr(err) => {
                    let err = residual.merge(err);
                    return if consumed {
                        Reply::ConsumedErr(err)
                    } else {
                        Reply::EmptyErr(err)
                    };
                }
            }
        }
        finish(consumed, acc, cur, residual)
    }
}

/// Match `parser` exactly `n` times, collecting the values.
///
/// `count(0, p)` succeeds with an empty vector without touching the input.
/// Unlike [`many()`], matching fewer than `n` times is a failure, and a
/// zero-width `parser` is fine here because the iteration count is fixed.
pub fn count<P>(n: usize, parser: P) -> CountParser<P> {
    CountParser { parser, n }
}

/// The type of parser returned by [`many_till()`].
#[derive(Clone, Copy)]
pub struct ManyTillParser<P, E> {
    parser: P,
    end: E,
}

impl<S, U, P, E> Parser<S, U> for ManyTillParser<P, E>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
    E: Parser<S, U>,
{
    type Output = Vec<P::Output>;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Vec<P::Output>> {
        let mut acc = Vec::new();
        let mut consumed = false;
        let mut cur = state;
        loop {
            match self.end.run(cur.clone()) {
                Reply::ConsumedOk(_, next, err) => return Reply::ConsumedOk(acc, next, err),
                Reply::EmptyOk(_, next, err) => return finish(consumed, acc, next, err),
                Reply::ConsumedErr(err) => return Reply::ConsumedErr(err),
                Reply::EmptyErr(end_err) => match self.parser.run(cur) {
                    Reply::ConsumedOk(value, next, _) => {
                        consumed = true;
                        acc.push(value);
                        cur = next;
                    }
                    Reply::EmptyOk(..) => zero_width_repeat("many_till"),
                    Reply::ConsumedErr(err) => return Reply::ConsumedErr(err),
                    Reply::EmptyErr(p_err) => {
                        let err = end_err.merge(p_err);
                        return if consumed {
                            Reply::ConsumedErr(err)
                        } else {
                            Reply::EmptyErr(err)
                        };
                    }
                },
            }
        }
    }
}

/// Match `parser` repeatedly until `end` matches, consuming both.
///
/// `end` is tried first at each step, so `parser` never sees the terminator.
/// The values of `parser` are collected; the value of `end` is discarded.
///
/// ```
/// use presage::{parse, parsers::*};
///
/// let comment = with(string("//"), many_till(any_char(), newline()));
/// assert_eq!(
///     parse(&comment, "// hi\nrest").unwrap().value,
///     vec![' ', 'h', 'i'],
/// );
/// ```
pub fn many_till<P, E>(parser: P, end: E) -> ManyTillParser<P, E> {
    ManyTillParser { parser, end }
}
