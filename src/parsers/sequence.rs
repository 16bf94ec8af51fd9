//! Matching things one after another.

use tuple_utils::Append;

use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// The type of parser returned by [`and()`].
#[derive(Clone, Copy)]
pub struct AndParser<P, Q> {
    first: P,
    second: Q,
}

impl<S, U, P, Q> Parser<S, U> for AndParser<P, Q>
where
    S: Stream,
    P: Parser<S, U>,
    Q: Parser<S, U>,
{
    type Output = (P::Output, Q::Output);

    fn run(&self, state: State<S, U>) -> Reply<S, U, (P::Output, Q::Output)> {
        self.first
            .run(state)
            .then(|a, next| self.second.run(next).map(|b| (a, b)))
    }
}

/// Match `first` then `second`, producing the pair of their values.
pub fn and<P, Q>(first: P, second: Q) -> AndParser<P, Q> {
    AndParser { first, second }
}

/// The type of parser returned by [`append()`].
#[derive(Clone, Copy)]
pub struct AppendParser<P, Q> {
    first: P,
    second: Q,
}

impl<S, U, P, Q> Parser<S, U> for AppendParser<P, Q>
where
    S: Stream,
    P: Parser<S, U>,
    Q: Parser<S, U>,
    P::Output: Append<Q::Output>,
{
    type Output = <P::Output as Append<Q::Output>>::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Self::Output> {
        self.first
            .run(state)
            .then(|a, next| self.second.run(next).map(|b| a.append(b)))
    }
}

/// Match `first` then `second`, where `first` produces a tuple; the second
/// value is appended to it.
///
/// This keeps long sequences flat where [`and()`] would nest:
/// `append(and(a, b), c)` produces `(A, B, C)` rather than `((A, B), C)`.
/// Plain tuples of parsers cover the common cases; `append` is for growing
/// a sequence one parser at a time.
pub fn append<P, Q>(first: P, second: Q) -> AppendParser<P, Q> {
    AppendParser { first, second }
}

/// The type of parser returned by [`with()`].
#[derive(Clone, Copy)]
pub struct WithParser<P, Q> {
    first: P,
    second: Q,
}

impl<S, U, P, Q> Parser<S, U> for WithParser<P, Q>
where
    S: Stream,
    P: Parser<S, U>,
    Q: Parser<S, U>,
{
    type Output = Q::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Q::Output> {
        self.first.run(state).then(|_, next| self.second.run(next))
    }
}

/// Match `first` then `second`, keeping only `second`'s value.
pub fn with<P, Q>(first: P, second: Q) -> WithParser<P, Q> {
    WithParser { first, second }
}

/// The type of parser returned by [`skip()`].
#[derive(Clone, Copy)]
pub struct SkipParser<P, Q> {
    first: P,
    second: Q,
}

impl<S, U, P, Q> Parser<S, U> for SkipParser<P, Q>
where
    S: Stream,
    P: Parser<S, U>,
    Q: Parser<S, U>,
{
    type Output = P::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, P::Output> {
        self.first
            .run(state)
            .then(|a, next| self.second.run(next).map(|_| a))
    }
}

/// Match `first` then `second`, keeping only `first`'s value.
pub fn skip<P, Q>(first: P, second: Q) -> SkipParser<P, Q> {
    SkipParser { first, second }
}

/// The type of parser returned by [`between()`].
pub type BetweenParser<O, P, C> = WithParser<O, SkipParser<P, C>>;

/// Match `open`, then `inner`, then `close`, keeping `inner`'s value.
///
/// ```
/// use presage::{parse, parsers::*};
///
/// let quoted = between(char('"'), many(none_of("\"")), char('"'));
/// assert_eq!(parse(&quoted, "\"hi\"").unwrap().value, vec!['h', 'i']);
/// ```
pub fn between<O, P, C>(open: O, inner: P, close: C) -> BetweenParser<O, P, C> {
    with(open, skip(inner, close))
}

/// The type of parser returned by [`optional()`].
#[derive(Clone, Copy)]
pub struct OptionalParser<P> {
    parser: P,
}

impl<S, U, P> Parser<S, U> for OptionalParser<P>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
{
    type Output = Option<P::Output>;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Option<P::Output>> {
        let saved = state.clone();
        match self.parser.run(state) {
            Reply::EmptyErr(err) => Reply::EmptyOk(None, saved, err),
            other => other.map(Some),
        }
    }
}

/// Match `parser` if possible, producing `Some`; otherwise succeed with
/// `None` without consuming.
///
/// Predictive like everything else: if `parser` consumes before failing,
/// the failure stands.
pub fn optional<P>(parser: P) -> OptionalParser<P> {
    OptionalParser { parser }
}

/// The type of parser returned by [`sequence()`].
#[derive(Clone)]
pub struct SequenceParser<P> {
    parsers: Vec<P>,
}

impl<S, U, P> Parser<S, U> for SequenceParser<P>
where
    S: Stream,
    P: Parser<S, U>,
{
    type Output = Vec<P::Output>;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Vec<P::Output>> {
        let mut residual = state.empty_error();
        let mut acc = Vec::with_capacity(self.parsers.len());
        let mut consumed = false;
        let mut cur = state;
        for parser in &self.parsers {
            match parser.run(cur) {
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
        if consumed {
            Reply::ConsumedOk(acc, cur, residual)
        } else {
            Reply::EmptyOk(acc, cur, residual)
        }
    }
}

/// Match each parser in the vector in order, collecting the values.
///
/// An empty vector succeeds with an empty `Vec` without consuming. For a
/// fixed, heterogeneous sequence use a tuple of parsers instead.
pub fn sequence<P>(parsers: Vec<P>) -> SequenceParser<P> {
    SequenceParser { parsers }
}

// Tuples of parsers match in order and produce the tuple of their values.
// The chain of `then` calls below is the same composition `bind` would
// build, so consumed/empty bookkeeping and error residues behave exactly
// like hand-written sequencing.
macro_rules! impl_tuple_parser {
    (@chain $state:expr, ($($done:ident),*), $p:ident $v:ident) => {
        $p.run($state).map(|$v| ($($done,)* $v,))
    };
    (@chain $state:expr, ($($done:ident),*), $p:ident $v:ident, $($rest:tt)+) => {
        $p.run($state).then(|$v, next| impl_tuple_parser!(@chain next, ($($done,)* $v), $($rest)+))
    };
    ($($P:ident $p:ident $v:ident),+) => {
        impl<S, U, $($P),+> Parser<S, U> for ($($P,)+)
        where
            S: Stream,
            $($P: Parser<S, U>),+
        {
            type Output = ($($P::Output,)+);

            fn run(&self, state: State<S, U>) -> Reply<S, U, Self::Output> {
                let ($($p,)+) = self;
                impl_tuple_parser!(@chain state, (), $($p $v),+)
            }
        }
    };
}

impl_tuple_parser!(P0 p0 v0, P1 p1 v1);
impl_tuple_parser!(P0 p0 v0, P1 p1 v1, P2 p2 v2);
impl_tuple_parser!(P0 p0 v0, P1 p1 v1, P2 p2 v2, P3 p3 v3);
impl_tuple_parser!(P0 p0 v0, P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4);
impl_tuple_parser!(P0 p0 v0, P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5);
impl_tuple_parser!(P0 p0 v0, P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6);
impl_tuple_parser!(
    P0 p0 v0, P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7
);
impl_tuple_parser!(
    P0 p0 v0, P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8
);
impl_tuple_parser!(
    P0 p0 v0, P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8,
    P9 p9 v9
);
impl_tuple_parser!(
    P0 p0 v0, P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8,
    P9 p9 v9, P10 p10 v10
);
impl_tuple_parser!(
    P0 p0 v0, P1 p1 v1, P2 p2 v2, P3 p3 v3, P4 p4 v4, P5 p5 v5, P6 p6 v6, P7 p7 v7, P8 p8 v8,
    P9 p9 v9, P10 p10 v10, P11 p11 v11
);
