//! Separated and terminated lists.

use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

use crate::parsers::repeat::{many, many1, zero_width_repeat, Many1Parser, ManyParser};
use crate::parsers::sequence::{skip, with, SkipParser};

/// The type of parser returned by [`sep_by1()`].
#[derive(Clone, Copy)]
pub struct SepBy1Parser<P, Q> {
    parser: P,
    sep: Q,
}

impl<S, U, P, Q> Parser<S, U> for SepBy1Parser<P, Q>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
    Q: Parser<S, U>,
{
    type Output = Vec<P::Output>;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Vec<P::Output>> {
        self.parser.run(state).then(|first, next| {
            many(with(&self.sep, &self.parser)).run(next).map(|rest| {
                let mut all = Vec::with_capacity(rest.len() + 1);
                all.push(first);
                all.extend(rest);
                all
            })
        })
    }
}

/// Match one or more `parser`, separated by `sep`. Only `parser`'s values
/// are collected.
///
/// No trailing separator is allowed: after consuming a separator, another
/// element must follow.
pub fn sep_by1<P, Q>(parser: P, sep: Q) -> SepBy1Parser<P, Q> {
    SepBy1Parser { parser, sep }
}

/// The type of parser returned by [`sep_by()`].
#[derive(Clone, Copy)]
pub struct SepByParser<P, Q> {
    parser: P,
    sep: Q,
}

impl<S, U, P, Q> Parser<S, U> for SepByParser<P, Q>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
    Q: Parser<S, U>,
{
    type Output = Vec<P::Output>;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Vec<P::Output>> {
        let saved = state.clone();
        match sep_by1(&self.parser, &self.sep).run(state) {
            Reply::EmptyErr(err) => Reply::EmptyOk(Vec::new(), saved, err),
            other => other,
        }
    }
}

/// Match zero or more `parser`, separated by `sep`.
///
/// ```
/// use presage::{parse, parsers::*};
///
/// let csv = sep_by(to_str(many1(digit())), char(','));
/// assert_eq!(parse(&csv, "1,22,333").unwrap().value, vec!["1", "22", "333"]);
/// assert_eq!(parse(&csv, "").unwrap().value, Vec::<String>::new());
/// ```
pub fn sep_by<P, Q>(parser: P, sep: Q) -> SepByParser<P, Q> {
    SepByParser { parser, sep }
}

/// The type of parser returned by [`end_by()`].
pub type EndByParser<P, Q> = ManyParser<SkipParser<P, Q>>;

/// Match zero or more `parser`, each terminated by `sep`.
pub fn end_by<P, Q>(parser: P, sep: Q) -> EndByParser<P, Q> {
    many(skip(parser, sep))
}

/// The type of parser returned by [`end_by1()`].
pub type EndBy1Parser<P, Q> = Many1Parser<SkipParser<P, Q>>;

/// Match one or more `parser`, each terminated by `sep`.
pub fn end_by1<P, Q>(parser: P, sep: Q) -> EndBy1Parser<P, Q> {
    many1(skip(parser, sep))
}

/// The type of parser returned by [`sep_end_by1()`].
#[derive(Clone, Copy)]
pub struct SepEndBy1Parser<P, Q> {
    parser: P,
    sep: Q,
}

impl<S, U, P, Q> Parser<S, U> for SepEndBy1Parser<P, Q>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
    Q: Parser<S, U>,
{
    type Output = Vec<P::Output>;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Vec<P::Output>> {
        self.parser.run(state).then(|first, next| {
            let mut acc = vec![first];
            let mut consumed = false;
            let mut cur = next;
            loop {
                let (sep_consumed, after_sep, sep_err) = match self.sep.run(cur.clone()) {
                    Reply::EmptyErr(err) => {
                        return finish(consumed, acc, cur, err);
                    }
                    Reply::ConsumedErr(err) => return Reply::ConsumedErr(err),
                    Reply::ConsumedOk(_, s, err) => (true, s, err),
                    Reply::EmptyOk(_, s, err) => (false, s, err),
                };
                consumed = consumed || sep_consumed;
                match self.parser.run(after_sep.clone()) {
                    Reply::ConsumedOk(value, s, _) => {
                        consumed = true;
                        acc.push(value);
                        cur = s;
                    }
                    // Even after a real separator, a zero-width element
                    // repeats forever: the next separator starts from the
                    // same spot.
                    Reply::EmptyOk(..) => zero_width_repeat("sep_end_by1"),
                    Reply::ConsumedErr(err) => return Reply::ConsumedErr(err),
                    Reply::EmptyErr(err) => {
                        // The separator was a trailing one; stop after it.
                        return finish(consumed, acc, after_sep, sep_err.merge(err));
                    }
                }
            }
        })
    }
}

fn finish<S, U, T>(
    consumed: bool,
    value: T,
    state: State<S, U>,
    err: crate::error::ParseError,
) -> Reply<S, U, T> {
    if consumed {
        Reply::ConsumedOk(value, state, err)
    } else {
        Reply::EmptyOk(value, state, err)
    }
}

/// Match one or more `parser` separated by `sep`, allowing one trailing
/// separator.
pub fn sep_end_by1<P, Q>(parser: P, sep: Q) -> SepEndBy1Parser<P, Q> {
    SepEndBy1Parser { parser, sep }
}

/// The type of parser returned by [`sep_end_by()`].
#[derive(Clone, Copy)]
pub struct SepEndByParser<P, Q> {
    parser: P,
    sep: Q,
}

impl<S, U, P, Q> Parser<S, U> for SepEndByParser<P, Q>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
    Q: Parser<S, U>,
{
    type Output = Vec<P::Output>;

    fn run(&self, state: State<S, U>) -> Reply<S, U, Vec<P::Output>> {
        let saved = state.clone();
        match sep_end_by1(&self.parser, &self.sep).run(state) {
            Reply::EmptyErr(err) => Reply::EmptyOk(Vec::new(), saved, err),
            other => other,
        }
    }
}

/// Match zero or more `parser` separated by `sep`, allowing one trailing
/// separator. The list form most config formats actually use.
pub fn sep_end_by<P, Q>(parser: P, sep: Q) -> SepEndByParser<P, Q> {
    SepEndByParser { parser, sep }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{char, digit};
    use crate::testing::*;

    #[test]
    fn test_sep_by() {
        let p = sep_by(digit(), char(','));
        assert_parse_eq(&p, "", Vec::<char>::new());
        assert_parse_eq(&p, "1", vec!['1']);
        assert_parse_eq(&p, "1,2,3", vec!['1', '2', '3']);

        // A separator with nothing after it is a committed failure.
        let failure = parse_failure(&p, "1,");
        assert!(failure.consumed);
    }

    #[test]
    fn test_sep_by1() {
        let p = sep_by1(digit(), char(','));
        assert_no_parse(&p, "");
        assert_parse_eq(&p, "7,8", vec!['7', '8']);
    }

    #[test]
    fn test_end_by() {
        let p = end_by(digit(), char(';'));
        assert_parse_eq(&p, "1;2;", vec!['1', '2']);
        assert_parse_eq(&p, "", Vec::<char>::new());

        // Elements must be terminated.
        let failure = parse_failure(&p, "1;2");
        assert!(failure.consumed);
    }

    #[test]
    fn test_sep_end_by() {
        let p = sep_end_by(digit(), char(','));
        assert_parse_eq(&p, "1,2,3", vec!['1', '2', '3']);
        assert_parse_eq(&p, "1,2,3,", vec!['1', '2', '3']);
        assert_parse_eq(&p, "", Vec::<char>::new());
        assert_no_parse(sep_end_by1(digit(), char(',')), "");
    }
}
