//! Operator chains for expression grammars.
//!
//! `chainl1(term, op)` parses `term op term op term ...` and folds the
//! values left-to-right with the functions the operator parser produces.
//! This is the standard cure for left recursion in grammars like
//! `expr ::= expr '+' term | term`, which a predictive parser cannot express
//! directly. Both directions scan iteratively; the right-associative fold
//! buffers operands first, so deep chains cost heap, not stack.

use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

use crate::parsers::choice::OrParser;
use crate::parsers::pure::PureParser;
use crate::parsers::repeat::zero_width_repeat;

/// The type of parser returned by [`chainl1()`].
#[derive(Clone, Copy)]
pub struct Chainl1Parser<P, Q> {
    term: P,
    op: Q,
}

impl<S, U, P, Q, F> Parser<S, U> for Chainl1Parser<P, Q>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
    Q: Parser<S, U, Output = F>,
    F: Fn(P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, P::Output> {
        self.term.run(state).then(|first, next| {
            let mut acc = first;
            let mut consumed = false;
            let mut residual = next.empty_error();
            let mut cur = next;
            loop {
                let (op_value, op_consumed, after_op, op_err) = match self.op.run(cur.clone()) {
                    Reply::EmptyErr(err) => {
                        let err = residual.merge(err);
                        return if consumed {
                            Reply::ConsumedOk(acc, cur, err)
                        } else {
                            Reply::EmptyOk(acc, cur, err)
                        };
                    }
                    Reply::ConsumedErr(err) => return Reply::ConsumedErr(err),
                    Reply::ConsumedOk(f, s, e) => (f, true, s, e),
                    Reply::EmptyOk(f, s, e) => (f, false, s, e),
                };
                match self.term.run(after_op) {
                    Reply::ConsumedOk(value, s, e) => {
                        acc = op_value(acc, value);
                        consumed = true;
                        residual = e;
                        cur = s;
                    }
                    Reply::EmptyOk(value, s, e) => {
                        if !op_consumed {
                            zero_width_repeat("chainl1");
                        }
                        acc = op_value(acc, value);
                        consumed = true;
                        residual = op_err.merge(e);
                        cur = s;
                    }
                    Reply::ConsumedErr(err) => return Reply::ConsumedErr(err),
                    Reply::EmptyErr(err) => {
                        // The op..term step failed without consuming past
                        // the operator. A consumed operator means the chain
                        // committed to another term and fails; an unconsumed
                        // one just ends the chain.
                        if op_consumed {
                            return Reply::ConsumedErr(op_err.merge(err));
                        }
                        let err = residual.merge(op_err.merge(err));
                        return if consumed {
                            Reply::ConsumedOk(acc, cur, err)
                        } else {
                            Reply::EmptyOk(acc, cur, err)
                        };
                    }
                }
            }
        })
    }
}

/// Match one or more `term` separated by `op`, folding left-to-right.
///
/// `op` produces the folding function, so different operators can fold
/// differently:
///
/// ```
/// use presage::{parse, parsers::*};
///
/// let num = map(to_str(many1(digit())), |s: String| s.parse::<i64>().unwrap());
/// let add_sub = or(
///     map(char('+'), |_| (|a, b| a + b) as fn(i64, i64) -> i64),
///     map(char('-'), |_| (|a, b| a - b) as fn(i64, i64) -> i64),
/// );
/// let expr = chainl1(num, add_sub);
///
/// assert_eq!(parse(&expr, "10-3-4").unwrap().value, 3); // (10 - 3) - 4
/// ```
pub fn chainl1<P, Q>(term: P, op: Q) -> Chainl1Parser<P, Q> {
    Chainl1Parser { term, op }
}

/// The type of parser returned by [`chainl()`].
pub type ChainlParser<P, Q, T> = OrParser<Chainl1Parser<P, Q>, PureParser<T>>;

/// Like [`chainl1()`], but an empty chain succeeds with `default`.
pub fn chainl<P, Q, T: Clone>(term: P, op: Q, default: T) -> ChainlParser<P, Q, T> {
    crate::parsers::or(chainl1(term, op), crate::parsers::pure(default))
}

/// The type of parser returned by [`chainr1()`].
#[derive(Clone, Copy)]
pub struct Chainr1Parser<P, Q> {
    term: P,
    op: Q,
}

impl<S, U, P, Q, F> Parser<S, U> for Chainr1Parser<P, Q>
where
    S: Stream,
    U: Clone,
    P: Parser<S, U>,
    Q: Parser<S, U, Output = F>,
    F: Fn(P::Output, P::Output) -> P::Output,
{
    type Output = P::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, P::Output> {
        self.term.run(state).then(|first, next| {
            // Scan every `op term` step into buffers, then fold right.
            let mut terms = vec![first];
            let mut ops: Vec<F> = Vec::new();
            let mut consumed = false;
            let mut residual = next.empty_error();
            let mut cur = next;
            let stop_err = loop {
                let (op_value, op_consumed, after_op, op_err) = match self.op.run(cur.clone()) {
                    Reply::EmptyErr(err) => break residual.merge(err),
                    Reply::ConsumedErr(err) => return Reply::ConsumedErr(err),
                    Reply::ConsumedOk(f, s, e) => (f, true, s, e),
                    Reply::EmptyOk(f, s, e) => (f, false, s, e),
                };
                match self.term.run(after_op) {
                    Reply::ConsumedOk(value, s, e) => {
                        ops.push(op_value);
                        terms.push(value);
                        consumed = true;
                        residual = e;
                        cur = s;
                    }
                    Reply::EmptyOk(value, s, e) => {
                        if !op_consumed {
                            zero_width_repeat("chainr1");
                        }
                        ops.push(op_value);
                        terms.push(value);
                        consumed = true;
                        residual = op_err.merge(e);
                        cur = s;
                    }
                    Reply::ConsumedErr(err) => return Reply::ConsumedErr(err),
                    Reply::EmptyErr(err) => {
                        if op_consumed {
                            return Reply::ConsumedErr(op_err.merge(err));
                        }
                        break residual.merge(op_err.merge(err));
                    }
                }
            };

            let mut acc = terms.pop().expect("chain scanned at least one term");
            while let Some(op) = ops.pop() {
                let left = terms.pop().expect("one term per op");
                acc = op(left, acc);
            }
            if consumed {
                Reply::ConsumedOk(acc, cur, stop_err)
            } else {
                Reply::EmptyOk(acc, cur, stop_err)
            }
        })
    }
}

/// Match one or more `term` separated by `op`, folding right-to-left.
///
/// The natural shape for right-associative operators like exponentiation:
/// `2^3^2` folds as `2^(3^2)`.
pub fn chainr1<P, Q>(term: P, op: Q) -> Chainr1Parser<P, Q> {
    Chainr1Parser { term, op }
}

/// The type of parser returned by [`chainr()`].
pub type ChainrParser<P, Q, T> = OrParser<Chainr1Parser<P, Q>, PureParser<T>>;

/// Like [`chainr1()`], but an empty chain succeeds with `default`.
pub fn chainr<P, Q, T: Clone>(term: P, op: Q, default: T) -> ChainrParser<P, Q, T> {
    crate::parsers::or(chainr1(term, op), crate::parsers::pure(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{char, digit, map, or, CharClassParser, CharParser, MapParser};
    use crate::testing::*;

    fn num() -> MapParser<CharClassParser, fn(char) -> i64> {
        let to_i64: fn(char) -> i64 = |c| c.to_digit(10).unwrap() as i64;
        map(digit(), to_i64)
    }

    type OpParser = MapParser<CharParser, fn(char) -> fn(i64, i64) -> i64>;

    fn sub() -> OpParser {
        let f: fn(char) -> fn(i64, i64) -> i64 = |_| |a, b| a - b;
        map(char('-'), f)
    }

    #[test]
    fn test_chainl1_folds_left() {
        let p = chainl1(num(), sub());
        assert_parse_eq(&p, "9", 9);
        assert_parse_eq(&p, "9-3-2", 4); // (9 - 3) - 2
        assert_no_parse(&p, "-3");
    }

    #[test]
    fn test_chainr1_folds_right() {
        let p = chainr1(num(), sub());
        assert_parse_eq(&p, "9-3-2", 8); // 9 - (3 - 2)
    }

    #[test]
    fn test_chain_trailing_op_fails_consumed() {
        let p = chainl1(num(), sub());
        let failure = parse_failure(&p, "9-3-");
        assert!(failure.consumed);
    }

    #[test]
    fn test_chainl_default() {
        let p = chainl(num(), sub(), 0);
        assert_parse_eq(&p, "", 0);
        assert_parse_eq(&p, "5-1", 4);
    }

    #[test]
    fn test_chain_mixed_ops() {
        let plus: fn(char) -> fn(i64, i64) -> i64 = |_| |a, b| a + b;
        let add: OpParser = map(char('+'), plus);
        let p = chainl1(num(), or(add, sub()));
        assert_parse_eq(&p, "1+2-4+8", 7);
    }
}
