//! The four-way outcome a parser reports.
//!
//! Every parser invocation ends in exactly one of four ways: it succeeded or
//! failed, and it consumed at least one token or none. Keeping the consumed
//! bit separate from success is what makes `or` predictive: a branch that
//! consumed input before failing has committed, and the alternative is not
//! tried.
//!
//! Successful replies also carry an error value. It is usually empty, but
//! after combinators like `many` or `optional` it holds the "expected"
//! messages from the branch that was not taken, so that a later failure at
//! the same position can report everything that would have been acceptable.

use crate::error::ParseError;
use crate::state::State;

/// The result of running a parser against a state.
#[derive(Debug)]
pub enum Reply<S, U, T> {
    /// Succeeded after consuming at least one token. The state has advanced
    /// past everything consumed; the error is the residual expected-set.
    ConsumedOk(T, State<S, U>, ParseError),
    /// Failed after consuming at least one token. The alternative of an `or`
    /// will not be tried.
    ConsumedErr(ParseError),
    /// Succeeded without consuming anything. The state is the caller's state
    /// unchanged.
    EmptyOk(T, State<S, U>, ParseError),
    /// Failed without consuming anything. Recoverable by `or`.
    EmptyErr(ParseError),
}

use Reply::{ConsumedErr, ConsumedOk, EmptyErr, EmptyOk};

impl<S, U, T> Reply<S, U, T> {
    /// True for the two error variants.
    pub fn is_err(&self) -> bool {
        matches!(self, ConsumedErr(_) | EmptyErr(_))
    }

    /// True for the two consumed variants.
    pub fn is_consumed(&self) -> bool {
        matches!(self, ConsumedOk(..) | ConsumedErr(_))
    }

    /// Apply `f` to the success value, leaving everything else alone.
    pub fn map<T2>(self, f: impl FnOnce(T) -> T2) -> Reply<S, U, T2> {
        match self {
            ConsumedOk(value, state, err) => ConsumedOk(f(value), state, err),
            ConsumedErr(err) => ConsumedErr(err),
            EmptyOk(value, state, err) => EmptyOk(f(value), state, err),
            EmptyErr(err) => EmptyErr(err),
        }
    }

    /// Run a continuation over this reply, combining the consumed bits and
    /// error residues of both halves.
    ///
    /// This is the one place the sequencing rules live; `bind`, pairs,
    /// tuples, and everything else sequential routes through it. The rules:
    ///
    /// - Errors stop the sequence and pass through.
    /// - Consumption on either side makes the whole consumed.
    /// - When the second half ends where the first half stopped (that is,
    ///   without consuming), the first half's residual error is merged in,
    ///   so "expected" messages from earlier in the sequence survive to be
    ///   reported.
    pub fn then<T2>(
        self,
        f: impl FnOnce(T, State<S, U>) -> Reply<S, U, T2>,
    ) -> Reply<S, U, T2> {
        match self {
            ConsumedOk(value, state, err1) => match f(value, state) {
                ConsumedOk(v, s, err2) => ConsumedOk(v, s, err2),
                ConsumedErr(err2) => ConsumedErr(err2),
                EmptyOk(v, s, err2) => ConsumedOk(v, s, err1.merge(err2)),
                EmptyErr(err2) => ConsumedErr(err1.merge(err2)),
            },
            EmptyOk(value, state, err1) => {
                if err1.is_empty() {
                    f(value, state)
                } else {
                    match f(value, state) {
                        ConsumedOk(v, s, err2) => ConsumedOk(v, s, err2),
                        ConsumedErr(err2) => ConsumedErr(err2),
                        EmptyOk(v, s, err2) => EmptyOk(v, s, err1.merge(err2)),
                        EmptyErr(err2) => EmptyErr(err1.merge(err2)),
                    }
                }
            }
            ConsumedErr(err) => ConsumedErr(err),
            EmptyErr(err) => EmptyErr(err),
        }
    }
}
