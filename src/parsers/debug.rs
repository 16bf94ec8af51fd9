//! Seeing what a parser is doing.

use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// The type of parser returned by [`traced()`].
#[derive(Clone, Copy)]
pub struct TracedParser<P> {
    name: &'static str,
    parser: P,
}

impl<S, U, P> Parser<S, U> for TracedParser<P>
where
    S: Stream,
    P: Parser<S, U>,
{
    type Output = P::Output;

    fn run(&self, state: State<S, U>) -> Reply<S, U, P::Output> {
        tracing::trace!(
            parser = self.name,
            line = state.pos.line(),
            column = state.pos.column(),
            "trying"
        );
        let reply = self.parser.run(state);
        let outcome = match &reply {
            Reply::ConsumedOk(..) => "consumed ok",
            Reply::ConsumedErr(_) => "consumed err",
            Reply::EmptyOk(..) => "empty ok",
            Reply::EmptyErr(_) => "empty err",
        };
        tracing::trace!(parser = self.name, outcome, "done");
        reply
    }
}

/// Wrap `parser` so that each invocation emits `tracing` events.
///
/// One event fires on entry with the position, and one on exit with the
/// outcome. The reply passes through untouched, so a `traced` wrapper can
/// be left in a grammar and costs nothing unless a subscriber is listening.
pub fn traced<P>(name: &'static str, parser: P) -> TracedParser<P> {
    TracedParser { name, parser }
}
