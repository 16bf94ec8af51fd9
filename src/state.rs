//! Input streams and the parser state threaded through every parser.

use crate::error::{ErrorItem, Info, ParseError};
use crate::pos::SourcePos;

/// A restartable sequence of tokens.
///
/// Streams are cheap to clone, and a clone replays from the point where it
/// was taken. That is all the backtracking machinery the library needs:
/// combinators that may need to restart simply keep a clone of the state.
///
/// Implementations are provided for `&str` (tokens are `char`s), `&[T]`, and
/// any cloneable iterator via [`from_iter`].
pub trait Stream: Clone {
    /// The token type.
    type Item: Clone;

    /// Split off the first token, returning it and the rest of the stream,
    /// or `None` at the end of input. The stream itself is not modified.
    fn uncons(&self) -> Option<(Self::Item, Self)>;
}

impl<'a> Stream for &'a str {
    type Item = char;

    fn uncons(&self) -> Option<(char, &'a str)> {
        let c = self.chars().next()?;
        Some((c, &self[c.len_utf8()..]))
    }
}

impl<'a, T: Clone> Stream for &'a [T] {
    type Item = T;

    fn uncons(&self) -> Option<(T, &'a [T])> {
        let (first, rest) = self.split_first()?;
        Some((first.clone(), rest))
    }
}

/// A cloneable iterator wrapped as a [`Stream`]. Returned by [`from_iter`].
#[derive(Clone, Debug)]
pub struct IterStream<I>(I);

/// Treat any cloneable iterator as a stream of tokens.
///
/// Cloning the stream clones the iterator, so each clone replays from its
/// own point. Lazy sources work as long as their iterators are `Clone`.
pub fn from_iter<I>(iter: I) -> IterStream<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    IterStream(iter)
}

impl<I> Stream for IterStream<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;

    fn uncons(&self) -> Option<(I::Item, IterStream<I>)> {
        let mut rest = self.0.clone();
        let item = rest.next()?;
        Some((item, IterStream(rest)))
    }
}

/// The parser's view of the world: remaining input, current position, and
/// the caller's user value.
///
/// States are immutable; consuming a token produces a new state. Cloning is
/// cheap for the usual stream types, and combinators that may restart keep a
/// clone rather than rewinding.
#[derive(Clone, Debug)]
pub struct State<S, U> {
    /// Remaining input.
    pub input: S,
    /// Position of the next token in `input`.
    pub pos: SourcePos,
    /// Caller-owned state, threaded through the parse untouched unless a
    /// user-state parser changes it.
    pub user: U,
}

impl<S: Stream, U> State<S, U> {
    /// Assemble a state. The runner does this from its options; tests can
    /// call it directly.
    pub fn new(input: S, pos: SourcePos, user: U) -> State<S, U> {
        State { input, pos, user }
    }

    /// An empty error at the current position.
    pub fn empty_error(&self) -> ParseError {
        ParseError::empty(self.pos.clone())
    }

    /// A system "unexpected token" error at the current position.
    pub fn sys_unexpected(&self, info: Info) -> ParseError {
        ParseError::new(self.pos.clone(), ErrorItem::SysUnexpected(info))
    }
}
