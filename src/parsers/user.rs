//! Reading and writing the user state threaded through a parse.
//!
//! The user value rides along in [`State`](crate::State) untouched unless
//! one of these parsers changes it. None of them consume input, so they
//! slot into a grammar anywhere without disturbing choice or repetition.

use crate::reply::Reply;
use crate::state::{State, Stream};
use crate::traits::Parser;

/// The type of parser returned by [`user_state()`].
#[derive(Clone, Copy)]
pub struct UserStateParser;

impl<S, U> Parser<S, U> for UserStateParser
where
    S: Stream,
    U: Clone,
{
    type Output = U;

    fn run(&self, state: State<S, U>) -> Reply<S, U, U> {
        let value = state.user.clone();
        let err = state.empty_error();
        Reply::EmptyOk(value, state, err)
    }
}

/// Yield a copy of the current user state.
pub fn user_state() -> UserStateParser {
    UserStateParser
}

/// The type of parser returned by [`set_user_state()`].
#[derive(Clone, Copy)]
pub struct SetUserStateParser<V> {
    value: V,
}

impl<S, V> Parser<S, V> for SetUserStateParser<V>
where
    S: Stream,
    V: Clone,
{
    type Output = ();

    fn run(&self, state: State<S, V>) -> Reply<S, V, ()> {
        let next = State::new(state.input, state.pos, self.value.clone());
        let err = next.empty_error();
        Reply::EmptyOk((), next, err)
    }
}

/// Replace the user state with `value`.
pub fn set_user_state<V: Clone>(value: V) -> SetUserStateParser<V> {
    SetUserStateParser { value }
}

/// The type of parser returned by [`update_user_state()`].
#[derive(Clone, Copy)]
pub struct UpdateUserStateParser<F> {
    f: F,
}

impl<S, U, F> Parser<S, U> for UpdateUserStateParser<F>
where
    S: Stream,
    F: Fn(U) -> U,
{
    type Output = ();

    fn run(&self, state: State<S, U>) -> Reply<S, U, ()> {
        let State { input, pos, user } = state;
        let next = State::new(input, pos, (self.f)(user));
        let err = next.empty_error();
        Reply::EmptyOk((), next, err)
    }
}

/// Transform the user state with `f`.
///
/// ```
/// use presage::{parse_with, parsers::*, Options};
///
/// // Count the vowels while matching a word.
/// let counted = with(
///     skip_many(or(
///         with(one_of("aeiou"), update_user_state(|n: u32| n + 1)),
///         map(alpha(), |_| ()),
///     )),
///     user_state(),
/// );
///
/// let reply = parse_with(&counted, "banana", Options::default().user_state(0u32)).unwrap();
/// assert_eq!(reply.value, 3);
/// ```
pub fn update_user_state<F>(f: F) -> UpdateUserStateParser<F> {
    UpdateUserStateParser { f }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{char, skip_many, with};
    use crate::run::{parse_with, Options};

    #[test]
    fn test_user_state_threading() {
        let p = with(
            skip_many(with(char('a'), update_user_state(|n: u32| n + 1))),
            user_state(),
        );
        let ok = parse_with(&p, "aaa", Options::default().user_state(0u32)).unwrap();
        assert_eq!(ok.value, 3);
        assert_eq!(ok.state.user, 3);
    }

    #[test]
    fn test_set_user_state() {
        let p = with(set_user_state("replaced"), user_state());
        let ok = parse_with(&p, "", Options::default().user_state("initial")).unwrap();
        assert_eq!(ok.value, "replaced");
        assert!(!ok.consumed);
    }
}
