//! Parse errors: construction, merging, labeling, and rendering.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::pos::SourcePos;

/// The payload of an error message: what was seen or hoped for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Info {
    /// The end of the input.
    EndOfInput,
    /// One input token, captured as its display text. Rendered quoted and
    /// escaped, so a token `d` prints as `"d"` and a newline as `"\n"`.
    Token(String),
    /// A plain description such as `letter` or `one of "abc"`. Rendered bare.
    Desc(Cow<'static, str>),
}

impl Info {
    /// Description text from anything string-like.
    pub fn desc(text: impl Into<Cow<'static, str>>) -> Info {
        Info::Desc(text.into())
    }

    /// Token text from the token's `Display` form.
    pub fn token(token: impl fmt::Display) -> Info {
        Info::Token(token.to_string())
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Info::EndOfInput => write!(f, "end of input"),
            Info::Token(text) => write!(f, "{:?}", text),
            Info::Desc(text) => write!(f, "{}", text),
        }
    }
}

/// One message inside a [`ParseError`]. The set of categories is closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorItem {
    /// The parser ran into a token (or the end of input) it could not use.
    /// Generated by the token primitive, and replaced wholesale when a user
    /// supplies their own [`Unexpected`](ErrorItem::Unexpected) message.
    SysUnexpected(Info),
    /// A user-supplied "unexpected" message.
    Unexpected(Info),
    /// Something the grammar would have accepted at this position. Several
    /// may accumulate when alternatives fail; rendering ORs them together.
    Expected(Info),
    /// A free-form failure message.
    Message(String),
}

/// A structured parse error: a position and the set of messages collected
/// there.
///
/// Errors are merged as alternatives fail. The merge keeps whichever error
/// got further through the input, and unions the message sets when both
/// stopped at the same place, so the rendered message reflects the branch
/// that made the most progress.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("at {pos}:\n{}", render_messages(.messages))]
pub struct ParseError {
    pos: SourcePos,
    messages: Vec<ErrorItem>,
}

impl ParseError {
    /// An error at `pos` with no messages yet.
    pub fn empty(pos: SourcePos) -> ParseError {
        ParseError {
            pos,
            messages: Vec::new(),
        }
    }

    /// A single-message error.
    pub fn new(pos: SourcePos, item: ErrorItem) -> ParseError {
        ParseError {
            pos,
            messages: vec![item],
        }
    }

    /// Where the error occurred.
    pub fn pos(&self) -> &SourcePos {
        &self.pos
    }

    /// The collected messages, in arrival order.
    pub fn messages(&self) -> &[ErrorItem] {
        &self.messages
    }

    /// True if no messages have been attached. Empty errors ride along with
    /// successful replies and vanish when merged with anything real.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Attach one more message, skipping exact duplicates.
    pub fn add(&mut self, item: ErrorItem) {
        if !self.messages.contains(&item) {
            self.messages.push(item);
        }
    }

    /// Shorthand for adding an [`Expected`](ErrorItem::Expected) message.
    pub fn expecting(mut self, info: Info) -> ParseError {
        self.add(ErrorItem::Expected(info));
        self
    }

    /// Combine two errors from alternative parses.
    ///
    /// An empty error defers to a non-empty one regardless of position.
    /// Otherwise the error at the greater location wins, and a tie keeps
    /// the union of both message sets.
    pub fn merge(mut self, other: ParseError) -> ParseError {
        if other.is_empty() && !self.is_empty() {
            return self;
        }
        if self.is_empty() && !other.is_empty() {
            return other;
        }
        match self.pos.cmp_location(&other.pos) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => {
                for item in other.messages {
                    self.add(item);
                }
                self
            }
        }
    }

    /// Replace the expected-set with a single label.
    ///
    /// All `Expected` messages are dropped; `label`, if given, becomes the
    /// sole one. Other message categories are untouched.
    pub fn set_expected(&mut self, label: Option<Info>) {
        self.messages
            .retain(|m| !matches!(m, ErrorItem::Expected(_)));
        if let Some(info) = label {
            self.messages.push(ErrorItem::Expected(info));
        }
    }
}

/// Render the message set into the lines below the position header.
///
/// The output is deterministic: expected items are sorted and de-duplicated,
/// and a user "unexpected" message suppresses the system-generated one.
fn render_messages(messages: &[ErrorItem]) -> String {
    if messages.is_empty() {
        return "unknown parse error".to_string();
    }

    let mut sys_unexpected = Vec::new();
    let mut unexpected = Vec::new();
    let mut expected = Vec::new();
    let mut free = Vec::new();
    for item in messages {
        match item {
            ErrorItem::SysUnexpected(info) => sys_unexpected.push(info.to_string()),
            ErrorItem::Unexpected(info) => unexpected.push(info.to_string()),
            ErrorItem::Expected(info) => expected.push(info.to_string()),
            ErrorItem::Message(text) => free.push(text.clone()),
        }
    }

    let mut lines = Vec::new();
    if !unexpected.is_empty() {
        unexpected.dedup();
        lines.push(format!("unexpected {}", join_or(&unexpected)));
    } else if let Some(first) = sys_unexpected.first() {
        lines.push(format!("unexpected {}", first));
    }
    if !expected.is_empty() {
        expected.sort();
        expected.dedup();
        lines.push(format!("expecting {}", join_or(&expected)));
    }
    lines.extend(free);
    lines.join("\n")
}

fn join_or(texts: &[String]) -> String {
    texts.join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: u32, column: u32) -> SourcePos {
        SourcePos::new().at(line, column)
    }

    #[test]
    fn test_merge_prefers_nonempty() {
        let empty = ParseError::empty(at(9, 9));
        let real = ParseError::new(at(1, 1), ErrorItem::Message("boom".into()));
        assert_eq!(empty.clone().merge(real.clone()), real);
        assert_eq!(real.clone().merge(empty), real);
    }

    #[test]
    fn test_merge_keeps_furthest() {
        let near = ParseError::new(at(1, 2), ErrorItem::Expected(Info::desc("digit")));
        let far = ParseError::new(at(1, 7), ErrorItem::Expected(Info::desc("letter")));
        assert_eq!(near.clone().merge(far.clone()), far);
        assert_eq!(far.clone().merge(near), far);
    }

    #[test]
    fn test_merge_unions_ties() {
        let a = ParseError::new(at(2, 3), ErrorItem::Expected(Info::desc("digit")));
        let b = ParseError::new(at(2, 3), ErrorItem::Expected(Info::desc("letter")));
        let merged = a.clone().merge(b).merge(a);
        assert_eq!(merged.messages().len(), 2);
    }

    #[test]
    fn test_set_expected_replaces_all() {
        let mut err = ParseError::new(at(1, 1), ErrorItem::SysUnexpected(Info::token('d')));
        err.add(ErrorItem::Expected(Info::desc("digit")));
        err.add(ErrorItem::Expected(Info::desc("letter")));
        err.set_expected(Some(Info::desc("identifier")));
        assert_eq!(
            err.to_string(),
            "at line 1, column 1:\nunexpected \"d\"\nexpecting identifier",
        );
    }

    #[test]
    fn test_render_shape() {
        let mut err = ParseError::new(at(1, 1), ErrorItem::SysUnexpected(Info::token('d')));
        err.add(ErrorItem::Expected(Info::desc("one of \"abc\"")));
        assert_eq!(
            err.to_string(),
            "at line 1, column 1:\nunexpected \"d\"\nexpecting one of \"abc\"",
        );
    }

    #[test]
    fn test_render_sorts_and_dedups_expected() {
        let mut err = ParseError::empty(at(1, 1));
        err.add(ErrorItem::Expected(Info::desc("letter")));
        err.add(ErrorItem::Expected(Info::desc("digit")));
        err.add(ErrorItem::Expected(Info::desc("letter")));
        assert_eq!(
            err.to_string(),
            "at line 1, column 1:\nexpecting digit or letter",
        );
    }

    #[test]
    fn test_render_escapes_tokens() {
        let err = ParseError::new(at(2, 1), ErrorItem::SysUnexpected(Info::token('\n')));
        assert_eq!(err.to_string(), "at line 2, column 1:\nunexpected \"\\n\"");
    }

    #[test]
    fn test_render_end_of_input_and_unknown() {
        let err = ParseError::new(at(1, 4), ErrorItem::SysUnexpected(Info::EndOfInput));
        assert_eq!(err.to_string(), "at line 1, column 4:\nunexpected end of input");

        let err = ParseError::empty(at(1, 1));
        assert_eq!(err.to_string(), "at line 1, column 1:\nunknown parse error");
    }

    #[test]
    fn test_user_unexpected_wins_over_system() {
        let mut err = ParseError::new(at(1, 1), ErrorItem::SysUnexpected(Info::token('x')));
        err.add(ErrorItem::Unexpected(Info::desc("trailing garbage")));
        assert_eq!(
            err.to_string(),
            "at line 1, column 1:\nunexpected trailing garbage",
        );
    }
}
