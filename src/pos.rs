//! Line and column tracking for error reporting.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A location in the input: a line and column, with an optional source name.
///
/// Lines and columns start at 1. The tab width used by [`SourcePos::advance`]
/// travels with the position so that every position derived from one parse
/// agrees on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourcePos {
    source: Option<Arc<str>>,
    line: u32,
    column: u32,
    tab_width: u32,
}

/// Default tab width, matching the Parsec convention.
pub const DEFAULT_TAB_WIDTH: u32 = 8;

impl SourcePos {
    /// The position at line 1, column 1 with no source name.
    pub fn new() -> SourcePos {
        SourcePos {
            source: None,
            line: 1,
            column: 1,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    /// Same position, tagged with a source name for error messages.
    pub fn with_source(mut self, name: impl Into<Arc<str>>) -> SourcePos {
        self.source = Some(name.into());
        self
    }

    /// Same position with a different tab width.
    pub fn with_tab_width(mut self, width: u32) -> SourcePos {
        assert!(width > 0, "tab width must be at least 1");
        self.tab_width = width;
        self
    }

    /// Same source and tab width, but at the given line and column.
    pub fn at(mut self, line: u32, column: u32) -> SourcePos {
        self.line = line;
        self.column = column;
        self
    }

    /// 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column number.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The source name, if one was supplied.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The position after consuming `c`.
    ///
    /// A newline moves to column 1 of the next line. A tab moves to the next
    /// tab stop, `column + w - ((column - 1) mod w)` for tab width `w`. Any
    /// other character moves one column right.
    pub fn advance(&self, c: char) -> SourcePos {
        let mut next = self.clone();
        match c {
            '\n' => {
                next.line += 1;
                next.column = 1;
            }
            '\t' => {
                let w = self.tab_width;
                next.column = self.column + w - ((self.column - 1) % w);
            }
            _ => next.column += 1,
        }
        next
    }

    /// Compare two positions by location only, line first.
    ///
    /// Source names and tab widths are ignored; error merging cares about
    /// which error got further, nothing else.
    pub fn cmp_location(&self, other: &SourcePos) -> Ordering {
        (self.line, self.column).cmp(&(other.line, other.column))
    }
}

impl Default for SourcePos {
    fn default() -> SourcePos {
        SourcePos::new()
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.source {
            write!(f, "{}, ", name)?;
        }
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
