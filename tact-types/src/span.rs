use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::{cmp, fmt, sync::Arc};

use crate::SourceId;

/// A 1-based line and column position inside a source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Represents a span of the source code in a specific file.
///
/// A span shares ownership of the whole source text, so it stays valid after
/// the concrete parse tree it was taken from has been dropped.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Span {
    // The source text this span is a slice of.
    src: Arc<str>,
    // The byte position in the string of the start of the span.
    start: usize,
    // The byte position in the string of the end of the span.
    end: usize,
    // A reference counted pointer to the file from which this span originated.
    source_id: Option<SourceId>,
}

impl Span {
    /// Builds a span over `src[start..end]`. Returns `None` if the range is out of
    /// bounds or does not fall on char boundaries.
    pub fn new(
        src: Arc<str>,
        start: usize,
        end: usize,
        source_id: Option<SourceId>,
    ) -> Option<Span> {
        let _ = src.get(start..end)?;
        Some(Span {
            src,
            start,
            end,
            source_id,
        })
    }

    /// Creates an empty [Span], which points to no source.
    pub fn dummy() -> Span {
        Span {
            src: Arc::from(""),
            start: 0,
            end: 0,
            source_id: None,
        }
    }

    pub fn source_id(&self) -> Option<&SourceId> {
        self.source_id.as_ref()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn as_str(&self) -> &str {
        &self.src[self.start..self.end]
    }

    /// Returns the start and end positions of this span as line and column pairs.
    pub fn line_col(&self) -> (LineCol, LineCol) {
        (
            line_col_at(&self.src, self.start),
            line_col_at(&self.src, self.end),
        )
    }

    /// Returns a span covering both `s1` and `s2` and everything between them.
    ///
    /// Both spans must come from the same source. If they do not, `s1` is returned.
    pub fn join(s1: Span, s2: &Span) -> Span {
        if !Arc::ptr_eq(&s1.src, &s2.src) || s1.source_id != s2.source_id {
            return s1;
        }
        Span {
            start: cmp::min(s1.start, s2.start),
            end: cmp::max(s1.end, s2.end),
            ..s1
        }
    }

    /// Returns a new span with the leading and trailing whitespace removed.
    pub fn trim(self) -> Span {
        let text = self.as_str();
        let start_offset = text.len() - text.trim_start().len();
        let end_offset = text.len() - text.trim_end().len();
        let start = self.start + start_offset;
        let end = cmp::max(start, self.end - end_offset);
        Span {
            start,
            end,
            ..self
        }
    }
}

fn line_col_at(src: &str, pos: usize) -> LineCol {
    let pos = cmp::min(pos, src.len());
    let before = &src[..floor_char_boundary(src, pos)];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|ix| ix + 1).unwrap_or(0);
    let col = before[line_start..].chars().count() + 1;
    LineCol { line, col }
}

fn floor_char_boundary(src: &str, mut pos: usize) -> usize {
    while !src.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("src (ptr)", &self.src.as_ptr())
            .field("source_id", &self.source_id)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("as_str()", &self.as_str())
            .finish()
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Span", 3)?;
        state.serialize_field("source_id", &self.source_id)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.end()
    }
}

pub trait Spanned {
    fn span(&self) -> Span;
}

impl<T: Spanned> Spanned for Box<T> {
    fn span(&self) -> Span {
        (**self).span()
    }
}
