use crate::{span::Span, Spanned};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::{
    cmp::{Ord, Ordering},
    fmt,
    hash::{Hash, Hasher},
};

/// An [Ident] is an _identifier_ with a corresponding `span` from which it was derived.
/// It relies on a custom implementation of Hash which only looks at its textual name
/// representation, so that comparisons are not reliant on the span itself, which will
/// often be different.
#[derive(Clone)]
pub struct Ident {
    span: Span,
}

impl Ident {
    pub fn new(span: Span) -> Ident {
        Ident { span: span.trim() }
    }

    pub fn as_str(&self) -> &str {
        self.span.as_str()
    }
}

impl Hash for Ident {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialEq for Ident {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Ord for Ident {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Ident {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Ident {}

impl Spanned for Ident {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

impl Serialize for Ident {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Ident", 2)?;
        state.serialize_field("name", self.as_str())?;
        state.serialize_field("span", &self.span)?;
        state.end()
    }
}
