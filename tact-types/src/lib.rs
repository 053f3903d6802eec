use serde::Serialize;
use std::fmt;

pub mod ident;
pub use ident::*;

pub mod source_engine;
pub use source_engine::*;

pub mod span;
pub use span::*;

/// A small integer handle for a source file, resolved to a path through the
/// [SourceEngine].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SourceId {
    id: u32,
}

impl SourceId {
    pub fn new(id: u32) -> Self {
        SourceId { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}
