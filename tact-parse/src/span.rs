use std::sync::Arc;
use tact_types::{SourceId, Span};

/// Projects positions of the concrete parse tree onto [Span]s.
///
/// The produced spans share the source text through an `Arc`, so AST nodes keep
/// valid locations after the parse tree is gone.
#[derive(Clone, Debug)]
pub struct SpanFactory {
    src: Arc<str>,
    source_id: Option<SourceId>,
}

impl SpanFactory {
    pub fn new(src: Arc<str>, source_id: Option<SourceId>) -> SpanFactory {
        SpanFactory { src, source_id }
    }

    pub fn src(&self) -> &Arc<str> {
        &self.src
    }

    /// Returns the span of `span` in this factory's source. Pest spans always lie
    /// inside the text they were matched on.
    pub fn span(&self, span: pest::Span<'_>) -> Span {
        self.range(span.start(), span.end())
    }

    pub fn range(&self, start: usize, end: usize) -> Span {
        Span::new(self.src.clone(), start, end, self.source_id).unwrap_or_else(Span::dummy)
    }
}
