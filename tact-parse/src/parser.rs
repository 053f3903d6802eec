use crate::{name::check_variable_name, priv_prelude::*};
use pest_derive::Parser;
use std::collections::VecDeque;

#[derive(Parser)]
#[grammar = "tact.pest"]
pub struct TactParser;

/// State shared by every builder during one conversion: the error sink, the
/// span factory for the file being converted and the naming policy.
pub(crate) struct ParseCtx<'a> {
    handler: &'a Handler,
    spans: SpanFactory,
    validator: &'a dyn NameValidator,
}

impl<'a> ParseCtx<'a> {
    pub fn new(handler: &'a Handler, spans: SpanFactory, validator: &'a dyn NameValidator) -> Self {
        ParseCtx {
            handler,
            spans,
            validator,
        }
    }

    pub fn handler(&self) -> &'a Handler {
        self.handler
    }

    pub fn validator(&self) -> &'a dyn NameValidator {
        self.validator
    }

    pub fn parse<T: ParseFromPair>(&self, pair: Pair<'_, Rule>) -> Result<T, ErrorEmitted> {
        T::parse_from_pair(self, pair)
    }

    pub fn span(&self, pair: &Pair<'_, Rule>) -> Span {
        self.spans.span(pair.as_span())
    }

    /// A name that is only referenced here (a field, a method, a type).
    pub fn ident(&self, pair: &Pair<'_, Rule>) -> Ident {
        Ident::new(self.span(pair))
    }

    /// A name that is being declared, checked against the naming policy.
    pub fn declared_ident(&self, pair: &Pair<'_, Rule>) -> Result<Ident, ErrorEmitted> {
        let ident = self.ident(pair);
        check_variable_name(self, &ident)?;
        Ok(ident)
    }

    pub fn internal(&self, msg: &'static str, span: Span) -> ErrorEmitted {
        self.handler.emit_err(CompileError::Internal(msg, span))
    }

    /// A production showed up where the grammar never puts it.
    pub fn unexpected(&self, pair: &Pair<'_, Rule>) -> ErrorEmitted {
        tracing::trace!(rule = ?pair.as_rule(), "unexpected production");
        self.internal("unexpected production in the parse tree", self.span(pair))
    }
}

/// The meaningful children of one production, in source order. Keyword tokens
/// and the end-of-input marker are dropped up front.
pub(crate) struct Children<'i> {
    pairs: VecDeque<Pair<'i, Rule>>,
    parent: Span,
}

impl<'i> Children<'i> {
    pub fn new(ctx: &ParseCtx<'_>, pair: Pair<'i, Rule>) -> Children<'i> {
        let parent = ctx.span(&pair);
        let pairs = pair
            .into_inner()
            .filter(|child| !matches!(child.as_rule(), Rule::keyword | Rule::EOI))
            .collect();
        Children { pairs, parent }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn next(&mut self, ctx: &ParseCtx<'_>) -> Result<Pair<'i, Rule>, ErrorEmitted> {
        match self.pairs.pop_front() {
            Some(pair) => Ok(pair),
            None => Err(ctx.internal("missing child in the parse tree", self.parent.clone())),
        }
    }

    pub fn expect(
        &mut self,
        ctx: &ParseCtx<'_>,
        rule: Rule,
    ) -> Result<Pair<'i, Rule>, ErrorEmitted> {
        let pair = self.next(ctx)?;
        if pair.as_rule() != rule {
            return Err(ctx.unexpected(&pair));
        }
        Ok(pair)
    }

    pub fn next_if(&mut self, pred: impl Fn(Rule) -> bool) -> Option<Pair<'i, Rule>> {
        match self.pairs.front() {
            Some(pair) if pred(pair.as_rule()) => self.pairs.pop_front(),
            _ => None,
        }
    }

    /// Removes the first child matched by `rule`, wherever it sits.
    pub fn take(&mut self, ctx: &ParseCtx<'_>, rule: Rule) -> Result<Pair<'i, Rule>, ErrorEmitted> {
        match self.pairs.iter().position(|pair| pair.as_rule() == rule) {
            Some(ix) => self.next_at(ctx, ix),
            None => Err(ctx.internal("missing child in the parse tree", self.parent.clone())),
        }
    }

    fn next_at(&mut self, ctx: &ParseCtx<'_>, ix: usize) -> Result<Pair<'i, Rule>, ErrorEmitted> {
        match self.pairs.remove(ix) {
            Some(pair) => Ok(pair),
            None => Err(ctx.internal("missing child in the parse tree", self.parent.clone())),
        }
    }

    /// Converts every remaining child with the same builder.
    pub fn parse_rest<T: ParseFromPair>(self, ctx: &ParseCtx<'_>) -> Result<Vec<T>, ErrorEmitted> {
        self.pairs.into_iter().map(|pair| ctx.parse(pair)).collect()
    }
}
