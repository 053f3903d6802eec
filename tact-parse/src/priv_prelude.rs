pub(crate) use {
    crate::{
        name::NameValidator,
        parse::ParseFromPair,
        parser::{Children, ParseCtx, Rule},
        span::SpanFactory,
    },
    pest::iterators::Pair,
    tact_ast::*,
    tact_error::{
        error::CompileError,
        handler::{ErrorEmitted, Handler},
    },
    tact_types::{Ident, Span, Spanned},
    vec1::Vec1,
};
