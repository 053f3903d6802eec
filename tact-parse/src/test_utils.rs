use crate::{name::ReservedPrefixes, parser::TactParser, priv_prelude::*};
use pest::Parser;
use std::sync::Arc;

fn convert<T: ParseFromPair>(rule: Rule, input: &str) -> (Result<T, ErrorEmitted>, Handler) {
    let src: Arc<str> = Arc::from(input);
    let mut pairs = TactParser::parse(rule, &src).unwrap_or_else(|e| panic!("{e}"));
    let pair = pairs.next().expect("no pair produced");
    let handler = Handler::default();
    let validator = ReservedPrefixes::default();
    let ctx = ParseCtx::new(&handler, SpanFactory::new(src.clone(), None), &validator);
    let res = ctx.parse::<T>(pair);
    (res, handler)
}

/// Matches `input` against `rule` and converts the result, panicking on any
/// error.
pub(crate) fn parse_rule<T: ParseFromPair>(rule: Rule, input: &str) -> T {
    let (res, handler) = convert::<T>(rule, input);
    match res {
        Ok(node) => node,
        Err(_) => panic!("conversion failed: {:?}", handler.consume()),
    }
}

/// Matches `input` against `rule` and returns the errors of the failed
/// conversion.
pub(crate) fn parse_rule_err<T: ParseFromPair + std::fmt::Debug>(
    rule: Rule,
    input: &str,
) -> Vec<CompileError> {
    let (res, handler) = convert::<T>(rule, input);
    if let Ok(node) = res {
        panic!("conversion unexpectedly succeeded: {node:?}");
    }
    handler.consume()
}
