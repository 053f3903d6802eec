mod attribute;
mod declaration;
mod expr;
mod item;
mod lvalue;
mod module;
mod name;
mod parse;
mod parser;
mod priv_prelude;
mod span;
mod statement;
#[cfg(test)]
mod test_utils;
mod ty;

use crate::priv_prelude::*;
pub use crate::{
    name::{NameValidator, ReservedPrefixes, GENERATED_NAME_PREFIX},
    parser::{Rule, TactParser},
    span::SpanFactory,
};

use pest::{error::{ErrorVariant, InputLocation}, Parser as _, Position};
use std::sync::Arc;
use tact_types::SourceId;

/// Parses one Tact source file into a [Program], applying the default naming
/// policy ([ReservedPrefixes::default]).
pub fn parse(
    handler: &Handler,
    src: Arc<str>,
    source_id: Option<SourceId>,
) -> Result<Program, ErrorEmitted> {
    parse_with(handler, src, source_id, &ReservedPrefixes::default())
}

/// Like [parse], with a caller-supplied naming policy.
pub fn parse_with(
    handler: &Handler,
    src: Arc<str>,
    source_id: Option<SourceId>,
    validator: &dyn NameValidator,
) -> Result<Program, ErrorEmitted> {
    tracing::debug!(len = src.len(), ?source_id, "parsing program");
    let spans = SpanFactory::new(src.clone(), source_id);
    let mut pairs = match TactParser::parse(Rule::program, &src) {
        Ok(pairs) => pairs,
        Err(err) => return Err(syntax_error(handler, &spans, err)),
    };
    let ctx = ParseCtx::new(handler, spans.clone(), validator);
    let pair = match pairs.next() {
        Some(pair) => pair,
        None => return Err(ctx.internal("the grammar produced no program", spans.range(0, 0))),
    };
    let program: Program = ctx.parse(pair)?;
    tracing::debug!(items = program.items.len(), "parsed program");
    Ok(program)
}

/// Parses a file and returns the paths of its imports, in source order.
///
/// Imports must precede every other item; the first import that follows a
/// non-import item is reported with [CompileError::ImportNotAtTop].
pub fn parse_imports(
    handler: &Handler,
    src: Arc<str>,
    source_id: Option<SourceId>,
) -> Result<Vec<String>, ErrorEmitted> {
    let program = parse(handler, src, source_id)?;
    collect_imports(handler, &program)
}

/// The import paths of an already built [Program]; see [parse_imports].
pub fn collect_imports(handler: &Handler, program: &Program) -> Result<Vec<String>, ErrorEmitted> {
    let mut imports = Vec::new();
    let mut seen_non_import = false;
    for item in &program.items {
        let ProgramItem::Import(import) = item else {
            seen_non_import = true;
            continue;
        };
        if seen_non_import {
            return Err(handler.emit_err(CompileError::ImportNotAtTop {
                span: import.span.clone(),
            }));
        }
        match &import.path {
            Expr::String(literal) => imports.push(literal.value.clone()),
            other => {
                let span = other.span();
                return Err(handler.emit_err(CompileError::NonLiteralImportPath { span }));
            }
        }
    }
    tracing::debug!(count = imports.len(), "collected imports");
    Ok(imports)
}

fn syntax_error(
    handler: &Handler,
    spans: &SpanFactory,
    err: pest::error::Error<Rule>,
) -> ErrorEmitted {
    let span = match err.location {
        InputLocation::Pos(pos) => spans.range(pos, pos),
        InputLocation::Span((start, end)) => spans.range(start, end),
    };
    let attempts = match &err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => Some(describe_attempts(positives, negatives)),
        _ => None,
    };
    let message = attempts
        .and_then(|message| relocate(spans.src(), &err.location, message))
        .unwrap_or_else(|| err.to_string());
    tracing::debug!(start = span.start(), "syntax error");
    handler.emit_err(CompileError::SyntaxError { message, span })
}

/// Renders `message` with pest's location header and source excerpt.
fn relocate(src: &str, location: &InputLocation, message: String) -> Option<String> {
    let variant = ErrorVariant::CustomError { message };
    let err = match *location {
        InputLocation::Pos(pos) => {
            pest::error::Error::<Rule>::new_from_pos(variant, Position::new(src, pos)?)
        }
        InputLocation::Span((start, end)) => {
            pest::error::Error::<Rule>::new_from_span(variant, pest::Span::new(src, start, end)?)
        }
    };
    Some(err.to_string())
}

/// pest's "expected .. / unexpected .." line, with rules that share a
/// description listed once.
fn describe_attempts(positives: &[Rule], negatives: &[Rule]) -> String {
    let positives = join_labels(positives);
    let negatives = join_labels(negatives);
    match (negatives.is_empty(), positives.is_empty()) {
        (false, false) => format!("unexpected {negatives}; expected {positives}"),
        (false, true) => format!("unexpected {negatives}"),
        (true, false) => format!("expected {positives}"),
        (true, true) => "unknown parsing error".to_string(),
    }
}

fn join_labels(rules: &[Rule]) -> String {
    let mut labels: Vec<String> = Vec::new();
    for rule in rules {
        let label = describe_rule(rule);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    match labels.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

/// Names used for grammar rules in syntax error messages.
fn describe_rule(rule: &Rule) -> String {
    let name = match rule {
        Rule::EOI => "end of input",
        Rule::id => "identifier",
        Rule::type_id => "type name",
        Rule::func_id => "native function name",
        Rule::keyword => "keyword",
        Rule::integer_literal | Rule::integer_literal_dec | Rule::integer_literal_hex => "integer",
        Rule::string_literal => "string",
        Rule::bool_literal => "boolean",
        Rule::null_literal => "null",
        Rule::block => "block",
        Rule::function_args | Rule::function_arg => "argument",
        Rule::expression_list => "expression",
        Rule::type_optional | Rule::type_required | Rule::type_map => "type",
        Rule::op_or
        | Rule::op_and
        | Rule::op_eq
        | Rule::op_neq
        | Rule::op_gt
        | Rule::op_gte
        | Rule::op_lt
        | Rule::op_lte
        | Rule::op_add
        | Rule::op_sub
        | Rule::op_mul
        | Rule::op_div
        | Rule::op_rem => "operator",
        Rule::suffix_not_null => "`!!`",
        Rule::unary_neg | Rule::unary_plus | Rule::unary_not => "unary operator",
        Rule::postfix_call | Rule::postfix_field => "`.`",
        rule if rule_is_statement(*rule) => "statement",
        rule if rule_is_expression(*rule) => "expression",
        other => return format!("{other:?}"),
    };
    name.to_string()
}

fn rule_is_statement(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::statement_let
            | Rule::statement_return
            | Rule::statement_expression
            | Rule::statement_assign
            | Rule::condition_simple
            | Rule::condition_with_else
            | Rule::condition_with_else_if
            | Rule::statement_while
            | Rule::statement_repeat
            | Rule::statement_until
    )
}

fn rule_is_expression(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::expression_or
            | Rule::expression_and
            | Rule::expression_compare
            | Rule::expression_add
            | Rule::expression_mul
            | Rule::expression_unary
            | Rule::expression_suffix
            | Rule::expression_value
            | Rule::expression_new
            | Rule::expression_init_of
            | Rule::expression_static_call
    )
}
