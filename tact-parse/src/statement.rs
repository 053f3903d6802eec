use crate::priv_prelude::*;

impl ParseFromPair for Statement {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let span = ctx.span(&pair);
        let rule = pair.as_rule();
        let mut children = Children::new(ctx, pair);
        let statement = match rule {
            Rule::statement_let => Statement::Let {
                name: ctx.declared_ident(&children.expect(ctx, Rule::id)?)?,
                ty: ctx.parse(children.next(ctx)?)?,
                expr: ctx.parse(children.next(ctx)?)?,
                span,
            },
            Rule::statement_return => Statement::Return {
                expr: match children.is_empty() {
                    true => None,
                    false => Some(ctx.parse(children.next(ctx)?)?),
                },
                span,
            },
            Rule::statement_expression => Statement::Expression {
                expr: ctx.parse(children.next(ctx)?)?,
                span,
            },
            Rule::statement_assign => Statement::Assign {
                path: ctx.parse(children.next(ctx)?)?,
                expr: ctx.parse(children.next(ctx)?)?,
                span,
            },
            Rule::condition_simple | Rule::condition_with_else | Rule::condition_with_else_if => {
                let condition = ctx.parse(children.next(ctx)?)?;
                let true_statements = parse_block(ctx, children.expect(ctx, Rule::block)?)?;
                let (false_statements, else_if) = match rule {
                    Rule::condition_with_else => {
                        let block = children.expect(ctx, Rule::block)?;
                        (parse_block(ctx, block)?, None)
                    }
                    Rule::condition_with_else_if => {
                        let tail: Statement = ctx.parse(children.next(ctx)?)?;
                        (Vec::new(), Some(Box::new(tail)))
                    }
                    _ => (Vec::new(), None),
                };
                Statement::Condition {
                    condition,
                    true_statements,
                    false_statements,
                    else_if,
                    span,
                }
            }
            Rule::statement_while => Statement::While {
                condition: ctx.parse(children.next(ctx)?)?,
                statements: parse_block(ctx, children.expect(ctx, Rule::block)?)?,
                span,
            },
            Rule::statement_repeat => Statement::Repeat {
                condition: ctx.parse(children.next(ctx)?)?,
                statements: parse_block(ctx, children.expect(ctx, Rule::block)?)?,
                span,
            },
            Rule::statement_until => {
                // `do { body } until (condition);` The body comes first in the
                // source, so both parts are picked out by rule.
                let statements = parse_block(ctx, children.take(ctx, Rule::block)?)?;
                let condition = ctx.parse(children.next(ctx)?)?;
                Statement::Until {
                    condition,
                    statements,
                    span,
                }
            }
            _ => return Err(ctx.internal("expected a statement", span)),
        };
        Ok(statement)
    }
}

/// The statements of a `{ .. }` block, in order.
pub(crate) fn parse_block(
    ctx: &ParseCtx<'_>,
    pair: Pair<'_, Rule>,
) -> Result<Vec<Statement>, ErrorEmitted> {
    if pair.as_rule() != Rule::block {
        return Err(ctx.unexpected(&pair));
    }
    Children::new(ctx, pair).parse_rest(ctx)
}
