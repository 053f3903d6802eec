use crate::{priv_prelude::*, statement::parse_block};

impl ParseFromPair for ReceiverDecl {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let span = ctx.span(&pair);
        let rule = pair.as_rule();
        let mut children = Children::new(ctx, pair);
        let selector = match rule {
            Rule::receive_simple => ReceiverSelector::Simple {
                arg: ctx.parse(children.expect(ctx, Rule::function_arg)?)?,
            },
            Rule::receive_empty => ReceiverSelector::Fallback,
            Rule::receive_comment => ReceiverSelector::Comment {
                comment: ctx.parse(children.expect(ctx, Rule::string_literal)?)?,
            },
            Rule::receive_bounced => ReceiverSelector::Bounced {
                arg: ctx.parse(children.expect(ctx, Rule::function_arg)?)?,
            },
            _ => return Err(ctx.internal("expected a receiver", span)),
        };
        let statements = parse_block(ctx, children.expect(ctx, Rule::block)?)?;
        Ok(ReceiverDecl {
            selector,
            statements,
            span,
        })
    }
}
