use crate::priv_prelude::*;

impl ParseFromPair for Program {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        if pair.as_rule() != Rule::program {
            return Err(ctx.unexpected(&pair));
        }
        let span = ctx.span(&pair);
        let items = Children::new(ctx, pair).parse_rest(ctx)?;
        Ok(Program { items, span })
    }
}
