use crate::priv_prelude::*;

impl ParseFromPair for LValuePath {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let span = ctx.span(&pair);
        let mut segments = Vec::new();
        collect_segments(ctx, pair, &mut segments)?;
        Vec1::try_from_vec(segments)
            .map(|segments| LValuePath { segments })
            .map_err(|_| ctx.internal("assignment target without a name", span))
    }
}

/// `lvalue_more` is `id "." lvalue`, so the path is walked head first.
fn collect_segments(
    ctx: &ParseCtx<'_>,
    pair: Pair<'_, Rule>,
    segments: &mut Vec<Ident>,
) -> Result<(), ErrorEmitted> {
    let rule = pair.as_rule();
    let span = ctx.span(&pair);
    let mut children = Children::new(ctx, pair);
    segments.push(ctx.ident(&children.expect(ctx, Rule::id)?));
    match rule {
        Rule::lvalue_single => Ok(()),
        Rule::lvalue_more => collect_segments(ctx, children.next(ctx)?, segments),
        _ => Err(ctx.internal("expected an assignment target", span)),
    }
}
