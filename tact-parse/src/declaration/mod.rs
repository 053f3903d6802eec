use crate::priv_prelude::*;

mod function;
mod receiver;

impl ParseFromPair for ContractDeclaration {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let decl = match pair.as_rule() {
            Rule::field_default
            | Rule::field_with_init
            | Rule::field_with_serialization
            | Rule::field_with_serialization_and_init => {
                ContractDeclaration::Field(ctx.parse(pair)?)
            }
            Rule::constant => ContractDeclaration::Constant(ctx.parse(pair)?),
            Rule::function_with_type | Rule::function_with_void => {
                ContractDeclaration::Function(ctx.parse(pair)?)
            }
            Rule::contract_init => ContractDeclaration::Init(ctx.parse(pair)?),
            Rule::receive_simple
            | Rule::receive_empty
            | Rule::receive_comment
            | Rule::receive_bounced => {
                ContractDeclaration::Receiver(ctx.parse(pair)?)
            }
            _ => return Err(ctx.unexpected(&pair)),
        };
        Ok(decl)
    }
}

impl ParseFromPair for FieldDecl {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let span = ctx.span(&pair);
        let rule = pair.as_rule();
        let (has_serialization, has_init) = match rule {
            Rule::field_default => (false, false),
            Rule::field_with_init => (false, true),
            Rule::field_with_serialization => (true, false),
            Rule::field_with_serialization_and_init => (true, true),
            _ => return Err(ctx.unexpected(&pair)),
        };
        let mut children = Children::new(ctx, pair);
        let name = ctx.ident(&children.expect(ctx, Rule::id)?);
        let ty = ctx.parse(children.next(ctx)?)?;
        let serialization = match has_serialization {
            true => Some(ctx.ident(&children.expect(ctx, Rule::id)?)),
            false => None,
        };
        let init = match has_init {
            true => Some(ctx.parse(children.next(ctx)?)?),
            false => None,
        };
        Ok(FieldDecl {
            name,
            ty,
            serialization,
            init,
            span,
        })
    }
}

impl ParseFromPair for ConstantDecl {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        if pair.as_rule() != Rule::constant {
            return Err(ctx.unexpected(&pair));
        }
        let span = ctx.span(&pair);
        let mut children = Children::new(ctx, pair);
        Ok(ConstantDecl {
            name: ctx.ident(&children.expect(ctx, Rule::id)?),
            ty: ctx.parse(children.next(ctx)?)?,
            value: ctx.parse(children.next(ctx)?)?,
            span,
        })
    }
}

impl ParseFromPair for ArgumentDecl {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        if pair.as_rule() != Rule::function_arg {
            return Err(ctx.unexpected(&pair));
        }
        let span = ctx.span(&pair);
        let mut children = Children::new(ctx, pair);
        Ok(ArgumentDecl {
            name: ctx.declared_ident(&children.expect(ctx, Rule::id)?)?,
            ty: ctx.parse(children.next(ctx)?)?,
            span,
        })
    }
}
