use crate::priv_prelude::*;

mod item_contract;
mod item_struct;

impl ParseFromPair for ProgramItem {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let item = match pair.as_rule() {
            Rule::program_import => ProgramItem::Import(ctx.parse(pair)?),
            Rule::primitive => ProgramItem::Primitive(ctx.parse(pair)?),
            Rule::struct_originary | Rule::struct_message | Rule::struct_message_with_id => {
                ProgramItem::Struct(ctx.parse(pair)?)
            }
            Rule::contract_simple | Rule::contract_with_traits => {
                ProgramItem::Contract(ctx.parse(pair)?)
            }
            Rule::trait_originary | Rule::trait_with_traits => ProgramItem::Trait(ctx.parse(pair)?),
            Rule::function_with_type | Rule::function_with_void => {
                ProgramItem::Function(ctx.parse(pair)?)
            }
            Rule::native_function_with_type | Rule::native_function_with_void => {
                ProgramItem::NativeFunction(ctx.parse(pair)?)
            }
            _ => return Err(ctx.unexpected(&pair)),
        };
        Ok(item)
    }
}

impl ParseFromPair for ItemImport {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        if pair.as_rule() != Rule::program_import {
            return Err(ctx.unexpected(&pair));
        }
        let span = ctx.span(&pair);
        let mut children = Children::new(ctx, pair);
        let path = ctx.parse(children.next(ctx)?)?;
        Ok(ItemImport { path, span })
    }
}

impl ParseFromPair for ItemPrimitive {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        if pair.as_rule() != Rule::primitive {
            return Err(ctx.unexpected(&pair));
        }
        let span = ctx.span(&pair);
        let mut children = Children::new(ctx, pair);
        let name = ctx.declared_ident(&children.expect(ctx, Rule::type_id)?)?;
        Ok(ItemPrimitive { name, span })
    }
}
