use crate::{expr::parse_integer, priv_prelude::*};
use num_traits::ToPrimitive;

impl ParseFromPair for ItemStruct {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let span = ctx.span(&pair);
        let rule = pair.as_rule();
        let message = match rule {
            Rule::struct_originary => false,
            Rule::struct_message | Rule::struct_message_with_id => true,
            _ => return Err(ctx.unexpected(&pair)),
        };
        let mut children = Children::new(ctx, pair);
        let prefix = match rule {
            Rule::struct_message_with_id => {
                let literal = children.expect(ctx, Rule::integer_literal)?;
                Some(parse_prefix(ctx, literal)?)
            }
            _ => None,
        };
        let name = ctx.declared_ident(&children.expect(ctx, Rule::id)?)?;
        let fields = children.parse_rest(ctx)?;
        Ok(ItemStruct {
            name,
            fields,
            prefix,
            message,
            span,
        })
    }
}

/// The opcode of a `message(0x..)` declaration must fit into 32 bits.
fn parse_prefix(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<u32, ErrorEmitted> {
    let span = ctx.span(&pair);
    let value = parse_integer(ctx, pair)?;
    value.to_u32().ok_or_else(|| {
        ctx.handler().emit_err(CompileError::MessagePrefixOutOfRange {
            prefix: value.to_string(),
            span,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{parse_rule, parse_rule_err};
    use assert_matches::assert_matches;

    #[test]
    fn three_struct_forms() {
        let s: ItemStruct = parse_rule(Rule::struct_originary, "struct Point { x: Int; y: Int; }");
        assert!(!s.message);
        assert_eq!(s.prefix, None);
        assert_eq!(s.fields.len(), 2);

        let s: ItemStruct = parse_rule(
            Rule::struct_message,
            "message Deposit { amount: Int as coins; }",
        );
        assert!(s.message);
        assert_eq!(s.prefix, None);

        let s: ItemStruct = parse_rule(
            Rule::struct_message_with_id,
            "message(0x7362d09c) TokenNotification { }",
        );
        assert!(s.message);
        assert_eq!(s.prefix, Some(0x7362d09c));
        assert_eq!(s.name.as_str(), "TokenNotification");
        assert!(s.fields.is_empty());
    }

    #[test]
    fn decimal_prefix() {
        let s: ItemStruct = parse_rule(Rule::struct_message_with_id, "message(42) Ping { }");
        assert_eq!(s.prefix, Some(42));
    }

    #[test]
    fn prefix_wider_than_32_bits() {
        let errors = parse_rule_err::<ItemStruct>(
            Rule::struct_message_with_id,
            "message(0x100000000) Big { }",
        );
        assert_matches!(
            errors.as_slice(),
            [CompileError::MessagePrefixOutOfRange { prefix, span }]
                if prefix == "4294967296" && span.as_str() == "0x100000000"
        );
    }

    #[test]
    fn struct_name_is_validated() {
        let errors = parse_rule_err::<ItemStruct>(Rule::struct_originary, "struct __genFoo { }");
        assert_matches!(
            errors.as_slice(),
            [CompileError::InvalidIdentifier { name, .. }] if name.as_str() == "__genFoo"
        );
    }
}
