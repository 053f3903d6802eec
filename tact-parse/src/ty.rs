use crate::priv_prelude::*;

impl ParseFromPair for TypeRef {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let span = ctx.span(&pair);
        let rule = pair.as_rule();
        let mut children = Children::new(ctx, pair);
        let ty = match rule {
            Rule::type_required | Rule::type_optional => TypeRef::Simple {
                name: ctx.ident(&children.expect(ctx, Rule::type_id)?),
                optional: rule == Rule::type_optional,
                span,
            },
            Rule::type_map => TypeRef::Map {
                key: ctx.ident(&children.expect(ctx, Rule::type_id)?),
                value: ctx.ident(&children.expect(ctx, Rule::type_id)?),
                span,
            },
            _ => return Err(ctx.internal("expected a type", span)),
        };
        Ok(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::parse_rule;
    use assert_matches::assert_matches;

    #[test]
    fn optional_and_required() {
        let ty: TypeRef = parse_rule(Rule::type_optional, "Address?");
        assert_matches!(
            ty,
            TypeRef::Simple { name, optional: true, .. } if name.as_str() == "Address"
        );

        let ty: TypeRef = parse_rule(Rule::type_required, "Int");
        assert_matches!(ty, TypeRef::Simple { optional: false, .. });
    }

    #[test]
    fn map_keeps_key_and_value() {
        let ty: TypeRef = parse_rule(Rule::type_map, "map<Int, Address>");
        assert_matches!(
            ty,
            TypeRef::Map { ref key, ref value, .. }
                if key.as_str() == "Int" && value.as_str() == "Address"
        );
        assert_eq!(ty.span().as_str(), "map<Int, Address>");
    }
}
