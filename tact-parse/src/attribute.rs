use crate::priv_prelude::*;

pub(crate) fn is_function_attribute(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::attr_public
            | Rule::attr_getter
            | Rule::attr_extends
            | Rule::attr_mutates
            | Rule::attr_overwrites
            | Rule::attr_virtual
    )
}

impl ParseFromPair for FunctionAttribute {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let kind = match pair.as_rule() {
            Rule::attr_public => FunctionAttributeKind::Public,
            Rule::attr_getter => FunctionAttributeKind::Getter,
            Rule::attr_extends => FunctionAttributeKind::Extends,
            Rule::attr_mutates => FunctionAttributeKind::Mutates,
            Rule::attr_overwrites => FunctionAttributeKind::Overwrites,
            Rule::attr_virtual => FunctionAttributeKind::Virtual,
            _ => return Err(ctx.unexpected(&pair)),
        };
        Ok(FunctionAttribute {
            kind,
            span: ctx.span(&pair),
        })
    }
}

impl ParseFromPair for ContractAttribute {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        match pair.as_rule() {
            Rule::contract_attribute_interface => {
                let span = ctx.span(&pair);
                let mut children = Children::new(ctx, pair);
                let name = ctx.parse(children.expect(ctx, Rule::string_literal)?)?;
                Ok(ContractAttribute::Interface { name, span })
            }
            _ => Err(ctx.unexpected(&pair)),
        }
    }
}

/// Leading function attributes, in source order.
pub(crate) fn parse_function_attributes(
    ctx: &ParseCtx<'_>,
    children: &mut Children<'_>,
) -> Result<Vec<FunctionAttribute>, ErrorEmitted> {
    let mut attributes = Vec::new();
    while let Some(pair) = children.next_if(is_function_attribute) {
        attributes.push(ctx.parse(pair)?);
    }
    Ok(attributes)
}

/// Leading `@interface(..)` attributes of a contract or trait.
pub(crate) fn parse_contract_attributes(
    ctx: &ParseCtx<'_>,
    children: &mut Children<'_>,
) -> Result<Vec<ContractAttribute>, ErrorEmitted> {
    let mut attributes = Vec::new();
    while let Some(pair) = children.next_if(|rule| rule == Rule::contract_attribute_interface) {
        attributes.push(ctx.parse(pair)?);
    }
    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::parse_rule;
    use assert_matches::assert_matches;

    #[test]
    fn keyword_to_flag() {
        let cases = [
            (Rule::attr_public, "public", FunctionAttributeKind::Public),
            (Rule::attr_getter, "get", FunctionAttributeKind::Getter),
            (Rule::attr_extends, "extends", FunctionAttributeKind::Extends),
            (Rule::attr_mutates, "mutates", FunctionAttributeKind::Mutates),
            (Rule::attr_overwrites, "overrides", FunctionAttributeKind::Overwrites),
            (Rule::attr_virtual, "virtual", FunctionAttributeKind::Virtual),
        ];
        for (rule, src, kind) in cases {
            let attr: FunctionAttribute = parse_rule(rule, src);
            assert_eq!(attr.kind, kind);
            assert_eq!(attr.span.as_str(), src);
        }
    }

    #[test]
    fn interface_attribute() {
        let attr: ContractAttribute = parse_rule(
            Rule::contract_attribute_interface,
            "@interface(\"org.ton.ownable\")",
        );
        assert_matches!(
            attr,
            ContractAttribute::Interface { ref name, .. } if name.value == "org.ton.ownable"
        );
    }
}
