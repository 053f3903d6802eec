use crate::{attribute::parse_contract_attributes, priv_prelude::*};

/// The parts shared by contracts and traits. The `simple`/`originary` forms
/// get an empty trait list.
struct TypeBody {
    name: Ident,
    attributes: Vec<ContractAttribute>,
    declarations: Vec<ContractDeclaration>,
    traits: Vec<Ident>,
}

fn parse_type_body(
    ctx: &ParseCtx<'_>,
    pair: Pair<'_, Rule>,
    with_traits: bool,
) -> Result<TypeBody, ErrorEmitted> {
    let mut children = Children::new(ctx, pair);
    let attributes = parse_contract_attributes(ctx, &mut children)?;
    let name = ctx.declared_ident(&children.expect(ctx, Rule::id)?)?;
    let traits = match with_traits {
        true => Children::new(ctx, children.expect(ctx, Rule::trait_list)?)
            .parse_rest::<IdentRef>(ctx)?
            .into_iter()
            .map(|IdentRef(ident)| ident)
            .collect(),
        false => Vec::new(),
    };
    let declarations = children.parse_rest(ctx)?;
    Ok(TypeBody {
        name,
        attributes,
        declarations,
        traits,
    })
}

/// A reference to a named trait in a `with` list.
struct IdentRef(Ident);

impl ParseFromPair for IdentRef {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        match pair.as_rule() {
            Rule::id => Ok(IdentRef(ctx.ident(&pair))),
            _ => Err(ctx.unexpected(&pair)),
        }
    }
}

impl ParseFromPair for ItemContract {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let with_traits = match pair.as_rule() {
            Rule::contract_simple => false,
            Rule::contract_with_traits => true,
            _ => return Err(ctx.unexpected(&pair)),
        };
        let span = ctx.span(&pair);
        let body = parse_type_body(ctx, pair, with_traits)?;
        Ok(ItemContract {
            name: body.name,
            attributes: body.attributes,
            declarations: body.declarations,
            traits: body.traits,
            span,
        })
    }
}

impl ParseFromPair for ItemTrait {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let with_traits = match pair.as_rule() {
            Rule::trait_originary => false,
            Rule::trait_with_traits => true,
            _ => return Err(ctx.unexpected(&pair)),
        };
        let span = ctx.span(&pair);
        let body = parse_type_body(ctx, pair, with_traits)?;
        Ok(ItemTrait {
            name: body.name,
            attributes: body.attributes,
            declarations: body.declarations,
            traits: body.traits,
            span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{parse_rule, parse_rule_err};
    use assert_matches::assert_matches;

    const COUNTER: &str = r#"@interface("org.example.counter")
contract Counter with Deployable, Ownable {
    owner: Address;
    const STEP: Int = 1;
    init(owner: Address) { self.owner = owner; }
    receive("increment") { }
    get fun owner(): Address { return self.owner; }
}"#;

    #[test]
    fn contract_with_traits() {
        let c: ItemContract = parse_rule(Rule::contract_with_traits, COUNTER);
        assert_eq!(c.name.as_str(), "Counter");
        let traits: Vec<_> = c.traits.iter().map(Ident::as_str).collect();
        assert_eq!(traits, ["Deployable", "Ownable"]);
        assert_matches!(c.attributes.as_slice(), [ContractAttribute::Interface { .. }]);
        assert_matches!(
            c.declarations.as_slice(),
            [
                ContractDeclaration::Field(_),
                ContractDeclaration::Constant(_),
                ContractDeclaration::Init(_),
                ContractDeclaration::Receiver(_),
                ContractDeclaration::Function(_),
            ]
        );
    }

    #[test]
    fn simple_forms_have_empty_trait_list() {
        let c: ItemContract = parse_rule(Rule::contract_simple, "contract Empty { }");
        assert!(c.traits.is_empty() && c.declarations.is_empty() && c.attributes.is_empty());

        let t: ItemTrait = parse_rule(Rule::trait_originary, "trait Ownable { owner: Address; }");
        assert!(t.traits.is_empty());
        assert_eq!(t.declarations.len(), 1);
    }

    #[test]
    fn trait_with_traits() {
        let t: ItemTrait = parse_rule(
            Rule::trait_with_traits,
            "trait OwnableTransferable with Ownable { virtual fun transfer(to: Address) { } }",
        );
        assert_eq!(t.traits.len(), 1);
        assert_matches!(t.declarations.as_slice(), [ContractDeclaration::Function(_)]);
    }

    #[test]
    fn contract_name_is_validated() {
        let errors =
            parse_rule_err::<ItemContract>(Rule::contract_simple, "contract __gen_Main { }");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span().as_str(), "__gen_Main");
    }
}
