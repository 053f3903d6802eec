use crate::{attribute::parse_function_attributes, priv_prelude::*, statement::parse_block};

impl ParseFromPair for FunctionDecl {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let rule = pair.as_rule();
        if !matches!(rule, Rule::function_with_type | Rule::function_with_void) {
            return Err(ctx.unexpected(&pair));
        }
        let span = ctx.span(&pair);
        let mut children = Children::new(ctx, pair);
        let attributes = parse_function_attributes(ctx, &mut children)?;
        let name = ctx.declared_ident(&children.expect(ctx, Rule::id)?)?;
        let args = parse_args(ctx, children.expect(ctx, Rule::function_args)?)?;
        let return_type = match rule {
            Rule::function_with_type => Some(ctx.parse(children.next(ctx)?)?),
            _ => None,
        };
        let statements = parse_block(ctx, children.expect(ctx, Rule::block)?)?;
        Ok(FunctionDecl {
            attributes,
            name,
            return_type,
            args,
            statements,
            span,
        })
    }
}

impl ParseFromPair for NativeFunctionDecl {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let rule = pair.as_rule();
        if !matches!(rule, Rule::native_function_with_type | Rule::native_function_with_void) {
            return Err(ctx.unexpected(&pair));
        }
        let span = ctx.span(&pair);
        let mut children = Children::new(ctx, pair);
        let native_name = ctx.declared_ident(&children.expect(ctx, Rule::func_id)?)?;
        let attributes = parse_function_attributes(ctx, &mut children)?;
        let name = ctx.declared_ident(&children.expect(ctx, Rule::id)?)?;
        let args = parse_args(ctx, children.expect(ctx, Rule::function_args)?)?;
        let return_type = match rule {
            Rule::native_function_with_type => Some(ctx.parse(children.next(ctx)?)?),
            _ => None,
        };
        Ok(NativeFunctionDecl {
            attributes,
            name,
            native_name,
            return_type,
            args,
            span,
        })
    }
}

impl ParseFromPair for InitFunctionDecl {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        if pair.as_rule() != Rule::contract_init {
            return Err(ctx.unexpected(&pair));
        }
        let span = ctx.span(&pair);
        let mut children = Children::new(ctx, pair);
        Ok(InitFunctionDecl {
            args: parse_args(ctx, children.expect(ctx, Rule::function_args)?)?,
            statements: parse_block(ctx, children.expect(ctx, Rule::block)?)?,
            span,
        })
    }
}

fn parse_args(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Vec<ArgumentDecl>, ErrorEmitted> {
    Children::new(ctx, pair).parse_rest(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{parse_rule, parse_rule_err};
    use assert_matches::assert_matches;

    #[test]
    fn typed_and_void_functions() {
        let f: FunctionDecl = parse_rule(
            Rule::function_with_type,
            "get fun balance(of: Address): Int { return 0; }",
        );
        assert_eq!(f.name.as_str(), "balance");
        assert_matches!(
            f.attributes.as_slice(),
            [FunctionAttribute { kind: FunctionAttributeKind::Getter, .. }]
        );
        assert_matches!(f.return_type, Some(TypeRef::Simple { .. }));
        assert_eq!(f.args.len(), 1);
        assert_eq!(f.statements.len(), 1);

        let f: FunctionDecl = parse_rule(Rule::function_with_void, "fun reset() { }");
        assert!(f.return_type.is_none());
        assert!(f.args.is_empty() && f.statements.is_empty() && f.attributes.is_empty());
    }

    #[test]
    fn attributes_are_not_cross_checked() {
        let f: FunctionDecl = parse_rule(
            Rule::function_with_void,
            "public overrides virtual fun f() { }",
        );
        let kinds: Vec<_> = f.attributes.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            [
                FunctionAttributeKind::Public,
                FunctionAttributeKind::Overwrites,
                FunctionAttributeKind::Virtual
            ]
        );
    }

    #[test]
    fn native_function_keeps_bound_name() {
        let f: NativeFunctionDecl = parse_rule(
            Rule::native_function_with_type,
            "@name(store_uint) extends native storeUint(self: Builder, value: Int, bits: Int): \
             Builder;",
        );
        assert_eq!(f.name.as_str(), "storeUint");
        assert_eq!(f.native_name.as_str(), "store_uint");
        assert_eq!(f.args.len(), 3);
        assert_matches!(
            f.attributes.as_slice(),
            [FunctionAttribute { kind: FunctionAttributeKind::Extends, .. }]
        );

        let f: NativeFunctionDecl = parse_rule(
            Rule::native_function_with_void,
            "@name(throw) native throw(code: Int);",
        );
        assert!(f.return_type.is_none());
    }

    #[test]
    fn native_bound_name_is_validated() {
        let errors = parse_rule_err::<NativeFunctionDecl>(
            Rule::native_function_with_void,
            "@name(__gen_dump) native dump(value: Int);",
        );
        assert_matches!(
            errors.as_slice(),
            [CompileError::InvalidIdentifier { name, .. }] if name.as_str() == "__gen_dump"
        );
    }

    #[test]
    fn init_function() {
        let f: InitFunctionDecl = parse_rule(
            Rule::contract_init,
            "init(owner: Address) { self.owner = owner; }",
        );
        assert_eq!(f.args[0].name.as_str(), "owner");
        assert_matches!(f.statements.as_slice(), [Statement::Assign { .. }]);
    }
}
