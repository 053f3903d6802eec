use crate::priv_prelude::*;

mod literal;

pub(crate) use literal::parse_integer;

impl ParseFromPair for Expr {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        let span = ctx.span(&pair);
        let expr = match pair.as_rule() {
            Rule::expression_or
            | Rule::expression_and
            | Rule::expression_compare
            | Rule::expression_add
            | Rule::expression_mul => parse_binary(ctx, pair)?,
            Rule::expression_unary => parse_unary(ctx, pair)?,
            Rule::expression_suffix => {
                let mut children = Children::new(ctx, pair);
                let value: Expr = ctx.parse(children.expect(ctx, Rule::expression_value)?)?;
                match children.next_if(|rule| rule == Rule::suffix_not_null) {
                    Some(_) => Expr::Unary {
                        op: UnaryOp::NotNull,
                        operand: Box::new(value),
                        span,
                    },
                    None => value,
                }
            }
            Rule::expression_value => parse_postfix_chain(ctx, pair)?,
            Rule::expression_static_call => {
                let mut children = Children::new(ctx, pair);
                let name = ctx.ident(&children.expect(ctx, Rule::id)?);
                let list = children.expect(ctx, Rule::expression_list)?;
                let args = parse_expression_list(ctx, list)?;
                Expr::StaticCall { name, args, span }
            }
            Rule::expression_init_of => {
                let mut children = Children::new(ctx, pair);
                let name = ctx.ident(&children.expect(ctx, Rule::id)?);
                let list = children.expect(ctx, Rule::expression_list)?;
                let args = parse_expression_list(ctx, list)?;
                Expr::InitOf { name, args, span }
            }
            Rule::expression_new => {
                let mut children = Children::new(ctx, pair);
                let ty = ctx.ident(&children.expect(ctx, Rule::type_id)?);
                let args = children.parse_rest(ctx)?;
                Expr::New { ty, args, span }
            }
            Rule::integer_literal => Expr::Number {
                value: parse_integer(ctx, pair)?,
                span,
            },
            Rule::bool_literal => Expr::Boolean {
                value: pair.as_str() == "true",
                span,
            },
            Rule::null_literal => Expr::Null { span },
            Rule::string_literal => Expr::String(ctx.parse(pair)?),
            Rule::id => Expr::Identifier(ctx.ident(&pair)),
            _ => return Err(ctx.unexpected(&pair)),
        };
        Ok(expr)
    }
}

impl ParseFromPair for NewParameter {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        if pair.as_rule() != Rule::new_parameter {
            return Err(ctx.unexpected(&pair));
        }
        let span = ctx.span(&pair);
        let mut children = Children::new(ctx, pair);
        let name = ctx.ident(&children.expect(ctx, Rule::id)?);
        let expr = ctx.parse(children.next(ctx)?)?;
        Ok(NewParameter { name, expr, span })
    }
}

pub(crate) fn parse_expression_list(
    ctx: &ParseCtx<'_>,
    pair: Pair<'_, Rule>,
) -> Result<Vec<Expr>, ErrorEmitted> {
    Children::new(ctx, pair).parse_rest(ctx)
}

fn binary_op(rule: Rule) -> Option<BinaryOp> {
    let op = match rule {
        Rule::op_or => BinaryOp::Or,
        Rule::op_and => BinaryOp::And,
        Rule::op_eq => BinaryOp::Eq,
        Rule::op_neq => BinaryOp::Neq,
        Rule::op_gt => BinaryOp::Gt,
        Rule::op_gte => BinaryOp::Gte,
        Rule::op_lt => BinaryOp::Lt,
        Rule::op_lte => BinaryOp::Lte,
        Rule::op_add => BinaryOp::Add,
        Rule::op_sub => BinaryOp::Sub,
        Rule::op_mul => BinaryOp::Mul,
        Rule::op_div => BinaryOp::Div,
        Rule::op_rem => BinaryOp::Rem,
        _ => return None,
    };
    Some(op)
}

fn unary_op(rule: Rule) -> Option<UnaryOp> {
    let op = match rule {
        Rule::unary_neg => UnaryOp::Neg,
        Rule::unary_plus => UnaryOp::Plus,
        Rule::unary_not => UnaryOp::Not,
        _ => return None,
    };
    Some(op)
}

/// One precedence level: `operand (op operand)*`, folded to the left.
fn parse_binary(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Expr, ErrorEmitted> {
    let mut children = Children::new(ctx, pair);
    let mut left: Expr = ctx.parse(children.next(ctx)?)?;
    while !children.is_empty() {
        let op_pair = children.next(ctx)?;
        let op = binary_op(op_pair.as_rule()).ok_or_else(|| ctx.unexpected(&op_pair))?;
        let right: Expr = ctx.parse(children.next(ctx)?)?;
        let span = Span::join(left.span(), &right.span());
        left = Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        };
    }
    Ok(left)
}

fn parse_unary(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Expr, ErrorEmitted> {
    let span = ctx.span(&pair);
    let mut children = Children::new(ctx, pair);
    let first = children.next(ctx)?;
    match unary_op(first.as_rule()) {
        Some(op) => {
            let operand = ctx.parse(children.expect(ctx, Rule::expression_unary)?)?;
            Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
                span,
            })
        }
        None => ctx.parse(first),
    }
}

/// A primary followed by any number of `.name` and `.name(args)` postfixes.
/// Each step spans from the start of the primary to the end of that postfix.
fn parse_postfix_chain(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Expr, ErrorEmitted> {
    let mut children = Children::new(ctx, pair);
    let mut expr: Expr = ctx.parse(children.next(ctx)?)?;
    while !children.is_empty() {
        let postfix = children.next(ctx)?;
        let span = Span::join(expr.span(), &ctx.span(&postfix));
        let rule = postfix.as_rule();
        let mut parts = Children::new(ctx, postfix);
        let name = ctx.ident(&parts.expect(ctx, Rule::id)?);
        expr = match rule {
            Rule::postfix_field => Expr::FieldAccess {
                src: Box::new(expr),
                name,
                span,
            },
            Rule::postfix_call => Expr::MethodCall {
                src: Box::new(expr),
                name,
                args: parse_expression_list(ctx, parts.expect(ctx, Rule::expression_list)?)?,
                span,
            },
            _ => return Err(ctx.internal("expected a field access or a method call", span)),
        };
    }
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::parse_rule;
    use assert_matches::assert_matches;

    fn expr(src: &str) -> Expr {
        parse_rule(Rule::expression_or, src)
    }

    #[test]
    fn multiplication_binds_tighter() {
        let e = expr("1 + 2 * 3");
        assert_matches!(e, Expr::Binary { op: BinaryOp::Add, ref right, .. }
            if matches!(**right, Expr::Binary { op: BinaryOp::Mul, .. }));
        assert_eq!(e.span().as_str(), "1 + 2 * 3");
    }

    #[test]
    fn same_level_folds_left() {
        let e = expr("a - b - c");
        let Expr::Binary { op: BinaryOp::Sub, left, right, .. } = e else {
            panic!("expected a subtraction");
        };
        assert_matches!(*right, Expr::Identifier(ref id) if id.as_str() == "c");
        assert_matches!(
            *left,
            Expr::Binary { op: BinaryOp::Sub, ref span, .. } if span.as_str() == "a - b"
        );
    }

    #[test]
    fn logical_and_comparison_levels() {
        let e = expr("a > 1 && b <= 2 || !c");
        let Expr::Binary { op: BinaryOp::Or, left, right, .. } = e else {
            panic!("expected ||");
        };
        assert_matches!(*left, Expr::Binary { op: BinaryOp::And, .. });
        assert_matches!(*right, Expr::Unary { op: UnaryOp::Not, .. });
    }

    #[test]
    fn brackets_override_precedence() {
        let e = expr("(1 + 2) * 3");
        assert_matches!(e, Expr::Binary { op: BinaryOp::Mul, ref left, .. }
            if matches!(**left, Expr::Binary { op: BinaryOp::Add, .. }));
    }

    #[test]
    fn unary_prefixes_nest() {
        let e = expr("-(-x)");
        let Expr::Unary { op: UnaryOp::Neg, operand, .. } = e else {
            panic!("expected negation");
        };
        assert_matches!(*operand, Expr::Unary { op: UnaryOp::Neg, .. });

        let e = expr("!!flag");
        assert_matches!(e, Expr::Unary { op: UnaryOp::Not, ref operand, .. }
            if matches!(**operand, Expr::Unary { op: UnaryOp::Not, .. }));
    }

    #[test]
    fn sign_directly_after_additive_operator() {
        let e = expr("a--1");
        let Expr::Binary { op: BinaryOp::Sub, left, right, span } = e else {
            panic!("expected a subtraction");
        };
        assert_eq!(span.as_str(), "a--1");
        assert_matches!(*left, Expr::Identifier(ref id) if id.as_str() == "a");
        assert_matches!(*right, Expr::Unary { op: UnaryOp::Neg, ref operand, .. }
            if matches!(**operand, Expr::Number { .. }));

        let e = expr("a++b");
        assert_matches!(e, Expr::Binary { op: BinaryOp::Add, ref right, .. }
            if matches!(**right, Expr::Unary { op: UnaryOp::Plus, .. }));
    }

    #[test]
    fn not_null_suffix() {
        let e = expr("self.owner!!");
        let Expr::Unary { op: UnaryOp::NotNull, operand, span } = e else {
            panic!("expected !!");
        };
        assert_eq!(span.as_str(), "self.owner!!");
        assert_matches!(*operand, Expr::FieldAccess { ref name, .. } if name.as_str() == "owner");
    }

    #[test]
    fn postfix_chain_folds_left() {
        let e = expr("a.b.c(1, 2).d");
        let Expr::FieldAccess { src, name, span } = e else {
            panic!("expected a field access");
        };
        assert_eq!(name.as_str(), "d");
        assert_eq!(span.as_str(), "a.b.c(1, 2).d");
        let Expr::MethodCall { src, name, args, span } = *src else {
            panic!("expected a method call");
        };
        assert_eq!(name.as_str(), "c");
        assert_eq!(args.len(), 2);
        assert_eq!(span.as_str(), "a.b.c(1, 2)");
        assert_matches!(*src, Expr::FieldAccess { ref name, .. } if name.as_str() == "b");
    }

    #[test]
    fn calls_and_construction() {
        assert_matches!(expr("now()"), Expr::StaticCall { ref name, ref args, .. }
            if name.as_str() == "now" && args.is_empty());

        let e = expr("initOf Wallet(owner, 0)");
        assert_matches!(
            e,
            Expr::InitOf { ref name, ref args, .. } if name.as_str() == "Wallet" && args.len() == 2
        );

        let e = expr("Transfer { to: sender(), amount: 10 }");
        let Expr::New { ty, args, .. } = e else {
            panic!("expected a construction");
        };
        assert_eq!(ty.as_str(), "Transfer");
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name.as_str(), "to");
        assert_matches!(args[1].expr, Expr::Number { .. });
        assert_eq!(args[1].span.as_str(), "amount: 10");
    }

    #[test]
    fn atoms() {
        assert_matches!(expr("true"), Expr::Boolean { value: true, .. });
        assert_matches!(expr("false"), Expr::Boolean { value: false, .. });
        assert_matches!(expr("null"), Expr::Null { .. });
        assert_matches!(expr("\"hi\""), Expr::String(ref s) if s.value == "hi");
        assert_matches!(expr("nullable"), Expr::Identifier(ref id) if id.as_str() == "nullable");
        assert_matches!(expr("trueValue"), Expr::Identifier(_));
    }
}
