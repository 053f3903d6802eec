use crate::priv_prelude::*;
use num_bigint::BigUint;

/// Reads an `integer_literal` production. Decimal and `0x`/`0X` hexadecimal
/// spellings of the same number give the same value.
pub(crate) fn parse_integer(
    ctx: &ParseCtx<'_>,
    pair: Pair<'_, Rule>,
) -> Result<BigUint, ErrorEmitted> {
    let span = ctx.span(&pair);
    let mut children = Children::new(ctx, pair);
    let digits = children.next(ctx)?;
    let (text, radix) = match digits.as_rule() {
        Rule::integer_literal_dec => (digits.as_str(), 10),
        Rule::integer_literal_hex => (&digits.as_str()[2..], 16),
        _ => return Err(ctx.unexpected(&digits)),
    };
    BigUint::parse_bytes(text.as_bytes(), radix)
        .ok_or_else(|| ctx.internal("integer literal with no digits", span))
}

impl ParseFromPair for StringLiteral {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted> {
        if pair.as_rule() != Rule::string_literal {
            return Err(ctx.unexpected(&pair));
        }
        let span = ctx.span(&pair);
        let mut children = Children::new(ctx, pair);
        let inner = children.expect(ctx, Rule::string_inner)?;
        Ok(StringLiteral {
            value: inner.as_str().to_string(),
            span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::parse_rule;
    use assert_matches::assert_matches;

    fn number(src: &str) -> BigUint {
        match parse_rule::<Expr>(Rule::integer_literal, src) {
            Expr::Number { value, .. } => value,
            other => panic!("not a number: {other:?}"),
        }
    }

    #[test]
    fn hex_and_decimal_agree() {
        assert_eq!(number("123"), BigUint::from(123u32));
        assert_eq!(number("0x7b"), BigUint::from(123u32));
        assert_eq!(number("0X7B"), BigUint::from(123u32));
    }

    #[test]
    fn keeps_full_precision() {
        let big = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        assert_eq!(number(big).to_string(), big);
        assert_eq!(number("0x10000000000000000").to_string(), "18446744073709551616");
    }

    #[test]
    fn string_value_excludes_quotes() {
        let literal: StringLiteral = parse_rule(Rule::string_literal, "\"hello world\"");
        assert_eq!(literal.value, "hello world");
        assert_eq!(literal.span.as_str(), "\"hello world\"");

        let empty: StringLiteral = parse_rule(Rule::string_literal, "\"\"");
        assert_matches!(empty.value.as_str(), "");
    }
}
