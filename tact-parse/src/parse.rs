use crate::priv_prelude::*;

/// Conversion of one matched grammar production into an AST node.
///
/// Implementations dispatch on `pair.as_rule()`. A production that the grammar
/// cannot hand to a given implementation is reported as an internal error.
pub(crate) trait ParseFromPair: Sized {
    fn parse_from_pair(ctx: &ParseCtx<'_>, pair: Pair<'_, Rule>) -> Result<Self, ErrorEmitted>;
}
