use crate::priv_prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// `Int` or `Int?`
    Simple {
        name: Ident,
        optional: bool,
        span: Span,
    },
    /// `map<Key, Value>`
    Map { key: Ident, value: Ident, span: Span },
}

impl Spanned for TypeRef {
    fn span(&self) -> Span {
        match self {
            TypeRef::Simple { span, .. } => span.clone(),
            TypeRef::Map { span, .. } => span.clone(),
        }
    }
}
