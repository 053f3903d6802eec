use crate::priv_prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionAttributeKind {
    Public,
    /// `get`
    Getter,
    Extends,
    Mutates,
    /// `overrides`
    Overwrites,
    Virtual,
}

/// A function attribute. Attributes are plain flags; their meaning and mutual
/// consistency are decided by later phases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionAttribute {
    pub kind: FunctionAttributeKind,
    pub span: Span,
}

impl Spanned for FunctionAttribute {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContractAttribute {
    /// `@interface("name")`
    Interface { name: StringLiteral, span: Span },
}

impl Spanned for ContractAttribute {
    fn span(&self) -> Span {
        match self {
            ContractAttribute::Interface { span, .. } => span.clone(),
        }
    }
}
