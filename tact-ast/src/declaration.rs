use crate::priv_prelude::*;

/// A struct or contract field. The four source forms (with or without a
/// serialization alias, with or without an initializer) all produce this node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldDecl {
    pub name: Ident,
    pub ty: TypeRef,
    /// The `as` serialization alias.
    pub serialization: Option<Ident>,
    pub init: Option<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConstantDecl {
    pub name: Ident,
    pub ty: TypeRef,
    pub value: Expr,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArgumentDecl {
    pub name: Ident,
    pub ty: TypeRef,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionDecl {
    pub attributes: Vec<FunctionAttribute>,
    pub name: Ident,
    /// `None` for functions that return nothing.
    pub return_type: Option<TypeRef>,
    pub args: Vec<ArgumentDecl>,
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// A function implemented by the target runtime, bound through `@name(..)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NativeFunctionDecl {
    pub attributes: Vec<FunctionAttribute>,
    pub name: Ident,
    pub native_name: Ident,
    pub return_type: Option<TypeRef>,
    pub args: Vec<ArgumentDecl>,
    pub span: Span,
}

/// A contract constructor, `init(..) { .. }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InitFunctionDecl {
    pub args: Vec<ArgumentDecl>,
    pub statements: Vec<Statement>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReceiverDecl {
    pub selector: ReceiverSelector,
    pub statements: Vec<Statement>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReceiverSelector {
    /// `receive(msg: Message)`
    Simple { arg: ArgumentDecl },
    /// `receive()`
    Fallback,
    /// `receive("text")`
    Comment { comment: StringLiteral },
    /// `bounced(msg: Message)`
    Bounced { arg: ArgumentDecl },
}

/// Anything that may appear in the body of a contract or a trait.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContractDeclaration {
    Field(FieldDecl),
    Constant(ConstantDecl),
    Function(FunctionDecl),
    Init(InitFunctionDecl),
    Receiver(ReceiverDecl),
}

macro_rules! impl_spanned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Spanned for $ty {
                fn span(&self) -> Span {
                    self.span.clone()
                }
            }
        )*
    };
}

impl_spanned!(
    FieldDecl,
    ConstantDecl,
    ArgumentDecl,
    FunctionDecl,
    NativeFunctionDecl,
    InitFunctionDecl,
    ReceiverDecl,
);

impl Spanned for ContractDeclaration {
    fn span(&self) -> Span {
        match self {
            ContractDeclaration::Field(decl) => decl.span(),
            ContractDeclaration::Constant(decl) => decl.span(),
            ContractDeclaration::Function(decl) => decl.span(),
            ContractDeclaration::Init(decl) => decl.span(),
            ContractDeclaration::Receiver(decl) => decl.span(),
        }
    }
}
