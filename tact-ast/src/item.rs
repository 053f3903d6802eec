use crate::priv_prelude::*;

#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProgramItem {
    Import(ItemImport),
    Primitive(ItemPrimitive),
    Struct(ItemStruct),
    Contract(ItemContract),
    Trait(ItemTrait),
    Function(FunctionDecl),
    NativeFunction(NativeFunctionDecl),
}

impl ProgramItem {
    pub fn is_import(&self) -> bool {
        matches!(self, ProgramItem::Import(_))
    }
}

impl Spanned for ProgramItem {
    fn span(&self) -> Span {
        match self {
            ProgramItem::Import(item) => item.span(),
            ProgramItem::Primitive(item) => item.span(),
            ProgramItem::Struct(item) => item.span(),
            ProgramItem::Contract(item) => item.span(),
            ProgramItem::Trait(item) => item.span(),
            ProgramItem::Function(item) => item.span(),
            ProgramItem::NativeFunction(item) => item.span(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemImport {
    pub path: Expr,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemPrimitive {
    pub name: Ident,
    pub span: Span,
}

/// A `struct` or `message` definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemStruct {
    pub name: Ident,
    pub fields: Vec<FieldDecl>,
    /// The explicit message opcode of `message(0x1234) Name { .. }`.
    pub prefix: Option<u32>,
    /// Whether the struct was declared with `message`.
    pub message: bool,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemContract {
    pub name: Ident,
    pub attributes: Vec<ContractAttribute>,
    pub declarations: Vec<ContractDeclaration>,
    /// Traits listed after `with`. Empty when there is no `with` clause.
    pub traits: Vec<Ident>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemTrait {
    pub name: Ident,
    pub attributes: Vec<ContractAttribute>,
    pub declarations: Vec<ContractDeclaration>,
    pub traits: Vec<Ident>,
    pub span: Span,
}

impl Spanned for ItemImport {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

impl Spanned for ItemPrimitive {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

impl Spanned for ItemStruct {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

impl Spanned for ItemContract {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

impl Spanned for ItemTrait {
    fn span(&self) -> Span {
        self.span.clone()
    }
}
