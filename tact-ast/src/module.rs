use crate::priv_prelude::*;

/// The root of a parsed file. Items are kept in source order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Program {
    pub items: Vec<ProgramItem>,
    pub span: Span,
}

impl Program {
    pub fn imports(&self) -> impl Iterator<Item = &ItemImport> {
        self.items.iter().filter_map(|item| match item {
            ProgramItem::Import(import) => Some(import),
            _ => None,
        })
    }
}

impl Spanned for Program {
    fn span(&self) -> Span {
        self.span.clone()
    }
}
