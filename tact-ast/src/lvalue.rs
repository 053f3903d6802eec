use crate::priv_prelude::*;

/// The target of an assignment: `a`, `a.b`, `self.balance`, ...
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LValuePath {
    pub segments: Vec1<Ident>,
}

impl LValuePath {
    pub fn head(&self) -> &Ident {
        self.segments.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ident> {
        self.segments.iter()
    }
}

impl Spanned for LValuePath {
    fn span(&self) -> Span {
        Span::join(self.segments.first().span(), &self.segments.last().span())
    }
}
