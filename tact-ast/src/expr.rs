use crate::priv_prelude::*;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// An integer literal. Decimal and hexadecimal spellings produce the same value.
    Number {
        value: BigUint,
        span: Span,
    },
    Boolean {
        value: bool,
        span: Span,
    },
    String(StringLiteral),
    Null {
        span: Span,
    },
    Identifier(Ident),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        span: Span,
    },
    /// `src.name`
    FieldAccess {
        src: Box<Expr>,
        name: Ident,
        span: Span,
    },
    /// `src.name(args)`
    MethodCall {
        src: Box<Expr>,
        name: Ident,
        args: Vec<Expr>,
        span: Span,
    },
    /// `name(args)`
    StaticCall {
        name: Ident,
        args: Vec<Expr>,
        span: Span,
    },
    /// `Type { name: expr, .. }`
    New {
        ty: Ident,
        args: Vec<NewParameter>,
        span: Span,
    },
    /// `initOf Contract(args)`
    InitOf {
        name: Ident,
        args: Vec<Expr>,
        span: Span,
    },
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Number { span, .. } => span.clone(),
            Expr::Boolean { span, .. } => span.clone(),
            Expr::String(literal) => literal.span(),
            Expr::Null { span } => span.clone(),
            Expr::Identifier(ident) => ident.span(),
            Expr::Binary { span, .. } => span.clone(),
            Expr::Unary { span, .. } => span.clone(),
            Expr::FieldAccess { span, .. } => span.clone(),
            Expr::MethodCall { span, .. } => span.clone(),
            Expr::StaticCall { span, .. } => span.clone(),
            Expr::New { span, .. } => span.clone(),
            Expr::InitOf { span, .. } => span.clone(),
        }
    }
}

/// A string literal. `value` is the text between the quotes, taken verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

impl Spanned for StringLiteral {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

/// A named argument of an object construction expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewParameter {
    pub name: Ident,
    pub expr: Expr,
    pub span: Span,
}

impl Spanned for NewParameter {
    fn span(&self) -> Span {
        self.span.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Rem,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Neq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "&&")]
    And,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::Gt => ">",
            BinaryOp::Gte => ">=",
            BinaryOp::Lt => "<",
            BinaryOp::Lte => "<=",
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOp {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Neg,
    #[serde(rename = "!")]
    Not,
    /// Postfix `!!`, asserts that the operand is not null.
    #[serde(rename = "!!")]
    NotNull,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::NotNull => "!!",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
