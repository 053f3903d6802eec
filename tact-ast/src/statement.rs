use crate::priv_prelude::*;

#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    Let {
        name: Ident,
        ty: TypeRef,
        expr: Expr,
        span: Span,
    },
    Return {
        expr: Option<Expr>,
        span: Span,
    },
    Expression {
        expr: Expr,
        span: Span,
    },
    Assign {
        path: LValuePath,
        expr: Expr,
        span: Span,
    },
    /// An `if` statement. An `else if` tail is kept as a nested condition in
    /// `else_if` rather than being flattened; the final `else` block of a chain
    /// lives in the innermost condition's `false_statements`.
    Condition {
        condition: Expr,
        true_statements: Vec<Statement>,
        false_statements: Vec<Statement>,
        else_if: Option<Box<Statement>>,
        span: Span,
    },
    While {
        condition: Expr,
        statements: Vec<Statement>,
        span: Span,
    },
    Repeat {
        condition: Expr,
        statements: Vec<Statement>,
        span: Span,
    },
    /// `do { .. } until (condition);` The condition is evaluated after the body.
    Until {
        condition: Expr,
        statements: Vec<Statement>,
        span: Span,
    },
}

impl Spanned for Statement {
    fn span(&self) -> Span {
        match self {
            Statement::Let { span, .. } => span.clone(),
            Statement::Return { span, .. } => span.clone(),
            Statement::Expression { span, .. } => span.clone(),
            Statement::Assign { span, .. } => span.clone(),
            Statement::Condition { span, .. } => span.clone(),
            Statement::While { span, .. } => span.clone(),
            Statement::Repeat { span, .. } => span.clone(),
            Statement::Until { span, .. } => span.clone(),
        }
    }
}
