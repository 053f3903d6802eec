pub(crate) use {
    crate::{
        attribute::{ContractAttribute, FunctionAttribute},
        declaration::{ContractDeclaration, FieldDecl, FunctionDecl, NativeFunctionDecl},
        expr::{Expr, StringLiteral},
        item::{ItemImport, ProgramItem},
        lvalue::LValuePath,
        statement::Statement,
        ty::TypeRef,
    },
    num_bigint::BigUint,
    serde::Serialize,
    tact_types::{Ident, Span, Spanned},
    vec1::Vec1,
};
