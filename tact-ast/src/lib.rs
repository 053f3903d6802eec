pub mod attribute;
pub mod declaration;
pub mod expr;
pub mod item;
pub mod lvalue;
pub mod module;
mod priv_prelude;
pub mod statement;
pub mod ty;

pub use crate::{
    attribute::{ContractAttribute, FunctionAttribute, FunctionAttributeKind},
    declaration::{
        ArgumentDecl, ConstantDecl, ContractDeclaration, FieldDecl, FunctionDecl,
        InitFunctionDecl, NativeFunctionDecl, ReceiverDecl, ReceiverSelector,
    },
    expr::{BinaryOp, Expr, NewParameter, StringLiteral, UnaryOp},
    item::{ItemContract, ItemImport, ItemPrimitive, ItemStruct, ItemTrait, ProgramItem},
    lvalue::LValuePath,
    module::Program,
    statement::Statement,
    ty::TypeRef,
};

pub use num_bigint::BigUint;
