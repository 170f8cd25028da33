//! Signature extraction from function declarations.

use crate::base::Name;
use crate::base::constants::VOID_SPELLINGS;
use crate::syntax::{FunctionDecl, TypeDescriptor};

/// A function parameter as it appears at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// External label; the internal binding name is not kept.
    pub label: Option<Name>,
    pub ty: TypeDescriptor,
}

/// What a function returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    Void,
    Type(TypeDescriptor),
}

impl ReturnType {
    /// Classify a return clause. No clause, `Void` and `()` all mean void.
    pub fn from_clause(clause: Option<&str>) -> Self {
        match clause.map(str::trim) {
            None => Self::Void,
            Some(text) if text.is_empty() || VOID_SPELLINGS.contains(&text) => Self::Void,
            Some(text) => Self::Type(TypeDescriptor::parse(text)),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }
}

/// The call contract of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: Name,
    pub parameters: Vec<Parameter>,
    pub may_suspend: bool,
    pub may_fail: bool,
    pub return_type: ReturnType,
}

/// Extract the signature of a function declaration.
pub fn extract_signature(decl: &FunctionDecl) -> FunctionSignature {
    FunctionSignature {
        name: decl.name.clone(),
        parameters: decl
            .params
            .iter()
            .map(|param| Parameter {
                label: param.label.clone(),
                ty: TypeDescriptor::parse(&param.ty),
            })
            .collect(),
        may_suspend: decl.is_async,
        may_fail: decl.is_throws,
        return_type: ReturnType::from_clause(decl.return_type.as_deref()),
    }
}
