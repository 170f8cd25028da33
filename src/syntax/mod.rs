//! Syntax layer: the declaration model and the type normalizer.
//!
//! ```text
//! Declaration
//! ├── Struct(StructDecl)        members: name, type text, stored/computed
//! ├── Enum(EnumDecl)            cases: name, raw literal
//! ├── Function(FunctionDecl)    params, async/throws, return clause
//! └── Container(ContainerDecl)  function members with visibility
//! ```

mod decl;
mod types;

pub use decl::{
    CaseDecl, ContainerDecl, DeclKind, Declaration, EnumDecl, FunctionDecl, MemberDecl, ParamDecl,
    Storage, StructDecl,
};
pub use types::{TypeDescriptor, canonical_type};
