//! Extraction layer: reads declarations into the intermediate model.
//!
//! Each extractor is a pure function from a [`crate::syntax`] declaration to
//! owned values; nothing here is shared between declarations.
//!
//! ```text
//! StructDecl    ── extract_fields ────► Vec<Field>
//! EnumDecl      ── extract_cases ─────► Vec<Case>
//! FunctionDecl  ── extract_signature ─► FunctionSignature
//! ContainerDecl ── visible_functions ─► Vec<&FunctionDecl>
//! ```

mod cases;
mod fields;
mod signature;
mod visibility;

pub use cases::{Case, extract_cases};
pub use fields::{Field, extract_fields};
pub use signature::{FunctionSignature, Parameter, ReturnType, extract_signature};
pub use visibility::visible_functions;
