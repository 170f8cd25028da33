//! Kind-dispatched generation for single declarations and batches.

use rayon::prelude::*;

use crate::syntax::Declaration;

use super::RenderOptions;
use super::schema::{enum_schema, struct_schema};
use super::signature::{container_signatures, function_signature};

/// Output produced for one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    /// Compact schema of a struct or enum.
    Schema(String),
    /// Compact signature of a function.
    Signature(String),
    /// Signatures of a container's exported functions.
    Signatures(Vec<String>),
}

impl Generated {
    /// Every rendered string, in order.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::Schema(text) | Self::Signature(text) => vec![text.as_str()],
            Self::Signatures(list) => list.iter().map(String::as_str).collect(),
        }
    }
}

/// Generate whatever output fits the declaration's kind.
pub fn generate(decl: &Declaration, options: &RenderOptions) -> Generated {
    match decl {
        Declaration::Struct(decl) => Generated::Schema(struct_schema(decl, options)),
        Declaration::Enum(decl) => Generated::Schema(enum_schema(decl)),
        Declaration::Function(decl) => Generated::Signature(function_signature(decl, options)),
        Declaration::Container(decl) => {
            Generated::Signatures(container_signatures(decl, options))
        }
    }
}

/// Generate output for independent declarations in parallel.
///
/// Results are returned in input order.
pub fn generate_all(decls: &[Declaration], options: &RenderOptions) -> Vec<Generated> {
    decls.par_iter().map(|decl| generate(decl, options)).collect()
}
