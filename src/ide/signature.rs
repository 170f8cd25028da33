//! Compact signatures for function declarations.

use tracing::debug;

use crate::base::constants::{ASYNC_KEYWORD, RETURN_ARROW, THROWS_KEYWORD};
use crate::hir::{FunctionSignature, Parameter, ReturnType, extract_signature, visible_functions};
use crate::syntax::{ContainerDecl, Declaration, FunctionDecl};

use super::error::{GenerateError, Result};
use super::{LabelPolicy, RenderOptions};

/// Render an extracted signature as `name(params) async throws -> Type`.
pub fn format_signature(sig: &FunctionSignature, options: &RenderOptions) -> String {
    let params: Vec<String> = sig
        .parameters
        .iter()
        .map(|param| format_parameter(param, options.labels))
        .collect();

    let mut out = format!("{}({})", sig.name, params.join(", "));
    if sig.may_suspend {
        out.push(' ');
        out.push_str(ASYNC_KEYWORD);
    }
    if sig.may_fail {
        out.push(' ');
        out.push_str(THROWS_KEYWORD);
    }
    if let ReturnType::Type(ty) = &sig.return_type {
        out.push_str(&format!(" {RETURN_ARROW} {ty}"));
    }
    out
}

fn format_parameter(param: &Parameter, labels: LabelPolicy) -> String {
    match (&param.label, labels) {
        (Some(label), LabelPolicy::Preserve) => format!("{}: {}", label, param.ty),
        _ => param.ty.to_string(),
    }
}

/// Compact signature of a function declaration.
pub fn function_signature(decl: &FunctionDecl, options: &RenderOptions) -> String {
    format_signature(&extract_signature(decl), options)
}

/// Compact signature of a declaration that must be a function.
pub fn signature(decl: &Declaration, options: &RenderOptions) -> Result<String> {
    match decl {
        Declaration::Function(function) => Ok(function_signature(function, options)),
        other => Err(GenerateError::invalid_kind(
            other.name().clone(),
            other.kind(),
            "a function",
        )),
    }
}

/// Signatures of the `public` and `open` functions of a container, in
/// declaration order.
pub fn container_signatures(decl: &ContainerDecl, options: &RenderOptions) -> Vec<String> {
    let signatures: Vec<String> = visible_functions(decl)
        .into_iter()
        .map(|function| function_signature(function, options))
        .collect();
    debug!(
        "{}: {} of {} functions exported",
        decl.name,
        signatures.len(),
        decl.functions.len()
    );
    signatures
}

/// Bulk signatures of a declaration that must be a container.
pub fn signatures(decl: &Declaration, options: &RenderOptions) -> Result<Vec<String>> {
    match decl {
        Declaration::Container(container) => Ok(container_signatures(container, options)),
        other => Err(GenerateError::invalid_kind(
            other.name().clone(),
            other.kind(),
            "a container",
        )),
    }
}
