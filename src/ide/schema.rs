//! Compact schemas for record and union declarations.
//!
//! ```text
//! TestUser {
//!   id: String
//!   email: String?
//! }
//!
//! enum TestStatus: [active = "active" | inactive = "inactive"]
//! ```

use crate::hir::{Case, Field, extract_cases, extract_fields};
use crate::syntax::{Declaration, EnumDecl, StructDecl};

use super::RenderOptions;
use super::error::{GenerateError, Result};

/// Build the compact schema of a record declaration.
pub fn struct_schema(decl: &StructDecl, options: &RenderOptions) -> String {
    render_struct(&decl.name, &extract_fields(decl), options)
}

/// Build the compact schema of a union declaration.
pub fn enum_schema(decl: &EnumDecl) -> String {
    render_enum(&decl.name, &extract_cases(decl))
}

/// Build the compact schema of a record or union declaration.
pub fn schema(decl: &Declaration, options: &RenderOptions) -> Result<String> {
    match decl {
        Declaration::Struct(decl) => Ok(struct_schema(decl, options)),
        Declaration::Enum(decl) => Ok(enum_schema(decl)),
        other => Err(GenerateError::invalid_kind(
            other.name().clone(),
            other.kind(),
            "a struct or enum",
        )),
    }
}

/// Render a record schema from extracted fields.
///
/// A record with no fields renders as `Name {}`.
pub fn render_struct(name: &str, fields: &[Field], options: &RenderOptions) -> String {
    if fields.is_empty() {
        return format!("{name} {{}}");
    }

    let indent = options.indent();
    let mut out = format!("{name} {{\n");
    for field in fields {
        out.push_str(&indent);
        out.push_str(&field.name);
        out.push_str(": ");
        out.push_str(&field.ty.to_string());
        out.push('\n');
    }
    out.push('}');
    out
}

/// Render a union schema from extracted cases.
pub fn render_enum(name: &str, cases: &[Case]) -> String {
    let cases: Vec<String> = cases
        .iter()
        .map(|case| match &case.raw_value {
            Some(raw) => format!("{} = {}", case.name, raw),
            None => case.name.to_string(),
        })
        .collect();
    format!("enum {}: [{}]", name, cases.join(" | "))
}
