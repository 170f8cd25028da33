//! Case extraction from union declarations.

use crate::base::Name;
use crate::syntax::EnumDecl;

/// A case of a union declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub name: Name,
    /// Raw value literal, echoed verbatim.
    pub raw_value: Option<String>,
}

/// Extract the cases of a union in declaration order.
pub fn extract_cases(decl: &EnumDecl) -> Vec<Case> {
    decl.cases
        .iter()
        .map(|case| Case {
            name: case.name.clone(),
            raw_value: case.raw_value.clone(),
        })
        .collect()
}
