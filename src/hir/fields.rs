//! Field extraction from record declarations.

use tracing::trace;

use crate::base::Name;
use crate::base::constants::is_reserved_property;
use crate::syntax::{Storage, StructDecl, TypeDescriptor};

/// A stored field of a record declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: Name,
    pub ty: TypeDescriptor,
}

/// Extract the stored data fields of a record, in declaration order.
///
/// Computed properties and properties reserved for presentation protocols
/// (`description`, `debugDescription`, `hashValue`) are skipped.
pub fn extract_fields(decl: &StructDecl) -> Vec<Field> {
    decl.members
        .iter()
        .filter(|member| {
            if member.storage == Storage::Computed {
                trace!("{}: skipping computed property `{}`", decl.name, member.name);
                return false;
            }
            if is_reserved_property(&member.name) {
                trace!("{}: skipping reserved property `{}`", decl.name, member.name);
                return false;
            }
            true
        })
        .map(|member| Field {
            name: member.name.clone(),
            ty: TypeDescriptor::parse(&member.ty),
        })
        .collect()
}
