//! Selection of externally visible container members.

use tracing::trace;

use crate::syntax::{ContainerDecl, FunctionDecl};

/// The `public` and `open` functions of a container, in declaration order.
pub fn visible_functions(decl: &ContainerDecl) -> Vec<&FunctionDecl> {
    decl.functions
        .iter()
        .filter(|function| {
            let exported = function.visibility.is_exported();
            if !exported {
                trace!(
                    "{}: skipping {} function `{}`",
                    decl.name, function.visibility, function.name
                );
            }
            exported
        })
        .collect()
}
