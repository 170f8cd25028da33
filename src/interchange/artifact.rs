//! Generated text keyed by declaration name.
//!
//! An [`Artifact`] is the sidecar the attachment step reads: one entry per
//! declaration, holding exactly what the engine produced for it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::base::Name;
use crate::ide::{Generated, RenderOptions, generate_all};
use crate::project::DocRegistry;
use crate::syntax::Declaration;

/// Generated schemas and signatures keyed by declaration name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Struct and enum schemas.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<Name, String>,

    /// Signatures of standalone functions.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub signatures: IndexMap<Name, String>,

    /// Exported function signatures of containers.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub method_lists: IndexMap<Name, Vec<String>>,
}

impl Artifact {
    /// Generate output for every declaration.
    ///
    /// When two declarations share a name the first one wins.
    pub fn build(decls: &[Declaration], options: &RenderOptions) -> Self {
        let mut artifact = Self::default();
        for (decl, generated) in decls.iter().zip(generate_all(decls, options)) {
            let name = decl.name().clone();
            if artifact.contains(&name) {
                debug!("artifact: duplicate declaration `{}` ignored", name);
                continue;
            }
            match generated {
                Generated::Schema(schema) => {
                    artifact.schemas.insert(name, schema);
                }
                Generated::Signature(signature) => {
                    artifact.signatures.insert(name, signature);
                }
                Generated::Signatures(list) => {
                    artifact.method_lists.insert(name, list);
                }
            }
        }
        artifact
    }

    /// Whether any output is recorded under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
            || self.signatures.contains_key(name)
            || self.method_lists.contains_key(name)
    }

    /// Push everything into a registry.
    ///
    /// Container method lists are registered under the container's name;
    /// standalone function signatures under their own name.
    pub fn register_into(&self, registry: &DocRegistry) {
        for (name, list) in &self.method_lists {
            registry.register_methods(name, list.iter().map(String::as_str));
        }
        for (name, signature) in &self.signatures {
            registry.register_method(name, signature.as_str());
        }
        for (name, schema) in &self.schemas {
            registry.register_schema(name.clone(), schema.as_str());
        }
    }
}
