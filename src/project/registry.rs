//! Documentation registry: accumulates generated text for combined output.
//!
//! Nothing is registered implicitly. Generating a schema or signature never
//! touches the registry; callers push results in with the `register_*`
//! methods after each generation step.
//!
//! ## Usage
//!
//! ```
//! use outline::project::DocRegistry;
//!
//! let registry = DocRegistry::new();
//! registry.register_methods("UserService", ["fetchUser(id: String) async throws -> User"]);
//! registry.register_schema("User", "User {\n  id: String\n}");
//!
//! let doc = registry.complete_documentation();
//! assert!(doc.starts_with("# API Documentation\n\n## Methods\n"));
//! ```

use std::sync::LazyLock;

use indexmap::IndexMap;
use parking_lot::RwLock;
use tracing::debug;

use crate::base::Name;
use crate::ide::Generated;

/// The signatures registered under one category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryEntry {
    pub category: String,
    /// Signatures in registration order.
    pub signatures: Vec<String>,
}

/// Immutable copy of the registry contents.
#[derive(Clone, Debug, Default)]
pub struct RegistrySnapshot {
    methods: IndexMap<String, RegistryEntry>,
    models: IndexMap<Name, String>,
}

impl RegistrySnapshot {
    /// All signatures, category by category, in registration order.
    pub fn all_methods(&self) -> Vec<String> {
        self.methods
            .values()
            .flat_map(|entry| entry.signatures.iter().cloned())
            .collect()
    }

    /// Signatures grouped by category, in first-registration order.
    pub fn methods_by_category(&self) -> IndexMap<String, Vec<String>> {
        self.methods
            .iter()
            .map(|(category, entry)| (category.clone(), entry.signatures.clone()))
            .collect()
    }

    /// Registered category entries.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.methods.values()
    }

    /// Registered data-model schemas keyed by declaration name.
    pub fn data_models(&self) -> impl Iterator<Item = (&str, &str)> {
        self.models
            .iter()
            .map(|(name, schema)| (name.as_str(), schema.as_str()))
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.models.is_empty()
    }

    /// Render the combined markdown document.
    ///
    /// The `## Methods` section is left out when no methods are registered;
    /// the `## Data Models` heading is always present.
    pub fn complete_documentation(&self) -> String {
        let mut doc = String::from("# API Documentation\n\n");

        let methods = self.all_methods();
        if !methods.is_empty() {
            doc.push_str("## Methods\n\n");
            for method in &methods {
                doc.push_str(method);
                doc.push('\n');
            }
            doc.push('\n');
        }

        doc.push_str("## Data Models\n");
        for schema in self.models.values() {
            doc.push('\n');
            doc.push_str(schema);
            doc.push('\n');
        }

        doc
    }
}

/// Category-organized collection of generated signatures and schemas.
///
/// Writers are serialized behind a lock; readers copy a [`RegistrySnapshot`]
/// under a short read lock and work from that.
#[derive(Debug, Default)]
pub struct DocRegistry {
    state: RwLock<RegistrySnapshot>,
}

impl DocRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register signatures under a category.
    ///
    /// Categories are sets: this registry ignores a signature already present
    /// in the category rather than listing it twice.
    pub fn register_methods<I, S>(&self, category: &str, signatures: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.state.write();
        let entry = state
            .methods
            .entry(category.to_string())
            .or_insert_with(|| RegistryEntry {
                category: category.to_string(),
                signatures: Vec::new(),
            });
        for signature in signatures {
            let signature = signature.into();
            if !entry.signatures.contains(&signature) {
                entry.signatures.push(signature);
            }
        }
        debug!(
            "registry: category `{}` now holds {} signatures",
            category,
            entry.signatures.len()
        );
    }

    /// Register a single signature under a category.
    pub fn register_method(&self, category: &str, signature: impl Into<String>) {
        self.register_methods(category, [signature.into()]);
    }

    /// Register the schema of a data model.
    ///
    /// Schemas are immutable once registered: returns `false` and leaves the
    /// existing text in place if `name` is already present.
    pub fn register_schema(&self, name: impl Into<Name>, schema: impl Into<String>) -> bool {
        let name = name.into();
        let mut state = self.state.write();
        if state.models.contains_key(&name) {
            debug!("registry: schema for `{}` already registered", name);
            return false;
        }
        state.models.insert(name, schema.into());
        true
    }

    /// Register generated output for a declaration.
    ///
    /// Schemas are keyed by `name`; signatures go under the category `name`.
    pub fn register(&self, name: &str, generated: &Generated) {
        match generated {
            Generated::Schema(schema) => {
                self.register_schema(name, schema.as_str());
            }
            Generated::Signature(signature) => self.register_method(name, signature.as_str()),
            Generated::Signatures(list) => {
                self.register_methods(name, list.iter().map(String::as_str))
            }
        }
    }

    /// Take an immutable copy of the current contents.
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.state.read().clone()
    }

    /// All signatures, category by category, in registration order.
    pub fn all_methods(&self) -> Vec<String> {
        self.snapshot().all_methods()
    }

    /// Signatures grouped by category.
    pub fn methods_by_category(&self) -> IndexMap<String, Vec<String>> {
        self.snapshot().methods_by_category()
    }

    /// Render the combined markdown document.
    pub fn complete_documentation(&self) -> String {
        self.snapshot().complete_documentation()
    }

    /// Remove everything.
    pub fn clear(&self) {
        *self.state.write() = RegistrySnapshot::default();
    }
}

static GLOBAL: LazyLock<DocRegistry> = LazyLock::new(DocRegistry::new);

/// The process-wide registry.
pub fn global() -> &'static DocRegistry {
    &GLOBAL
}
