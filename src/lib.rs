//! # outline-base
//!
//! Compact schemas and signatures for type and function declarations.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project     → Documentation registry
//!   ↓
//! ide         → Schema builders, signature formatter, batch generation
//!   ↓
//! hir         → Field / case / signature extraction, visibility filter
//!   ↓
//! syntax      → Declaration model, type normalizer
//!   ↓
//! base        → Primitives (Name, Visibility, constants)
//! ```
//!
//! ## Example
//!
//! ```
//! use outline::ide::{RenderOptions, generate};
//! use outline::project::DocRegistry;
//! use outline::syntax::{Declaration, FunctionDecl};
//!
//! let decl: Declaration = FunctionDecl::new("fetchUser")
//!     .asynchronous()
//!     .throwing()
//!     .returns("TestUser")
//!     .into();
//!
//! let generated = generate(&decl, &RenderOptions::default());
//! assert_eq!(generated.lines(), ["fetchUser() async throws -> TestUser"]);
//!
//! let registry = DocRegistry::new();
//! registry.register(decl.name(), &generated);
//! assert_eq!(registry.all_methods(), ["fetchUser() async throws -> TestUser"]);
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → hir → ide → project)
// ============================================================================

/// Foundation types: Name, Visibility, reserved constants
pub mod base;

/// Syntax: declaration model and type normalization
pub mod syntax;

/// Extraction: fields, cases, signatures, visibility filtering
pub mod hir;

/// Rendering: compact schemas and signatures
pub mod ide;

/// Project state: documentation registry
pub mod project;

/// Declaration input and artifact output: JSON, YAML
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export the common entry points
pub use base::{Name, Visibility};
pub use ide::{GenerateError, Generated, RenderOptions, generate};
pub use syntax::{Declaration, TypeDescriptor};
