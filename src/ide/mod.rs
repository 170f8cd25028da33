//! Rendering layer: turns extracted declarations into compact text.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: Take declarations in, return strings out
//! 2. **No registration**: Nothing here touches the documentation registry
//! 3. **Fail fast**: Kind mismatches surface as [`GenerateError`] at the call
//!
//! ## Usage
//!
//! ```
//! use outline::ide::{RenderOptions, struct_schema};
//! use outline::syntax::StructDecl;
//!
//! let user = StructDecl::new("User").field("id", "String").field("email", "String?");
//! let text = struct_schema(&user, &RenderOptions::default());
//! assert_eq!(text, "User {\n  id: String\n  email: String?\n}");
//! ```

mod error;
mod generate;
mod options;
mod schema;
mod signature;

pub use error::{GenerateError, Result};
pub use generate::{Generated, generate, generate_all};
pub use options::{LabelPolicy, RenderOptions};
pub use schema::{enum_schema, render_enum, render_struct, schema, struct_schema};
pub use signature::{
    container_signatures, format_signature, function_signature, signature, signatures,
};
