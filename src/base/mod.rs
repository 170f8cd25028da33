//! Foundation types for the outline engine.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Name`] - Cheap-to-clone identifier text
//! - [`Visibility`] - Declared accessibility tier of a member
//! - Domain constants (reserved property names, rendering markers)
//!
//! This module has NO dependencies on other outline modules.

pub mod constants;
mod visibility;

pub use visibility::Visibility;

/// Identifier text for declarations, members, cases and labels.
pub type Name = smol_str::SmolStr;
