//! Rendering tests
//!
//! Tests for:
//! - Struct and enum schemas
//! - Function signatures
//! - Bulk container signatures
//! - Kind-dispatched and batch generation

pub mod tests_generate;
pub mod tests_signature;
