//! Type normalization tests

pub mod tests_type_normalizer;
