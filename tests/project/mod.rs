//! Documentation registry tests
