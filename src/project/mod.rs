//! Project-level state: the documentation registry.

mod registry;

pub use registry::{DocRegistry, RegistryEntry, RegistrySnapshot, global};
