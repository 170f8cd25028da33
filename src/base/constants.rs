//! Domain constants shared by the extractors and formatters.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Stored property names contributed by presentation protocol conformances.
///
/// These describe how a value prints or hashes, not what it holds, so the
/// field extractor never reports them.
pub const RESERVED_PROPERTY_NAMES: &[&str] = &["description", "debugDescription", "hashValue"];

static RESERVED_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| RESERVED_PROPERTY_NAMES.iter().copied().collect());

/// Check whether a stored property name is reserved for a presentation protocol.
pub fn is_reserved_property(name: &str) -> bool {
    RESERVED_SET.contains(name)
}

/// Trailing marker for optional types (`String?`).
pub const OPTIONAL_MARKER: char = '?';

/// Qualifier rendered for functions that may suspend.
pub const ASYNC_KEYWORD: &str = "async";

/// Qualifier rendered for functions that may fail.
pub const THROWS_KEYWORD: &str = "throws";

/// Separator between a parameter list and its return type.
pub const RETURN_ARROW: &str = "->";

/// Return type spellings that mean "returns nothing".
pub const VOID_SPELLINGS: &[&str] = &["Void", "()"];

/// Optional module prefix accepted on the standard generic containers.
pub const STDLIB_MODULE_PREFIX: &str = "Swift.";
