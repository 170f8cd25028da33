//! Type normalization into compact notation.
//!
//! Every path that touches a type expression goes through here. The rules:
//!
//! ```text
//! String?                    → String           (optional)
//! Optional<String>           → String           (optional)
//! Array<Int>                 → [Int]
//! Dictionary<String,Int>     → [String: Int]
//! [String:[Int]]             → [String: [Int]]
//! Result<User,Error>         → Result<User, Error>
//! ```
//!
//! Output of [`canonical_type`] is a fixed point: feeding it back in returns
//! the same text. Expressions the normalizer does not recognize, including
//! unbalanced ones, pass through with only their whitespace collapsed.
//!
//! Only one layer of optionality is stripped at the top level: `String??`
//! becomes base `String?` with `is_optional` set. An optional function type
//! keeps its parentheses (`((Int) -> Void)?`), while `(Int) -> String?` is a
//! required function returning an optional.

use std::fmt;

use crate::base::constants::{OPTIONAL_MARKER, STDLIB_MODULE_PREFIX};

/// A normalized type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDescriptor {
    /// Canonical type text without the outer optionality marker.
    pub base_name: String,
    /// Whether the outer type is optional.
    pub is_optional: bool,
}

impl TypeDescriptor {
    /// Normalize a raw type expression.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();

        // A top-level arrow means a function type; any trailing `?` belongs
        // to its result.
        if split_arrow(text).is_some() {
            return Self::required(canonical_type(text));
        }

        if let Some(inner) = text.strip_suffix(OPTIONAL_MARKER) {
            return Self::optional(group_function(canonical_type(inner)));
        }

        if let Some(("Optional", inner)) = generic_parts(text) {
            let args = split_top_level(inner, ',');
            if let [wrapped] = args.as_slice() {
                return Self::optional(group_function(canonical_type(wrapped)));
            }
        }

        Self::required(canonical_type(text))
    }

    /// A non-optional descriptor with already-canonical text.
    pub fn required(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            is_optional: false,
        }
    }

    /// An optional descriptor with already-canonical text.
    pub fn optional(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            is_optional: true,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base_name)?;
        if self.is_optional {
            write!(f, "{OPTIONAL_MARKER}")?;
        }
        Ok(())
    }
}

impl From<&str> for TypeDescriptor {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

/// Rewrite a type expression into canonical compact notation.
pub fn canonical_type(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    if !is_balanced(text) {
        tracing::debug!("unbalanced type expression passed through: {text}");
        return collapse_whitespace(text);
    }

    if let Some((params, result)) = split_arrow(text) {
        return format!("{} -> {}", canonical_type(params), canonical_type(result));
    }

    if let Some(inner) = text.strip_suffix(OPTIONAL_MARKER) {
        return optional_of(canonical_type(inner));
    }

    if let Some(inner) = wrapped(text, '[', ']') {
        let parts = split_top_level(inner, ':');
        match parts.as_slice() {
            [element] => return format!("[{}]", canonical_type(element)),
            [key, value] => {
                return format!("[{}: {}]", canonical_type(key), canonical_type(value));
            }
            _ => return collapse_whitespace(text),
        }
    }

    if let Some(inner) = wrapped(text, '(', ')') {
        if inner.trim().is_empty() {
            return "()".to_string();
        }
        let elements: Vec<String> = split_top_level(inner, ',')
            .into_iter()
            .map(canonical_tuple_element)
            .collect();
        return format!("({})", elements.join(", "));
    }

    if let Some((name, inner)) = generic_parts(text) {
        let args: Vec<String> = split_top_level(inner, ',')
            .into_iter()
            .map(canonical_type)
            .collect();
        return match (name, args.as_slice()) {
            ("Array", [element]) => format!("[{element}]"),
            ("Dictionary", [key, value]) => format!("[{key}: {value}]"),
            ("Optional", [wrapped]) => optional_of(wrapped.clone()),
            _ => format!("{}<{}>", name, args.join(", ")),
        };
    }

    collapse_whitespace(text)
}

/// Parenthesize a function type so a following marker binds to the whole type.
fn group_function(canonical: String) -> String {
    if split_arrow(&canonical).is_some() {
        format!("({canonical})")
    } else {
        canonical
    }
}

fn optional_of(canonical: String) -> String {
    format!("{}{OPTIONAL_MARKER}", group_function(canonical))
}

/// Tuple elements may carry a label (`x: Int`).
fn canonical_tuple_element(element: &str) -> String {
    match split_top_level(element, ':').as_slice() {
        [label, ty] => format!("{}: {}", label.trim(), canonical_type(ty)),
        _ => canonical_type(element),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// SCANNING HELPERS
// ============================================================================

fn closer_for(open: char) -> Option<char> {
    match open {
        '<' => Some('>'),
        '[' => Some(']'),
        '(' => Some(')'),
        _ => None,
    }
}

/// Walk `text`, calling `visit(index, char, depth)` for every character that
/// is not part of a `->` arrow. Returns `false` on mismatched brackets.
fn scan(text: &str, mut visit: impl FnMut(usize, char, usize) -> bool) -> bool {
    let mut stack: Vec<char> = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c == '-' && matches!(chars.peek(), Some((_, '>'))) {
            if !visit(idx, c, stack.len()) {
                return true;
            }
            chars.next();
            continue;
        }
        if let Some(close) = closer_for(c) {
            if !visit(idx, c, stack.len()) {
                return true;
            }
            stack.push(close);
            continue;
        }
        if matches!(c, '>' | ']' | ')') {
            if stack.pop() != Some(c) {
                return false;
            }
            if !visit(idx, c, stack.len()) {
                return true;
            }
            continue;
        }
        if !visit(idx, c, stack.len()) {
            return true;
        }
    }

    stack.is_empty()
}

fn is_balanced(text: &str) -> bool {
    scan(text, |_, _, _| true)
}

/// Index of the bracket closing the one opened at `open_idx`.
fn find_matching(text: &str, open_idx: usize) -> Option<usize> {
    let mut found = None;
    scan(text, |idx, c, depth| {
        if idx > open_idx && depth == 0 && matches!(c, '>' | ']' | ')') {
            found = Some(idx);
            return false;
        }
        true
    });
    found
}

/// Inner text if `text` is exactly one `open ... close` group.
fn wrapped(text: &str, open: char, close: char) -> Option<&str> {
    if !text.starts_with(open) || !text.ends_with(close) {
        return None;
    }
    let last = text.len() - close.len_utf8();
    (find_matching(text, 0)? == last).then(|| &text[open.len_utf8()..last])
}

/// Split `Name<args>` into the unqualified name and the argument text.
fn generic_parts(text: &str) -> Option<(&str, &str)> {
    let open = text.find('<')?;
    let name = &text[..open];
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
    {
        return None;
    }
    let last = text.len() - 1;
    if !text.ends_with('>') || find_matching(text, open)? != last {
        return None;
    }
    let name = name.strip_prefix(STDLIB_MODULE_PREFIX).unwrap_or(name);
    Some((name, &text[open + 1..last]))
}

/// Split on `sep` where it appears outside any bracket.
fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    scan(text, |idx, c, depth| {
        if depth == 0 && c == sep {
            parts.push(&text[start..idx]);
            start = idx + c.len_utf8();
        }
        true
    });
    parts.push(&text[start..]);
    parts
}

/// Split a function type at its first top-level `->`.
fn split_arrow(text: &str) -> Option<(&str, &str)> {
    let mut arrow = None;
    scan(text, |idx, c, depth| {
        if depth == 0 && c == '-' && text[idx..].starts_with("->") {
            arrow = Some(idx);
            return false;
        }
        true
    });
    arrow.map(|idx| (&text[..idx], &text[idx + 2..]))
}
