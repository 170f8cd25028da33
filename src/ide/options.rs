//! Rendering options

/// How parameter labels appear in rendered signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelPolicy {
    /// Render `label: Type` when a parameter has an external label.
    #[default]
    Preserve,
    /// Render the type alone for every parameter.
    Positional,
}

/// Rendering options for schemas and signatures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of spaces before each field line in a struct schema
    pub indent: usize,
    /// Parameter label policy for signatures
    pub labels: LabelPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            labels: LabelPolicy::Preserve,
        }
    }
}

impl RenderOptions {
    /// Generate the indentation string for a field line
    pub fn indent(&self) -> String {
        " ".repeat(self.indent)
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_labels(mut self, labels: LabelPolicy) -> Self {
        self.labels = labels;
        self
    }
}
