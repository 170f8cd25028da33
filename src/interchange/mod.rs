//! Declaration interchange: the file boundary of the two-phase pipeline.
//!
//! ```text
//! ┌──────────────┐  read   ┌───────────────────┐  Artifact::build  ┌───────────┐
//! │ JSON / YAML  │───────▶ │ Vec<Declaration>  │─────────────────▶ │ Artifact  │
//! │ (parser out) │         └───────────────────┘                   └─────┬─────┘
//! └──────────────┘                                        write ◀────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use outline::interchange::{Artifact, load_file, write_file};
//! use outline::ide::RenderOptions;
//!
//! let decls = load_file("decls.json".as_ref())?;
//! let artifact = Artifact::build(&decls, &RenderOptions::default());
//! write_file("outline.yaml".as_ref(), &artifact)?;
//! ```

mod artifact;
mod error;
mod format;
mod json;
mod yaml;

use std::path::Path;

pub use artifact::Artifact;
pub use error::InterchangeError;
pub use format::DeclarationFormat;
pub use json::Json;
pub use yaml::Yaml;

use crate::syntax::Declaration;

/// Every available format, in detection order.
static FORMATS: &[&dyn DeclarationFormat] = &[&Json, &Yaml];

/// Supported file extensions for interchange formats.
pub fn supported_extensions() -> Vec<&'static str> {
    FORMATS
        .iter()
        .flat_map(|format| format.extensions().iter().copied())
        .collect()
}

/// Detect format from file extension.
pub fn detect_format(path: &Path) -> Option<&'static dyn DeclarationFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    FORMATS
        .iter()
        .copied()
        .find(|format| format.extensions().contains(&ext.as_str()))
}

/// Detect format from MIME type.
pub fn detect_format_from_mime(mime: &str) -> Option<&'static dyn DeclarationFormat> {
    FORMATS
        .iter()
        .copied()
        .find(|format| format.mime_type() == mime)
}

fn format_for(path: &Path) -> Result<&'static dyn DeclarationFormat, InterchangeError> {
    detect_format(path).ok_or_else(|| {
        InterchangeError::Unsupported(format!("no interchange format for {}", path.display()))
    })
}

/// Read a declaration list from a file, choosing the format by extension.
pub fn load_file(path: &Path) -> Result<Vec<Declaration>, InterchangeError> {
    let format = format_for(path)?;
    let bytes = std::fs::read(path)?;
    format.read(&bytes)
}

/// Write an artifact to a file, choosing the format by extension.
pub fn write_file(path: &Path, artifact: &Artifact) -> Result<(), InterchangeError> {
    let format = format_for(path)?;
    std::fs::write(path, format.write(artifact)?)?;
    Ok(())
}
