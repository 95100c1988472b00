use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the shopping list renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The configured font asset is missing, unreadable, or not a TrueType
    /// font. Fatal for the render call: substituting a font without the
    /// required glyphs would produce an unreadable document.
    #[error("font asset {path:?} unusable: {reason}")]
    Asset { path: PathBuf, reason: String },

    #[error("failed to assemble PDF document: {0}")]
    Pdf(String),
}
