use std::fs;
use std::path::Path;

use ttf_parser::Face;

use crate::error::RenderError;

/// A TrueType font loaded from disk, kept as raw bytes so the same data can
/// be measured here and embedded by the PDF writer.
pub struct FontAsset {
    bytes: Vec<u8>,
}

impl FontAsset {
    /// Read and validate the font file at `path`.
    ///
    /// Rejects non-font data up front instead of failing mid-render.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let bytes = fs::read(path).map_err(|e| RenderError::Asset {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Face::parse(&bytes, 0).map_err(|e| RenderError::Asset {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Width of `text` at `font_size` points, summed from glyph horizontal
    /// advances. Characters without a glyph in this font contribute no
    /// width; the configured font is expected to cover the header alphabet.
    pub fn text_width(&self, text: &str, font_size: f64) -> f64 {
        let face = Face::parse(&self.bytes, 0).expect("validated in load()");

        let advance: u32 = text
            .chars()
            .filter_map(|c| face.glyph_index(c))
            .filter_map(|glyph| face.glyph_hor_advance(glyph))
            .map(u32::from)
            .sum();

        f64::from(advance) / f64::from(face.units_per_em()) * font_size
    }
}
