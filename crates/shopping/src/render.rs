use printpdf::{Mm, PdfDocument, Pt};

use crate::aggregation::AggregatedLine;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::font::FontAsset;
use crate::layout::{self, CONTENT_X, FONT_SIZE};

/// Shopping list PDF renderer
///
/// Turns aggregated cart lines into a finished multi-page PDF. Each call
/// loads the configured font, lays the lines out onto pages and paints them.
/// Nothing is cached between calls, so concurrent renders only share the
/// read-only font file on disk.
pub struct ShoppingListRenderer {
    config: RenderConfig,
}

impl ShoppingListRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the aggregated lines into PDF bytes.
    ///
    /// The whole document is built in memory and returned as one buffer
    /// ready to stream. An empty input still yields a valid single-page
    /// document containing only the header.
    pub fn render(&self, lines: &[AggregatedLine]) -> Result<Vec<u8>, RenderError> {
        let font = FontAsset::load(&self.config.font_asset)?;
        let header_width = font.text_width(&self.config.header_text, FONT_SIZE);
        let pages = layout::paginate(lines, &self.config, header_width);

        let page_width = Mm::from(Pt(self.config.page_width as f32));
        let page_height = Mm::from(Pt(self.config.page_height as f32));

        let (doc, first_page, first_layer) =
            PdfDocument::new("Shopping list", page_width, page_height, "content");
        let font_ref = doc
            .add_external_font(font.bytes())
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        for (index, page) in pages.iter().enumerate() {
            if index > 0 {
                let (page_index, layer_index) = doc.add_page(page_width, page_height, "content");
                layer = doc.get_page(page_index).get_layer(layer_index);
            }

            layer.use_text(
                self.config.header_text.as_str(),
                FONT_SIZE as f32,
                Mm::from(Pt(page.header_x as f32)),
                Mm::from(Pt(page.header_y as f32)),
                &font_ref,
            );

            for placed in &page.lines {
                layer.use_text(
                    placed.text.as_str(),
                    FONT_SIZE as f32,
                    Mm::from(Pt(CONTENT_X as f32)),
                    Mm::from(Pt(placed.y as f32)),
                    &font_ref,
                );
            }
        }

        let page_count = pages.len();
        let bytes = doc
            .save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        tracing::debug!(
            lines = lines.len(),
            pages = page_count,
            bytes = bytes.len(),
            "rendered shopping list PDF"
        );

        Ok(bytes)
    }
}
