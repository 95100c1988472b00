use mealcart_shared::CartEntry;
use thiserror::Error;

use crate::aggregation::CartAggregator;
use crate::error::RenderError;
use crate::render::ShoppingListRenderer;

/// Download filename the HTTP layer puts on the Content-Disposition header.
pub const EXPORT_FILENAME: &str = "Shopping_cart.pdf";

/// MIME type of the rendered document.
pub const EXPORT_CONTENT_TYPE: &str = "application/pdf";

/// Persistence collaborator: resolves a user's cart entries with recipes
/// and ingredient lines eagerly loaded.
pub trait CartSource {
    fn cart_entries(&self, user_id: &str) -> anyhow::Result<Vec<CartEntry>>;
}

/// Error types for shopping list exports
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to load shopping cart: {0}")]
    Source(#[from] anyhow::Error),

    #[error("failed to render shopping list: {0}")]
    Render(#[from] RenderError),
}

/// A finished export ready for the HTTP layer to stream as a file download.
#[derive(Debug, Clone)]
pub struct ShoppingListExport {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Shopping list export service
///
/// Fetches a user's cart from the persistence collaborator, consolidates it
/// and renders the downloadable PDF. The caller owns the HTTP response:
/// status code, Content-Disposition and streaming the returned bytes.
pub struct ShoppingListService {
    renderer: ShoppingListRenderer,
}

impl ShoppingListService {
    pub fn new(renderer: ShoppingListRenderer) -> Self {
        Self { renderer }
    }

    pub fn export(
        &self,
        source: &impl CartSource,
        user_id: &str,
    ) -> Result<ShoppingListExport, ExportError> {
        let entries = source.cart_entries(user_id)?;
        let lines = CartAggregator::aggregate(&entries);
        let bytes = self.renderer.render(&lines)?;

        tracing::info!(
            user_id,
            entries = entries.len(),
            lines = lines.len(),
            bytes = bytes.len(),
            "exported shopping list"
        );

        Ok(ShoppingListExport {
            filename: EXPORT_FILENAME,
            content_type: EXPORT_CONTENT_TYPE,
            bytes,
        })
    }
}
