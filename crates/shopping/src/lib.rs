pub mod aggregation;
pub mod config;
pub mod error;
pub mod font;
pub mod layout;
pub mod render;
pub mod service;

// Re-export commonly used types
pub use aggregation::{AggregatedLine, CartAggregator};
pub use config::RenderConfig;
pub use error::RenderError;
pub use render::ShoppingListRenderer;
pub use service::{
    CartSource, ExportError, ShoppingListExport, ShoppingListService, EXPORT_CONTENT_TYPE,
    EXPORT_FILENAME,
};
