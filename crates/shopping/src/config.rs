use std::path::PathBuf;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Layout and asset settings for the shopping list document.
///
/// All lengths are in PDF points. Defaults match the reference deployment:
/// ISO A4 pages, 50pt top and bottom margins, 15pt line height, a DejaVuSans
/// font covering Cyrillic ingredient names, and a Russian header.
#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    #[serde(default = "default_page_width")]
    pub page_width: f64,
    #[serde(default = "default_page_height")]
    pub page_height: f64,
    #[serde(default = "default_margin_top")]
    pub margin_top: f64,
    #[serde(default = "default_margin_bottom")]
    pub margin_bottom: f64,
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    /// Path to the TrueType font embedded into every document.
    #[serde(default = "default_font_asset")]
    pub font_asset: PathBuf,
    /// Title drawn centered at the top of every page.
    #[serde(default = "default_header_text")]
    pub header_text: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_width: default_page_width(),
            page_height: default_page_height(),
            margin_top: default_margin_top(),
            margin_bottom: default_margin_bottom(),
            line_height: default_line_height(),
            font_asset: default_font_asset(),
            header_text: default_header_text(),
        }
    }
}

fn default_page_width() -> f64 {
    // ISO A4 in points
    595.276
}

fn default_page_height() -> f64 {
    841.89
}

fn default_margin_top() -> f64 {
    50.0
}

fn default_margin_bottom() -> f64 {
    50.0
}

fn default_line_height() -> f64 {
    15.0
}

fn default_font_asset() -> PathBuf {
    PathBuf::from("fonts/DejaVuSans.ttf")
}

fn default_header_text() -> String {
    "Список покупок".to_string()
}

impl RenderConfig {
    /// Load configuration from an optional TOML file and environment
    /// variables (`MEALCART__PAGE_WIDTH`, `MEALCART__FONT_ASSET`, ...).
    /// Values missing from both fall back to the defaults.
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(&path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALCART")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.line_height <= 0.0 {
            return Err("line_height must be greater than 0".to_string());
        }
        if self.margin_top + self.margin_bottom >= self.page_height {
            return Err("margins leave no room for content on the page".to_string());
        }
        if self.header_text.is_empty() {
            return Err("header_text must not be empty".to_string());
        }
        Ok(())
    }
}
