use std::path::PathBuf;

use anyhow::anyhow;
use mealcart_shared::{CartEntry, Ingredient, IngredientLine, Recipe};
use mealcart_shopping::{
    layout, CartAggregator, CartSource, ExportError, RenderConfig, RenderError,
    ShoppingListRenderer, ShoppingListService, EXPORT_CONTENT_TYPE, EXPORT_FILENAME,
};
use temp_dir::TempDir;

fn entry(recipe: &str, lines: &[(&str, u32, &str)]) -> CartEntry {
    CartEntry {
        recipe: Recipe {
            name: recipe.to_string(),
            ingredients: lines
                .iter()
                .map(|(name, amount, unit)| IngredientLine {
                    ingredient: Ingredient {
                        name: name.to_string(),
                        measurement_unit: unit.to_string(),
                    },
                    amount: *amount,
                })
                .collect(),
        },
    }
}

struct InMemoryCarts {
    entries: Vec<CartEntry>,
}

impl CartSource for InMemoryCarts {
    fn cart_entries(&self, _user_id: &str) -> anyhow::Result<Vec<CartEntry>> {
        Ok(self.entries.clone())
    }
}

struct BrokenCarts;

impl CartSource for BrokenCarts {
    fn cart_entries(&self, _user_id: &str) -> anyhow::Result<Vec<CartEntry>> {
        Err(anyhow!("connection refused"))
    }
}

/// A DejaVuSans installed on the machine, if any. The repository ships no
/// binary font asset, so PDF-producing tests run only where one is found.
fn system_font() -> Option<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/Library/Fonts/DejaVuSans.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|path| path.exists())
}

#[test]
fn test_missing_font_asset_fails_with_asset_error() {
    let config = RenderConfig {
        font_asset: PathBuf::from("/nonexistent/DejaVuSans.ttf"),
        ..RenderConfig::default()
    };

    let result = ShoppingListRenderer::new(config).render(&[]);

    match result {
        Err(RenderError::Asset { path, .. }) => {
            assert_eq!(path, PathBuf::from("/nonexistent/DejaVuSans.ttf"));
        }
        other => panic!("expected asset error, got {other:?}"),
    }
}

#[test]
fn test_non_font_asset_fails_with_asset_error() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.child("not-a-font.ttf");
    std::fs::write(&bogus, b"definitely not a truetype font").unwrap();

    let config = RenderConfig {
        font_asset: bogus,
        ..RenderConfig::default()
    };

    let result = ShoppingListRenderer::new(config).render(&[]);

    assert!(matches!(result, Err(RenderError::Asset { .. })));
}

#[test]
fn test_export_surfaces_source_failure() {
    let service = ShoppingListService::new(ShoppingListRenderer::new(RenderConfig::default()));

    let result = service.export(&BrokenCarts, "user-1");

    assert!(matches!(result, Err(ExportError::Source(_))));
}

#[test]
fn test_aggregation_feeds_layout_with_continuous_numbering() {
    // Two entries sharing ingredients, paginated onto short pages that fit
    // two lines each: numbering must run 1..N without reset across pages.
    let entries: Vec<CartEntry> = (0..3)
        .map(|i| {
            entry(
                &format!("recipe{i}"),
                &[
                    (format!("ingredient{i}a").as_str(), 100, "g"),
                    (format!("ingredient{i}b").as_str(), 200, "g"),
                    ("sugar", 50, "g"),
                ],
            )
        })
        .collect();

    let lines = CartAggregator::aggregate(&entries);
    // 3 recipes x 2 unique ingredients + shared "sugar" once.
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[2].total_amount, 150);

    let config = RenderConfig {
        page_height: 150.0,
        ..RenderConfig::default()
    };
    let pages = layout::paginate(&lines, &config, 120.0);

    assert_eq!(pages.len(), 4);
    let numbers: Vec<usize> = pages
        .iter()
        .flat_map(|page| page.lines.iter().map(|line| line.number))
        .collect();
    assert_eq!(numbers, (1..=7).collect::<Vec<_>>());
}

#[test]
fn test_export_produces_pdf_download_envelope() {
    let Some(font) = system_font() else { return };

    let config = RenderConfig {
        font_asset: font,
        ..RenderConfig::default()
    };
    let service = ShoppingListService::new(ShoppingListRenderer::new(config));
    let carts = InMemoryCarts {
        entries: vec![
            entry("Syrup", &[("sugar", 100, "g")]),
            entry("Pancakes", &[("sugar", 50, "g"), ("flour", 200, "g")]),
        ],
    };

    let export = service.export(&carts, "user-1").unwrap();

    assert_eq!(export.filename, EXPORT_FILENAME);
    assert_eq!(export.content_type, EXPORT_CONTENT_TYPE);
    assert!(export.bytes.starts_with(b"%PDF-"));
    assert!(export.bytes.len() > 500);
}

#[test]
fn test_empty_cart_still_renders_a_document() {
    let Some(font) = system_font() else { return };

    let config = RenderConfig {
        font_asset: font,
        ..RenderConfig::default()
    };
    let service = ShoppingListService::new(ShoppingListRenderer::new(config));
    let carts = InMemoryCarts { entries: vec![] };

    let export = service.export(&carts, "user-1").unwrap();

    assert!(export.bytes.starts_with(b"%PDF-"));
}
