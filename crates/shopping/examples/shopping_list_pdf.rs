//! End-to-end demo: build a small cart in memory, export it and write the
//! PDF into the current directory.
//!
//! The font path defaults to `fonts/DejaVuSans.ttf`; point it elsewhere with
//! `MEALCART__FONT_ASSET=/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf`.

use mealcart_shared::{CartEntry, Ingredient, IngredientLine, Recipe};
use mealcart_shopping::{CartSource, RenderConfig, ShoppingListRenderer, ShoppingListService};
use tracing_subscriber::EnvFilter;

struct FixtureCarts;

impl CartSource for FixtureCarts {
    fn cart_entries(&self, _user_id: &str) -> anyhow::Result<Vec<CartEntry>> {
        Ok(vec![
            recipe("Syrup", &[("sugar", 100, "g"), ("water", 50, "ml")]),
            recipe(
                "Pancakes",
                &[("sugar", 50, "g"), ("flour", 200, "g"), ("milk", 300, "ml")],
            ),
        ])
    }
}

fn recipe(name: &str, lines: &[(&str, u32, &str)]) -> CartEntry {
    CartEntry {
        recipe: Recipe {
            name: name.to_string(),
            ingredients: lines
                .iter()
                .map(|(ingredient, amount, unit)| IngredientLine {
                    ingredient: Ingredient {
                        name: ingredient.to_string(),
                        measurement_unit: unit.to_string(),
                    },
                    amount: *amount,
                })
                .collect(),
        },
    }
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = RenderConfig::load(std::env::args().nth(1))?;
    config.validate().map_err(anyhow::Error::msg)?;

    let service = ShoppingListService::new(ShoppingListRenderer::new(config));
    let export = service.export(&FixtureCarts, "demo-user")?;

    std::fs::write(export.filename, &export.bytes)?;
    println!("wrote {} ({} bytes)", export.filename, export.bytes.len());

    Ok(())
}
