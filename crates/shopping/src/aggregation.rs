use std::collections::HashMap;

use mealcart_shared::CartEntry;

/// One consolidated shopping list line: the total amount of an ingredient
/// across every recipe in the cart.
///
/// Built fresh per aggregation call and discarded after rendering; never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedLine {
    pub name: String,
    pub total_amount: u64,
    pub measurement_unit: String,
}

/// Cart aggregation service
///
/// Stateless domain service that folds a user's cart entries into one
/// consolidated line per distinct ingredient name, summing amounts.
///
/// Output lines keep the order in which their ingredient was first seen, so
/// a fixed cart always yields the same list in the same order.
pub struct CartAggregator;

impl CartAggregator {
    /// Sum ingredient amounts across all cart entries, keyed by exact
    /// ingredient name.
    ///
    /// Ingredient names are unique in the catalog, which also keeps the
    /// measurement unit consistent for a given name: the first line seen
    /// for a name fixes the unit of its consolidated line.
    ///
    /// Pure and total: amounts pass through unvalidated, an empty cart
    /// yields an empty list.
    pub fn aggregate(entries: &[CartEntry]) -> Vec<AggregatedLine> {
        let mut lines: Vec<AggregatedLine> = Vec::new();
        let mut index_by_name: HashMap<String, usize> = HashMap::new();

        for entry in entries {
            for line in &entry.recipe.ingredients {
                match index_by_name.get(&line.ingredient.name) {
                    Some(&at) => lines[at].total_amount += u64::from(line.amount),
                    None => {
                        index_by_name.insert(line.ingredient.name.clone(), lines.len());
                        lines.push(AggregatedLine {
                            name: line.ingredient.name.clone(),
                            total_amount: u64::from(line.amount),
                            measurement_unit: line.ingredient.measurement_unit.clone(),
                        });
                    }
                }
            }
        }

        tracing::debug!(
            entries = entries.len(),
            lines = lines.len(),
            "aggregated shopping cart"
        );

        lines
    }
}
