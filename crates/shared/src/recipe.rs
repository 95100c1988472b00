use serde::Deserialize;

/// A purchasable ingredient.
///
/// Names are unique across the whole catalog, so the name alone identifies
/// an ingredient and its measurement unit is the same wherever the name
/// appears.
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct Ingredient {
    pub name: String,
    /// Free-form unit label ("g", "ml", "pcs").
    pub measurement_unit: String,
}

/// One ingredient of a recipe with its required amount.
///
/// The persistence layer guarantees `amount >= 1` and at most one line per
/// (recipe, ingredient) pair; neither is revalidated here.
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct IngredientLine {
    pub ingredient: Ingredient,
    pub amount: u32,
}

/// A recipe with its ingredient lines eagerly resolved.
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<IngredientLine>,
}
