use serde::Deserialize;

use crate::recipe::Recipe;

/// A user's intent to shop for one recipe's ingredients.
///
/// Entries handed to the aggregation service are already scoped to a single
/// user, with at most one entry per (user, recipe) pair. Both invariants are
/// owned by the persistence layer.
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct CartEntry {
    pub recipe: Recipe,
}
