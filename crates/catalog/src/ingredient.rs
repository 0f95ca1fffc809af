use serde::{Deserialize, Serialize};

use grocer_core::{CatalogEntry, IngredientId};

use crate::aisle::Aisle;
use crate::season::Season;

/// Purchasable ingredient with its default aisle and unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub aisle: Aisle,
    /// Unit abbreviation used on shopping lines (e.g. `g` for `gram`).
    pub unit: String,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

impl Ingredient {
    pub fn in_season(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }
}

impl CatalogEntry for Ingredient {
    type Id = IngredientId;

    fn id(&self) -> IngredientId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Input for creating or replacing an ingredient. Aisle and unit are
/// referenced by name and resolved case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIngredient {
    pub name: String,
    pub aisle: String,
    pub unit: String,
    #[serde(default)]
    pub seasons: Vec<Season>,
}
