use serde::{Deserialize, Serialize};

use grocer_core::{CatalogEntry, IngredientId, RecipeId};

use crate::document::QuantityInput;
use crate::season::Season;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One ingredient of a recipe. `quantity` is the stored amount for the
/// whole recipe; nothing scales it by servings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient_id: IngredientId,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub total_minutes: Option<u32>,
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub seasons: Vec<Season>,
    pub ingredients: Vec<RecipeIngredient>,
}

impl CatalogEntry for Recipe {
    type Id = RecipeId;

    fn id(&self) -> RecipeId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Input for creating a recipe. Ingredients are referenced by exact name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    #[serde(default)]
    pub total_minutes: Option<u32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub ingredients: Vec<NewRecipeIngredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipeIngredient {
    pub ingredient: String,
    pub quantity: QuantityInput,
    #[serde(default)]
    pub note: Option<String>,
}
