//! Filter criteria for recipe and ingredient pickers.
//!
//! Criteria are plain values; callers build a new one on every change and
//! re-derive the filtered list from the catalog.

use serde::{Deserialize, Serialize};

use crate::ingredient::Ingredient;
use crate::input::lookup_key;
use crate::recipe::{Difficulty, Recipe};
use crate::season::Season;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFilter {
    /// Case-insensitive substring of the recipe name.
    #[serde(default)]
    pub search: Option<String>,
    /// Recipes without a recorded time never pass a time limit.
    #[serde(default)]
    pub max_minutes: Option<u32>,
    /// Empty means any difficulty.
    #[serde(default)]
    pub difficulties: Vec<Difficulty>,
    #[serde(default)]
    pub season: Option<Season>,
}

impl RecipeFilter {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !name_matches(self.search.as_deref(), &recipe.name) {
            return false;
        }
        if let Some(limit) = self.max_minutes {
            match recipe.total_minutes {
                Some(minutes) if minutes <= limit => {}
                _ => return false,
            }
        }
        if !self.difficulties.is_empty()
            && !recipe
                .difficulty
                .is_some_and(|difficulty| self.difficulties.contains(&difficulty))
        {
            return false;
        }
        match self.season {
            Some(season) => recipe.seasons.contains(&season),
            None => true,
        }
    }

    /// Matching recipes, input order preserved.
    pub fn apply<'a, I>(&self, recipes: I) -> Vec<&'a Recipe>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        recipes.into_iter().filter(|recipe| self.matches(recipe)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientFilter {
    #[serde(default)]
    pub search: Option<String>,
    /// Aisle name, compared case-insensitively.
    #[serde(default)]
    pub aisle: Option<String>,
    /// Unit name or abbreviation as stored on the ingredient.
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
}

impl IngredientFilter {
    pub fn matches(&self, ingredient: &Ingredient) -> bool {
        if let Some(aisle) = &self.aisle {
            if lookup_key(aisle) != lookup_key(&ingredient.aisle.name) {
                return false;
            }
        }
        if let Some(unit) = &self.unit {
            if lookup_key(unit) != lookup_key(&ingredient.unit) {
                return false;
            }
        }
        if let Some(season) = self.season {
            if !ingredient.in_season(season) {
                return false;
            }
        }
        name_matches(self.search.as_deref(), &ingredient.name)
    }

    pub fn apply<'a, I>(&self, ingredients: I) -> Vec<&'a Ingredient>
    where
        I: IntoIterator<Item = &'a Ingredient>,
    {
        ingredients
            .into_iter()
            .filter(|ingredient| self.matches(ingredient))
            .collect()
    }
}

fn name_matches(search: Option<&str>, name: &str) -> bool {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(needle) => name.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::document::CatalogDocument;

    fn catalog() -> Catalog {
        CatalogDocument::from_json(
            r#"{
                "ingredients": [
                    { "name": "Tomato", "aisle": "Produce", "unit": "pc", "seasons": ["summer"] },
                    { "name": "Leek", "aisle": "Produce", "unit": "pc", "seasons": ["winter", "autumn"] },
                    { "name": "Flour", "aisle": "Pantry", "unit": "g" }
                ],
                "recipes": [
                    { "name": "Tomato salad", "total_minutes": 10, "difficulty": "easy", "seasons": ["summer"] },
                    { "name": "Leek soup", "total_minutes": 45, "difficulty": "medium", "seasons": ["winter"] },
                    { "name": "Sourdough", "difficulty": "hard" }
                ]
            }"#,
        )
        .unwrap()
        .into_catalog()
        .unwrap()
    }

    fn recipe_names(recipes: Vec<&Recipe>) -> Vec<&str> {
        recipes.into_iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn default_recipe_filter_passes_everything() {
        let catalog = catalog();
        assert_eq!(RecipeFilter::default().apply(catalog.recipes()).len(), 3);
    }

    #[test]
    fn recipe_search_is_case_insensitive() {
        let catalog = catalog();
        let filter = RecipeFilter {
            search: Some("  SOUP ".to_string()),
            ..RecipeFilter::default()
        };
        assert_eq!(recipe_names(filter.apply(catalog.recipes())), vec!["Leek soup"]);
    }

    #[test]
    fn time_limit_excludes_untimed_recipes() {
        let catalog = catalog();
        let filter = RecipeFilter {
            max_minutes: Some(45),
            ..RecipeFilter::default()
        };
        assert_eq!(
            recipe_names(filter.apply(catalog.recipes())),
            vec!["Leek soup", "Tomato salad"]
        );
    }

    #[test]
    fn difficulty_and_season_combine() {
        let catalog = catalog();
        let filter = RecipeFilter {
            difficulties: vec![Difficulty::Easy, Difficulty::Medium],
            season: Some(Season::Winter),
            ..RecipeFilter::default()
        };
        assert_eq!(recipe_names(filter.apply(catalog.recipes())), vec!["Leek soup"]);
    }

    #[test]
    fn ingredient_filter_by_aisle_unit_and_season() {
        let catalog = catalog();
        let names = |filter: IngredientFilter| -> Vec<String> {
            filter
                .apply(catalog.ingredients())
                .into_iter()
                .map(|i| i.name.clone())
                .collect()
        };

        assert_eq!(
            names(IngredientFilter {
                aisle: Some("produce".to_string()),
                ..IngredientFilter::default()
            }),
            vec!["Leek", "Tomato"]
        );
        assert_eq!(
            names(IngredientFilter {
                unit: Some("G".to_string()),
                ..IngredientFilter::default()
            }),
            vec!["Flour"]
        );
        assert_eq!(
            names(IngredientFilter {
                season: Some(Season::Autumn),
                search: Some("ee".to_string()),
                ..IngredientFilter::default()
            }),
            vec!["Leek"]
        );
    }
}
