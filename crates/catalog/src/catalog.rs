//! In-memory catalog of aisles, units, ingredients and recipes.

use grocer_core::entry::find_by_name;
use grocer_core::{CatalogEntry, DomainError, DomainResult, IngredientId, RecipeId};

use crate::aisle::{Aisle, DEFAULT_AISLES, DEFAULT_UNITS, Unit};
use crate::ingredient::{Ingredient, NewIngredient};
use crate::input::{check_quantity, lookup_key, optional_text, required_text};
use crate::recipe::{NewRecipe, Recipe, RecipeIngredient};

/// Registry the demand-line producer reads from.
///
/// Aisle and unit names are unique case-insensitively and resolved that way.
/// Ingredient and recipe names are unique and matched exactly.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    aisles: Vec<Aisle>,
    units: Vec<Unit>,
    ingredients: Vec<Ingredient>,
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Empty catalog: no aisles, no units.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the standard store aisles and units.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.aisles = DEFAULT_AISLES
            .iter()
            .map(|(name, sort_order)| Aisle {
                name: name.to_string(),
                sort_order: *sort_order,
            })
            .collect();
        catalog.units = DEFAULT_UNITS
            .iter()
            .map(|(name, abbreviation)| Unit {
                name: name.to_string(),
                abbreviation: abbreviation.to_string(),
            })
            .collect();
        catalog
    }

    pub fn add_aisle(&mut self, name: &str, sort_order: i64) -> DomainResult<&Aisle> {
        let name = required_text("aisle name", name)?;
        if self.aisle_by_name(&name).is_some() {
            return Err(DomainError::conflict(format!("aisle '{name}' already exists")));
        }
        self.aisles.push(Aisle { name, sort_order });
        Ok(&self.aisles[self.aisles.len() - 1])
    }

    pub fn add_unit(&mut self, name: &str, abbreviation: &str) -> DomainResult<&Unit> {
        let name = required_text("unit name", name)?;
        let abbreviation = required_text("unit abbreviation", abbreviation)?;
        if let Some(existing) = self.unit_by_name(&name) {
            return Err(DomainError::conflict(format!(
                "unit name '{name}' clashes with unit '{}'",
                existing.name
            )));
        }
        if let Some(existing) = self.unit_by_name(&abbreviation) {
            return Err(DomainError::conflict(format!(
                "unit abbreviation '{abbreviation}' clashes with unit '{}'",
                existing.name
            )));
        }
        self.units.push(Unit { name, abbreviation });
        Ok(&self.units[self.units.len() - 1])
    }

    /// Aisle by name, ignoring case and surrounding whitespace.
    pub fn aisle_by_name(&self, name: &str) -> Option<&Aisle> {
        let key = lookup_key(name);
        self.aisles.iter().find(|aisle| lookup_key(&aisle.name) == key)
    }

    /// Unit by name or abbreviation, ignoring case and surrounding whitespace.
    pub fn unit_by_name(&self, name: &str) -> Option<&Unit> {
        let key = lookup_key(name);
        self.units
            .iter()
            .find(|unit| lookup_key(&unit.name) == key || lookup_key(&unit.abbreviation) == key)
    }

    /// Sort order of the named aisle; unknown aisles sort as `0`.
    pub fn aisle_order(&self, name: &str) -> i64 {
        self.aisle_by_name(name)
            .map(|aisle| aisle.sort_order)
            .unwrap_or(0)
    }

    /// Aisles in store order.
    pub fn aisles(&self) -> Vec<&Aisle> {
        let mut aisles: Vec<&Aisle> = self.aisles.iter().collect();
        aisles.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));
        aisles
    }

    /// Units by name.
    pub fn units(&self) -> Vec<&Unit> {
        let mut units: Vec<&Unit> = self.units.iter().collect();
        units.sort_by(|a, b| a.name.cmp(&b.name));
        units
    }

    /// Create an ingredient; a name already in use is a conflict.
    pub fn add_ingredient(&mut self, new: NewIngredient) -> DomainResult<IngredientId> {
        let ingredient = self.build_ingredient(IngredientId::new(), new)?;
        if self.ingredient_by_name(&ingredient.name).is_some() {
            return Err(DomainError::conflict(format!(
                "ingredient '{}' already exists",
                ingredient.name
            )));
        }
        let id = ingredient.id;
        self.ingredients.push(ingredient);
        Ok(id)
    }

    /// Create an ingredient, or replace aisle, unit and seasons of the
    /// existing one with the same name (its id is kept).
    pub fn upsert_ingredient(&mut self, new: NewIngredient) -> DomainResult<IngredientId> {
        let name = required_text("ingredient name", &new.name)?;
        let existing = self
            .ingredients
            .iter()
            .position(|ingredient| ingredient.name == name);

        match existing {
            Some(slot) => {
                let id = self.ingredients[slot].id;
                let replacement = self.build_ingredient(id, new)?;
                self.ingredients[slot] = replacement;
                tracing::debug!(ingredient = %name, "updated existing ingredient");
                Ok(id)
            }
            None => self.add_ingredient(new),
        }
    }

    fn build_ingredient(&self, id: IngredientId, new: NewIngredient) -> DomainResult<Ingredient> {
        let name = required_text("ingredient name", &new.name)?;
        let aisle = self
            .aisle_by_name(&new.aisle)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("aisle '{}'", new.aisle.trim())))?;
        let unit = self
            .unit_by_name(&new.unit)
            .ok_or_else(|| DomainError::not_found(format!("unit '{}'", new.unit.trim())))?;

        let mut seasons = new.seasons;
        seasons.sort();
        seasons.dedup();

        Ok(Ingredient {
            id,
            name,
            aisle,
            unit: unit.abbreviation.clone(),
            seasons,
        })
    }

    pub fn ingredient(&self, id: IngredientId) -> Option<&Ingredient> {
        self.ingredients.iter().find(|ingredient| ingredient.id == id)
    }

    pub fn ingredient_by_name(&self, name: &str) -> Option<&Ingredient> {
        find_by_name(&self.ingredients, name)
    }

    /// Ingredients by name.
    pub fn ingredients(&self) -> Vec<&Ingredient> {
        let mut ingredients: Vec<&Ingredient> = self.ingredients.iter().collect();
        ingredients.sort_by(|a, b| a.name.cmp(&b.name));
        ingredients
    }

    /// Remove an ingredient no recipe uses.
    pub fn remove_ingredient(&mut self, id: IngredientId) -> DomainResult<Ingredient> {
        let slot = self
            .ingredients
            .iter()
            .position(|ingredient| ingredient.id == id)
            .ok_or_else(|| DomainError::not_found(format!("ingredient {id}")))?;

        if let Some(recipe) = self
            .recipes
            .iter()
            .find(|recipe| recipe.ingredients.iter().any(|ri| ri.ingredient_id == id))
        {
            return Err(DomainError::conflict(format!(
                "ingredient '{}' is used by recipe '{}'",
                self.ingredients[slot].name, recipe.name
            )));
        }
        Ok(self.ingredients.remove(slot))
    }

    pub fn add_recipe(&mut self, new: NewRecipe) -> DomainResult<RecipeId> {
        let name = required_text("recipe name", &new.name)?;
        if self.recipe_by_name(&name).is_some() {
            return Err(DomainError::conflict(format!("recipe '{name}' already exists")));
        }

        let ingredients = new
            .ingredients
            .iter()
            .map(|entry| {
                let ingredient = self.ingredient_by_name(entry.ingredient.trim()).ok_or_else(|| {
                    DomainError::not_found(format!("ingredient '{}'", entry.ingredient.trim()))
                })?;
                let quantity = check_quantity(entry.quantity.resolve()?)?;
                Ok(RecipeIngredient {
                    ingredient_id: ingredient.id,
                    quantity,
                    note: optional_text(entry.note.as_deref()),
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let mut seasons = new.seasons;
        seasons.sort();
        seasons.dedup();

        let recipe = Recipe {
            id: RecipeId::new(),
            name,
            total_minutes: new.total_minutes,
            difficulty: new.difficulty,
            seasons,
            ingredients,
        };
        let id = recipe.id;
        self.recipes.push(recipe);
        Ok(id)
    }

    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id() == id)
    }

    pub fn recipe_by_name(&self, name: &str) -> Option<&Recipe> {
        find_by_name(&self.recipes, name)
    }

    /// Recipes by name.
    pub fn recipes(&self) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self.recipes.iter().collect();
        recipes.sort_by(|a, b| a.name.cmp(&b.name));
        recipes
    }

    pub fn remove_recipe(&mut self, id: RecipeId) -> DomainResult<Recipe> {
        let slot = self
            .recipes
            .iter()
            .position(|recipe| recipe.id == id)
            .ok_or_else(|| DomainError::not_found(format!("recipe {id}")))?;
        Ok(self.recipes.remove(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::QuantityInput;
    use crate::producer::demand_lines;
    use crate::recipe::NewRecipeIngredient;
    use crate::season::Season;
    use crate::selection::ShoppingSelection;

    fn tomato() -> NewIngredient {
        NewIngredient {
            name: " Tomato ".to_string(),
            aisle: "produce".to_string(),
            unit: "piece".to_string(),
            seasons: vec![Season::Summer, Season::Spring, Season::Summer],
        }
    }

    fn salad(ingredient: &str, quantity: f64) -> NewRecipe {
        NewRecipe {
            name: "Salad".to_string(),
            total_minutes: Some(10),
            difficulty: None,
            seasons: vec![Season::Summer],
            ingredients: vec![NewRecipeIngredient {
                ingredient: ingredient.to_string(),
                quantity: QuantityInput::Number(quantity),
                note: Some("  ".to_string()),
            }],
        }
    }

    #[test]
    fn ingredient_resolves_aisle_and_unit_case_insensitively() {
        let mut catalog = Catalog::with_defaults();
        let id = catalog.add_ingredient(tomato()).unwrap();

        let ingredient = catalog.ingredient(id).unwrap();
        assert_eq!(ingredient.name, "Tomato");
        assert_eq!(ingredient.aisle.name, "Produce");
        assert_eq!(ingredient.aisle.sort_order, 1);
        assert_eq!(ingredient.unit, "pc");
        assert_eq!(ingredient.seasons, vec![Season::Spring, Season::Summer]);
        assert_eq!(catalog.ingredient_by_name("Tomato").map(|i| i.id), Some(id));
        assert!(catalog.ingredient_by_name("tomato").is_none());
    }

    #[test]
    fn duplicate_ingredient_is_a_conflict_but_upsert_replaces() {
        let mut catalog = Catalog::with_defaults();
        let id = catalog.add_ingredient(tomato()).unwrap();

        let err = catalog.add_ingredient(tomato()).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let moved = NewIngredient {
            aisle: "Other".to_string(),
            unit: "g".to_string(),
            ..tomato()
        };
        assert_eq!(catalog.upsert_ingredient(moved).unwrap(), id);
        let ingredient = catalog.ingredient(id).unwrap();
        assert_eq!(ingredient.aisle.name, "Other");
        assert_eq!(ingredient.unit, "g");
        assert_eq!(catalog.ingredients().len(), 1);
    }

    #[test]
    fn unknown_aisle_or_unit_is_not_found() {
        let mut catalog = Catalog::with_defaults();
        let err = catalog
            .add_ingredient(NewIngredient {
                aisle: "Garden".to_string(),
                ..tomato()
            })
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("aisle 'Garden'"));

        let err = catalog
            .add_ingredient(NewIngredient {
                unit: "bushel".to_string(),
                ..tomato()
            })
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("unit 'bushel'"));
    }

    #[test]
    fn aisles_list_in_store_order() {
        let mut catalog = Catalog::new();
        catalog.add_aisle("Frozen", 6).unwrap();
        catalog.add_aisle("Produce", 1).unwrap();
        assert!(matches!(catalog.add_aisle("frozen", 2), Err(DomainError::Conflict(_))));

        let names: Vec<&str> = catalog.aisles().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Produce", "Frozen"]);
        assert_eq!(catalog.aisle_order("FROZEN"), 6);
        assert_eq!(catalog.aisle_order("Garden"), 0);
    }

    #[test]
    fn units_match_name_or_abbreviation() {
        let mut catalog = Catalog::with_defaults();
        assert_eq!(catalog.unit_by_name("Tbsp").map(|u| u.name.as_str()), Some("tablespoon"));
        assert!(catalog.add_unit("pinch", "pn").is_ok());
        assert_eq!(
            catalog.add_unit("grams", "g").unwrap_err(),
            DomainError::conflict("unit abbreviation 'g' clashes with unit 'gram'")
        );
        assert_eq!(
            catalog.add_unit("Cup", "c").unwrap_err(),
            DomainError::conflict("unit name 'Cup' clashes with unit 'cup'")
        );
    }

    #[test]
    fn recipe_references_ingredients_by_name() {
        let mut catalog = Catalog::with_defaults();
        let tomato_id = catalog.add_ingredient(tomato()).unwrap();
        let recipe_id = catalog.add_recipe(salad("Tomato", 3.0)).unwrap();

        let recipe = catalog.recipe(recipe_id).unwrap();
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].ingredient_id, tomato_id);
        assert_eq!(recipe.ingredients[0].quantity, 3.0);
        assert_eq!(recipe.ingredients[0].note, None);
        assert_eq!(catalog.recipe_by_name("Salad").map(|r| r.id), Some(recipe_id));
    }

    #[test]
    fn recipe_with_bad_ingredient_is_rejected() {
        let mut catalog = Catalog::with_defaults();
        catalog.add_ingredient(tomato()).unwrap();

        assert_eq!(
            catalog.add_recipe(salad("Basil", 1.0)).unwrap_err(),
            DomainError::not_found("ingredient 'Basil'")
        );
        assert!(matches!(
            catalog.add_recipe(salad("Tomato", 0.0)),
            Err(DomainError::Validation(_))
        ));
        assert!(catalog.recipes().is_empty());
    }

    #[test]
    fn dangling_ingredient_reference_is_an_invariant_violation() {
        let mut catalog = Catalog::with_defaults();
        let tomato_id = catalog.add_ingredient(tomato()).unwrap();
        let recipe_id = catalog.add_recipe(salad("Tomato", 2.0)).unwrap();
        catalog.ingredients.clear();

        let mut selection = ShoppingSelection::new();
        selection.add_recipe(recipe_id);
        assert_eq!(
            demand_lines(&catalog, &selection).unwrap_err(),
            DomainError::invariant(format!(
                "recipe 'Salad' references missing ingredient {tomato_id}"
            ))
        );
    }

    #[test]
    fn ingredient_in_use_cannot_be_removed() {
        let mut catalog = Catalog::with_defaults();
        let tomato_id = catalog.add_ingredient(tomato()).unwrap();
        let recipe_id = catalog.add_recipe(salad("Tomato", 2.0)).unwrap();

        assert!(matches!(catalog.remove_ingredient(tomato_id), Err(DomainError::Conflict(_))));
        catalog.remove_recipe(recipe_id).unwrap();
        assert_eq!(catalog.remove_ingredient(tomato_id).unwrap().name, "Tomato");
        assert!(matches!(catalog.remove_recipe(recipe_id), Err(DomainError::NotFound(_))));
    }
}
