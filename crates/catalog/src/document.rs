//! JSON catalog documents.
//!
//! ```json
//! {
//!   "aisles": [{ "name": "Produce", "sort_order": 1 }],
//!   "ingredients": [{ "name": "Tomato", "aisle": "Produce", "unit": "pc", "seasons": ["summer"] }],
//!   "recipes": [{ "name": "Salad", "ingredients": [{ "ingredient": "Tomato", "quantity": "2,5" }] }]
//! }
//! ```
//!
//! Missing `aisles` or `units` fall back to the standard sets.

use serde::{Deserialize, Serialize};

use grocer_core::{DomainError, DomainResult};

use crate::catalog::Catalog;
use crate::ingredient::NewIngredient;
use crate::input::{check_quantity, parse_quantity};
use crate::recipe::NewRecipe;

/// A quantity as written in a document or form: a JSON number or text
/// such as `"1,5"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(f64),
    Text(String),
}

impl QuantityInput {
    /// Validated quantity (finite, `> 0`).
    pub fn resolve(&self) -> DomainResult<f64> {
        match self {
            QuantityInput::Number(value) => check_quantity(*value),
            QuantityInput::Text(text) => parse_quantity(text),
        }
    }
}

impl From<f64> for QuantityInput {
    fn from(value: f64) -> Self {
        QuantityInput::Number(value)
    }
}

impl From<&str> for QuantityInput {
    fn from(value: &str) -> Self {
        QuantityInput::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AisleRecord {
    pub name: String,
    pub sort_order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub name: String,
    /// Defaults to `name`.
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub aisles: Vec<AisleRecord>,
    #[serde(default)]
    pub units: Vec<UnitRecord>,
    #[serde(default)]
    pub ingredients: Vec<NewIngredient>,
    #[serde(default)]
    pub recipes: Vec<NewRecipe>,
}

impl CatalogDocument {
    pub fn from_json(payload: &str) -> DomainResult<Self> {
        serde_json::from_str(payload)
            .map_err(|e| DomainError::validation(format!("invalid catalog document: {e}")))
    }

    /// Build a catalog. Ingredients are upserted in document order, so a
    /// repeated name keeps its first id and its last definition.
    pub fn into_catalog(self) -> DomainResult<Catalog> {
        let mut catalog = Catalog::new();
        let defaults = Catalog::with_defaults();

        if self.aisles.is_empty() {
            for aisle in defaults.aisles() {
                catalog.add_aisle(&aisle.name, aisle.sort_order)?;
            }
        }
        for aisle in &self.aisles {
            catalog.add_aisle(&aisle.name, aisle.sort_order)?;
        }

        if self.units.is_empty() {
            for unit in defaults.units() {
                catalog.add_unit(&unit.name, &unit.abbreviation)?;
            }
        }
        for unit in &self.units {
            let abbreviation = unit.abbreviation.as_deref().unwrap_or(&unit.name);
            catalog.add_unit(&unit.name, abbreviation)?;
        }

        for (index, ingredient) in self.ingredients.into_iter().enumerate() {
            catalog
                .upsert_ingredient(ingredient)
                .map_err(|e| with_position("ingredient", index, e))?;
        }
        for (index, recipe) in self.recipes.into_iter().enumerate() {
            catalog
                .add_recipe(recipe)
                .map_err(|e| with_position("recipe", index, e))?;
        }

        tracing::debug!(
            aisles = catalog.aisles().len(),
            ingredients = catalog.ingredients().len(),
            recipes = catalog.recipes().len(),
            "loaded catalog document"
        );
        Ok(catalog)
    }
}

/// Prefix an error with the 1-based position of the offending entry.
fn with_position(kind: &str, index: usize, err: DomainError) -> DomainError {
    let at = format!("{kind} #{}", index + 1);
    match err {
        DomainError::Validation(msg) => DomainError::Validation(format!("{at}: {msg}")),
        DomainError::InvariantViolation(msg) => {
            DomainError::InvariantViolation(format!("{at}: {msg}"))
        }
        DomainError::InvalidId(msg) => DomainError::InvalidId(format!("{at}: {msg}")),
        DomainError::NotFound(msg) => DomainError::NotFound(format!("{at}: {msg}")),
        DomainError::Conflict(msg) => DomainError::Conflict(format!("{at}: {msg}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season::Season;

    #[test]
    fn parses_a_full_document() {
        let doc = CatalogDocument::from_json(
            r#"{
                "ingredients": [
                    { "name": "Zucchini", "aisle": "Produce", "unit": "piece", "seasons": ["summer"] },
                    { "name": "Olive oil", "aisle": "pantry", "unit": "tbsp" }
                ],
                "recipes": [
                    {
                        "name": "Ratatouille",
                        "total_minutes": 60,
                        "difficulty": "medium",
                        "ingredients": [
                            { "ingredient": "Zucchini", "quantity": 2 },
                            { "ingredient": "Olive oil", "quantity": "1,5", "note": "extra virgin" }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let catalog = doc.into_catalog().unwrap();
        assert_eq!(catalog.aisles().len(), 8);
        let zucchini = catalog.ingredient_by_name("Zucchini").unwrap();
        assert_eq!(zucchini.seasons, vec![Season::Summer]);
        assert_eq!(zucchini.unit, "pc");

        let recipe = catalog.recipe_by_name("Ratatouille").unwrap();
        assert_eq!(recipe.total_minutes, Some(60));
        assert_eq!(recipe.ingredients[1].quantity, 1.5);
        assert_eq!(recipe.ingredients[1].note.as_deref(), Some("extra virgin"));
    }

    #[test]
    fn custom_aisles_replace_the_defaults() {
        let doc = CatalogDocument::from_json(
            r#"{ "aisles": [{ "name": "Market", "sort_order": 2 }], "units": [{ "name": "bunch" }] }"#,
        )
        .unwrap();
        let catalog = doc.into_catalog().unwrap();

        assert_eq!(catalog.aisles().len(), 1);
        assert_eq!(catalog.aisle_order("market"), 2);
        assert_eq!(catalog.unit_by_name("bunch").map(|u| u.abbreviation.as_str()), Some("bunch"));
    }

    #[test]
    fn errors_name_the_offending_entry() {
        let doc = CatalogDocument::from_json(
            r#"{ "ingredients": [
                { "name": "Milk", "aisle": "Dairy & Eggs", "unit": "l" },
                { "name": "Seaweed", "aisle": "Ocean", "unit": "g" }
            ] }"#,
        )
        .unwrap();
        assert_eq!(
            doc.into_catalog().unwrap_err(),
            DomainError::not_found("ingredient #2: aisle 'Ocean'")
        );
    }

    #[test]
    fn missing_required_field_is_a_validation_error() {
        let err = CatalogDocument::from_json(r#"{ "ingredients": [{ "name": "Milk" }] }"#).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.starts_with("invalid catalog document")));
    }

    #[test]
    fn quantity_input_accepts_numbers_and_text() {
        let values: Vec<QuantityInput> = serde_json::from_str(r#"[2, "0,5", "lots"]"#).unwrap();
        assert_eq!(values[0].resolve(), Ok(2.0));
        assert_eq!(values[1].resolve(), Ok(0.5));
        assert!(values[2].resolve().is_err());
        assert!(QuantityInput::from(-1.0).resolve().is_err());
    }
}
