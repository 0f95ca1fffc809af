//! Plan documents: a catalog plus the recipes and manual items to shop for.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use grocer_catalog::{CatalogDocument, ManualEntry, ShoppingSelection, demand_lines};
use grocer_core::DomainError;
use grocer_shopping::{AisleGroup, AisleOrdering, consolidate, group_by_aisle_with};

/// ```json
/// {
///   "catalog": { "ingredients": [...], "recipes": [...] },
///   "recipes": ["Tomato soup"],
///   "manual_items": [{ "name": "Candles", "quantity": 2, "unit": "pc", "aisle": "Household" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanDocument {
    #[serde(default)]
    pub catalog: CatalogDocument,
    /// Selected recipes, by exact name.
    #[serde(default)]
    pub recipes: Vec<String>,
    #[serde(default)]
    pub manual_items: Vec<ManualEntry>,
}

impl PlanDocument {
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).context("invalid plan document")
    }
}

/// Load the catalog, resolve the selection and produce the grouped list.
///
/// A recipe named twice is selected once.
pub fn build_shopping_list(plan: &PlanDocument, ordering: AisleOrdering) -> Result<Vec<AisleGroup>> {
    let catalog = plan
        .catalog
        .clone()
        .into_catalog()
        .context("failed to load catalog")?;

    let mut selection = ShoppingSelection::new();
    for name in &plan.recipes {
        let recipe = catalog
            .recipe_by_name(name.trim())
            .ok_or_else(|| DomainError::not_found(format!("recipe '{}'", name.trim())))
            .context("failed to select recipes")?;
        if !selection.add_recipe(recipe.id) {
            tracing::debug!(recipe = %recipe.name, "recipe already selected");
        }
    }
    for (index, entry) in plan.manual_items.iter().enumerate() {
        let item = entry
            .resolve(&catalog)
            .with_context(|| format!("manual item #{}", index + 1))?;
        selection.add_manual_item(item);
    }

    let lines = demand_lines(&catalog, &selection).context("failed to assemble demand lines")?;
    let demand = lines.len();
    let groups = group_by_aisle_with(consolidate(lines), ordering);

    tracing::info!(
        recipes = selection.recipe_ids().len(),
        demand_lines = demand,
        aisles = groups.len(),
        items = groups.iter().map(|group| group.items.len()).sum::<usize>(),
        %ordering,
        "built shopping list"
    );
    Ok(groups)
}
