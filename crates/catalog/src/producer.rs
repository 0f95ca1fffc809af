//! Demand-line producer: selection + catalog → demand lines.

use grocer_core::{DomainError, DomainResult};
use grocer_shopping::DemandLine;

use crate::catalog::Catalog;
use crate::selection::ShoppingSelection;

/// Expand a selection into demand lines.
///
/// One line per recipe-ingredient association (selected recipes in
/// selection order, ingredients in recipe order), then one line per manual
/// item. Quantities are the stored ones; nothing is scaled.
pub fn demand_lines(catalog: &Catalog, selection: &ShoppingSelection) -> DomainResult<Vec<DemandLine>> {
    let mut lines = Vec::new();

    for recipe_id in selection.recipe_ids() {
        let recipe = catalog
            .recipe(*recipe_id)
            .ok_or_else(|| DomainError::not_found(format!("recipe {recipe_id}")))?;

        for entry in &recipe.ingredients {
            let ingredient = catalog.ingredient(entry.ingredient_id).ok_or_else(|| {
                DomainError::invariant(format!(
                    "recipe '{}' references missing ingredient {}",
                    recipe.name, entry.ingredient_id
                ))
            })?;
            lines.push(DemandLine {
                item_name: ingredient.name.clone(),
                aisle_name: ingredient.aisle.name.clone(),
                aisle_order: ingredient.aisle.sort_order,
                unit: ingredient.unit.clone(),
                quantity: entry.quantity,
                note: entry.note.clone(),
            });
        }
    }

    lines.extend(selection.manual_items().map(|(_, item)| DemandLine::from(item)));

    tracing::debug!(
        recipes = selection.recipe_ids().len(),
        lines = lines.len(),
        "assembled demand lines"
    );
    Ok(lines)
}
