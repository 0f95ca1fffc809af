//! What the user wants to shop for: recipes plus manual items.

use serde::{Deserialize, Serialize};

use grocer_core::RecipeId;

use crate::manual::ManualItem;

/// Handle of a manual item within one selection, e.g. `manual-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManualItemId(u64);

impl core::fmt::Display for ManualItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "manual-{}", self.0)
    }
}

/// Selected recipes (ordered, no duplicates) and manual items (insertion
/// order). Removing an item never frees its id for reuse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingSelection {
    recipe_ids: Vec<RecipeId>,
    manual_items: Vec<(ManualItemId, ManualItem)>,
    next_manual_id: u64,
}

impl ShoppingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the recipe was already selected.
    pub fn add_recipe(&mut self, id: RecipeId) -> bool {
        if self.recipe_ids.contains(&id) {
            return false;
        }
        self.recipe_ids.push(id);
        true
    }

    /// Returns `false` if the recipe was not selected.
    pub fn remove_recipe(&mut self, id: RecipeId) -> bool {
        let before = self.recipe_ids.len();
        self.recipe_ids.retain(|selected| *selected != id);
        self.recipe_ids.len() != before
    }

    pub fn add_manual_item(&mut self, item: ManualItem) -> ManualItemId {
        let id = ManualItemId(self.next_manual_id);
        self.next_manual_id += 1;
        self.manual_items.push((id, item));
        id
    }

    pub fn remove_manual_item(&mut self, id: ManualItemId) -> Option<ManualItem> {
        let slot = self.manual_items.iter().position(|(item_id, _)| *item_id == id)?;
        Some(self.manual_items.remove(slot).1)
    }

    pub fn recipe_ids(&self) -> &[RecipeId] {
        &self.recipe_ids
    }

    pub fn manual_items(&self) -> impl Iterator<Item = (ManualItemId, &ManualItem)> {
        self.manual_items.iter().map(|(id, item)| (*id, item))
    }

    pub fn is_empty(&self) -> bool {
        self.recipe_ids.is_empty() && self.manual_items.is_empty()
    }
}
