//! Manually entered shopping items.

use serde::{Deserialize, Serialize};

use grocer_core::{DomainError, DomainResult};
use grocer_shopping::DemandLine;

use crate::catalog::Catalog;
use crate::document::QuantityInput;
use crate::input::{optional_text, required_text};

/// A manual item as typed by the user.
///
/// `unit` and `aisle` only matter when `name` does not match a catalog
/// ingredient; a match always takes the ingredient's unit and aisle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualEntry {
    pub name: String,
    pub quantity: QuantityInput,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub aisle: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// A validated manual item, ready to become a demand line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub aisle_name: String,
    pub aisle_order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ManualEntry {
    pub fn new(name: impl Into<String>, quantity: impl Into<QuantityInput>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: None,
            aisle: None,
            note: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_aisle(mut self, aisle: impl Into<String>) -> Self {
        self.aisle = Some(aisle.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Validate against the catalog.
    ///
    /// Free-text unit and aisle are canonicalized when the catalog knows
    /// them (`"Gram"` becomes `"g"`, `"produce"` becomes `"Produce"`) so
    /// the item merges with recipe lines; unknown ones are kept as typed and
    /// the aisle sorts as `0`.
    pub fn resolve(&self, catalog: &Catalog) -> DomainResult<ManualItem> {
        let name = required_text("item name", &self.name)?;
        let quantity = self.quantity.resolve()?;
        let note = optional_text(self.note.as_deref());

        if let Some(ingredient) = catalog.ingredient_by_name(&name) {
            return Ok(ManualItem {
                name,
                quantity,
                unit: ingredient.unit.clone(),
                aisle_name: ingredient.aisle.name.clone(),
                aisle_order: ingredient.aisle.sort_order,
                note,
            });
        }

        let (Some(unit), Some(aisle)) = (
            optional_text(self.unit.as_deref()),
            optional_text(self.aisle.as_deref()),
        ) else {
            return Err(DomainError::validation(format!(
                "'{name}' is not in the catalog; choose a unit and an aisle"
            )));
        };

        let unit = catalog
            .unit_by_name(&unit)
            .map(|known| known.abbreviation.clone())
            .unwrap_or(unit);
        let (aisle_name, aisle_order) = match catalog.aisle_by_name(&aisle) {
            Some(known) => (known.name.clone(), known.sort_order),
            None => (aisle, 0),
        };

        Ok(ManualItem {
            name,
            quantity,
            unit,
            aisle_name,
            aisle_order,
            note,
        })
    }
}

impl From<&ManualItem> for DemandLine {
    fn from(item: &ManualItem) -> Self {
        DemandLine {
            item_name: item.name.clone(),
            aisle_name: item.aisle_name.clone(),
            aisle_order: item.aisle_order,
            unit: item.unit.clone(),
            quantity: item.quantity,
            note: item.note.clone(),
        }
    }
}
