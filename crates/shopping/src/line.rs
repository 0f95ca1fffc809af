use serde::{Deserialize, Serialize};

/// One required quantity of one item, from one source (a recipe ingredient
/// or a manual entry).
///
/// Built once by the producer boundary, which is responsible for validating
/// it: `quantity` is finite and `> 0`, `item_name` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandLine {
    pub item_name: String,
    pub aisle_name: String,
    /// Physical position of the aisle in the store.
    pub aisle_order: i64,
    pub unit: String,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DemandLine {
    pub fn new(
        item_name: impl Into<String>,
        unit: impl Into<String>,
        quantity: f64,
        aisle_name: impl Into<String>,
        aisle_order: i64,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            aisle_name: aisle_name.into(),
            aisle_order,
            unit: unit.into(),
            quantity,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn merge_key(&self) -> MergeKey {
        MergeKey {
            item_name: self.item_name.clone(),
            unit: self.unit.clone(),
        }
    }
}

/// All demand lines sharing a merge key, folded into one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedLine {
    pub item_name: String,
    pub aisle_name: String,
    pub aisle_order: i64,
    pub unit: String,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ConsolidatedLine {
    pub fn merge_key(&self) -> MergeKey {
        MergeKey {
            item_name: self.item_name.clone(),
            unit: self.unit.clone(),
        }
    }
}

/// Feeding a consolidated list back in is allowed; it consolidates to itself.
impl From<ConsolidatedLine> for DemandLine {
    fn from(line: ConsolidatedLine) -> Self {
        Self {
            item_name: line.item_name,
            aisle_name: line.aisle_name,
            aisle_order: line.aisle_order,
            unit: line.unit,
            quantity: line.quantity,
            note: line.note,
        }
    }
}

/// Identity of a purchasable item: exact `(item_name, unit)`.
///
/// Case-sensitive and untrimmed. Quantities in different units are never
/// combined, so `("Flour", "g")` and `("Flour", "kg")` stay separate lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MergeKey {
    pub item_name: String,
    pub unit: String,
}
