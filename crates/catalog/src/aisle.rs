use serde::{Deserialize, Serialize};

/// Store aisle. `sort_order` is its physical position, lowest first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Aisle {
    pub name: String,
    pub sort_order: i64,
}

/// Unit of measure, e.g. `gram` / `g`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub abbreviation: String,
}

/// Aisles a fresh catalog starts with.
pub const DEFAULT_AISLES: [(&str, i64); 8] = [
    ("Produce", 1),
    ("Meat & Seafood", 2),
    ("Dairy & Eggs", 3),
    ("Bakery", 4),
    ("Pantry", 5),
    ("Frozen", 6),
    ("Household", 7),
    ("Other", 8),
];

/// Units a fresh catalog starts with, `(name, abbreviation)`.
pub const DEFAULT_UNITS: [(&str, &str); 8] = [
    ("piece", "pc"),
    ("gram", "g"),
    ("kilogram", "kg"),
    ("milliliter", "ml"),
    ("liter", "l"),
    ("teaspoon", "tsp"),
    ("tablespoon", "tbsp"),
    ("cup", "cup"),
];
