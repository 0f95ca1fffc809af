//! Catalog and demand-line producer.
//!
//! This crate is the validation boundary in front of the consolidation core:
//! raw text and documents become catalog entries, selections become
//! [`grocer_shopping::DemandLine`]s. Everything past this point assumes
//! well-formed input.

pub mod aisle;
pub mod catalog;
pub mod document;
pub mod filter;
pub mod ingredient;
pub mod input;
pub mod manual;
pub mod producer;
pub mod recipe;
pub mod season;
pub mod selection;

pub use aisle::{Aisle, Unit};
pub use catalog::Catalog;
pub use document::{CatalogDocument, QuantityInput};
pub use filter::{IngredientFilter, RecipeFilter};
pub use ingredient::{Ingredient, NewIngredient};
pub use input::parse_quantity;
pub use manual::{ManualEntry, ManualItem};
pub use producer::demand_lines;
pub use recipe::{Difficulty, NewRecipe, NewRecipeIngredient, Recipe, RecipeIngredient};
pub use season::Season;
pub use selection::{ManualItemId, ShoppingSelection};
