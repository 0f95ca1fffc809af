//! `grocer-core`: shared domain building blocks.
//!
//! Pure domain primitives only: error model, identifiers and the catalog entry
//! contract. Nothing here performs IO.

pub mod entry;
pub mod error;
pub mod id;

pub use entry::CatalogEntry;
pub use error::{DomainError, DomainResult};
pub use id::{IngredientId, RecipeId};
