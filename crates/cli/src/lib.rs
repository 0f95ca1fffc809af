//! `grocer` driver: plan document in, rendered shopping list out.

pub mod args;
pub mod plan;
pub mod render;

pub use args::Args;
pub use plan::{PlanDocument, build_shopping_list};
pub use render::{OutputFormat, RenderOptions, render};
