//! Shopping list consolidation engine.
//!
//! Turns a multiset of demand lines (one per ingredient occurrence, across
//! recipes and manual entries) into a deterministic, aisle-grouped list.
//! Everything here is a pure, synchronous transform over owned values:
//! no IO, no shared state, no errors.

pub mod aisle;
pub mod consolidate;
pub mod line;

pub use aisle::{AisleGroup, AisleOrdering, group_by_aisle, group_by_aisle_with};
pub use consolidate::consolidate;
pub use line::{ConsolidatedLine, DemandLine, MergeKey};
