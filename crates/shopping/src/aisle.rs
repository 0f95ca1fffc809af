//! Aisle grouper: bucket consolidated lines by aisle name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::line::ConsolidatedLine;

/// One aisle of the shopping list with its lines, in consolidator order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AisleGroup {
    pub aisle_name: String,
    pub items: Vec<ConsolidatedLine>,
}

impl AisleGroup {
    /// Lowest `aisle_order` among the lines. Buckets are keyed by name only,
    /// so lines carrying different historical orders for one name collapse here.
    pub fn rank(&self) -> i64 {
        self.items
            .iter()
            .map(|line| line.aisle_order)
            .min()
            .unwrap_or_default()
    }
}

/// How aisle buckets are ordered on the list.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AisleOrdering {
    /// Case-insensitive aisle name.
    #[default]
    Name,
    /// Store position (`aisle_order`), then name.
    Rank,
}

impl core::fmt::Display for AisleOrdering {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AisleOrdering::Name => f.write_str("name"),
            AisleOrdering::Rank => f.write_str("rank"),
        }
    }
}

impl core::str::FromStr for AisleOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(AisleOrdering::Name),
            "rank" => Ok(AisleOrdering::Rank),
            other => Err(format!(
                "unknown aisle ordering '{other}' (expected 'name' or 'rank')"
            )),
        }
    }
}

/// Group lines by aisle name, aisles in case-insensitive name order.
pub fn group_by_aisle<I>(lines: I) -> Vec<AisleGroup>
where
    I: IntoIterator<Item = ConsolidatedLine>,
{
    group_by_aisle_with(lines, AisleOrdering::Name)
}

/// Group lines by aisle name, aisles ordered per `ordering`.
///
/// Buckets are keyed by exact `aisle_name`; lines keep their input order
/// inside a bucket.
pub fn group_by_aisle_with<I>(lines: I, ordering: AisleOrdering) -> Vec<AisleGroup>
where
    I: IntoIterator<Item = ConsolidatedLine>,
{
    let mut groups: Vec<AisleGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for line in lines {
        match index.get(&line.aisle_name) {
            Some(&slot) => groups[slot].items.push(line),
            None => {
                index.insert(line.aisle_name.clone(), groups.len());
                groups.push(AisleGroup {
                    aisle_name: line.aisle_name.clone(),
                    items: vec![line],
                });
            }
        }
    }

    match ordering {
        AisleOrdering::Name => {
            groups.sort_by_cached_key(|g| (g.aisle_name.to_lowercase(), g.aisle_name.clone()));
        }
        AisleOrdering::Rank => {
            groups.sort_by_cached_key(|g| {
                (g.rank(), g.aisle_name.to_lowercase(), g.aisle_name.clone())
            });
        }
    }

    tracing::debug!(aisles = groups.len(), %ordering, "grouped shopping list by aisle");
    groups
}
