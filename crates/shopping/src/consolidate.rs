//! Consolidator: merge demand lines sharing a merge key.
//!
//! Rules:
//! - quantities of one key are summed, never rounded or clamped
//! - aisle fields come from the first line seen for the key
//! - notes agree or vanish: one distinct non-empty note survives, two or more
//!   distinct notes leave the line without a note
//! - output is sorted by aisle name, then item name, both case-insensitive

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::line::{ConsolidatedLine, DemandLine, MergeKey};

/// Merge `lines` into one [`ConsolidatedLine`] per distinct `(item_name, unit)`.
///
/// Total over any input, including an empty one. Quantities, notes and the
/// returned order do not depend on input order; only the aisle of a key whose
/// lines disagree on aisle does (first seen wins, with a warning).
pub fn consolidate<I>(lines: I) -> Vec<ConsolidatedLine>
where
    I: IntoIterator<Item = DemandLine>,
{
    let mut accumulators: HashMap<MergeKey, Accumulator> = HashMap::new();
    let mut line_count = 0usize;

    for line in lines {
        line_count += 1;
        match accumulators.entry(line.merge_key()) {
            Entry::Vacant(slot) => {
                slot.insert(Accumulator::start(line));
            }
            Entry::Occupied(mut slot) => slot.get_mut().fold(line),
        }
    }

    let mut consolidated: Vec<ConsolidatedLine> = accumulators
        .into_iter()
        .map(|(key, acc)| acc.finish(key))
        .collect();
    consolidated.sort_by_cached_key(display_key);

    tracing::debug!(
        lines = line_count,
        consolidated = consolidated.len(),
        "consolidated demand lines"
    );
    consolidated
}

/// Case-insensitive `(aisle, item)`, then exact aisle, exact item and unit
/// as tie-breaks so the order is total.
fn display_key(line: &ConsolidatedLine) -> (String, String, String, String, String) {
    (
        line.aisle_name.to_lowercase(),
        line.item_name.to_lowercase(),
        line.aisle_name.clone(),
        line.item_name.clone(),
        line.unit.clone(),
    )
}

#[derive(Debug)]
struct Accumulator {
    aisle_name: String,
    aisle_order: i64,
    quantities: Vec<f64>,
    note: NoteVerdict,
}

impl Accumulator {
    fn start(line: DemandLine) -> Self {
        Self {
            aisle_name: line.aisle_name,
            aisle_order: line.aisle_order,
            quantities: vec![line.quantity],
            note: NoteVerdict::Unset.fold(line.note),
        }
    }

    fn fold(&mut self, line: DemandLine) {
        if line.aisle_name != self.aisle_name || line.aisle_order != self.aisle_order {
            tracing::warn!(
                item = %line.item_name,
                unit = %line.unit,
                kept_aisle = %self.aisle_name,
                ignored_aisle = %line.aisle_name,
                "demand lines disagree on aisle; keeping the first one seen"
            );
        }
        self.quantities.push(line.quantity);
        self.note = std::mem::take(&mut self.note).fold(line.note);
    }

    fn finish(mut self, key: MergeKey) -> ConsolidatedLine {
        // Addition order is fixed by value so the sum is bit-identical for
        // every permutation of the input.
        self.quantities.sort_by(f64::total_cmp);
        let quantity: f64 = self.quantities.iter().sum();

        ConsolidatedLine {
            item_name: key.item_name,
            aisle_name: self.aisle_name,
            aisle_order: self.aisle_order,
            unit: key.unit,
            quantity,
            note: self.note.into_note(),
        }
    }
}

/// Running note decision for one merge key. `Conflicted` is absorbing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum NoteVerdict {
    #[default]
    Unset,
    Agreed(String),
    Conflicted,
}

impl NoteVerdict {
    fn fold(self, incoming: Option<String>) -> Self {
        // Absent and empty notes carry no opinion.
        let Some(incoming) = incoming.filter(|note| !note.is_empty()) else {
            return self;
        };
        match self {
            NoteVerdict::Unset => NoteVerdict::Agreed(incoming),
            NoteVerdict::Agreed(current) if current == incoming => NoteVerdict::Agreed(current),
            NoteVerdict::Agreed(_) | NoteVerdict::Conflicted => NoteVerdict::Conflicted,
        }
    }

    fn into_note(self) -> Option<String> {
        match self {
            NoteVerdict::Agreed(note) => Some(note),
            NoteVerdict::Unset | NoteVerdict::Conflicted => None,
        }
    }
}
