use std::fmt::Write;

use grocer_shopping::AisleGroup;

use crate::quantity::format_quantity;

/// Nested text view: one header per aisle, one indented row per item.
///
/// ```text
/// Produce
///   - Onion: 2 pc (chopped)
///   - Tomato: 5 pc
/// ```
pub fn render_tree(groups: &[AisleGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(out, "{}", group.aisle_name);
        for item in &group.items {
            let _ = write!(
                out,
                "  - {}: {} {}",
                item.item_name,
                format_quantity(item.quantity),
                item.unit
            );
            if let Some(note) = &item.note {
                let _ = write!(out, " ({note})");
            }
            out.push('\n');
        }
    }
    out
}
