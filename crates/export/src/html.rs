//! Printable HTML checklist.
//!
//! Check state lives in the browser's `localStorage` under
//! `shopping-list-{list_id}-{index}`. Indexes run across the whole document,
//! so they are unique per list.

use askama::Template;
use chrono::NaiveDate;

use grocer_shopping::AisleGroup;

use crate::error::ExportResult;
use crate::quantity::format_quantity;

/// Identifier of one printed list; scopes its stored check state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListId(String);

impl ListId {
    /// One list per day: `2024-01-02`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `localStorage` key of the item at `index`.
    pub fn storage_key(&self, index: usize) -> String {
        format!("shopping-list-{}-{index}", self.0)
    }
}

impl core::fmt::Display for ListId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: "Shopping List".to_string(),
        }
    }
}

/// File name for an exported list: `shopping-list-2024-01-02.html`.
pub fn export_file_name(list_id: &ListId) -> String {
    format!("shopping-list-{list_id}.html")
}

#[derive(Template)]
#[template(path = "shopping_list.html")]
struct ShoppingListPage<'a> {
    title: &'a str,
    list_id: &'a str,
    sections: Vec<SectionView<'a>>,
}

struct SectionView<'a> {
    aisle_name: &'a str,
    items: Vec<ItemView<'a>>,
}

struct ItemView<'a> {
    index: usize,
    label: String,
    /// Empty when the line has no note.
    note: &'a str,
}

/// Render the grouped list as a standalone HTML document. All list text
/// is HTML-escaped.
pub fn render_html(list_id: &ListId, groups: &[AisleGroup], options: &HtmlOptions) -> ExportResult<String> {
    let mut index = 0usize;
    let sections = groups
        .iter()
        .map(|group| SectionView {
            aisle_name: &group.aisle_name,
            items: group
                .items
                .iter()
                .map(|item| {
                    let view = ItemView {
                        index,
                        label: format!(
                            "{} - {} {}",
                            item.item_name,
                            format_quantity(item.quantity),
                            item.unit
                        ),
                        note: item.note.as_deref().unwrap_or_default(),
                    };
                    index += 1;
                    view
                })
                .collect(),
        })
        .collect();

    let page = ShoppingListPage {
        title: &options.title,
        list_id: list_id.as_str(),
        sections,
    };
    let html = page.render()?;

    tracing::debug!(list_id = %list_id, items = index, bytes = html.len(), "rendered html export");
    Ok(html)
}
