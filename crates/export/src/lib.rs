//! Renderers for a grouped shopping list: a plain-text tree and a
//! self-contained HTML checklist.

pub mod error;
pub mod html;
pub mod quantity;
pub mod tree;

pub use error::{ExportError, ExportResult};
pub use html::{HtmlOptions, ListId, export_file_name, render_html};
pub use quantity::format_quantity;
pub use tree::render_tree;
