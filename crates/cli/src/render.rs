//! Output formats of the driver.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;

use grocer_export::{HtmlOptions, ListId, export_file_name, render_html, render_tree};
use grocer_shopping::AisleGroup;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented text, one block per aisle.
    #[default]
    Tree,
    /// Printable checklist page.
    Html,
    /// The aisle groups as JSON.
    Json,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub list_id: ListId,
    pub html: HtmlOptions,
}

impl RenderOptions {
    pub fn new(format: OutputFormat, list_date: NaiveDate) -> Self {
        Self {
            format,
            list_id: ListId::for_date(list_date),
            html: HtmlOptions::default(),
        }
    }

    /// File name used when the output target is a directory.
    pub fn file_name(&self) -> String {
        match self.format {
            OutputFormat::Html => export_file_name(&self.list_id),
            OutputFormat::Tree => format!("shopping-list-{}.txt", self.list_id),
            OutputFormat::Json => format!("shopping-list-{}.json", self.list_id),
        }
    }
}

pub fn render(groups: &[AisleGroup], options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Tree => Ok(render_tree(groups)),
        OutputFormat::Html => {
            render_html(&options.list_id, groups, &options.html).context("failed to render html list")
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(groups).context("failed to serialize list")?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_shopping::{DemandLine, consolidate, group_by_aisle};

    fn options(format: OutputFormat) -> RenderOptions {
        RenderOptions::new(format, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
    }

    fn groups() -> Vec<AisleGroup> {
        group_by_aisle(consolidate(vec![
            DemandLine::new("Tomato", "pc", 2.0, "Produce", 1),
            DemandLine::new("Tomato", "pc", 1.5, "Produce", 1),
        ]))
    }

    #[test]
    fn file_names_follow_format_and_date() {
        assert_eq!(options(OutputFormat::Html).file_name(), "shopping-list-2024-03-09.html");
        assert_eq!(options(OutputFormat::Tree).file_name(), "shopping-list-2024-03-09.txt");
        assert_eq!(options(OutputFormat::Json).file_name(), "shopping-list-2024-03-09.json");
    }

    #[test]
    fn renders_each_format() {
        let groups = groups();
        assert_eq!(
            render(&groups, &options(OutputFormat::Tree)).unwrap(),
            "Produce\n  - Tomato: 3.5 pc\n"
        );
        assert!(render(&groups, &options(OutputFormat::Html)).unwrap().contains("2024-03-09"));

        let json = render(&groups, &options(OutputFormat::Json)).unwrap();
        let parsed: Vec<AisleGroup> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, groups);
    }
}
