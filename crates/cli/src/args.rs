use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Parser;

use grocer_observability::LogFormat;
use grocer_shopping::AisleOrdering;

use crate::render::{OutputFormat, RenderOptions};

/// Command-line arguments for grocer
#[derive(Parser, Debug)]
#[command(name = "grocer")]
#[command(about = "Build an aisle-grouped shopping list from recipes and manual items")]
#[command(version)]
pub struct Args {
    /// Plan document (JSON: catalog, selected recipes, manual items)
    #[arg(short, long, env = "GROCER_PLAN")]
    pub plan: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree, env = "GROCER_FORMAT")]
    pub format: OutputFormat,

    /// Aisle order on the list: `name` or `rank` (store position)
    #[arg(long, default_value = "name", env = "GROCER_AISLE_ORDER")]
    pub aisle_order: AisleOrdering,

    /// Date identifying the list (YYYY-MM-DD); defaults to today (UTC)
    #[arg(long)]
    pub list_date: Option<NaiveDate>,

    /// Title of the HTML page
    #[arg(long, default_value = "Shopping List")]
    pub title: String,

    /// Write to this file, or into this directory, instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log format: `json` or `text`
    #[arg(long, default_value = "json", env = "GROCER_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Args {
    pub fn render_options(&self) -> RenderOptions {
        let date = self.list_date.unwrap_or_else(|| Utc::now().date_naive());
        let mut options = RenderOptions::new(self.format, date);
        options.html.title = self.title.clone();
        options
    }

    /// Resolved output file, if any.
    pub fn output_path(&self, options: &RenderOptions) -> Option<PathBuf> {
        self.output.as_ref().map(|path| {
            if path.is_dir() {
                path.join(options.file_name())
            } else {
                path.clone()
            }
        })
    }
}
