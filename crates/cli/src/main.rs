use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use grocer_cli::{Args, PlanDocument, build_shopping_list, render};

fn main() -> Result<()> {
    let args = Args::parse();
    grocer_observability::init(args.log_format);

    let payload = fs::read_to_string(&args.plan)
        .with_context(|| format!("failed to read plan {}", args.plan.display()))?;
    let plan = PlanDocument::from_json(&payload)?;

    let groups = build_shopping_list(&plan, args.aisle_order)?;
    let options = args.render_options();
    let output = render(&groups, &options)?;

    match args.output_path(&options) {
        Some(path) => {
            fs::write(&path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), format = ?options.format, "wrote shopping list");
        }
        None => {
            std::io::stdout()
                .write_all(output.as_bytes())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}
