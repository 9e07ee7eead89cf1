//! Category tag listing.

use anyhow::Result;
use explorer_core::catalog::category_label;
use serde::Serialize;

use crate::commands::DEFAULT_VIEWPORT_WIDTH;
use crate::context::Context;

#[derive(Serialize)]
struct CategoryEntry<'a> {
    slug: &'a str,
    label: String,
}

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let mut controller = ctx.listing(DEFAULT_VIEWPORT_WIDTH)?;

    let spinner = ctx.output.spinner("Loading categories...");
    let categories = controller.load_categories().await;
    spinner.finish_and_clear();

    let entries: Vec<CategoryEntry<'_>> = categories
        .iter()
        .map(|slug| CategoryEntry {
            slug,
            label: category_label(slug),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&entries);
        return Ok(());
    }

    ctx.output.header("Categories");
    if entries.is_empty() {
        ctx.output.warn("No categories available.");
        return Ok(());
    }

    ctx.output.list_item(&format!("{:28} {}", "all", "All Categories"));
    for entry in &entries {
        ctx.output.list_item(&format!("{:28} {}", entry.slug, entry.label));
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} categories", entries.len()));

    Ok(())
}
