//! Terminal rendering for listing and detail views.

use anyhow::Result;
use console::style;
use explorer_core::catalog::{category_label, Product};
use explorer_core::detail::ProductDetail;
use explorer_core::layout::partition;
use explorer_core::search::{FetchMode, PageWindow, Pagination};
use explorer_data::CatalogApi;
use explorer_runtime::{DetailController, ListingController};
use serde::Serialize;

use crate::context::Context;
use crate::output::{price_cell, rating_cell, stock_badge, truncate};

const ROW_WIDTHS: [usize; 5] = [6, 40, 24, 6, 14];

#[derive(Serialize)]
struct ListingView<'a> {
    mode: &'static str,
    search: &'a str,
    category: &'a str,
    sort: &'static str,
    columns: usize,
    pagination: Pagination,
    page_window: PageWindow,
    rows: Vec<&'a [Product]>,
    remainder: &'a [Product],
}

/// Print the listing's queued notifications.
pub fn listing_notifications<A: CatalogApi + 'static>(
    ctx: &Context,
    controller: &mut ListingController<A>,
) {
    for notification in controller.take_notifications() {
        ctx.output.notification(&notification);
    }
}

/// Print the detail view's queued notifications.
pub fn detail_notifications<A: CatalogApi>(ctx: &Context, controller: &mut DetailController<A>) {
    for notification in controller.take_notifications() {
        ctx.output.notification(&notification);
    }
}

/// Render the visible products as a grid of full rows plus a partial row.
pub fn listing<A: CatalogApi + 'static>(ctx: &Context, controller: &ListingController<A>) -> Result<()> {
    let items = controller.visible_products();
    let grid = partition(&items, controller.column_count())?;
    let pagination = controller.pagination();
    let state = controller.state();
    let mode = state.mode();

    if ctx.output.is_json() {
        ctx.output.json(&ListingView {
            mode: mode.name(),
            search: state.search_query(),
            category: state.category().as_str(),
            sort: controller.sort().as_str(),
            columns: grid.columns,
            pagination,
            page_window: pagination.page_window(),
            rows: grid.rows().collect(),
            remainder: grid.remainder,
        });
        return Ok(());
    }

    ctx.output.header(&title(&mode));
    ctx.output.kv("sort", controller.sort().display_name());
    ctx.output.kv("columns", &grid.columns.to_string());

    if items.is_empty() {
        ctx.output.info("");
        ctx.output.info("No products found");
        if mode.is_search() || !state.category().is_all() {
            ctx.output.info("Try a different search or category.");
        }
        return Ok(());
    }

    println!();
    ctx.output.table_row(&["ID", "TITLE", "PRICE", "RATING", "STOCK"], &ROW_WIDTHS);
    for (i, row) in grid.rows().enumerate() {
        println!("  {}", style(format!("row {}", i + 1)).dim());
        for product in row {
            product_row(ctx, product);
        }
    }
    if grid.has_remainder() {
        println!("  {}", style("partial row").dim());
        for product in grid.remainder {
            product_row(ctx, product);
        }
    }

    println!();
    if let FetchMode::Category { .. } = mode {
        ctx.output.info(&format!("Showing {} of {}", items.len(), pagination.total));
    } else {
        ctx.output.info(&format!(
            "Showing {}-{} of {}",
            pagination.start_item(),
            pagination.end_item(),
            pagination.total
        ));
    }
    if pagination.is_paginated() {
        ctx.output.info(&page_bar(&pagination));
    }

    Ok(())
}

fn title(mode: &FetchMode) -> String {
    match mode {
        FetchMode::Search { query } => format!("Search results for \"{}\"", query),
        FetchMode::Category { slug } => format!("Category: {}", category_label(slug)),
        FetchMode::Paginated { .. } => "All products".to_string(),
    }
}

fn product_row(ctx: &Context, product: &Product) {
    ctx.output.table_row(
        &[
            &product.id.to_string(),
            &truncate(&product.title, ROW_WIDTHS[1]),
            &price_cell(product),
            &rating_cell(product.rating),
            &stock_badge(product.stock),
        ],
        &ROW_WIDTHS,
    );
}

/// Page buttons, e.g. `‹ 1 2 [3] 4 5 … ›`.
pub fn page_bar(pagination: &Pagination) -> String {
    let window = pagination.page_window();
    let mut parts = Vec::with_capacity(window.pages.len() + 3);

    parts.push(if pagination.has_prev { "‹".to_string() } else { " ".to_string() });
    for page in &window.pages {
        if *page == pagination.page {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    if window.trailing_ellipsis {
        parts.push("…".to_string());
    }
    parts.push(if pagination.has_next { "›".to_string() } else { " ".to_string() });

    parts.join(" ")
}

#[derive(Serialize)]
struct DetailView<'a> {
    product: &'a Product,
    selected_image: usize,
    displayed_image: &'a str,
    quantity: u32,
    discounted_price: f64,
    line_total: f64,
}

/// Render a product with its selection state.
pub fn detail(ctx: &Context, detail: &ProductDetail) {
    let product = detail.product();

    if ctx.output.is_json() {
        ctx.output.json(&DetailView {
            product,
            selected_image: detail.selected_image(),
            displayed_image: detail.displayed_image(),
            quantity: detail.quantity(),
            discounted_price: product.discounted_price(),
            line_total: detail.line_total(),
        });
        return;
    }

    ctx.output.header(&product.title);
    if !product.brand.is_empty() {
        ctx.output.kv("brand", &product.brand);
    }
    ctx.output.kv("category", &category_label(&product.category));
    ctx.output.kv("price", &price_cell(product));
    ctx.output.kv("rating", &rating_cell(product.rating));
    ctx.output.kv("stock", &stock_badge(product.stock));

    ctx.output.info("");
    ctx.output.kv("image", detail.displayed_image());
    for (i, image) in product.images.iter().enumerate() {
        let marker = if i == detail.selected_image() { "*" } else { " " };
        ctx.output.list_item(&format!("{} [{}] {}", marker, i, image));
    }

    if !product.description.is_empty() {
        ctx.output.info("");
        ctx.output.info(&product.description);
    }

    ctx.output.info("");
    ctx.output.kv("quantity", &detail.quantity().to_string());
    ctx.output.kv("total", &Product::price_display(detail.line_total()));
}
