//! Interactive browsing session.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use explorer_core::catalog::category_label;
use explorer_core::search::{CategoryFilter, SortOption};
use explorer_data::HttpCatalogClient;
use explorer_runtime::{DetailController, ListingController};

use super::{render, BrowseArgs};
use crate::context::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    NextPage,
    PrevPage,
    GoToPage,
    Search,
    Category,
    Sort,
    Show,
    Quit,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::NextPage => "Next page",
            Action::PrevPage => "Previous page",
            Action::GoToPage => "Go to page...",
            Action::Search => "Search...",
            Action::Category => "Filter by category...",
            Action::Sort => "Sort...",
            Action::Show => "Show product...",
            Action::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailAction {
    PrevImage,
    NextImage,
    More,
    Less,
    AddToCart,
    Back,
}

impl DetailAction {
    fn label(&self) -> &'static str {
        match self {
            DetailAction::PrevImage => "Previous image",
            DetailAction::NextImage => "Next image",
            DetailAction::More => "Quantity +1",
            DetailAction::Less => "Quantity -1",
            DetailAction::AddToCart => "Add to cart",
            DetailAction::Back => "Back to listing",
        }
    }
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive and does not support --json");
    }

    let mut listing = ctx.listing(args.width)?;
    let mut detail = ctx.detail()?;

    listing.load_categories().await;
    listing.start();

    loop {
        let spinner = ctx.output.spinner("Loading products...");
        listing.settle().await;
        spinner.finish_and_clear();

        render::listing_notifications(ctx, &mut listing);
        render::listing(ctx, &listing)?;
        println!();

        let actions = listing_actions(&listing);
        let labels: Vec<&str> = actions.iter().map(Action::label).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            Action::NextPage => {
                listing.next_page();
            }
            Action::PrevPage => {
                listing.prev_page();
            }
            Action::GoToPage => {
                let page: u32 = Input::new()
                    .with_prompt("Page")
                    .with_initial_text(listing.state().page().to_string())
                    .interact_text()?;
                if let Err(e) = listing.set_page(page) {
                    ctx.output.warn(&e.to_string());
                }
            }
            Action::Search => {
                let query: String = Input::new()
                    .with_prompt("Search products (empty to clear)")
                    .with_initial_text(listing.state().search_query())
                    .allow_empty(true)
                    .interact_text()?;
                listing.set_search_query(query);
            }
            Action::Category => {
                let category = pick_category(&listing)?;
                listing.set_category(category);
            }
            Action::Sort => {
                let labels: Vec<&str> = SortOption::ALL.iter().map(SortOption::display_name).collect();
                let current = SortOption::ALL
                    .iter()
                    .position(|s| *s == listing.sort())
                    .unwrap_or(0);
                let choice = Select::new()
                    .with_prompt("Sort by")
                    .items(&labels)
                    .default(current)
                    .interact()?;
                listing.set_sort(SortOption::ALL[choice]);
            }
            Action::Show => {
                let products = listing.visible_products();
                let labels: Vec<String> = products
                    .iter()
                    .map(|p| format!("{} ({})", p.title, p.id))
                    .collect();
                let choice = Select::new()
                    .with_prompt("Product")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                browse_detail(ctx, &mut detail, products[choice].id).await?;
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

fn listing_actions(listing: &ListingController<HttpCatalogClient>) -> Vec<Action> {
    let pagination = listing.pagination();
    let mut actions = Vec::new();

    if pagination.has_next {
        actions.push(Action::NextPage);
    }
    if pagination.has_prev {
        actions.push(Action::PrevPage);
    }
    if pagination.is_paginated() {
        actions.push(Action::GoToPage);
    }
    actions.push(Action::Search);
    if !listing.categories().is_empty() {
        actions.push(Action::Category);
    }
    actions.push(Action::Sort);
    if !listing.visible_products().is_empty() {
        actions.push(Action::Show);
    }
    actions.push(Action::Quit);

    actions
}

fn pick_category(listing: &ListingController<HttpCatalogClient>) -> Result<CategoryFilter> {
    let categories = listing.categories();
    let mut labels = vec!["All Categories".to_string()];
    labels.extend(categories.iter().map(|slug| category_label(slug)));

    let current = match listing.state().category() {
        CategoryFilter::All => 0,
        CategoryFilter::Slug(slug) => categories
            .iter()
            .position(|c| c == slug)
            .map_or(0, |i| i + 1),
    };

    let choice = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(current)
        .interact()?;

    Ok(match choice {
        0 => CategoryFilter::All,
        i => CategoryFilter::Slug(categories[i - 1].clone()),
    })
}

async fn browse_detail(
    ctx: &Context,
    controller: &mut DetailController<HttpCatalogClient>,
    id: u64,
) -> Result<()> {
    let spinner = ctx.output.spinner(&format!("Loading product {}...", id));
    controller.load(id).await;
    spinner.finish_and_clear();

    loop {
        render::detail_notifications(ctx, controller);
        let Some(detail) = controller.detail_mut() else {
            return Ok(());
        };
        render::detail(ctx, detail);
        println!();

        let image_count = detail.product().images.len();
        let mut actions = Vec::new();
        if detail.selected_image() > 0 {
            actions.push(DetailAction::PrevImage);
        }
        if detail.selected_image() + 1 < image_count {
            actions.push(DetailAction::NextImage);
        }
        if detail.can_increment() {
            actions.push(DetailAction::More);
        }
        if detail.can_decrement() {
            actions.push(DetailAction::Less);
        }
        if detail.product().in_stock() {
            actions.push(DetailAction::AddToCart);
        }
        actions.push(DetailAction::Back);

        let labels: Vec<&str> = actions.iter().map(DetailAction::label).collect();
        let choice = Select::new()
            .with_prompt("Product actions")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            DetailAction::PrevImage => {
                let index = detail.selected_image() - 1;
                detail.select_image(index);
            }
            DetailAction::NextImage => {
                let index = detail.selected_image() + 1;
                detail.select_image(index);
            }
            DetailAction::More => detail.increment(),
            DetailAction::Less => detail.decrement(),
            DetailAction::AddToCart => {
                controller.add_to_cart();
            }
            DetailAction::Back => return Ok(()),
        }
    }
}
