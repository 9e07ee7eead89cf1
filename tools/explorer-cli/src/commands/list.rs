//! Paginated listing command.

use anyhow::Result;
use explorer_core::search::QueryState;

use super::{render, ListArgs, ListingArgs};
use crate::context::Context;

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    show_listing(QueryState::new(), &args.listing, ctx).await
}

/// Open a listing on `state` with the shared listing flags, wait for it to
/// load and render it.
pub async fn show_listing(state: QueryState, args: &ListingArgs, ctx: &Context) -> Result<()> {
    let mut controller = ctx.listing(args.width)?;
    if let Some(sort) = args.sort {
        controller.set_sort(sort);
    }

    let mut state = state.with_page_size(ctx.config.listing.page_size)?;
    state.set_page(args.page)?;

    let spinner = ctx.output.spinner("Loading products...");
    controller.navigate(state);
    controller.settle().await;
    spinner.finish_and_clear();

    render::listing_notifications(ctx, &mut controller);
    render::listing(ctx, &controller)
}
