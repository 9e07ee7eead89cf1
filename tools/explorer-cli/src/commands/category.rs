//! Category listing command.

use anyhow::Result;
use explorer_core::search::{CategoryFilter, QueryState};

use super::list::show_listing;
use super::CategoryArgs;
use crate::context::Context;

/// Run the category command.
pub async fn run(args: CategoryArgs, ctx: &Context) -> Result<()> {
    let mut state = QueryState::new();
    state.set_category(CategoryFilter::parse(&args.slug));
    show_listing(state, &args.listing, ctx).await
}
