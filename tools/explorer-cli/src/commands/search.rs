//! Free-text search command.

use anyhow::{bail, Result};
use explorer_core::search::QueryState;

use super::list::show_listing;
use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    if args.query.trim().is_empty() {
        bail!("Search text is empty. Use `explorer list` to list all products.");
    }

    let mut state = QueryState::new();
    state.set_search_query(args.query);
    show_listing(state, &args.listing, ctx).await
}
