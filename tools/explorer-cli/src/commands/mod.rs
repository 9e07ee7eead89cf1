//! CLI command implementations.

pub mod browse;
pub mod categories;
pub mod category;
pub mod config;
pub mod list;
pub mod render;
pub mod search;
pub mod show;

use clap::{Args, Subcommand};
use explorer_core::search::SortOption;

/// Viewport width assumed for grid layout, in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Arguments shared by the listing commands.
#[derive(Args)]
pub struct ListingArgs {
    /// Page to show (1-indexed).
    #[arg(short, long, default_value = "1")]
    pub page: u32,

    /// Sort order (title-asc, title-desc, price-asc, price-desc).
    #[arg(short, long)]
    pub sort: Option<SortOption>,

    /// Viewport width in pixels, used to pick the grid column count.
    #[arg(short, long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub width: u32,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub listing: ListingArgs,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text.
    pub query: String,

    #[command(flatten)]
    pub listing: ListingArgs,
}

/// Arguments for the category command.
#[derive(Args)]
pub struct CategoryArgs {
    /// Category slug (see `explorer categories`).
    pub slug: String,

    #[command(flatten)]
    pub listing: ListingArgs,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: u64,

    /// Gallery image to select (0-indexed).
    #[arg(short, long)]
    pub image: Option<usize>,

    /// Quantity to order, clamped to stock.
    #[arg(short, long)]
    pub quantity: Option<u32>,

    /// Add the product to the cart.
    #[arg(long)]
    pub add_to_cart: bool,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Viewport width in pixels, used to pick the grid column count.
    #[arg(short, long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub width: u32,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// Write JSON instead of TOML.
        #[arg(long)]
        json_format: bool,
    },
    /// Validate the config file.
    Validate,
}
