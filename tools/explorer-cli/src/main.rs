//! Explorer CLI - Browse a product catalog from the terminal.
//!
//! Commands:
//! - `explorer list` - Paginated product listing
//! - `explorer search` - Free-text search
//! - `explorer category` - Products in one category
//! - `explorer categories` - List category tags
//! - `explorer show` - Product details
//! - `explorer browse` - Interactive browsing session
//! - `explorer config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use explorer_observability::init_logging;

use commands::{BrowseArgs, CategoryArgs, ConfigArgs, ListArgs, SearchArgs, ShowArgs};

/// Explorer CLI - Browse, search and inspect catalog products
#[derive(Parser)]
#[command(name = "explorer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products page by page
    List(ListArgs),

    /// Search products by free text
    Search(SearchArgs),

    /// List every product in a category
    Category(CategoryArgs),

    /// List category tags
    Categories,

    /// Show a single product
    Show(ShowArgs),

    /// Browse the catalog interactively
    Browse(BrowseArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let logging = &ctx.config.logging;
    let level = if cli.verbose {
        logging.level.more_verbose()
    } else {
        logging.level
    };
    if let Err(e) = init_logging(logging.format, level) {
        ctx.output.warn(&format!("Logging disabled: {}", e));
    }

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Category(args) => commands::category::run(args, &ctx).await,
        Commands::Categories => commands::categories::run(&ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        tracing::error!(error = %format!("{:#}", e), "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
