//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use explorer_data::HttpCatalogClient;
use explorer_runtime::{DetailController, ListingController};
use tracing::{debug, warn};

use crate::config::ExplorerConfig;
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["explorer.toml", ".explorer.toml", "explorer.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ExplorerConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (ExplorerConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (ExplorerConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(ExplorerConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match ExplorerConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => warn!(path = %config_path.display(), error = %e, "skipping unreadable config"),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Catalog client for the configured API.
    pub fn client(&self) -> Result<Arc<HttpCatalogClient>> {
        let client = HttpCatalogClient::with_timeouts(&self.config.api.base_url, self.config.timeouts())
            .with_context(|| format!("Invalid api.base_url: {}", self.config.api.base_url))?;
        debug!(base_url = %client.base_url(), timeout_ms = self.config.api.timeout_ms, "catalog client ready");
        self.output.debug(&format!("Catalog API: {}", client.base_url()));
        Ok(Arc::new(client))
    }

    /// Listing controller for a viewport width in pixels.
    pub fn listing(&self, viewport_width: u32) -> Result<ListingController<HttpCatalogClient>> {
        let config = self.config.listing_config(viewport_width)?;
        debug!(
            page_size = config.page_size,
            debounce_ms = config.debounce.as_millis() as u64,
            sort = %config.sort,
            viewport_width,
            "listing controller"
        );
        ListingController::new(self.client()?, config).context("Invalid listing configuration")
    }

    /// Detail controller.
    pub fn detail(&self) -> Result<DetailController<HttpCatalogClient>> {
        Ok(DetailController::new(self.client()?))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(base_url: &str) -> Context {
        let mut config = ExplorerConfig::default();
        config.api.base_url = base_url.to_string();
        Context {
            config,
            config_path: None,
            output: Output::new(false, true),
            cwd: PathBuf::from("/tmp"),
        }
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let ctx = context("http://localhost:9000/");
        let client = ctx.client().unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:9000/");
    }

    #[test]
    fn test_client_rejects_invalid_base_url() {
        let err = context("not a url").client().unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid api.base_url"));
    }

    #[tokio::test]
    async fn test_listing_uses_configured_page_size() {
        let mut ctx = context("http://localhost:9000/");
        ctx.config.listing.page_size = 12;
        let listing = ctx.listing(1280).unwrap();
        assert_eq!(listing.state().page_size(), 12);
    }

    #[test]
    fn test_resolve_path() {
        let ctx = context("http://localhost:9000/");
        assert_eq!(ctx.resolve_path("a.toml"), PathBuf::from("/tmp/a.toml"));
        assert_eq!(ctx.resolve_path("/etc/a.toml"), PathBuf::from("/etc/a.toml"));
    }
}
