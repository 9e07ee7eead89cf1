//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use explorer_core::search::SortOption;
use explorer_data::{TimeoutConfig, DEFAULT_BASE_URL};
use explorer_observability::{LogFormat, LogLevel};
use explorer_runtime::ListingConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Catalog API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Listing view configuration.
    #[serde(default)]
    pub listing: ListingSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl ExplorerConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text. The format is chosen by the path's extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Check the config. Returns `(errors, warnings)`.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        match url::Url::parse(&self.api.base_url) {
            Ok(url) if url.cannot_be_a_base() => {
                errors.push(format!("api.base_url '{}' cannot be a base URL", self.api.base_url))
            }
            Ok(url) if url.scheme() != "https" => warnings.push(format!(
                "api.base_url '{}' does not use https",
                self.api.base_url
            )),
            Ok(_) => {}
            Err(e) => errors.push(format!("api.base_url '{}' is invalid: {}", self.api.base_url, e)),
        }

        if self.api.timeout_ms == 0 {
            errors.push("api.timeout_ms must be positive".to_string());
        }

        if self.listing.page_size == 0 {
            errors.push("listing.page_size must be positive".to_string());
        } else if self.listing.page_size > 100 {
            warnings.push(format!(
                "listing.page_size {} is larger than the API usually serves",
                self.listing.page_size
            ));
        }

        if let Err(e) = self.listing.default_sort.parse::<SortOption>() {
            errors.push(format!("listing.default_sort: {}", e));
        }

        (errors, warnings)
    }

    /// HTTP timeouts for the catalog client.
    pub fn timeouts(&self) -> TimeoutConfig {
        TimeoutConfig::from_total(Duration::from_millis(self.api.timeout_ms))
    }

    /// Listing controller settings for a viewport width.
    pub fn listing_config(&self, viewport_width: u32) -> Result<ListingConfig> {
        let sort = self
            .listing
            .default_sort
            .parse::<SortOption>()
            .context("Invalid listing.default_sort")?;

        Ok(ListingConfig {
            page_size: self.listing.page_size,
            debounce: Duration::from_millis(self.listing.debounce_ms),
            sort,
            viewport_width,
        })
    }
}

/// Catalog API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Listing view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSection {
    /// Products per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Search debounce window in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Initial sort token (title-asc, title-desc, price-asc, price-desc).
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

fn default_page_size() -> u32 {
    explorer_core::search::DEFAULT_PAGE_SIZE
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_sort() -> String {
    SortOption::default().as_str().to_string()
}

impl Default for ListingSection {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            default_sort: default_sort(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Output format: human or json.
    #[serde(default)]
    pub format: LogFormat,

    /// Minimum level when `RUST_LOG` is unset.
    #[serde(default)]
    pub level: LogLevel,
}

/// Generate a default explorer.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Product Explorer configuration

[api]
base_url = "{base_url}"
timeout_ms = {timeout_ms}

[listing]
page_size = {page_size}
debounce_ms = {debounce_ms}
# title-asc, title-desc, price-asc or price-desc
default_sort = "{sort}"

[logging]
# human or json; RUST_LOG overrides level
format = "human"
level = "warn"
"#,
        base_url = DEFAULT_BASE_URL,
        timeout_ms = default_timeout_ms(),
        page_size = default_page_size(),
        debounce_ms = default_debounce_ms(),
        sort = default_sort(),
    )
}
