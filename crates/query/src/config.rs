//! Table configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pagination::PageSize;

pub const PAGE_SIZE_ENV: &str = "STOCKBOARD_PAGE_SIZE";
pub const BADGE_THRESHOLD_ENV: &str = "STOCKBOARD_BADGE_THRESHOLD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse table config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid table config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Page size a freshly mounted table starts with.
    pub default_page_size: PageSize,
    /// Sizes offered by the page-size selector (advisory).
    pub page_size_options: Vec<PageSize>,
    /// Badges collapse to "N Selected" at this many selections.
    pub badge_collapse_threshold: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: PageSize::DEFAULT,
            page_size_options: [4, 6, 8, 10, 15, 20]
                .into_iter()
                .filter_map(PageSize::new)
                .collect(),
            badge_collapse_threshold: 3,
        }
    }
}

impl TableConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `STOCKBOARD_PAGE_SIZE` / `STOCKBOARD_BADGE_THRESHOLD`.
    ///
    /// Unusable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = TableConfig::default();

        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            match raw.trim().parse::<usize>().ok().and_then(PageSize::new) {
                Some(size) => config.default_page_size = size,
                None => tracing::warn!(
                    value = %raw,
                    "{PAGE_SIZE_ENV} is not a positive integer; using default"
                ),
            }
        }

        if let Some(raw) = lookup(BADGE_THRESHOLD_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.badge_collapse_threshold = n,
                _ => tracing::warn!(
                    value = %raw,
                    "{BADGE_THRESHOLD_ENV} is not a positive integer; using default"
                ),
            }
        }

        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size_options.is_empty() {
            return Err(ConfigError::Invalid("page_size_options cannot be empty".to_string()));
        }
        if self.badge_collapse_threshold == 0 {
            return Err(ConfigError::Invalid(
                "badge_collapse_threshold must be at least 1".to_string(),
            ));
        }
        if !self.page_size_options.contains(&self.default_page_size) {
            tracing::debug!(
                default = self.default_page_size.get(),
                "default page size is not among the selectable options"
            );
        }
        Ok(())
    }
}
