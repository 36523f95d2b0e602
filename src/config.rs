use crate::filter::MatchTables;
use crate::model::{ConfigError, FilterCriteria};
use crate::normalizer::split_search_query;
use serde::Deserialize;
use std::fs;

/// A named search the watcher runs every cycle.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub name: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub search_tags: Vec<String>,
    /// Free-text alternative to `search_tags`, split on commas.
    #[serde(default)]
    pub query: Option<String>,
    /// Matched against listing titles and descriptions.
    #[serde(default)]
    pub query_text: Option<String>,
}

impl SearchConfig {
    pub fn criteria(&self) -> FilterCriteria {
        let search_tags = match (&self.query, self.search_tags.is_empty()) {
            (Some(query), true) => split_search_query(query),
            _ => self.search_tags.clone(),
        };

        let non_blank = |value: &Option<String>| {
            value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
        };

        FilterCriteria {
            tag: non_blank(&self.tag),
            max_price: self.max_price,
            search_tags,
            text: non_blank(&self.query_text),
        }
    }
}

fn default_check_interval() -> u64 {
    300
}

fn default_request_timeout() -> u64 {
    10
}

fn default_detail_limit() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub listings_file: Option<String>,
    #[serde(default)]
    pub home_location: Option<String>,
    #[serde(default = "default_check_interval")]
    pub check_interval_seconds: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// How many top matches per search get their detail page fetched.
    #[serde(default = "default_detail_limit")]
    pub detail_limit: usize,
    #[serde(default)]
    pub searches: Vec<SearchConfig>,
    #[serde(default)]
    pub tables: Option<MatchTables>,
}

impl AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        match (&self.api_base_url, &self.listings_file) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::Invalid(
                    "set either api_base_url or listings_file, not both".into(),
                ));
            }
            (None, None) => {
                return Err(ConfigError::Invalid(
                    "one of api_base_url or listings_file is required".into(),
                ));
            }
            _ => {}
        }
        if self.check_interval_seconds == 0 {
            return Err(ConfigError::Invalid("check_interval_seconds must be > 0".into()));
        }
        if let Some(search) = self.searches.iter().find(|s| s.max_price.is_some_and(|p| p < 0.0)) {
            return Err(ConfigError::Invalid(format!(
                "search '{}' has a negative max_price",
                search.name
            )));
        }
        Ok(())
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}
