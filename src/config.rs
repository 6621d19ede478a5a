//! Optional start-up configuration read from `config.toml`.
//!
//! Every field has a default, so a missing file or a partial file is fine. The
//! configuration only seeds the initial view; nothing is ever written back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::fields::{Filter, Priority, SortKey, Status};
use crate::view::ViewQuery;

/// Error type for loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value in [view]: {0}")]
    View(#[from] crate::fields::FieldError),
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Initial search, filter and sort criteria. Filters accept "all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_all")]
    pub status: String,
    #[serde(default = "default_all")]
    pub priority: String,
    #[serde(default = "default_sort")]
    pub sort: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            search: String::new(),
            status: default_all(),
            priority: default_all(),
            sort: default_sort(),
        }
    }
}

fn default_all() -> String {
    "all".to_string()
}

fn default_sort() -> String {
    SortKey::DueDate.as_str().to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Start with the sample tasks instead of an empty board.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig { seed: true }
    }
}

impl ViewConfig {
    /// Build the initial `ViewQuery`.
    ///
    /// Unknown filter values are errors; an unknown sort key falls back to
    /// insertion order.
    pub fn to_query(&self) -> Result<ViewQuery, ConfigError> {
        let mut query = ViewQuery::new();
        query.set_search(self.search.clone());
        query.set_status_filter(self.status.parse::<Filter<Status>>()?);
        query.set_priority_filter(self.priority.parse::<Filter<Priority>>()?);
        let sort = SortKey::parse_lenient(&self.sort);
        if sort == SortKey::Insertion && !self.sort.trim().eq_ignore_ascii_case("insertion") {
            warn!(sort = %self.sort, "unknown sort key, keeping insertion order");
        }
        query.set_sort(sort);
        Ok(query)
    }
}

impl Config {
    /// Parse a configuration document.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_toml(&text, path)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

/// Default config location: `~/.taskflow/config.toml`.
pub fn default_config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".taskflow").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Config {
        Config::from_toml(text, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = parse("");
        assert_eq!(config, Config::default());
        assert!(config.store.seed);
        assert_eq!(config.view.to_query().unwrap(), ViewQuery::new());
    }

    #[test]
    fn test_view_section() {
        let config = parse(
            r#"
[view]
search = "api"
status = "review"
priority = "all"
sort = "title"

[store]
seed = false
"#,
        );
        let q = config.view.to_query().unwrap();
        assert_eq!(q.search, "api");
        assert_eq!(q.status, Filter::Only(Status::Review));
        assert_eq!(q.priority, Filter::Any);
        assert_eq!(q.sort, SortKey::Title);
        assert!(!config.store.seed);
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        let config = parse("[view]\nsort = \"assignee\"\n");
        assert_eq!(config.view.to_query().unwrap().sort, SortKey::Insertion);
    }

    #[test]
    fn test_unknown_filter_is_error() {
        let config = parse("[view]\npriority = \"urgent\"\n");
        assert!(matches!(config.view.to_query(), Err(ConfigError::View(_))));
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let err = Config::from_toml("[view\n", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().starts_with("invalid config bad.toml"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load(Path::new("/nonexistent/taskflow/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
