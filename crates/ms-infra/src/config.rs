//! Configuration loading: optional TOML file merged with environment
//! overrides. The file holds non-secret defaults; secrets normally arrive
//! through the environment (after `dotenvy` has loaded any `.env` file).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::debug;
use serde::Deserialize;

use ms_core::config::{AppConfig, CatalogConfig, SearchConfig, TrendingConfig};

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TRENDING_COLLECTION: &str = "search_trends";
pub const DEFAULT_TRENDING_LIMIT: usize = 5;
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// TOML file shape. Everything is optional; merging decides the outcome.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    catalog: FileCatalog,

    #[serde(default)]
    trending: FileTrending,

    #[serde(default)]
    search: FileSearch,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileCatalog {
    base_url: Option<String>,
    bearer_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileTrending {
    base_url: Option<String>,
    api_key: Option<String>,
    collection: Option<String>,
    limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSearch {
    debounce_ms: Option<u64>,
}

/// Environment overrides, gathered once so merging stays a pure function.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub tmdb_base_url: Option<String>,
    pub tmdb_token: Option<String>,
    pub trending_base_url: Option<String>,
    pub trending_api_key: Option<String>,
    pub trending_collection: Option<String>,
    pub trending_limit: Option<String>,
    pub debounce_ms: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            tmdb_base_url: var("MOVIESCOUT_TMDB_BASE_URL"),
            tmdb_token: var("MOVIESCOUT_TMDB_TOKEN"),
            trending_base_url: var("MOVIESCOUT_TRENDING_BASE_URL"),
            trending_api_key: var("MOVIESCOUT_TRENDING_API_KEY"),
            trending_collection: var("MOVIESCOUT_TRENDING_COLLECTION"),
            trending_limit: var("MOVIESCOUT_TRENDING_LIMIT"),
            debounce_ms: var("MOVIESCOUT_DEBOUNCE_MS"),
        }
    }
}

/// Default config file location: `<config dir>/moviescout/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("moviescout").join("config.toml"))
}

/// Load the configuration from the config file and the process environment.
/// `MOVIESCOUT_CONFIG` names an explicit file that must exist; otherwise the
/// default path is used when present.
pub fn load() -> Result<AppConfig> {
    if let Some(path) = std::env::var("MOVIESCOUT_CONFIG").ok().filter(|v| !v.is_empty()) {
        return load_from(Path::new(&path));
    }
    let file = match default_config_path() {
        Some(path) if path.exists() => read_file(&path)?,
        _ => FileConfig::default(),
    };
    merge(file, EnvOverrides::from_env())
}

/// Load from an explicit file path plus the process environment.
pub fn load_from(path: &Path) -> Result<AppConfig> {
    merge(read_file(path)?, EnvOverrides::from_env())
}

pub fn read_file(path: &Path) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read config file failed: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parse config file failed: {}", path.display()))
}

/// Merge file and environment into the resolved config. Environment wins
/// over the file; the file wins over built-in defaults. The catalog bearer
/// token is the one required value. Trending is enabled only when both its
/// base URL and API key are present.
pub fn merge(file: FileConfig, env: EnvOverrides) -> Result<AppConfig> {
    let bearer_token = match env.tmdb_token.or(file.catalog.bearer_token) {
        Some(token) => token,
        None => bail!(
            "catalog bearer token is not configured; set MOVIESCOUT_TMDB_TOKEN \
             or catalog.bearer_token in the config file"
        ),
    };

    let catalog = CatalogConfig {
        base_url: env
            .tmdb_base_url
            .or(file.catalog.base_url)
            .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string()),
        bearer_token,
    };

    let trending_base_url = env.trending_base_url.or(file.trending.base_url);
    let trending_api_key = env.trending_api_key.or(file.trending.api_key);
    let trending = match (trending_base_url, trending_api_key) {
        (Some(base_url), Some(api_key)) => {
            let limit = match env.trending_limit {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("invalid MOVIESCOUT_TRENDING_LIMIT: {:?}", raw))?,
                None => file.trending.limit.unwrap_or(DEFAULT_TRENDING_LIMIT),
            };
            Some(TrendingConfig {
                base_url,
                api_key,
                collection: env
                    .trending_collection
                    .or(file.trending.collection)
                    .unwrap_or_else(|| DEFAULT_TRENDING_COLLECTION.to_string()),
                limit,
            })
        }
        _ => {
            debug!("trending store not configured; trending panel disabled");
            None
        }
    };

    let debounce_ms = match env.debounce_ms {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid MOVIESCOUT_DEBOUNCE_MS: {:?}", raw))?,
        None => file.search.debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
    };

    Ok(AppConfig {
        catalog,
        trending,
        search: SearchConfig { debounce_ms },
    })
}
