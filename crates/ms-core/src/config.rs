//! Application configuration domain model.
//!
//! Pure data only: these structs are filled in by the infrastructure layer
//! (TOML file + environment overrides) and carried through construction.
//! No loading, validation, or default-resolution logic lives here.

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogConfig,

    /// Trending store access; `None` disables the trending panel entirely.
    pub trending: Option<TrendingConfig>,

    pub search: SearchConfig,
}

/// Remote movie catalog access.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API root, e.g. `https://api.themoviedb.org/3`.
    pub base_url: String,

    /// Bearer token sent on every catalog request.
    pub bearer_token: String,
}

/// Remote trending document store access.
#[derive(Debug, Clone)]
pub struct TrendingConfig {
    pub base_url: String,
    pub api_key: String,

    /// Collection holding one document per search term.
    pub collection: String,

    /// How many entries the trending panel shows.
    pub limit: usize,
}

/// Search input handling.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Idle window before the raw query settles and a fetch is issued.
    pub debounce_ms: u64,
}
