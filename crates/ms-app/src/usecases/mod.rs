mod fetch_movies;
mod load_trending;
mod record_search;

pub use fetch_movies::FetchMovies;
pub use load_trending::LoadTrending;
pub use record_search::RecordSearch;
