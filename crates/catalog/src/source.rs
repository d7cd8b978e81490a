//! Catalog data sources.

use data_loader::{sample_movies, MovieRecord};
use tracing::info;

/// An already-materialized collection of movies.
///
/// The service only reads from a source; loading, sorting, or fetching the
/// data is the source's own business.
pub trait CatalogSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// Every movie in the catalog, in catalog order
    fn movies(&self) -> &[MovieRecord];
}

/// A catalog held in memory
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    name: String,
    movies: Vec<MovieRecord>,
}

impl InMemoryCatalog {
    pub fn new(name: impl Into<String>, movies: Vec<MovieRecord>) -> Self {
        let name = name.into();
        info!("Catalog '{}' holds {} movies", name, movies.len());
        Self { name, movies }
    }

    /// The built-in demo catalog
    pub fn sample() -> Self {
        Self::new("sample", sample_movies())
    }
}

impl CatalogSource for InMemoryCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }
}
